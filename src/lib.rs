//! Grid snake: a deterministic, frame-driven snake engine.
//!
//! The engine modules (`grid`, `collision`, `fruit`, `snake`, `engine`) have
//! no terminal dependencies. `input`, `renderer`, `ui` and `terminal_runtime`
//! are the terminal collaborators used by the `grid-snake` binary.

pub mod collision;
pub mod config;
pub mod engine;
pub mod error;
pub mod fruit;
pub mod grid;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
