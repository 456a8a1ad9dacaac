//! Terminal view layer.
//!
//! - [`renderer`]: raw-mode terminal setup and frame flushing
//! - [`grid_view`]: draws the grid and the agent's current cell

pub mod grid_view;
pub mod renderer;

pub use grid_view::GridView;
pub use renderer::TerminalRenderer;
