// lib.rs - Conway's Game of Life on a bounded, double-buffered grid

pub mod config;
pub mod driver;
pub mod grid;
pub mod life;
pub mod patterns;
pub mod render;
pub mod ui;

pub use config::{Config, ConfigError};
pub use driver::{Command, Driver};
pub use grid::Grid;
pub use life::Life;
pub use patterns::{Pattern, Scene, PATTERNS};
pub use render::{Canvas, Palette, View};
