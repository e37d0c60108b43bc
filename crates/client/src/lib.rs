//! Terminal client for the ATB battle simulator.
//!
//! Reads configuration from the environment, loads built-in or on-disk
//! content, asks for a biome and runs one battle with the player on stdin and
//! the seeded AI on the enemy side.
pub mod app;
pub mod config;
pub mod generator;
pub mod input;
pub mod logging;
pub mod render;

pub use app::{Content, Ending};
pub use config::ClientConfig;
pub use input::TerminalActionProvider;
pub use render::TextRenderer;
