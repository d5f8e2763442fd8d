//! Falling sand simulation engine.
//!
//! A [`Sandbox`] is a grid of one-byte [`Tile`]s. Each call to
//! [`Sandbox::process`] advances one frame, giving every particle at most one
//! move or transformation.

pub mod config;
pub mod error;
pub mod movement;
pub mod point;
pub mod properties;
pub mod reactions;
pub mod rng;
pub mod sandbox;
mod scheduler;
pub mod tile;
pub mod universe;

pub use config::{SandboxConfig, SizePreset};
pub use error::SandboxError;
pub use point::SandboxPoint;
pub use properties::Properties;
pub use sandbox::Sandbox;
pub use tile::{Tile, TileType};
pub use universe::Universe;
