//! # Windloom Configuration Library
//!
//! Typed theme configuration for a utility-class CSS generator: the dark-mode
//! strategy, the content globs the generator scans, container settings, and
//! the palette, shadow and radius tokens merged into its defaults.
//!
//! ## Features
//!
//! - Multi-format support (TOML, JSON, YAML)
//! - Validation that reports every violation at once
//! - Layered config files and environment overrides
//! - Content glob matching and project scanning
//! - Rendering to the generator's config module and to CSS custom properties
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use windloom_config::{ConfigLoader, ShadeKey};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigLoader::load_from_file("windloom.toml").await?;
//!     if let Some(color) = config.shade("brand", ShadeKey::S500) {
//!         println!("brand-500 is {}", color);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod container;
mod content;
mod dark_mode;
mod emit;
mod error;
mod loader;
mod palette;
mod tokens;

pub use config::*;
pub use container::*;
pub use content::*;
pub use dark_mode::*;
pub use emit::*;
pub use error::*;
pub use loader::*;
pub use palette::*;
pub use tokens::*;
