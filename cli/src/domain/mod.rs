//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod hub;
pub mod lines;

pub use config::{EditorConfig, HubConfig, InstallerConfig, ProvisionConfig};
pub use error::{ConfigError, ProvisionError};
pub use hub::{editor_install_args, hex_encode};
pub use lines::decode_line;
