//! Configuration: workflow settings and the named aspect ratio registry

pub mod ratio_registry;
mod settings;

pub use self::settings::{Settings, DEFAULT_CONFIG_PATH};
