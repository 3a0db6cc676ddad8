//! The Core UI playbook: every widget on its own page, with live previews,
//! copyable snippets and props tables.

pub mod app;
pub mod catalog;
pub mod config;
pub mod pages;
pub mod paths;
pub mod showcase;

pub use app::Playbook;
pub use config::{Config, ConfigError};
