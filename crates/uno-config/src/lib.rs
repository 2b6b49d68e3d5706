//! # uno-config - typed UnoCSS configuration documents
//!
//! This crate models the configuration object consumed by the UnoCSS
//! utility engine: custom static rules, activated presets, and shortcut
//! class compositions. The engine itself (rule matching, variants, shortcut
//! resolution, stylesheet generation) stays external; this crate builds the
//! document, keeps it ordered and free of duplicate names, and hands it over.
//!
//! ## Quick Start
//!
//! ```rust
//! use uno_config::{Preset, UnoConfig};
//!
//! let config = UnoConfig::builder()
//!     .rule("scrollbar-w-none", [("scrollbar-width", "none")])
//!     .rule("btn-hover", [("color", "white"), ("text-decoration", "underline")])
//!     .preset(Preset::uno())
//!     .shortcut("btn", ["relative", "inline-flex", "hover:btn-hover"])
//!     .build()
//!     .unwrap();
//!
//! let ts = uno_config::render_config_ts(&config).unwrap();
//! assert!(ts.contains("presetUno()"));
//! ```
//!
//! ## Ordering and uniqueness
//!
//! Rules, presets and shortcuts are returned in authoring order, which is
//! the order the engine uses to break ties between competing definitions.
//! A rule name or shortcut name used twice is a
//! [`ConfigError::DuplicateIdentifier`] at build time, never a silent
//! overwrite.
//!
//! ## Files
//!
//! Documents load from and save to JSON or YAML (see [`format`]), and render
//! to the `uno.config.ts` module the engine reads (see [`render_config_ts`]).

mod collection;
mod config;
mod declarations;
mod emit;
mod error;
pub mod format;
mod preset;
mod rule;
mod shortcut;
mod site;

pub use collection::{Named, NamedList};
pub use config::{UnoConfig, UnoConfigBuilder};
pub use declarations::Declarations;
pub use emit::{render_config_ts, write_config_ts};
pub use error::{ConfigError, IdentifierKind, ShortcutError};
pub use format::{load, save, Format};
pub use preset::Preset;
pub use rule::Rule;
pub use shortcut::Shortcut;
pub use site::{site_config, BTN_TOKENS};
