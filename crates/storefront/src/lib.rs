//! `shoegrid-storefront`
//!
//! **Responsibility:** turn catalog shoes into the product grid.
//!
//! This crate provides:
//! - display formatting (`format_price`, `pluralize`)
//! - the card and grid renderers, emitting a renderer-agnostic view tree
//! - HTML serialization of that tree (the `shoegrid` binary)
//! - Leptos components for the browser build (`wasm32` only)

pub mod card;
pub mod config;
pub mod format;
pub mod grid;
pub mod html;
pub mod theme;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use card::ShoeCard;
pub use config::{Config, ConfigError};
pub use format::{format_price, pluralize};
pub use grid::ShoeGrid;
pub use theme::{Theme, ThemeName};
pub use view::{Attributes, Element, Node};

/// Sample catalog used when no file is configured.
pub const SAMPLE_CATALOG: &str = include_str!("../data/shoes.json");
