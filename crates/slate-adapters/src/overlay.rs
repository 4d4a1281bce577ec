//! Packaged configuration overlay.
//!
//! The store-configuration template ships inside this crate so every
//! installation scaffolds the same `config/shopify.yml`, whether the starter
//! came from a hosted repository or a local directory.

use slate_core::domain::ConfigOverlay;

/// The packaged `shopify.yml` template.
pub const SHOPIFY_CONFIG_TEMPLATE: &str = include_str!("assets/shopify.yml");

/// The overlay copied into every scaffolded theme.
pub fn builtin_overlay() -> ConfigOverlay {
    ConfigOverlay::new(SHOPIFY_CONFIG_TEMPLATE)
}
