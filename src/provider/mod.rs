//! Provider tokens: ids, identifier parsing and legacy aliases.

pub mod compat;
pub mod identifier;
pub mod ids;

pub use compat::{DeprecationNotice, LegacyProvider, Rewrite, rewrite_provider};
pub use identifier::{ModelSelection, parse_identifier};
pub use ids::SUPPORTED_PROVIDERS;
