//! Provider registry.
//!
//! - `entry`: [`ProviderAssembler`], [`ProviderRegistry`] and its builder.
//! - `assemblers`: the built-in providers.
//!
//! [`global_registry`] holds the built-in set for the process lifetime.

pub mod assemblers;
pub mod entry;

use std::sync::OnceLock;

pub use entry::{DeprecationHook, ProviderAssembler, ProviderRegistry, ProviderRegistryBuilder};

/// Registry holding every built-in provider, with the process-wide probe.
pub fn builtin_registry() -> ProviderRegistry {
    let mut registry = ProviderRegistry::new();
    for assembler in assemblers::builtin_assemblers() {
        registry.register(assembler);
    }
    registry
}

/// Process-wide default registry, initialized on first use.
pub fn global_registry() -> &'static ProviderRegistry {
    static GLOBAL: OnceLock<ProviderRegistry> = OnceLock::new();
    GLOBAL.get_or_init(|| {
        let registry = builtin_registry();
        tracing::debug!(providers = ?registry.provider_ids(), "global provider registry initialized");
        registry
    })
}
