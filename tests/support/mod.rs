//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::sync::{Mutex, MutexGuard};

use structured_llm::{CapabilityProbe, Instructor, ProviderRegistry, ResolvedClient};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serialize tests that read or write provider environment variables.
pub fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// Restores an environment variable on drop.
pub struct EnvGuard {
    key: &'static str,
    previous: Option<String>,
}

impl EnvGuard {
    pub fn set(key: &'static str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe {
            std::env::set_var(key, value);
        }
        Self { key, previous }
    }

    pub fn remove(key: &'static str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.previous {
            Some(v) => unsafe { std::env::set_var(self.key, v) },
            None => unsafe { std::env::remove_var(self.key) },
        }
    }
}

/// Every environment variable a built-in provider reads.
pub const PROVIDER_ENV: &[&str] = &[
    "OPENAI_API_KEY",
    "OPENAI_BASE_URL",
    "OPENAI_ORG_ID",
    "OPENAI_PROJECT_ID",
    "AZURE_OPENAI_API_KEY",
    "AZURE_OPENAI_ENDPOINT",
    "OPENAI_API_VERSION",
    "ANTHROPIC_API_KEY",
    "ANTHROPIC_BASE_URL",
    "GOOGLE_API_KEY",
    "GOOGLE_CLOUD_PROJECT",
    "GOOGLE_CLOUD_LOCATION",
    "MISTRAL_API_KEY",
    "CO_API_KEY",
    "PERPLEXITY_API_KEY",
    "GROQ_API_KEY",
    "WRITER_API_KEY",
    "AWS_REGION",
    "AWS_DEFAULT_REGION",
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
    "AWS_SESSION_TOKEN",
    "CEREBRAS_API_KEY",
    "FIREWORKS_API_KEY",
    "XAI_API_KEY",
];

/// Clear every provider variable for the guard's lifetime.
pub fn clean_env() -> Vec<EnvGuard> {
    PROVIDER_ENV.iter().map(|k| EnvGuard::remove(k)).collect()
}

/// Built-in registry that treats every dependency as installed.
pub fn registry() -> ProviderRegistry {
    ProviderRegistry::builder()
        .with_builtins()
        .probe(CapabilityProbe::all())
        .build()
}

pub fn instructor(client: &ResolvedClient) -> &Instructor {
    client
        .as_any()
        .downcast_ref::<Instructor>()
        .expect("default adapter produces Instructor clients")
}
