//! # Core Engine Module
//!
//! Shared abstractions the other subsystems depend on.
//!
//! ## Organization
//!
//! - **Config**: Unified configuration system for all engine subsystems
//! - **Foundation**: Low-level utilities (collections, time, logging)
//! - **Assets**: Handle-based resource caches

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;
pub use crate::assets;

// Re-export commonly used config types
pub use config::{
    AssetConfig,
    AudioConfig,
    Config,
    ConfigError,
    EngineConfig,
    InputConfig,
    LoggingConfig,
    TimingConfig,
    WindowConfig,
};
