//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the engine:
//! - Handle-based collections
//! - Time management and FPS accounting
//! - Logging utilities

pub mod collections;
pub mod time;
pub mod logging;
