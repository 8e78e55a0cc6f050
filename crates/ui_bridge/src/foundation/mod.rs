//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the bridge:
//! - Math types (vectors, integer rectangles)
//! - Frame timing
//! - Logging utilities

pub mod math;
pub mod time;
pub mod logging;
