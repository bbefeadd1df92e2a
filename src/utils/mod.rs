//! Utility modules for common functionality
//!
//! This module provides the journal logger, progress reporting and path helpers.

pub mod logger;
pub mod progress;
pub mod path_utils;
