//! Utility functions and helpers for the langbridge gateway.
//!
//! - `logging`: Tracing initialization and credential sanitization.

pub mod logging;
