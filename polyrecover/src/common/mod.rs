//! Common types.

pub mod logger;
