//! Core data types shared across the analysis and generation layers.

pub mod reflect;
pub mod value;
