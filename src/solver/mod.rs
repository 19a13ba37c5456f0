//! The problem-agnostic solver backend.

pub mod constraint;
pub mod constraints;
pub mod engine;
pub mod value;
