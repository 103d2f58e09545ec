//! Canine MER Calculator Library
//!
//! Daily energy requirements for dogs from body weight and life stage.

pub mod build_info;
pub mod energy;
pub mod mcp;
pub mod models;
pub mod tools;
