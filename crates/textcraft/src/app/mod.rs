//! Application layer - Batch use cases
//!
//! This module runs the domain functions over many independent inputs in parallel.

pub mod batch;
