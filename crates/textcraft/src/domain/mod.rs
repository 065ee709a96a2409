//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and algorithms without I/O dependencies.

pub mod digit;
pub mod dns;
pub mod file_names;
pub mod team;
pub mod vigenere;
