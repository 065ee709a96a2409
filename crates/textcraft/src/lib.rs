//! textcraft - Small text and list transformations
//!
//! This crate provides:
//! - Single digit deletion maximizing the remaining number
//! - DNS hierarchy statistics over a domain list
//! - Team name derivation from loosely typed member lists
//! - File name de-duplication with `(k)` suffixes
//! - A direct / reverse Vigenere ciphering machine

pub mod app;
pub mod constants;
pub mod domain;

// Re-export commonly used types
pub use app::batch::{
    decrypt_batch, delete_digit_batch, encrypt_batch, get_dns_stats_parallel,
    rename_file_batches,
};
pub use domain::digit::{DigitError, delete_digit, delete_digit_str};
pub use domain::dns::{DnsStats, get_dns_stats, sorted_stats};
pub use domain::file_names::{FileRenamer, rename_files};
pub use domain::team::{Value, create_dream_team};
pub use domain::vigenere::{CipherError, VigenereCipheringMachine};
