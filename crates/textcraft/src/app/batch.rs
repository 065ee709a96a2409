//! Parallel batch processing
//!
//! Every domain operation is independent across inputs, so batches are
//! spread over rayon's thread pool. Results always come back in input order
//! and equal the sequential results.

use crate::constants::PARALLEL_CHUNK_SIZE;
use crate::domain::digit::{DigitError, delete_digit};
use crate::domain::dns::{DnsStats, count_domain, merge_stats};
use crate::domain::file_names::rename_files;
use crate::domain::vigenere::{CipherError, Operation, VigenereCipheringMachine};
use rayon::prelude::*;

/// Count DNS suffix keys over a large domain list
///
/// Each rayon task folds its share into a partial map; partial maps are
/// merged pairwise. The result equals `get_dns_stats(domains)`.
pub fn get_dns_stats_parallel<S: AsRef<str> + Sync>(domains: &[S]) -> DnsStats {
    let stats = domains
        .par_iter()
        .with_min_len(PARALLEL_CHUNK_SIZE)
        .fold(DnsStats::default, |mut partial, domain| {
            count_domain(&mut partial, domain.as_ref());
            partial
        })
        .reduce(DnsStats::default, |mut left, right| {
            merge_stats(&mut left, right);
            left
        });

    tracing::debug!(
        domains = domains.len(),
        keys = stats.len(),
        "counted DNS suffixes"
    );
    stats
}

/// Rename several independent file lists
///
/// Renaming inside one list is sequential; lists are processed in parallel.
pub fn rename_file_batches<S: AsRef<str> + Sync>(lists: &[Vec<S>]) -> Vec<Vec<String>> {
    tracing::debug!(lists = lists.len(), "renaming file lists");
    lists
        .par_iter()
        .map(|names| rename_files(names.as_slice()))
        .collect()
}

/// Encrypt many messages with the same key
///
/// Fails if any message fails (empty message or invalid key); when several
/// fail, which error is returned is unspecified.
pub fn encrypt_batch<S: AsRef<str> + Sync>(
    machine: &VigenereCipheringMachine,
    messages: &[S],
    key: &str,
) -> Result<Vec<String>, CipherError> {
    process_batch(machine, messages, key, Operation::Encrypt)
}

/// Decrypt many messages with the same key
pub fn decrypt_batch<S: AsRef<str> + Sync>(
    machine: &VigenereCipheringMachine,
    messages: &[S],
    key: &str,
) -> Result<Vec<String>, CipherError> {
    process_batch(machine, messages, key, Operation::Decrypt)
}

fn process_batch<S: AsRef<str> + Sync>(
    machine: &VigenereCipheringMachine,
    messages: &[S],
    key: &str,
    operation: Operation,
) -> Result<Vec<String>, CipherError> {
    tracing::debug!(
        messages = messages.len(),
        direct = machine.is_direct(),
        ?operation,
        "processing cipher batch"
    );
    messages
        .par_iter()
        .with_min_len(PARALLEL_CHUNK_SIZE)
        .map(|message| machine.process(message.as_ref(), key, operation))
        .collect()
}

/// Delete one digit from every number, keeping per-item results
pub fn delete_digit_batch(numbers: &[i64]) -> Vec<Result<u64, DigitError>> {
    numbers
        .par_iter()
        .with_min_len(PARALLEL_CHUNK_SIZE)
        .map(|&n| delete_digit(n))
        .collect()
}
