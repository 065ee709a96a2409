//! DNS hierarchy statistics
//!
//! Counts how often every suffix of the domain hierarchy appears in a list
//! of domains. Keys are built root first: `code.yandex.ru` contributes to
//! `.ru`, `.ru.yandex` and `.ru.yandex.code`.

use crate::constants::DOMAIN_SEPARATOR;

/// Suffix key -> occurrence count
#[cfg(feature = "fx-hash")]
pub type DnsStats = rustc_hash::FxHashMap<String, usize>;

/// Suffix key -> occurrence count
#[cfg(not(feature = "fx-hash"))]
pub type DnsStats = std::collections::HashMap<String, usize>;

/// Count suffix keys for all domains
///
/// Labels are taken literally (no case folding, empty labels kept).
pub fn get_dns_stats<S: AsRef<str>>(domains: &[S]) -> DnsStats {
    let mut stats = DnsStats::default();
    for domain in domains {
        count_domain(&mut stats, domain.as_ref());
    }
    stats
}

/// Add the suffix keys of a single domain to `stats`
pub fn count_domain(stats: &mut DnsStats, domain: &str) {
    let mut key = String::with_capacity(domain.len() + 1);
    for label in domain.rsplit(DOMAIN_SEPARATOR) {
        key.push(DOMAIN_SEPARATOR);
        key.push_str(label);
        *stats.entry(key.clone()).or_insert(0) += 1;
    }
}

/// Add every count of `from` into `into`
pub fn merge_stats(into: &mut DnsStats, from: DnsStats) {
    for (key, count) in from {
        *into.entry(key).or_insert(0) += count;
    }
}

/// Entries ordered by key, for deterministic output
pub fn sorted_stats(stats: &DnsStats) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = stats.iter().map(|(k, &v)| (k.as_str(), v)).collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
}
