use std::collections::HashMap;

/// Frequency tables and totals accumulated by a single scan.
///
/// Keys are non-empty tokens; a token that was never observed has no entry.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UrlStats {
    /// Every recognized URL, counted once per domain match.
    pub total_urls: u32,
    pub domains: HashMap<String, u32>,
    pub paths: HashMap<String, u32>,
}
