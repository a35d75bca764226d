// src/report/normalize.rs
use crate::report::models::{AccountRecord, Bureau, ParsedAccount};

/// Tags freshly parsed accounts with the bureau whose section they came from.
pub fn tag_accounts(accounts: Vec<ParsedAccount>, bureau: Bureau) -> Vec<AccountRecord> {
    accounts.into_iter().map(|a| a.tag(bureau)).collect()
}

/// Orders records open-first, closed-second, keeping the original order
/// inside each group.
///
/// Grouping is a substring test on the status, so a status matching neither
/// word is dropped, and one matching both lands in both groups.
pub fn sort_accounts(records: Vec<AccountRecord>) -> Vec<AccountRecord> {
    let (open, closed): (Vec<_>, Vec<_>) = (
        records.iter().filter(|r| r.is_open()).cloned().collect(),
        records.iter().filter(|r| r.is_closed()).cloned().collect(),
    );

    let dropped = records
        .iter()
        .filter(|r| !r.is_open() && !r.is_closed())
        .count();
    if dropped > 0 {
        tracing::warn!("{} account(s) are neither open nor closed and were left out", dropped);
    }
    tracing::debug!("Grouped {} open and {} closed account(s)", open.len(), closed.len());

    open.into_iter().chain(closed).collect()
}
