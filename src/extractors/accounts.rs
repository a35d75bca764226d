// src/extractors/accounts.rs

// --- Imports ---
use crate::report::models::{Bureau, ParsedAccount};
use once_cell::sync::Lazy;
use regex::Regex;

// --- Anchors ---
const ACCOUNT_ANCHOR: &str = "Account #:";
const TYPE_ANCHOR: &str = "Account Type:";
const STATUS_ANCHOR: &str = "Account Status:";
// Records without this exact phrase are skipped.
const RECORD_TERMINATOR: &str = "Authorized User";

// --- Regex Patterns (Lazy Static) ---
// Creditor name directly in front of the account number anchor.
static CREDITOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<creditor>[A-Z0-9/& -]+)\s+Account #:")
        .expect("Failed to compile CREDITOR_RE")
});

// The numeric block that follows the status. These fields sit back to back,
// separated only by whitespace.
static NUMERIC_TAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"\s+Monthly Payment: \$(?P<monthly_payment>[\d,.]+)",
        r"\s+Date Opened: (?P<date_opened>\d{2}/\d{2}/\d{4}|\d{2}/\d{4}|N/A)",
        r"\s+Balance: \$(?P<balance>[\d,.]+)",
        r"\s+No\. of Months \(terms\): (?P<terms>\d+)",
        r"\s+High Credit: \$(?P<high_credit>[\d,.]+)",
        r"\s+Credit Limit: \$(?P<credit_limit>[\d,.]+|N/A)",
    ))
    .expect("Failed to compile NUMERIC_TAIL_RE")
});

/// Walks a window of text one literal anchor at a time.
struct AnchorScanner<'a> {
    window: &'a str,
    pos: usize,
}

impl<'a> AnchorScanner<'a> {
    fn new(window: &'a str) -> Self {
        Self { window, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.window[self.pos..]
    }

    /// Moves just past the next occurrence of `anchor`.
    fn skip_past(&mut self, anchor: &str) -> Option<()> {
        let offset = self.rest().find(anchor)?;
        self.pos += offset + anchor.len();
        Some(())
    }

    /// Moves past the first of `labels` that is separated from `anchor` by
    /// whitespace only, and past that anchor. Labels followed by anything
    /// else are stepped over.
    fn skip_past_label_then(&mut self, labels: &[&str], anchor: &str) -> Option<()> {
        loop {
            let rest = self.rest();
            let (offset, len) = labels
                .iter()
                .filter_map(|label| rest.find(label).map(|offset| (offset, label.len())))
                .min_by_key(|(offset, _)| *offset)?;
            self.pos += offset + len;

            let after = self.rest();
            let trimmed = after.trim_start();
            if trimmed.len() < after.len() && trimmed.starts_with(anchor) {
                self.pos += after.len() - trimmed.len() + anchor.len();
                return Some(());
            }
        }
    }

    /// Text from the cursor to the end of the line or to `stop`, whichever
    /// comes first. Does not move the cursor.
    fn peek_line_until(&self, stop: &str) -> &'a str {
        let rest = self.rest();
        let line_end = rest.find('\n').unwrap_or(rest.len());
        let stop_at = rest.find(stop).unwrap_or(rest.len());
        &rest[..line_end.min(stop_at)]
    }
}

/// Parses every account block in a bureau section, left to right.
///
/// Each match consumes its text; the search for the next account resumes
/// right after the previous terminator. Blocks missing an anchor are skipped.
pub fn parse_accounts(section: &str) -> Vec<ParsedAccount> {
    let mut accounts = Vec::new();
    let mut cursor = 0;

    while let Some(head) = CREDITOR_RE.captures(&section[cursor..]) {
        let Some(head_match) = head.get(0) else { break };
        let body_start = cursor + head_match.end();
        let creditor = head["creditor"].trim();

        match scan_record(section, body_start, creditor) {
            Some((account, record_end)) => {
                tracing::debug!("Parsed account '{}' ending at byte {}", account.creditor, record_end);
                accounts.push(account);
                cursor = record_end;
            }
            None => {
                tracing::warn!("Skipping incomplete account block for '{}' at byte {}", creditor, body_start);
                cursor = body_start;
            }
        }
    }

    tracing::info!("Parsed {} account(s) from section ({} bytes)", accounts.len(), section.len());
    accounts
}

/// Scans one account body starting right after its `Account #:` anchor.
/// Returns the account and the byte offset just past its terminator.
fn scan_record(section: &str, body_start: usize, creditor: &str) -> Option<(ParsedAccount, usize)> {
    // A body never reaches into the next account's header.
    let limit = section[body_start..]
        .find(ACCOUNT_ANCHOR)
        .map_or(section.len(), |offset| body_start + offset);
    let mut scanner = AnchorScanner::new(&section[body_start..limit]);

    let labels = Bureau::ALL.map(Bureau::label);
    scanner.skip_past_label_then(&labels, TYPE_ANCHOR)?;
    let account_type = scanner.peek_line_until(STATUS_ANCHOR).trim();

    scanner.skip_past(STATUS_ANCHOR)?;
    let rest = scanner.rest();
    let tail = NUMERIC_TAIL_RE.captures(rest)?;
    let tail_match = tail.get(0)?;
    let status = rest[..tail_match.start()].trim();
    scanner.pos += tail_match.end();

    scanner.skip_past(RECORD_TERMINATOR)?;

    let account = ParsedAccount {
        creditor: creditor.to_string(),
        account_type: account_type.to_string(),
        status: status.to_string(),
        monthly_payment: strip_thousands(&tail["monthly_payment"]),
        date_opened: tail["date_opened"].to_string(),
        balance: strip_thousands(&tail["balance"]),
        terms: tail["terms"].to_string(),
        high_credit: strip_thousands(&tail["high_credit"]),
        credit_limit: strip_thousands(&tail["credit_limit"]),
    };
    Some((account, body_start + scanner.pos))
}

/// Removes thousands separators: "1,234.56" -> "1234.56".
pub fn strip_thousands(amount: &str) -> String {
    amount.replace(',', "")
}
