// src/pipeline.rs
use crate::extractors::{extract_section, parse_accounts};
use crate::report::{
    compose_rows, sort_accounts, tag_accounts, AccountRecord, Bureau, BureauNotice, VerticalRow,
};
use crate::utils::error::ExtractError;

/// Everything one run produces for a single document.
#[derive(Debug, Clone)]
pub struct CreditReport {
    pub bureaus: Vec<Bureau>,
    pub notices: Vec<BureauNotice>,
    /// Accounts parsed across all sections, before open/closed grouping.
    pub parsed_accounts: usize,
    pub records: Vec<AccountRecord>,
    /// Shared by the console view and the spreadsheet export.
    pub rows: Vec<VerticalRow>,
}

/// Runs segmentation, parsing, sorting and composition over one document.
///
/// Missing sections and empty sections are reported as notices; the only
/// error is an empty bureau selection.
pub fn build_report(text: &str, selection: &[Bureau]) -> Result<CreditReport, ExtractError> {
    let mut bureaus: Vec<Bureau> = Vec::with_capacity(selection.len());
    for bureau in selection {
        if !bureaus.contains(bureau) {
            bureaus.push(*bureau);
        }
    }
    if bureaus.is_empty() {
        return Err(ExtractError::EmptySelection);
    }

    let mut notices = Vec::new();
    let mut merged = Vec::new();

    for bureau in &bureaus {
        let Some(section) = extract_section(text, *bureau) else {
            tracing::warn!("{} section not found", bureau);
            notices.push(BureauNotice::SectionNotFound { bureau: *bureau });
            continue;
        };
        tracing::info!("{} section found ({} bytes)", bureau, section.len());

        let accounts = parse_accounts(section);
        notices.push(BureauNotice::SectionFound {
            bureau: *bureau,
            accounts: accounts.len(),
        });
        if accounts.is_empty() {
            tracing::warn!("No accounts found in {} section", bureau);
            notices.push(BureauNotice::NoAccountsFound { bureau: *bureau });
            continue;
        }
        merged.extend(tag_accounts(accounts, *bureau));
    }

    let parsed_accounts = merged.len();
    let records = sort_accounts(merged);
    let rows = compose_rows(&records);
    tracing::info!("Composed {} row(s) for {} account(s)", rows.len(), records.len());

    Ok(CreditReport {
        bureaus,
        notices,
        parsed_accounts,
        records,
        rows,
    })
}

impl CreditReport {
    /// True when at least one section produced an account, even if grouping
    /// left none of them in the summary.
    pub fn has_accounts(&self) -> bool {
        self.parsed_accounts > 0
    }
}
