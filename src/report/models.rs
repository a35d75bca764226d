// src/report/models.rs
use serde::Serialize;
use std::fmt;

/// The three credit bureaus whose sections appear in a report.
/// The label text doubles as the section delimiter inside the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[value(rename_all = "lower")]
pub enum Bureau {
    TransUnion,
    Experian,
    Equifax,
}

impl Bureau {
    pub const ALL: [Bureau; 3] = [Bureau::TransUnion, Bureau::Experian, Bureau::Equifax];

    /// The literal text that marks this bureau in a report.
    pub fn label(self) -> &'static str {
        match self {
            Bureau::TransUnion => "TransUnion",
            Bureau::Experian => "Experian",
            Bureau::Equifax => "Equifax",
        }
    }

    /// Every bureau except `self`.
    pub fn others(self) -> impl Iterator<Item = Bureau> {
        Self::ALL.into_iter().filter(move |b| *b != self)
    }
}

impl fmt::Display for Bureau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One account block as captured from a section, before it is tagged with
/// the bureau it was found under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAccount {
    pub creditor: String,
    pub account_type: String,
    pub status: String,
    pub monthly_payment: String,
    pub date_opened: String, // MM/DD/YYYY, MM/YYYY or "N/A"
    pub balance: String,
    pub terms: String,
    pub high_credit: String,
    pub credit_limit: String, // amount or "N/A"
}

impl ParsedAccount {
    pub fn tag(self, bureau: Bureau) -> AccountRecord {
        AccountRecord {
            creditor: self.creditor,
            account_type: self.account_type,
            status: self.status,
            monthly_payment: self.monthly_payment,
            date_opened: self.date_opened,
            balance: self.balance,
            terms: self.terms,
            high_credit: self.high_credit,
            credit_limit: self.credit_limit,
            bureau,
        }
    }
}

/// A credit account attributed to exactly one bureau section.
///
/// Amounts are kept as the strings found in the report (commas removed) so
/// that sentinel values such as "N/A" survive untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub creditor: String,
    pub account_type: String,
    pub status: String,
    pub monthly_payment: String,
    pub date_opened: String,
    pub balance: String,
    pub terms: String,
    pub high_credit: String,
    pub credit_limit: String,
    pub bureau: Bureau,
}

impl AccountRecord {
    pub fn is_open(&self) -> bool {
        self.status.to_lowercase().contains("open")
    }

    pub fn is_closed(&self) -> bool {
        self.status.to_lowercase().contains("closed")
    }

    /// Field name/value pairs in display order.
    pub fn fields(&self) -> [(&'static str, String); 10] {
        [
            ("Creditor", self.creditor.clone()),
            ("Type", self.account_type.clone()),
            ("Status", self.status.clone()),
            ("Monthly Payment", self.monthly_payment.clone()),
            ("Date Opened", self.date_opened.clone()),
            ("Balance", self.balance.clone()),
            ("Terms", self.terms.clone()),
            ("High Credit", self.high_credit.clone()),
            ("Credit Limit", self.credit_limit.clone()),
            ("Bureau", self.bureau.to_string()),
        ]
    }
}

/// Per-bureau outcome reported to the user while a document is processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BureauNotice {
    SectionFound { bureau: Bureau, accounts: usize },
    SectionNotFound { bureau: Bureau },
    NoAccountsFound { bureau: Bureau },
}

impl fmt::Display for BureauNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BureauNotice::SectionFound { bureau, .. } => {
                write!(f, "{} section extracted successfully!", bureau)
            }
            BureauNotice::SectionNotFound { bureau } => {
                write!(f, "Could not find {} section in the uploaded file.", bureau)
            }
            BureauNotice::NoAccountsFound { bureau } => {
                write!(f, "No accounts found in {} section.", bureau)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn others_excludes_self() {
        let others: Vec<Bureau> = Bureau::Experian.others().collect();
        assert_eq!(others, vec![Bureau::TransUnion, Bureau::Equifax]);
    }

    #[test]
    fn status_checks_ignore_case() {
        let mut record = ParsedAccount {
            creditor: "AMEX".into(),
            account_type: "Charge".into(),
            status: "OPEN".into(),
            monthly_payment: "0.00".into(),
            date_opened: "N/A".into(),
            balance: "0.00".into(),
            terms: "0".into(),
            high_credit: "0.00".into(),
            credit_limit: "N/A".into(),
        }
        .tag(Bureau::TransUnion);
        assert!(record.is_open());
        assert!(!record.is_closed());

        record.status = "Paid Closed".into();
        assert!(!record.is_open());
        assert!(record.is_closed());
    }
}
