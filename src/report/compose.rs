// src/report/compose.rs
use crate::report::models::AccountRecord;

/// Field name written for header rows in the flattened output.
pub const HEADER_MARKER: &str = "---";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    Open,
    Inactive,
}

/// One line of the vertical summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerticalRow {
    Header { label: String, style: HeaderStyle },
    Field { name: &'static str, value: String },
}

impl VerticalRow {
    /// The `Field` column of the export.
    pub fn field(&self) -> &str {
        match self {
            VerticalRow::Header { .. } => HEADER_MARKER,
            VerticalRow::Field { name, .. } => name,
        }
    }

    /// The `Value` column of the export.
    pub fn value(&self) -> &str {
        match self {
            VerticalRow::Header { label, .. } => label,
            VerticalRow::Field { value, .. } => value,
        }
    }
}

/// Flattens sorted records into header + field rows.
pub fn compose_rows(records: &[AccountRecord]) -> Vec<VerticalRow> {
    let mut rows = Vec::with_capacity(records.len() * 11);

    for (index, record) in records.iter().enumerate() {
        let label = format!(
            "Account {} ({} - {})",
            index + 1,
            record.status.to_uppercase(),
            title_case(&record.account_type)
        );
        let style = if record.is_open() {
            HeaderStyle::Open
        } else {
            HeaderStyle::Inactive
        };
        rows.push(VerticalRow::Header { label, style });

        rows.extend(
            record
                .fields()
                .into_iter()
                .map(|(name, value)| VerticalRow::Field { name, value }),
        );
    }

    rows
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest.
/// "credit CARD" -> "Credit Card", "auto-loan" -> "Auto-Loan".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::models::{Bureau, ParsedAccount};

    fn record(status: &str, account_type: &str) -> AccountRecord {
        ParsedAccount {
            creditor: "CAPITAL ONE".to_string(),
            account_type: account_type.to_string(),
            status: status.to_string(),
            monthly_payment: "25.00".to_string(),
            date_opened: "01/2020".to_string(),
            balance: "500.00".to_string(),
            terms: "0".to_string(),
            high_credit: "1000.00".to_string(),
            credit_limit: "2000.00".to_string(),
        }
        .tag(Bureau::Equifax)
    }

    #[test]
    fn header_then_ten_fields_per_record() {
        let rows = compose_rows(&[record("Open", "Credit Card")]);
        assert_eq!(rows.len(), 11);
        assert_eq!(
            rows[0],
            VerticalRow::Header {
                label: "Account 1 (OPEN - Credit Card)".to_string(),
                style: HeaderStyle::Open,
            }
        );

        let names: Vec<&str> = rows[1..].iter().map(|r| r.field()).collect();
        assert_eq!(
            names,
            vec![
                "Creditor",
                "Type",
                "Status",
                "Monthly Payment",
                "Date Opened",
                "Balance",
                "Terms",
                "High Credit",
                "Credit Limit",
                "Bureau",
            ]
        );
        assert_eq!(rows[10].value(), "Equifax");
    }

    #[test]
    fn numbering_follows_position_and_style_follows_status() {
        let rows = compose_rows(&[
            record("open", "revolving"),
            record("Paid Closed", "INSTALLMENT LOAN"),
        ]);
        assert_eq!(rows.len(), 22);
        assert_eq!(rows[11].field(), HEADER_MARKER);
        assert_eq!(rows[11].value(), "Account 2 (PAID CLOSED - Installment Loan)");
        assert!(matches!(
            rows[11],
            VerticalRow::Header { style: HeaderStyle::Inactive, .. }
        ));
        assert!(matches!(
            rows[0],
            VerticalRow::Header { style: HeaderStyle::Open, .. }
        ));
    }

    #[test]
    fn title_case_matches_word_boundaries() {
        assert_eq!(title_case("credit card"), "Credit Card");
        assert_eq!(title_case("AUTO-LOAN"), "Auto-Loan");
        assert_eq!(title_case("2nd mortgage"), "2Nd Mortgage");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn no_records_no_rows() {
        assert!(compose_rows(&[]).is_empty());
    }
}
