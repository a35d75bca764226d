// src/storage/mod.rs
use crate::pipeline::CreditReport;
use crate::report::VerticalRow;
use crate::utils::error::ExportError;
use rust_xlsxwriter::{Format, Workbook};
use std::fs;
use std::path::{Path, PathBuf};

pub const SPREADSHEET_FILE_NAME: &str = "credit_vertical_summary.xlsx";
pub const METADATA_FILE_NAME: &str = "credit_vertical_summary_meta.json";

pub struct ExportManager {
    base_dir: PathBuf,
}

impl ExportManager {
    /// Creates a new ExportManager with the specified output directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, ExportError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the output directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(ExportError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Writes the vertical rows as a two-column Field/Value spreadsheet
    pub fn save_spreadsheet(&self, rows: &[VerticalRow]) -> Result<PathBuf, ExportError> {
        let file_path = self.base_dir.join(SPREADSHEET_FILE_NAME);

        let bytes = spreadsheet_bytes(rows)?;
        fs::write(&file_path, bytes).map_err(ExportError::IoError)?;

        tracing::info!("Saved spreadsheet to {}", file_path.display());

        Ok(file_path)
    }

    /// Saves metadata about the run in JSON format
    pub fn save_report_metadata(&self, report: &CreditReport) -> Result<PathBuf, ExportError> {
        let file_path = self.base_dir.join(METADATA_FILE_NAME);

        let metadata = serde_json::json!({
            "bureaus": report.bureaus,
            "notices": report.notices,
            "account_count": report.records.len(),
            "row_count": report.rows.len(),
            "spreadsheet": SPREADSHEET_FILE_NAME,
            "generated_at": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| ExportError::SerializationError(e.to_string()))?;

        fs::write(&file_path, metadata_str).map_err(ExportError::IoError)?;

        tracing::info!("Saved metadata to {}", file_path.display());

        Ok(file_path)
    }
}

/// The exported table, header excluded. One `[field, value]` pair per row,
/// in row order.
pub fn export_cells(rows: &[VerticalRow]) -> Vec<[&str; 2]> {
    rows.iter().map(|row| [row.field(), row.value()]).collect()
}

/// Builds the .xlsx file in memory.
pub fn spreadsheet_bytes(rows: &[VerticalRow]) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    worksheet.write_string_with_format(0, 0, "Field", &bold)?;
    worksheet.write_string_with_format(0, 1, "Value", &bold)?;

    for (index, [field, value]) in export_cells(rows).into_iter().enumerate() {
        let row = index as u32 + 1;
        worksheet.write_string(row, 0, field)?;
        worksheet.write_string(row, 1, value)?;
    }
    worksheet.set_column_width(0, 18)?;
    worksheet.set_column_width(1, 48)?;

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::build_report;
    use crate::report::compose::HEADER_MARKER;
    use crate::report::display::write_rows;
    use crate::report::{Bureau, HeaderStyle};

    fn sample_rows() -> Vec<VerticalRow> {
        vec![
            VerticalRow::Header {
                label: "Account 1 (OPEN - Credit Card)".to_string(),
                style: HeaderStyle::Open,
            },
            VerticalRow::Field { name: "Creditor", value: "CAPITAL ONE".to_string() },
            VerticalRow::Field { name: "Credit Limit", value: "N/A".to_string() },
        ]
    }

    #[test]
    fn cells_mirror_rows() {
        let rows = sample_rows();
        assert_eq!(
            export_cells(&rows),
            vec![
                ["---", "Account 1 (OPEN - Credit Card)"],
                ["Creditor", "CAPITAL ONE"],
                ["Credit Limit", "N/A"],
            ]
        );
    }

    #[test]
    fn export_and_display_share_rows() {
        let text = "Equifax\nDISCOVER BANK\nAccount #: 6011****\nEquifax\nAccount Type: Credit Card\n\
                    Account Status: Open\nMonthly Payment: $35.00\nDate Opened: 07/2012\n\
                    Balance: $1,210.00\nNo. of Months (terms): 0\nHigh Credit: $3,400.00\n\
                    Credit Limit: $5,000.00\nAuthorized User\n";
        let report = build_report(text, &[Bureau::Equifax]).unwrap();

        colored::control::set_override(false);
        let mut buf = Vec::new();
        write_rows(&mut buf, &report.rows).unwrap();
        let rendered = String::from_utf8(buf).unwrap();
        let displayed: Vec<&str> = rendered
            .lines()
            .skip(1) // summary title
            .filter(|line| !line.is_empty())
            .collect();

        let exported: Vec<String> = export_cells(&report.rows)
            .into_iter()
            .map(|[field, value]| {
                if field == HEADER_MARKER {
                    value.to_string()
                } else {
                    format!("{}: {}", field, value)
                }
            })
            .collect();

        assert_eq!(displayed, exported);
        assert_eq!(displayed.len(), 11);
        assert_eq!(displayed[0], "Account 1 (OPEN - Credit Card)");
        assert_eq!(displayed[6], "Balance: 1210.00");
    }

    #[test]
    fn header_only_spreadsheet_when_no_rows() {
        let bytes = spreadsheet_bytes(&[]).unwrap();
        assert!(bytes.starts_with(b"PK"));
        assert!(export_cells(&[]).is_empty());
    }

    #[test]
    fn spreadsheet_is_a_zip_container() {
        let bytes = spreadsheet_bytes(&sample_rows()).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn saves_files_under_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested");
        let manager = ExportManager::new(&out).unwrap();

        let sheet = manager.save_spreadsheet(&sample_rows()).unwrap();
        assert_eq!(sheet, out.join(SPREADSHEET_FILE_NAME));
        assert!(sheet.exists());

        let text = "Equifax\nnothing here";
        let report = build_report(text, &[Bureau::Equifax, Bureau::Experian]).unwrap();
        let meta_path = manager.save_report_metadata(&report).unwrap();
        let meta: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(meta_path).unwrap()).unwrap();
        assert_eq!(meta["bureaus"], serde_json::json!(["Equifax", "Experian"]));
        assert_eq!(meta["account_count"], 0);
        assert_eq!(meta["notices"][1]["kind"], "no_accounts_found");
        assert_eq!(meta["notices"][2]["kind"], "section_not_found");
    }
}
