// src/utils/text_debug.rs
use crate::utils::error::AppError;
use regex::Regex;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Saves the document text to a file with the given spans wrapped in
/// `[[type|...]]` markers. Overlapping spans after the first are skipped.
pub fn save_debug_text(text: &str, filename: &Path, highlights: &[(usize, usize, &str)]) -> Result<(), AppError> {
    let mut file = File::create(filename)?;

    let mut annotated = String::with_capacity(text.len() + highlights.len() * 16);
    let mut last_pos = 0;
    let mut sorted_highlights = highlights.to_vec();
    sorted_highlights.sort_by_key(|h| h.0); // Sort by position

    for (start, end, highlight_type) in sorted_highlights {
        if start < last_pos {
            continue;
        }
        annotated.push_str(&text[last_pos..start]);
        annotated.push_str(&format!("[[{}|{}]]", highlight_type, &text[start..end]));
        last_pos = end;
    }
    annotated.push_str(&text[last_pos..]);

    file.write_all(annotated.as_bytes())?;

    tracing::info!("Saved annotated text to {}", filename.display());
    Ok(())
}

/// Saves an annotated copy of the text with every match of the given regex patterns marked
pub fn create_debug_text(text: &str, filename: &Path, patterns: &[(&str, &str)]) -> Result<(), AppError> {
    let mut highlights = Vec::new();

    for (pattern, highlight_type) in patterns {
        let re = Regex::new(pattern).map_err(|e| {
            AppError::Config(format!("Invalid regex pattern '{}': {}", pattern, e))
        })?;

        for mat in re.find_iter(text) {
            highlights.push((mat.start(), mat.end(), *highlight_type));
        }
    }

    save_debug_text(text, filename, &highlights)
}

/// Anchors worth seeing when a report does not parse the way it should.
pub const REPORT_DEBUG_PATTERNS: [(&str, &str); 8] = [
    (r"TransUnion|Experian|Equifax", "bureau"),
    (r"[A-Z0-9/& -]+\s+Account #:", "creditor"),
    (r"Account Type:", "type"),
    (r"Account Status:", "status"),
    (r"Monthly Payment: \$", "payment"),
    (r"Date Opened:", "opened"),
    (r"Credit Limit: \$", "limit"),
    (r"Authorized User", "end"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_matches_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("annotated.txt");
        let text = "Equifax\nAMEX\nAccount #: 1\nAuthorized User";

        create_debug_text(text, &path, &REPORT_DEBUG_PATTERNS).unwrap();
        let annotated = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            annotated,
            "[[bureau|Equifax]]\n[[creditor|AMEX\nAccount #:]] 1\n[[end|Authorized User]]"
        );
    }

    #[test]
    fn invalid_pattern_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = create_debug_text("x", &dir.path().join("a.txt"), &[("(", "bad")]).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
