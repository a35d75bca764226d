// src/extractors/section.rs
use crate::report::models::Bureau;

/// Returns the slice of `text` that belongs to `bureau`.
///
/// The section starts at the first occurrence of the bureau's label and runs
/// up to the nearest later first-occurrence of any other bureau label, or to
/// the end of the text. Later repeats of the target label (page headers and
/// the like) never re-anchor the section.
///
/// `None` means the label does not occur at all.
pub fn extract_section(text: &str, bureau: Bureau) -> Option<&str> {
    let start = text.find(bureau.label())?;

    // Labels are ASCII, so start + 1 is always a char boundary.
    let search_from = start + 1;
    let end = bureau
        .others()
        .filter_map(|other| {
            text[search_from..]
                .find(other.label())
                .map(|offset| search_from + offset)
        })
        .min()
        .unwrap_or(text.len());

    tracing::debug!("{} section spans bytes {}..{}", bureau, start, end);
    Some(&text[start..end])
}
