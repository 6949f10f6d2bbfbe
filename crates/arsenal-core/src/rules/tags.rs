/// Normalise a comma-separated tag string
///
/// Splits on `,`, trims each piece, drops empty pieces and joins with `,`.
/// `" a , b,, c "` becomes `"a,b,c"`. Order and duplicates are preserved.
pub fn normalize_tags(raw: &str) -> String {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

/// Split a stored (normalised) tag string into its tags
pub fn split_tags(stored: &str) -> Vec<String> {
    stored
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
