// src/shared/store/text.rs

/// True when any of `fields` contains `needle` (case-insensitive).
pub fn any_contains<'a>(fields: impl IntoIterator<Item = &'a str>, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Normalizes an optional query value such as `?search=` or `?category=`:
/// blank means "no filter".
pub fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}
