//! Truthiness vocabulary shared by the disable flag and env conditions

/// Words that switch the gate off through the disable variable
pub const FALSY_WORDS: &[&str] = &["false", "0", "no", "off"];

/// Words that make an environment condition true
pub const TRUTHY_WORDS: &[&str] = &["true", "1", "yes", "on"];

/// Whether `raw` is a recognized falsy word (trimmed, case-insensitive).
/// Empty input is not falsy.
pub fn falsy_word(raw: &str) -> bool {
    let normalized = raw.trim().to_ascii_lowercase();
    FALSY_WORDS.contains(&normalized.as_str())
}

/// Whether `raw` is a recognized truthy word (trimmed, case-insensitive)
pub fn truthy_word(raw: &str) -> bool {
    let normalized = raw.trim().to_ascii_lowercase();
    TRUTHY_WORDS.contains(&normalized.as_str())
}

/// Split a comma-separated id list, trimming entries and dropping empty ones
pub fn split_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}
