use unicode_normalization::UnicodeNormalization;

/// Build a URL-safe slug: ASCII-folded, lowercase, separators collapsed to `-`.
///
/// Punctuation is dropped rather than replaced, so `"Tom's Garage"` becomes
/// `"toms-garage"`. Input with nothing sluggable yields an empty string.
pub fn slugify(value: &str) -> String {
    let folded: String = value.nfkd().filter(char::is_ascii).collect();

    let mut slug = String::with_capacity(folded.len());
    let mut separator = false;
    for c in folded.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            if separator && !slug.is_empty() {
                slug.push('-');
            }
            separator = false;
            slug.push(c.to_ascii_lowercase());
        } else if c == '-' || is_separator_space(c) {
            separator = true;
        }
    }

    slug.trim_matches(|c| c == '-' || c == '_').to_owned()
}

/// Whitespace, counting the 0x1C-0x1F information separators.
fn is_separator_space(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}
