//! Heading text to URL fragment conversion.

/// Derive a fragment identifier from heading text.
///
/// The text is lowercased, every character other than an ASCII letter, digit, underscore or
/// space is dropped, and each run of spaces becomes a single hyphen. Nothing is done to make
/// the result unique, and text with no word characters produces an empty (or hyphen-only)
/// slug.
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_spaces = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c == ' ' {
            if !in_spaces {
                slug.push('-');
                in_spaces = true;
            }
        } else if c.is_ascii_alphanumeric() || c == '_' {
            slug.push(c);
            in_spaces = false;
        }
    }

    slug
}

#[cfg(test)]
#[path = "tests/slug.rs"]
mod tests;
