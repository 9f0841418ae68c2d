//! Display-name formatting.

/// Converts a snake_case identifier into a space-separated, capitalized label.
///
/// `order_items` becomes `Order Items`. Only the first character of each
/// word changes; the rest is kept as-is.
pub fn snake_to_camel_with_spaces(s: &str) -> String {
    s.split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
