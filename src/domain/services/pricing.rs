//! Display helpers for prices and catalog text.

/// Formats whole rupees with Indian digit grouping, e.g. `₹1,29,999`.
pub fn format_price(price: u64) -> String {
    format!("₹{}", group_indian(price))
}

/// Groups the last three digits, then every two digits before them.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Whole-percent discount of `current` against `original`; 0 when there is no
/// saving.
pub fn calculate_discount(original: u64, current: u64) -> u64 {
    if original == 0 || original <= current {
        return 0;
    }
    let ratio = 1.0 - current as f64 / original as f64;
    (ratio * 100.0).round() as u64
}

/// Cuts `text` to `max_len` characters and appends `...` when it was longer.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let prefix: String = text.chars().take(max_len).collect();
    format!("{}...", prefix.trim())
}

/// URL-friendly form of a name: lowercase ASCII words joined by `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_dash = true;
        }
    }

    slug
}
