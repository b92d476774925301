use rand::Rng;

/// Stem used when the title has no characters that survive slugification.
const FALLBACK_STEM: &str = "article";

/// Number of distinct random suffixes: six base36 digits.
const SUFFIX_SPACE: u32 = 36u32.pow(6);

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Builds an article slug from its title.
///
/// The slug is the lowercase, dash-separated title followed by a random base36 suffix,
/// e.g. `how-to-train-your-dragon-1x9fz0`.
pub fn generate_slug(title: &str) -> String {
    let suffix = rand::rng().random_range(0..SUFFIX_SPACE);

    let stem = slug::slugify(title);
    let stem = if stem.is_empty() {
        FALLBACK_STEM
    } else {
        stem.as_str()
    };

    format!("{}-{}", stem, to_base36(suffix))
}

/// Formats `value` in lowercase base36 without leading zeros.
pub fn to_base36(mut value: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();

    // Only ASCII digits were pushed.
    String::from_utf8(digits).unwrap_or_default()
}
