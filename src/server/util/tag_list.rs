//! Storage format for article tag lists.
//!
//! Tags are kept in a single comma-joined column so that a `LIKE %tag%` filter over the
//! column is a substring match against the whole list. Tags therefore must not contain
//! commas; request validation rejects them.

const SEPARATOR: &str = ",";

/// Joins tags into the stored column value, preserving order.
pub fn encode(tags: &[String]) -> String {
    tags.join(SEPARATOR)
}

/// Splits the stored column value back into tags.
pub fn decode(stored: &str) -> Vec<String> {
    stored
        .split(SEPARATOR)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Checks a single tag can be stored without corrupting the list.
pub fn is_valid_tag(tag: &str) -> bool {
    !tag.trim().is_empty() && !tag.contains(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_column_decodes_to_no_tags() {
        assert!(decode("").is_empty());
    }

    #[test]
    fn keeps_tag_order() {
        let tags = vec!["dragons".to_string(), "coffee".to_string()];

        assert_eq!(encode(&tags), "dragons,coffee");
        assert_eq!(decode("dragons,coffee"), tags);
    }

    #[test]
    fn decodes_what_it_encodes() {
        let tags = vec!["rust".to_string(), "web dev".to_string(), "a.b".to_string()];

        assert_eq!(decode(&encode(&tags)), tags);
        assert_eq!(encode(&tags).matches(SEPARATOR).count(), tags.len() - 1);
    }

    #[test]
    fn rejects_tags_with_separator_or_blank() {
        assert!(is_valid_tag("rust"));
        assert!(!is_valid_tag("a,b"));
        assert!(!is_valid_tag("  "));
    }
}
