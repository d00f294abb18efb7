//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("stage", 0), "stages");
        assert_eq!(pluralize("stage", 1), "stage");
        assert_eq!(pluralize("stage", 5), "stages");
    }
}
