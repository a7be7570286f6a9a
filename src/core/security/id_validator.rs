//! Tool id validation.
//!
//! A tool id appears in three places: after the `#` in the URL, as the stem
//! of `<id>.html`, and as the stem of `<id>.js`. It must be safe in all of
//! them.

/// Longest id accepted.
pub const MAX_ID_LENGTH: usize = 128;

/// Errors that can occur during tool id validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("Tool id is empty")]
    Empty,

    #[error("Tool id is {len} characters long (max {MAX_ID_LENGTH})")]
    TooLong { len: usize },

    #[error("Tool id '{id}' contains invalid character {ch:?}")]
    InvalidChar { id: String, ch: char },

    #[error("Tool id '{id}' must not start with '.'")]
    LeadingDot { id: String },
}

/// Validates that `id` can be used as a URL fragment and a file name stem.
///
/// Accepted characters are ASCII letters, digits, `-`, `_` and `.`; a
/// leading `.` is rejected so no id can name a hidden file or climb out of
/// its directory.
pub fn validate_tool_id(id: &str) -> Result<&str, IdError> {
    if id.is_empty() {
        return Err(IdError::Empty);
    }

    if id.len() > MAX_ID_LENGTH {
        return Err(IdError::TooLong { len: id.len() });
    }

    if let Some(ch) = id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(IdError::InvalidChar {
            id: id.to_string(),
            ch,
        });
    }

    if id.starts_with('.') {
        return Err(IdError::LeadingDot { id: id.to_string() });
    }

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_ids_are_valid() {
        assert!(validate_tool_id("snake-game").is_ok());
        assert!(validate_tool_id("Currency-Converter").is_ok());
        assert!(validate_tool_id("2048-game").is_ok());
        assert!(validate_tool_id("todo_list.v2").is_ok());
    }

    #[test]
    fn test_rejects_path_like_ids() {
        assert_eq!(
            validate_tool_id("../secret"),
            Err(IdError::InvalidChar {
                id: "../secret".to_string(),
                ch: '/'
            })
        );
        assert!(matches!(
            validate_tool_id(".hidden"),
            Err(IdError::LeadingDot { .. })
        ));
        assert!(matches!(
            validate_tool_id("a b"),
            Err(IdError::InvalidChar { ch: ' ', .. })
        ));
    }

    #[test]
    fn test_rejects_empty_and_oversized() {
        assert_eq!(validate_tool_id(""), Err(IdError::Empty));
        let long = "x".repeat(MAX_ID_LENGTH + 1);
        assert_eq!(
            validate_tool_id(&long),
            Err(IdError::TooLong {
                len: MAX_ID_LENGTH + 1
            })
        );
    }
}
