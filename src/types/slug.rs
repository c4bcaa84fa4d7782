use crate::error::{Error, Result};

const MAX_SLUG_LEN: usize = 64;

/// Project ids are slugs: lowercase alphanumeric and hyphens. They double
/// as file-name components for per-project field catalogs, so nothing else
/// is allowed through.
pub fn validate_slug(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::Validation("project id cannot be empty".to_string()));
    }
    if id.len() > MAX_SLUG_LEN {
        return Err(Error::Validation(format!(
            "project id cannot exceed {MAX_SLUG_LEN} characters"
        )));
    }
    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(Error::Validation(
            "project id can only contain lowercase letters, digits, and hyphens".to_string(),
        ));
    }
    if id.starts_with('-') || id.ends_with('-') {
        return Err(Error::Validation(
            "project id cannot start or end with a hyphen".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slugs() {
        assert!(validate_slug("docs").is_ok());
        assert!(validate_slug("my-project-2").is_ok());
        assert!(validate_slug("a").is_ok());
        assert!(validate_slug("0day").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(validate_slug("").is_err());
    }

    #[test]
    fn test_rejects_uppercase_and_spaces() {
        assert!(validate_slug("Docs").is_err());
        assert!(validate_slug("my project").is_err());
        assert!(validate_slug("under_score").is_err());
    }

    #[test]
    fn test_rejects_path_tricks() {
        assert!(validate_slug("../etc").is_err());
        assert!(validate_slug("a/b").is_err());
        assert!(validate_slug(".hidden").is_err());
    }

    #[test]
    fn test_rejects_edge_hyphens() {
        assert!(validate_slug("-docs").is_err());
        assert!(validate_slug("docs-").is_err());
    }

    #[test]
    fn test_rejects_overlong() {
        assert!(validate_slug(&"a".repeat(65)).is_err());
        assert!(validate_slug(&"a".repeat(64)).is_ok());
    }
}
