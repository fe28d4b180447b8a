/// Text shown wherever the learner's name would appear but none is stored.
pub const NAME_PLACEHOLDER: &str = "Your name";

/// The learner's display name (trimmed, possibly empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DisplayName(String);

impl DisplayName {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self(raw.trim().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Text to render: the name, or the placeholder when none is set.
    #[must_use]
    pub fn display_text(&self) -> &str {
        if self.0.is_empty() {
            NAME_PLACEHOLDER
        } else {
            &self.0
        }
    }
}

impl std::fmt::Display for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_shows_placeholder() {
        let name = DisplayName::new("");
        assert!(name.is_empty());
        assert_eq!(name.display_text(), NAME_PLACEHOLDER);
    }

    #[test]
    fn whitespace_name_is_empty_after_trim() {
        let name = DisplayName::new("   \t");
        assert!(name.is_empty());
        assert_eq!(name.to_string(), NAME_PLACEHOLDER);
    }

    #[test]
    fn name_is_trimmed() {
        let name = DisplayName::new("  Ada ");
        assert_eq!(name.as_str(), "Ada");
        assert_eq!(name.display_text(), "Ada");
    }
}
