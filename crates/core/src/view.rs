use crate::model::DisplayName;

/// Mutually exclusive top-level views of the onboarding flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewName {
    Name,
    Start,
    Map,
    Lesson,
    Sandbox,
}

impl ViewName {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "view-name",
            Self::Start => "view-start",
            Self::Map => "view-map",
            Self::Lesson => "view-lesson",
            Self::Sandbox => "view-sandbox",
        }
    }
}

/// First view on launch: ask for a name until one has been stored.
#[must_use]
pub fn initial_view(name: &DisplayName) -> ViewName {
    if name.is_empty() {
        ViewName::Name
    } else {
        ViewName::Start
    }
}
