use serde::{Deserialize, Serialize};

/// Submission input; the catalog fills in id, owner and date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInnovation {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub field: Option<String>,
}

impl NewInnovation {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}
