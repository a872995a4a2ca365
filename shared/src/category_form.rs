//! Category create/edit form.

use crate::{
    client::ApiClient,
    error::{ApiError, FieldErrors},
    http::HttpTransport,
    models::Category,
};

/// Minimum name length in characters.
pub const NAME_MIN_CHARS: usize = 3;
/// Field key of the name input.
pub const FIELD_NAME: &str = "name";

/// Check the category name. The length rule counts the name as typed,
/// like the article title.
pub fn validate_category_name(name: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if name.trim().is_empty() {
        errors.insert(FIELD_NAME, "Category name is required");
    } else if name.chars().count() < NAME_MIN_CHARS {
        errors.insert(
            FIELD_NAME,
            format!("Category name must be at least {NAME_MIN_CHARS} characters"),
        );
    }
    errors
}

/// State of the category create or edit screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryForm {
    id: Option<String>,
    name: String,
    errors: FieldErrors,
    submitting: bool,
}

impl CategoryForm {
    /// Empty form for a new category.
    pub fn create() -> Self {
        Self {
            id: None,
            name: String::new(),
            errors: FieldErrors::new(),
            submitting: false,
        }
    }

    /// Form prefilled from a loaded category.
    pub fn edit(category: &Category) -> Self {
        Self {
            id: Some(category.id.clone()),
            name: category.name.clone(),
            ..Self::create()
        }
    }

    /// Whether saving updates an existing category.
    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Current name input.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validation errors.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Whether a save is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Edit the name; clears its error.
    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.errors.clear(FIELD_NAME);
    }

    /// Validate and mark the form as submitting. `false` when blocked.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.errors = validate_category_name(&self.name);
        if !self.errors.is_empty() {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Send the create or update request for the current name.
    pub async fn save<T: HttpTransport>(&self, client: &ApiClient<T>) -> Result<(), ApiError> {
        let name = self.name.trim();
        match &self.id {
            Some(id) => client.update_category(id, name).await,
            None => client.create_category(name).await,
        }
    }

    /// Record the save outcome; on failure returns the message to show and
    /// keeps the input.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> Result<(), String> {
        self.submitting = false;
        result.map_err(|err| {
            let fallback = if self.is_edit() {
                "Failed to update category"
            } else {
                "Failed to create category"
            };
            err.message_or(fallback)
        })
    }
}

impl Default for CategoryForm {
    fn default() -> Self {
        Self::create()
    }
}
