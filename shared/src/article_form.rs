//! Article create/edit form: validation, image selection, preview and the
//! two-phase (upload, then save) submit.
//!
//! ```text
//! Editing --preview()--> Previewing --back_to_edit()--> Editing
//! Editing | Previewing --begin_submit()--> Submitting
//! Submitting --finish_submit(Err)--> Editing
//! Submitting --finish_submit(Ok)--> Done
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::{
    client::ApiClient,
    error::{ApiError, FieldErrors},
    http::HttpTransport,
    models::{Article, ArticlePayload, Category, UNCATEGORIZED},
};

/// Minimum title length in characters.
pub const TITLE_MIN_CHARS: usize = 10;
/// Minimum trimmed content length in characters.
pub const CONTENT_MIN_CHARS: usize = 50;
/// Largest accepted image, inclusive.
pub const MAX_IMAGE_BYTES: u64 = 2 * 1024 * 1024;

/// Field key of the title input.
pub const FIELD_TITLE: &str = "title";
/// Field key of the category select.
pub const FIELD_CATEGORY: &str = "categoryId";
/// Field key of the content editor.
pub const FIELD_CONTENT: &str = "content";

/// Editable article fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFields {
    /// Headline.
    pub title: String,
    /// Selected category id, empty when none.
    pub category_id: String,
    /// HTML body.
    pub content: String,
    /// Image already stored on the server (edit flow).
    pub image_url: Option<String>,
}

impl ArticleFields {
    /// Prefill from an existing article.
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            category_id: article.category_id.clone(),
            content: article.content.clone(),
            image_url: article.image_url.clone().filter(|url| !url.trim().is_empty()),
        }
    }
}

/// Check the client-side rules. The server validates again on its own.
pub fn validate_article(fields: &ArticleFields) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if fields.title.is_empty() {
        errors.insert(FIELD_TITLE, "Title is required");
    } else if fields.title.chars().count() < TITLE_MIN_CHARS {
        errors.insert(FIELD_TITLE, format!("Title must be at least {TITLE_MIN_CHARS} characters"));
    }

    if fields.category_id.trim().is_empty() {
        errors.insert(FIELD_CATEGORY, "Category is required");
    }

    let content = fields.content.trim();
    if content.is_empty() {
        errors.insert(FIELD_CONTENT, "Content is required");
    } else if content.chars().count() < CONTENT_MIN_CHARS {
        errors.insert(
            FIELD_CONTENT,
            format!("Content must be at least {CONTENT_MIN_CHARS} characters"),
        );
    }

    errors
}

/// Why an image was refused at selection time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageRejection {
    /// Larger than [`MAX_IMAGE_BYTES`].
    #[error("Image is too large ({size} bytes); the maximum is 2 MB")]
    TooLarge {
        /// Actual size in bytes.
        size: u64,
    },
    /// MIME type outside `image/*`.
    #[error("Only image files are allowed (got {mime:?})")]
    NotAnImage {
        /// Declared MIME type.
        mime: String,
    },
}

/// Check size and type of a candidate image.
pub fn validate_image(mime: &str, size: u64) -> Result<(), ImageRejection> {
    if size > MAX_IMAGE_BYTES {
        return Err(ImageRejection::TooLarge {
            size,
        });
    }
    if !mime.trim().to_ascii_lowercase().starts_with("image/") {
        return Err(ImageRejection::NotAnImage {
            mime: mime.to_string(),
        });
    }
    Ok(())
}

/// Source of an image's bytes, read only when the upload actually happens.
#[async_trait(?Send)]
pub trait ImageData: Clone {
    /// Full file contents.
    async fn read_bytes(&self) -> Result<Vec<u8>, ApiError>;
}

#[async_trait(?Send)]
impl ImageData for Vec<u8> {
    async fn read_bytes(&self) -> Result<Vec<u8>, ApiError> {
        Ok(self.clone())
    }
}

/// An image picked by the user but not uploaded yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile<B> {
    /// Original file name.
    pub name: String,
    /// Declared MIME type.
    pub mime: String,
    /// Size in bytes.
    pub size: u64,
    /// Handle to the contents.
    pub data: B,
}

/// Where a submit goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTarget {
    /// `POST /articles`.
    Create,
    /// `PUT /articles/:id`.
    Update {
        /// Article id.
        id: String,
    },
}

impl SubmitTarget {
    fn failure_fallback(&self) -> &'static str {
        match self {
            SubmitTarget::Create => "Failed to create article",
            SubmitTarget::Update {
                ..
            } => "Failed to update article",
        }
    }
}

/// Phase of the create/edit screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    /// Inputs visible.
    Editing,
    /// Rendering the would-be article.
    Previewing,
    /// Requests in flight.
    Submitting,
    /// Saved; the caller navigates away.
    Done,
}

/// Why [`ArticleForm::begin_submit`] refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// Validation failed; errors are also stored on the form.
    Invalid(FieldErrors),
    /// A submit is already running or finished.
    Busy,
}

/// Everything needed to perform one submit, detached from the form so it
/// can be moved into an async task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitPlan<B> {
    /// Create or update.
    pub target: SubmitTarget,
    /// Field snapshot taken when the submit started.
    pub fields: ArticleFields,
    /// Image to upload first, if one was selected.
    pub image: Option<ImageFile<B>>,
}

impl<B> SubmitPlan<B> {
    fn payload(&self, image_url: Option<String>) -> ArticlePayload {
        ArticlePayload {
            title: self.fields.title.clone(),
            content: self.fields.content.clone(),
            category_id: self.fields.category_id.clone(),
            image_url,
        }
    }
}

/// Image to show in the preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewImage {
    /// The not-yet-uploaded selection, by file name.
    Selected(String),
    /// The image stored with the article.
    Existing(String),
    /// Neither; show a placeholder.
    Placeholder,
}

/// What the published article would look like.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePreview {
    /// Headline.
    pub title: String,
    /// Unsanitized HTML body; the renderer sanitizes.
    pub content_html: String,
    /// Category name or `"Uncategorized"`.
    pub category_label: String,
    /// Image choice.
    pub image: PreviewImage,
}

/// State of one create/edit screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleForm<B> {
    target: SubmitTarget,
    fields: ArticleFields,
    selected_image: Option<ImageFile<B>>,
    errors: FieldErrors,
    mode: FormMode,
}

impl<B: Clone> ArticleForm<B> {
    /// Empty form for a new article.
    pub fn create() -> Self {
        Self::with(SubmitTarget::Create, ArticleFields::default())
    }

    /// Form prefilled from `article`, saving back to it.
    pub fn edit(article: &Article) -> Self {
        Self::with(
            SubmitTarget::Update {
                id: article.id.clone(),
            },
            ArticleFields::from_article(article),
        )
    }

    fn with(target: SubmitTarget, fields: ArticleFields) -> Self {
        Self {
            target,
            fields,
            selected_image: None,
            errors: FieldErrors::new(),
            mode: FormMode::Editing,
        }
    }

    /// Current field values.
    pub fn fields(&self) -> &ArticleFields {
        &self.fields
    }

    /// Create or update.
    pub fn target(&self) -> &SubmitTarget {
        &self.target
    }

    /// Field-level errors from the last validation.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Current phase.
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Whether requests are in flight.
    pub fn is_submitting(&self) -> bool {
        self.mode == FormMode::Submitting
    }

    /// Selected, not yet uploaded image.
    pub fn selected_image(&self) -> Option<&ImageFile<B>> {
        self.selected_image.as_ref()
    }

    /// Edit the title; clears its error.
    pub fn set_title(&mut self, value: impl Into<String>) {
        self.fields.title = value.into();
        self.errors.clear(FIELD_TITLE);
    }

    /// Edit the category; clears its error.
    pub fn set_category(&mut self, value: impl Into<String>) {
        self.fields.category_id = value.into();
        self.errors.clear(FIELD_CATEGORY);
    }

    /// Edit the content; clears its error.
    pub fn set_content(&mut self, value: impl Into<String>) {
        self.fields.content = value.into();
        self.errors.clear(FIELD_CONTENT);
    }

    /// Select an image. A rejected file never enters the form.
    pub fn select_image(&mut self, file: ImageFile<B>) -> Result<(), ImageRejection> {
        validate_image(&file.mime, file.size)?;
        self.selected_image = Some(file);
        Ok(())
    }

    /// Drop the selection; the stored image (if any) stays.
    pub fn clear_selected_image(&mut self) {
        self.selected_image = None;
    }

    /// Run validation and store the result. `true` when valid.
    pub fn validate(&mut self) -> bool {
        self.errors = validate_article(&self.fields);
        self.errors.is_empty()
    }

    /// Enter preview, gated by validation.
    pub fn preview(&mut self) -> Result<(), FieldErrors> {
        if self.mode != FormMode::Editing {
            return Ok(());
        }
        if !self.validate() {
            return Err(self.errors.clone());
        }
        self.mode = FormMode::Previewing;
        Ok(())
    }

    /// Leave preview.
    pub fn back_to_edit(&mut self) {
        if self.mode == FormMode::Previewing {
            self.mode = FormMode::Editing;
        }
    }

    /// Start a submit from Editing or Previewing. Validation runs first; no
    /// request may be issued when this returns `Err`.
    pub fn begin_submit(&mut self) -> Result<SubmitPlan<B>, SubmitBlocked> {
        if matches!(self.mode, FormMode::Submitting | FormMode::Done) {
            return Err(SubmitBlocked::Busy);
        }
        if !self.validate() {
            return Err(SubmitBlocked::Invalid(self.errors.clone()));
        }
        self.mode = FormMode::Submitting;
        Ok(SubmitPlan {
            target: self.target.clone(),
            fields: self.fields.clone(),
            image: self.selected_image.clone(),
        })
    }

    /// Record the outcome of [`execute_submit`]. On failure the form keeps
    /// every entered value and returns the message to show.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> Result<(), String> {
        match result {
            Ok(()) => {
                self.mode = FormMode::Done;
                Ok(())
            },
            Err(err) => {
                self.mode = FormMode::Editing;
                Err(err.message_or(self.target.failure_fallback()))
            },
        }
    }

    /// Preview model resolved against the known categories.
    pub fn preview_model(&self, categories: &[Category]) -> ArticlePreview {
        let category_label = categories
            .iter()
            .find(|category| category.id == self.fields.category_id)
            .map(|category| category.name.clone())
            .unwrap_or_else(|| UNCATEGORIZED.to_string());
        let image = match (&self.selected_image, &self.fields.image_url) {
            (Some(file), _) => PreviewImage::Selected(file.name.clone()),
            (None, Some(url)) => PreviewImage::Existing(url.clone()),
            (None, None) => PreviewImage::Placeholder,
        };
        ArticlePreview {
            title: self.fields.title.clone(),
            content_html: self.fields.content.clone(),
            category_label,
            image,
        }
    }
}

/// Perform the two-phase submit: upload the selected image (if any), then
/// create or update the article. Without a new image the update carries the
/// previously stored `imageUrl`.
///
/// If the upload succeeds but the article write fails, the uploaded image is
/// left on the server.
pub async fn execute_submit<T, B>(client: &ApiClient<T>, plan: SubmitPlan<B>) -> Result<(), ApiError>
where
    T: HttpTransport,
    B: ImageData,
{
    let mut image_url = plan
        .fields
        .image_url
        .clone()
        .filter(|url| !url.trim().is_empty());
    let mut uploaded = None;

    if let Some(image) = &plan.image {
        let bytes = image.data.read_bytes().await?;
        let url = client.upload_image(&image.name, &image.mime, bytes).await?;
        uploaded = Some(url.clone());
        image_url = Some(url);
    }

    let payload = plan.payload(image_url);
    let result = match &plan.target {
        SubmitTarget::Create => client.create_article(&payload).await,
        SubmitTarget::Update {
            id,
        } => client.update_article(id, &payload).await,
    };

    if let (Err(err), Some(url)) = (&result, &uploaded) {
        tracing::warn!(error = %err, image_url = %url, "article save failed after upload; image left orphaned");
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::ClientConfig,
        http::RequestBody,
        testing::{json_response, ScriptedTransport},
    };

    fn valid_fields() -> ArticleFields {
        ArticleFields {
            title: "0123456789".to_string(),
            category_id: "c1".to_string(),
            content: format!("  {}  ", "x".repeat(CONTENT_MIN_CHARS)),
            image_url: None,
        }
    }

    fn form_with(fields: ArticleFields) -> ArticleForm<Vec<u8>> {
        let mut form = ArticleForm::create();
        form.set_title(fields.title);
        form.set_category(fields.category_id);
        form.set_content(fields.content);
        form
    }

    fn existing_article() -> Article {
        Article {
            id: "a1".to_string(),
            title: "An existing headline".to_string(),
            content: "y".repeat(60),
            category_id: "c1".to_string(),
            image_url: Some("https://cdn.test/original.png".to_string()),
            created_at: String::new(),
            updated_at: String::new(),
            user: None,
            category: None,
        }
    }

    fn client() -> ApiClient<ScriptedTransport> {
        ApiClient::new(ClientConfig::new("http://api.test/api"), ScriptedTransport::default())
    }

    fn image(size: u64, mime: &str) -> ImageFile<Vec<u8>> {
        ImageFile {
            name: "cover.png".to_string(),
            mime: mime.to_string(),
            size,
            data: vec![0; 4],
        }
    }

    #[test]
    fn boundary_values_pass_validation() {
        assert!(validate_article(&valid_fields()).is_empty());
    }

    #[test]
    fn short_title_empty_category_and_short_content_are_rejected() {
        let mut fields = valid_fields();
        fields.title = "012345678".to_string();
        fields.category_id = String::new();
        fields.content = format!("   {}   ", "x".repeat(CONTENT_MIN_CHARS - 1));

        let errors = validate_article(&fields);
        assert!(errors.contains(FIELD_TITLE));
        assert!(errors.contains(FIELD_CATEGORY));
        assert!(errors.contains(FIELD_CONTENT));
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        let mut fields = valid_fields();
        fields.title = "ééééééééé".to_string();
        assert!(validate_article(&fields).contains(FIELD_TITLE));
    }

    #[test]
    fn image_size_limit_is_inclusive() {
        assert!(validate_image("image/png", MAX_IMAGE_BYTES).is_ok());
        assert_eq!(
            validate_image("image/png", MAX_IMAGE_BYTES + 1),
            Err(ImageRejection::TooLarge {
                size: MAX_IMAGE_BYTES + 1
            })
        );
        assert!(matches!(
            validate_image("application/pdf", 10),
            Err(ImageRejection::NotAnImage { .. })
        ));
    }

    #[test]
    fn rejected_image_never_enters_state() {
        let mut form = form_with(valid_fields());
        assert!(form.select_image(image(MAX_IMAGE_BYTES + 1, "image/png")).is_err());
        assert!(form.selected_image().is_none());

        form.select_image(image(MAX_IMAGE_BYTES, "image/png")).expect("accepted");
        assert!(form.selected_image().is_some());
    }

    #[test]
    fn preview_requires_validation_and_round_trips() {
        let mut form = form_with(ArticleFields::default());
        assert!(form.preview().is_err());
        assert_eq!(form.mode(), FormMode::Editing);

        let mut form = form_with(valid_fields());
        form.preview().expect("valid form previews");
        assert_eq!(form.mode(), FormMode::Previewing);
        form.back_to_edit();
        assert_eq!(form.mode(), FormMode::Editing);
    }

    #[test]
    fn preview_model_resolves_category_and_image() {
        let categories = vec![Category {
            id: "c1".to_string(),
            name: "Tech".to_string(),
            created_at: String::new(),
            updated_at: String::new(),
        }];
        let mut form: ArticleForm<Vec<u8>> = ArticleForm::edit(&existing_article());
        let preview = form.preview_model(&categories);
        assert_eq!(preview.category_label, "Tech");
        assert_eq!(preview.image, PreviewImage::Existing("https://cdn.test/original.png".to_string()));

        form.set_category("missing");
        form.select_image(image(10, "image/jpeg")).expect("accepted");
        let preview = form.preview_model(&categories);
        assert_eq!(preview.category_label, UNCATEGORIZED);
        assert_eq!(preview.image, PreviewImage::Selected("cover.png".to_string()));
    }

    #[test]
    fn invalid_submit_is_blocked_before_any_request() {
        let mut form = form_with(ArticleFields::default());
        assert!(matches!(form.begin_submit(), Err(SubmitBlocked::Invalid(_))));
        assert_eq!(form.mode(), FormMode::Editing);
    }

    #[test]
    fn submit_from_preview_is_allowed_and_busy_while_running() {
        let mut form = form_with(valid_fields());
        form.preview().expect("preview");
        form.begin_submit().expect("submit from preview");
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), Err(SubmitBlocked::Busy));
    }

    #[tokio::test]
    async fn create_without_image_sends_single_request_without_image_url() {
        let client = client();
        client.transport().push(json_response(201, r#"{"id":"a9"}"#));

        let mut form = form_with(valid_fields());
        let plan = form.begin_submit().expect("valid");
        let result = execute_submit(&client, plan).await;
        assert!(form.finish_submit(result).is_ok());
        assert_eq!(form.mode(), FormMode::Done);

        let sent = client.transport().requests();
        assert_eq!(sent.len(), 1);
        match &sent[0].body {
            RequestBody::Json(body) => assert!(body.get("imageUrl").is_none()),
            other => panic!("expected json body, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_without_new_image_preserves_existing_url() {
        let client = client();
        client.transport().push(json_response(200, "{}"));

        let mut form: ArticleForm<Vec<u8>> = ArticleForm::edit(&existing_article());
        form.set_title("A reworded existing headline");
        let plan = form.begin_submit().expect("valid");
        execute_submit(&client, plan).await.expect("update");

        let sent = client.transport().requests();
        assert_eq!(client.transport().paths(), vec!["PUT /articles/a1"]);
        match &sent[0].body {
            RequestBody::Json(body) => {
                assert_eq!(body["imageUrl"], "https://cdn.test/original.png");
            },
            other => panic!("expected json body, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn selected_image_is_uploaded_before_save() {
        let client = client();
        client
            .transport()
            .push(json_response(200, r#"{"imageUrl":"https://cdn.test/new.png"}"#));
        client.transport().push(json_response(200, "{}"));

        let mut form: ArticleForm<Vec<u8>> = ArticleForm::edit(&existing_article());
        form.select_image(image(4, "image/png")).expect("accepted");
        let plan = form.begin_submit().expect("valid");
        execute_submit(&client, plan).await.expect("save");

        assert_eq!(client.transport().paths(), vec!["POST /upload", "PUT /articles/a1"]);
        match &client.transport().requests()[1].body {
            RequestBody::Json(body) => assert_eq!(body["imageUrl"], "https://cdn.test/new.png"),
            other => panic!("expected json body, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failed_upload_skips_save_and_keeps_form() {
        let client = client();
        client
            .transport()
            .push(json_response(413, r#"{"message":"File too large"}"#));

        let mut form = form_with(valid_fields());
        form.select_image(image(4, "image/png")).expect("accepted");
        let before = form.fields().clone();
        let plan = form.begin_submit().expect("valid");
        let result = execute_submit(&client, plan).await;

        assert_eq!(form.finish_submit(result), Err("File too large".to_string()));
        assert_eq!(form.mode(), FormMode::Editing);
        assert_eq!(form.fields(), &before);
        assert!(form.selected_image().is_some());
        assert_eq!(client.transport().paths(), vec!["POST /upload"]);
    }

    #[tokio::test]
    async fn failed_save_without_message_uses_fallback() {
        let client = client();
        client.transport().push_error(ApiError::Network("offline".to_string()));

        let mut form = form_with(valid_fields());
        let plan = form.begin_submit().expect("valid");
        let result = execute_submit(&client, plan).await;
        assert_eq!(form.finish_submit(result), Err("Failed to create article".to_string()));
    }
}
