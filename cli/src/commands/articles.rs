//! `articles` subcommands.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use pressdesk_shared::{
    article_form::{execute_submit, ArticleForm, SubmitBlocked},
    config::{RELATED_MAX, RELATED_POOL_LIMIT},
    listing::ListQuery,
    models::related_articles,
    Article, Page,
};

use super::{api_failure, invalid, print_json, print_page, upload::image_file, Client};
use crate::cli::ArticleCommands;

const FETCH_FAILED: &str = "Failed to fetch articles";
const LOAD_FAILED: &str = "Failed to load article";
const DELETE_FAILED: &str = "Failed to delete article";

/// New values for an article. `None` keeps what is stored.
#[derive(Debug, Clone, Default)]
pub struct ArticleEdits {
    /// Headline.
    pub title: Option<String>,
    /// Category id.
    pub category_id: Option<String>,
    /// HTML body.
    pub content: Option<String>,
    /// Cover image to upload first.
    pub image: Option<PathBuf>,
}

/// Dispatch and print.
pub async fn run(client: &Client, command: ArticleCommands) -> Result<()> {
    match command {
        ArticleCommands::List {
            page,
            limit,
            title,
            category,
        } => {
            let page = list(client, page, limit, title, category).await?;
            print_page(&page)
        },
        ArticleCommands::Show {
            id,
        } => print_json(&show(client, &id).await?),
        ArticleCommands::Related {
            id,
        } => print_json(&related(client, &id).await?),
        ArticleCommands::Create {
            title,
            category,
            content_file,
            image,
        } => {
            let edits = ArticleEdits {
                title: Some(title),
                category_id: Some(category),
                content: Some(read_content(&content_file)?),
                image,
            };
            create(client, edits).await
        },
        ArticleCommands::Update {
            id,
            title,
            category,
            content_file,
            image,
        } => {
            let content = content_file.as_deref().map(read_content).transpose()?;
            let edits = ArticleEdits {
                title,
                category_id: category,
                content,
                image,
            };
            update(client, &id, edits).await
        },
        ArticleCommands::Delete {
            id,
        } => delete(client, &id).await,
    }
}

fn read_content(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// One page of articles, filtered by title and category.
pub async fn list(
    client: &Client,
    page: u32,
    limit: u32,
    title: Option<String>,
    category: Option<String>,
) -> Result<Page<Article>> {
    let mut query = ListQuery::new(page, limit);
    if let Some(title) = title {
        query = query.with_filter("title", title);
    }
    if let Some(category) = category {
        query = query.with_filter("category", category);
    }
    client
        .list_articles(&query)
        .await
        .map_err(|err| api_failure(err, FETCH_FAILED))
}

/// One article by id.
pub async fn show(client: &Client, id: &str) -> Result<Article> {
    client
        .get_article(id)
        .await
        .map_err(|err| api_failure(err, LOAD_FAILED))
}

/// Other articles sharing the category of `id`.
pub async fn related(client: &Client, id: &str) -> Result<Vec<Article>> {
    let current = show(client, id).await?;
    let pool = client
        .list_articles(&ListQuery::new(1, RELATED_POOL_LIMIT))
        .await
        .map_err(|err| api_failure(err, FETCH_FAILED))?;
    Ok(related_articles(&current, &pool.items, RELATED_MAX))
}

fn apply(form: &mut ArticleForm<Vec<u8>>, edits: ArticleEdits) -> Result<()> {
    if let Some(title) = edits.title {
        form.set_title(title);
    }
    if let Some(category_id) = edits.category_id {
        form.set_category(category_id);
    }
    if let Some(content) = edits.content {
        form.set_content(content);
    }
    if let Some(path) = edits.image {
        let file = image_file(&path)?;
        form.select_image(file)
            .with_context(|| format!("cannot use {} as cover image", path.display()))?;
    }
    Ok(())
}

async fn submit(client: &Client, mut form: ArticleForm<Vec<u8>>) -> Result<()> {
    let plan = match form.begin_submit() {
        Ok(plan) => plan,
        Err(SubmitBlocked::Invalid(errors)) => return Err(invalid(&errors)),
        Err(SubmitBlocked::Busy) => return Err(anyhow!("submit already in progress")),
    };
    let result = execute_submit(client, plan).await;
    form.finish_submit(result).map_err(|message| anyhow!(message))
}

/// Validate and create an article, uploading the cover image first.
pub async fn create(client: &Client, edits: ArticleEdits) -> Result<()> {
    let mut form = ArticleForm::create();
    apply(&mut form, edits)?;
    submit(client, form).await?;
    tracing::info!("article created");
    Ok(())
}

/// Load, edit and save an article. Without a new image the stored
/// `imageUrl` is kept.
pub async fn update(client: &Client, id: &str, edits: ArticleEdits) -> Result<()> {
    let article = show(client, id).await?;
    let mut form = ArticleForm::edit(&article);
    apply(&mut form, edits)?;
    submit(client, form).await?;
    tracing::info!(%id, "article updated");
    Ok(())
}

/// Delete an article.
pub async fn delete(client: &Client, id: &str) -> Result<()> {
    client
        .delete_article(id)
        .await
        .map_err(|err| api_failure(err, DELETE_FAILED))?;
    tracing::info!(%id, "article deleted");
    Ok(())
}
