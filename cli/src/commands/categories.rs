//! `categories` subcommands.

use anyhow::{anyhow, Result};
use pressdesk_shared::{category_form::CategoryForm, listing::ListQuery, Category, Page};

use super::{api_failure, invalid, print_json, print_page, Client};
use crate::cli::CategoryCommands;

const FETCH_FAILED: &str = "Failed to fetch categories";
const LOAD_FAILED: &str = "Failed to load category";
const DELETE_FAILED: &str = "Failed to delete category";

/// Dispatch and print.
pub async fn run(client: &Client, command: CategoryCommands) -> Result<()> {
    match command {
        CategoryCommands::List {
            page,
            limit,
            search,
        } => print_page(&list(client, page, limit, search).await?),
        CategoryCommands::Show {
            id,
        } => print_json(&show(client, &id).await?),
        CategoryCommands::Create {
            name,
        } => create(client, name).await,
        CategoryCommands::Update {
            id,
            name,
        } => update(client, &id, name).await,
        CategoryCommands::Delete {
            id,
        } => delete(client, &id).await,
    }
}

/// One page of categories, optionally filtered by name.
pub async fn list(
    client: &Client,
    page: u32,
    limit: u32,
    search: Option<String>,
) -> Result<Page<Category>> {
    let mut query = ListQuery::new(page, limit);
    if let Some(search) = search {
        query = query.with_filter("search", search);
    }
    client
        .list_categories(&query)
        .await
        .map_err(|err| api_failure(err, FETCH_FAILED))
}

/// One category by id.
pub async fn show(client: &Client, id: &str) -> Result<Category> {
    client
        .get_category(id)
        .await
        .map_err(|err| api_failure(err, LOAD_FAILED))
}

async fn save(client: &Client, mut form: CategoryForm) -> Result<()> {
    if !form.begin_submit() {
        return Err(invalid(form.errors()));
    }
    let result = form.save(client).await;
    form.finish_submit(result).map_err(|message| anyhow!(message))
}

/// Validate and create a category.
pub async fn create(client: &Client, name: String) -> Result<()> {
    let mut form = CategoryForm::create();
    form.set_name(name);
    save(client, form).await?;
    tracing::info!("category created");
    Ok(())
}

/// Load and rename a category.
pub async fn update(client: &Client, id: &str, name: String) -> Result<()> {
    let category = show(client, id).await?;
    let mut form = CategoryForm::edit(&category);
    form.set_name(name);
    save(client, form).await?;
    tracing::info!(%id, "category updated");
    Ok(())
}

/// Delete a category.
pub async fn delete(client: &Client, id: &str) -> Result<()> {
    client
        .delete_category(id)
        .await
        .map_err(|err| api_failure(err, DELETE_FAILED))?;
    tracing::info!(%id, "category deleted");
    Ok(())
}
