//! Subcommand implementations. Each module exposes plain async functions
//! returning data; [`run`] prints their results.

pub mod articles;
pub mod auth;
pub mod categories;
pub mod upload;

use std::{path::Path, rc::Rc};

use anyhow::{anyhow, Result};
use pressdesk_shared::{
    listing::Pagination, ApiClient, ApiError, ClientConfig, FieldErrors, Page, SessionStore,
};
use serde::Serialize;

use crate::{
    cli::{Cli, Commands},
    token_file::FileTokenStore,
    transport::ReqwestTransport,
};

/// API client bound to the reqwest transport.
pub type Client = ApiClient<ReqwestTransport>;
/// Session store persisting its token in a file.
pub type Session = SessionStore<ReqwestTransport, FileTokenStore>;

/// Build the session for one CLI run.
pub fn connect(api_base: &str, token_file: &Path) -> Session {
    let client = Rc::new(ApiClient::new(ClientConfig::new(api_base), ReqwestTransport::new()));
    SessionStore::new(client, FileTokenStore::new(token_file))
}

/// Dispatch one parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let session = connect(&cli.api_base, &cli.token_file);
    tracing::debug!(api_base = %session.client().config().api_base(), "connected");

    let result = match cli.command {
        Commands::Login(credentials) => {
            let principal = auth::login(&session, &credentials).await?;
            print_json(&principal)
        },
        Commands::Logout => {
            auth::logout(&session);
            Ok(())
        },
        Commands::Register {
            credentials,
            role,
        } => auth::register(&session, &credentials, role.into()).await,
        Commands::Whoami => {
            let principal = auth::whoami(&session).await?;
            print_json(&principal)
        },
        Commands::Articles(command) => {
            session.initialize().await;
            articles::run(&session.client(), command).await
        },
        Commands::Categories(command) => {
            session.initialize().await;
            categories::run(&session.client(), command).await
        },
        Commands::Upload {
            file,
        } => {
            session.initialize().await;
            upload::upload(&session.client(), &file)
                .await
                .and_then(|image_url| print_json(&serde_json::json!({ "imageUrl": image_url })))
        },
    };

    if let Some(err) = result.as_ref().err().and_then(|err| err.downcast_ref::<ApiError>()) {
        session.expire_if_unauthorized(err);
    }
    result
}

/// Turn an API failure into an error whose top-level message is the
/// server's text, else `fallback`.
pub(crate) fn api_failure(err: ApiError, fallback: &str) -> anyhow::Error {
    let message = err.message_or(fallback);
    anyhow::Error::new(err).context(message)
}

/// One line per invalid field.
pub(crate) fn invalid(errors: &FieldErrors) -> anyhow::Error {
    let lines = errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join("\n");
    anyhow!("invalid input\n{lines}")
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageOutput<'a, T> {
    page: u32,
    limit: u32,
    total: u64,
    total_pages: u32,
    range: Option<(u64, u64)>,
    items: &'a [T],
}

pub(crate) fn print_page<T: Serialize>(page: &Page<T>) -> Result<()> {
    let pagination = Pagination {
        page: page.page,
        limit: page.limit,
        total: page.total,
    };
    print_json(&PageOutput {
        page: page.page,
        limit: page.limit,
        total: page.total,
        total_pages: pagination.total_pages(),
        range: pagination.range(),
        items: &page.items,
    })
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
