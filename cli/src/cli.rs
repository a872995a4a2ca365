//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pressdesk_shared::{
    config::{ADMIN_ARTICLE_LIMIT, CATEGORY_LIMIT},
    Role,
};

/// API base used when neither `--api-base` nor `PRESSDESK_API_BASE` is set.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Top-level arguments.
#[derive(Debug, Parser)]
#[command(name = "pd-cli", version, about = "PressDesk content API client")]
pub struct Cli {
    /// API base URL.
    #[arg(long, env = "PRESSDESK_API_BASE", default_value = DEFAULT_API_BASE, global = true)]
    pub api_base: String,
    /// File holding the bearer token between runs.
    #[arg(long, env = "PRESSDESK_TOKEN_FILE", default_value = ".pressdesk/token", global = true)]
    pub token_file: PathBuf,
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Role choice for `register`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    /// Manages articles and categories.
    Admin,
    /// Reads articles.
    User,
}

impl From<RoleArg> for Role {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::Admin => Role::Admin,
            RoleArg::User => Role::User,
        }
    }
}

/// Username and password flags.
#[derive(Debug, Clone, Args)]
pub struct CredentialArgs {
    /// Account name.
    #[arg(long)]
    pub username: String,
    /// Password; prefer the environment variable over the flag.
    #[arg(long, env = "PRESSDESK_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in and persist the token.
    Login(CredentialArgs),
    /// Forget the persisted token.
    Logout,
    /// Create an account. Does not sign in.
    Register {
        /// Account name and password.
        #[command(flatten)]
        credentials: CredentialArgs,
        /// Role of the new account.
        #[arg(long, value_enum, default_value_t = RoleArg::User)]
        role: RoleArg,
    },
    /// Show the signed-in principal.
    Whoami,
    /// Article management.
    #[command(subcommand)]
    Articles(ArticleCommands),
    /// Category management.
    #[command(subcommand)]
    Categories(CategoryCommands),
    /// Upload an image and print its URL.
    Upload {
        /// Image file path.
        file: PathBuf,
    },
}

/// `articles` subcommands.
#[derive(Debug, Subcommand)]
pub enum ArticleCommands {
    /// List one page of articles.
    List {
        /// One-based page number.
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Page size.
        #[arg(long, default_value_t = ADMIN_ARTICLE_LIMIT)]
        limit: u32,
        /// Title search.
        #[arg(long)]
        title: Option<String>,
        /// Category id filter.
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one article.
    Show {
        /// Article id.
        id: String,
    },
    /// Up to three other articles of the same category.
    Related {
        /// Article id.
        id: String,
    },
    /// Create an article.
    Create {
        /// Headline, at least 10 characters.
        #[arg(long)]
        title: String,
        /// Category id.
        #[arg(long)]
        category: String,
        /// File holding the HTML body.
        #[arg(long)]
        content_file: PathBuf,
        /// Cover image to upload first.
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Update an article; omitted fields keep their stored values.
    Update {
        /// Article id.
        id: String,
        /// New headline.
        #[arg(long)]
        title: Option<String>,
        /// New category id.
        #[arg(long)]
        category: Option<String>,
        /// File holding the new HTML body.
        #[arg(long)]
        content_file: Option<PathBuf>,
        /// New cover image to upload first.
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Delete an article.
    Delete {
        /// Article id.
        id: String,
    },
}

/// `categories` subcommands.
#[derive(Debug, Subcommand)]
pub enum CategoryCommands {
    /// List one page of categories.
    List {
        /// One-based page number.
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Page size.
        #[arg(long, default_value_t = CATEGORY_LIMIT)]
        limit: u32,
        /// Name search.
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one category.
    Show {
        /// Category id.
        id: String,
    },
    /// Create a category.
    Create {
        /// Name, at least 3 characters.
        name: String,
    },
    /// Rename a category.
    Update {
        /// Category id.
        id: String,
        /// New name.
        name: String,
    },
    /// Delete a category.
    Delete {
        /// Category id.
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn register_defaults_to_user_role() {
        let cli = Cli::try_parse_from([
            "pd-cli",
            "register",
            "--username",
            "ada",
            "--password",
            "secret",
        ])
        .expect("parse register");
        match cli.command {
            Commands::Register {
                role,
                ..
            } => assert_eq!(Role::from(role), Role::User),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
