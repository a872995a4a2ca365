//! `login`, `logout`, `register` and `whoami`.

use anyhow::{bail, Result};
use pressdesk_shared::{credentials::Credentials, Principal, Role};

use super::{invalid, Session};
use crate::cli::CredentialArgs;

fn credentials(args: &CredentialArgs) -> Result<Credentials> {
    let credentials = Credentials {
        username: args.username.clone(),
        password: args.password.clone(),
    };
    let errors = credentials.validate();
    if !errors.is_empty() {
        return Err(invalid(&errors));
    }
    Ok(credentials)
}

/// Sign in; the token is persisted for later runs.
pub async fn login(session: &Session, args: &CredentialArgs) -> Result<Principal> {
    let credentials = credentials(args)?;
    let success = session
        .login(credentials.username(), &credentials.password)
        .await?;
    tracing::info!(
        username = %success.principal.username,
        role = %success.principal.role,
        "signed in"
    );
    Ok(success.principal)
}

/// Drop the persisted token.
pub fn logout(session: &Session) {
    session.logout();
    tracing::info!("signed out");
}

/// Create an account with `role`. The current session is left alone.
pub async fn register(session: &Session, args: &CredentialArgs, role: Role) -> Result<()> {
    let credentials = credentials(args)?;
    session
        .register(credentials.username(), &credentials.password, role)
        .await?;
    tracing::info!(username = %credentials.username(), %role, "account created, sign in with `pd-cli login`");
    Ok(())
}

/// Resolve the persisted token into the signed-in principal.
pub async fn whoami(session: &Session) -> Result<Principal> {
    match session.initialize().await.principal {
        Some(principal) => Ok(principal),
        None => bail!("not signed in"),
    }
}
