//! Session lifecycle: token restore, login, registration and logout.
//!
//! The store owns the only writable handle to the bearer token. Its state
//! is an explicit value ([`SessionState`]); consumers subscribe to
//! transitions instead of polling.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::{
    client::ApiClient,
    error::{ActionFailure, ApiError},
    http::HttpTransport,
    models::{Principal, ProfileResponse, Role},
    storage::TokenStore,
};

/// Fallback text for a failed login without server message.
pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

/// Fallback text for a failed registration without server message.
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// Lifecycle of a session within one page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Persisted token not yet verified.
    Pending,
    /// A principal is known.
    Authenticated,
    /// No valid token.
    Anonymous,
}

/// Snapshot delivered to observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Lifecycle status.
    pub status: SessionStatus,
    /// Present iff `status` is [`SessionStatus::Authenticated`].
    pub principal: Option<Principal>,
}

impl SessionState {
    /// Initial state of every page load.
    pub fn pending() -> Self {
        Self {
            status: SessionStatus::Pending,
            principal: None,
        }
    }

    fn anonymous() -> Self {
        Self {
            status: SessionStatus::Anonymous,
            principal: None,
        }
    }

    fn authenticated(principal: Principal) -> Self {
        Self {
            status: SessionStatus::Authenticated,
            principal: Some(principal),
        }
    }

    /// Role of the principal, if authenticated.
    pub fn role(&self) -> Option<Role> {
        self.principal.as_ref().map(|principal| principal.role)
    }
}

/// Where the UI should go after a session action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    /// Anonymous landing (the login screen).
    Home,
    /// Admin article management list.
    AdminArticles,
    /// Reader article list.
    UserArticles,
}

impl Landing {
    /// Landing for a freshly authenticated role.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Landing::AdminArticles,
            Role::User => Landing::UserArticles,
        }
    }

    /// Route path of the landing.
    pub fn path(self) -> &'static str {
        match self {
            Landing::Home => "/",
            Landing::AdminArticles => "/admin/articles",
            Landing::UserArticles => "/user/articles",
        }
    }
}

/// Successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSuccess {
    /// Principal now attached to the session.
    pub principal: Principal,
    /// Role-specific landing to navigate to.
    pub landing: Landing,
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Rc<dyn Fn(&SessionState)>;

/// Session state machine bound to one [`ApiClient`] and one [`TokenStore`].
pub struct SessionStore<T, S> {
    client: Rc<ApiClient<T>>,
    tokens: S,
    state: RefCell<SessionState>,
    initialized: Cell<bool>,
    epoch: Cell<u64>,
    observers: RefCell<Vec<(SubscriptionId, Observer)>>,
    next_subscription: Cell<u64>,
}

impl<T: HttpTransport, S: TokenStore> SessionStore<T, S> {
    /// New store in [`SessionStatus::Pending`].
    pub fn new(client: Rc<ApiClient<T>>, tokens: S) -> Self {
        Self {
            client,
            tokens,
            state: RefCell::new(SessionState::pending()),
            initialized: Cell::new(false),
            epoch: Cell::new(0),
            observers: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
        }
    }

    /// Shared API client, already carrying the session token.
    pub fn client(&self) -> Rc<ApiClient<T>> {
        self.client.clone()
    }

    /// Token persistence backend.
    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    /// Current state snapshot.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Register `observer` for every later transition.
    pub fn subscribe(&self, observer: impl Fn(&SessionState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.observers.borrow_mut().push((id, Rc::new(observer)));
        id
    }

    /// Stop notifying the observer behind `id`.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.observers.borrow_mut().retain(|(existing, _)| *existing != id);
    }

    fn transition(&self, next: SessionState) {
        tracing::debug!(status = ?next.status, "session transition");
        *self.state.borrow_mut() = next.clone();
        let observers: Vec<Observer> = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect();
        for observer in observers {
            observer(&next);
        }
    }

    /// Invalidate any token restore still in flight.
    fn supersede(&self) {
        self.epoch.set(self.epoch.get() + 1);
    }

    fn drop_credentials(&self) {
        self.client.set_token(None);
        if let Err(err) = self.tokens.clear() {
            tracing::warn!(error = %err, "failed to clear persisted token");
        }
    }

    /// Resolve the persisted token into a principal. Runs at most once per
    /// store; later calls return the current state untouched.
    ///
    /// A login or logout that happens while the profile request is in
    /// flight wins: the late result neither clears the token nor changes
    /// the state.
    pub async fn initialize(&self) -> SessionState {
        if self.initialized.replace(true) {
            return self.state();
        }

        let Some(token) = self.tokens.load().filter(|token| !token.trim().is_empty()) else {
            self.transition(SessionState::anonymous());
            return self.state();
        };

        let epoch = self.epoch.get();
        self.client.set_token(Some(token));
        let profile = self.client.profile().await;
        if self.epoch.get() != epoch {
            tracing::debug!("token restore superseded, discarding result");
            return self.state();
        }
        match profile {
            Ok(profile) => match verified_principal(profile) {
                Some(principal) => self.transition(SessionState::authenticated(principal)),
                None => {
                    tracing::warn!("profile response incomplete, dropping persisted token");
                    self.drop_credentials();
                    self.transition(SessionState::anonymous());
                },
            },
            Err(err) => {
                tracing::warn!(error = %err, "persisted token rejected");
                self.drop_credentials();
                self.transition(SessionState::anonymous());
            },
        }
        self.state()
    }

    /// Authenticate, persist the token and resolve the principal.
    ///
    /// A failed profile lookup after a successful login is tolerated: the
    /// principal falls back to the submitted username with role
    /// [`Role::User`].
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginSuccess, ActionFailure> {
        self.initialized.set(true);
        self.supersede();

        let token = match self.client.login(username, password).await {
            Ok(response) if !response.token.trim().is_empty() => response.token,
            Ok(_) => return Err(self.fail_login(None)),
            Err(err) => return Err(self.fail_login(Some(err))),
        };

        self.client.set_token(Some(token.clone()));
        if let Err(err) = self.tokens.save(&token) {
            tracing::warn!(error = %err, "token kept in memory only");
        }

        let principal = match self.client.profile().await {
            Ok(profile) => lenient_principal(profile, username),
            Err(err) => {
                tracing::warn!(error = %err, "profile lookup failed after login, using defaults");
                Principal {
                    username: username.to_string(),
                    role: Role::User,
                }
            },
        };

        let landing = Landing::for_role(principal.role);
        self.transition(SessionState::authenticated(principal.clone()));
        Ok(LoginSuccess {
            principal,
            landing,
        })
    }

    fn fail_login(&self, err: Option<ApiError>) -> ActionFailure {
        if let Some(err) = &err {
            tracing::warn!(error = %err, "login failed");
        }
        self.drop_credentials();
        self.transition(SessionState::anonymous());
        ActionFailure {
            message: err
                .map(|err| err.message_or(LOGIN_FAILED))
                .unwrap_or_else(|| LOGIN_FAILED.to_string()),
        }
    }

    /// Create an account. Never changes the session.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        role: Role,
    ) -> Result<(), ActionFailure> {
        self.client
            .register(username, password, role)
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "registration failed");
                ActionFailure {
                    message: err.message_or(REGISTRATION_FAILED),
                }
            })
    }

    /// End the session and return the anonymous landing.
    pub fn logout(&self) -> Landing {
        self.initialized.set(true);
        self.supersede();
        self.drop_credentials();
        self.transition(SessionState::anonymous());
        Landing::Home
    }

    /// Like [`logout`](Self::logout), for a token the server stopped
    /// accepting mid-session.
    pub fn expire(&self) -> Landing {
        tracing::warn!("session token rejected by server");
        self.logout()
    }

    /// [`expire`](Self::expire) the session when `err` is an
    /// authentication failure; returns the landing to navigate to.
    pub fn expire_if_unauthorized(&self, err: &ApiError) -> Option<Landing> {
        err.is_unauthorized().then(|| self.expire())
    }
}

fn verified_principal(profile: ProfileResponse) -> Option<Principal> {
    let username = profile.username.filter(|name| !name.trim().is_empty())?;
    let role = profile.role.as_deref().and_then(Role::parse)?;
    Some(Principal {
        username,
        role,
    })
}

fn lenient_principal(profile: ProfileResponse, submitted: &str) -> Principal {
    Principal {
        username: profile
            .username
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| submitted.to_string()),
        role: profile.role.as_deref().and_then(Role::parse).unwrap_or(Role::User),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::Notify;

    use crate::{
        config::ClientConfig,
        storage::MemoryTokenStore,
        testing::{json_response, ScriptedTransport},
    };

    fn store_with(tokens: MemoryTokenStore) -> SessionStore<ScriptedTransport, MemoryTokenStore> {
        let client = Rc::new(ApiClient::new(
            ClientConfig::new("http://api.test/api"),
            ScriptedTransport::default(),
        ));
        SessionStore::new(client, tokens)
    }

    fn transport(store: &SessionStore<ScriptedTransport, MemoryTokenStore>) -> Rc<ApiClient<ScriptedTransport>> {
        store.client()
    }

    #[tokio::test]
    async fn initialize_without_token_is_anonymous_and_silent() {
        let store = store_with(MemoryTokenStore::default());
        assert_eq!(store.state().status, SessionStatus::Pending);

        let state = store.initialize().await;
        assert_eq!(state.status, SessionStatus::Anonymous);
        assert!(transport(&store).transport().requests().is_empty());
    }

    #[tokio::test]
    async fn initialize_restores_principal_from_profile() {
        let store = store_with(MemoryTokenStore::with_token("tok-1"));
        transport(&store)
            .transport()
            .push(json_response(200, r#"{"username":"ada","role":"Admin"}"#));

        let state = store.initialize().await;
        assert_eq!(state.status, SessionStatus::Authenticated);
        assert_eq!(state.role(), Some(Role::Admin));

        let sent = transport(&store).transport().requests();
        assert_eq!(sent[0].header("Authorization"), Some("Bearer tok-1"));
    }

    #[tokio::test]
    async fn initialize_clears_rejected_token() {
        let store = store_with(MemoryTokenStore::with_token("expired"));
        transport(&store)
            .transport()
            .push(json_response(401, r#"{"message":"jwt expired"}"#));

        let state = store.initialize().await;
        assert_eq!(state.status, SessionStatus::Anonymous);
        assert_eq!(store.tokens().load(), None);
        assert!(!store.client().has_token());
    }

    #[tokio::test]
    async fn initialize_clears_token_on_malformed_profile() {
        let store = store_with(MemoryTokenStore::with_token("tok"));
        transport(&store).transport().push(json_response(200, r#"{"role":"Admin"}"#));

        assert_eq!(store.initialize().await.status, SessionStatus::Anonymous);
        assert_eq!(store.tokens().load(), None);
    }

    #[tokio::test]
    async fn initialize_runs_once() {
        let store = store_with(MemoryTokenStore::with_token("tok"));
        transport(&store)
            .transport()
            .push(json_response(200, r#"{"username":"ada","role":"User"}"#));

        store.initialize().await;
        store.initialize().await;
        assert_eq!(transport(&store).transport().requests().len(), 1);
    }

    #[tokio::test]
    async fn admin_login_persists_token_and_lands_on_admin_list() {
        let store = store_with(MemoryTokenStore::default());
        let api = transport(&store);
        api.transport().push(json_response(200, r#"{"token":"tok-admin"}"#));
        api.transport()
            .push(json_response(200, r#"{"username":"root","role":"Admin"}"#));

        let success = store.login("root", "secret").await.expect("login");
        assert_eq!(success.landing, Landing::AdminArticles);
        assert_eq!(success.landing.path(), "/admin/articles");
        assert_eq!(store.state().status, SessionStatus::Authenticated);
        assert_eq!(store.tokens().load().as_deref(), Some("tok-admin"));
        assert_eq!(api.transport().paths(), vec!["POST /auth/login", "GET /auth/profile"]);
    }

    #[tokio::test]
    async fn login_falls_back_to_user_role_when_profile_fails() {
        let store = store_with(MemoryTokenStore::default());
        let api = transport(&store);
        api.transport().push(json_response(200, r#"{"token":"tok"}"#));
        api.transport().push_error(ApiError::Network("reset".to_string()));

        let success = store.login("budi", "pw").await.expect("login");
        assert_eq!(
            success.principal,
            Principal {
                username: "budi".to_string(),
                role: Role::User
            }
        );
        assert_eq!(success.landing, Landing::UserArticles);
    }

    #[tokio::test]
    async fn failed_login_reports_server_message_and_persists_nothing() {
        let store = store_with(MemoryTokenStore::default());
        transport(&store)
            .transport()
            .push(json_response(401, r#"{"message":"Invalid username or password"}"#));

        let failure = store.login("ada", "wrong").await.expect_err("login must fail");
        assert_eq!(failure.message, "Invalid username or password");
        assert_eq!(store.state().status, SessionStatus::Anonymous);
        assert_eq!(store.tokens().load(), None);
    }

    #[tokio::test]
    async fn failed_login_without_message_uses_generic_text() {
        let store = store_with(MemoryTokenStore::default());
        transport(&store)
            .transport()
            .push_error(ApiError::Network("dns".to_string()));

        let failure = store.login("ada", "pw").await.expect_err("login must fail");
        assert_eq!(failure.message, LOGIN_FAILED);
    }

    #[tokio::test]
    async fn register_does_not_log_in() {
        let store = store_with(MemoryTokenStore::default());
        store.initialize().await;
        transport(&store).transport().push(json_response(201, r#"{"id":"u1"}"#));

        store.register("new", "pw", Role::Admin).await.expect("register");
        assert_eq!(store.state().status, SessionStatus::Anonymous);
        assert_eq!(store.tokens().load(), None);
    }

    #[tokio::test]
    async fn register_failure_passes_message_through() {
        let store = store_with(MemoryTokenStore::default());
        transport(&store)
            .transport()
            .push(json_response(400, r#"{"message":"Username already taken"}"#));

        let failure = store.register("ada", "pw", Role::User).await.expect_err("duplicate");
        assert_eq!(failure.message, "Username already taken");
    }

    #[tokio::test]
    async fn logout_clears_everything_and_notifies() {
        let store = store_with(MemoryTokenStore::with_token("tok"));
        transport(&store)
            .transport()
            .push(json_response(200, r#"{"username":"ada","role":"User"}"#));
        store.initialize().await;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let id = store.subscribe(move |state| sink.borrow_mut().push(state.status));

        assert_eq!(store.logout(), Landing::Home);
        assert_eq!(store.tokens().load(), None);
        assert!(!store.client().has_token());
        assert_eq!(*seen.borrow(), vec![SessionStatus::Anonymous]);

        store.unsubscribe(id);
        store.logout();
        assert_eq!(seen.borrow().len(), 1);
    }

    #[tokio::test]
    async fn login_during_token_restore_keeps_the_new_token() {
        let store = store_with(MemoryTokenStore::with_token("stale"));
        let api = transport(&store);
        let gate = Rc::new(Notify::new());
        api.transport()
            .push_gated(gate.clone(), json_response(401, r#"{"message":"jwt expired"}"#));
        api.transport().push(json_response(200, r#"{"token":"fresh"}"#));
        api.transport()
            .push(json_response(200, r#"{"username":"root","role":"Admin"}"#));

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |state| sink.borrow_mut().push(state.status));

        let sign_in = async {
            let result = store.login("root", "secret").await;
            gate.notify_one();
            result
        };
        let (restored, signed_in) = tokio::join!(store.initialize(), sign_in);

        assert_eq!(signed_in.expect("login").landing, Landing::AdminArticles);
        assert_eq!(restored.status, SessionStatus::Authenticated);
        assert_eq!(store.state().status, SessionStatus::Authenticated);
        assert_eq!(store.tokens().load().as_deref(), Some("fresh"));
        assert!(store.client().has_token());
        assert_eq!(*seen.borrow(), vec![SessionStatus::Authenticated]);
    }

    #[tokio::test]
    async fn logout_during_token_restore_stays_anonymous() {
        let store = store_with(MemoryTokenStore::with_token("tok"));
        let gate = Rc::new(Notify::new());
        transport(&store)
            .transport()
            .push_gated(gate.clone(), json_response(200, r#"{"username":"ada","role":"User"}"#));

        let sign_out = async {
            tokio::task::yield_now().await;
            let landing = store.logout();
            gate.notify_one();
            landing
        };
        let (restored, landing) = tokio::join!(store.initialize(), sign_out);

        assert_eq!(landing, Landing::Home);
        assert_eq!(restored.status, SessionStatus::Anonymous);
        assert_eq!(store.tokens().load(), None);
    }

    #[tokio::test]
    async fn unauthorized_error_expires_an_active_session() {
        let store = store_with(MemoryTokenStore::with_token("tok"));
        transport(&store)
            .transport()
            .push(json_response(200, r#"{"username":"ada","role":"Admin"}"#));
        store.initialize().await;

        let forbidden = ApiError::Status {
            status: 403,
            message: Some("Forbidden".to_string()),
        };
        assert_eq!(store.expire_if_unauthorized(&forbidden), None);
        assert_eq!(store.state().status, SessionStatus::Authenticated);

        let unauthorized = ApiError::Status {
            status: 401,
            message: None,
        };
        assert_eq!(store.expire_if_unauthorized(&unauthorized), Some(Landing::Home));
        assert_eq!(store.state().status, SessionStatus::Anonymous);
        assert_eq!(store.tokens().load(), None);
        assert!(!store.client().has_token());
    }
}
