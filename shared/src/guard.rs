//! Role gate evaluated before any protected view renders.

use crate::{
    models::Role,
    session::{Landing, SessionState, SessionStatus},
};

/// Outcome of checking a session against a route's allowed roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still resolving: render a loading indicator only.
    Pending,
    /// Render the protected content.
    Allow,
    /// Navigate away without rendering anything.
    Redirect(Landing),
}

/// Decide whether `state` may see a view restricted to `allowed`.
pub fn evaluate(state: &SessionState, allowed: &[Role]) -> GuardDecision {
    match state.status {
        SessionStatus::Pending => GuardDecision::Pending,
        SessionStatus::Authenticated => match state.role() {
            Some(role) if allowed.contains(&role) => GuardDecision::Allow,
            _ => GuardDecision::Redirect(Landing::Home),
        },
        SessionStatus::Anonymous => GuardDecision::Redirect(Landing::Home),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Principal;

    fn authenticated(role: Role) -> SessionState {
        SessionState {
            status: SessionStatus::Authenticated,
            principal: Some(Principal {
                username: "ada".to_string(),
                role,
            }),
        }
    }

    #[test]
    fn pending_never_allows() {
        assert_eq!(evaluate(&SessionState::pending(), &[Role::Admin]), GuardDecision::Pending);
    }

    #[test]
    fn anonymous_visitor_is_sent_home() {
        let anonymous = SessionState {
            status: SessionStatus::Anonymous,
            principal: None,
        };
        assert_eq!(
            evaluate(&anonymous, &[Role::Admin]),
            GuardDecision::Redirect(Landing::Home)
        );
    }

    #[test]
    fn role_must_be_listed() {
        assert_eq!(
            evaluate(&authenticated(Role::User), &[Role::Admin]),
            GuardDecision::Redirect(Landing::Home)
        );
        assert_eq!(
            evaluate(&authenticated(Role::User), &[Role::Admin, Role::User]),
            GuardDecision::Allow
        );
    }
}
