//! Username/password input shared by the login and registration screens.

use crate::error::FieldErrors;

/// Field key of the username input.
pub const FIELD_USERNAME: &str = "username";
/// Field key of the password input.
pub const FIELD_PASSWORD: &str = "password";

/// Raw login or registration input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Account name as typed.
    pub username: String,
    /// Password as typed; never logged.
    pub password: String,
}

impl Credentials {
    /// Both fields must be non-blank before anything is sent.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.username.trim().is_empty() {
            errors.insert(FIELD_USERNAME, "Username is required");
        }
        if self.password.is_empty() {
            errors.insert(FIELD_PASSWORD, "Password is required");
        }
        errors
    }

    /// Username with surrounding whitespace removed.
    pub fn username(&self) -> &str {
        self.username.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_fields_are_required() {
        let errors = Credentials::default().validate();
        assert!(errors.contains(FIELD_USERNAME));
        assert!(errors.contains(FIELD_PASSWORD));

        let ok = Credentials {
            username: " ada ".to_string(),
            password: "secret".to_string(),
        };
        assert!(ok.validate().is_empty());
        assert_eq!(ok.username(), "ada");
    }
}
