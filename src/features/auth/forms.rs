//! Declarative per-screen validation schemas evaluated before any network
//! call. Field errors render inline next to their field; the confirmation
//! mismatch is attached to the confirmation field on purpose.

use crate::features::session::state::{ROLE_ADMIN, ROLE_CUSTOMER};
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, Validate)]
pub struct LoginForm {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Validate)]
pub struct RegisterForm {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[validate(length(min = 2, message = "Last name must be at least 2 characters"))]
    pub lastname: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,

    /// Open set of role names; privilege is enforced by [`effective_role`],
    /// not by the schema.
    pub role: String,
}

#[derive(Debug, Clone, Validate)]
pub struct ForgotPasswordForm {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
}

#[derive(Debug, Clone, Validate)]
pub struct ResetPasswordForm {
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,
}

/// Returns the first message recorded for a field, for inline display.
pub fn field_error(errors: &ValidationErrors, field: &'static str) -> Option<String> {
    errors
        .field_errors()
        .get(field)
        .and_then(|list| list.first())
        .map(|error| {
            error
                .message
                .as_ref()
                .map_or_else(|| "Invalid value".to_string(), ToString::to_string)
        })
}

/// Normalizes an email for request payloads.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Resolves the role actually submitted at registration. Only an admin
/// session may pick a role; everyone else is forced to the default,
/// regardless of what the form carried.
pub fn effective_role(session_role: Option<&str>, requested: &str) -> String {
    let requested = requested.trim();
    if session_role == Some(ROLE_ADMIN) && !requested.is_empty() {
        requested.to_string()
    } else {
        ROLE_CUSTOMER.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ForgotPasswordForm, LoginForm, RegisterForm, ResetPasswordForm, effective_role,
        field_error, normalize_email,
    };
    use validator::Validate;

    fn register_form() -> RegisterForm {
        RegisterForm {
            name: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            email: "ada@b.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            role: "customer".to_string(),
        }
    }

    #[test]
    fn login_rejects_malformed_emails() {
        for email in ["", "plain", "@b.com", "a@", "a @b.com"] {
            let form = LoginForm {
                email: email.to_string(),
                password: "secret1".to_string(),
            };
            let errors = form.validate().expect_err("email should be rejected");
            assert!(
                field_error(&errors, "email").is_some(),
                "expected email error for {email:?}"
            );
        }
    }

    #[test]
    fn login_rejects_short_passwords() {
        let form = LoginForm {
            email: "a@b.com".to_string(),
            password: "12345".to_string(),
        };
        let errors = form.validate().expect_err("password should be rejected");
        assert_eq!(
            field_error(&errors, "password").as_deref(),
            Some("Password must be at least 6 characters")
        );
    }

    #[test]
    fn login_accepts_valid_input() {
        let form = LoginForm {
            email: "a@b.com".to_string(),
            password: "123456".to_string(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn register_rejects_short_names() {
        let mut form = register_form();
        form.name = "A".to_string();
        let errors = form.validate().expect_err("name should be rejected");
        assert_eq!(
            field_error(&errors, "name").as_deref(),
            Some("Name must be at least 2 characters")
        );

        let mut form = register_form();
        form.lastname = "L".to_string();
        let errors = form.validate().expect_err("lastname should be rejected");
        assert!(field_error(&errors, "lastname").is_some());
    }

    #[test]
    fn register_attaches_mismatch_to_the_confirmation_field() {
        let mut form = register_form();
        form.confirm_password = "different".to_string();

        let errors = form.validate().expect_err("mismatch should be rejected");
        assert_eq!(
            field_error(&errors, "confirm_password").as_deref(),
            Some("Passwords do not match")
        );
        assert!(field_error(&errors, "password").is_none());
    }

    #[test]
    fn register_accepts_valid_input() {
        assert!(register_form().validate().is_ok());
    }

    #[test]
    fn forgot_password_checks_email_only() {
        let form = ForgotPasswordForm {
            email: "not-an-email".to_string(),
        };
        assert!(form.validate().is_err());

        let form = ForgotPasswordForm {
            email: "a@b.com".to_string(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn reset_password_mirrors_register_rules() {
        let form = ResetPasswordForm {
            password: "short".to_string(),
            confirm_password: "short".to_string(),
        };
        let errors = form.validate().expect_err("password should be rejected");
        assert!(field_error(&errors, "password").is_some());

        let form = ResetPasswordForm {
            password: "123456".to_string(),
            confirm_password: "654321".to_string(),
        };
        let errors = form.validate().expect_err("mismatch should be rejected");
        assert_eq!(
            field_error(&errors, "confirm_password").as_deref(),
            Some("Passwords do not match")
        );

        let form = ResetPasswordForm {
            password: "123456".to_string(),
            confirm_password: "123456".to_string(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(normalize_email("  Ada@B.Com "), "ada@b.com");
    }

    #[test]
    fn effective_role_forces_the_default_for_non_admins() {
        assert_eq!(effective_role(None, "admin"), "customer");
        assert_eq!(effective_role(Some("customer"), "admin"), "customer");
        assert_eq!(effective_role(Some("support"), "admin"), "customer");
    }

    #[test]
    fn effective_role_lets_admins_choose() {
        assert_eq!(effective_role(Some("admin"), "admin"), "admin");
        assert_eq!(effective_role(Some("admin"), "customer"), "customer");
        assert_eq!(effective_role(Some("admin"), ""), "customer");
    }
}
