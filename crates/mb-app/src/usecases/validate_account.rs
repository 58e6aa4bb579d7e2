use tracing::debug;

use mb_core::account::{validate_login, validate_sign_up, AccountField, LoginForm, SignUpForm};
use mb_core::ValidationResult;

/// Use case checking sign-up and login forms before they reach the auth service.
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidateAccountForm;

impl ValidateAccountForm {
    pub fn new() -> Self {
        Self
    }

    pub fn sign_up(&self, form: &SignUpForm) -> ValidationResult<AccountField> {
        let result = validate_sign_up(form);
        debug!(
            account_type = ?form.account_type,
            failing = result.errors.len(),
            "sign-up form validated"
        );
        result
    }

    pub fn login(&self, form: &LoginForm) -> ValidationResult<AccountField> {
        let result = validate_login(form);
        debug!(failing = result.errors.len(), "login form validated");
        result
    }
}
