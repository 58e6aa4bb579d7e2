//! Sign-up and login forms.
//!
//! Workshops register with a VAT number; private owners do not.

use serde::{Deserialize, Serialize};

use crate::validation::{field, ErrorCollector, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountField {
    Email,
    Password,
    ConfirmPassword,
    VatNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    #[default]
    Owner,
    Workshop,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignUpForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub account_type: AccountType,
    pub vat_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

pub fn validate_sign_up(form: &SignUpForm) -> ValidationResult<AccountField> {
    let mut errors = ErrorCollector::new();
    errors
        .check(AccountField::Email, field::email(&form.email))
        .check(AccountField::Password, field::password(&form.password))
        .check(
            AccountField::ConfirmPassword,
            field::required(Some(form.confirm_password.as_str()), "Password confirmation"),
        )
        .check(
            AccountField::ConfirmPassword,
            field::password_confirmation(&form.password, &form.confirm_password),
        );
    if form.account_type == AccountType::Workshop {
        errors.check(
            AccountField::VatNumber,
            field::vat_number(form.vat_number.as_deref().unwrap_or_default()),
        );
    }
    errors.finish()
}

pub fn validate_login(form: &LoginForm) -> ValidationResult<AccountField> {
    let mut errors = ErrorCollector::new();
    errors
        .check(AccountField::Email, field::email(&form.email))
        .check(
            AccountField::Password,
            field::required(Some(form.password.as_str()), "Password"),
        );
    errors.finish()
}
