use serde::Serialize;

use mb_core::account::{AccountField, AccountType, LoginForm, SignUpForm};
use mb_core::ValidationResult;

use crate::bootstrap::Runtime;

/// Flags of `check-account`, before they become a form.
#[derive(Debug, Clone, Default)]
pub struct AccountCheck {
    pub email: String,
    pub password: String,
    /// Present means sign-up; absent means login.
    pub confirm_password: Option<String>,
    pub workshop: bool,
    pub vat_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountReport {
    pub form: &'static str,
    pub result: ValidationResult<AccountField>,
}

pub fn check_account(runtime: &Runtime, check: AccountCheck) -> AccountReport {
    let validate = runtime.usecases().validate_account();
    match check.confirm_password {
        Some(confirm_password) => AccountReport {
            form: "signUp",
            result: validate.sign_up(&SignUpForm {
                email: check.email,
                password: check.password,
                confirm_password,
                account_type: if check.workshop {
                    AccountType::Workshop
                } else {
                    AccountType::Owner
                },
                vat_number: check.vat_number,
            }),
        },
        None => AccountReport {
            form: "login",
            result: validate.login(&LoginForm {
                email: check.email,
                password: check.password,
            }),
        },
    }
}
