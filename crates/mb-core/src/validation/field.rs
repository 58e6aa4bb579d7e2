//! Single-field rules.
//!
//! A rule never panics: it returns `Ok(())` or the message shown next to the field.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::vehicle::NumberInput;

/// `LLNNNLL` (current plates) and `LLNNNNN` (older plates).
static PLATE_CURRENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2}[0-9]{3}[A-Z]{2}$").expect("valid plate regex"));
static PLATE_LEGACY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2}[0-9]{5}$").expect("valid plate regex"));
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static VAT_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{11}$").expect("valid vat regex"));

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn required(value: Option<&str>, label: &str) -> Result<(), String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(()),
        _ => Err(format!("{label} is required")),
    }
}

pub fn required_number(value: Option<&NumberInput>, label: &str) -> Result<(), String> {
    match value {
        Some(v) if !v.is_blank() => Ok(()),
        _ => Err(format!("{label} is required")),
    }
}

pub fn license_plate(value: &str) -> Result<(), String> {
    let plate = value.trim().to_uppercase();
    if plate.is_empty() {
        return Err("License plate is required".to_string());
    }
    if PLATE_CURRENT.is_match(&plate) || PLATE_LEGACY.is_match(&plate) {
        Ok(())
    } else {
        Err("Invalid license plate format (e.g. AB123CD or AB12345)".to_string())
    }
}

pub fn email(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Email is required".to_string());
    }
    if EMAIL.is_match(value.trim()) {
        Ok(())
    } else {
        Err("Invalid email address".to_string())
    }
}

pub fn password(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Password is required".to_string());
    }
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }
    Ok(())
}

pub fn password_confirmation(password: &str, confirmation: &str) -> Result<(), String> {
    if password == confirmation {
        Ok(())
    } else {
        Err("Passwords do not match".to_string())
    }
}

pub fn vat_number(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("VAT number is required".to_string());
    }
    if VAT_NUMBER.is_match(value.trim()) {
        Ok(())
    } else {
        Err("VAT number must be exactly 11 digits".to_string())
    }
}

/// A model year must be a positive whole number.
pub fn year(value: &NumberInput) -> Result<(), String> {
    match value.as_i64() {
        Some(year) if year > 0 => Ok(()),
        Some(_) => Err("Year is out of range".to_string()),
        None => Err("Year must be a number".to_string()),
    }
}
