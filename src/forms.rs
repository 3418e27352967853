use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Field name → human-readable message, serialized as `{"errors": {...}}`.
pub type FieldErrors = BTreeMap<&'static str, String>;

const REQUIRED: &str = "This field is required.";

// Raw memo submission, straight from the form body
#[derive(Debug, Deserialize)]
pub struct MemoForm {
    pub title: Option<String>,
    pub content: Option<String>,
    pub reminder_date: Option<String>,
}

#[derive(Debug)]
pub struct ValidMemo {
    pub title: String,
    pub content: String,
    pub reminder_date: Option<DateTime<Utc>>,
}

impl MemoForm {
    /// Checks every field so a single submission can collect multiple
    /// errors at once.
    pub fn validate(self) -> Result<ValidMemo, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = self.title.as_deref().unwrap_or("").trim().to_owned();
        if title.is_empty() {
            errors.insert("title", REQUIRED.to_owned());
        }

        let content = self.content.as_deref().unwrap_or("").trim().to_owned();
        if content.is_empty() {
            errors.insert("content", REQUIRED.to_owned());
        }

        let reminder_date = match self.reminder_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => match DateTime::parse_from_rfc3339(raw) {
                Ok(parsed) => Some(parsed.with_timezone(&Utc)),
                Err(_) => {
                    errors.insert("reminder_date", "Enter a valid date and time.".to_owned());
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidMemo {
            title,
            content,
            reminder_date,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password1: Option<String>,
    pub password2: Option<String>,
}

#[derive(Debug)]
pub struct ValidRegistration {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    /// Shape-level checks only. Username uniqueness is enforced by the
    /// store's unique constraint at insert time.
    pub fn validate(self) -> Result<ValidRegistration, FieldErrors> {
        let mut errors = FieldErrors::new();

        let username = self.username.as_deref().unwrap_or("").trim().to_owned();
        if username.is_empty() {
            errors.insert("username", REQUIRED.to_owned());
        }

        let email = self.email.as_deref().unwrap_or("").trim().to_owned();
        if email.is_empty() {
            errors.insert("email", REQUIRED.to_owned());
        }

        // Passwords are compared verbatim; trimming would silently change them.
        let password1 = self.password1.unwrap_or_default();
        if password1.is_empty() {
            errors.insert("password1", REQUIRED.to_owned());
        }

        let password2 = self.password2.unwrap_or_default();
        if password2 != password1 {
            errors.insert("password2", "The two password fields didn't match.".to_owned());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ValidRegistration {
            username,
            email,
            password: password1,
        })
    }
}
