use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validators::{ValidationChecks, ValidationError};

// ** Section: "email" **

pub const MSG_EMAIL_INVALID: &str = "Email должен содержать @ и не быть пустым";

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    ValidationChecks::required(value, MSG_EMAIL_INVALID)?;
    ValidationChecks::contains_symbol(value, '@', MSG_EMAIL_INVALID)?;
    Ok(())
}

// ** Section: "login" **

pub const LOGIN_WHITESPACE_REGEX: &str = r"[\s]";
pub const MSG_LOGIN_INVALID: &str = "Логин не может быть пустым или содержать пробел";

pub fn validate_login(value: &str) -> Result<(), ValidationError> {
    ValidationChecks::required(value, MSG_LOGIN_INVALID)?;
    ValidationChecks::forbidden_regexp(value, LOGIN_WHITESPACE_REGEX, MSG_LOGIN_INVALID)?;
    Ok(())
}

// ** Section: "birthday" **

pub const MSG_BIRTHDAY_IN_FUTURE: &str = "Дата рождения не может быть в будущем";

pub fn validate_birthday(value: &NaiveDate) -> Result<(), ValidationError> {
    let today = chrono::Utc::now().date_naive();
    ValidationChecks::max_date(value, today, MSG_BIRTHDAY_IN_FUTURE)?;
    Ok(())
}

// ** Section: "users" entity **

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub name: String,
    pub birthday: NaiveDate,
}

impl User {
    /// Create a new entity instance (the id is assigned by the storage).
    pub fn new(email: &str, login: &str, name: &str, birthday: NaiveDate) -> Self {
        User {
            id: 0,
            email: email.to_string(),
            login: login.to_string(),
            name: name.to_string(),
            birthday,
        }
    }
}
