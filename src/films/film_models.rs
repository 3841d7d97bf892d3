use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validators::{ValidationChecks, ValidationError};

// ** Section: "name" **

pub const MSG_NAME_REQUIRED: &str = "Название фильма не может быть пустым";

pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    ValidationChecks::required(value, MSG_NAME_REQUIRED)?;
    Ok(())
}

// ** Section: "description" **

pub const DESCRIPTION_MAX: u8 = 200;
pub const MSG_DESCRIPTION_MAX_LENGTH: &str = "Максимальная длина описания — 200 символов";

pub fn validate_description(value: &str) -> Result<(), ValidationError> {
    ValidationChecks::max_length(value, DESCRIPTION_MAX.into(), MSG_DESCRIPTION_MAX_LENGTH)?;
    Ok(())
}

// ** Section: "release_date" **

pub const MSG_RELEASE_DATE_TOO_EARLY: &str = "Дата релиза не может быть раньше 28 декабря 1895 года";

/// The date of the first public film screening. No film can be released earlier.
pub fn min_release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1895, 12, 28).unwrap()
}

pub fn validate_release_date(value: &NaiveDate) -> Result<(), ValidationError> {
    ValidationChecks::min_date(value, min_release_date(), MSG_RELEASE_DATE_TOO_EARLY)?;
    Ok(())
}

// ** Section: "duration" **

pub const MSG_DURATION_NOT_POSITIVE: &str = "Продолжительность фильма должна быть положительной";

pub fn validate_duration(value: i32) -> Result<(), ValidationError> {
    ValidationChecks::positive(value, MSG_DURATION_NOT_POSITIVE)?;
    Ok(())
}

// ** Section: "films" entity **

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub release_date: NaiveDate,
    pub duration: i32,
}

impl Film {
    /// Create a new entity instance (the id is assigned by the storage).
    pub fn new(name: &str, description: &str, release_date: NaiveDate, duration: i32) -> Self {
        Film {
            id: 0,
            name: name.to_string(),
            description: description.to_string(),
            release_date,
            duration,
        }
    }
}
