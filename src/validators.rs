use std::{borrow, collections::HashMap};

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{to_value, Value};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ValidationError {
    pub message: borrow::Cow<'static, str>,
    pub params: HashMap<borrow::Cow<'static, str>, Value>,
}

impl std::error::Error for ValidationError {}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", serde_json::to_string(&self).unwrap())
    }
}

impl ValidationError {
    pub fn new(message: &'static str) -> Self {
        ValidationError {
            message: borrow::Cow::Borrowed(message),
            params: HashMap::new(),
        }
    }
    pub fn add_param<'a, T: Serialize>(&mut self, name: borrow::Cow<'a, str>, val: &T) -> Self {
        self.params.insert(name.to_string().into(), to_value(val).unwrap());
        self.to_owned()
    }
}

pub struct ValidationChecks {}

impl ValidationChecks {
    /// Checking if a string is complete.
    pub fn required(value: &str, msg: &'static str) -> Result<(), ValidationError> {
        let len: usize = value.len();
        if len == 0 {
            let mut err = ValidationError::new(msg);
            let data = true;
            err.add_param(borrow::Cow::Borrowed("required"), &data);
            return Err(err);
        }
        Ok(())
    }
    /// Checking the length of a string with a maximum value.
    /// The length is counted in characters, not bytes.
    pub fn max_length(value: &str, max: usize, msg: &'static str) -> Result<(), ValidationError> {
        let len: usize = value.chars().count();
        if max < len {
            let mut err = ValidationError::new(msg);
            let json = serde_json::json!({ "actualLength": len, "requiredLength": max });
            err.add_param(borrow::Cow::Borrowed("maxlength"), &json);
            return Err(err);
        }
        Ok(())
    }
    /// Checking that a string contains the specified symbol.
    pub fn contains_symbol(value: &str, symbol: char, msg: &'static str) -> Result<(), ValidationError> {
        if !value.contains(symbol) {
            let mut err = ValidationError::new(msg);
            let json = serde_json::json!({ "actualValue": value, "requiredSymbol": symbol });
            err.add_param(borrow::Cow::Borrowed("containsSymbol"), &json);
            return Err(err);
        }
        Ok(())
    }
    /// Checking that a string does not match a regular expression.
    pub fn forbidden_regexp(value: &str, reg_exp: &str, msg: &'static str) -> Result<(), ValidationError> {
        let regex = Regex::new(reg_exp).unwrap();
        let result = regex.captures(value);
        if result.is_some() {
            let mut err = ValidationError::new(msg);
            let json = serde_json::json!({ "actualValue": value, "forbiddenPattern": reg_exp });
            err.add_param(borrow::Cow::Borrowed("forbiddenPattern"), &json);
            return Err(err);
        }
        Ok(())
    }
    /// Checking a date with a minimum value.
    pub fn min_date(value: &NaiveDate, min: NaiveDate, msg: &'static str) -> Result<(), ValidationError> {
        if *value < min {
            let mut err = ValidationError::new(msg);
            let json = serde_json::json!({ "actualDate": value, "minDate": min });
            err.add_param(borrow::Cow::Borrowed("mindate"), &json);
            return Err(err);
        }
        Ok(())
    }
    /// Checking a date with a maximum value.
    pub fn max_date(value: &NaiveDate, max: NaiveDate, msg: &'static str) -> Result<(), ValidationError> {
        if max < *value {
            let mut err = ValidationError::new(msg);
            let json = serde_json::json!({ "actualDate": value, "maxDate": max });
            err.add_param(borrow::Cow::Borrowed("maxdate"), &json);
            return Err(err);
        }
        Ok(())
    }
    /// Checking that a number is strictly positive.
    pub fn positive(value: i32, msg: &'static str) -> Result<(), ValidationError> {
        if value <= 0 {
            let mut err = ValidationError::new(msg);
            let json = serde_json::json!({ "actualValue": value });
            err.add_param(borrow::Cow::Borrowed("positive"), &json);
            return Err(err);
        }
        Ok(())
    }
}
