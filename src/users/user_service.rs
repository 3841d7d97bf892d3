use std::fmt;

use crate::validators::ValidationError;

use super::user_models::{self, User};
use super::user_storage::UserStorage;

#[derive(Debug, Clone, PartialEq)]
pub enum UserServiceError {
    /// A record failed a business rule before persistence.
    Validation(ValidationError),
    /// An operation referenced a user id not present in the storage.
    UnknownUser(i32),
}

impl std::error::Error for UserServiceError {}

impl fmt::Display for UserServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self {
            UserServiceError::Validation(error) => {
                write!(f, "{}", error.message)
            }
            UserServiceError::UnknownUser(id) => {
                write!(f, "Error, there is no user with id: {}.", id)
            }
        }
    }
}

/// Reserved for friendship relation errors. The friendship feature is not
/// part of this core and carries no behavior yet.
#[derive(Debug, Clone, PartialEq)]
pub struct FriendError {
    pub message: String,
}

impl std::error::Error for FriendError {}

impl fmt::Display for FriendError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[derive(Debug, Clone)]
pub struct UserService<S: UserStorage> {
    storage: S,
}

impl<S: UserStorage> UserService<S> {
    pub fn new(storage: S) -> Self {
        UserService { storage }
    }

    /// Check the record against the business rules and return the validated record.
    /// An empty "name" is replaced with the value of "login".
    pub fn validate_user(&self, user: User) -> Result<User, ValidationError> {
        user_models::validate_email(&user.email)?;
        user_models::validate_login(&user.login)?;

        let mut user = user;
        if user.name.len() == 0 {
            user.name = user.login.clone();
        }

        user_models::validate_birthday(&user.birthday)?;

        Ok(user)
    }

    /// Validate a new user entry and add it to the storage.
    pub fn create(&mut self, user: User) -> Result<User, UserServiceError> {
        let user = self.validate_user(user).map_err(|e| {
            log::warn!("UserServiceError::Validation: {}", &e);
            UserServiceError::Validation(e)
        })?;

        Ok(self.storage.create_user(user))
    }

    /// Validate a user entry and replace the stored entry with the same id.
    pub fn update(&mut self, user: User) -> Result<User, UserServiceError> {
        let user = self.validate_user(user).map_err(|e| {
            log::warn!("UserServiceError::Validation: {}", &e);
            UserServiceError::Validation(e)
        })?;

        let id = user.id;
        self.storage.modify_user(user).ok_or_else(|| {
            log::warn!("UserServiceError::UnknownUser: id: {}", id);
            UserServiceError::UnknownUser(id)
        })
    }

    /// Find a user entry by id.
    pub fn find_by_id(&self, id: i32) -> Result<User, UserServiceError> {
        self.storage.find_user_by_id(id).ok_or_else(|| {
            log::warn!("UserServiceError::UnknownUser: id: {}", id);
            UserServiceError::UnknownUser(id)
        })
    }

    /// Get all user entries.
    pub fn find_all(&self) -> Vec<User> {
        self.storage.find_all_users()
    }
}
