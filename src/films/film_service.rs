use std::fmt;

use crate::validators::ValidationError;

use super::film_models::{self, Film};
use super::film_storage::FilmStorage;

#[derive(Debug, Clone, PartialEq)]
pub enum FilmServiceError {
    /// A record failed a business rule before persistence.
    Validation(ValidationError),
    /// An operation referenced a film id not present in the storage.
    UnknownFilm(i32),
}

impl std::error::Error for FilmServiceError {}

impl fmt::Display for FilmServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self {
            FilmServiceError::Validation(error) => {
                write!(f, "{}", error.message)
            }
            FilmServiceError::UnknownFilm(id) => {
                write!(f, "Error, there is no film with id: {}.", id)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilmService<S: FilmStorage> {
    storage: S,
}

impl<S: FilmStorage> FilmService<S> {
    pub fn new(storage: S) -> Self {
        FilmService { storage }
    }

    /// Check the record against the business rules and return the validated record.
    pub fn validate_film(&self, film: Film) -> Result<Film, ValidationError> {
        film_models::validate_name(&film.name)?;
        film_models::validate_description(&film.description)?;
        film_models::validate_release_date(&film.release_date)?;
        film_models::validate_duration(film.duration)?;

        Ok(film)
    }

    /// Validate a new film entry and add it to the storage.
    pub fn create(&mut self, film: Film) -> Result<Film, FilmServiceError> {
        let film = self.validate_film(film).map_err(|e| {
            log::warn!("FilmServiceError::Validation: {}", &e);
            FilmServiceError::Validation(e)
        })?;

        Ok(self.storage.create_film(film))
    }

    /// Validate a film entry and replace the stored entry with the same id.
    pub fn update(&mut self, film: Film) -> Result<Film, FilmServiceError> {
        let film = self.validate_film(film).map_err(|e| {
            log::warn!("FilmServiceError::Validation: {}", &e);
            FilmServiceError::Validation(e)
        })?;

        let id = film.id;
        self.storage.modify_film(film).ok_or_else(|| {
            log::warn!("FilmServiceError::UnknownFilm: id: {}", id);
            FilmServiceError::UnknownFilm(id)
        })
    }

    /// Find a film entry by id.
    pub fn find_by_id(&self, id: i32) -> Result<Film, FilmServiceError> {
        self.storage.find_film_by_id(id).ok_or_else(|| {
            log::warn!("FilmServiceError::UnknownFilm: id: {}", id);
            FilmServiceError::UnknownFilm(id)
        })
    }

    /// Get all film entries.
    pub fn find_all(&self) -> Vec<Film> {
        self.storage.find_all_films()
    }
}
