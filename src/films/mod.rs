pub mod film_models;
pub mod film_service;
pub mod film_storage;
