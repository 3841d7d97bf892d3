use super::film_models::Film;

pub trait FilmStorage {
    /// Find a film entry by id.
    fn find_film_by_id(&self, id: i32) -> Option<Film>;
    /// Get all film entries in insertion order.
    fn find_all_films(&self) -> Vec<Film>;
    /// Add a new film entry and assign it the next free id.
    fn create_film(&mut self, film: Film) -> Film;
    /// Replace the film entry with the same id. Returns `None` if the id is unknown.
    fn modify_film(&mut self, film: Film) -> Option<Film>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryFilmStorage {
    films: Vec<Film>,
    last_id: i32,
}

impl InMemoryFilmStorage {
    /// Create a new instance.
    pub fn new() -> Self {
        InMemoryFilmStorage { films: Vec::new(), last_id: 0 }
    }
}

impl FilmStorage for InMemoryFilmStorage {
    fn find_film_by_id(&self, id: i32) -> Option<Film> {
        self.films.iter().find(|film| film.id == id).cloned()
    }

    fn find_all_films(&self) -> Vec<Film> {
        self.films.clone()
    }

    fn create_film(&mut self, film: Film) -> Film {
        // Ids are monotonic and never reused, even after an entry is replaced.
        self.last_id += 1;

        let mut film_saved = film;
        film_saved.id = self.last_id;
        self.films.push(film_saved.clone());

        film_saved
    }

    fn modify_film(&mut self, film: Film) -> Option<Film> {
        let position = self.films.iter().position(|entry| entry.id == film.id)?;
        self.films[position] = film.clone();
        Some(film)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::super::film_models::Film;
    use super::{FilmStorage, InMemoryFilmStorage};

    fn release_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(1972, 3, 24).unwrap()
    }

    #[test]
    fn test_create_film_assigns_ids_from_one() {
        let mut storage = InMemoryFilmStorage::new();

        let film1 = storage.create_film(Film::new("film one", "", release_date(), 100));
        let film2 = storage.create_film(Film::new("film two", "", release_date(), 120));

        assert_eq!(film1.id, 1);
        assert_eq!(film2.id, 2);
        assert_eq!(storage.find_all_films().len(), 2);
    }
    #[test]
    fn test_find_film_by_id() {
        let mut storage = InMemoryFilmStorage::new();
        let film = storage.create_film(Film::new("film name", "film description", release_date(), 100));

        let found = storage.find_film_by_id(film.id);
        assert_eq!(found, Some(film));
        assert_eq!(storage.find_film_by_id(100), None);
    }
    #[test]
    fn test_modify_film_replaces_entry() {
        let mut storage = InMemoryFilmStorage::new();
        let mut film = storage.create_film(Film::new("film name", "film description", release_date(), 100));

        film.duration = 180;
        let modified = storage.modify_film(film.clone());

        assert_eq!(modified, Some(film.clone()));
        assert_eq!(storage.find_film_by_id(film.id).unwrap().duration, 180);
        assert_eq!(storage.find_all_films().len(), 1);
    }
    #[test]
    fn test_modify_film_with_unknown_id() {
        let mut storage = InMemoryFilmStorage::new();
        let mut film = Film::new("film name", "", release_date(), 100);
        film.id = 7;

        assert_eq!(storage.modify_film(film), None);
    }
}
