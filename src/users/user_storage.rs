use super::user_models::User;

pub trait UserStorage {
    /// Find a user entry by id.
    fn find_user_by_id(&self, id: i32) -> Option<User>;
    /// Get all user entries in insertion order.
    fn find_all_users(&self) -> Vec<User>;
    /// Add a new user entry and assign it the next free id.
    fn create_user(&mut self, user: User) -> User;
    /// Replace the user entry with the same id. Returns `None` if the id is unknown.
    fn modify_user(&mut self, user: User) -> Option<User>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserStorage {
    users: Vec<User>,
    last_id: i32,
}

impl InMemoryUserStorage {
    /// Create a new instance.
    pub fn new() -> Self {
        InMemoryUserStorage { users: Vec::new(), last_id: 0 }
    }
}

impl UserStorage for InMemoryUserStorage {
    fn find_user_by_id(&self, id: i32) -> Option<User> {
        self.users.iter().find(|user| user.id == id).cloned()
    }

    fn find_all_users(&self) -> Vec<User> {
        self.users.clone()
    }

    fn create_user(&mut self, user: User) -> User {
        // Ids are monotonic and never reused, even after an entry is replaced.
        self.last_id += 1;

        let mut user_saved = user;
        user_saved.id = self.last_id;
        self.users.push(user_saved.clone());

        user_saved
    }

    fn modify_user(&mut self, user: User) -> Option<User> {
        let position = self.users.iter().position(|entry| entry.id == user.id)?;
        self.users[position] = user.clone();
        Some(user)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::super::user_models::User;
    use super::{InMemoryUserStorage, UserStorage};

    fn birthday() -> NaiveDate {
        NaiveDate::from_ymd_opt(1990, 5, 1).unwrap()
    }

    #[test]
    fn test_create_user_assigns_ids_from_one() {
        let mut storage = InMemoryUserStorage::new();

        let user1 = storage.create_user(User::new("one@yandex.ru", "one", "One", birthday()));
        let user2 = storage.create_user(User::new("two@yandex.ru", "two", "Two", birthday()));

        assert_eq!(user1.id, 1);
        assert_eq!(user2.id, 2);
        assert_eq!(storage.find_all_users().len(), 2);
    }
    #[test]
    fn test_find_user_by_id() {
        let mut storage = InMemoryUserStorage::new();
        let user = storage.create_user(User::new("one@yandex.ru", "one", "One", birthday()));

        let found = storage.find_user_by_id(user.id);
        assert_eq!(found, Some(user));
        assert_eq!(storage.find_user_by_id(100), None);
    }
    #[test]
    fn test_modify_user_replaces_entry() {
        let mut storage = InMemoryUserStorage::new();
        let mut user = storage.create_user(User::new("one@yandex.ru", "one", "One", birthday()));

        user.name = "Another name".to_string();
        let modified = storage.modify_user(user.clone());

        assert_eq!(modified, Some(user.clone()));
        assert_eq!(storage.find_user_by_id(user.id).unwrap().name, "Another name");
        assert_eq!(storage.find_all_users().len(), 1);
    }
    #[test]
    fn test_modify_user_with_unknown_id() {
        let mut storage = InMemoryUserStorage::new();
        let mut user = User::new("one@yandex.ru", "one", "One", birthday());
        user.id = 7;

        assert_eq!(storage.modify_user(user), None);
    }
}
