use super::climb_store::ClimbStore;
use super::mem_backend::MemBackend;

pub type InMemoryStore = ClimbStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        ClimbStore::with_backend(MemBackend::new())
    }

    /// Make every subsequent write fail (or succeed again).
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.backend.set_simulate_write_error(simulate);
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Climb, ClimbFields, Discipline, UserId};
    use crate::store::DataStore;

    pub const ALEX: &str = "user-alex";
    pub const SAM: &str = "user-sam";
    pub const JO: &str = "user-jo";

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Registers alex@example.com, sam@example.com and jo@example.com.
        pub fn with_users(mut self) -> Self {
            for (id, name) in [(ALEX, "Alex"), (SAM, "Sam"), (JO, "Jo")] {
                let email = format!("{}@example.com", name.to_lowercase());
                self.store
                    .register_user(&UserId::from(id), name, &email)
                    .unwrap();
            }
            self
        }

        pub fn with_friends(mut self, a: &str, b: &str) -> Self {
            self.store
                .create_friend_relationship(&UserId::from(a), &UserId::from(b))
                .unwrap();
            self
        }

        pub fn with_climb(
            mut self,
            owner: &str,
            name: &str,
            discipline: Discipline,
            grade: &str,
        ) -> Self {
            let fields = ClimbFields::new(name, discipline, grade, "Bishop");
            self.store
                .create_climb(&UserId::from(owner), fields)
                .unwrap();
            self
        }

        pub fn climb_named(&self, owner: &str, name: &str) -> Climb {
            self.store
                .load_catalogue(&UserId::from(owner))
                .unwrap()
                .into_iter()
                .find(|c| c.name == name)
                .unwrap()
        }
    }
}
