use crate::db::{Database, PersonRepository};
use crate::errors::Error;
use crate::person::{Person, PersonFields, PersonId};
use async_trait::async_trait;
use std::sync::Arc;

/// Data-access interface the HTTP handlers depend on
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Number of stored persons
    async fn count(&self) -> Result<i64, Error>;

    /// Every stored person
    async fn list(&self) -> Result<Vec<Person>, Error>;

    /// A single person, `None` if the id is unknown
    async fn find_by_id(&self, id: &PersonId) -> Result<Option<Person>, Error>;

    /// Persists a new person and returns it with its assigned id
    async fn create(&self, fields: PersonFields) -> Result<Person, Error>;

    /// Replaces name and number, `None` if the id is unknown
    async fn update(&self, id: &PersonId, fields: PersonFields) -> Result<Option<Person>, Error>;

    /// Removes a person, `false` if nothing matched
    async fn remove(&self, id: &PersonId) -> Result<bool, Error>;
}

/// Store handle shared by every request
pub type SharedStore = Arc<dyn PersonStore>;

impl Database {
    /// Runs a repository operation on the blocking pool so the reactor never
    /// waits on SQLite.
    async fn with_repository<T, F>(&self, operation: F) -> Result<T, Error>
    where
        T: Send + 'static,
        F: FnOnce(&mut PersonRepository<'_>) -> Result<T, Error> + Send + 'static,
    {
        let database = self.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = database.get_conn()?;
            let mut repo = PersonRepository::new(&mut conn);
            operation(&mut repo)
        })
        .await?
    }
}

#[async_trait]
impl PersonStore for Database {
    async fn count(&self) -> Result<i64, Error> {
        self.with_repository(|repo| repo.count()).await
    }

    async fn list(&self) -> Result<Vec<Person>, Error> {
        let records = self.with_repository(|repo| repo.find_all()).await?;
        records.into_iter().map(Person::try_from).collect()
    }

    async fn find_by_id(&self, id: &PersonId) -> Result<Option<Person>, Error> {
        let id = *id;
        let record = self.with_repository(move |repo| repo.find_by_id(&id)).await?;
        record.map(Person::try_from).transpose()
    }

    async fn create(&self, fields: PersonFields) -> Result<Person, Error> {
        let record = self.with_repository(move |repo| repo.insert(fields)).await?;
        Person::try_from(record)
    }

    async fn update(&self, id: &PersonId, fields: PersonFields) -> Result<Option<Person>, Error> {
        let id = *id;
        let record = self
            .with_repository(move |repo| repo.update_by_id(&id, fields))
            .await?;
        record.map(Person::try_from).transpose()
    }

    async fn remove(&self, id: &PersonId) -> Result<bool, Error> {
        let id = *id;
        self.with_repository(move |repo| repo.delete_by_id(&id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::IN_MEMORY_DATABASE;

    fn fields(name: &str, number: &str) -> PersonFields {
        PersonFields {
            name: name.to_string(),
            number: number.to_string(),
        }
    }

    #[tokio::test]
    async fn in_memory_store_keeps_documents_between_calls() {
        let store = Database::new(IN_MEMORY_DATABASE).unwrap();

        let created = store
            .create(fields("Mary Poppendieck", "39-23642312"))
            .await
            .unwrap();

        let found = store.find_by_id(&created.id).await.unwrap();
        assert_eq!(found, Some(created.clone()));
        assert_eq!(store.count().await.unwrap(), 1);
        assert_eq!(store.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn update_and_remove_report_missing_documents() {
        let store = Database::new(IN_MEMORY_DATABASE).unwrap();
        let missing = PersonId::new();

        assert!(store
            .update(&missing, fields("Nobody", "040-123456"))
            .await
            .unwrap()
            .is_none());
        assert!(!store.remove(&missing).await.unwrap());
    }
}
