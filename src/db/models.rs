use crate::errors::Error;
use crate::person::{Person, PersonId};
use crate::schema::persons;
use diesel::{Insertable, Queryable};

/// Represents a person document as stored in the database
#[derive(Debug, Clone, Queryable, Insertable)]
#[diesel(table_name = persons)]
pub struct PersonRecord {
    /// Hyphenated UUID assigned at insertion
    pub id: String,
    pub name: String,
    pub number: String,
    /// Incremented on every update, never leaves the store layer
    pub version: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl TryFrom<PersonRecord> for Person {
    type Error = Error;

    fn try_from(record: PersonRecord) -> Result<Self, Self::Error> {
        let id = record.id.parse::<PersonId>().map_err(|_| {
            Error::Record(format!("stored id `{}` is not a valid uuid", record.id))
        })?;

        Ok(Person {
            id,
            name: record.name,
            number: record.number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    fn record(id: &str) -> PersonRecord {
        PersonRecord {
            id: id.to_string(),
            name: "Arto Hellas".to_string(),
            number: "040-123456".to_string(),
            version: 3,
            created_at: "2026-10-17T12:00:00+00:00".to_string(),
            updated_at: "2026-10-17T12:00:00+00:00".to_string(),
        }
    }

    #[test]
    fn record_converts_without_store_metadata() {
        let id = PersonId::new();
        let person = Person::try_from(record(&id.to_string())).unwrap();
        assert_eq!(person.id, id);
        assert_eq!(person.name, "Arto Hellas");
    }

    #[test]
    fn corrupt_stored_id_is_a_server_side_failure() {
        let err = Person::try_from(record("not-a-uuid")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
        assert!(matches!(err, Error::Record(_)));
    }
}
