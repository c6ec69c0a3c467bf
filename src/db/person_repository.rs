use crate::db::models::PersonRecord;
use crate::errors::Error;
use crate::person::{PersonFields, PersonId};
use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use tracing::debug;

/// Repository for managing person documents in the SQLite database
pub struct PersonRepository<'a> {
    /// Database connection
    pub conn: &'a mut SqliteConnection,
}

impl<'a> PersonRepository<'a> {
    /// Creates a new PersonRepository instance
    ///
    /// # Arguments
    ///
    /// * `conn` - Mutable reference to SQLite database connection
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        PersonRepository { conn }
    }

    /// Counts every stored person
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn count(&mut self) -> Result<i64, Error> {
        use crate::schema::persons;

        let total = persons::table.count().get_result::<i64>(self.conn)?;
        Ok(total)
    }

    /// Loads every stored person, oldest first
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn find_all(&mut self) -> Result<Vec<PersonRecord>, Error> {
        use crate::schema::persons::dsl::*;

        let found = persons
            .order_by((created_at.asc(), id.asc()))
            .load::<PersonRecord>(self.conn)?;
        Ok(found)
    }

    /// Retrieves a single person by primary key
    ///
    /// # Arguments
    ///
    /// * `person_id` - The identifier to look up
    ///
    /// # Returns
    ///
    /// The stored person, or `None` when no document carries this id
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn find_by_id(&mut self, person_id: &PersonId) -> Result<Option<PersonRecord>, Error> {
        use crate::schema::persons::dsl::*;

        let found = persons
            .filter(id.eq(person_id.to_string()))
            .first::<PersonRecord>(self.conn)
            .optional()?;
        Ok(found)
    }

    /// Inserts a new person with a freshly generated id
    ///
    /// # Arguments
    ///
    /// * `fields` - Validated name and number
    ///
    /// # Returns
    ///
    /// The record as it was written
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn insert(&mut self, fields: PersonFields) -> Result<PersonRecord, Error> {
        use crate::schema::persons;

        let now = Utc::now().to_rfc3339();
        let record = PersonRecord {
            id: PersonId::new().to_string(),
            name: fields.name,
            number: fields.number,
            version: 0,
            created_at: now.clone(),
            updated_at: now,
        };

        diesel::insert_into(persons::table)
            .values(&record)
            .execute(self.conn)?;

        debug!("Inserted person {}", record.id);
        Ok(record)
    }

    /// Overwrites name and number of an existing person and reads it back
    ///
    /// # Arguments
    ///
    /// * `person_id` - The identifier of the person to update
    /// * `fields` - Validated replacement values
    ///
    /// # Returns
    ///
    /// The updated record, or `None` when no document carries this id
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn update_by_id(
        &mut self,
        person_id: &PersonId,
        fields: PersonFields,
    ) -> Result<Option<PersonRecord>, Error> {
        use crate::schema::persons;

        let key = person_id.to_string();
        let now = Utc::now().to_rfc3339();

        self.conn.transaction::<_, Error, _>(|conn| {
            let updated = diesel::update(persons::table.filter(persons::id.eq(&key)))
                .set((
                    persons::name.eq(fields.name),
                    persons::number.eq(fields.number),
                    persons::version.eq(persons::version + 1),
                    persons::updated_at.eq(&now),
                ))
                .execute(conn)?;

            if updated == 0 {
                return Ok(None);
            }

            let record = persons::table
                .filter(persons::id.eq(&key))
                .first::<PersonRecord>(conn)?;
            Ok(Some(record))
        })
    }

    /// Deletes a person by primary key
    ///
    /// # Returns
    ///
    /// `true` when a document was removed, `false` when none matched
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn delete_by_id(&mut self, person_id: &PersonId) -> Result<bool, Error> {
        use crate::schema::persons::dsl::*;

        let removed = diesel::delete(persons.filter(id.eq(person_id.to_string())))
            .execute(self.conn)?;
        Ok(removed > 0)
    }
}
