use crate::constants::MAX_BODY_BYTES;
use crate::db::SharedStore;
use crate::errors::Error;
use crate::person::{Person, PersonId, PersonInput};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::{
    extract::{Extension, Path},
    Json,
};
use chrono::Local;

/// Unwraps a JSON body, treating a request that is not declared as JSON like
/// an empty object so that validation reports the missing fields.
fn person_input(payload: Result<Json<PersonInput>, JsonRejection>) -> Result<PersonInput, Error> {
    match payload {
        Ok(Json(input)) => Ok(input),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(PersonInput::default()),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            Err(Error::PayloadTooLarge {
                limit: MAX_BODY_BYTES,
            })
        }
        Err(rejection) => Err(Error::Body(rejection.body_text())),
    }
}

/// Renders the phonebook summary with the current person count
///
/// # Returns
/// * `Result<Html<String>, Error>` - HTML fragment with count and server time
#[axum::debug_handler]
pub async fn get_info(Extension(store): Extension<SharedStore>) -> Result<Html<String>, Error> {
    let total = store.count().await?;
    let now = Local::now().format("%a %b %d %Y %H:%M:%S GMT%z");

    Ok(Html(format!(
        "<div>Phonebook has info for {} people<p>{}</p></div>",
        total, now
    )))
}

/// Lists every person in the phonebook
#[axum::debug_handler]
pub async fn list_persons(
    Extension(store): Extension<SharedStore>,
) -> Result<Json<Vec<Person>>, Error> {
    Ok(Json(store.list().await?))
}

/// Retrieves a single person
///
/// # Returns
/// * `Result<Response, Error>` - The person as JSON, or an empty 404 when unknown
#[axum::debug_handler]
pub async fn get_person(
    Path(id): Path<String>,
    Extension(store): Extension<SharedStore>,
) -> Result<Response, Error> {
    let id: PersonId = id.parse()?;

    match store.find_by_id(&id).await? {
        Some(person) => Ok(Json(person).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// Validates and stores a new person
///
/// # Arguments
/// * `store` - Person store shared across handlers
/// * `payload` - JSON body with `name` and `number`
#[axum::debug_handler]
pub async fn create_person(
    Extension(store): Extension<SharedStore>,
    payload: Result<Json<PersonInput>, JsonRejection>,
) -> Result<Json<Person>, Error> {
    let fields = person_input(payload)?.validate()?;
    let saved = store.create(fields).await?;
    Ok(Json(saved))
}

/// Replaces name and number of an existing person
///
/// An unknown id surfaces as `Error::Type`, which the error handler turns into
/// `404 {"error": "Something happened"}` rather than an empty 404.
#[axum::debug_handler]
pub async fn update_person(
    Path(id): Path<String>,
    Extension(store): Extension<SharedStore>,
    payload: Result<Json<PersonInput>, JsonRejection>,
) -> Result<Json<Person>, Error> {
    let id: PersonId = id.parse()?;
    let fields = person_input(payload)?.validate()?;

    let updated = store
        .update(&id, fields)
        .await?
        .ok_or_else(|| Error::Type(format!("updated person {} is null", id)))?;
    Ok(Json(updated))
}

/// Removes a person; removing an unknown id is not an error
#[axum::debug_handler]
pub async fn delete_person(
    Path(id): Path<String>,
    Extension(store): Extension<SharedStore>,
) -> Result<StatusCode, Error> {
    let id: PersonId = id.parse()?;
    store.remove(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
