//! REST surface over the phonebook runtime.
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | `GET` | `/phonebook/contacts?name=&address=&phone=` | 200, array |
//! | `POST` | `/phonebook/contacts` | 201, created contact |
//! | `GET` | `/phonebook/contacts/{id}` | 200, contact (404 when absent) |
//! | `PUT` | `/phonebook/contacts/{id}` | 200, stored contact (400 on id mismatch) |
//! | `DELETE` | `/phonebook/contacts/{id}` | 204, always |

/// Error-to-response mapping.
pub mod error;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use tracing::warn;

use crate::{
    contact::{Contact, ContactFilter, IndexedContact, PutContactBody},
    error::PhonebookError,
    runtime::handle::PhonebookHandle,
    types::ContactId,
};

use self::error::ApiError;

/// Collection path shared by every route.
pub const CONTACTS_PATH: &str = "/phonebook/contacts";

/// Builds the router serving the contacts resource from `handle`.
pub fn router(handle: PhonebookHandle) -> Router {
    Router::new()
        .route(CONTACTS_PATH, get(list_contacts).post(create_contact))
        .route(
            "/phonebook/contacts/{id}",
            get(get_contact).put(put_contact).delete(delete_contact),
        )
        .with_state(handle)
}

async fn list_contacts(
    State(handle): State<PhonebookHandle>,
    Query(filter): Query<ContactFilter>,
) -> Result<Json<Vec<IndexedContact>>, ApiError> {
    Ok(Json(handle.find_filtered(filter).await?))
}

async fn get_contact(
    State(handle): State<PhonebookHandle>,
    Path(id): Path<ContactId>,
) -> Result<Json<IndexedContact>, ApiError> {
    handle
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| PhonebookError::not_found(id).into())
}

async fn create_contact(
    State(handle): State<PhonebookHandle>,
    Json(contact): Json<Contact>,
) -> Result<(StatusCode, Json<IndexedContact>), ApiError> {
    let created = handle.create(contact).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn put_contact(
    State(handle): State<PhonebookHandle>,
    Path(path_id): Path<String>,
    Json(body): Json<PutContactBody>,
) -> Result<Json<IndexedContact>, ApiError> {
    let body_id = body.id;
    let Some(contact) = body.into_indexed_for(&path_id) else {
        warn!(%path_id, ?body_id, "rejected put with mismatched id");
        return Err(PhonebookError::id_mismatch().into());
    };
    Ok(Json(handle.put(contact).await?))
}

async fn delete_contact(
    State(handle): State<PhonebookHandle>,
    Path(id): Path<ContactId>,
) -> Result<StatusCode, ApiError> {
    handle.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
