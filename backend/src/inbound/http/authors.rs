//! Authors API handlers.
//!
//! ```text
//! GET    /authors
//! GET    /authors/{id}
//! POST   /authors
//! PUT    /authors/{id}
//! DELETE /authors/{id}
//! ```
//!
//! Request bodies deserialise into the allow-listed
//! [`AuthorFields`](crate::domain::AuthorFields) set; unknown keys are
//! ignored and never reach storage. Unsupported methods on these routes
//! answer 405 with a `MethodNotAllowedError` body.

use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Author, AuthorFields, AuthorId, Error};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Confirmation body returned by a successful delete.
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct DeleteConfirmation {
    /// Always `"deleted"`.
    #[schema(example = "deleted")]
    status: &'static str,
}

impl DeleteConfirmation {
    const fn deleted() -> Self {
        Self { status: "deleted" }
    }
}

/// List every author.
#[utoipa::path(
    get,
    path = "/authors",
    responses(
        (status = 200, description = "All stored authors", body = [Author]),
        (status = 403, description = "Forbidden", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["authors"],
    operation_id = "listAuthors"
)]
pub async fn list_authors(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Author>>> {
    Ok(web::Json(state.authors_query.list_authors().await?))
}

/// Fetch one author by id.
#[utoipa::path(
    get,
    path = "/authors/{id}",
    params(("id" = i32, Path, description = "Author id")),
    responses(
        (status = 200, description = "The requested author", body = Author),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "No author with that id", body = Error)
    ),
    tags = ["authors"],
    operation_id = "getAuthor"
)]
pub async fn get_author(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<Author>> {
    let id = AuthorId::new(path.into_inner());
    Ok(web::Json(state.authors_query.fetch_author(id).await?))
}

/// Create an author.
///
/// `name`, `email`, and `location` are required; github, twitter, and the
/// latest published article title are optional.
#[utoipa::path(
    post,
    path = "/authors",
    request_body = AuthorFields,
    responses(
        (status = 201, description = "Created author", body = Author),
        (status = 403, description = "Forbidden", body = Error),
        (status = 405, description = "Method not allowed", body = Error),
        (status = 422, description = "Validation failure, one message list per invalid field", body = Error)
    ),
    tags = ["authors"],
    operation_id = "createAuthor"
)]
pub async fn create_author(
    state: web::Data<HttpState>,
    payload: web::Json<AuthorFields>,
) -> ApiResult<HttpResponse> {
    let author = state
        .authors_command
        .create_author(payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(author))
}

/// Update an author.
///
/// Supplied fields replace their stored values; absent fields are retained.
#[utoipa::path(
    put,
    path = "/authors/{id}",
    params(("id" = i32, Path, description = "Author id")),
    request_body = AuthorFields,
    responses(
        (status = 200, description = "Updated author", body = Author),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "No author with that id", body = Error),
        (status = 405, description = "Method not allowed", body = Error)
    ),
    tags = ["authors"],
    operation_id = "updateAuthor"
)]
pub async fn update_author(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    payload: web::Json<AuthorFields>,
) -> ApiResult<web::Json<Author>> {
    let id = AuthorId::new(path.into_inner());
    let author = state
        .authors_command
        .update_author(id, payload.into_inner())
        .await?;
    Ok(web::Json(author))
}

/// Delete an author permanently.
#[utoipa::path(
    delete,
    path = "/authors/{id}",
    params(("id" = i32, Path, description = "Author id")),
    responses(
        (status = 200, description = "Author removed", body = DeleteConfirmation),
        (status = 403, description = "Forbidden", body = Error),
        (status = 404, description = "No author with that id", body = Error),
        (status = 405, description = "Method not allowed", body = Error)
    ),
    tags = ["authors"],
    operation_id = "deleteAuthor"
)]
pub async fn delete_author(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<web::Json<DeleteConfirmation>> {
    let id = AuthorId::new(path.into_inner());
    state.authors_command.delete_author(id).await?;
    Ok(web::Json(DeleteConfirmation::deleted()))
}

async fn method_not_allowed() -> ApiResult<HttpResponse> {
    Err(Error::method_not_allowed())
}

/// Register the authors routes.
///
/// Routes are grouped per resource so an unsupported method on a known path
/// answers 405 rather than falling through to the application-level 404.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/authors")
            .route(web::get().to(list_authors))
            .route(web::post().to(create_author))
            .default_service(web::route().to(method_not_allowed)),
    )
    .service(
        web::resource("/authors/{id}")
            .route(web::get().to(get_author))
            .route(web::put().to(update_author))
            .route(web::delete().to(delete_author))
            .default_service(web::route().to(method_not_allowed)),
    );
}
