//! OpenAPI surface served by Swagger UI in debug builds.

use utoipa::OpenApi;

/// OpenAPI document covering the authors resource and health probes.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::inbound::http::authors::list_authors,
        crate::inbound::http::authors::get_author,
        crate::inbound::http::authors::create_author,
        crate::inbound::http::authors::update_author,
        crate::inbound::http::authors::delete_author,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        crate::domain::Author,
        crate::domain::AuthorFields,
        crate::domain::author::AuthorId,
        crate::domain::Error,
        crate::domain::ErrorKind,
        crate::inbound::http::authors::DeleteConfirmation,
    )),
    tags(
        (name = "authors", description = "Author directory CRUD"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_the_authors_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/authors"));
        assert!(paths.iter().any(|p| p.as_str() == "/authors/{id}"));
        assert!(paths.iter().any(|p| p.as_str() == "/health/ready"));
    }
}
