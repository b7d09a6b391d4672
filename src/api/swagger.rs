use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users Service API",
        version = "1.0.0",
        description = "CRUD for the `User` resource stored in MongoDB.\n\n**Notes:**\n- `id` is supplied by the client and is not unique\n- `PUT /users/{id}` reads `name` and `email` from the query string\n- `DELETE /users/{id}` removes every document with that id"
    ),
    paths(
        crate::api::index,
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
        crate::api::users::create_user,
        crate::api::users::get_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,
    ),
    components(
        schemas(
            crate::models::User,
            crate::api::health::HealthResponse,
            crate::api::metrics::MetricsResponse,
        )
    ),
    tags(
        (name = "Users", description = "Create, read, update and delete users."),
        (name = "Health", description = "Greeting, health check and metrics endpoints."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_user_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/users"));
        assert!(doc.paths.paths.contains_key("/users/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }

    #[test]
    fn test_create_accepts_json_and_form() {
        let doc = ApiDoc::openapi();
        let post = doc.paths.paths["/users"].post.as_ref().unwrap();
        let body = post.request_body.as_ref().unwrap();
        assert!(body.content.contains_key("application/json"));
        assert!(body.content.contains_key("application/x-www-form-urlencoded"));
    }
}
