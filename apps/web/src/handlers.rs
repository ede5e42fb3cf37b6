//! HTML binding over the same user service the JSON API uses.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use handlebars::Handlebars;
use serde_json::json;

use domain_users::{UserRepository, UserService};

/// Shared state for the web process: the user service plus the template
/// registry compiled at startup.
pub struct WebState<R: UserRepository> {
    service: UserService<R>,
    templates: Handlebars<'static>,
}

/// Build the HTML router.
///
/// Templates are compiled into the binary; a registration failure aborts
/// startup rather than surfacing per request.
pub fn router<R: UserRepository + 'static>(
    service: UserService<R>,
) -> Result<Router, handlebars::TemplateError> {
    let mut templates = Handlebars::new();
    templates.register_template_string("index", include_str!("../templates/index.hbs"))?;
    templates.register_template_string("users", include_str!("../templates/users.hbs"))?;

    Ok(router_with_templates(service, templates))
}

/// Build the HTML router over a pre-built template registry.
pub fn router_with_templates<R: UserRepository + 'static>(
    service: UserService<R>,
    templates: Handlebars<'static>,
) -> Router {
    let state = Arc::new(WebState { service, templates });

    Router::new()
        .route("/", get(index))
        .route("/users", get(users))
        .with_state(state)
}

/// GET / — static index page with a fixed sample message.
async fn index<R: UserRepository>(State(state): State<Arc<WebState<R>>>) -> Response {
    let data = json!({ "message": "sample message" });

    match state.templates.render("index", &data) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!("index template render failed: {err}");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        }
    }
}

/// GET /users — list page over the same data as the JSON API.
async fn users<R: UserRepository>(State(state): State<Arc<WebState<R>>>) -> Response {
    let users = match state.service.find().await {
        Ok(users) => users,
        Err(err) => return err.into_response(),
    };

    match state.templates.render("users", &json!({ "users": users })) {
        Ok(html) => Html(html).into_response(),
        Err(err) => render_error(&err),
    }
}

fn render_error(err: &handlebars::RenderError) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("internal server error: {}", err),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use domain_users::{CreateUser, InMemoryUserRepository};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn body_string(body: Body) -> String {
        let bytes = body.collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_index_renders_sample_message() {
        let service = UserService::new(InMemoryUserRepository::new());
        let app = router(service).unwrap();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response.into_body()).await;
        assert!(html.contains("sample message"));
    }

    #[tokio::test]
    async fn test_users_page_lists_stored_users() {
        let service = UserService::new(InMemoryUserRepository::new());
        service
            .create(CreateUser {
                name: "alice".to_string(),
            })
            .await
            .unwrap();
        service
            .create(CreateUser {
                name: "bob".to_string(),
            })
            .await
            .unwrap();

        let app = router(service).unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/users")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response.into_body()).await;
        assert!(html.contains("alice"));
        assert!(html.contains("bob"));
    }

    #[tokio::test]
    async fn test_index_render_failure_returns_500_with_generic_body() {
        let service = UserService::new(InMemoryUserRepository::new());
        // empty registry: every render fails
        let app = router_with_templates(service, Handlebars::new());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_string(response.into_body()).await,
            "internal server error"
        );
    }

    #[tokio::test]
    async fn test_users_render_failure_returns_500_with_error_message() {
        let service = UserService::new(InMemoryUserRepository::new());
        let app = router_with_templates(service, Handlebars::new());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/users")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_string(response.into_body()).await;
        assert!(body.starts_with("internal server error: "));
    }

    #[tokio::test]
    async fn test_users_page_with_no_users_is_ok() {
        let service = UserService::new(InMemoryUserRepository::new());
        let app = router(service).unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/users")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
