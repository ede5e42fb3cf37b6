use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::models::{CreateUser, UpdateUser};
use crate::repository::UserRepository;
use crate::service::UserService;

/// Build the JSON API router for the user resource.
pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    Router::new()
        .route("/users", get(find_users).post(create_user))
        .route(
            "/users/{user_id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(Arc::new(service))
}

/// GET /users/{user_id}
///
/// An absent user still answers 200, with a JSON `null` body. That
/// mirrors the service returning `Ok(None)` and is a deliberate choice,
/// not a 404.
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(user_id): Path<String>,
) -> Response {
    let Ok(id) = user_id.parse::<u64>() else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    match service.get(id).await {
        Ok(user) => Json(user).into_response(),
        Err(err) => err.into_response(),
    }
}

/// GET /users
async fn find_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> Response {
    match service.find().await {
        Ok(users) => Json(users).into_response(),
        Err(err) => err.into_response(),
    }
}

/// POST /users
///
/// Any unreadable body — absent, wrong content type, malformed JSON,
/// wrong shape — is a client error. Every failure branch writes a
/// terminal status.
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    body: Result<Json<CreateUser>, JsonRejection>,
) -> Response {
    let Ok(Json(input)) = body else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    match service.create(input).await {
        Ok(user) => Json(user).into_response(),
        Err(err) => err.into_response(),
    }
}

/// PUT /users/{user_id}
///
/// A request without a JSON body at all is a client error; a body that
/// fails to decode surfaces as a server error carrying the decode
/// message.
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(user_id): Path<String>,
    body: Result<Json<UpdateUser>, JsonRejection>,
) -> Response {
    let Ok(id) = user_id.parse::<u64>() else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    let input = match body {
        Ok(Json(input)) => input,
        Err(JsonRejection::MissingJsonContentType(_)) => {
            return StatusCode::BAD_REQUEST.into_response();
        }
        Err(rejection) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("internal server error: {}", rejection),
            )
                .into_response();
        }
    };

    match service.update(id, input).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}

/// DELETE /users/{user_id}
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(user_id): Path<String>,
) -> Response {
    let Ok(id) = user_id.parse::<u64>() else {
        return StatusCode::BAD_REQUEST.into_response();
    };

    match service.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}
