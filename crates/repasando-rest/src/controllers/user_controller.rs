//! User management controller.

use crate::{
    extractors::{PageSizeQuery, ValidatedJson},
    responses::{created, no_content, ok, ApiResult, ErrorBody},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    response::Response,
    routing::get,
    Router,
};
use repasando_core::{Page, RepasandoError, User, UserId};
use repasando_service::UserRequest;
use tracing::debug;

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/page/:page", get(list_users_page))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List every user.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 204, description = "No users stored"),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Response> {
    debug!("List users request");

    let users = state.user_service.find_all().await?;
    if users.is_empty() {
        return no_content();
    }
    ok(users)
}

/// List one page of users.
#[utoipa::path(
    get,
    path = "/api/users/page/{page}",
    tag = "users",
    params(
        ("page" = i64, Path, description = "Zero-based page number"),
        PageSizeQuery
    ),
    responses(
        (status = 200, description = "Requested page", body = Page<User>),
        (status = 204, description = "Page holds no users"),
        (status = 400, description = "Negative page or size below one", body = ErrorBody)
    )
)]
pub async fn list_users_page(
    State(state): State<AppState>,
    Path(page): Path<i64>,
    Query(query): Query<PageSizeQuery>,
) -> ApiResult<Response> {
    debug!("List users page request: {} (size {:?})", page, query.size);

    let request = query.to_page_request(page, &state.pagination)?;
    let page = state.user_service.find_page(request).await?;
    if page.is_empty() {
        return no_content();
    }
    ok(page)
}

/// Get a user by ID.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "No user with this id", body = ErrorBody)
    )
)]
pub async fn get_user(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Response> {
    debug!("Get user request: {}", id);

    let user = find_existing(&state, UserId::new(id)).await?;
    ok(user)
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Field errors, malformed JSON, or duplicate email/username")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> ApiResult<Response> {
    debug!("Create user request: {}", request.user_name);

    let user = state.user_service.save(&request.into_new_user()).await?;
    created(user)
}

/// Replace a user's profile fields.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Field errors, malformed JSON, or duplicate email/username"),
        (status = 404, description = "No user with this id", body = ErrorBody)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> ApiResult<Response> {
    debug!("Update user request: {}", id);

    let mut user = find_existing(&state, UserId::new(id)).await?;
    request.apply_to(&mut user);

    let updated = state.user_service.save(&user).await?;
    ok(updated)
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "No user with this id", body = ErrorBody)
    )
)]
pub async fn delete_user(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Response> {
    debug!("Delete user request: {}", id);

    let user_id = UserId::new(id);
    find_existing(&state, user_id).await?;
    state.user_service.delete_by_id(user_id).await?;

    no_content()
}

async fn find_existing(state: &AppState, id: UserId) -> Result<User, RepasandoError> {
    state
        .user_service
        .find_by_id(id)
        .await?
        .ok_or_else(|| RepasandoError::not_found("User", id))
}
