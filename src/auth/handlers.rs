use axum::{
    extract::State,
    routing::post,
    Form, Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, Credentials},
        repo::User,
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

#[instrument(skip(state, form))]
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<Credentials>,
) -> Result<Json<AuthResponse>, ApiError> {
    // Check-then-insert, as the prototype does; the UNIQUE constraint on
    // email backstops the race.
    if User::find_by_email(&state.db, &form.email).await?.is_some() {
        warn!(email = %form.email, "email already registered");
        return Err(ApiError::DuplicateEmail);
    }

    let user = User::create(&state.db, &form.email, &form.password).await?;

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok(Json(AuthResponse {
        user_id: user.id,
        email: user.email,
    }))
}

#[instrument(skip(state, form))]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<Credentials>,
) -> Result<Json<AuthResponse>, ApiError> {
    let user = User::find_by_credentials(&state.db, &form.email, &form.password)
        .await?
        .ok_or_else(|| {
            warn!(email = %form.email, "login invalid credentials");
            ApiError::InvalidCredentials
        })?;

    info!(user_id = user.id, email = %user.email, "user logged in");
    Ok(Json(AuthResponse {
        user_id: user.id,
        email: user.email,
    }))
}
