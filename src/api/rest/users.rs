use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::api::rest::require_text;
use crate::error::AppError;
use crate::models::user::User;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/users", get(list_users))
}

#[derive(Deserialize)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct UserResponse {
    pub message: String,
    pub user: User,
}

async fn signup(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let name = require_text(payload.name, "name")?;
    let email = require_text(payload.email, "email")?;
    let phone = require_text(payload.phone, "phone")?;
    let password = require_text(payload.password, "password")?;

    if state.users.find_by_email(&email)?.is_some() {
        return Err(AppError::Conflict("email already registered".to_string()));
    }

    let user = User {
        id: Uuid::new_v4(),
        name,
        email,
        phone,
        password,
        last_login: Utc::now(),
    };
    state.users.upsert(user.clone())?;

    info!(user_id = %user.id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            message: "Signup successful!".to_string(),
            user,
        }),
    ))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let email = require_text(payload.email, "email")?;
    let password = require_text(payload.password, "password")?;

    let mut user = state
        .users
        .find_by_email(&email)?
        .ok_or(AppError::InvalidCredentials)?;

    if user.password != password {
        return Err(AppError::InvalidCredentials);
    }

    user.last_login = Utc::now();
    state.users.upsert(user.clone())?;

    info!(user_id = %user.id, "user logged in");

    Ok(Json(UserResponse {
        message: "Login successful!".to_string(),
        user,
    }))
}

async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(state.users.list()?))
}
