use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde::Deserialize;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{AuthDto, CreateUserParam},
    service::password,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Request body for account registration.
///
/// Fields default to empty strings so that absent fields fail our own
/// validation with a clear message instead of a bare deserialization error.
#[derive(Deserialize)]
pub struct RegisterDto {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for login.
#[derive(Deserialize)]
pub struct LoginDto {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST /api/auth/register
///
/// Creates an account, stores the hashed password and a generated avatar, and
/// returns a signed token with the new user.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    if body.username.is_empty() || body.email.is_empty() || body.password.is_empty() {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    }
    if body.password.len() < 6 {
        return Err(AppError::BadRequest(
            "Password should be at least 6 characters long".to_string(),
        ));
    }
    if body.username.len() < 3 {
        return Err(AppError::BadRequest(
            "Username should be at least 3 characters long".to_string(),
        ));
    }

    let user_repo = UserRepository::new(&state.db);

    if user_repo.find_by_email(&body.email).await?.is_some() {
        return Err(AppError::BadRequest("Email already exists".to_string()));
    }
    if user_repo.find_by_username(&body.username).await?.is_some() {
        return Err(AppError::BadRequest("Username already exists".to_string()));
    }

    let password_hash = password::hash_password(&body.password).await?;
    let profile_image = format!(
        "https://api.dicebear.com/7.x/avataaars/svg?seed={}",
        body.username
    );

    let user = user_repo
        .create(CreateUserParam {
            username: body.username,
            email: body.email,
            password_hash,
            profile_image,
        })
        .await?;

    let token = state.tokens.issue(&user.id)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// POST /api/auth/login
///
/// Verifies credentials and returns a signed token with the user. Unknown
/// email and wrong password produce the same 401 response.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    if body.email.is_empty() || body.password.is_empty() {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    }

    let user_repo = UserRepository::new(&state.db);

    let Some(user) = user_repo.find_by_email(&body.email).await? else {
        return Err(AuthError::InvalidCredentials.into());
    };

    if !password::verify_password(&body.password, &user.password_hash).await? {
        return Err(AuthError::InvalidCredentials.into());
    }

    let token = state.tokens.issue(&user.id)?;

    Ok((
        StatusCode::OK,
        Json(AuthDto {
            token,
            user: user.into_dto(),
        }),
    ))
}
