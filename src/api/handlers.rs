use argon2::password_hash::{rand_core::OsRng, PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Champion, ChampionId, NewUser, PreferenceSet, UserProfile};
use crate::services::{self, Recommendations};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user_id: Uuid,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct SavePreferencesRequest {
    pub preferences: Vec<ChampionId>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Get the full champion catalog
pub async fn get_champions(State(state): State<AppState>) -> AppResult<Json<Vec<Champion>>> {
    let champions = state.store.list_champions().await?;
    Ok(Json(champions))
}

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserProfile>)> {
    if request.username.trim().is_empty()
        || request.email.trim().is_empty()
        || request.password.is_empty()
    {
        return Err(AppError::InvalidInput("All fields are required".to_string()));
    }

    let password_hash = hash_password(&request.password)?;
    let user = state
        .store
        .create_user(NewUser {
            username: request.username,
            email: request.email,
            password_hash,
        })
        .await?;

    tracing::info!(user_id = %user.id, "user registered");
    Ok((StatusCode::CREATED, Json(UserProfile::from(&user))))
}

/// Log a user in, returning their id for the client session
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = state
        .store
        .find_user_by_email(&request.email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if !verify_password(&request.password, &user.password_hash)? {
        return Err(AppError::Unauthorized("Invalid credentials".to_string()));
    }

    tracing::info!(user_id = %user.id, "login successful");
    Ok(Json(LoginResponse {
        user_id: user.id,
        username: user.username,
    }))
}

/// Get a user's public profile
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<UserProfile>> {
    let user = state
        .store
        .get_user(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(Json(UserProfile::from(&user)))
}

/// Get a user's liked champions resolved against the catalog
pub async fn get_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<Vec<Champion>>> {
    let liked = state
        .store
        .load_preferences(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let favorites: Vec<Champion> = state
        .store
        .list_champions()
        .await?
        .into_iter()
        .filter(|champion| liked.contains(&champion.id))
        .collect();

    Ok(Json(favorites))
}

/// Replace a user's preference set wholesale
///
/// Every id must reference a known champion; a save with any unknown id is
/// rejected before anything is written.
pub async fn save_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(request): Json<SavePreferencesRequest>,
) -> AppResult<Json<Value>> {
    state
        .store
        .get_user(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let preferences: PreferenceSet = request.preferences.into_iter().collect();

    let known: PreferenceSet = state
        .store
        .list_champions()
        .await?
        .into_iter()
        .map(|champion| champion.id)
        .collect();
    if !preferences.is_subset(&known) {
        return Err(AppError::InvalidInput(
            "One or more invalid champion IDs provided.".to_string(),
        ));
    }

    state.store.save_preferences(user_id, &preferences).await?;

    tracing::info!(%user_id, count = preferences.len(), "preferences saved");
    Ok(Json(json!({ "message": "Preferences saved successfully" })))
}

/// Get both recommendation lists for a user
pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<Json<Recommendations>> {
    let recommendations = services::recommend_for_user(state.store.clone(), user_id).await?;
    Ok(Json(recommendations))
}

// Password hashing

fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {e}")))
}

fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(format!("Stored password hash is malformed: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
