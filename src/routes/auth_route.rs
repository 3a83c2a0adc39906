use crate::models::user::{
    AuthCheckResponse, AuthResponse, LoginRequest, MessageResponse, RegisterRequest, UserView,
};
use crate::services::account_service::AccountService;
use crate::utils::error::AppError;
use crate::utils::jwt::MaybeUser;
use rocket::serde::json::Json;
use rocket::State;
use rocket_okapi::openapi;

/// Register a new user
#[openapi(tag = "Auth")]
#[post("/auth/register", format = "json", data = "<request>")]
pub async fn register(
    request: Json<RegisterRequest>,
    account_service: &State<AccountService>,
) -> Result<Json<AuthResponse>, AppError> {
    let response = account_service.register(request.into_inner()).await?;
    Ok(Json(response))
}

/// Login with email and password
#[openapi(tag = "Auth")]
#[post("/auth/login", format = "json", data = "<request>")]
pub async fn login(
    request: Json<LoginRequest>,
    account_service: &State<AccountService>,
) -> Result<Json<AuthResponse>, AppError> {
    let response = account_service.login(request.into_inner()).await?;
    Ok(Json(response))
}

/// Logout. Sessions are bearer tokens, so this is a client-side discard.
#[openapi(tag = "Auth")]
#[post("/auth/logout")]
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse {
        success: true,
        message: "Logged out successfully".to_string(),
    })
}

/// Report whether the caller holds a valid session
#[openapi(tag = "Auth")]
#[get("/auth/check")]
pub async fn check(
    auth: MaybeUser,
    account_service: &State<AccountService>,
) -> Result<Json<AuthCheckResponse>, AppError> {
    let anonymous = AuthCheckResponse {
        success: true,
        authenticated: false,
        user: None,
    };

    match auth.user_id {
        Some(user_id) => match account_service.lookup(user_id).await {
            Ok(user) => Ok(Json(AuthCheckResponse {
                success: true,
                authenticated: true,
                user: Some(UserView::from(&user)),
            })),
            Err(AppError::NotFound(_)) => Ok(Json(anonymous)),
            Err(e) => Err(e),
        },
        None => Ok(Json(anonymous)),
    }
}
