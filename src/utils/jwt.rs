use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rocket::http::Status;
use rocket::request::{FromRequest, Outcome};
use rocket::Request;
use rocket_okapi::request::OpenApiFromRequest;
use serde::{Deserialize, Serialize};
use std::env;
use uuid::Uuid;

// Fallback mirrors the development secret the service shipped with; any real
// deployment overrides it through the environment.
const DEFAULT_SECRET: &str = "ridenaija-secret-key-2024-change-in-production";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid, // user id
    pub exp: usize,
}

#[derive(Debug, OpenApiFromRequest)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

// Same as AuthenticatedUser but never rejects the request: routes that work
// both logged-in and anonymous take this guard instead.
#[derive(Debug, OpenApiFromRequest)]
pub struct MaybeUser {
    pub user_id: Option<Uuid>,
}

fn secret() -> String {
    env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_SECRET.to_string())
}

pub fn generate_token(user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
    let expiration = chrono::Utc::now()
        // Tokens stay valid for 24 hours
        .checked_add_signed(chrono::Duration::hours(24))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id,
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret().as_bytes()),
    )
}

pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret().as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

fn bearer_token(request: &Request<'_>) -> Option<String> {
    match request.headers().get_one("Authorization") {
        Some(token) if token.starts_with("Bearer ") => Some(token[7..].to_string()),
        _ => None,
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthenticatedUser {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let token = match bearer_token(request) {
            Some(token) => token,
            None => return Outcome::Error((Status::Unauthorized, ())),
        };

        match verify_token(&token) {
            Ok(claims) => Outcome::Success(AuthenticatedUser {
                user_id: claims.sub,
            }),
            Err(_) => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for MaybeUser {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let user_id = bearer_token(request)
            .and_then(|token| verify_token(&token).ok())
            .map(|claims| claims.sub);

        Outcome::Success(MaybeUser { user_id })
    }
}
