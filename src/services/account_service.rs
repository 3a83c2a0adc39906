use crate::models::user::{AuthResponse, LoginRequest, RegisterRequest, User, UserView};
use crate::utils::error::{AppError, AppResult};
use crate::utils::jwt;
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

const USER_COLUMNS: &str = "id, name, email, phone, password_hash, role, rating, created_at";

#[derive(Clone)]
pub struct AccountService {
    pool: SqlitePool,
}

impl AccountService {
    pub fn new(pool: SqlitePool) -> Self {
        AccountService { pool }
    }

    // Register a new user and log them straight in
    pub async fn register(&self, request: RegisterRequest) -> AppResult<AuthResponse> {
        for (value, field) in [
            (&request.name, "name"),
            (&request.email, "email"),
            (&request.phone, "phone"),
            (&request.password, "password"),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::BadRequest(format!("{} is required", field)));
            }
        }

        let email = request.email.trim().to_lowercase();

        let existing = sqlx::query("SELECT id FROM users WHERE email = ?")
            .bind(&email)
            .fetch_optional(&self.pool)
            .await?;

        if existing.is_some() {
            return Err(AppError::Conflict("Email already registered".into()));
        }

        let password_hash = hash(request.password.as_bytes(), DEFAULT_COST)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        let user = User {
            id: Uuid::new_v4(),
            name: request.name.trim().to_string(),
            email,
            phone: request.phone.trim().to_string(),
            password_hash,
            role: request.role,
            rating: 0.0,
            created_at: Utc::now(),
        };

        sqlx::query(
            "INSERT INTO users (id, name, email, phone, password_hash, role, rating, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.phone)
        .bind(&user.password_hash)
        .bind(user.role)
        .bind(user.rating)
        .bind(user.created_at)
        .execute(&self.pool)
        .await?;

        let token = jwt::generate_token(user.id).map_err(|e| AppError::Internal(e.to_string()))?;

        Ok(AuthResponse {
            success: true,
            message: "Registration successful".to_string(),
            token,
            user: UserView::from(&user),
        })
    }

    // Login with email + password. Unknown email and wrong password are
    // indistinguishable to the caller.
    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        let email = request.email.trim().to_lowercase();

        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE email = ?",
            USER_COLUMNS
        ))
        .bind(&email)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::AuthError("Invalid email or password".into()))?;

        let password_matches = verify(request.password.as_bytes(), &user.password_hash)
            .map_err(|e| AppError::Internal(e.to_string()))?;

        if !password_matches {
            return Err(AppError::AuthError("Invalid email or password".into()));
        }

        let token = jwt::generate_token(user.id).map_err(|e| AppError::Internal(e.to_string()))?;

        Ok(AuthResponse {
            success: true,
            message: "Login successful".to_string(),
            token,
            user: UserView::from(&user),
        })
    }

    pub async fn lookup(&self, user_id: Uuid) -> AppResult<User> {
        sqlx::query_as::<_, User>(&format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS))
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))
    }
}
