use crate::entities::user_entity as users;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::services::CreditService;
use crate::utils::{JwtService, hash_password, validate_email, validate_password, verify_password};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set,
};
use uuid::Uuid;

/// Contact credits every new account starts with.
const STARTER_CONTACT_CREDITS: i64 = 100;

#[derive(Clone)]
pub struct AuthService {
    pool: DatabaseConnection,
    jwt_service: JwtService,
    credit_service: CreditService,
}

impl AuthService {
    pub fn new(
        pool: DatabaseConnection,
        jwt_service: JwtService,
        credit_service: CreditService,
    ) -> Self {
        Self {
            pool,
            jwt_service,
            credit_service,
        }
    }

    pub async fn register(&self, request: CreateUserRequest) -> AppResult<AuthResponse> {
        let username = request.username.trim();
        if username.is_empty() {
            return Err(AppError::ValidationError(
                "Username must not be empty".to_string(),
            ));
        }
        validate_email(&request.email)?;
        validate_password(&request.password)?;

        let existing = users::Entity::find()
            .filter(users::Column::Email.eq(&request.email))
            .one(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(AppError::ValidationError(
                "Email already registered".to_string(),
            ));
        }

        let password_hash = hash_password(&request.password)?;

        let user = users::ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username.to_string()),
            email: Set(request.email.clone()),
            password_hash: Set(password_hash),
            is_active: Set(true),
            last_login: Set(None),
            created_at: Set(Some(Utc::now())),
        }
        .insert(&self.pool)
        .await?;

        self.credit_service
            .grant(user.id, CreditType::ContactCredit, STARTER_CONTACT_CREDITS)
            .await?;

        log::info!("Registered user {} ({})", user.id, user.email);

        self.build_auth_response(user)
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        let user = users::Entity::find()
            .filter(users::Column::Email.eq(&request.email))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !user.is_active {
            return Err(AppError::AuthError("Account is disabled".to_string()));
        }

        if !verify_password(&request.password, &user.password_hash)? {
            return Err(AppError::ValidationError(
                "Incorrect password".to_string(),
            ));
        }

        let mut model = user.into_active_model();
        model.last_login = Set(Some(Utc::now()));
        let user = model.update(&self.pool).await?;

        self.build_auth_response(user)
    }

    pub async fn refresh(&self, refresh_token: &str) -> AppResult<AuthResponse> {
        let claims = self.jwt_service.verify_refresh_token(refresh_token)?;
        let user_id = claims.user_id()?;

        let user = users::Entity::find_by_id(user_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !user.is_active {
            return Err(AppError::AuthError("Account is disabled".to_string()));
        }

        self.build_auth_response(user)
    }

    fn build_auth_response(&self, user: users::Model) -> AppResult<AuthResponse> {
        let access_token = self.jwt_service.generate_access_token(user.id, &user.email)?;
        let refresh_token = self
            .jwt_service
            .generate_refresh_token(user.id, &user.email)?;

        Ok(AuthResponse {
            user: user.into(),
            access_token,
            refresh_token,
            expires_in: self.jwt_service.get_access_token_expires_in(),
        })
    }
}
