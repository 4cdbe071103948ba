//! Session lifecycle manager: register, login, logout, refresh flows.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use habitflow_core::config::auth::AuthConfig;
use habitflow_core::error::AppError;
use habitflow_database::repositories::session::SessionRepository;
use habitflow_database::repositories::user::UserRepository;
use habitflow_entity::user::{CreateUser, User};

use crate::jwt::encoder::TokenPair;
use crate::jwt::{Claims, JwtDecoder, JwtEncoder};
use crate::password::{PasswordHasher, PasswordValidator};
use crate::verification::generate_verification_token;

/// Result of a successful login or refresh.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginResult {
    /// Generated token pair.
    pub tokens: TokenPair,
    /// The authenticated user.
    pub user: User,
}

/// Registration input, with the password still in plaintext.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Desired username.
    pub username: String,
    /// Full display name.
    pub full_name: String,
    /// Whether the user is a CSE student.
    pub is_cse_student: bool,
    /// Year of study (1..4), if a student.
    pub year_of_study: Option<i32>,
}

/// Manages the complete session lifecycle.
#[derive(Clone)]
pub struct SessionManager {
    /// JWT encoder for token generation.
    jwt_encoder: Arc<JwtEncoder>,
    /// JWT decoder for token validation.
    jwt_decoder: Arc<JwtDecoder>,
    /// Session persistence.
    session_repo: Arc<SessionRepository>,
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    password_hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    password_validator: PasswordValidator,
    /// Auth configuration.
    auth_config: AuthConfig,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("auth_config", &self.auth_config)
            .finish()
    }
}

impl SessionManager {
    /// Creates a new session manager with all required dependencies.
    pub fn new(
        session_repo: Arc<SessionRepository>,
        user_repo: Arc<UserRepository>,
        auth_config: AuthConfig,
    ) -> Self {
        Self {
            jwt_encoder: Arc::new(JwtEncoder::new(&auth_config)),
            jwt_decoder: Arc::new(JwtDecoder::new(&auth_config)),
            session_repo,
            user_repo,
            password_hasher: Arc::new(PasswordHasher::new()),
            password_validator: PasswordValidator::new(&auth_config),
            auth_config,
        }
    }

    /// Registers a new account and stores a pending verification token.
    ///
    /// The created user cannot log in until the token is redeemed,
    /// unless verification is disabled deployment-wide.
    pub async fn register(&self, request: RegisterRequest) -> Result<User, AppError> {
        self.password_validator.validate(&request.password)?;

        let password_hash = self.password_hasher.hash_password(&request.password)?;
        let verification_token = generate_verification_token();

        let user = self
            .user_repo
            .create(&CreateUser {
                email: request.email,
                password_hash,
                username: request.username,
                full_name: request.full_name,
                is_cse_student: request.is_cse_student,
                year_of_study: request.year_of_study,
                verification_token,
            })
            .await?;

        info!(user_id = %user.id, username = %user.username, "User registered");
        Ok(user)
    }

    /// Performs the complete login flow:
    ///
    /// 1. Look up the user by email
    /// 2. Verify the password
    /// 3. Check email verification status
    /// 4. Create a session row and generate a token pair
    ///
    /// Credential failures are indistinguishable to the caller: both an
    /// unknown email and a wrong password yield the same message.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid login credentials"))?;

        let password_valid = self
            .password_hasher
            .verify_password(password, &user.password_hash)?;

        if !password_valid {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AppError::authentication("Invalid login credentials"));
        }

        if !user.can_login(self.auth_config.require_email_verification) {
            return Err(AppError::authentication("Email not confirmed"));
        }

        // The session row is created first so the refresh JTI can be
        // bound to it atomically.
        let placeholder_jti = Uuid::new_v4();
        let refresh_exp = chrono::Utc::now()
            + chrono::Duration::hours(self.auth_config.jwt_refresh_ttl_hours as i64);
        let session = self
            .session_repo
            .create(user.id, placeholder_jti, refresh_exp)
            .await?;

        let tokens = self
            .jwt_encoder
            .generate_token_pair(user.id, session.id, &user.username)?;
        self.session_repo
            .rotate_refresh(session.id, tokens.refresh_jti, tokens.refresh_expires_at)
            .await?;

        info!(user_id = %user.id, session_id = %session.id, "User logged in");
        Ok(LoginResult { tokens, user })
    }

    /// Exchanges a valid refresh token for a new token pair, rotating
    /// the stored refresh JTI so the old refresh token is single-use.
    pub async fn refresh(&self, refresh_token: &str) -> Result<LoginResult, AppError> {
        let claims = self.jwt_decoder.decode_refresh_token(refresh_token)?;

        let session = self
            .session_repo
            .find_by_id(claims.session_id())
            .await?
            .ok_or_else(|| AppError::authentication("Session not found"))?;

        if !session.is_active() {
            return Err(AppError::authentication("Session has been revoked"));
        }

        // A mismatched JTI means this refresh token was already used.
        if session.refresh_jti != claims.jti {
            warn!(session_id = %session.id, "Refresh token reuse detected; revoking session");
            self.session_repo.revoke(session.id).await?;
            return Err(AppError::authentication("Refresh token is no longer valid"));
        }

        let user = self
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::authentication("User no longer exists"))?;

        let tokens = self
            .jwt_encoder
            .generate_token_pair(user.id, session.id, &user.username)?;
        self.session_repo
            .rotate_refresh(session.id, tokens.refresh_jti, tokens.refresh_expires_at)
            .await?;

        Ok(LoginResult { tokens, user })
    }

    /// Revokes the session behind an access token.
    pub async fn logout(&self, session_id: Uuid) -> Result<(), AppError> {
        self.session_repo.revoke(session_id).await?;
        info!(session_id = %session_id, "Session revoked");
        Ok(())
    }

    /// Validates an access token and its backing session, returning the
    /// authenticated user. This is the auth middleware entry point.
    pub async fn authenticate(&self, access_token: &str) -> Result<(User, Claims), AppError> {
        let claims = self.jwt_decoder.decode_access_token(access_token)?;

        let session = self
            .session_repo
            .find_by_id(claims.session_id())
            .await?
            .ok_or_else(|| AppError::authentication("Session not found"))?;

        if !session.is_active() {
            return Err(AppError::authentication("Session has been revoked"));
        }

        let user = self
            .user_repo
            .find_by_id(claims.user_id())
            .await?
            .ok_or_else(|| AppError::authentication("User no longer exists"))?;

        Ok((user, claims))
    }

    /// Redeems an email verification token.
    pub async fn verify_email(&self, token: &str) -> Result<User, AppError> {
        let user = self
            .user_repo
            .verify_email(token)
            .await?
            .ok_or_else(|| AppError::not_found("Verification token not found or already used"))?;

        info!(user_id = %user.id, "Email verified");
        Ok(user)
    }

    /// Issues a fresh verification token for an unverified account.
    ///
    /// Always succeeds for unknown emails so the endpoint does not leak
    /// which addresses are registered.
    pub async fn resend_verification(&self, email: &str) -> Result<Option<String>, AppError> {
        let Some(user) = self.user_repo.find_by_email(email).await? else {
            return Ok(None);
        };

        if user.email_verified {
            return Ok(None);
        }

        let token = generate_verification_token();
        self.user_repo.set_verification_token(user.id, &token).await?;
        Ok(Some(token))
    }
}
