use std::time::Duration;

use validator::Validate;
use zeroize::Zeroizing;

use crate::{
    auth::{jwt::JwtService, password::verify_password},
    entities::token::{AuthResponse, Claims, LoginRequest},
    errors::AuthError,
    limiter::rate_limiter::LoginThrottle,
    settings::AppConfig,
};

/// Single-account admin authentication backed by configured credentials.
pub struct AuthHandler {
    pub token_service: JwtService,
    pub throttle: LoginThrottle,
    admin_username: String,
    admin_password_hash: Zeroizing<String>,
}

impl AuthHandler {
    pub fn new(config: &AppConfig) -> Self {
        AuthHandler {
            token_service: JwtService::new(config),
            throttle: LoginThrottle::new(
                config.login_attempt_limit,
                Duration::from_secs(config.login_attempt_window_secs),
            ),
            admin_username: config.admin_username.clone(),
            admin_password_hash: Zeroizing::new(config.admin_password_hash.clone()),
        }
    }

    /// Checks the credentials and issues an access token.
    ///
    /// Failures count against `client_ip`; once the limit is reached the
    /// client gets `TooManyAttempts` until the window slides past.
    pub async fn login(&self, request: LoginRequest, client_ip: &str) -> Result<AuthResponse, AuthError> {
        if let Some(retry_after) = self.throttle.retry_after(client_ip) {
            tracing::warn!(client_ip, retry_after, "Login throttled");
            return Err(AuthError::TooManyAttempts(retry_after));
        }

        request.validate()?;

        // Always verify so an unknown username costs the same as a bad password
        let password_ok = verify_password(&request.password, &self.admin_password_hash)
            .map_err(|e| {
                tracing::error!("Admin password hash unusable: {}", e);
                AuthError::WrongCredentials
            })?;
        let username_ok = request.username == self.admin_username;

        if !(username_ok && password_ok) {
            self.throttle.record_failure(client_ip);
            tracing::warn!(client_ip, "Failed admin login");
            return Err(AuthError::WrongCredentials);
        }

        self.throttle.reset(client_ip);

        let access_token = self.token_service.create_jwt(&self.admin_username)
            .map_err(|e| {
                tracing::warn!("Failed to create JWT: {}", e);
                AuthError::TokenCreation
            })?;

        tracing::info!("Admin logged in successfully");
        Ok(AuthResponse::new(access_token, self.token_service.expires_in_secs()))
    }

    pub fn decode_claims(&self, token: &str) -> Result<Claims, AuthError> {
        Ok(self.token_service.decode_jwt(token)?.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::hash_password;

    fn handler(limit: u32) -> AuthHandler {
        let mut config = AppConfig::for_tests();
        config.admin_password_hash = hash_password("correct horse").unwrap();
        config.login_attempt_limit = limit;
        AuthHandler::new(&config)
    }

    fn login(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_rt::test]
    async fn valid_credentials_issue_admin_token() {
        let auth = handler(5);
        let response = auth.login(login("admin", "correct horse"), "1.2.3.4").await.unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 3600);

        let claims = auth.decode_claims(&response.access_token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert!(claims.admin);
    }

    #[actix_rt::test]
    async fn wrong_username_or_password_rejected() {
        let auth = handler(5);

        assert!(matches!(
            auth.login(login("admin", "nope"), "1.2.3.4").await,
            Err(AuthError::WrongCredentials)
        ));
        assert!(matches!(
            auth.login(login("root", "correct horse"), "1.2.3.4").await,
            Err(AuthError::WrongCredentials)
        ));
    }

    #[actix_rt::test]
    async fn repeated_failures_are_throttled_per_client() {
        let auth = handler(2);
        for _ in 0..2 {
            let _ = auth.login(login("admin", "nope"), "9.9.9.9").await;
        }

        let blocked = auth.login(login("admin", "correct horse"), "9.9.9.9").await;
        assert!(matches!(blocked, Err(AuthError::TooManyAttempts(_))));

        let other_client = auth.login(login("admin", "correct horse"), "8.8.8.8").await;
        assert!(other_client.is_ok());
    }

    #[actix_rt::test]
    async fn success_clears_previous_failures() {
        let auth = handler(2);
        let _ = auth.login(login("admin", "nope"), "5.5.5.5").await;
        assert!(auth.login(login("admin", "correct horse"), "5.5.5.5").await.is_ok());

        let _ = auth.login(login("admin", "nope"), "5.5.5.5").await;
        assert!(auth.login(login("admin", "correct horse"), "5.5.5.5").await.is_ok());
    }
}
