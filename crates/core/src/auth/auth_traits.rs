use async_trait::async_trait;

use super::auth_model::{AuthSession, AuthUser, SignInRequest, SignUpRequest};
use crate::errors::Result;

/// Trait for the hosted authentication service.
#[async_trait]
pub trait AuthProviderTrait: Send + Sync {
    /// Exchanges e-mail and password for a session.
    async fn sign_in(&self, request: SignInRequest) -> Result<AuthSession>;

    /// Registers a user. Implementations validate the request first.
    async fn sign_up(&self, request: SignUpRequest) -> Result<AuthUser>;

    /// Revokes the session of `access_token`.
    async fn sign_out(&self, access_token: &str) -> Result<()>;

    /// Resolves an access token to its user, failing with `AuthError` when
    /// the token is invalid or expired.
    async fn get_user(&self, access_token: &str) -> Result<AuthUser>;
}
