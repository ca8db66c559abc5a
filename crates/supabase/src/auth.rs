use async_trait::async_trait;
use log::info;
use reqwest::Method;

use lifeguide_core::auth::{AuthProviderTrait, AuthSession, AuthUser, SignInRequest, SignUpRequest};
use lifeguide_core::errors::Result;

use crate::client::{RouteKind, SupabaseClient};
use crate::models::{
    GoTrueSession, GoTrueUser, PasswordGrant, SignUpBody, SignUpMetadata, SignUpResponse,
};

/// GoTrue-backed authentication.
///
/// Signing in stores the access token on the shared client so the goal
/// store and the functions run as the signed-in user; signing out clears it.
#[derive(Debug, Clone)]
pub struct SupabaseAuthProvider {
    client: SupabaseClient,
}

impl SupabaseAuthProvider {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthProviderTrait for SupabaseAuthProvider {
    async fn sign_in(&self, request: SignInRequest) -> Result<AuthSession> {
        let url = self.client.auth_url("token?grant_type=password");
        let body = PasswordGrant {
            email: request.email.trim(),
            password: &request.password,
        };
        let session: GoTrueSession = self.client.post(&url, RouteKind::Auth, &body, None).await?;
        let session = AuthSession::from(session);

        self.client
            .set_access_token(Some(session.access_token.clone()));
        info!("[Supabase] Signed in user {}", session.user.id);
        Ok(session)
    }

    async fn sign_up(&self, request: SignUpRequest) -> Result<AuthUser> {
        request.validate()?;

        let url = self.client.auth_url("signup");
        let body = SignUpBody {
            email: request.email.trim(),
            password: &request.password,
            data: SignUpMetadata {
                full_name: request.full_name.trim(),
            },
        };
        let response: SignUpResponse = self.client.post(&url, RouteKind::Auth, &body, None).await?;
        let (user, access_token) = response.into_parts();
        if access_token.is_some() {
            self.client.set_access_token(access_token);
        }
        info!("[Supabase] Registered user {}", user.id);
        Ok(user)
    }

    async fn sign_out(&self, access_token: &str) -> Result<()> {
        let url = self.client.auth_url("logout");
        let result = self
            .client
            .send::<()>(Method::POST, &url, RouteKind::Auth, None, Some(access_token))
            .await;
        // The local session ends even if revocation failed.
        self.client.set_access_token(None);
        result
    }

    async fn get_user(&self, access_token: &str) -> Result<AuthUser> {
        let url = self.client.auth_url("user");
        let user: GoTrueUser = self
            .client
            .get(&url, RouteKind::Auth, Some(access_token))
            .await?;
        Ok(user.into())
    }
}
