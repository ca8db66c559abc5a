//! Auth module - user identity, sign-in/sign-up forms and the provider trait.

mod auth_model;
mod auth_traits;

pub use auth_model::{
    bearer_token, AuthSession, AuthUser, SignInRequest, SignUpRequest,
};
pub use auth_traits::AuthProviderTrait;
