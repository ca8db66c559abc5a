//! HTTP client for a Supabase project.
//!
//! Wraps the three HTTP surfaces the app uses (PostgREST under `/rest/v1`,
//! edge functions under `/functions/v1` and GoTrue under `/auth/v1`) and
//! converts transport failures into the core error taxonomy.

use std::sync::{Arc, PoisonError, RwLock};

use log::debug;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use lifeguide_core::errors::{AuthError, DataAccessError, Error, Result};

use crate::config::SupabaseConfig;

const APIKEY: HeaderName = HeaderName::from_static("apikey");
const PREFER: HeaderName = HeaderName::from_static("prefer");

/// Which surface a request targets; decides how failures are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    /// PostgREST tables.
    Rest,
    /// Edge functions.
    Function,
    /// GoTrue.
    Auth,
}

/// Error bodies of PostgREST, GoTrue and the edge functions.
#[derive(Debug, Default, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiErrorResponse {
    fn into_message(self) -> Option<String> {
        self.message
            .or(self.msg)
            .or(self.error_description)
            .or(self.error)
    }
}

/// Maps a non-2xx response to an error.
///
/// 401/403 are auth failures everywhere. GoTrue also answers bad credentials
/// with 400/422. Other failures of a function are a degraded service; of a
/// table, a failed request.
pub fn error_for_status(kind: RouteKind, status: StatusCode, body: &str) -> Error {
    let message = serde_json::from_str::<ApiErrorResponse>(body)
        .ok()
        .and_then(ApiErrorResponse::into_message)
        .unwrap_or_else(|| {
            let snippet: String = body.chars().take(200).collect();
            if snippet.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                snippet
            }
        });

    match (kind, status.as_u16()) {
        (_, 401) | (_, 403) => AuthError::InvalidCredential(message).into(),
        (RouteKind::Auth, 400) | (RouteKind::Auth, 422) => {
            AuthError::InvalidCredential(message).into()
        }
        (RouteKind::Function, _) => Error::ServiceDegraded(message),
        (_, code) => DataAccessError::RequestFailed {
            status: code,
            message,
        }
        .into(),
    }
}

fn error_for_transport(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        DataAccessError::Timeout(err.to_string()).into()
    } else if err.is_decode() {
        DataAccessError::InvalidResponse(err.to_string()).into()
    } else {
        DataAccessError::Unreachable(err.to_string()).into()
    }
}

/// HTTP client for one Supabase project.
///
/// Clones share the signed-in session: once [`SupabaseClient::set_access_token`]
/// is called, requests without an explicit token are sent on behalf of that
/// user instead of with the bare API key.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    access_token: Arc<RwLock<Option<String>>>,
}

impl SupabaseClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not a valid header value or the
    /// HTTP client cannot be initialized.
    pub fn new(config: &SupabaseConfig) -> Result<Self> {
        HeaderValue::from_str(&config.api_key)
            .map_err(|e| Error::Unexpected(format!("Invalid API key format: {}", e)))?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            access_token: Arc::new(RwLock::new(None)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sets or clears the access token of the signed-in user.
    pub fn set_access_token(&self, token: Option<String>) {
        *self
            .access_token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = token;
    }

    pub fn access_token(&self) -> Option<String> {
        self.access_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Builds a PostgREST table URL with encoded filter values.
    pub fn rest_url(&self, table: &str, query: &[(&str, &str)]) -> String {
        let mut url = format!("{}/rest/v1/{}", self.base_url, table);
        if !query.is_empty() {
            let params: Vec<String> = query
                .iter()
                .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
                .collect();
            url = format!("{}?{}", url, params.join("&"));
        }
        url
    }

    pub fn function_url(&self, name: &str) -> String {
        format!("{}/functions/v1/{}", self.base_url, name)
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Create default headers for API requests.
    ///
    /// `bearer` overrides the session token; without either, the API key is
    /// used as the bearer.
    fn headers(&self, bearer: Option<&str>, prefer: Option<&'static str>) -> Result<HeaderMap> {
        let session = self.access_token();
        let token = bearer.or(session.as_deref()).unwrap_or(&self.api_key);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            APIKEY,
            HeaderValue::from_str(&self.api_key)
                .map_err(|e| Error::Unexpected(format!("Invalid API key format: {}", e)))?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| AuthError::InvalidCredential("malformed access token".to_string()))?,
        );
        if let Some(prefer) = prefer {
            headers.insert(PREFER, HeaderValue::from_static(prefer));
        }
        Ok(headers)
    }

    /// Sends a request and returns the body of a successful response.
    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        kind: RouteKind,
        body: Option<&B>,
        bearer: Option<&str>,
        prefer: Option<&'static str>,
    ) -> Result<String> {
        debug!("[Supabase] {} {}", method, url);

        let mut request = self
            .client
            .request(method, url)
            .headers(self.headers(bearer, prefer)?);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(error_for_transport)?;
        let status = response.status();
        let text = response.text().await.map_err(error_for_transport)?;

        if !status.is_success() {
            debug!("[Supabase] {} answered {}", url, status);
            return Err(error_for_status(kind, status, &text));
        }
        Ok(text)
    }

    /// Make a GET request and parse the response.
    pub async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        kind: RouteKind,
        bearer: Option<&str>,
    ) -> Result<T> {
        let body = self
            .execute::<()>(Method::GET, url, kind, None, bearer, None)
            .await?;
        parse_body(&body)
    }

    /// Make a POST request and parse the response.
    pub async fn post<B, T>(
        &self,
        url: &str,
        kind: RouteKind,
        body: &B,
        bearer: Option<&str>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let prefer = (kind == RouteKind::Rest).then_some("return=representation");
        let text = self
            .execute(Method::POST, url, kind, Some(body), bearer, prefer)
            .await?;
        parse_body(&text)
    }

    /// Make a request whose response body is not needed.
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        kind: RouteKind,
        body: Option<&B>,
        bearer: Option<&str>,
    ) -> Result<()> {
        let prefer = (kind == RouteKind::Rest).then_some("return=minimal");
        self.execute(method, url, kind, body, bearer, prefer)
            .await
            .map(|_| ())
    }
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| {
        let snippet: String = body.chars().take(200).collect();
        DataAccessError::InvalidResponse(format!("{} - {}", e, snippet)).into()
    })
}
