//! Waitlist API endpoints
//!
//! Server-side proxy in front of the hosted backend:
//! - POST /api/auth/signup - Create an account
//! - POST /api/auth/login - Sign in with email and password
//! - POST /api/auth/logout - Revoke the current session
//! - GET /api/auth/me - Resolve the user behind a bearer token
//! - POST /api/waitlist - Insert a waitlist row
//! - POST /api/profile/waitlist - Flag the caller's profile as on the waitlist
//! - GET /api/waitlist/status?email= - Look up an email on the waitlist

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use super::gateway::GatewayError;
use super::identity::{AuthError, Identity, Session, SignUpProfile};
use super::reconciler::lookup_key;
use super::record::{WaitlistEntry, WaitlistRecord};
use super::supabase::SupabaseClient;

/// Waitlist API state containing the backend client
#[derive(Clone)]
pub struct WaitlistApiState {
    pub client: SupabaseClient,
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}

/// Convert AuthError to API response
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match &self {
            AuthError::EmailNotConfirmed => StatusCode::FORBIDDEN,
            AuthError::InvalidCredentials | AuthError::NotSignedIn => StatusCode::UNAUTHORIZED,
            AuthError::AlreadyRegistered => StatusCode::CONFLICT,
            AuthError::Network(_) => StatusCode::BAD_GATEWAY,
            AuthError::Other(_) => StatusCode::BAD_REQUEST,
        };

        let body = ApiError::new(self.to_string(), self.code());

        (status, Json(body)).into_response()
    }
}

/// Convert GatewayError to API response
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            GatewayError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            GatewayError::Rejected { status, .. } => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                "REJECTED",
            ),
            GatewayError::Transport(_) => (StatusCode::BAD_GATEWAY, "TRANSPORT_ERROR"),
            GatewayError::Decode(_) => (StatusCode::BAD_GATEWAY, "DECODE_ERROR"),
        };

        let body = ApiError::new(self.to_string(), code);

        (status, Json(body)).into_response()
    }
}

/// Sign-up request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Sign-in request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Profile flag request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileWaitlistRequest {
    pub user_id: Uuid,
}

/// Status lookup query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusQuery {
    #[serde(default)]
    pub email: String,
}

/// Status lookup response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub entry: Option<WaitlistEntry>,
}

/// Generic success response
#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
}

impl SuccessResponse {
    fn ok(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.into(),
        })
    }
}

/// Create the waitlist API router
pub fn waitlist_api_router(state: WaitlistApiState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/api/auth/signup", post(sign_up_handler))
        .route("/api/auth/login", post(sign_in_handler))
        .route("/api/auth/logout", post(sign_out_handler))
        .route("/api/auth/me", get(me_handler))
        .route("/api/waitlist", post(insert_waitlist_handler))
        .route("/api/profile/waitlist", post(mark_profile_handler))
        .route("/api/waitlist/status", get(status_handler))
        .with_state(state)
}

/// POST /api/auth/signup
async fn sign_up_handler(
    State(state): State<Arc<WaitlistApiState>>,
    Json(request): Json<SignUpRequest>,
) -> Result<Json<Session>, AuthError> {
    tracing::info!("Sign-up attempt for email: {}", request.email);

    let profile = SignUpProfile {
        full_name: request.full_name,
    };
    let session = state
        .client
        .sign_up(&request.email, &request.password, &profile)
        .await?;

    tracing::info!(
        "Account created for {} (confirmed: {})",
        session.identity.email,
        session.is_active()
    );

    Ok(Json(session))
}

/// POST /api/auth/login
async fn sign_in_handler(
    State(state): State<Arc<WaitlistApiState>>,
    Json(request): Json<SignInRequest>,
) -> Result<Json<Session>, AuthError> {
    tracing::info!("Sign-in attempt for email: {}", request.email);

    let session = state
        .client
        .sign_in(&request.email, &request.password)
        .await?;

    tracing::info!("User signed in: {}", session.identity.email);

    Ok(Json(session))
}

/// POST /api/auth/logout
async fn sign_out_handler(
    State(state): State<Arc<WaitlistApiState>>,
    headers: HeaderMap,
) -> Result<Json<SuccessResponse>, AuthError> {
    let token = extract_bearer_token(&headers).ok_or(AuthError::NotSignedIn)?;

    state.client.sign_out(&token).await?;

    Ok(SuccessResponse::ok("Signed out"))
}

/// GET /api/auth/me
async fn me_handler(
    State(state): State<Arc<WaitlistApiState>>,
    headers: HeaderMap,
) -> Result<Json<Identity>, AuthError> {
    let token = extract_bearer_token(&headers).ok_or(AuthError::NotSignedIn)?;

    let identity = state.client.current_identity(&token).await?;

    Ok(Json(identity))
}

/// POST /api/waitlist
async fn insert_waitlist_handler(
    State(state): State<Arc<WaitlistApiState>>,
    headers: HeaderMap,
    Json(record): Json<WaitlistRecord>,
) -> Result<(StatusCode, Json<SuccessResponse>), GatewayError> {
    tracing::info!("Waitlist submission for email: {}", record.email());

    let client = scoped_client(&state.client, &headers);
    client.insert_waitlist(&record).await?;

    Ok((StatusCode::CREATED, SuccessResponse::ok("Added to waitlist")))
}

/// POST /api/profile/waitlist
async fn mark_profile_handler(
    State(state): State<Arc<WaitlistApiState>>,
    headers: HeaderMap,
    Json(request): Json<ProfileWaitlistRequest>,
) -> Result<Json<SuccessResponse>, GatewayError> {
    let token = extract_bearer_token(&headers).ok_or(GatewayError::Unauthorized)?;

    state
        .client
        .with_user_token(&token)
        .mark_profile_on_waitlist(request.user_id)
        .await?;

    tracing::info!("Profile {} flagged as on waitlist", request.user_id);

    Ok(SuccessResponse::ok("Profile updated"))
}

/// GET /api/waitlist/status?email=
async fn status_handler(
    State(state): State<Arc<WaitlistApiState>>,
    headers: HeaderMap,
    Query(query): Query<StatusQuery>,
) -> Result<Json<StatusResponse>, GatewayError> {
    let Some(email) = lookup_key(&query.email) else {
        return Ok(Json(StatusResponse { entry: None }));
    };

    tracing::debug!("Waitlist status lookup for: {}", email);

    let entry = scoped_client(&state.client, &headers)
        .find_waitlist_entry(&email)
        .await?;

    Ok(Json(StatusResponse { entry }))
}

/// Act as the caller when a bearer token is present, anonymously otherwise
fn scoped_client(client: &SupabaseClient, headers: &HeaderMap) -> SupabaseClient {
    match extract_bearer_token(headers) {
        Some(token) => client.with_user_token(&token),
        None => client.clone(),
    }
}

/// Extract Bearer token from Authorization header
fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())?;

    let token = auth_header.strip_prefix("Bearer ")?;

    if token.is_empty() {
        return None;
    }

    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_bearer_token_valid() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer my_token_123"),
        );

        assert_eq!(
            extract_bearer_token(&headers),
            Some("my_token_123".to_string())
        );
    }

    #[test]
    fn test_extract_bearer_token_missing_header() {
        let headers = HeaderMap::new();
        assert!(extract_bearer_token(&headers).is_none());
    }

    #[test]
    fn test_extract_bearer_token_invalid_format() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic base64credentials"),
        );

        assert!(extract_bearer_token(&headers).is_none());
    }

    #[test]
    fn test_extract_bearer_token_empty_token() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));

        assert!(extract_bearer_token(&headers).is_none());
    }

    #[test]
    fn test_auth_error_status_codes() {
        assert_eq!(
            AuthError::InvalidCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::AlreadyRegistered.into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AuthError::Network("down".into()).into_response().status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_gateway_error_keeps_backend_status() {
        let err = GatewayError::Rejected {
            status: 409,
            message: "duplicate key".to_string(),
        };
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
        assert_eq!(
            GatewayError::Unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("Invalid login credentials", "INVALID_CREDENTIALS");
        let json = serde_json::to_string(&error).unwrap();

        assert!(json.contains("Invalid login credentials"));
        assert!(json.contains("INVALID_CREDENTIALS"));
    }

    #[test]
    fn test_status_query_defaults_email() {
        let query: StatusQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.email, "");
    }

    #[test]
    fn test_sign_up_request_deserialization() {
        let json = r#"{
            "email": "ada@example.com",
            "password": "secret1",
            "full_name": "Ada Lovelace"
        }"#;

        let request: SignUpRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.email, "ada@example.com");
        assert_eq!(request.full_name, "Ada Lovelace");
    }
}
