//! Browser client for the waitlist API
//!
//! Every backend call from the page goes through the server routes under
//! `/api`, so the hosted backend key never reaches the browser.

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{
    AuthError, GatewayError, Identity, IdentityProvider, Session, SignUpProfile, WaitlistEntry,
    WaitlistGateway, WaitlistRecord,
};

/// Error body returned by the API routes
#[derive(Debug, Clone, Deserialize)]
#[allow(dead_code)]
struct ApiErrorBody {
    error: String,
    code: String,
}

#[derive(Debug, Serialize)]
struct SignUpRequest<'a> {
    email: &'a str,
    password: &'a str,
    full_name: &'a str,
}

#[derive(Debug, Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct ProfileWaitlistRequest {
    user_id: Uuid,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    entry: Option<WaitlistEntry>,
}

/// Failed API call before it is mapped to a domain error
#[derive(Debug, Clone, PartialEq, Eq)]
enum ApiFailure {
    Network(String),
    Decode(String),
    Status {
        status: u16,
        error: String,
        code: String,
    },
}

impl From<ApiFailure> for GatewayError {
    fn from(failure: ApiFailure) -> Self {
        match failure {
            ApiFailure::Network(message) => GatewayError::Transport(message),
            ApiFailure::Decode(message) => GatewayError::Decode(message),
            ApiFailure::Status { status: 401, .. } => GatewayError::Unauthorized,
            ApiFailure::Status { status, error, .. } => GatewayError::Rejected {
                status,
                message: error,
            },
        }
    }
}

impl From<ApiFailure> for AuthError {
    fn from(failure: ApiFailure) -> Self {
        match failure {
            ApiFailure::Network(message) => AuthError::Network(message),
            ApiFailure::Decode(message) => AuthError::Other(message),
            ApiFailure::Status { error, code, .. } => AuthError::from_code(&code, &error),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "ssr", allow(dead_code))]
enum Method {
    Get,
    Post,
}

/// One request against the API
#[derive(Debug)]
#[cfg_attr(feature = "ssr", allow(dead_code))]
struct ApiCall<'a> {
    method: Method,
    path: &'a str,
    query: Option<(&'a str, &'a str)>,
    body: Option<serde_json::Value>,
}

impl<'a> ApiCall<'a> {
    fn get(path: &'a str) -> Self {
        Self {
            method: Method::Get,
            path,
            query: None,
            body: None,
        }
    }

    fn post(path: &'a str) -> Self {
        Self {
            method: Method::Post,
            path,
            query: None,
            body: None,
        }
    }

    fn query(mut self, key: &'a str, value: &'a str) -> Self {
        self.query = Some((key, value));
        self
    }

    fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiFailure> {
        let value = serde_json::to_value(body).map_err(|e| ApiFailure::Decode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }
}

/// HTTP client for the `/api` routes, optionally acting as a signed-in user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiClient {
    access_token: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(access_token: Option<String>) -> Self {
        Self { access_token }
    }

    #[cfg(not(feature = "ssr"))]
    async fn call<T: DeserializeOwned>(&self, call: ApiCall<'_>) -> Result<T, ApiFailure> {
        use gloo_net::http::Request;

        let mut builder = match call.method {
            Method::Get => Request::get(call.path),
            Method::Post => Request::post(call.path),
        };
        if let Some((key, value)) = call.query {
            builder = builder.query([(key, value)]);
        }
        if let Some(token) = &self.access_token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let request = match &call.body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .json(body),
            None => builder.build(),
        }
        .map_err(|e| ApiFailure::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiFailure::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            return Err(match response.json::<ApiErrorBody>().await {
                Ok(body) => ApiFailure::Status {
                    status,
                    error: body.error,
                    code: body.code,
                },
                Err(_) => ApiFailure::Status {
                    status,
                    error: response.status_text(),
                    code: String::new(),
                },
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiFailure::Decode(e.to_string()))
    }

    // Requests are only issued from the hydrated page
    #[cfg(feature = "ssr")]
    async fn call<T: DeserializeOwned>(&self, call: ApiCall<'_>) -> Result<T, ApiFailure> {
        Err(ApiFailure::Network(format!(
            "{} is not reachable during server rendering",
            call.path
        )))
    }
}

impl WaitlistGateway for ApiClient {
    async fn insert_waitlist(&self, record: &WaitlistRecord) -> Result<(), GatewayError> {
        let call = ApiCall::post("/api/waitlist").json(record)?;
        let _: IgnoredAny = self.call(call).await?;
        Ok(())
    }

    async fn mark_profile_on_waitlist(&self, user_id: Uuid) -> Result<(), GatewayError> {
        let call = ApiCall::post("/api/profile/waitlist").json(&ProfileWaitlistRequest { user_id })?;
        let _: IgnoredAny = self.call(call).await?;
        Ok(())
    }

    async fn find_waitlist_entry(&self, email: &str) -> Result<Option<WaitlistEntry>, GatewayError> {
        let response: StatusResponse = self
            .call(ApiCall::get("/api/waitlist/status").query("email", email))
            .await?;
        Ok(response.entry)
    }
}

impl IdentityProvider for ApiClient {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        profile: &SignUpProfile,
    ) -> Result<Session, AuthError> {
        let call = ApiCall::post("/api/auth/signup").json(&SignUpRequest {
            email,
            password,
            full_name: &profile.full_name,
        })?;
        Ok(self.call(call).await?)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let call = ApiCall::post("/api/auth/login").json(&SignInRequest { email, password })?;
        Ok(self.call(call).await?)
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let client = ApiClient::with_token(Some(access_token.to_string()));
        let _: IgnoredAny = client.call(ApiCall::post("/api/auth/logout")).await?;
        Ok(())
    }

    async fn current_identity(&self, access_token: &str) -> Result<Identity, AuthError> {
        let client = ApiClient::with_token(Some(access_token.to_string()));
        Ok(client.call(ApiCall::get("/api/auth/me")).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_status_maps_to_gateway_unauthorized() {
        let failure = ApiFailure::Status {
            status: 401,
            error: "JWT expired".to_string(),
            code: "UNAUTHORIZED".to_string(),
        };
        assert_eq!(GatewayError::from(failure), GatewayError::Unauthorized);
    }

    #[test]
    fn test_rejected_status_keeps_message() {
        let failure = ApiFailure::Status {
            status: 409,
            error: "duplicate key value".to_string(),
            code: "REJECTED".to_string(),
        };
        assert_eq!(
            GatewayError::from(failure),
            GatewayError::Rejected {
                status: 409,
                message: "duplicate key value".to_string(),
            }
        );
    }

    #[test]
    fn test_auth_failure_uses_error_code() {
        let failure = ApiFailure::Status {
            status: 401,
            error: "Invalid login credentials".to_string(),
            code: AuthError::InvalidCredentials.code().to_string(),
        };
        assert_eq!(AuthError::from(failure), AuthError::InvalidCredentials);
    }

    #[test]
    fn test_network_failure_maps_to_network_errors() {
        let failure = ApiFailure::Network("offline".to_string());
        assert_eq!(
            AuthError::from(failure.clone()),
            AuthError::Network("offline".to_string())
        );
        assert_eq!(
            GatewayError::from(failure),
            GatewayError::Transport("offline".to_string())
        );
    }

    #[test]
    fn test_api_call_builder() {
        let call = ApiCall::get("/api/waitlist/status").query("email", "ada@example.com");
        assert_eq!(call.method, Method::Get);
        assert_eq!(call.query, Some(("email", "ada@example.com")));
        assert!(call.body.is_none());

        let call = ApiCall::post("/api/auth/login")
            .json(&SignInRequest {
                email: "ada@example.com",
                password: "secret1",
            })
            .unwrap();
        assert_eq!(call.body.unwrap()["email"], "ada@example.com");
    }

    #[test]
    fn test_client_carries_token() {
        assert_eq!(ApiClient::new().access_token, None);
        assert_eq!(
            ApiClient::with_token(Some("jwt".to_string())).access_token.as_deref(),
            Some("jwt")
        );
    }
}
