//! Hosted backend client
//!
//! Talks to the PostgREST (`/rest/v1`) and GoTrue (`/auth/v1`) endpoints of
//! the Supabase project. Runs on the server only, so the API key never ships
//! to the browser.

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use uuid::Uuid;

use super::config::SupabaseSettings;
use super::gateway::{GatewayError, WaitlistGateway};
use super::identity::{AuthError, Identity, IdentityProvider, Session, SignUpProfile};
use super::record::{ProfileWaitlistPatch, WaitlistEntry, WaitlistRecord};

pub const WAITLIST_TABLE: &str = "waitlist";
pub const PROFILES_TABLE: &str = "profiles";

/// PostgREST equality filter as a query pair
pub fn eq_filter(column: &str, value: &str) -> (String, String) {
    (column.to_string(), format!("eq.{}", value))
}

#[derive(Debug, Deserialize)]
struct GoTrueUser {
    id: Uuid,
    email: Option<String>,
}

/// Session or bare user, depending on whether confirmation is pending
#[derive(Debug, Deserialize)]
struct GoTrueResponse {
    access_token: Option<String>,
    user: Option<GoTrueUser>,
    id: Option<Uuid>,
    email: Option<String>,
}

impl GoTrueResponse {
    fn into_session(self, fallback_email: &str) -> Result<Session, AuthError> {
        let (id, email) = match self.user {
            Some(user) => (user.id, user.email),
            None => (
                self.id
                    .ok_or_else(|| AuthError::Other("Malformed auth response".to_string()))?,
                self.email,
            ),
        };

        Ok(Session {
            identity: Identity {
                id,
                email: email.unwrap_or_else(|| fallback_email.to_string()),
            },
            access_token: self.access_token,
        })
    }
}

/// Pull the human readable message out of a backend error body
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["msg", "error_description", "message", "error"]
                .iter()
                .find_map(|key| value.get(key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .unwrap_or_else(|| body.to_string())
}

/// HTTP client for one Supabase project
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    settings: SupabaseSettings,
    user_token: Option<String>,
}

impl SupabaseClient {
    pub fn new(settings: SupabaseSettings) -> Self {
        Self {
            http: reqwest::Client::new(),
            settings,
            user_token: None,
        }
    }

    /// Same client acting on behalf of a signed-in user
    pub fn with_user_token(&self, token: &str) -> Self {
        Self {
            http: self.http.clone(),
            settings: self.settings.clone(),
            user_token: Some(token.to_string()),
        }
    }

    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.settings.url, table)
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.settings.url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self
            .user_token
            .as_deref()
            .unwrap_or(&self.settings.anon_key);
        request
            .header("apikey", &self.settings.anon_key)
            .header("Authorization", format!("Bearer {}", bearer))
    }

    async fn send_rest(&self, request: RequestBuilder) -> Result<Response, GatewayError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!("Supabase REST error {}: {}", status, body);
        Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GatewayError::Unauthorized,
            _ => GatewayError::Rejected {
                status: status.as_u16(),
                message: error_message(&body),
            },
        })
    }

    async fn send_auth<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AuthError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!("Supabase auth error {}: {}", status, body);
            return Err(AuthError::from_backend_message(&error_message(&body)));
        }

        serde_json::from_str(&body).map_err(|e| AuthError::Other(e.to_string()))
    }

    pub async fn insert_waitlist(&self, record: &WaitlistRecord) -> Result<(), GatewayError> {
        let request = self
            .http
            .post(self.rest_url(WAITLIST_TABLE))
            .header("Prefer", "return=minimal")
            .json(record);
        self.send_rest(request).await?;
        Ok(())
    }

    pub async fn mark_profile_on_waitlist(&self, user_id: Uuid) -> Result<(), GatewayError> {
        let request = self
            .http
            .patch(self.rest_url(PROFILES_TABLE))
            .query(&[eq_filter("user_id", &user_id.to_string())])
            .header("Prefer", "return=minimal")
            .json(&ProfileWaitlistPatch::default());
        self.send_rest(request).await?;
        Ok(())
    }

    pub async fn find_waitlist_entry(
        &self,
        email: &str,
    ) -> Result<Option<WaitlistEntry>, GatewayError> {
        let request = self
            .http
            .get(self.rest_url(WAITLIST_TABLE))
            .query(&[
                ("select".to_string(), "id".to_string()),
                eq_filter("email", email),
                ("limit".to_string(), "1".to_string()),
            ]);
        let response = self.send_rest(request).await?;
        let rows: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))?;
        Ok(WaitlistEntry::first_of(rows))
    }

    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        profile: &SignUpProfile,
    ) -> Result<Session, AuthError> {
        let request = self.http.post(self.auth_url("signup")).json(&json!({
            "email": email,
            "password": password,
            "data": profile,
        }));
        let response: GoTrueResponse = self.send_auth(request).await?;
        response.into_session(email)
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let request = self
            .http
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .json(&json!({ "email": email, "password": password }));
        let response: GoTrueResponse = self.send_auth(request).await?;
        response.into_session(email)
    }

    pub async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let response = self
            .with_user_token(access_token)
            .authorize(self.http.post(self.auth_url("logout")))
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(AuthError::from_backend_message(&error_message(&body)))
        }
    }

    pub async fn current_identity(&self, access_token: &str) -> Result<Identity, AuthError> {
        let user: GoTrueUser = self
            .with_user_token(access_token)
            .send_auth(self.http.get(self.auth_url("user")))
            .await?;
        Ok(Identity {
            id: user.id,
            email: user.email.unwrap_or_default(),
        })
    }
}

impl WaitlistGateway for SupabaseClient {
    async fn insert_waitlist(&self, record: &WaitlistRecord) -> Result<(), GatewayError> {
        SupabaseClient::insert_waitlist(self, record).await
    }

    async fn mark_profile_on_waitlist(&self, user_id: Uuid) -> Result<(), GatewayError> {
        SupabaseClient::mark_profile_on_waitlist(self, user_id).await
    }

    async fn find_waitlist_entry(&self, email: &str) -> Result<Option<WaitlistEntry>, GatewayError> {
        SupabaseClient::find_waitlist_entry(self, email).await
    }
}

impl IdentityProvider for SupabaseClient {
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        profile: &SignUpProfile,
    ) -> Result<Session, AuthError> {
        SupabaseClient::sign_up(self, email, password, profile).await
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        SupabaseClient::sign_in(self, email, password).await
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        SupabaseClient::sign_out(self, access_token).await
    }

    async fn current_identity(&self, access_token: &str) -> Result<Identity, AuthError> {
        SupabaseClient::current_identity(self, access_token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SupabaseClient {
        SupabaseClient::new(SupabaseSettings {
            url: "https://abcd.supabase.co".to_string(),
            anon_key: "anon".to_string(),
        })
    }

    #[test]
    fn test_urls() {
        let client = client();
        assert_eq!(
            client.rest_url(WAITLIST_TABLE),
            "https://abcd.supabase.co/rest/v1/waitlist"
        );
        assert_eq!(client.auth_url("signup"), "https://abcd.supabase.co/auth/v1/signup");
    }

    #[test]
    fn test_eq_filter() {
        assert_eq!(
            eq_filter("email", "user@example.com"),
            ("email".to_string(), "eq.user@example.com".to_string())
        );
    }

    #[test]
    fn test_error_message_prefers_known_keys() {
        assert_eq!(
            error_message(r#"{"code":400,"msg":"User already registered"}"#),
            "User already registered"
        );
        assert_eq!(
            error_message(r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#),
            "Invalid login credentials"
        );
        assert_eq!(error_message("plain failure"), "plain failure");
    }

    #[test]
    fn test_signup_pending_confirmation_has_no_token() {
        let id = Uuid::new_v4();
        let body = format!(r#"{{"id":"{}","email":"ada@example.com"}}"#, id);
        let response: GoTrueResponse = serde_json::from_str(&body).unwrap();
        let session = response.into_session("ada@example.com").unwrap();

        assert_eq!(session.identity.id, id);
        assert!(!session.is_active());
    }

    #[test]
    fn test_password_grant_response() {
        let id = Uuid::new_v4();
        let body = format!(
            r#"{{"access_token":"jwt","token_type":"bearer","user":{{"id":"{}","email":"ada@example.com"}}}}"#,
            id
        );
        let response: GoTrueResponse = serde_json::from_str(&body).unwrap();
        let session = response.into_session("ignored@example.com").unwrap();

        assert_eq!(session.access_token.as_deref(), Some("jwt"));
        assert_eq!(session.identity.email, "ada@example.com");
    }

    #[test]
    fn test_user_token_overrides_anon_bearer() {
        let scoped = client().with_user_token("jwt");
        assert_eq!(scoped.user_token.as_deref(), Some("jwt"));
        assert_eq!(client().user_token, None);
    }
}
