//! Application configuration.
//!
//! Server settings are loaded with `Config::from_env()` after calling
//! `dotenvy::dotenv()`. Page behaviour lives in [`LandingConfig`], which is
//! fixed at build time so the server render and the hydrated page agree.

use serde::{Deserialize, Serialize};

use super::form::FormVariant;

/// Missing or malformed configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    Missing(&'static str),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Project URL of the hosted backend
    /// Example: https://abcd.supabase.co
    pub supabase_url: Option<String>,

    /// Public (anon) API key sent with every backend request
    pub supabase_anon_key: Option<String>,
}

/// Validated backend settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseSettings {
    pub url: String,
    pub anon_key: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Self {
        Self {
            supabase_url: std::env::var("SUPABASE_URL").ok(),
            supabase_anon_key: std::env::var("SUPABASE_ANON_KEY").ok(),
        }
    }

    /// Check if the backend is configured
    pub fn has_supabase(&self) -> bool {
        self.supabase_url.is_some() && self.supabase_anon_key.is_some()
    }

    /// Backend settings, with a trailing slash trimmed from the URL
    pub fn supabase(&self) -> Result<SupabaseSettings, ConfigError> {
        let url = self
            .supabase_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .ok_or(ConfigError::Missing("SUPABASE_URL"))?;
        let anon_key = self
            .supabase_anon_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::Missing("SUPABASE_ANON_KEY"))?;

        Ok(SupabaseSettings {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }
}

/// Which landing layout is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandingVariant {
    /// Copy and buttons change once the visitor is on the waitlist
    #[default]
    WithStatus,
    /// Always shows the join flow
    Basic,
}

impl LandingVariant {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "with_status" => Some(LandingVariant::WithStatus),
            "basic" => Some(LandingVariant::Basic),
            _ => None,
        }
    }
}

fn parse_form_variant(value: &str) -> Option<FormVariant> {
    match value {
        "staged" => Some(FormVariant::Staged),
        "compact" => Some(FormVariant::Compact),
        "typed" => Some(FormVariant::Typed),
        _ => None,
    }
}

pub const DEFAULT_SUCCESS_REDIRECT: &str = "https://example.com/success";
pub const DEFAULT_MEMBER_REDIRECT: &str = "https://example.com/mvp";

/// Page behaviour shared by the server render and the browser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingConfig {
    pub variant: LandingVariant,
    pub form: FormVariant,
    /// Where the browser goes after joining the waitlist
    pub success_redirect: String,
    /// Where "Try out MVP" leads for existing members
    pub member_redirect: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            variant: LandingVariant::default(),
            form: FormVariant::default(),
            success_redirect: DEFAULT_SUCCESS_REDIRECT.to_string(),
            member_redirect: DEFAULT_MEMBER_REDIRECT.to_string(),
        }
    }
}

impl LandingConfig {
    /// Build from optional overrides; unknown values fall back to defaults
    pub fn from_overrides(
        variant: Option<&str>,
        form: Option<&str>,
        success_redirect: Option<&str>,
        member_redirect: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            variant: variant
                .and_then(LandingVariant::parse)
                .unwrap_or(defaults.variant),
            form: form.and_then(parse_form_variant).unwrap_or(defaults.form),
            success_redirect: success_redirect
                .map(str::to_string)
                .unwrap_or(defaults.success_redirect),
            member_redirect: member_redirect
                .map(str::to_string)
                .unwrap_or(defaults.member_redirect),
        }
    }

    /// Read `AXIOM_*` variables captured at compile time
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("AXIOM_LANDING_VARIANT"),
            option_env!("AXIOM_FORM_VARIANT"),
            option_env!("AXIOM_SUCCESS_REDIRECT_URL"),
            option_env!("AXIOM_MEMBER_REDIRECT_URL"),
        )
    }

    pub fn tracks_status(&self) -> bool {
        self.variant == LandingVariant::WithStatus
    }

    /// Where a "join" click leads
    pub fn route_join(&self, on_waitlist: bool, signed_in: bool) -> JoinRoute {
        if self.tracks_status() && on_waitlist {
            JoinRoute::Redirect(self.member_redirect.clone())
        } else if self.form.requires_identity() && !signed_in {
            JoinRoute::SignIn
        } else {
            JoinRoute::OpenForm
        }
    }
}

/// Outcome of a "join" click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinRoute {
    /// Existing member, leave for the product
    Redirect(String),
    /// Account needed first
    SignIn,
    OpenForm,
}
