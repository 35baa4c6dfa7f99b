//! Hosted backend project settings.
//!
//! Every value can be overridden through an `FLIST_*` environment variable;
//! a missing or blank variable keeps the built-in default.

use serde::{Deserialize, Serialize};

const DEFAULT_AUTH_DOMAIN: &str = "f-list-455a9.firebaseapp.com";
const DEFAULT_PROJECT_ID: &str = "f-list-455a9";
const DEFAULT_STORAGE_BUCKET: &str = "f-list-455a9.firebasestorage.app";
const DEFAULT_MESSAGING_SENDER_ID: &str = "302817571953";
const DEFAULT_APP_ID: &str = "1:302817571953:web:32a540938b37b6d93857d0";
const DEFAULT_MEASUREMENT_ID: &str = "G-R6WN0XXB95";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendConfig {
    /// No built-in default; empty means only the local backend is usable
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    pub measurement_id: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl BackendConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            api_key: var("FLIST_API_KEY", ""),
            auth_domain: var("FLIST_AUTH_DOMAIN", DEFAULT_AUTH_DOMAIN),
            project_id: var("FLIST_PROJECT_ID", DEFAULT_PROJECT_ID),
            storage_bucket: var("FLIST_STORAGE_BUCKET", DEFAULT_STORAGE_BUCKET),
            messaging_sender_id: var("FLIST_MESSAGING_SENDER_ID", DEFAULT_MESSAGING_SENDER_ID),
            app_id: var("FLIST_APP_ID", DEFAULT_APP_ID),
            measurement_id: var("FLIST_MEASUREMENT_ID", DEFAULT_MEASUREMENT_ID),
        }
    }

    /// True when credentials for the hosted backend are present
    pub fn has_hosted_credentials(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = BackendConfig::from_lookup(|_| None);
        assert_eq!(config.project_id, "f-list-455a9");
        assert_eq!(config.auth_domain, "f-list-455a9.firebaseapp.com");
        assert!(!config.has_hosted_credentials());
        assert_eq!(config, BackendConfig::default());
    }

    #[test]
    fn test_blank_api_key_stays_empty() {
        let config = BackendConfig::from_lookup(|k| match k {
            "FLIST_API_KEY" => Some("  ".to_string()),
            _ => None,
        });
        assert!(config.api_key.is_empty());
        assert!(!config.has_hosted_credentials());
        assert_eq!(config.measurement_id, "G-R6WN0XXB95");
    }

    #[test]
    fn test_overrides_and_blank_fallback() {
        let vars: HashMap<&str, &str> = [
            ("FLIST_API_KEY", "key-123"),
            ("FLIST_PROJECT_ID", "closet-dev"),
            ("FLIST_APP_ID", "   "),
        ]
        .into_iter()
        .collect();

        let config = BackendConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.api_key, "key-123");
        assert_eq!(config.project_id, "closet-dev");
        assert_eq!(config.app_id, "1:302817571953:web:32a540938b37b6d93857d0");
        assert!(config.has_hosted_credentials());
    }
}
