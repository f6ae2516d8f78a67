use serde::{Deserialize, Serialize};

/// Runtime settings for the dashboard client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Base URL of the REST API, without a trailing slash
    pub api_base_url: String,
    /// Rows per page in list screens
    pub page_size: u32,
    /// Key under which the access token is persisted in the browser
    pub token_storage_key: String,
    /// Scheme for the `Authorization` header
    pub auth_scheme: String,
    pub enable_debug_logging: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000/api".to_string(),
            page_size: 10,
            token_storage_key: "access_token".to_string(),
            auth_scheme: "Bearer".to_string(),
            enable_debug_logging: false,
        }
    }
}

impl DashboardConfig {
    /// Defaults overridden by `DASHBOARD_API_URL` / `DASHBOARD_DEBUG` at build time
    pub fn from_build_env() -> Self {
        Self::with_overrides(option_env!("DASHBOARD_API_URL"), option_env!("DASHBOARD_DEBUG"))
    }

    fn with_overrides(api_url: Option<&str>, debug: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(flag) = debug {
            config.enable_debug_logging = matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on");
        }

        config
    }

    /// Join a resource path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.token_storage_key, "access_token");
        assert!(!config.enable_debug_logging);
    }

    #[test]
    fn test_overrides() {
        let config = DashboardConfig::with_overrides(Some("https://erp.example.com/api/"), Some("TRUE"));
        assert_eq!(config.api_base_url, "https://erp.example.com/api");
        assert!(config.enable_debug_logging);

        let config = DashboardConfig::with_overrides(Some("  "), Some("0"));
        assert_eq!(config.api_base_url, DashboardConfig::default().api_base_url);
        assert!(!config.enable_debug_logging);
    }

    #[test]
    fn test_endpoint_joins_with_single_slash() {
        let config = DashboardConfig::default();
        assert_eq!(config.endpoint("/workers/"), "http://localhost:8000/api/workers/");
        assert_eq!(config.endpoint("workers/?page=2"), "http://localhost:8000/api/workers/?page=2");
    }
}
