//! Auth Configuration

/// Auth application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    /// Identity endpoint: exchange credentials for a token
    pub sign_in_path: String,
    /// Identity endpoint: profile for the current bearer token
    pub profile_path: String,
    /// Identity endpoint: revoke the current bearer token
    pub sign_out_path: String,
    /// Where guards send unauthenticated visitors
    pub login_route: &'static str,
    /// Where guards send signed-in users away from guest-only pages
    pub home_route: &'static str,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            sign_in_path: "auth/login".to_string(),
            profile_path: "auth/me".to_string(),
            sign_out_path: "auth/logout".to_string(),
            login_route: "/login",
            home_route: "/dashboard",
        }
    }
}
