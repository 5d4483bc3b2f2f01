//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Mock store storage keys (one JSON file per key)
pub const PROJECTS_KEY: &str = "portfolio_projects";
pub const PROFILE_KEY: &str = "portfolio_profile";
pub const AUTH_KEY: &str = "portfolio_auth";

// Demo credentials accepted by the mock authenticator
pub const MOCK_EMAIL: &str = "admin@portfolio.com";
pub const MOCK_PASSWORD: &str = "admin123";
pub const MOCK_ACCESS_TOKEN: &str = "mock-token";
pub const AUTH_MARKER: &str = "authenticated";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

// Session cookie
pub const SESSION_COOKIE: &str = "sb-access-token";
pub const SESSION_MAX_AGE_SECS: u64 = 3600;

// Route prefixes
pub const ADMIN_PREFIX: &str = "/admin";
pub const LOGIN_PATH: &str = "/login";

// Remote object storage
pub const DEFAULT_BUCKET: &str = "portfolio-assets";
pub const PROJECT_OBJECT_PREFIX: &str = "projects";
pub const PROFILE_OBJECT_PREFIX: &str = "profile";
