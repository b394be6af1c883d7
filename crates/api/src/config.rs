use std::path::PathBuf;

use campus_core::media::DEFAULT_MAX_UPLOAD_BYTES;
use campus_core::seo::SiteSeo;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// Every field except the JWT secret has a default suitable for local
/// development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long in-flight requests may drain after a shutdown signal.
    pub shutdown_timeout_secs: u64,
    pub jwt: JwtConfig,
    pub media: MediaConfig,
    /// Site-wide values used when generating SEO metadata.
    pub site: SiteSeo,
}

/// Where uploaded files live and how they are addressed publicly.
#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Directory on disk (default: `./media`).
    pub root: PathBuf,
    /// Public URL prefix (default: `/media`).
    pub url: String,
    /// Upload size limit in bytes (default: 10 MiB).
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `3000`                     |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                       |
    /// | `MEDIA_ROOT`            | `./media`                  |
    /// | `MEDIA_URL`             | `/media`                   |
    /// | `MAX_UPLOAD_BYTES`      | `10485760`                 |
    /// | `SITE_NAME`             | `Campus`                   |
    /// | `SITE_BASE_URL`         | `http://localhost:3000`    |
    /// | `SITE_LOCALE`           | `en_US`                    |
    /// | `SITE_TWITTER_HANDLE`   | unset                      |
    /// | `SITE_DEFAULT_IMAGE`    | unset                      |
    ///
    /// JWT settings come from [`JwtConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            jwt: JwtConfig::from_env(),
            media: MediaConfig::from_env(),
            site: site_from_env(),
        }
    }
}

impl MediaConfig {
    pub fn from_env() -> Self {
        let root = std::env::var("MEDIA_ROOT").unwrap_or_else(|_| "./media".into());
        let url = std::env::var("MEDIA_URL").unwrap_or_else(|_| "/media".into());
        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .map(|v| v.parse().expect("MAX_UPLOAD_BYTES must be a valid usize"))
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        Self {
            root: PathBuf::from(root),
            url: normalize_url_prefix(&url),
            max_upload_bytes,
        }
    }
}

fn site_from_env() -> SiteSeo {
    let optional = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

    SiteSeo {
        site_name: std::env::var("SITE_NAME").unwrap_or_else(|_| "Campus".into()),
        base_url: std::env::var("SITE_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .trim_end_matches('/')
            .to_string(),
        locale: std::env::var("SITE_LOCALE").unwrap_or_else(|_| "en_US".into()),
        twitter_handle: optional("SITE_TWITTER_HANDLE"),
        default_image: optional("SITE_DEFAULT_IMAGE"),
    }
}

/// `media/` and `/media/` both become `/media`.
fn normalize_url_prefix(url: &str) -> String {
    let trimmed = url.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/media".to_string()
    } else if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_prefix_gets_one_leading_slash() {
        assert_eq!(normalize_url_prefix("media/"), "/media");
        assert_eq!(normalize_url_prefix("/uploads/files/"), "/uploads/files");
        assert_eq!(normalize_url_prefix(""), "/media");
    }

    #[test]
    fn absolute_prefix_is_kept() {
        assert_eq!(
            normalize_url_prefix("https://cdn.example.edu/media/"),
            "https://cdn.example.edu/media"
        );
    }
}
