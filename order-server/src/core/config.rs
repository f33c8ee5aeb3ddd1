use std::path::PathBuf;

/// Server configuration.
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/order-server | Work directory (database, attachments) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | CLIENT_ID | 1 | Tenant this node serves |
/// | ORG_ID | 1 | Organization within the tenant |
/// | PAYMENT_GATEWAY_URL | (unset) | External payment collaborator endpoint URL |
/// | ENVIRONMENT | development | development \| staging \| production |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/orders HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Work directory for database files and stored attachments
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Tenant scope applied to product and doc-type lookups
    pub client_id: i64,
    /// Organization scope applied to business-partner lookups
    pub org_id: i64,
    /// Payment gateway base URL. Payments fail when unset.
    pub payment_gateway_url: Option<String>,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/order-server".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            client_id: std::env::var("CLIENT_ID")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
            org_id: std::env::var("ORG_ID")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
            payment_gateway_url: std::env::var("PAYMENT_GATEWAY_URL").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override work dir and port, keeping everything else from the
    /// environment. Used by tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Directory attachments are written to.
    pub fn attachments_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("attachments")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
