use crate::utils::AppError;
use std::env;

/// Configuração lida do ambiente (e do `.env`, se existir)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub mongodb_uri: String,
    pub mongodb_database: String,
    pub mongodb_collection: String,
    /// Vazio = CORS permissivo
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port_raw = var("PORT", "8000");
        let port = port_raw
            .trim()
            .parse::<u16>()
            .map_err(|e| AppError::InvalidRequest(format!("PORT '{}': {}", port_raw, e)))?;

        let cors_allowed_origins = var("CORS_ALLOWED_ORIGINS", "")
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        Ok(Self {
            host: var("HOST", "0.0.0.0"),
            port,
            mongodb_uri: var("MONGODB_URI", "mongodb://localhost:27017"),
            mongodb_database: var("MONGODB_DATABASE", "gofkadb"),
            mongodb_collection: var("MONGODB_COLLECTION", "users"),
            cors_allowed_origins,
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
