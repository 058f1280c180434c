use std::env;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: String,
}

impl Config {
    /// Builds the configuration from environment variables, falling back
    /// to local-development defaults.
    pub fn from_env() -> Self {
        let host = env::var("BIND_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("BIND_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let database_path =
            env::var("DATABASE_PATH").unwrap_or_else(|_| "campaigns.sqlite".to_string());

        Config {
            host,
            port,
            database_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_environment() {
        let config = Config::from_env();
        assert!(!config.host.is_empty());
        assert!(config.port > 0);
        assert!(config.database_path.ends_with(".sqlite"));
    }
}
