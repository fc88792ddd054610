use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}: expected a number between 0 and 65535")]
    InvalidPort(String),

    #[error("invalid SEED_DEMO_PRODUCTS {0:?}: expected true or false")]
    InvalidSeedFlag(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub seed_demo_products: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_demo_products: false,
        }
    }
}

impl Config {
    /// Reads `HOST`, `PORT` and `SEED_DEMO_PRODUCTS`, after loading a `.env`
    /// file when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(raw) => {
                let parsed = raw.trim().parse::<u16>();
                parsed.map_err(|_| ConfigError::InvalidPort(raw))?
            }
            None => defaults.port,
        };
        let seed_demo_products = match lookup("SEED_DEMO_PRODUCTS") {
            Some(raw) => match raw.trim() {
                "true" | "1" => true,
                "false" | "0" | "" => false,
                _ => return Err(ConfigError::InvalidSeedFlag(raw.clone())),
            },
            None => defaults.seed_demo_products,
        };

        Ok(Self {
            host,
            port,
            seed_demo_products,
        })
    }
}
