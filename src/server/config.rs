use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_API_HOST: &str = "0.0.0.0";
const DEFAULT_API_PORT: u16 = 8000;

pub struct Config {
    pub database_url: String,

    pub api_host: String,
    pub api_port: u16,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand so values from `.env` are visible.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// `DATABASE_URL` takes precedence; when it is unset a PostgreSQL URL is composed
    /// from `DB_USER`, `DB_PASSWORD`, `DB_HOST`, `DB_PORT` and `DB_NAME`, all of which
    /// are then required.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - A required variable is unset
    /// - `Err(AppError::ConfigErr(InvalidEnvVar))` - `API_PORT` is not a valid port
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let database_url = match lookup("DATABASE_URL") {
            Some(url) => url,
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                require("DB_USER")?,
                require("DB_PASSWORD")?,
                require("DB_HOST")?,
                require("DB_PORT")?,
                require("DB_NAME")?,
            ),
        };

        let api_host = lookup("API_HOST").unwrap_or_else(|| DEFAULT_API_HOST.to_string());
        let api_port = match lookup("API_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "API_PORT".to_string(),
                    value,
                })?,
            None => DEFAULT_API_PORT,
        };

        Ok(Self {
            database_url,
            api_host,
            api_port,
        })
    }

    /// Address the HTTP listener binds to, in `host:port` form.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}
