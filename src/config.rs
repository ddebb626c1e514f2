use std::{fmt::Display, str::FromStr};

pub const DEFAULT_PORT: u16 = 10000;
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;
pub const DEFAULT_STOCK_PASSWORD: &str = "2255";
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Settings {
    pub port: u16,

    /// Without a database url the service keeps its data in memory.
    pub database_url: Option<String>,
    pub database_max_connections: u32,

    pub stock_password: String,
    pub allowed_origins: Vec<String>,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| dotenvy::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let stock_password = var("STOCK_PASSWORD").unwrap_or_else(|| {
            tracing::warn!("STOCK_PASSWORD not set, using the default password");
            DEFAULT_STOCK_PASSWORD.to_owned()
        });

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_owned());

        Ok(Self {
            port: parse_or(&var, "PORT", DEFAULT_PORT)?,
            database_url: var("DATABASE_URL").filter(|url| !url.trim().is_empty()),
            database_max_connections: parse_or(
                &var,
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_DATABASE_MAX_CONNECTIONS,
            )?,
            stock_password,
            allowed_origins: parse_origins(&allowed_origins),
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            database_max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            stock_password: DEFAULT_STOCK_PASSWORD.to_owned(),
            allowed_origins: parse_origins(DEFAULT_ALLOWED_ORIGINS),
        }
    }
}

fn parse_or<T>(var: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match var(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|err| anyhow::anyhow!("invalid {key} value {value:?}: {err}")),
        None => {
            tracing::info!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}

/// Splits a comma separated origin list. Browsers send origins without a trailing slash.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/'))
        .filter(|origin| !origin.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn settings_from(vars: &[(&str, &str)]) -> anyhow::Result<Settings> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        Settings::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings_from(&[]).unwrap();

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.port, 10000);
        assert_eq!(settings.stock_password, "2255");
        assert_eq!(settings.allowed_origins, vec!["http://localhost:3000"]);
        assert!(settings.database_url.is_none());
    }

    #[test]
    fn test_overrides() {
        let settings = settings_from(&[
            ("PORT", "8080"),
            ("STOCK_PASSWORD", "secret"),
            ("DATABASE_URL", "postgres://localhost/blades"),
            ("ALLOWED_ORIGINS", "https://blades.example.com/, http://localhost:3000,,"),
        ])
        .unwrap();

        assert_eq!(settings.port, 8080);
        assert_eq!(settings.stock_password, "secret");
        assert_eq!(
            settings.database_url.as_deref(),
            Some("postgres://localhost/blades")
        );
        assert_eq!(
            settings.allowed_origins,
            vec!["https://blades.example.com", "http://localhost:3000"]
        );
    }

    #[test]
    fn test_invalid_port() {
        let err = settings_from(&[("PORT", "ten thousand")]).unwrap_err();

        assert!(err.to_string().contains("PORT"));
    }
}
