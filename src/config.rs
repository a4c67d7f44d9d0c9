use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Translations
    pub strict_translations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable source (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            // Server
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: match lookup("PORT") {
                Some(port) => port
                    .parse::<u16>()
                    .with_context(|| format!("PORT must be a port number, got '{}'", port))?,
                None => 8080,
            },

            // Translations - warnings only abort startup when strict
            strict_translations: match lookup("STRICT_TRANSLATIONS") {
                Some(flag) => parse_flag(&flag).with_context(|| {
                    format!("STRICT_TRANSLATIONS must be true or false, got '{}'", flag)
                })?,
                None => false,
            },
        })
    }

    /// Address to bind, e.g. "0.0.0.0:8080".
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
