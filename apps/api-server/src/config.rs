//! Application configuration loaded from environment variables.

#[cfg(feature = "postgres")]
use inkwell_infra::DatabaseConfig;
#[cfg(feature = "supabase")]
use inkwell_infra::SupabaseConfig;

/// Which post store the server talks to.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    #[cfg(feature = "supabase")]
    Supabase(SupabaseConfig),
    #[cfg(feature = "postgres")]
    Postgres(DatabaseConfig),
    Memory,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `var`.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(3001),
            store: StoreConfig::from_lookup(var),
        }
    }
}

impl StoreConfig {
    /// Hosted store first, then a direct database, then in-process.
    #[cfg_attr(
        not(any(feature = "supabase", feature = "postgres")),
        allow(unused_variables)
    )]
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        #[cfg(feature = "supabase")]
        {
            if let Some(config) = SupabaseConfig::from_lookup(&var) {
                return StoreConfig::Supabase(config);
            }
        }

        #[cfg(feature = "postgres")]
        {
            if let Some(url) = var("DATABASE_URL") {
                return StoreConfig::Postgres(DatabaseConfig {
                    url,
                    max_connections: var("DB_MAX_CONNECTIONS")
                        .and_then(|s| s.parse().ok())
                        .unwrap_or(10),
                    min_connections: var("DB_MIN_CONNECTIONS")
                        .and_then(|s| s.parse().ok())
                        .unwrap_or(1),
                });
            }
        }

        StoreConfig::Memory
    }

    /// Short name for logs and the health endpoint.
    pub fn kind(&self) -> &'static str {
        match self {
            #[cfg(feature = "supabase")]
            StoreConfig::Supabase(_) => "supabase",
            #[cfg(feature = "postgres")]
            StoreConfig::Postgres(_) => "postgres",
            StoreConfig::Memory => "memory",
        }
    }
}
