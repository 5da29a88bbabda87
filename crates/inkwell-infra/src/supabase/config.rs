use std::time::Duration;

/// Hosted store connection settings.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL (e.g., https://abcd.supabase.co)
    pub url: String,
    /// API key, sent both as `apikey` and as a bearer token
    pub key: String,
    /// Table holding the posts
    pub table: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl SupabaseConfig {
    pub fn new(url: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            key: key.into(),
            table: "posts".to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Returns `None` unless both `SUPABASE_URL` and `SUPABASE_KEY` are set.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading variables through `var`.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let url = var("SUPABASE_URL")?;
        let key = var("SUPABASE_KEY")?;

        let mut config = Self::new(url, key);
        if let Some(table) = var("SUPABASE_TABLE") {
            config.table = table;
        }
        if let Some(secs) = var("SUPABASE_TIMEOUT_SECS").and_then(|s| s.parse().ok()) {
            config.timeout = Duration::from_secs(secs);
        }
        Some(config)
    }

    /// REST endpoint of the posts table.
    pub fn endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), self.table)
    }
}
