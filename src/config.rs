use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Path to the JSON users file feeding the credential store.
    pub users_path: String,
    /// Raw signing-key material. Required outside dev mode.
    pub signing_key: Option<String>,
    /// Token lifetime. Short by policy; there is no revocation list.
    pub token_ttl_secs: u64,
    pub dev_mode: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let dev_mode = env::var("TIERGATE_ENV")
            .map(|v| v == "dev" || v == "development")
            .unwrap_or(false);

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5001);

        let token_ttl_secs: u64 = env::var("TOKEN_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        Self {
            host,
            port,
            users_path: env::var("USERS_PATH").unwrap_or_else(|_| "users.json".to_string()),
            signing_key: env::var("SIGNING_KEY").ok().filter(|k| !k.is_empty()),
            token_ttl_secs,
            dev_mode,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
