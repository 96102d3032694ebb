use std::env;

#[derive(Clone)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("WAKEHUB_API_URL").unwrap_or_else(|_| "http://localhost:3015/api".to_string()),
            request_timeout_secs: env::var("WAKEHUB_TIMEOUT_SECS").unwrap_or_else(|_| "30".to_string()).parse().expect("WAKEHUB_TIMEOUT_SECS must be a number"),
        }
    }
}
