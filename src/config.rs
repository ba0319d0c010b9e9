use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: env::var("BUDGETEER_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("BUDGETEER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(7272),
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
