use std::env;

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Admin API key; requests to admin routes must present this as a bearer token
    pub admin_api_key: String,
    /// Transactional mail API endpoint (e.g. https://api.mailjet.com/v3.1/send)
    pub mail_api_url: Option<String>,
    /// Mail API key pair for basic auth
    pub mail_api_key: Option<String>,
    pub mail_api_secret: Option<String>,
    /// Sender address for outbound notifications
    pub mail_from: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            admin_api_key: env::var("ADMIN_API_KEY")
                .unwrap_or_else(|_| "dev-admin-key-not-for-production".to_string()),
            mail_api_url: env::var("MAIL_API_URL").ok(),
            mail_api_key: env::var("MAIL_API_KEY").ok(),
            mail_api_secret: env::var("MAIL_API_SECRET").ok(),
            mail_from: env::var("MAIL_FROM")
                .unwrap_or_else(|_| "noreply@tourgael.test".to_string()),
        }
    }

    /// Check if outbound mail is configured
    pub fn mail_enabled(&self) -> bool {
        self.mail_api_url.is_some() && self.mail_api_key.is_some() && self.mail_api_secret.is_some()
    }
}
