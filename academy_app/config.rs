use dotenvy::dotenv;
use std::env;

/// Origins of the hosted web client, always allowed on top of localhost.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 4] = [
    "https://academy-of-elements.vercel.app",
    "https://academy-of-elements.onrender.com",
    "http://localhost:8000",
    "http://127.0.0.1:8000",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    /// Directory holding `index.html` and the client assets.
    pub web_dir: String,
    pub web_app_url: String,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let http_port = match env::var("ACADEMY_HTTP_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(8000),
            Err(_) => 8000,
        };

        let web_dir = match env::var("ACADEMY_WEB_DIR") {
            Ok(val) if !val.trim().is_empty() => val,
            _ => "web".to_string(),
        };

        let web_app_url = match env::var("ACADEMY_WEB_APP_URL") {
            Ok(val) if !val.trim().is_empty() => val,
            _ => "http://localhost:8000".to_string(),
        };

        let allowed_origins = match env::var("ACADEMY_ALLOWED_ORIGINS") {
            Ok(val) => parse_origins(&val),
            Err(_) => Vec::new(),
        };
        let allowed_origins = if allowed_origins.is_empty() {
            DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect()
        } else {
            allowed_origins
        };

        Self {
            http_port,
            web_dir,
            web_app_url,
            allowed_origins,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_trims_and_skips_empty() {
        assert_eq!(
            parse_origins(" https://a.example , ,http://b.example"),
            vec!["https://a.example".to_string(), "http://b.example".to_string()]
        );
        assert!(parse_origins(" , ").is_empty());
    }
}
