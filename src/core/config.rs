use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub gemini_api_url: String,
    pub gemini_model: String,
    pub gemini_api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let gemini_api_url = env::var("MEDISCAN_GEMINI_API_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string());
        let gemini_model =
            env::var("MEDISCAN_GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.5-flash".to_string());
        // There is deliberately no fallback value for the key. Requests are
        // rejected with a configuration error until it is set.
        let gemini_api_key = env::var("GEMINI_API_KEY").ok();

        Self {
            gemini_api_url,
            gemini_model,
            gemini_api_key,
        }
    }
}
