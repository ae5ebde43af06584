//! Centralized configuration (environment variables + defaults).

/// Socket address the API server binds to.
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string())
}

/// Comma-separated CORS origin allow-list (frontend URLs).
pub fn allowed_origins() -> Vec<String> {
    let raw = std::env::var("CORS_ALLOWED_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Optional fixed seed for the chatbot's template RNG. Unset means seed
/// from entropy.
pub fn chat_rng_seed() -> Option<u64> {
    std::env::var("CHAT_RNG_SEED")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
}
