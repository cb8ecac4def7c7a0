use std::env;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

fn env_u16(key: &str, default: u16) -> u16 {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn env_u32(key: &str, default: u32) -> u32 {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
    pub upload: UploadConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            llm: LlmConfig::from_env(),
            upload: UploadConfig::from_env(),
        }
    }

    /// Print a redacted summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  server:  host={}, port={}", self.server.host, self.server.port);
        tracing::info!(
            "  llm:     provider={}, configured={}",
            self.llm.provider,
            self.llm.is_configured()
        );
        tracing::info!("  upload:  max_upload_mb={}", self.upload.max_upload_mb);
    }
}

// ── Server ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_u16("PORT", 3001),
            cors_origin: env_or("CORS_ORIGIN", "*"),
        }
    }
}

// ── LLM (Gemini / Anthropic) ─────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// "gemini", "anthropic"
    pub provider: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub anthropic_api_key: Option<String>,
    pub anthropic_model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl LlmConfig {
    fn from_env() -> Self {
        Self {
            provider: env_or("LLM_PROVIDER", "gemini"),
            gemini_api_key: env_opt("GEMINI_API_KEY"),
            gemini_model: env_or("GEMINI_MODEL", "gemini-1.5-flash"),
            anthropic_api_key: env_opt("ANTHROPIC_API_KEY"),
            anthropic_model: env_or("ANTHROPIC_MODEL", "claude-sonnet-4-5-20250929"),
            temperature: env_or("LLM_TEMPERATURE", "0.1").parse().unwrap_or(0.1),
            max_tokens: env_u32("LLM_MAX_TOKENS", 4096),
        }
    }

    pub fn is_configured(&self) -> bool {
        match self.provider.as_str() {
            "gemini" => self.gemini_api_key.is_some(),
            "anthropic" | "claude" => self.anthropic_api_key.is_some(),
            _ => false,
        }
    }
}

// ── Upload limits ─────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    pub max_upload_mb: u32,
}

impl UploadConfig {
    fn from_env() -> Self {
        Self {
            max_upload_mb: env_u32("MAX_UPLOAD_MB", 25),
        }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb as usize * 1024 * 1024
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gemini_requires_api_key() {
        let mut llm = LlmConfig {
            provider: "gemini".into(),
            gemini_api_key: None,
            gemini_model: "gemini-1.5-flash".into(),
            anthropic_api_key: None,
            anthropic_model: "claude-sonnet-4-5-20250929".into(),
            temperature: 0.1,
            max_tokens: 4096,
        };
        assert!(!llm.is_configured());
        llm.gemini_api_key = Some("key".into());
        assert!(llm.is_configured());
    }

    #[test]
    fn unknown_provider_is_never_configured() {
        let llm = LlmConfig {
            provider: "mystery".into(),
            gemini_api_key: Some("key".into()),
            gemini_model: String::new(),
            anthropic_api_key: Some("key".into()),
            anthropic_model: String::new(),
            temperature: 0.1,
            max_tokens: 4096,
        };
        assert!(!llm.is_configured());
    }

    #[test]
    fn upload_limit_converts_to_bytes() {
        let upload = UploadConfig { max_upload_mb: 25 };
        assert_eq!(upload.max_upload_bytes(), 25 * 1024 * 1024);
    }
}
