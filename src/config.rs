//! Configuration loading with env-var overrides.
//!
//! Reads `config/default.toml` relative to the current working directory,
//! then applies `ESTATE_PILOT_LOG_LEVEL` and `ESTATE_PILOT_WEBHOOK_URL`
//! env overrides. API keys (`LLM_API_KEY`, `SEARCH_API_KEY`) are sourced
//! from the environment only — never from TOML.

use std::{env, fs, path::Path};

use serde::Deserialize;

use crate::error::AppError;

/// Bank outreach configuration.
#[derive(Debug, Clone)]
pub struct OutreachConfig {
    /// Endpoint for the enquiry-letter blast. Failures are masked, so a
    /// dead URL only costs the request timeout.
    pub webhook_url: String,
    /// Simulated reply-scan latency. The demo value (2000 ms) mimics OCR.
    pub scan_latency_ms: u64,
}

/// Legal application (court bundle) configuration.
#[derive(Debug, Clone)]
pub struct LegalConfig {
    /// Simulated bundle-compilation latency.
    pub compile_latency_ms: u64,
}

/// OpenAI / OpenAI-compatible provider configuration.
/// Populated from `[llm.openai]` in the TOML.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Full chat completions endpoint URL.
    pub api_base_url: String,
    /// Model name passed in the request body.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
}

/// LLM subsystem configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Which provider is active (e.g. `"dummy"`, `"openai"`).
    /// Maps to `default` in `[llm]` TOML — named `default` there to signal
    /// that other provider sections can coexist without being loaded.
    pub provider: String,
    /// Config for the OpenAI / OpenAI-compatible provider (`[llm.openai]`).
    pub openai: OpenAiConfig,
}

/// Web-search tool configuration.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub api_base_url: String,
    pub max_results: u8,
}

/// Fully-resolved workbench configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub app_name: String,
    pub log_level: String,
    pub outreach: OutreachConfig,
    pub legal: LegalConfig,
    pub llm: LlmConfig,
    pub search: SearchConfig,
    /// API key from `LLM_API_KEY` env var — `None` for the dummy provider.
    pub llm_api_key: Option<String>,
    /// API key from `SEARCH_API_KEY` env var — `None` degrades the search
    /// tool to a mock result.
    pub search_api_key: Option<String>,
}

/// Raw TOML shape — `serde` target before resolution.
#[derive(Deserialize)]
struct RawConfig {
    workbench: RawWorkbench,
    #[serde(default)]
    outreach: RawOutreach,
    #[serde(default)]
    legal: RawLegal,
    #[serde(default)]
    llm: RawLlm,
    #[serde(default)]
    search: RawSearch,
}

#[derive(Deserialize)]
struct RawWorkbench {
    name: String,
    log_level: String,
}

#[derive(Deserialize)]
struct RawOutreach {
    #[serde(default = "default_webhook_url")]
    webhook_url: String,
    #[serde(default = "default_scan_latency_ms")]
    scan_latency_ms: u64,
}

impl Default for RawOutreach {
    fn default() -> Self {
        Self {
            webhook_url: default_webhook_url(),
            scan_latency_ms: default_scan_latency_ms(),
        }
    }
}

#[derive(Deserialize)]
struct RawLegal {
    #[serde(default = "default_compile_latency_ms")]
    compile_latency_ms: u64,
}

impl Default for RawLegal {
    fn default() -> Self {
        Self { compile_latency_ms: default_compile_latency_ms() }
    }
}

#[derive(Deserialize)]
struct RawLlm {
    /// Maps to `default = "..."` in `[llm]`.
    #[serde(rename = "default", default = "default_llm_provider")]
    provider: String,
    #[serde(default)]
    openai: RawOpenAiConfig,
}

impl Default for RawLlm {
    fn default() -> Self {
        Self { provider: default_llm_provider(), openai: RawOpenAiConfig::default() }
    }
}

#[derive(Deserialize)]
struct RawOpenAiConfig {
    #[serde(default = "default_openai_api_base_url")]
    api_base_url: String,
    #[serde(default = "default_openai_model")]
    model: String,
    #[serde(default = "default_openai_temperature")]
    temperature: f32,
    #[serde(default = "default_openai_timeout_seconds")]
    timeout_seconds: u64,
}

impl Default for RawOpenAiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_openai_api_base_url(),
            model: default_openai_model(),
            temperature: default_openai_temperature(),
            timeout_seconds: default_openai_timeout_seconds(),
        }
    }
}

#[derive(Deserialize)]
struct RawSearch {
    #[serde(default = "default_search_api_base_url")]
    api_base_url: String,
    #[serde(default = "default_search_max_results")]
    max_results: u8,
}

impl Default for RawSearch {
    fn default() -> Self {
        Self {
            api_base_url: default_search_api_base_url(),
            max_results: default_search_max_results(),
        }
    }
}

fn default_webhook_url() -> String {
    "https://webhooks.workato.com/webhooks/rest/0ed6e747-1a90-4d0a-8f7d-861bcad7a6ee/blast_request"
        .to_string()
}
fn default_scan_latency_ms() -> u64 { 2000 }
fn default_compile_latency_ms() -> u64 { 2500 }
fn default_llm_provider() -> String { "dummy".to_string() }
fn default_openai_api_base_url() -> String { "https://api.openai.com/v1/chat/completions".to_string() }
fn default_openai_model() -> String { "gpt-4o".to_string() }
fn default_openai_temperature() -> f32 { 0.2 }
fn default_openai_timeout_seconds() -> u64 { 60 }
fn default_search_api_base_url() -> String { "https://api.tavily.com/search".to_string() }
fn default_search_max_results() -> u8 { 3 }

/// Load config from `config/default.toml`, then apply env-var overrides.
pub fn load() -> Result<Config, AppError> {
    let log_level_override = env::var("ESTATE_PILOT_LOG_LEVEL").ok();
    let webhook_override = env::var("ESTATE_PILOT_WEBHOOK_URL").ok();
    load_from(
        Path::new("config/default.toml"),
        log_level_override.as_deref(),
        webhook_override.as_deref(),
    )
}

/// Internal loader — accepts an explicit path and optional overrides.
/// Tests pass overrides directly instead of mutating env vars.
pub fn load_from(
    path: &Path,
    log_level_override: Option<&str>,
    webhook_override: Option<&str>,
) -> Result<Config, AppError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let parsed: RawConfig = toml::from_str(&raw)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?;

    let w = parsed.workbench;
    let log_level = log_level_override.unwrap_or(&w.log_level).to_string();
    let webhook_url = webhook_override
        .unwrap_or(&parsed.outreach.webhook_url)
        .to_string();

    Ok(Config {
        app_name: w.name,
        log_level,
        outreach: OutreachConfig {
            webhook_url,
            scan_latency_ms: parsed.outreach.scan_latency_ms,
        },
        legal: LegalConfig {
            compile_latency_ms: parsed.legal.compile_latency_ms,
        },
        llm: LlmConfig {
            provider: parsed.llm.provider,
            openai: OpenAiConfig {
                api_base_url: parsed.llm.openai.api_base_url,
                model: parsed.llm.openai.model,
                temperature: parsed.llm.openai.temperature,
                timeout_seconds: parsed.llm.openai.timeout_seconds,
            },
        },
        search: SearchConfig {
            api_base_url: parsed.search.api_base_url,
            max_results: parsed.search.max_results,
        },
        llm_api_key: env::var("LLM_API_KEY").ok(),
        search_api_key: env::var("SEARCH_API_KEY").ok(),
    })
}

// ── test helpers ──────────────────────────────────────────────────────────────

/// Safe `Config` for unit tests — dummy LLM, no API keys, zero latencies,
/// no external calls.
impl Config {
    pub fn test_default() -> Self {
        Self {
            app_name: "test".into(),
            log_level: "info".into(),
            outreach: OutreachConfig {
                webhook_url: "http://localhost:0/blast_request".into(),
                scan_latency_ms: 0,
            },
            legal: LegalConfig { compile_latency_ms: 0 },
            llm: LlmConfig {
                provider: "dummy".into(),
                openai: OpenAiConfig {
                    api_base_url: "http://localhost:0/v1/chat/completions".into(),
                    model: "test-model".into(),
                    temperature: 0.0,
                    timeout_seconds: 1,
                },
            },
            search: SearchConfig {
                api_base_url: "http://localhost:0/search".into(),
                max_results: 3,
            },
            llm_api_key: None,
            search_api_key: None,
        }
    }
}
