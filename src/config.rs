//! Environment configuration
//!
//! Unset or unparseable values fall back to their defaults.

use crate::session::ThinkingDelay;
use std::path::PathBuf;
use std::fmt::Display;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 200;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TOP_K: u32 = 40;
pub const DEFAULT_TOP_P: f32 = 0.95;

const TIMEOUT_SECS_RANGE: RangeInclusive<u64> = 1..=600;
const MAX_OUTPUT_TOKENS_RANGE: RangeInclusive<u32> = 1..=8192;
const TEMPERATURE_RANGE: RangeInclusive<f32> = 0.0..=2.0;

/// Upstream generative service settings
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            top_k: DEFAULT_TOP_K,
            top_p: DEFAULT_TOP_P,
        }
    }
}

impl GeminiConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            api_key: lookup("GEMINI_API_KEY").filter(|key| !key.trim().is_empty()),
            model: lookup("GEMINI_MODEL").unwrap_or(defaults.model),
            base_url: lookup("GEMINI_BASE_URL").unwrap_or(defaults.base_url),
            timeout: bounded(lookup, "GEMINI_TIMEOUT_SECS", TIMEOUT_SECS_RANGE)
                .map_or(defaults.timeout, Duration::from_secs),
            max_output_tokens: bounded(
                lookup,
                "GEMINI_MAX_OUTPUT_TOKENS",
                MAX_OUTPUT_TOKENS_RANGE,
            )
            .unwrap_or(defaults.max_output_tokens),
            temperature: bounded(lookup, "GEMINI_TEMPERATURE", TEMPERATURE_RANGE)
                .unwrap_or(defaults.temperature),
            top_k: defaults.top_k,
            top_p: defaults.top_p,
        }
    }
}

/// Proxy server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub knowledge_path: Option<PathBuf>,
    pub gemini: GeminiConfig,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            port: parsed(lookup, "PORTFOLIO_PORT").unwrap_or(DEFAULT_PORT),
            knowledge_path: lookup("PORTFOLIO_KNOWLEDGE_PATH").map(PathBuf::from),
            gemini: GeminiConfig::from_lookup(lookup),
        }
    }
}

/// Terminal chat settings
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Proxy endpoint; `None` answers from the local rule table
    pub remote_url: Option<String>,
    pub thinking_delay: ThinkingDelay,
}

impl ChatConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        Self {
            remote_url: lookup("PORTFOLIO_CHAT_URL").filter(|url| !url.trim().is_empty()),
            thinking_delay: lookup("PORTFOLIO_THINKING_DELAY_MS")
                .and_then(|raw| ThinkingDelay::parse(&raw))
                .unwrap_or_default(),
        }
    }
}

fn parsed<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Ignoring unparseable configuration value");
            None
        }
    }
}

/// Like [`parsed`], but values outside `range` are also ignored. NaN never
/// falls inside a range.
fn bounded<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    range: RangeInclusive<T>,
) -> Option<T>
where
    T: FromStr + PartialOrd + Display,
{
    let value = parsed(lookup, key)?;
    if range.contains(&value) {
        Some(value)
    } else {
        tracing::warn!(
            key,
            %value,
            min = %range.start(),
            max = %range.end(),
            "Ignoring out-of-range configuration value"
        );
        None
    }
}
