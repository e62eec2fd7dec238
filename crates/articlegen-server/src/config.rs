use std::net::{IpAddr, SocketAddr};

use articlegen_service::{ModelParams, OpenAiClient};
use clap::Parser;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("OPENAI_API_KEY is not set; refusing to start")]
    MissingApiKey,

    #[error("invalid bind address {0:?}")]
    InvalidBind(String),
}

#[derive(Debug, Clone, Parser)]
#[command(name = "articlegen-server", about = "Article outline generator")]
pub struct ServerConfig {
    /// Credential for the completion service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of an OpenAI-compatible API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = OpenAiClient::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Model identifier sent with every request
    #[arg(long, env = "ARTICLEGEN_MODEL", default_value = ModelParams::DEFAULT_MODEL)]
    pub model: String,

    /// Sampling temperature
    #[arg(long, env = "ARTICLEGEN_TEMPERATURE", default_value_t = ModelParams::DEFAULT_TEMPERATURE)]
    pub temperature: f32,

    /// Address to listen on
    #[arg(long, env = "ARTICLEGEN_BIND", default_value = "127.0.0.1")]
    pub bind: String,

    /// Port to listen on
    #[arg(long, env = "ARTICLEGEN_PORT", default_value_t = 8501)]
    pub port: u16,
}

impl ServerConfig {
    /// The completion credential. A blank value counts as missing.
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)
    }

    pub fn model_params(&self) -> ModelParams {
        ModelParams {
            model: self.model.clone(),
            temperature: self.temperature,
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .bind
            .parse()
            .map_err(|_| ConfigError::InvalidBind(self.bind.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> ServerConfig {
        ServerConfig {
            api_key: api_key.map(String::from),
            base_url: OpenAiClient::DEFAULT_BASE_URL.into(),
            model: ModelParams::DEFAULT_MODEL.into(),
            temperature: ModelParams::DEFAULT_TEMPERATURE,
            bind: "127.0.0.1".into(),
            port: 8501,
        }
    }

    #[test]
    fn missing_key_is_error() {
        assert_eq!(config(None).api_key(), Err(ConfigError::MissingApiKey));
    }

    #[test]
    fn blank_key_is_error() {
        assert_eq!(config(Some("   ")).api_key(), Err(ConfigError::MissingApiKey));
    }

    #[test]
    fn key_is_trimmed() {
        assert_eq!(config(Some(" sk-abc\n")).api_key(), Ok("sk-abc"));
    }

    #[test]
    fn model_params_come_from_flags() {
        let mut cfg = config(Some("k"));
        cfg.model = "gpt-4o-mini".into();
        cfg.temperature = 0.2;
        let params = cfg.model_params();
        assert_eq!(params.model, "gpt-4o-mini");
        assert_eq!(params.temperature, 0.2);
    }

    #[test]
    fn socket_addr_parses() {
        let addr = config(None).socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8501");
    }

    #[test]
    fn bad_bind_is_error() {
        let mut cfg = config(None);
        cfg.bind = "localhost:80".into();
        assert!(matches!(cfg.socket_addr(), Err(ConfigError::InvalidBind(_))));
    }

    #[test]
    fn flags_override_defaults() {
        let cfg = ServerConfig::try_parse_from([
            "articlegen-server",
            "--api-key",
            "sk-flag",
            "--model",
            "gpt-4o",
            "--port",
            "9000",
        ])
        .unwrap();
        assert_eq!(cfg.api_key(), Ok("sk-flag"));
        assert_eq!(cfg.model, "gpt-4o");
        assert_eq!(cfg.port, 9000);
    }
}
