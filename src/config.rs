use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "inkfeed", about = "A cyberpunk social feed for book lovers")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory holding config.toml
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Generative model identifier
    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub provider: ProviderConfig,
    pub viewer: ViewerConfig,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,
    pub model: String,
    /// Inline key; when absent the variable named by `api_key_env` is read
    pub api_key: Option<String>,
    pub api_key_env: String,
}

/// The local viewer's profile
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ViewerConfig {
    pub name: String,
    pub handle: String,
    pub avatar: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-3-flash-preview".to_string(),
            api_key: None,
            api_key_env: "API_KEY".to_string(),
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            name: "Alice Reader".to_string(),
            handle: "@alicereads".to_string(),
            avatar: "https://picsum.photos/id/64/150/150".to_string(),
        }
    }
}

impl Config {
    /// Load config from file, CLI and environment. A missing API key is not
    /// an error here; the provider refuses calls without one.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let data_dir = Self::data_dir(cli);
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| data_dir.join("config.toml"));

        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        // CLI overrides
        if let Some(ref host) = cli.host {
            config.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            config.server.port = port;
        }
        if let Some(ref model) = cli.model {
            config.provider.model = model.clone();
        }

        if config.provider.api_key.is_none() {
            config.provider.api_key = std::env::var(&config.provider.api_key_env)
                .ok()
                .filter(|k| !k.is_empty());
        }

        Ok(config)
    }

    pub fn data_dir(cli: &Cli) -> PathBuf {
        cli.data_dir.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".inkfeed")
        })
    }
}
