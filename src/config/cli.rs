use crate::config::toml_config::FileConfig;
use crate::config::{ClientConfig, API_BASE_URL_ENV};
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "ladybug-web")]
#[command(about = "Buyer sign-up and login client for the ladybug API")]
pub struct Cli {
    /// Base URL of the buyer API (default: http://localhost:8080)
    #[arg(long, env = API_BASE_URL_ENV)]
    pub api_base_url: Option<String>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// POST a buyer sign-up request
    SignUp {
        #[arg(long)]
        payload: String,
    },
    /// POST a buyer login request
    Login {
        #[arg(long)]
        payload: String,
    },
    /// Dispatch an action by name, e.g. buyerSignUp
    Dispatch {
        action: String,
        #[arg(long)]
        payload: String,
    },
    /// List declared routes
    Routes,
    /// Resolve a path to its view
    Navigate { path: String },
}

impl Cli {
    pub fn file_config(&self) -> Result<FileConfig> {
        match &self.config {
            Some(path) => FileConfig::from_file(path),
            None => Ok(FileConfig::default()),
        }
    }

    /// 優先順序：旗標/環境變數 > 設定檔 > 預設值
    pub fn client_config(&self, file: &FileConfig) -> ClientConfig {
        match &self.api_base_url {
            Some(url) => ClientConfig::new(url.clone()),
            None => file.to_client_config(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sign_up() {
        let cli = Cli::try_parse_from([
            "ladybug-web",
            "--api-base-url",
            "http://127.0.0.1:9000",
            "sign-up",
            "--payload",
            r#"{"email":"a@b.com"}"#,
        ])
        .unwrap();

        assert!(matches!(cli.command, Command::SignUp { .. }));
        let config = cli.client_config(&FileConfig::default());
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_file_config_used_when_flag_absent() {
        let cli = Cli::try_parse_from(["ladybug-web", "routes"]).unwrap();
        let file = FileConfig::from_toml_str("[api]\nbase_url = \"http://files.local\"").unwrap();

        if cli.api_base_url.is_none() {
            assert_eq!(cli.client_config(&file).api_base_url, "http://files.local");
        }
    }

    #[test]
    fn test_navigate_takes_positional_path() {
        let cli = Cli::try_parse_from(["ladybug-web", "navigate", "/about"]).unwrap();
        match cli.command {
            Command::Navigate { path } => assert_eq!(path, "/about"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_payload_required() {
        assert!(Cli::try_parse_from(["ladybug-web", "login"]).is_err());
    }
}
