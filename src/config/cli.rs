use crate::config::toml_config::SwsConfig;
use crate::config::HostOptions;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "sws")]
#[command(about = "Command line client for the SWS geocoding service")]
pub struct CliConfig {
    /// SWS host name, without scheme
    #[arg(long, global = true, env = "SWS_HOST")]
    pub host: Option<String>,

    #[arg(long, global = true, env = "SWS_PORT")]
    pub port: Option<String>,

    /// TOML file with a [service] section
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// POST /api/authenticate and print the response
    Authenticate(CredentialArgs),
    /// GET /api/geocode, authenticating first when no --auth-key is given
    Geocode(GeocodeArgs),
}

#[derive(Debug, Clone, Args)]
pub struct CredentialArgs {
    #[arg(long, env = "SWS_USERNAME")]
    pub username: String,

    #[arg(long, env = "SWS_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Debug, Clone, Args)]
pub struct GeocodeArgs {
    #[arg(long, env = "SWS_AUTH_KEY", hide_env_values = true)]
    pub auth_key: Option<String>,

    #[arg(long, env = "SWS_USERNAME")]
    pub username: Option<String>,

    #[arg(long, env = "SWS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[arg(long)]
    pub address: String,

    #[arg(long)]
    pub city: String,
}

impl CliConfig {
    /// 載入 --config 指定的檔案；未指定時回傳空配置
    pub fn load_file_config(&self) -> Result<SwsConfig> {
        match &self.config {
            Some(path) => {
                tracing::debug!("Loading config file: {}", path.display());
                SwsConfig::from_file(path)
            }
            None => Ok(SwsConfig::default()),
        }
    }

    /// 命令列參數覆蓋設定檔，設定檔覆蓋預設值
    pub fn host_options(&self, file_config: &SwsConfig) -> HostOptions {
        let base = file_config.host_options();
        HostOptions {
            host: self.host.clone().unwrap_or(base.host),
            port: self.port.clone().unwrap_or(base.port),
        }
    }

    /// 驗證命令列與設定檔後再合併
    pub fn resolve_host_options(&self, file_config: &SwsConfig) -> Result<HostOptions> {
        self.validate()?;
        file_config.validate()?;
        Ok(self.host_options(file_config))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(host) = &self.host {
            validation::validate_host("--host", host)?;
        }
        if let Some(port) = &self.port {
            validation::validate_port("--port", port)?;
        }

        if let Command::Geocode(args) = &self.command {
            if args.auth_key.is_none() {
                validation::validate_required_field("--username", &args.username)?;
                validation::validate_required_field("--password", &args.password)?;
            }
        }

        Ok(())
    }
}
