use clap::Parser;
use serde_json::Value;
use sws_client::config::cli::{Command, GeocodeArgs};
use sws_client::utils::logger;
use sws_client::{CliConfig, SwsApi, SwsClient, SwsError};

async fn run_geocode(api: &dyn SwsApi, args: &GeocodeArgs) -> sws_client::Result<Value> {
    let auth_key = match &args.auth_key {
        Some(key) => key.clone(),
        None => {
            // validate() 已確認帳密存在
            let username = args.username.as_deref().unwrap_or_default();
            let password = args.password.as_deref().unwrap_or_default();
            api.authenticate(username, password).await?.auth_key
        }
    };

    let result = api.geocode(&auth_key, &args.address, &args.city).await?;
    Ok(result.body)
}

async fn run(api: &dyn SwsApi, command: &Command) -> sws_client::Result<Value> {
    match command {
        Command::Authenticate(creds) => Ok(api
            .authenticate(&creds.username, &creds.password)
            .await?
            .body),
        Command::Geocode(args) => run_geocode(api, args).await,
    }
}

fn fail(e: &SwsError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    if let Some(response) = e.response() {
        tracing::debug!("SWS response: {}", response);
    }
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 設定檔要先讀，log level 可能寫在裡面
    let file_config = match config.load_file_config() {
        Ok(file_config) => file_config,
        Err(e) => {
            logger::init_cli_logger(config.verbose, None);
            fail(&e);
        }
    };

    if file_config.json_logs() {
        logger::init_json_logger(file_config.log_level());
    } else {
        logger::init_cli_logger(config.verbose, file_config.log_level());
    }

    tracing::info!("Starting sws CLI");
    if config.verbose {
        tracing::debug!(
            "CLI flags: host={:?} port={:?} config={:?}",
            config.host,
            config.port,
            config.config
        );
    }

    let host_options = match config.resolve_host_options(&file_config) {
        Ok(host_options) => host_options,
        Err(e) => fail(&e),
    };

    tracing::info!("🌐 SWS endpoint: {}", host_options.base_url());

    let client = SwsClient::new(host_options);
    match run(&client, &config.command).await {
        Ok(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
        Err(e) => fail(&e),
    }
}

