use anyhow::Context;
use clap::Parser;
use ladybug_web::utils::{logger, validation::Validate};
use ladybug_web::{ActionOutcome, App, BuyerClient, Cli, Command, HttpTransport};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = match cli.file_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    let verbose = cli.verbose || file_config.verbose();
    if cli.json_logs || file_config.json_logs() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    let config = cli.client_config(&file_config);
    tracing::debug!("Client config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let app = App::buyer_portal(BuyerClient::new(HttpTransport::new(), &config));

    match &cli.command {
        Command::Routes => {
            for route in app.router().routes() {
                let marker = if route.is_lazy() { " (lazy)" } else { "" };
                println!("{:<16} {}{}", route.path(), route.name(), marker);
            }
        }
        Command::Navigate { path } => match app.navigate(path) {
            Some(page) => println!("{} -> {}", page.path, page.view),
            None => {
                eprintln!("❌ No route declared for {}", path);
                std::process::exit(1);
            }
        },
        Command::SignUp { payload } => {
            let body = parse_payload(payload)?;
            report(app.client().buyer_sign_up(&body).await);
        }
        Command::Login { payload } => {
            let body = parse_payload(payload)?;
            report(app.client().buyer_login(&body).await);
        }
        Command::Dispatch { action, payload } => {
            let body = parse_payload(payload)?;
            match app.client().dispatch(action, &body) {
                Ok(handle) => report(handle.await),
                Err(e) => {
                    eprintln!("❌ {}", e.user_friendly_message());
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn parse_payload(raw: &str) -> anyhow::Result<serde_json::Value> {
    ladybug_web::utils::validation::validate_non_empty_string("payload", raw)?;
    serde_json::from_str(raw).context("payload must be a JSON value")
}

/// 結果只做輸出，不影響結束碼
fn report(outcome: ActionOutcome) {
    match outcome {
        ActionOutcome::Succeeded(resp) => println!("✅ {} {}", resp.status, resp.body),
        ActionOutcome::Rejected(resp) => println!("⚠️ {} {}", resp.status, resp.body),
        ActionOutcome::Failed { reason } => println!("❌ {}", reason),
    }
}
