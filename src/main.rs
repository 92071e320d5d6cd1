use clap::Parser;
use valida_cpf::adapters::http;
use valida_cpf::utils::{error::CpfError, logger, validation::Validate};
use valida_cpf::{CliConfig, TomlConfig};

fn exit_with(e: CpfError) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e);
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let result = match &cli.config {
        Some(path) => {
            // 設定檔模式：日誌設定也由檔案決定
            let config = match TomlConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("❌ Failed to load {}: {}", path, e);
                    eprintln!("💡 {}", e.recovery_suggestion());
                    std::process::exit(1);
                }
            };

            let level = if cli.verbose { "debug" } else { config.log_level() };
            logger::init_with_level(level, config.json_logs());
            tracing::info!("Starting valida-cpf with config file {}", path);

            if let Err(e) = config.validate() {
                exit_with(e);
            }
            http::serve(&config).await
        }
        None => {
            logger::init_server_logger(cli.verbose);
            tracing::info!("Starting valida-cpf");
            tracing::debug!("CLI config: {:?}", cli);

            if let Err(e) = cli.validate() {
                exit_with(e);
            }
            http::serve(&cli).await
        }
    };

    if let Err(e) = result {
        exit_with(e);
    }
}
