use clap::Parser;
use valida_cpf::config::DEFAULT_PORT;
use valida_cpf::utils::logger;
use valida_cpf::CpfClient;

/// 對已部署的端點送出 CPF 並列出回應
#[derive(Debug, Parser)]
#[command(name = "check_cpf")]
#[command(about = "Smoke-test a deployed CPF validation endpoint")]
struct Args {
    #[arg(long, default_value_t = format!("http://localhost:{}/api/fnvalidacpf", DEFAULT_PORT))]
    endpoint: String,

    #[arg(required = true, help = "CPF numbers to check, punctuation allowed")]
    cpfs: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logger::init_server_logger(args.verbose);

    let client = match CpfClient::new(&args.endpoint) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    println!("🚀 Checking {} CPF(s) against {}", args.cpfs.len(), client.endpoint());

    let mut rejected = 0;
    for cpf in &args.cpfs {
        match client.check(cpf).await {
            Ok(reply) => {
                let icon = if reply.is_valid() { "✅" } else { "❌" };
                println!("  {} {}: {} {}", icon, cpf, reply.status, reply.message);
                if !reply.is_valid() {
                    rejected += 1;
                }
            }
            Err(e) => {
                tracing::error!("Request to {} failed: {}", client.endpoint(), e);
                eprintln!("❌ {}", e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        }
    }

    println!("📊 {} valid, {} rejected", args.cpfs.len() - rejected, rejected);

    if rejected > 0 {
        std::process::exit(2);
    }
}
