use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;

use teaswap_bot::blockchain::types::{parse_amount, to_tokens, GasPrice};
use teaswap_bot::blockchain::ChainGateway;
use teaswap_bot::bot::dialogue::parse_contract_input;
use teaswap_bot::bot::format::explorer_tx_url;
use teaswap_bot::config::load_config;
use teaswap_bot::lifecycle::startup;
use teaswap_bot::observability::logging::init_logging;
use teaswap_bot::tokens::POPULAR_TOKENS;

#[derive(Parser)]
#[command(name = "swap-cli")]
#[command(about = "One-shot Tea Assam swaps from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show native and wrapped balances of the configured signer
    Balance,
    /// Wrap, approve and swap once
    Swap {
        /// Amount to approve and swap, in whole tokens (e.g. 1.5)
        #[arg(short, long)]
        amount: Option<String>,

        /// Target token address or listed token name
        #[arg(short, long)]
        target: Option<String>,

        /// Gas price in gwei
        #[arg(short, long)]
        gas_price: Option<u64>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// List popular tokens
    Tokens,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Tokens = cli.command {
        for token in POPULAR_TOKENS {
            println!("{:<30} {}", token.name, token.address);
        }
        return Ok(());
    }

    let config = load_config().context("Failed to load configuration")?;
    init_logging(&config.observability).context("Failed to initialize logging")?;
    let explorer_url = config.chain.explorer_url.clone();
    let app = startup::start(config).await?;

    match cli.command {
        Commands::Balance => {
            let gateway = app.orchestrator.gateway();
            let signer = gateway.signer_address();
            let native = gateway.native_balance(signer).await?;
            let wrapped = gateway.wrapped_balance(signer).await?;
            println!("Address: {signer}");
            println!("TEA:     {}", to_tokens(native));
            println!("WTEA:    {}", to_tokens(wrapped));
        }
        Commands::Swap {
            amount,
            target,
            gas_price,
            json,
        } => {
            let mut settings = app.settings.snapshot().as_ref().clone();
            if let Some(amount) = amount {
                settings.amount = parse_amount(&amount).context("Invalid --amount")?;
            }
            if let Some(target) = target {
                settings.target_token = parse_contract_input(&target).context("Invalid --target")?;
            }
            if let Some(gwei) = gas_price {
                anyhow::ensure!(gwei > 0, "--gas-price must be greater than zero");
                settings.gas_price = GasPrice::from_gwei(gwei);
            }

            let outcome = app.orchestrator.execute(&settings.to_request()).await?;
            let explorer = explorer_tx_url(&explorer_url, &outcome.swap_tx_hash);
            if json {
                let mut value = serde_json::to_value(&outcome)?;
                value["explorer_url"] = json!(explorer);
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("TEA balance:    {}", outcome.native_balance_tokens());
                println!("WTEA balance:   {}", outcome.wtea_balance_tokens());
                println!("Wrap tx:        {}", outcome.wrap_tx_hash);
                println!("Approval tx:    {}", outcome.approval_tx_hash);
                println!("Swap tx:        {explorer}");
                println!("Status:         {}", outcome.status_label());
                println!("Message:        {}", outcome.message);
            }
            if !outcome.is_success() {
                std::process::exit(1);
            }
        }
        Commands::Tokens => {}
    }

    Ok(())
}
