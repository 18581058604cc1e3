//! TodoList deployment tool
//!
//! Starts a local chain, deploys one TodoList instance and prints its address.
//!
//! # Usage
//!
//! ```bash
//! # Deploy "My Todos" from the development account
//! deploy
//!
//! # Custom name and deployer
//! deploy --name "Groceries" --deployer 0x00...02
//! ```

use std::{process::ExitCode, sync::Arc};

use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser};
use log::{debug, info};
use todo_common::{
    config::{DEFAULT_TODO_LIST_NAME, DEV_ACCOUNT, VERSION},
    crypto::Hash,
};
use todo_daemon::core::{DeployReceipt, LocalChain};
use todo_list_contract::{encode_constructor, TodoList, CONTRACT_NAME};

/// Deploy a TodoList contract
#[derive(Parser, Debug)]
#[command(name = "deploy")]
#[command(about = "Deploy a TodoList contract on the local chain")]
#[command(version)]
struct Args {
    /// Name given to the new todo list
    #[arg(short, long, default_value = DEFAULT_TODO_LIST_NAME)]
    name: String,

    /// Deployer account as hex (defaults to the development account)
    #[arg(short, long)]
    deployer: Option<Hash>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Help and version requests are not failures
fn is_informational(err: &clap::Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}

async fn run(args: &Args) -> Result<DeployReceipt> {
    let mut chain = LocalChain::with_native_executor();
    chain
        .register_contract(Arc::new(TodoList))
        .context("Failed to register TodoList")?;
    let chain = Arc::new(chain);

    let deployer = args.deployer.clone().unwrap_or(DEV_ACCOUNT);
    debug!("Deploying '{}' from {}", args.name, deployer);

    let factory = chain
        .get_contract_factory(CONTRACT_NAME)
        .context("TodoList factory unavailable")?;
    let receipt = factory
        .deploy(&deployer, &encode_constructor(&args.name))
        .await
        .context("TodoList deployment failed")?;

    for line in &receipt.logs {
        debug!("{}", line);
    }
    info!(
        "Deployed at topoheight {} with nonce {}",
        receipt.topoheight, receipt.nonce
    );
    Ok(receipt)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if is_informational(&e) => e.exit(),
        Err(e) => {
            eprint!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    debug!("deploy v{}", VERSION);

    match run(&args).await {
        Ok(receipt) => {
            println!("todolist deployed to: {}", receipt.address);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
