//! # Signup CLI
//!
//! Joins the airdrop from a terminal, running the same controller as the
//! signup page against a live endpoint.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --package signup-cli --bin signup_cli -- \
//!     0x1234567890123456789012345678901234567890 --email alice@example.com --open
//! ```
//!
//! The program will:
//! 1. Load `.env` and the `SIGNUP_*` configuration
//! 2. Echo the live wallet-field check
//! 3. Submit the join request and print the status messages
//! 4. Store the accepted wallet in the local store file
//! 5. Print (and with `--open`, open) the tasks page once the redirect fires
//!
//! Exits with status 0 when the wallet joined, 1 otherwise.

mod args;
mod console;
mod scheduler;
mod store;

use std::rc::Rc;

use lib_signup::api::ApiClient;
use lib_signup::{SignupConfig, SignupContext, SignupController};
use tokio::task::LocalSet;
use tracing_subscriber::EnvFilter;

use crate::args::CliArgs;
use crate::console::{CliForm, ConsoleStatus, UrlNavigator};
use crate::scheduler::TokioScheduler;
use crate::store::JsonFileStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = match args::parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}", msg);
            eprintln!();
            eprintln!("{}", args::USAGE);
            std::process::exit(2);
        }
    };

    let config = SignupConfig::from_env()?;
    let joined = LocalSet::new().run_until(run(args, config)).await?;

    if !joined {
        std::process::exit(1);
    }
    Ok(())
}

async fn run(args: CliArgs, config: SignupConfig) -> anyhow::Result<bool> {
    let api = ApiClient::new(&config)?;

    let scheduler = Rc::new(TokioScheduler::default());
    let ctx = SignupContext {
        form: Rc::new(CliForm::new(args.snapshot())),
        status: Rc::new(ConsoleStatus),
        storage: Rc::new(JsonFileStore::new(args.store_path.clone())),
        navigator: Rc::new(UrlNavigator::new(api.base_url(), args.open_browser)),
        scheduler: scheduler.clone(),
    };
    let controller = SignupController::new(api, ctx, config);
    tracing::info!(endpoint = %controller.config().join_url(), "Using airdrop API");

    controller.on_wallet_input(&args.wallet_address);
    let outcome = controller.submit().await;

    // Let the redirect and the status auto-clear run before exiting
    scheduler.drain().await;

    Ok(outcome.is_joined())
}
