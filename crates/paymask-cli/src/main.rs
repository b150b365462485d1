//! Interactive payment form in the terminal.
//!
//! Logging is controlled with `PAYMASK_LOG` (falling back to `RUST_LOG`),
//! for example `PAYMASK_LOG=paymask_form=debug`.

mod args;
mod command;
mod console;

use anyhow::Context;
use clap::Parser;
use paymask_checkout::{Checkout, LocalGateway};
use paymask_core::Field;
use paymask_form::{FormConfig, FormSession};
use paymask_input::MaskOutcome;
use paymask_storage::{
    Database, DatabaseConfig, InMemoryPaymentStore, PaymentStore, SqlitePaymentStore,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use args::Cli;
use command::{Command, HELP};
use console::{ConsoleNotifier, render_snapshot};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = FormConfig::new().history_size(cli.history_size);
    if let Some(today) = cli.today {
        config = config.reference_date(today);
    }

    match &cli.database {
        Some(path) => {
            let db = Database::new(DatabaseConfig::new(path.to_string_lossy()))
                .await
                .with_context(|| format!("failed to open database {}", path.display()))?;
            info!(path = %path.display(), "Storing payments in SQLite");
            let store = SqlitePaymentStore::new(db.pool().clone());
            run(store, config, cli.json).await?;
            db.close().await;
        }
        None => {
            info!("Storing payments in memory");
            run(InMemoryPaymentStore::new(), config, cli.json).await?;
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PAYMASK_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run<S: PaymentStore>(store: S, config: FormConfig, json: bool) -> anyhow::Result<()> {
    let checkout = Checkout::new(LocalGateway::new(store), ConsoleNotifier);
    let mut session = FormSession::with_config(config);

    println!("paymask {}\n\n{HELP}\n", paymask_core::VERSION);
    print_form(&session, json)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                println!("error: {err}");
                continue;
            }
        };

        match command {
            Command::Type { field, keys } => type_keys(&mut session, field, &keys),
            Command::Paste { field, text } => report(session.input(field, &text)),
            Command::Delete { field, count } => {
                for _ in 0..count {
                    report(session.delete_backward(field));
                }
            }
            Command::Undo => {
                if !session.undo() {
                    println!("nothing to undo");
                }
            }
            Command::Reset => session.reset(),
            Command::Show => {}
            Command::Submit => {
                match checkout.submit(&session).await {
                    Ok(receipt) => println!("request id: {}", receipt.request_id),
                    Err(err) if err.is_invalid_form() => println!("cannot submit: {err}"),
                    // Shown by the notifier.
                    Err(_) => {}
                }
                continue;
            }
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
        }

        print_form(&session, json)?;
    }

    Ok(())
}

/// Feed keys one at a time, each proposal being the current value plus one key.
fn type_keys(session: &mut FormSession, field: Field, keys: &str) {
    for key in keys.chars() {
        let mut proposed = session.value(field).to_string();
        proposed.push(key);
        report(session.input(field, &proposed));
    }
}

fn report(outcome: MaskOutcome) {
    if let MaskOutcome::Reject(reason) = outcome {
        println!("  rejected: {reason}");
    }
}

fn print_form(session: &FormSession, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(session.snapshot())?);
    } else {
        println!("{}", render_snapshot(session.snapshot()));
    }
    Ok(())
}
