use chrono::NaiveDate;
use clap::Parser;
use paymask_form::config::DEFAULT_HISTORY_SIZE;
use std::path::PathBuf;

/// Interactive payment form.
///
/// Reads commands from standard input, one per line, and applies them to a
/// single payment form. Type `help` for the command list.
#[derive(Parser, Debug)]
#[command(name = "paymask", version)]
pub struct Cli {
    /// SQLite database for submitted payments; payments stay in memory if omitted
    #[arg(long, env = "PAYMASK_DB")]
    pub database: Option<PathBuf>,

    /// Number of form states kept for undo
    #[arg(long, default_value_t = DEFAULT_HISTORY_SIZE)]
    pub history_size: usize,

    /// Date expiration dates are checked against (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Print the form as JSON after every command
    #[arg(long)]
    pub json: bool,
}
