use anyhow::Result;
use clap::{Parser, Subcommand};

use ledgerly::cli::{
    handle_budget_command, handle_goal_command, handle_report_command, handle_transaction_command,
    BudgetCommands, GoalCommands, ReportCommands, TransactionCommands,
};
use ledgerly::config::{paths::LedgerPaths, settings::Settings};
use ledgerly::storage::Storage;

#[derive(Parser)]
#[command(
    name = "ledgerly",
    version,
    about = "Terminal-based personal finance ledger",
    long_about = "Ledgerly tracks expenses and income across fixed categories, \
                  caps monthly spending with per-category budgets, and measures \
                  progress toward savings goals - all from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Aggregated reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::open(&paths)?;
    storage.load_all()?;

    match cli.command {
        Commands::Transaction(cmd) => {
            handle_transaction_command(&storage, &settings, cmd)?;
        }
        Commands::Budget(cmd) => {
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Commands::Goal(cmd) => {
            handle_goal_command(&storage, &settings, cmd)?;
        }
        Commands::Report(cmd) => {
            handle_report_command(&storage, cmd)?;
        }
        Commands::Config => {
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Currency symbol: {}", settings.currency_symbol);
            println!("Date format:     {}", settings.date_format);
        }
    }

    Ok(())
}
