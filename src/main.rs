use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paysplit::application::engine::PaymentPlanner;
use paysplit::domain::ports::ObligationStoreBox;
use paysplit::infrastructure::in_memory::InMemoryObligationStore;
use paysplit::interfaces::csv::obligation_reader::ObligationReader;
use paysplit::interfaces::csv::plan_writer::PlanWriter;
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input obligations CSV file
    input: PathBuf,

    /// Payment amount to split across the portfolio.
    /// Malformed or negative values allocate nothing.
    #[arg(allow_negative_numbers = true)]
    amount: String,

    /// Reject structurally invalid obligations instead of allocating as-is
    #[arg(long)]
    strict: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let amount: Decimal = cli.amount.trim().parse().unwrap_or(Decimal::ZERO);

    let store: ObligationStoreBox = Box::new(InMemoryObligationStore::new());
    let planner = PaymentPlanner::new(store);

    // Load the portfolio, skipping unreadable rows
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = ObligationReader::new(file);
    for record in reader.obligations() {
        match record {
            Ok(obligation) => {
                planner.load(obligation).await.into_diagnostic()?;
            }
            Err(e) => {
                eprintln!("Error reading obligation: {}", e);
            }
        }
    }

    let plan = if cli.strict {
        planner.plan_strict(amount).await.into_diagnostic()?
    } else {
        planner.plan(amount).await.into_diagnostic()?
    };

    let summary = planner.summary().await.into_diagnostic()?;
    if plan.total_amount < summary.min_due {
        eprintln!("Note: amount does not cover all minimum dues; highest-rate balances are paid first");
    }
    if plan.unallocated.is_positive() && !plan.lines.is_empty() {
        eprintln!(
            "Note: {} exceeds the total outstanding balance and was left unallocated",
            plan.unallocated.value()
        );
    }

    // Output the distribution
    let stdout = io::stdout();
    let mut writer = PlanWriter::new(stdout.lock());
    writer.write_plan(&plan).into_diagnostic()?;

    Ok(())
}
