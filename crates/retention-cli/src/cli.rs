use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "retention", version, about = "Customer retention incentive advisor")]
pub struct Cli {
    /// JSON config file (falls back to RETENTION_CONFIG, then defaults)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for the experimental credit tier; unseeded uses the thread RNG
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Debug logging (RUST_LOG still wins)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the customer table and load records from a JSON array
    InitDb {
        #[arg(long)]
        db: PathBuf,
        #[arg(long)]
        customers: PathBuf,
    },
    /// Run the decision table on a snapshot JSON file
    Evaluate {
        #[arg(long)]
        snapshot: PathBuf,
    },
    /// Look up one customer, score it, classify the message and recommend
    Advise {
        #[arg(long)]
        db: PathBuf,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        message: String,
    },
    /// Same as `advise` for every customer in the database
    AdviseAll {
        #[arg(long)]
        db: PathBuf,
        #[arg(long)]
        message: String,
    },
}
