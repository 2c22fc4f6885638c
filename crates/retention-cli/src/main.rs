//! retention CLI
//!
//! Logging: set `RUST_LOG=retention_core=debug` to see collaborator outputs on stderr.
//! Results are printed to stdout as pretty JSON.

mod cli;

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use retention_core::app::{AdvisorBuilder, RetentionAdvisor};
use retention_core::config::AppConfig;
use retention_core::domain::{CustomerMessage, CustomerRecord, InteractionSnapshot, Phone};
use retention_core::impls::{KeywordSentimentAnalyzer, LogisticChurnScorer, SqliteCustomerStore};
use retention_core::policy::IncentiveRecommender;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "retention=debug,retention_core=debug"
        } else {
            "retention=info,retention_core=info"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = AppConfig::load(cli.config.as_deref()).context("load config")?;
    let mut rng = make_rng(cli.seed);

    match cli.command {
        Command::InitDb { db, customers } => init_db(&db, &customers),
        Command::Evaluate { snapshot } => {
            let raw = std::fs::read_to_string(&snapshot)
                .with_context(|| format!("read snapshot {}", snapshot.display()))?;
            let snapshot: InteractionSnapshot =
                serde_json::from_str(&raw).context("decode snapshot")?;
            let recommendation =
                IncentiveRecommender::new(config.policy).recommend(&snapshot, &mut rng);
            print_json(&recommendation)
        }
        Command::Advise { db, phone, message } => {
            let advisor = build_advisor(&db, config)?;
            let phone = Phone::new(&phone)?;
            let message = CustomerMessage::new(&message)?;
            let advice = advisor.advise(&phone, &message, &mut rng).await?;
            print_json(&advice)
        }
        Command::AdviseAll { db, message } => {
            let advisor = build_advisor(&db, config)?;
            let message = CustomerMessage::new(&message)?;
            let entries = advisor.advise_all(&message, &mut rng).await?;
            print_json(&entries)
        }
    }
}

fn make_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    }
}

fn init_db(db: &Path, customers: &Path) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(customers)
        .with_context(|| format!("read customers {}", customers.display()))?;
    let records: Vec<CustomerRecord> =
        serde_json::from_str(&raw).context("decode customer records")?;

    let store = SqliteCustomerStore::open(db)
        .with_context(|| format!("open database {}", db.display()))?;
    for record in &records {
        store.upsert(record)?;
    }
    info!(db = %db.display(), loaded = records.len(), "customer table ready");
    Ok(())
}

fn build_advisor(db: &Path, config: AppConfig) -> anyhow::Result<RetentionAdvisor> {
    let store = SqliteCustomerStore::open(db)
        .with_context(|| format!("open database {}", db.display()))?;
    let advisor = AdvisorBuilder::new()
        .store(Arc::new(store))
        .churn_scorer(Arc::new(LogisticChurnScorer::new(config.churn_model)))
        .sentiment_analyzer(Arc::new(KeywordSentimentAnalyzer::default()))
        .policy(config.policy)
        .build()?;
    Ok(advisor)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
