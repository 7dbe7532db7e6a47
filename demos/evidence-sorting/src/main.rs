//! Evidence-classification demo for Dropslot.
//!
//! Drives a headless session through a scripted sequence of drags: a few
//! correct placements, one wrong bucket, a correction, and completion.
//!
//! Run with: cargo run -p evidence-sorting
//! Set RUST_LOG=dropslot_engine=debug to watch the engine's own logs.

use std::sync::Arc;

use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use dropslot::prelude::*;
use dropslot::LoggingProgressListener;

const EXERCISE: &str = r#"
    module_id = "module-evidence"
    kind = "puzzle"

    [[items]]
    id = "ev-wallet-addr"
    category = "on-chain"
    label = "Wallet address 0x4f..c2"

    [[items]]
    id = "ev-tx-hash"
    category = "on-chain"
    label = "Transaction hash"

    [[items]]
    id = "ev-kyc-record"
    category = "records"
    label = "Exchange KYC record"

    [[items]]
    id = "ev-hw-wallet"
    category = "physical"
    label = "Seized hardware wallet"

    [[targets]]
    id = "bucket-onchain"
    category = "on-chain"
    capacity = 2
    label = "On-chain evidence"

    [[targets]]
    id = "bucket-records"
    category = "records"
    label = "Financial records"

    [[targets]]
    id = "bucket-physical"
    category = "physical"
    label = "Physical evidence"
"#;

// The scripted drags: (item, bucket).
const SCRIPT: [(&str, &str); 5] = [
    ("ev-wallet-addr", "bucket-onchain"),
    ("ev-tx-hash", "bucket-onchain"),
    ("ev-kyc-record", "bucket-physical"), // wrong bucket
    ("ev-kyc-record", "bucket-records"),  // corrected
    ("ev-hw-wallet", "bucket-physical"),
];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ExerciseConfig::from_toml_str(EXERCISE).expect("demo exercise parses");
    let mut session = SessionBuilder::from_config(&config)
        .expect("demo exercise is valid")
        .with_listener(Arc::new(LoggingProgressListener::new()))
        .build()
        .expect("demo session builds");

    println!(
        "{} Evidence classification ({})\n",
        "▸".bright_green(),
        session.module_id().bright_cyan()
    );

    for (item, bucket) in SCRIPT {
        session.begin_drag(&item.into());
        session.hover(Some(&bucket.into()));
        session.drop(Some(&bucket.into()));
        print_step(&session, item, bucket);
    }

    let verdict = session.completion();
    println!();
    if verdict.is_complete {
        println!(
            "{} Exercise complete, score {}",
            "✔".bright_green(),
            verdict.score.to_string().bright_green().bold()
        );
    } else {
        println!(
            "{} Exercise incomplete, score {}",
            "✘".bright_red(),
            verdict.score.to_string().bright_red()
        );
    }
}

fn print_step(session: &ExerciseSession<ExerciseJudge>, item: &str, bucket: &str) {
    let verdict = session.completion();
    let entry = verdict
        .target(&bucket.into())
        .expect("scripted bucket exists");
    let marker = if entry.matched {
        "·".bright_green().to_string()
    } else {
        "!".bright_red().to_string()
    };
    println!(
        "{marker} {} -> {} ({} unplaced)",
        item.bright_white(),
        bucket.bright_blue(),
        session.unplaced_items().len()
    );
}
