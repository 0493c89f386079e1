// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! RTPS message classifier CLI
//!
//! # Usage
//!
//! ```bash
//! # Topics to send and to receive
//! rtps-classifier -s -r
//!
//! # Message files of ignored topics
//! rtps-classifier --ignore --path
//!
//! # Custom msg dir and id file, rejecting duplicate names
//! rtps-classifier -s -m px4/msg -y tools/ids.yaml --strict
//! ```

use anyhow::Context;
use clap::{Parser, ValueEnum};
use rtps_classifier::{paths, report, Category, Classifier, DuplicatePolicy, ReportKind};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Classify RTPS topics as sent, received or ignored
#[derive(Parser, Debug)]
#[command(name = "rtps-classifier")]
#[command(version, about)]
struct Args {
    /// Get topics to be sent
    #[arg(short, long)]
    send: bool,

    /// Get topics to be received
    #[arg(short, long)]
    receive: bool,

    /// Get topics to be ignored
    #[arg(short, long)]
    ignore: bool,

    /// Report message file paths instead of topic names
    #[arg(short, long)]
    path: bool,

    /// Topics message dir
    #[arg(short = 'm', long = "topic-msg-dir", default_value = "msg")]
    msg_dir: PathBuf,

    /// RTPS msg IDs definition file, relative to the msg dir
    #[arg(
        short = 'y',
        long = "rtps-ids-file",
        default_value = "tools/uorb_rtps_message_ids.yaml"
    )]
    ids_file: PathBuf,

    /// Reject message names listed twice in the same list
    #[arg(long)]
    strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let msg_folder = paths::absolutize(&args.msg_dir)
        .with_context(|| format!("cannot resolve msg dir {}", args.msg_dir.display()))?;
    let ids_file = msg_folder.join(&args.ids_file);

    let policy = if args.strict {
        DuplicatePolicy::Reject
    } else {
        DuplicatePolicy::Overwrite
    };
    let classifier = Classifier::from_file(&ids_file, &msg_folder, policy)
        .with_context(|| format!("failed to load {}", ids_file.display()))?;

    let selected: Vec<Category> = [
        (args.send, Category::Send),
        (args.receive, Category::Receive),
        (args.ignore, Category::Ignore),
    ]
    .into_iter()
    .filter_map(|(wanted, category)| wanted.then_some(category))
    .collect();

    let kind = if args.path {
        ReportKind::Files
    } else {
        ReportKind::Topics
    };

    match args.format {
        OutputFormat::Text => {
            for category in selected {
                println!("{}", report::render_line(&classifier, category, kind));
            }
        }
        OutputFormat::Json => {
            let json = report::render_json(&classifier, &selected, kind);
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    Ok(())
}
