//! Tailor CLI
//!
//! Command-line front end for the shop's order tracker: billing at the
//! counter and the per-department work queues.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use tailor_core::{models::OrderFilter, WorkshopBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let workshop = WorkshopBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to open the order store")?;

    let cli = Cli::new(workshop, TerminalRenderer::new(!no_color));

    info!("Tailor started");

    match command {
        Some(Order { command }) => cli.handle_order_command(command).await,
        Some(Queue(args)) => cli.show_queue(&args.into()).await,
        Some(Claim(args)) => cli.claim_order(&args).await,
        Some(Complete(args)) => cli.complete_order(&args).await,
        Some(Release(args)) => cli.release_order(&args).await,
        Some(Watch(args)) => cli.watch_queue(args).await,
        Some(Customer { command }) => cli.handle_customer_command(command).await,
        Some(Report { command }) => cli.handle_report_command(command).await,
        None => cli.list_orders(&OrderFilter::default()).await,
    }
}
