use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    CustomerCommands, OrderCommands, QueueArgs, ReportCommands, WatchArgs, WorkerActionArgs,
};

/// Order tracking for a tailoring shop
///
/// Bills orders at the front desk and moves them through the workshop:
/// cutting, blouse or dress stitching, finishing and ironing. Each department
/// sees its own queue, claims orders from it and marks them done; the
/// customer is notified when an order is ready for pickup.
#[derive(Parser)]
#[command(version, about, name = "tailor")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/tailor/tailor.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
///
/// Front desk work lives under `order` and `customer`; department stations
/// use `queue`, `claim`, `complete`, `release` and `watch`.
#[derive(Subcommand)]
pub enum Commands {
    /// Bill, inspect and dispatch orders
    #[command(alias = "o")]
    Order {
        #[command(subcommand)]
        command: OrderCommands,
    },
    /// Show a department's work queue
    #[command(alias = "q")]
    Queue(QueueArgs),
    /// Take an order from your department's queue
    Claim(WorkerActionArgs),
    /// Mark your stage of an order done and pass it on
    #[command(alias = "done")]
    Complete(WorkerActionArgs),
    /// Give a claimed order back to the queue
    Release(WorkerActionArgs),
    /// Keep a department's queue on screen, refreshing until interrupted
    Watch(WatchArgs),
    /// Look up customers and their balances
    #[command(alias = "c")]
    Customer {
        #[command(subcommand)]
        command: CustomerCommands,
    },
    /// Data-quality reports
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
}
