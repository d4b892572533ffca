//! Subcommand arguments and their handlers.
//!
//! Argument structs carry the clap derives and convert into the parameter
//! types of `tailor_core::params`; [`Cli`] runs the converted parameters
//! against a [`Workshop`] and renders the formatted result.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Workshop → Display → Renderer
//! ```

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Subcommand};
use jiff::{civil::Date, Zoned};
use rust_decimal::Decimal;
use tailor_core::{
    display::OperationStatus,
    models::{Department, GarmentType, OrderFilter, OrderStatus, Worker},
    params::{CreateOrder, Id, RecordAdvance},
    queue::{QueueQuery, SortDirection, SortKey},
    workshop::watch::DEFAULT_POLL_INTERVAL,
    BillDraft, Workshop,
};

use crate::renderer::TerminalRenderer;

/// Order management commands
#[derive(Subcommand)]
pub enum OrderCommands {
    /// Bill a new order
    #[command(alias = "new")]
    Create(CreateOrderArgs),
    /// Show one order in full
    Show(ShowOrderArgs),
    /// List orders across the pipeline
    #[command(alias = "ls")]
    List(ListOrdersArgs),
    /// Send a pending order into production
    Dispatch(ShowOrderArgs),
    /// Record the total advance paid on an order
    Advance(AdvanceArgs),
}

/// Customer ledger commands
#[derive(Subcommand)]
pub enum CustomerCommands {
    /// Show a customer and their carried balance
    Show(ShowCustomerArgs),
    /// List every customer
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Orders in production that no department queue shows
    Unroutable,
}

/// One item given on the command line as `GARMENT[:QTY[:RATE]]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSpec {
    pub cloth_type: String,
    pub qty: u32,
    pub rate: Decimal,
}

fn parse_item(value: &str) -> std::result::Result<ItemSpec, String> {
    let mut parts = value.split(':');
    let cloth_type = parts.next().unwrap_or_default().trim();
    if cloth_type.is_empty() {
        return Err("garment type is required".to_string());
    }
    let qty = match parts.next() {
        Some(qty) => qty
            .trim()
            .parse()
            .map_err(|_| format!("invalid quantity '{qty}'"))?,
        None => 1,
    };
    let rate = match parts.next() {
        Some(rate) => rate
            .trim()
            .parse()
            .map_err(|_| format!("invalid rate '{rate}'"))?,
        None => Decimal::ZERO,
    };
    if parts.next().is_some() {
        return Err(format!("expected GARMENT[:QTY[:RATE]], got '{value}'"));
    }
    Ok(ItemSpec {
        cloth_type: cloth_type.to_string(),
        qty,
        rate,
    })
}

/// A measurement given as `ITEM:FIELD=VALUE`, with 1-based item positions.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementSpec {
    pub item: usize,
    pub field: String,
    pub value: String,
}

fn parse_measurement(value: &str) -> std::result::Result<MeasurementSpec, String> {
    let (item, rest) = value
        .split_once(':')
        .ok_or_else(|| format!("expected ITEM:FIELD=VALUE, got '{value}'"))?;
    let (field, measured) = rest
        .split_once('=')
        .ok_or_else(|| format!("expected ITEM:FIELD=VALUE, got '{value}'"))?;
    let item: usize = item
        .trim()
        .parse()
        .map_err(|_| format!("invalid item position '{item}'"))?;
    if item == 0 {
        return Err("item positions start at 1".to_string());
    }
    Ok(MeasurementSpec {
        item,
        field: field.trim().to_string(),
        value: measured.trim().to_string(),
    })
}

/// Bill a new order
///
/// Items are entered as `GARMENT[:QTY[:RATE]]`, for example `Blouse:2:450`.
/// Without `--previous-balance` the balance of the customer's last bill is
/// carried over.
#[derive(Args)]
pub struct CreateOrderArgs {
    /// Customer name
    #[arg(long, help = "Customer name as printed on the bill")]
    pub name: String,
    /// Customer mobile number
    #[arg(long, help = "Customer mobile number, used to find earlier bills")]
    pub mobile: String,
    #[arg(
        short,
        long = "item",
        value_parser = parse_item,
        required = true,
        help = "Billed item as GARMENT[:QTY[:RATE]]; repeat for more items"
    )]
    pub items: Vec<ItemSpec>,
    #[arg(
        short,
        long = "measure",
        value_parser = parse_measurement,
        help = "Measurement as ITEM:FIELD=VALUE, e.g. 1:Length=38"
    )]
    pub measurements: Vec<MeasurementSpec>,
    #[arg(long, default_value_t = Decimal::ZERO, help = "Advance paid at the counter")]
    pub advance: Decimal,
    #[arg(long, help = "Balance carried from earlier bills")]
    pub previous_balance: Option<Decimal>,
    #[arg(long, help = "Promised delivery date (YYYY-MM-DD)")]
    pub delivery: Option<Date>,
    #[arg(long, help = "Design notes for the workshop")]
    pub instructions: Option<String>,
}

impl TryFrom<CreateOrderArgs> for CreateOrder {
    type Error = tailor_core::ShopError;

    fn try_from(val: CreateOrderArgs) -> tailor_core::Result<Self> {
        let mut draft = BillDraft::new(val.name, val.mobile);
        for item in val.items {
            draft.add_item(item.cloth_type, item.qty, item.rate);
        }
        for measurement in val.measurements {
            draft.set_measurement(measurement.item - 1, measurement.field, measurement.value)?;
        }
        draft.set_advance(val.advance);
        if let Some(previous_balance) = val.previous_balance {
            draft.set_previous_balance(previous_balance);
        }
        draft.set_delivery_date(val.delivery);
        if let Some(instructions) = val.instructions {
            draft.set_instructions(instructions);
        }

        let mut params = draft.into_params()?;
        params.previous_balance = val.previous_balance;
        Ok(params)
    }
}

/// Show or dispatch one order
#[derive(Args)]
pub struct ShowOrderArgs {
    #[arg(help = "Order ID")]
    pub id: u64,
}

impl From<ShowOrderArgs> for Id {
    fn from(val: ShowOrderArgs) -> Self {
        Id { id: val.id }
    }
}

/// List orders
///
/// Every filter narrows the list; without filters all orders are shown.
#[derive(Args)]
pub struct ListOrdersArgs {
    #[arg(long, help = "Only orders at this status (pending, cutting, ...)")]
    pub status: Option<OrderStatus>,
    #[arg(long, help = "Only orders with at least one item of this garment")]
    pub garment: Option<GarmentType>,
    #[arg(long, help = "Only orders currently held by this worker")]
    pub worker_id: Option<String>,
    #[arg(long, help = "Only orders for this mobile number")]
    pub mobile: Option<String>,
    #[arg(long, help = "Only orders billed on this day (YYYY-MM-DD)")]
    pub date: Option<Date>,
    #[arg(long, conflicts_with = "date", help = "Only orders billed today")]
    pub today: bool,
}

impl From<ListOrdersArgs> for OrderFilter {
    fn from(val: ListOrdersArgs) -> Self {
        let bill_date = if val.today {
            Some(Zoned::now().date())
        } else {
            val.date
        };
        OrderFilter {
            status: val.status,
            garment: val.garment,
            worker_id: val.worker_id,
            mobile: val.mobile,
            bill_date,
        }
    }
}

/// Record an advance
#[derive(Args)]
pub struct AdvanceArgs {
    #[arg(help = "Order ID")]
    pub id: u64,
    #[arg(help = "Total advance paid so far")]
    pub amount: Decimal,
}

impl From<AdvanceArgs> for RecordAdvance {
    fn from(val: AdvanceArgs) -> Self {
        RecordAdvance {
            order_id: val.id,
            advance: val.amount,
        }
    }
}

/// Show a department's queue
#[derive(Args)]
pub struct QueueArgs {
    #[arg(help = "Department: cutting, blouse-stitching, dress-stitching, finishing, ironing")]
    pub department: Department,
    #[arg(short, long, help = "Match bill number or customer name")]
    pub search: Option<String>,
    #[arg(long, help = "Sort column (bill-no, customer, mobile, delivery-date, ...)")]
    pub sort: Option<SortKey>,
    #[arg(long, help = "Sort descending")]
    pub desc: bool,
}

impl From<QueueArgs> for QueueQuery {
    fn from(val: QueueArgs) -> Self {
        let mut query = QueueQuery::new(val.department);
        if let Some(search) = val.search {
            query = query.with_search(search);
        }
        if let Some(sort) = val.sort {
            let direction = if val.desc {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
            query = query.sorted_by(sort, direction);
        }
        query
    }
}

/// Act on an order from a department station
#[derive(Args)]
pub struct WorkerActionArgs {
    #[arg(help = "Order ID")]
    pub id: u64,
    #[arg(long, help = "Identifier of the acting worker")]
    pub worker_id: String,
    #[arg(long, help = "Display name of the acting worker (defaults to the ID)")]
    pub worker_name: Option<String>,
    #[arg(long, help = "Department the worker serves")]
    pub station: Department,
}

impl WorkerActionArgs {
    pub fn worker(&self) -> Worker {
        let name = self
            .worker_name
            .clone()
            .unwrap_or_else(|| self.worker_id.clone());
        Worker::new(self.worker_id.clone(), name, self.station)
    }
}

/// Watch a department's queue
#[derive(Args)]
pub struct WatchArgs {
    #[arg(help = "Department to watch")]
    pub department: Department,
    #[arg(short, long, help = "Match bill number or customer name")]
    pub search: Option<String>,
    #[arg(
        long,
        default_value_t = DEFAULT_POLL_INTERVAL.as_millis() as u64,
        help = "Refresh interval in milliseconds"
    )]
    pub interval_ms: u64,
}

#[derive(Args)]
pub struct ShowCustomerArgs {
    #[arg(help = "Customer mobile number")]
    pub mobile: String,
}

/// Runs commands against a workshop and renders their output.
pub struct Cli {
    workshop: Workshop,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(workshop: Workshop, renderer: TerminalRenderer) -> Self {
        Self { workshop, renderer }
    }

    pub async fn handle_order_command(&self, command: OrderCommands) -> Result<()> {
        match command {
            OrderCommands::Create(args) => self.create_order(args).await,
            OrderCommands::Show(args) => self.show_order(&args.into()).await,
            OrderCommands::List(args) => self.list_orders(&args.into()).await,
            OrderCommands::Dispatch(args) => self.dispatch_order(&args.into()).await,
            OrderCommands::Advance(args) => self.record_advance(&args.into()).await,
        }
    }

    pub async fn handle_customer_command(&self, command: CustomerCommands) -> Result<()> {
        match command {
            CustomerCommands::Show(args) => self.show_customer(&args.mobile).await,
            CustomerCommands::List => {
                let customers = self.workshop.customers_view().await?;
                self.renderer.render(&customers.to_string())
            }
        }
    }

    pub async fn handle_report_command(&self, command: ReportCommands) -> Result<()> {
        match command {
            ReportCommands::Unroutable => {
                let orders = self.workshop.unroutable_view().await?;
                if orders.is_empty() {
                    let status = OperationStatus::success("Every order in production is queued");
                    return self.renderer.render(&status.to_string());
                }
                self.renderer.render(&orders.to_string())
            }
        }
    }

    async fn create_order(&self, args: CreateOrderArgs) -> Result<()> {
        let params = CreateOrder::try_from(args)?;
        let result = self
            .workshop
            .create_order_result(&params)
            .await
            .context("Failed to create order")?;
        self.renderer.render(&result.to_string())
    }

    async fn show_order(&self, params: &Id) -> Result<()> {
        let order = self
            .workshop
            .get_order(params.id)
            .await?
            .ok_or_else(|| anyhow!("Order with ID {} not found", params.id))?;
        self.renderer.render(&order.to_string())
    }

    /// List orders matching a filter.
    pub async fn list_orders(&self, filter: &OrderFilter) -> Result<()> {
        let orders = self.workshop.orders_view(filter).await?;
        self.renderer.render(&orders.to_string())
    }

    async fn dispatch_order(&self, params: &Id) -> Result<()> {
        let result = self.workshop.dispatch_order_result(params.id).await?;
        self.renderer.render(&result.to_string())
    }

    async fn record_advance(&self, params: &RecordAdvance) -> Result<()> {
        let result = self.workshop.record_advance_result(params).await?;
        self.renderer.render(&result.to_string())
    }

    async fn show_customer(&self, mobile: &str) -> Result<()> {
        let customer = self
            .workshop
            .find_customer(mobile)
            .await?
            .ok_or_else(|| anyhow!("No customer with mobile {mobile}"))?;
        self.renderer.render(&customer.to_string())
    }

    pub async fn show_queue(&self, query: &QueueQuery) -> Result<()> {
        let queue = self.workshop.queue_view(query).await?;
        self.renderer.render(&queue.to_string())
    }

    pub async fn claim_order(&self, args: &WorkerActionArgs) -> Result<()> {
        let result = self
            .workshop
            .claim_order_result(args.id, &args.worker())
            .await?;
        self.renderer.render(&result.to_string())
    }

    pub async fn complete_order(&self, args: &WorkerActionArgs) -> Result<()> {
        let outcome = self
            .workshop
            .complete_order(args.id, &args.worker())
            .await?;
        self.renderer.render(&outcome.to_string())
    }

    pub async fn release_order(&self, args: &WorkerActionArgs) -> Result<()> {
        let result = self
            .workshop
            .release_order_result(args.id, &args.worker())
            .await?;
        self.renderer.render(&result.to_string())
    }

    /// Re-renders the queue on every change until Ctrl-C.
    pub async fn watch_queue(&self, args: WatchArgs) -> Result<()> {
        let mut query = QueueQuery::new(args.department);
        if let Some(search) = args.search {
            query = query.with_search(search);
        }
        let interval = Duration::from_millis(args.interval_ms);

        let mut watch = self
            .workshop
            .watch_queue(query, interval)
            .await
            .context("Failed to start queue watch")?;
        self.render_snapshot(args.department, watch.latest().orders)?;

        loop {
            tokio::select! {
                snapshot = watch.changed() => match snapshot {
                    Some(snapshot) => self.render_snapshot(args.department, snapshot.orders)?,
                    None => break,
                },
                signal = tokio::signal::ctrl_c() => {
                    signal.context("Failed to listen for Ctrl-C")?;
                    break;
                }
            }
        }

        watch.stop().await;
        log::info!("Stopped watching {}", args.department);
        Ok(())
    }

    fn render_snapshot(
        &self,
        department: Department,
        orders: Vec<tailor_core::Order>,
    ) -> Result<()> {
        let queue = tailor_core::display::Queue::new(department, orders);
        self.renderer.render(&queue.to_string())?;
        println!();
        Ok(())
    }
}
