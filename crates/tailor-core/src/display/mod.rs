//! Display formatting and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds newtype wrappers for collections and operation results
//! so each output context formats consistently. Everything renders as
//! markdown for the CLI's terminal renderer.
//!
//! - [`collections`]: order lists, department queues, the customer ledger
//! - [`results`]: create/update results and completion outcomes
//! - [`status`]: one-line confirmations and warnings
//! - [`datetime`]: timestamp formatting in the system timezone
//! - [`models`]: Display implementations for domain models
//!
//! # Examples
//!
//! ```rust
//! use tailor_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Order ST000001 claimed");
//! assert_eq!(status.to_string(), "Success: Order ST000001 claimed\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Customers, Orders, Queue};
pub use datetime::LocalDateTime;
pub use models::OrderSummary;
pub use results::{CreateResult, UpdateResult};
pub use status::{OperationStatus, StatusKind};
