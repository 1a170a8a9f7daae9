//! The data model shared between the medtrack backend and the web UI crates.
//!
//! Nothing in here touches the browser, so it's all testable natively.

#![deny(warnings)]
#![warn(unused_extern_crates)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]
#![deny(clippy::await_holding_lock)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::trivially_copy_pass_by_ref)]

pub mod constants;
pub mod models;

pub use models::{DataError, MedicineId, MedicineList, MedicineRecord, ReminderSummary};
