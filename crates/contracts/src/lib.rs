//! Wire contracts of the sales analytics API.
//!
//! Every type here mirrors a JSON payload sent to or received from the
//! analytics backend, plus the filter model the dashboard reads its inputs into.

pub mod dashboards;
pub mod shared;
pub mod usecases;
