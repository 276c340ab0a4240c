//! Trackboard API client: typed calls, error taxonomy, fan-out helpers.

pub mod client;
pub mod error;

pub use client::{
    copy_entries, create_dataset, create_entry, delete_dataset, delete_entry, fetch_dataset,
    fetch_datasets, fetch_entries, fetch_graph_entries, log_error, settle_all, update_dataset,
    update_entry, FanOutTally, GraphKind, DEFAULT_API_BASE,
};
pub use error::{ApiError, ApiResult};
