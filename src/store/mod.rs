pub mod report_store;
pub mod snapshot;
