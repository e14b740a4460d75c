mod dashboard_service;
mod ingest_service;

pub use dashboard_service::*;
pub use ingest_service::*;
