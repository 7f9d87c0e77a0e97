pub mod cli;
pub mod config;
pub mod delivery_report;
pub mod transport_response;
pub mod webhook_target;
