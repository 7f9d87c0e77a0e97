pub mod commands;
pub mod config_action;
pub mod delivery_failure;
pub mod delivery_verdict;
pub mod message_payload;
