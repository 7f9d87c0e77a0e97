//! Send text, markdown and rich-text messages to Feishu group bots.
//!
//! [`config::config_manager::ConfigManager`] loads and validates the
//! webhook list, [`services::feishu_notifier::FeishuNotifier`] fans a
//! message out to every webhook and reports a single verdict.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
