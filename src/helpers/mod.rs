pub mod config_helper;
pub mod mask_helper;
pub mod message_formatter;
