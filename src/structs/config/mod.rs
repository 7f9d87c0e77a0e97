pub mod feishu_section;
pub mod notification_config;
