pub mod feishu_notifier;
pub mod reqwest_transport;
