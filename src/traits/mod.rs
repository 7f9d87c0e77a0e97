pub mod webhook_transport;
