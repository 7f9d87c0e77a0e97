use thiserror::Error;

/// Why a single webhook did not accept a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryFailure {
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Feishu API error {code}: {msg}")]
    Api { code: String, msg: String },

    #[error("unexpected response body: {0}")]
    UnexpectedBody(String),

    #[error("timeout")]
    Timeout,

    #[error("connection failed: {0}")]
    Connection(String),

    #[error("transport error: {0}")]
    Transport(String),
}
