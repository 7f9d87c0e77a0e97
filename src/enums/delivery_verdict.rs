/// Aggregate result of one fan-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryVerdict {
    AllSucceeded,
    PartialFailure {
        succeeded: usize,
        total: usize,
        errors: Vec<String>,
    },
    AllFailed { errors: Vec<String> },
}
