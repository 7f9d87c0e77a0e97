use crate::enums::delivery_failure::DeliveryFailure;
use crate::enums::delivery_verdict::DeliveryVerdict;
use crate::errors::{FeishuError, FeishuResult};

/// Result of one attempt against one webhook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryOutcome {
    /// Zero-based position in the webhook list.
    pub index: usize,
    /// Masked webhook URL.
    pub target: String,
    pub result: Result<(), DeliveryFailure>,
}

impl DeliveryOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub outcomes: Vec<DeliveryOutcome>,
}

impl DeliveryReport {
    pub fn new(mut outcomes: Vec<DeliveryOutcome>) -> Self {
        outcomes.sort_by_key(|o| o.index);
        Self { outcomes }
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// One line per failed target, e.g. `webhook 2/3 failed: timeout`.
    pub fn failure_messages(&self) -> Vec<String> {
        let total = self.total();
        self.outcomes
            .iter()
            .filter_map(|o| {
                o.result
                    .as_ref()
                    .err()
                    .map(|failure| format!("webhook {}/{} failed: {}", o.index + 1, total, failure))
            })
            .collect()
    }

    pub fn verdict(&self) -> DeliveryVerdict {
        let succeeded = self.succeeded();
        let total = self.total();

        if succeeded == total {
            DeliveryVerdict::AllSucceeded
        } else if succeeded == 0 {
            DeliveryVerdict::AllFailed { errors: self.failure_messages() }
        } else {
            DeliveryVerdict::PartialFailure {
                succeeded,
                total,
                errors: self.failure_messages(),
            }
        }
    }

    /// `Ok(true)` when every webhook accepted the message, otherwise a
    /// single aggregated [`FeishuError::DeliveryFailed`].
    pub fn into_result(self) -> FeishuResult<bool> {
        let total = self.total();
        match self.verdict() {
            DeliveryVerdict::AllSucceeded => Ok(true),
            DeliveryVerdict::AllFailed { errors } => Err(FeishuError::DeliveryFailed {
                succeeded: 0,
                total,
                errors,
            }),
            DeliveryVerdict::PartialFailure { succeeded, total, errors } => Err(FeishuError::DeliveryFailed {
                succeeded,
                total,
                errors,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(index: usize, result: Result<(), DeliveryFailure>) -> DeliveryOutcome {
        DeliveryOutcome { index, target: format!("hook-{}", index), result }
    }

    #[test]
    fn test_all_succeeded() {
        let report = DeliveryReport::new(vec![outcome(0, Ok(())), outcome(1, Ok(()))]);
        assert_eq!(report.verdict(), DeliveryVerdict::AllSucceeded);
        assert!(report.into_result().unwrap());
    }

    #[test]
    fn test_partial_failure_counts_and_orders() {
        let report = DeliveryReport::new(vec![
            outcome(2, Err(DeliveryFailure::Timeout)),
            outcome(0, Ok(())),
            outcome(1, Ok(())),
        ]);

        assert_eq!(report.outcomes[0].index, 0);
        assert_eq!(
            report.verdict(),
            DeliveryVerdict::PartialFailure {
                succeeded: 2,
                total: 3,
                errors: vec!["webhook 3/3 failed: timeout".to_string()],
            }
        );

        let err = report.into_result().unwrap_err();
        assert!(err.to_string().contains("2/3 succeeded"));
    }

    #[test]
    fn test_all_failed() {
        let report = DeliveryReport::new(vec![
            outcome(0, Err(DeliveryFailure::HttpStatus { status: 500, body: "oops".into() })),
            outcome(1, Err(DeliveryFailure::Connection("refused".into()))),
        ]);

        let err = report.into_result().unwrap_err();
        assert_eq!(
            err.to_string(),
            "all webhooks failed: webhook 1/2 failed: HTTP 500: oops; webhook 2/2 failed: connection failed: refused"
        );
    }
}
