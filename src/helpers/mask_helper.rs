use crate::config::constants::{MASK_LONG_KEEP, MASK_SHORT_KEEP, MASK_SHORT_URL_MAX_LEN};

pub struct MaskHelper;

impl MaskHelper {
    /// Partially redacts a webhook URL for display.
    ///
    /// URLs of at most 50 characters keep their first 10 and last 10
    /// characters, longer ones keep the first 20 and last 15. Counting is
    /// done in characters, not bytes.
    pub fn mask_webhook(webhook: &str) -> String {
        let chars: Vec<char> = webhook.chars().collect();
        let (head, tail) = if chars.len() <= MASK_SHORT_URL_MAX_LEN {
            MASK_SHORT_KEEP
        } else {
            MASK_LONG_KEEP
        };

        let prefix: String = chars.iter().take(head).collect();
        let suffix: String = chars[chars.len().saturating_sub(tail)..].iter().collect();

        format!("{}...{}", prefix, suffix)
    }
}
