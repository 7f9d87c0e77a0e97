use serde::Serialize;
use serde_json::{json, Value};

/// Body posted to a Feishu bot webhook.
///
/// Serializes as `{"msg_type": "text", "content": {"text": ...}}` or
/// `{"msg_type": "post", "content": {"post": ...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "msg_type", content = "content", rename_all = "snake_case")]
pub enum MessagePayload {
    Text { text: String },
    Post { post: Value },
}

impl MessagePayload {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn post(content: Value) -> Self {
        Self::Post { post: content }
    }

    /// A post whose only paragraph is a markdown element.
    pub fn markdown(text: impl Into<String>) -> Self {
        Self::post(json!({
            "zh_cn": {
                "title": "",
                "content": [[{ "tag": "md", "text": text.into() }]]
            }
        }))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text { .. } => "text",
            Self::Post { .. } => "post",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_wire_shape() {
        let payload = serde_json::to_value(MessagePayload::text("hi")).unwrap();
        assert_eq!(payload, json!({"msg_type": "text", "content": {"text": "hi"}}));
    }

    #[test]
    fn test_post_wire_shape() {
        let content = json!({"zh_cn": {"title": "T", "content": []}});
        let payload = serde_json::to_value(MessagePayload::post(content.clone())).unwrap();
        assert_eq!(payload, json!({"msg_type": "post", "content": {"post": content}}));
    }

    #[test]
    fn test_markdown_is_post_with_md_element() {
        let payload = MessagePayload::markdown("**bold**");
        assert_eq!(payload.kind(), "post");

        let value = serde_json::to_value(payload).unwrap();
        assert_eq!(value["content"]["post"]["zh_cn"]["content"][0][0]["tag"], "md");
        assert_eq!(value["content"]["post"]["zh_cn"]["content"][0][0]["text"], "**bold**");
    }
}
