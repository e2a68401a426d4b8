//! Transcript message types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use souq_catalog::Product;
use uuid::Uuid;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The customer.
    User,
    /// The assistant.
    Model,
}

/// One entry in the conversation transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique message identifier.
    pub id: Uuid,
    /// Who authored the message.
    pub role: Role,
    /// The message text.
    pub text: String,
    /// Photo attachment as a base64 data URL, when the user sent one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// When the message was created.
    pub timestamp: DateTime<Utc>,
    /// Products to render as cards under an assistant reply.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggested_products: Vec<Product>,
}

impl Message {
    /// Build a user message for the current instant.
    pub fn user(text: impl Into<String>, image: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            text: text.into(),
            image,
            timestamp: Utc::now(),
            suggested_products: Vec::new(),
        }
    }

    /// Build an assistant reply for the current instant.
    pub fn model(text: impl Into<String>, suggested_products: Vec<Product>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Model,
            text: text.into(),
            image: None,
            timestamp: Utc::now(),
            suggested_products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&Role::Model).unwrap(), r#""model""#);
    }

    #[test]
    fn empty_card_list_is_omitted_from_json() {
        let message = Message::user("مرحبا", None);
        let json = serde_json::to_value(&message).unwrap();
        assert!(json.get("suggested_products").is_none());
        assert!(json.get("image").is_none());
    }

    #[test]
    fn messages_get_distinct_ids() {
        assert_ne!(Message::user("a", None).id, Message::user("a", None).id);
    }
}
