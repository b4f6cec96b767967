use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Provider tag reported in every successful chat response.
pub const PROVIDER_NAME: &str = "Groq AI";

/// The outbound success payload for a chat request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    response: String,
    timestamp: String,
    provider: &'static str,
}

impl ChatReply {
    pub fn new(response: impl Into<String>) -> Self {
        Self::at(response, Utc::now())
    }

    pub fn at(response: impl Into<String>, when: DateTime<Utc>) -> Self {
        Self {
            response: response.into(),
            timestamp: when.to_rfc3339_opts(SecondsFormat::Millis, true),
            provider: PROVIDER_NAME,
        }
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_with_provider_and_timestamp() {
        let when = Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap();
        let reply = ChatReply::at("hello", when);
        let value = serde_json::to_value(&reply).unwrap();

        assert_eq!(value["response"], "hello");
        assert_eq!(value["provider"], "Groq AI");
        assert_eq!(value["timestamp"], "2025-06-01T12:30:00.000Z");
    }

    #[test]
    fn timestamp_is_valid_rfc3339() {
        let reply = ChatReply::new("hi");
        assert!(DateTime::parse_from_rfc3339(reply.timestamp()).is_ok());
    }
}
