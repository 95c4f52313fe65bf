use gloo_net::http::Request;
use log::{debug, error};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

pub const SYSTEM_INSTRUCTION: &str = r#"You are a helpful, friendly, and professional assistant for Co-Create.
Co-Create is a service ("The Utility Layer for Creator Marketing") that helps small e-commerce businesses pool resources to afford influencer marketing.

Key details about Co-Create:
- Cost: $99 per slot (flat rate).
- What it is: Non-competing brands pool into one viral-style "Haul" video.
- The Offer: Get your product on TikTok. Guaranteed.
- Process: 1. Book a slot. 2. Ship product to Kitchener, ON. 3. Watch the video (you get the raw file + usage rights).
- Guarantee: Vetted creators with >3% engagement. You get a guaranteed post.
- Returns: No returns, products are gifts to creators.
- Contact: hello@joincocreate.ca for support.

Answer questions concisely. If asked about booking, direct them to click the "Claim a Slot" button.
Do not make up facts not in this prompt. If unsure, ask them to email hello@joincocreate.ca.
Tone: Efficient, trustworthy, "Linear-style" professional."#;

pub const GREETING: &str =
    "Hi there! I can help you with questions about how Co-Create works, shipping, or our guarantee.";
pub const EMPTY_REPLY_TEXT: &str = "I'm sorry, I couldn't generate a response.";
pub const FAILURE_TEXT: &str = "Sorry, something went wrong. Please try emailing us instead.";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChatError {
    #[error("no chat API key was configured at build time")]
    MissingApiKey,
    #[error("chat request failed: {0}")]
    Network(String),
    #[error("chat service returned status {0}")]
    Status(u16),
    #[error("chat response could not be parsed: {0}")]
    Decode(String),
    #[error("chat service returned no text")]
    EmptyReply,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Part {
    pub text: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    fn text(role: Option<&str>, text: &str) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![Part { text: text.to_string() }],
        }
    }
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub system_instruction: Content,
    pub contents: Vec<Content>,
}

#[derive(Deserialize, Debug, Default)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Deserialize, Debug, Default)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateResponse {
    /// Text of the first candidate, parts joined.
    pub fn reply(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content.parts.iter().map(|p| p.text.as_str()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// A conversation with the assistant. Holds the exchange so far; every
/// request resends it together with the system instruction.
#[derive(Clone, Debug)]
pub struct ChatSession {
    api_key: String,
    history: Vec<Content>,
}

/// A request detached from the session, so no borrow lives across an await.
pub struct PreparedMessage {
    url: String,
    body: GenerateRequest,
}

impl ChatSession {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            history: Vec::new(),
        }
    }

    pub fn from_config() -> Result<Self, ChatError> {
        config::chat_api_key()
            .map(Self::new)
            .ok_or(ChatError::MissingApiKey)
    }

    pub fn history(&self) -> &[Content] {
        &self.history
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            config::CHAT_API_BASE,
            config::CHAT_MODEL,
            urlencoding::encode(&self.api_key)
        )
    }

    pub fn prepare(&self, message: &str) -> PreparedMessage {
        let mut contents = self.history.clone();
        contents.push(Content::text(Some("user"), message));
        PreparedMessage {
            url: self.endpoint(),
            body: GenerateRequest {
                system_instruction: Content::text(None, SYSTEM_INSTRUCTION),
                contents,
            },
        }
    }

    /// Only successful turns join the history.
    pub fn record(&mut self, message: &str, reply: &str) {
        self.history.push(Content::text(Some("user"), message));
        self.history.push(Content::text(Some("model"), reply));
    }
}

pub async fn generate(prepared: PreparedMessage) -> Result<String, ChatError> {
    debug!("Sending chat turn with {} messages", prepared.body.contents.len());
    let response = Request::post(&prepared.url)
        .json(&prepared.body)
        .map_err(|e| ChatError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ChatError::Network(e.to_string()))?;

    if !response.ok() {
        error!("Chat service returned {}", response.status());
        return Err(ChatError::Status(response.status()));
    }

    response
        .json::<GenerateResponse>()
        .await
        .map_err(|e| ChatError::Decode(e.to_string()))?
        .reply()
        .ok_or(ChatError::EmptyReply)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_instruction_and_history() {
        let mut session = ChatSession::new("k");
        session.record("How much?", "$99 per slot.");
        let prepared = session.prepare("Where do I ship?");

        let json = serde_json::to_value(&prepared.body).unwrap();
        assert!(json["systemInstruction"]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .starts_with("You are a helpful"));
        assert!(json["systemInstruction"].get("role").is_none());
        let contents = json["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[2]["parts"][0]["text"], "Where do I ship?");
    }

    #[test]
    fn preparing_does_not_touch_history() {
        let session = ChatSession::new("k");
        let _ = session.prepare("hello");
        assert!(session.history().is_empty());
    }

    #[test]
    fn endpoint_names_model_and_key() {
        let prepared = ChatSession::new("abc").prepare("hi");
        assert_eq!(
            prepared.url,
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-pro-preview:generateContent?key=abc"
        );
    }

    #[test]
    fn reply_is_first_candidate_text() {
        let raw = r#"{"candidates":[
            {"content":{"role":"model","parts":[{"text":"Ship to "},{"text":"Kitchener, ON."}]}},
            {"content":{"role":"model","parts":[{"text":"ignored"}]}}
        ]}"#;
        let response: GenerateResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.reply().as_deref(), Some("Ship to Kitchener, ON."));
    }

    #[test]
    fn blank_or_missing_reply_is_none() {
        let blocked: GenerateResponse = serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert_eq!(blocked.reply(), None);
        let empty: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.reply(), None);
    }
}
