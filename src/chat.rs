//! Chat log bookkeeping and the generative-text API call behind the chatbot
//! widget.

use chrono::{DateTime, Local};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;

pub const GREETING: &str = "Hi! I'm your InjuryShield assistant. How can I help you today?";
pub const FALLBACK_REPLY: &str = "Sorry, I'm currently unable to respond. Please try again later.";

/// Pause before the request goes out, so the reply doesn't land instantly.
pub const REPLY_DELAY_MS: u32 = 300;
pub const TYPING_INTERVAL_MS: u32 = 25;

const SYSTEM_PROMPT: &str = "You are InjuryShield's AI assistant, a professional, helpful, and friendly expert.
You can answer:
- InjuryShield-specific questions (real-time biomechanical analysis, injury prediction, training optimization, etc.)
- General sports science and injury prevention queries
- Broader AI/tech-related or unrelated questions, but always gently promote InjuryShield when possible.
Remain professional and supportive.";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("no chat API key configured")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("API returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("API reply contained no text")]
    EmptyReply,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: usize,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

/// Messages in display order, ids starting at 1.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn with_greeting(now: DateTime<Local>) -> Self {
        let mut log = Self { messages: Vec::new() };
        log.push(GREETING.to_string(), Sender::Bot, now);
        log
    }

    pub fn push(&mut self, text: String, sender: Sender, timestamp: DateTime<Local>) -> &ChatMessage {
        let id = self.messages.len() + 1;
        self.messages.push(ChatMessage {
            id,
            text,
            sender,
            timestamp,
        });
        &self.messages[id - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Only the greeting so far, i.e. the greeting should be typed out.
    pub fn is_fresh(&self) -> bool {
        self.messages.len() == 1
    }
}

pub fn can_send(input: &str, loading: bool) -> bool {
    !loading && !input.trim().is_empty()
}

/// Reveals a string one character per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TypingEffect {
    text: String,
    shown_chars: usize,
}

impl TypingEffect {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            shown_chars: 0,
        }
    }

    /// Shows one more character. Returns `false` once everything is visible.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.shown_chars += 1;
        true
    }

    pub fn is_done(&self) -> bool {
        self.shown_chars >= self.text.chars().count()
    }

    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.shown_chars) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }
}

pub fn build_prompt(user_input: &str) -> String {
    format!("{}\n\nUser: {}", SYSTEM_PROMPT, user_input)
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateRequest {
    fn single_turn(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part { text: Some(prompt) }],
            }],
        }
    }
}

impl GenerateResponse {
    fn into_text(self) -> Result<String, ChatError> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts.into_iter().filter_map(|part| part.text).collect())
            .unwrap_or_default();
        if text.trim().is_empty() {
            Err(ChatError::EmptyReply)
        } else {
            Ok(text)
        }
    }
}

fn generate_url(api_key: &str) -> String {
    format!(
        "{}/models/{}:generateContent?key={}",
        config::get_chat_api_url(),
        config::CHAT_MODEL,
        urlencoding::encode(api_key)
    )
}

/// One request/response round trip, no history, no retries.
pub async fn generate_reply(user_input: &str) -> Result<String, ChatError> {
    let api_key = config::get_chat_api_key().ok_or(ChatError::MissingApiKey)?;
    let body = GenerateRequest::single_turn(build_prompt(user_input));

    let response = Request::post(&generate_url(api_key))
        .header("Content-Type", "application/json")
        .json(&body)?
        .send()
        .await?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ChatError::Api { status, body });
    }

    response.json::<GenerateResponse>().await?.into_text()
}

/// The reply to show in the widget; any failure becomes [`FALLBACK_REPLY`].
pub async fn reply_or_fallback(user_input: &str) -> String {
    match generate_reply(user_input).await {
        Ok(text) => text,
        Err(e) => {
            log::error!("Error generating response: {}", e);
            FALLBACK_REPLY.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 15, hour, minute, 0).unwrap()
    }

    #[test]
    fn log_starts_with_greeting() {
        let log = ChatLog::with_greeting(at(9, 5));
        assert!(log.is_fresh());
        assert_eq!(log.messages()[0].id, 1);
        assert_eq!(log.messages()[0].sender, Sender::Bot);
        assert_eq!(log.messages()[0].text, GREETING);
        assert_eq!(log.messages()[0].time_label(), "09:05");
    }

    #[test]
    fn ids_are_sequential() {
        let mut log = ChatLog::with_greeting(at(10, 0));
        log.push("How do I avoid shin splints?".into(), Sender::User, at(10, 1));
        let reply = log.push("Build mileage gradually.".into(), Sender::Bot, at(10, 1)).id;
        assert_eq!(reply, 3);
        assert!(!log.is_fresh());
    }

    #[test]
    fn blank_or_busy_input_cannot_be_sent() {
        assert!(!can_send("   ", false));
        assert!(!can_send("hello", true));
        assert!(can_send(" hello ", false));
    }

    #[test]
    fn typing_effect_reveals_per_char() {
        let mut typing = TypingEffect::new("Hé!");
        assert_eq!(typing.visible(), "");
        assert!(typing.tick());
        assert_eq!(typing.visible(), "H");
        assert!(typing.tick());
        assert_eq!(typing.visible(), "Hé");
        assert!(typing.tick());
        assert_eq!(typing.visible(), "Hé!");
        assert!(typing.is_done());
        assert!(!typing.tick());
    }

    #[test]
    fn prompt_appends_user_turn() {
        let prompt = build_prompt("What is load management?");
        assert!(prompt.starts_with("You are InjuryShield's AI assistant"));
        assert!(prompt.ends_with("\n\nUser: What is load management?"));
    }

    #[test]
    fn request_body_shape() {
        let body = serde_json::to_value(GenerateRequest::single_turn("hi".into())).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"contents": [{"role": "user", "parts": [{"text": "hi"}]}]})
        );
    }

    #[test]
    fn reply_text_joins_first_candidate_parts() {
        let response: GenerateResponse = serde_json::from_str(
            r#"{"candidates":[
                {"content":{"role":"model","parts":[{"text":"Warm up "},{"text":"first."}]}},
                {"content":{"parts":[{"text":"ignored"}]}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(response.into_text().unwrap(), "Warm up first.");
    }

    #[test]
    fn missing_candidates_is_empty_reply() {
        let response: GenerateResponse = serde_json::from_str(r#"{"promptFeedback":{}}"#).unwrap();
        assert!(matches!(response.into_text(), Err(ChatError::EmptyReply)));

        let response: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert!(matches!(response.into_text(), Err(ChatError::EmptyReply)));
    }

    #[test]
    fn key_is_url_encoded() {
        let url = generate_url("a+b/c");
        assert!(url.ends_with("gemini-2.0-flash:generateContent?key=a%2Bb%2Fc"));
    }
}
