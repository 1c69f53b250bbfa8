use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const GREETING: &str = "Hello, how can I help you today?";

/// How long the assistant "composes" before its reply lands.
pub const RESPONSE_DELAY: Duration = Duration::from_secs(1);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Turn {
    User(String),
    Bot(String),
}

impl Turn {
    pub fn text(&self) -> &str {
        match self {
            Turn::User(text) | Turn::Bot(text) => text,
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Turn::User(_))
    }
}

/// A reply that has been promised but not yet appended.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "a pending reply does nothing until it is resolved"]
pub struct PendingReply {
    prompt: String,
}

impl PendingReply {
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn text(&self) -> String {
        format!("Response for: {}", self.prompt)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatTranscript {
    turns: Vec<Turn>,
    outstanding: usize,
}

impl Default for ChatTranscript {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self {
            turns: vec![Turn::Bot(GREETING.to_string())],
            outstanding: 0,
        }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// True while at least one reply is still on its way.
    pub fn is_composing(&self) -> bool {
        self.outstanding > 0
    }

    /// Appends the user's turn. Whitespace-only input is ignored and yields no reply.
    pub fn send(&mut self, text: &str) -> Option<PendingReply> {
        if text.trim().is_empty() {
            return None;
        }
        self.turns.push(Turn::User(text.to_string()));
        self.outstanding += 1;
        Some(PendingReply {
            prompt: text.to_string(),
        })
    }

    pub fn resolve(&mut self, reply: PendingReply) {
        self.turns.push(Turn::Bot(reply.text()));
        self.outstanding = self.outstanding.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_greeting() {
        let transcript = ChatTranscript::new();
        assert_eq!(transcript.turns(), &[Turn::Bot(GREETING.to_string())]);
        assert!(!transcript.is_composing());
    }

    #[test]
    fn send_then_resolve() {
        let mut transcript = ChatTranscript::new();
        let reply = transcript.send("hello").unwrap();
        assert_eq!(transcript.turns().last(), Some(&Turn::User("hello".into())));
        assert!(transcript.is_composing());
        transcript.resolve(reply);
        assert_eq!(
            transcript.turns().last(),
            Some(&Turn::Bot("Response for: hello".into()))
        );
        assert!(!transcript.is_composing());
        assert_eq!(transcript.turns().len(), 3);
    }

    #[test]
    fn whitespace_is_ignored() {
        let mut transcript = ChatTranscript::new();
        assert_eq!(transcript.send("   \t\n"), None);
        assert_eq!(transcript.send(""), None);
        assert_eq!(transcript.turns().len(), 1);
        assert!(!transcript.is_composing());
    }

    #[test]
    fn input_is_kept_verbatim() {
        let mut transcript = ChatTranscript::new();
        let reply = transcript.send("  what is DPDP? ").unwrap();
        assert_eq!(reply.text(), "Response for:   what is DPDP? ");
        assert_eq!(transcript.turns()[1].text(), "  what is DPDP? ");
    }

    #[test]
    fn composing_until_every_reply_lands() {
        let mut transcript = ChatTranscript::new();
        let first = transcript.send("one").unwrap();
        let second = transcript.send("two").unwrap();
        transcript.resolve(first);
        assert!(transcript.is_composing());
        transcript.resolve(second);
        assert!(!transcript.is_composing());
        let kinds: Vec<_> = transcript.turns().iter().map(Turn::is_user).collect();
        assert_eq!(kinds, vec![false, true, true, false, false]);
    }

    #[test]
    fn turns_serialize_with_role_keys() {
        assert_eq!(
            serde_json::to_string(&Turn::User("hello".into())).unwrap(),
            r#"{"user":"hello"}"#
        );
        assert_eq!(
            serde_json::to_string(&Turn::Bot("Response for: hello".into())).unwrap(),
            r#"{"bot":"Response for: hello"}"#
        );
    }

    #[test]
    fn delay_is_one_second() {
        assert_eq!(RESPONSE_DELAY, Duration::from_millis(1000));
    }
}
