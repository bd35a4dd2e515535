//! Denylist moderation for chat messages
//!
//! Matching is a plain case-insensitive substring test with no word
//! boundaries, so unrelated words containing a term are blocked too and
//! paraphrases are not.

/// Substrings that trigger a refusal
pub const DENYLIST: [&str; 3] = ["illegal", "violence", "self-harm"];

/// Reply sent instead of the echo when a message is blocked
pub const REFUSAL_REPLY: &str = "I can't assist with that. If you're in danger or feeling unsafe, \
please seek professional help or contact local authorities.";

/// Outcome of checking a message against the denylist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allowed,
    Blocked { term: &'static str },
}

/// Check a message against the denylist
pub fn moderate(text: &str) -> Verdict {
    let lowered = text.to_lowercase();
    DENYLIST
        .into_iter()
        .find(|term| lowered.contains(*term))
        .map_or(Verdict::Allowed, |term| Verdict::Blocked { term })
}

/// Build the assistant reply for an already-trimmed message
pub fn reply_for(text: &str) -> String {
    match moderate(text) {
        Verdict::Allowed => format!("You said: {}. This is a demo assistant.", text),
        Verdict::Blocked { term } => {
            tracing::info!(term, "Chat message blocked by denylist");
            REFUSAL_REPLY.to_string()
        }
    }
}
