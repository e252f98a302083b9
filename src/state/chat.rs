//! Chat assistant transcript.
//!
//! The transcript is append-only and lives only as long as the page.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

/// Bot reply shown when the ask request fails for any reason.
pub const APOLOGY: &str = "Sorry, I encountered an error. Please try again.";

/// Who wrote a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Modifier class, e.g. `user-message`.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "user-message",
            Self::Bot => "bot-message",
        }
    }

    /// Font Awesome icon name for the avatar.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::User => "fa-user",
            Self::Bot => "fa-robot",
        }
    }
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
}

/// Transcript plus the draft in the input box.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub draft: String,
    next_id: u64,
}

impl ChatState {
    /// Take the trimmed draft as an outgoing question.
    ///
    /// Returns `None` and leaves the draft alone when it is blank. Otherwise
    /// the question is appended as a user message and the draft is cleared.
    pub fn take_question(&mut self) -> Option<String> {
        let question = self.draft.trim().to_owned();
        if question.is_empty() {
            return None;
        }
        self.push(Sender::User, question.clone());
        self.draft.clear();
        Some(question)
    }

    pub fn push_answer(&mut self, answer: String) {
        self.push(Sender::Bot, answer);
    }

    pub fn push_apology(&mut self) {
        self.push(Sender::Bot, APOLOGY.to_owned());
    }

    fn push(&mut self, sender: Sender, text: String) {
        self.next_id += 1;
        self.messages.push(ChatMessage { id: self.next_id, sender, text });
    }
}
