/// Chat identity as delivered by the transport.
pub type ChatId = i64;

/// One incoming event from the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    /// The `/start` command: restarts the conversation.
    Start,
    /// Free text or a pressed reply button.
    Text(String),
    /// A callback token from an inline button (e.g. `promotion_3`).
    Callback(String),
}

impl Input {
    /// The textual payload of the event.
    pub fn into_text(self) -> String {
        match self {
            Input::Start => "/start".to_string(),
            Input::Text(text) | Input::Callback(text) => text,
        }
    }
}

/// Button set attached to a reply.
#[derive(Debug, Clone, PartialEq)]
pub enum Keyboard {
    /// Plain reply buttons; pressing one sends its label as text.
    Buttons(Vec<String>),
    /// Inline buttons as (label, callback token) pairs.
    Inline(Vec<(String, String)>),
}

/// One outgoing message, optionally with a keyboard.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<Keyboard>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_buttons(text: impl Into<String>, buttons: Vec<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(Keyboard::Buttons(buttons)),
        }
    }

    pub fn with_inline(text: impl Into<String>, entries: Vec<(String, String)>) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(Keyboard::Inline(entries)),
        }
    }
}
