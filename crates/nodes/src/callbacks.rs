//! Callbacks: the units the engine relays to the client.
//!
//! Only the shapes nodes in this workspace emit or read are modelled.

use serde::{Deserialize, Serialize};

/// Severity carried by text and confirmation callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    Information,
    Warning,
    Error,
}

impl MessageType {
    /// Numeric value used on the callback wire format.
    pub fn code(self) -> i32 {
        match self {
            MessageType::Information => 0,
            MessageType::Warning => 1,
            MessageType::Error => 2,
        }
    }
}

/// A set of buttons; the client answers with the index of the one pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationCallback {
    pub message_type: MessageType,
    pub options: Vec<String>,
    pub default_option: usize,
    /// `None` until the client has answered.
    #[serde(default)]
    pub selected_index: Option<usize>,
}

impl ConfirmationCallback {
    pub fn new(message_type: MessageType, options: Vec<String>, default_option: usize) -> Self {
        Self {
            message_type,
            options,
            default_option,
            selected_index: None,
        }
    }

    /// Record the client's answer.
    pub fn with_selected_index(mut self, index: usize) -> Self {
        self.selected_index = Some(index);
        self
    }
}

/// One prompt element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Callback {
    /// JavaScript the client executes when rendering the page.
    ScriptTextOutput { script: String },
    /// A line of text shown to the user.
    TextOutput {
        message_type: MessageType,
        message: String,
    },
    Confirmation(ConfirmationCallback),
}

impl Callback {
    /// Informational text line.
    pub fn info(message: impl Into<String>) -> Self {
        Callback::TextOutput {
            message_type: MessageType::Information,
            message: message.into(),
        }
    }

    pub fn script(script: impl Into<String>) -> Self {
        Callback::ScriptTextOutput {
            script: script.into(),
        }
    }
}
