//! Inbound webhook payload extraction - the inbound filter.
//!
//! The gateway posts a JSON event for every message the WhatsApp instance
//! sees, including the bot's own outbound replies. This module pulls out
//! the message text and sender, dropping everything that must not produce a
//! reply: self-echoes (`fromMe`), events with no usable text, and bodies
//! that are not the expected JSON at all. A filtered event is not an error;
//! the endpoint still acknowledges it.

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct WebhookPayload {
    #[serde(default)]
    data: Option<EventData>,
}

#[derive(Debug, Default, Deserialize)]
struct EventData {
    #[serde(default)]
    message: Option<MessageContent>,
    #[serde(default)]
    key: Option<MessageKey>,
}

#[derive(Debug, Default, Deserialize)]
struct MessageContent {
    #[serde(default)]
    conversation: Option<String>,
    #[serde(default, rename = "extendedTextMessage")]
    extended_text_message: Option<ExtendedTextMessage>,
}

#[derive(Debug, Default, Deserialize)]
struct ExtendedTextMessage {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct MessageKey {
    #[serde(default, rename = "remoteJid")]
    remote_jid: Option<String>,
    #[serde(default, rename = "fromMe")]
    from_me: bool,
}

/// A message that survived the inbound filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Sender JID the reply goes back to
    pub from: String,
    /// Message text (plain conversation field, falling back to the
    /// extended-text field)
    pub text: String,
}

/// Extracts the inbound message from a raw request body.
///
/// Returns `None` for anything that should be silently acknowledged:
/// malformed JSON, missing fields, empty text, or a self-sent message.
#[must_use]
pub fn extract(body: &[u8]) -> Option<InboundMessage> {
    let payload: WebhookPayload = serde_json::from_slice(body).ok()?;
    let data = payload.data?;

    let key = data.key?;
    if key.from_me {
        return None;
    }
    let from = key.remote_jid?;

    let message = data.message?;
    let text = message
        .conversation
        .filter(|text| !text.is_empty())
        .or_else(|| message.extended_text_message.and_then(|ext| ext.text))
        .filter(|text| !text.is_empty())?;

    Some(InboundMessage { from, text })
}
