//! Wire events exchanged with the voice platform.
//!
//! Server events arrive as JSON objects discriminated by a `type` field;
//! client events are serialized the same way. Payload field names follow the
//! platform's camelCase convention.

/// Events delivered by the voice platform over an open call.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum TransportEvent {
    /// The call has been established and audio is flowing.
    #[serde(rename = "call-start")]
    CallStart,
    /// The call has ended, either remotely or after a local end request.
    #[serde(rename = "call-end")]
    CallEnd,
    /// A conversation message; currently always a transcript.
    #[serde(rename = "message")]
    Message(MessageEvent),
    /// The assistant started producing speech.
    #[serde(rename = "speech-start")]
    SpeechStart,
    /// The assistant finished producing speech.
    #[serde(rename = "speech-end")]
    SpeechEnd,
    #[serde(rename = "error")]
    Error(ErrorEvent),
}

/// `message` event payload.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct MessageEvent {
    message: ServerMessage,
}

impl MessageEvent {
    pub fn new(message: ServerMessage) -> Self {
        Self { message }
    }

    pub fn message(&self) -> &ServerMessage {
        &self.message
    }
}

/// Messages carried inside a `message` event, discriminated by their own
/// `type` field.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    #[serde(rename = "transcript")]
    Transcript(TranscriptMessage),
}

/// A transcribed utterance, interim or final.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptMessage {
    role: MessageRole,
    transcript_type: TranscriptType,
    transcript: String,
}

impl TranscriptMessage {
    pub fn new(role: MessageRole, transcript_type: TranscriptType, transcript: &str) -> Self {
        Self {
            role,
            transcript_type,
            transcript: transcript.to_string(),
        }
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn transcript_type(&self) -> TranscriptType {
        self.transcript_type
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    System,
    Assistant,
}

/// Completeness of a transcript. Interim transcripts are superseded by a
/// later `Final` for the same utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptType {
    Partial,
    Final,
}

/// `error` event payload.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ErrorEvent {
    message: String,
}

impl ErrorEvent {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Events sent to the voice platform.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum ClientEvent {
    #[serde(rename = "call-start-request")]
    CallStartRequest(CallStartRequest),
    #[serde(rename = "call-end-request")]
    CallEndRequest,
}

/// `call-start-request` payload: what to run and the template variables to
/// substitute into it.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallStartRequest {
    #[serde(flatten)]
    target: crate::call::CallTarget,
    variable_values: crate::call::CallVariables,
}

impl CallStartRequest {
    pub fn new(target: crate::call::CallTarget, variable_values: crate::call::CallVariables) -> Self {
        Self {
            target,
            variable_values,
        }
    }

    pub fn target(&self) -> &crate::call::CallTarget {
        &self.target
    }

    pub fn variable_values(&self) -> &crate::call::CallVariables {
        &self.variable_values
    }
}
