pub mod call;
pub mod events;

pub use call::{AssistantPersona, CallTarget, CallVariables};
pub use events::{
    ClientEvent, ErrorEvent, MessageEvent, MessageRole, ServerMessage, TranscriptMessage,
    TranscriptType, TransportEvent,
};
