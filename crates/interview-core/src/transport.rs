use anyhow::Result;
use async_trait::async_trait;
use interview_types::{CallTarget, CallVariables, TransportEvent};
#[cfg(test)]
use mockall::automock;

/// A trait abstracting the realtime voice platform that carries a call.
///
/// The session logic depends on this abstraction rather than on a concrete
/// client, so any platform with an open/close/event-stream shape can back a
/// session, and tests can substitute a mock without a live connection.
#[async_trait]
#[cfg_attr(test, automock)]
pub trait VoiceTransport: Send + Sync {
    /// Opens a call running `target`, with `variables` substituted into its
    /// prompts. Resolves once the platform has accepted the request; the
    /// `call-start` event on the stream marks the call as established.
    async fn open(&mut self, target: CallTarget, variables: CallVariables) -> Result<()>;

    /// Requests teardown of the current call.
    async fn close(&mut self) -> Result<()>;

    /// Returns the stream of call events. May be taken once per transport
    /// instance; a second take is an error.
    async fn events(&mut self) -> Result<tokio::sync::mpsc::Receiver<TransportEvent>>;
}
