use anyhow::{Context, Result};
use async_trait::async_trait;
use interview_core::transport::VoiceTransport;
use interview_types::{CallTarget, CallVariables, TransportEvent};

/// An adapter that implements the `VoiceTransport` trait over the
/// `voice_realtime::Client`, bridging its broadcast event stream into the
/// single-consumer receiver the session logic expects.
pub struct RealtimeTransport {
    client: voice_realtime::Client,
    events_taken: bool,
}

impl RealtimeTransport {
    pub fn new(client: voice_realtime::Client) -> Self {
        Self {
            client,
            events_taken: false,
        }
    }
}

#[async_trait]
impl VoiceTransport for RealtimeTransport {
    async fn open(&mut self, target: CallTarget, variables: CallVariables) -> Result<()> {
        self.client
            .open_call(target, variables)
            .await
            .context("Failed to request call start")
    }

    async fn close(&mut self) -> Result<()> {
        self.client
            .end_call()
            .await
            .context("Failed to request call end")
    }

    async fn events(&mut self) -> Result<tokio::sync::mpsc::Receiver<TransportEvent>> {
        if self.events_taken {
            return Err(anyhow::anyhow!("events channel has already been taken"));
        }
        self.events_taken = true;

        let (tx, rx) = tokio::sync::mpsc::channel(128);
        let mut broadcast_rx = self.client.events()?;

        // Forward until the client's read task drops its sender or the
        // session drops the receiver, whichever comes first.
        tokio::spawn(async move {
            while let Ok(event) = broadcast_rx.recv().await {
                if tx.send(event).await.is_err() {
                    break;
                }
            }
        });

        Ok(rx)
    }
}
