use crate::client::stats::Stats;
use anyhow::Result;
use futures_util::{SinkExt, StreamExt};
use interview_types as types;
use interview_types::events::CallStartRequest;
use std::sync::{Arc, Mutex};
use tokio_tungstenite::tungstenite::Message;

mod config;
mod consts;
mod stats;
mod utils;

pub use config::Config;

pub type ClientTx = tokio::sync::mpsc::Sender<types::ClientEvent>;
type ServerTx = tokio::sync::broadcast::Sender<types::TransportEvent>;
pub type ServerRx = tokio::sync::broadcast::Receiver<types::TransportEvent>;

// Holds the channel capacity, the client/server transmitters, the connection
// configuration, and call stats guarded by a Mutex.
pub struct Client {
    capacity: usize,
    config: config::Config,
    c_tx: Option<ClientTx>,
    s_tx: Option<ServerTx>,
    stats: Arc<Mutex<Stats>>,
}

impl Client {
    fn new(capacity: usize, config: config::Config) -> Self {
        Self {
            capacity,
            config,
            c_tx: None,
            s_tx: None,
            stats: Arc::new(Mutex::new(Stats::new())),
        }
    }

    async fn connect(&mut self) -> Result<()> {
        // Ensure that we haven't already connected.
        if self.c_tx.is_some() {
            return Err(anyhow::anyhow!("already connected"));
        }

        let request = utils::build_request(&self.config)?;

        let (ws_stream, _) = tokio_tungstenite::connect_async(request).await?;

        // Split the WebSocket into read and write halves.
        let (mut write, mut read) = ws_stream.split();

        // Channels carrying outbound client events and inbound call events.
        let (c_tx, mut c_rx) = tokio::sync::mpsc::channel(self.capacity);
        let (s_tx, _) = tokio::sync::broadcast::channel(self.capacity);

        self.c_tx = Some(c_tx.clone());
        self.s_tx = Some(s_tx.clone());

        // This task drains the outbound channel and writes each event as a
        // JSON text frame.
        tokio::spawn(async move {
            while let Some(event) = c_rx.recv().await {
                match serde_json::to_string(&event) {
                    Ok(text) => {
                        if let Err(e) = write.send(Message::Text(text)).await {
                            tracing::error!("failed to send message: {}", e);
                        }
                    }
                    Err(e) => {
                        tracing::error!("failed to serialize event: {}", e);
                    }
                }
            }
        });

        let stats = self.stats.clone();
        // This task reads frames from the platform, decodes them into call
        // events, and broadcasts them to every subscriber. A close frame is
        // surfaced as a `call-end` event before the task exits.
        tokio::spawn(async move {
            while let Some(message) = read.next().await {
                let message = match message {
                    Err(e) => {
                        tracing::error!("failed to read message: {}", e);
                        break;
                    }
                    Ok(message) => message,
                };
                match message {
                    Message::Text(text) => {
                        match serde_json::from_str::<types::TransportEvent>(&text) {
                            Ok(event) => {
                                match &event {
                                    types::TransportEvent::Message(_) => {
                                        if let Ok(mut stats_guard) = stats.lock() {
                                            stats_guard.record_message();
                                        }
                                    }
                                    types::TransportEvent::Error(e) => {
                                        tracing::warn!("platform error: {}", e.message());
                                        if let Ok(mut stats_guard) = stats.lock() {
                                            stats_guard.record_error();
                                        }
                                    }
                                    _ => {}
                                }
                                if let Err(e) = s_tx.send(event) {
                                    tracing::error!("failed to send event: {}", e);
                                }
                            }
                            Err(e) => {
                                tracing::error!(
                                    "failed to deserialize event: {}, text=> {:?}",
                                    e,
                                    text
                                );
                            }
                        }
                    }
                    Message::Binary(bin) => {
                        tracing::warn!("unexpected binary message: {} bytes", bin.len());
                    }
                    Message::Close(reason) => {
                        tracing::info!("connection closed: {:?}", reason);
                        if let Err(e) = s_tx.send(types::TransportEvent::CallEnd) {
                            tracing::error!("failed to send call-end event: {}", e);
                        }
                        break;
                    }
                    _ => {}
                }
            }
            drop(c_tx);
            drop(s_tx);
        });
        Ok(())
    }

    // Get a receiver that we can use to observe call events.
    pub fn events(&self) -> Result<ServerRx> {
        match self.s_tx {
            Some(ref tx) => Ok(tx.subscribe()),
            None => Err(anyhow::anyhow!("not connected yet")),
        }
    }

    pub fn stats(&self) -> Result<Stats> {
        if let Ok(stats_guard) = self.stats.lock() {
            Ok(stats_guard.clone())
        } else {
            Err(anyhow::anyhow!("failed to get stats"))
        }
    }

    async fn send_client_event(&mut self, event: types::ClientEvent) -> Result<()> {
        match self.c_tx {
            Some(ref tx) => {
                tx.send(event).await?;
                Ok(())
            }
            None => Err(anyhow::anyhow!("not connected yet")),
        }
    }

    /// Ask the platform to start a call running `target`, with `variables`
    /// substituted into its prompts.
    pub async fn open_call(
        &mut self,
        target: types::CallTarget,
        variables: types::CallVariables,
    ) -> Result<()> {
        let event = types::ClientEvent::CallStartRequest(CallStartRequest::new(target, variables));
        self.send_client_event(event).await
    }

    /// Ask the platform to end the current call. The platform confirms with a
    /// `call-end` event on the event stream.
    pub async fn end_call(&mut self) -> Result<()> {
        self.send_client_event(types::ClientEvent::CallEndRequest)
            .await
    }
}

// Create a client with a specific config and connect to the platform.
pub async fn connect_with_config(capacity: usize, config: config::Config) -> Result<Client> {
    let mut client = Client::new(capacity, config);
    client.connect().await?;
    Ok(client)
}

// Connect with default settings.
pub async fn connect() -> Result<Client> {
    let config = config::Config::new();
    connect_with_config(1024, config).await
}
