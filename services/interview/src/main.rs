mod config;
mod transport;

use crate::config::Config;
use crate::transport::RealtimeTransport;
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use interview_core::Command;
use interview_core::gateway::FeedbackClient;
use interview_core::session::{CallSession, CallStatus, SessionContext, SessionMode};
use interview_core::transport::VoiceTransport;
use tracing_subscriber::fmt::time::ChronoLocal;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Generate a new interview through the predefined workflow.
    Generate,
    /// Conduct an interview against prepared questions.
    Review,
}

impl From<Mode> for SessionMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Generate => SessionMode::Generate,
            Mode::Review => SessionMode::Review,
        }
    }
}

#[derive(Parser)]
struct Cli {
    /// What this session is for.
    #[arg(long, value_enum)]
    mode: Mode,
    #[arg(long)]
    user_name: String,
    #[arg(long)]
    user_id: String,
    /// Interview to conduct and attach feedback to. Required in review mode.
    #[arg(long)]
    interview_id: Option<String>,
    /// Existing feedback record to update instead of creating a new one.
    #[arg(long)]
    feedback_id: Option<String>,
    /// An interview question; repeat the flag once per question, in order.
    #[arg(long = "question")]
    questions: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // --- 1. Load Configuration ---
    let config = Config::from_env().context("Failed to load application configuration")?;

    // --- 2. Initialize Logging ---
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_timer(ChronoLocal::rfc_3339())
        .init();

    // --- 3. Parse Command-Line Arguments ---
    let args = Cli::parse();

    // --- 4. Connect to the Voice Platform ---
    let mut client_config = voice_realtime::Config::builder().with_api_key(&config.voice_api_key);
    if let Some(base_url) = &config.voice_base_url {
        client_config = client_config.with_base_url(base_url);
    }
    let client = voice_realtime::connect_with_config(1024, client_config.build())
        .await
        .context("Failed to connect to the voice platform")?;
    let mut transport = RealtimeTransport::new(client);

    let gateway = FeedbackClient::new(&config.feedback_api_url, &config.feedback_api_key);

    // --- 5. Build the Session ---
    let context = SessionContext {
        user_name: args.user_name,
        user_id: args.user_id,
        interview_id: args.interview_id,
        feedback_id: args.feedback_id,
        questions: args.questions,
    };
    let mut session = CallSession::new(context, args.mode.into());

    let (command_tx, mut command_rx) = tokio::sync::mpsc::channel::<Command>(32);

    // This task acts on terminal signals from the session.
    let command_handler = tokio::spawn(async move {
        while let Some(command) = command_rx.recv().await {
            match command {
                Command::NavigateToFeedback { interview_id } => {
                    tracing::info!("feedback ready: /interview/{}/feedback", interview_id);
                }
                Command::ExitToHome => {
                    tracing::info!("returning to home");
                }
            }
        }
    });

    // Subscribe before opening the call so no early event is missed.
    let mut events = transport
        .events()
        .await
        .context("Failed to get call events channel")?;

    session
        .start(&mut transport, &config.generation_workflow_id)
        .await?;
    tracing::info!("call requested; waiting for events");

    // --- 6. Drive the Session ---
    loop {
        tokio::select! {
            maybe_event = events.recv() => match maybe_event {
                Some(event) => {
                    session.handle_event(event, &gateway, &command_tx).await;
                    if session.status() == CallStatus::Finished {
                        break;
                    }
                }
                None => {
                    // The transport went away without a call-end; finish from
                    // our side so the terminal signal still fires.
                    session.stop(&mut transport, &gateway, &command_tx).await;
                    break;
                }
            },
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received Ctrl-C, shutting down...");
                session.stop(&mut transport, &gateway, &command_tx).await;
                break;
            }
        }
    }

    // Every exit path releases both subscriptions: the event receiver and
    // the command sender.
    drop(events);
    drop(command_tx);
    command_handler.await?;

    tracing::info!("Shutting down...");
    Ok(())
}
