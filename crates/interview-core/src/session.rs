use crate::Command;
use crate::gateway::{FeedbackGateway, FeedbackRequest};
use crate::transcript::{Transcript, Utterance};
use crate::transport::VoiceTransport;
use interview_types::{
    AssistantPersona, CallTarget, CallVariables, ServerMessage, TranscriptType, TransportEvent,
};

/// Lifecycle of one call. Transitions only move forward:
/// Idle -> Connecting -> Active -> Finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallStatus {
    Idle,
    Connecting,
    Active,
    Finished,
}

/// What this session is for: generating a new interview through the
/// predefined workflow, or conducting one against prepared questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Generate,
    Review,
}

/// Caller-supplied inputs, fixed for the session's lifetime.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub user_name: String,
    pub user_id: String,
    pub interview_id: Option<String>,
    pub feedback_id: Option<String>,
    pub questions: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session already started (status: {0:?})")]
    AlreadyStarted(CallStatus),
    #[error("missing required context: {0}")]
    MissingContext(&'static str),
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

/// Formats the question list for prompt substitution: one `- ` bullet per
/// question, newline-separated. Empty input yields an empty string.
pub fn format_questions(questions: &[String]) -> String {
    questions
        .iter()
        .map(|q| format!("- {q}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Drives one voice-interview call from connection through transcript capture
/// to the terminal signal.
///
/// The session owns its status and transcript exclusively; all mutation
/// happens through `start`, `stop`, and `handle_event` on one logical task.
/// A finished session cannot be restarted; conduct a new interview with a new
/// instance.
pub struct CallSession {
    status: CallStatus,
    mode: SessionMode,
    context: SessionContext,
    transcript: Transcript,
    is_speaking: bool,
}

impl CallSession {
    pub fn new(context: SessionContext, mode: SessionMode) -> Self {
        Self {
            status: CallStatus::Idle,
            mode,
            context,
            transcript: Transcript::new(),
            is_speaking: false,
        }
    }

    pub fn status(&self) -> CallStatus {
        self.status
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Whether the assistant is currently producing speech. Presentation
    /// state only; nothing else depends on it.
    pub fn is_speaking(&self) -> bool {
        self.is_speaking
    }

    /// Opens the call. In `Generate` mode the transport runs the predefined
    /// interview-generation workflow named by `workflow_id`; in `Review` mode
    /// it runs the interviewer persona against the formatted question list
    /// (`workflow_id` is unused).
    ///
    /// Rejects a second start on the same instance, and fails fast when the
    /// context lacks what the mode needs. On a transport error the session
    /// stays Idle.
    pub async fn start<T: VoiceTransport>(
        &mut self,
        transport: &mut T,
        workflow_id: &str,
    ) -> Result<(), SessionError> {
        if self.status != CallStatus::Idle {
            return Err(SessionError::AlreadyStarted(self.status));
        }
        if self.context.user_id.trim().is_empty() {
            return Err(SessionError::MissingContext("user_id"));
        }

        let (target, variables) = match self.mode {
            SessionMode::Generate => (
                CallTarget::Workflow(workflow_id.to_string()),
                CallVariables::for_generation(&self.context.user_name, &self.context.user_id),
            ),
            SessionMode::Review => {
                if self.context.interview_id.is_none() {
                    return Err(SessionError::MissingContext("interview_id"));
                }
                (
                    CallTarget::Assistant(AssistantPersona::interviewer()),
                    CallVariables::for_interview(&format_questions(&self.context.questions)),
                )
            }
        };

        transport.open(target, variables).await?;
        self.status = CallStatus::Connecting;
        Ok(())
    }

    /// Ends the call from our side: requests transport teardown, then runs
    /// the same termination path a remote `call-end` would. A stop before
    /// `start`, or after the session finished, does nothing.
    pub async fn stop<T, G>(
        &mut self,
        transport: &mut T,
        gateway: &G,
        command_tx: &tokio::sync::mpsc::Sender<Command>,
    ) where
        T: VoiceTransport,
        G: FeedbackGateway,
    {
        match self.status {
            CallStatus::Idle => {
                tracing::debug!("stop requested before start; nothing to do");
            }
            CallStatus::Finished => {}
            CallStatus::Connecting | CallStatus::Active => {
                if let Err(e) = transport.close().await {
                    tracing::warn!("failed to close transport: {:?}", e);
                }
                self.finish(gateway, command_tx).await;
            }
        }
    }

    /// Applies one transport event. Each event name maps to one transition
    /// function; events that would move the status backward are ignored.
    pub async fn handle_event<G: FeedbackGateway>(
        &mut self,
        event: TransportEvent,
        gateway: &G,
        command_tx: &tokio::sync::mpsc::Sender<Command>,
    ) {
        match event {
            TransportEvent::CallStart => {
                if self.status == CallStatus::Connecting {
                    tracing::info!("call established");
                    self.status = CallStatus::Active;
                } else {
                    tracing::warn!(status = ?self.status, "ignoring call-start");
                }
            }
            TransportEvent::CallEnd => match self.status {
                CallStatus::Connecting | CallStatus::Active => {
                    self.finish(gateway, command_tx).await;
                }
                _ => {
                    tracing::debug!(status = ?self.status, "ignoring call-end");
                }
            },
            TransportEvent::Message(data) => {
                let ServerMessage::Transcript(msg) = data.message();
                if self.status != CallStatus::Active {
                    tracing::debug!(status = ?self.status, "dropping transcript outside active call");
                } else if msg.transcript_type() == TranscriptType::Final {
                    tracing::info!("{:?}: \"{}\"", msg.role(), msg.transcript());
                    self.transcript
                        .append(Utterance::new(msg.role(), msg.transcript()));
                }
            }
            TransportEvent::SpeechStart => {
                if self.status == CallStatus::Active {
                    self.is_speaking = true;
                }
            }
            TransportEvent::SpeechEnd => {
                if self.status == CallStatus::Active {
                    self.is_speaking = false;
                }
            }
            TransportEvent::Error(e) => {
                tracing::error!("transport error: {}", e.message());
                // A call that never connected cannot recover; end it rather
                // than leaving the session stuck in Connecting.
                if self.status == CallStatus::Connecting {
                    self.finish(gateway, command_tx).await;
                }
            }
        }
    }

    // Termination side effect. Runs at most once: entering Finished is the
    // guard, so a second call-end or a stop after finishing is a no-op.
    async fn finish<G: FeedbackGateway>(
        &mut self,
        gateway: &G,
        command_tx: &tokio::sync::mpsc::Sender<Command>,
    ) {
        if self.status == CallStatus::Finished {
            return;
        }
        self.status = CallStatus::Finished;
        self.is_speaking = false;

        match self.mode {
            SessionMode::Generate => {
                Self::send_command(command_tx, Command::ExitToHome).await;
            }
            SessionMode::Review => {
                if self.transcript.is_empty() {
                    tracing::warn!("call ended with an empty transcript; skipping feedback");
                    Self::send_command(command_tx, Command::ExitToHome).await;
                    return;
                }
                let Some(interview_id) = self.context.interview_id.clone() else {
                    tracing::error!("review session finished without an interview id");
                    Self::send_command(command_tx, Command::ExitToHome).await;
                    return;
                };

                let request = FeedbackRequest::new(
                    &interview_id,
                    &self.context.user_id,
                    self.transcript.clone(),
                    self.context.feedback_id.clone(),
                );
                match gateway.submit(request).await {
                    Ok(result) if result.success() && result.feedback_id().is_some() => {
                        Self::send_command(command_tx, Command::NavigateToFeedback { interview_id })
                            .await;
                    }
                    Ok(_) => {
                        tracing::error!("feedback was not saved");
                        Self::send_command(command_tx, Command::ExitToHome).await;
                    }
                    Err(e) => {
                        tracing::error!("failed to submit feedback: {:?}", e);
                        Self::send_command(command_tx, Command::ExitToHome).await;
                    }
                }
            }
        }
    }

    async fn send_command(command_tx: &tokio::sync::mpsc::Sender<Command>, command: Command) {
        if let Err(e) = command_tx.send(command).await {
            tracing::error!("failed to send command: {:?}", e);
        }
    }
}
