pub mod gateway;
pub mod session;
pub mod transcript;
pub mod transport;

/// Represents terminal signals the core logic (`CallSession`) issues to the
/// runtime once a session is over.
///
/// This enum is the primary API for decoupling the session's decision-making
/// from the runtime's execution of side effects (like navigation).
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Leave the interview flow and return to the home surface.
    ExitToHome,
    /// Open the feedback view for the given interview.
    NavigateToFeedback { interview_id: String },
}
