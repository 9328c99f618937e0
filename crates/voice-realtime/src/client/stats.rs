#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Stats {
    messages_received: u32,
    errors_received: u32,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Self {
            messages_received: 0,
            errors_received: 0,
        }
    }

    pub(crate) fn record_message(&mut self) {
        self.messages_received += 1;
    }

    pub(crate) fn record_error(&mut self) {
        self.errors_received += 1;
    }

    pub fn messages_received(&self) -> u32 {
        self.messages_received
    }

    pub fn errors_received(&self) -> u32 {
        self.errors_received
    }
}
