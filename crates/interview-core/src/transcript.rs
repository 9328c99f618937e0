use interview_types::MessageRole;

/// One finalized utterance of the conversation. Immutable once appended.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Utterance {
    #[serde(rename = "role")]
    speaker: MessageRole,
    #[serde(rename = "content")]
    text: String,
}

impl Utterance {
    pub fn new(speaker: MessageRole, text: &str) -> Self {
        Self {
            speaker,
            text: text.to_string(),
        }
    }

    pub fn speaker(&self) -> MessageRole {
        self.speaker
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// The conversation log: finalized utterances in arrival order.
///
/// Append-only; the backing vector is never exposed mutably, so entries can
/// neither be reordered nor rewritten.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    utterances: Vec<Utterance>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, utterance: Utterance) {
        self.utterances.push(utterance);
    }

    pub fn len(&self) -> usize {
        self.utterances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utterances.is_empty()
    }

    pub fn utterances(&self) -> &[Utterance] {
        &self.utterances
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Utterance;
    type IntoIter = std::slice::Iter<'a, Utterance>;

    fn into_iter(self) -> Self::IntoIter {
        self.utterances.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_preserve_arrival_order() {
        let mut transcript = Transcript::new();
        transcript.append(Utterance::new(MessageRole::User, "Hi"));
        transcript.append(Utterance::new(MessageRole::Assistant, "Hello"));

        let utterances = transcript.utterances();
        assert_eq!(utterances.len(), 2);
        assert_eq!(utterances[0].speaker(), MessageRole::User);
        assert_eq!(utterances[0].text(), "Hi");
        assert_eq!(utterances[1].speaker(), MessageRole::Assistant);
        assert_eq!(utterances[1].text(), "Hello");
    }

    #[test]
    fn serializes_as_role_content_pairs() {
        let mut transcript = Transcript::new();
        transcript.append(Utterance::new(MessageRole::Assistant, "Tell me about yourself."));

        let json = serde_json::to_value(&transcript).expect("serialize");
        assert_eq!(json[0]["role"], "assistant");
        assert_eq!(json[0]["content"], "Tell me about yourself.");
    }
}
