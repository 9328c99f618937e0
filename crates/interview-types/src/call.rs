//! Call configuration: what the platform should run when a call is opened.

/// What to run on the platform side of a call: a predefined workflow,
/// referenced by id, or an inline assistant definition.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum CallTarget {
    #[serde(rename = "workflowId")]
    Workflow(String),
    #[serde(rename = "assistant")]
    Assistant(AssistantPersona),
}

/// Template variables substituted into the call target's prompts.
///
/// Only the fields relevant to the chosen target are set; absent fields are
/// omitted from the wire representation.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CallVariables {
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    userid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    questions: Option<String>,
}

impl CallVariables {
    /// Variables for the interview-generation workflow.
    pub fn for_generation(username: &str, userid: &str) -> Self {
        Self {
            username: Some(username.to_string()),
            userid: Some(userid.to_string()),
            questions: None,
        }
    }

    /// Variables for a live interview: the pre-formatted question list.
    pub fn for_interview(questions: &str) -> Self {
        Self {
            username: None,
            userid: None,
            questions: Some(questions.to_string()),
        }
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn userid(&self) -> Option<&str> {
        self.userid.as_deref()
    }

    pub fn questions(&self) -> Option<&str> {
        self.questions.as_deref()
    }
}

/// An inline assistant definition: voice, transcription, and conversational
/// behavior for one call.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantPersona {
    name: String,
    first_message: String,
    system_prompt: String,
    voice_id: String,
    transcriber_language: String,
}

impl AssistantPersona {
    pub fn builder() -> AssistantPersonaBuilder {
        AssistantPersonaBuilder::new()
    }

    /// The interviewer used for live mock interviews. Its system prompt
    /// receives the question list through the `{{questions}}` variable.
    pub fn interviewer() -> Self {
        Self::builder()
            .with_name("Interviewer")
            .with_first_message(
                "Hello! Thank you for taking the time to speak with me today. \
                 I'm excited to learn more about you and your experience.",
            )
            .with_system_prompt(
                "You are a professional job interviewer conducting a real-time \
                 voice interview with a candidate. Ask the following questions \
                 one at a time, listen actively, and follow up briefly when an \
                 answer is vague:\n{{questions}}\n\nKeep your responses short \
                 and conversational, as they will be spoken aloud. Stay neutral \
                 and professional, and close the conversation politely once all \
                 questions are covered.",
            )
            .build()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn first_message(&self) -> &str {
        &self.first_message
    }

    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn voice_id(&self) -> &str {
        &self.voice_id
    }

    pub fn transcriber_language(&self) -> &str {
        &self.transcriber_language
    }
}

pub struct AssistantPersonaBuilder {
    persona: AssistantPersona,
}

impl AssistantPersonaBuilder {
    pub fn new() -> Self {
        Self {
            persona: AssistantPersona {
                name: String::new(),
                first_message: String::new(),
                system_prompt: String::new(),
                voice_id: "sarah".to_string(),
                transcriber_language: "en".to_string(),
            },
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.persona.name = name.to_string();
        self
    }

    pub fn with_first_message(mut self, first_message: &str) -> Self {
        self.persona.first_message = first_message.to_string();
        self
    }

    pub fn with_system_prompt(mut self, system_prompt: &str) -> Self {
        self.persona.system_prompt = system_prompt.to_string();
        self
    }

    pub fn with_voice_id(mut self, voice_id: &str) -> Self {
        self.persona.voice_id = voice_id.to_string();
        self
    }

    pub fn with_transcriber_language(mut self, language: &str) -> Self {
        self.persona.transcriber_language = language.to_string();
        self
    }

    pub fn build(self) -> AssistantPersona {
        self.persona
    }
}

impl Default for AssistantPersonaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interviewer_prompt_carries_questions_variable() {
        let persona = AssistantPersona::interviewer();
        assert!(persona.system_prompt().contains("{{questions}}"));
        assert!(!persona.first_message().is_empty());
    }

    #[test]
    fn variables_omit_unset_fields_on_the_wire() {
        let json = serde_json::to_value(CallVariables::for_interview("- Why this role?"))
            .expect("serialize");
        assert_eq!(json["questions"], "- Why this role?");
        assert!(json.get("username").is_none());
        assert!(json.get("userid").is_none());
    }
}
