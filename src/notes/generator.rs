//! OpenAI-backed notes generation.

use super::NotesGenerator;
use crate::config::{NotesSettings, Prompts, Settings};
use crate::error::{PlannerError, Result};
use crate::openai::create_client;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Writes study notes with a chat completion model.
pub struct OpenAINotesGenerator {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    max_tokens: u32,
    temperature: f32,
    prompts: Prompts,
}

impl OpenAINotesGenerator {
    /// Create a generator from the application settings.
    pub fn new(settings: &Settings, prompts: Prompts) -> Result<Self> {
        let client = create_client(&settings.openai)?;
        Ok(Self::with_client(client, &settings.notes, prompts))
    }

    /// Create a generator around an existing client.
    pub fn with_client(
        client: async_openai::Client<async_openai::config::OpenAIConfig>,
        notes: &NotesSettings,
        prompts: Prompts,
    ) -> Self {
        Self {
            client,
            model: notes.model.clone(),
            max_tokens: notes.max_tokens,
            temperature: notes.temperature,
            prompts,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl NotesGenerator for OpenAINotesGenerator {
    #[instrument(skip(self))]
    async fn generate_notes(&self, subject: &str, chapter: &str) -> Result<String> {
        let user_prompt = self.prompts.notes_request(subject, chapter);
        info!("Requesting notes from {}", self.model);

        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(self.prompts.notes.system.clone())
                .build()
                .map_err(|e| PlannerError::Notes(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(user_prompt)
                .build()
                .map_err(|e| PlannerError::Notes(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(self.temperature)
            .max_completion_tokens(self.max_tokens)
            .build()
            .map_err(|e| PlannerError::Notes(format!("Failed to build request: {}", e)))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            PlannerError::OpenAI(format!("Failed to generate notes: {}", e))
        })?;

        let notes = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| PlannerError::Notes("Empty response from LLM".to_string()))?
            .to_string();

        debug!("Generated {} characters of notes", notes.len());
        Ok(notes)
    }
}
