//! OpenAI text-to-speech.

use super::SpeechSynthesizer;
use crate::config::{Settings, SpeechSettings};
use crate::error::{PlannerError, Result};
use crate::openai::create_client;
use async_openai::types::{CreateSpeechRequestArgs, SpeechModel, SpeechResponseFormat, Voice};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Maximum characters accepted by one speech request.
pub const SPEECH_INPUT_LIMIT: usize = 4096;

/// Speaks notes through the OpenAI speech endpoint.
pub struct OpenAISpeech {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: SpeechModel,
    voice: Voice,
}

impl OpenAISpeech {
    /// Create a synthesizer from the application settings.
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = create_client(&settings.openai)?;
        Ok(Self::with_client(client, &settings.speech))
    }

    pub fn with_client(
        client: async_openai::Client<async_openai::config::OpenAIConfig>,
        speech: &SpeechSettings,
    ) -> Self {
        Self {
            client,
            model: parse_model(&speech.model),
            voice: parse_voice(&speech.voice),
        }
    }
}

fn parse_model(name: &str) -> SpeechModel {
    match name {
        "tts-1" => SpeechModel::Tts1,
        "tts-1-hd" => SpeechModel::Tts1Hd,
        other => SpeechModel::Other(other.to_string()),
    }
}

fn parse_voice(name: &str) -> Voice {
    match name.to_lowercase().as_str() {
        "alloy" => Voice::Alloy,
        "echo" => Voice::Echo,
        "fable" => Voice::Fable,
        "onyx" => Voice::Onyx,
        "nova" => Voice::Nova,
        "shimmer" => Voice::Shimmer,
        other => {
            warn!("Unknown voice '{}', using alloy", other);
            Voice::Alloy
        }
    }
}

/// Split text into pieces of at most `limit` characters, breaking on whitespace.
///
/// A single word longer than `limit` is cut at the limit.
pub fn split_for_speech(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > limit {
            if !current.is_empty() {
                pieces.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(limit);
            pieces.push(word.into_iter().collect());
            word = rest;
        }

        let sep = usize::from(!current.is_empty());
        if current_len + sep + word.len() > limit {
            pieces.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current_len += word.len();
        current.extend(word);
    }

    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

#[async_trait]
impl SpeechSynthesizer for OpenAISpeech {
    #[instrument(skip(self, text), fields(chars = text.len(), path = %path.display()))]
    async fn to_speech(&self, text: &str, path: &Path) -> Result<PathBuf> {
        let pieces = split_for_speech(text, SPEECH_INPUT_LIMIT);
        if pieces.is_empty() {
            return Err(PlannerError::Speech("Nothing to speak".to_string()));
        }
        info!("Synthesizing speech in {} request(s)", pieces.len());

        // MP3 frames are self-delimiting, so pieces can be appended directly.
        let mut audio = Vec::new();
        for (idx, piece) in pieces.into_iter().enumerate() {
            let request = CreateSpeechRequestArgs::default()
                .input(piece)
                .model(self.model.clone())
                .voice(self.voice.clone())
                .response_format(SpeechResponseFormat::Mp3)
                .build()
                .map_err(|e| PlannerError::Speech(format!("Failed to build request: {}", e)))?;

            let response = self.client.audio().speech(request).await.map_err(|e| {
                PlannerError::OpenAI(format!("Speech API error on part {}: {}", idx + 1, e))
            })?;

            debug!("Part {} returned {} bytes", idx + 1, response.bytes.len());
            audio.extend_from_slice(&response.bytes);
        }

        tokio::fs::write(path, &audio).await?;
        Ok(path.to_path_buf())
    }
}
