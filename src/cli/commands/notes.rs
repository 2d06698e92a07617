//! Notes generator flow.

use crate::cli::input::InputProvider;
use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::{Prompts, Settings};
use crate::error::Result;
use crate::notes::{
    open_in_browser, youtube_search_url, ImageRenderer, NotesFormat, NotesGenerator,
    OpenAINotesGenerator, OpenAISpeech, SpeechSynthesizer,
};
use std::path::PathBuf;
use tracing::info;

/// External services used by the notes flow.
pub struct NotesServices<'a> {
    pub generator: &'a dyn NotesGenerator,
    pub speech: &'a dyn SpeechSynthesizer,
    pub images: ImageRenderer,
    /// Opens a URL for the user.
    pub open_url: &'a dyn Fn(&str) -> Result<()>,
}

/// What one pass through the notes flow produced.
#[derive(Debug, Clone, PartialEq)]
pub struct NotesOutcome {
    pub notes: String,
    pub format: NotesFormat,
    /// Audio or image file written, if the format produces one.
    pub file: Option<PathBuf>,
    /// YouTube search opened for the topic, if requested.
    pub video_url: Option<String>,
}

/// Run the notes flow against OpenAI and the system browser.
pub async fn run_notes(
    input: &mut dyn InputProvider,
    settings: &Settings,
) -> anyhow::Result<NotesOutcome> {
    if let Err(e) = preflight::check(Operation::Notes, settings) {
        Output::error(&format!("{}", e));
        Output::info("Set openai.api_key in the config file or export OPENAI_API_KEY.");
        return Err(e.into());
    }

    let prompts = Prompts::load(
        settings.prompts.custom_file.as_deref(),
        Some(&settings.prompts.variables),
    )?;
    let generator = OpenAINotesGenerator::new(settings, prompts)?;
    let speech = OpenAISpeech::new(settings)?;

    let services = NotesServices {
        generator: &generator,
        speech: &speech,
        images: ImageRenderer::new(settings.image.clone()),
        open_url: &open_in_browser,
    };

    run_notes_with(input, settings, &services).await
}

/// Run the notes flow with the given services.
pub async fn run_notes_with(
    input: &mut dyn InputProvider,
    settings: &Settings,
    services: &NotesServices<'_>,
) -> anyhow::Result<NotesOutcome> {
    Output::info("Starting Notes Generator...");

    let subject = input.text("Enter the subject you want notes for:")?;
    let chapter = input.text("Enter the chapter:")?;

    let labels = NotesFormat::ALL.map(|f| f.label());
    let format = NotesFormat::ALL[input.select("How do you want to receive the notes?", &labels)?];

    let spinner = Output::spinner(&format!("Writing notes for {} Chapter {}...", subject, chapter));
    let notes = services.generator.generate_notes(&subject, &chapter).await;
    spinner.finish_and_clear();
    let notes = match notes {
        Ok(notes) => notes,
        Err(e) => {
            Output::error(&format!("Failed to generate notes: {}", e));
            return Err(e.into());
        }
    };
    info!("Delivering notes as {}", format);

    let file = match format {
        NotesFormat::Text => {
            Output::notes(&notes);
            None
        }
        NotesFormat::Speech => {
            let spinner = Output::spinner("Recording spoken notes...");
            let written = services.speech.to_speech(&notes, &settings.speech_path()).await;
            spinner.finish_and_clear();
            let path = written?;
            Output::success(&format!("Spoken notes saved as {}", path.display()));
            Some(path)
        }
        NotesFormat::Image => {
            let path = services.images.to_image(&notes, &settings.image_path())?;
            Output::success(&format!("Image notes saved as {}", path.display()));
            Some(path)
        }
    };

    let mut video_url = None;
    if input.confirm("Do you want YouTube videos on the topic?")? {
        let url = youtube_search_url(&settings.notes.video_search_prefix, &subject, &chapter)?;
        Output::info(&format!(
            "Here is a YouTube link for {} Chapter {}: {}",
            subject, chapter, url
        ));
        (services.open_url)(&url)?;
        video_url = Some(url);
    }

    Ok(NotesOutcome {
        notes,
        format,
        file,
        video_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::input::ScriptedInput;
    use crate::config::ImageSettings;
    use crate::error::PlannerError;
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::path::Path;
    use std::sync::Mutex;

    struct FixedNotes {
        calls: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl NotesGenerator for FixedNotes {
        async fn generate_notes(&self, subject: &str, chapter: &str) -> Result<String> {
            self.calls
                .lock()
                .unwrap()
                .push((subject.to_string(), chapter.to_string()));
            Ok(format!("{} chapter {}\n- key idea", subject, chapter))
        }
    }

    struct FailingNotes;

    #[async_trait]
    impl NotesGenerator for FailingNotes {
        async fn generate_notes(&self, _subject: &str, _chapter: &str) -> Result<String> {
            Err(PlannerError::OpenAI("quota exceeded".to_string()))
        }
    }

    struct FakeSpeech;

    #[async_trait]
    impl SpeechSynthesizer for FakeSpeech {
        async fn to_speech(&self, text: &str, path: &Path) -> Result<PathBuf> {
            std::fs::write(path, text.as_bytes())?;
            Ok(path.to_path_buf())
        }
    }

    fn settings_in(dir: &Path) -> Settings {
        let mut settings = Settings::default();
        settings.general.output_dir = dir.display().to_string();
        settings
    }

    fn generator() -> FixedNotes {
        FixedNotes {
            calls: Mutex::new(Vec::new()),
        }
    }

    #[test]
    fn test_text_notes_without_videos() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        let generator = generator();
        let opened = RefCell::new(Vec::new());
        let open = |url: &str| -> Result<()> {
            opened.borrow_mut().push(url.to_string());
            Ok(())
        };
        let services = NotesServices {
            generator: &generator,
            speech: &FakeSpeech,
            images: ImageRenderer::new(ImageSettings::default()),
            open_url: &open,
        };
        let mut input = ScriptedInput::new(["Biology", "3", "Text", "n"]);

        let outcome = tokio_test::block_on(run_notes_with(&mut input, &settings, &services)).unwrap();

        assert_eq!(outcome.format, NotesFormat::Text);
        assert!(outcome.file.is_none());
        assert!(outcome.video_url.is_none());
        assert!(opened.borrow().is_empty());
        assert_eq!(
            *generator.calls.lock().unwrap(),
            vec![("Biology".to_string(), "3".to_string())]
        );
    }

    #[test]
    fn test_image_notes_and_video_link() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        let generator = generator();
        let opened = RefCell::new(Vec::new());
        let open = |url: &str| -> Result<()> {
            opened.borrow_mut().push(url.to_string());
            Ok(())
        };
        let services = NotesServices {
            generator: &generator,
            speech: &FakeSpeech,
            images: ImageRenderer::new(ImageSettings::default()),
            open_url: &open,
        };
        let mut input = ScriptedInput::new(["Chemistry", "5", "3", "y"]);

        let outcome = tokio_test::block_on(run_notes_with(&mut input, &settings, &services)).unwrap();

        let file = outcome.file.unwrap();
        assert_eq!(file, dir.path().join("image_notes.png"));
        assert!(file.exists());
        let url = "https://www.youtube.com/results?search_query=GCSE+Chemistry+Chapter+5";
        assert_eq!(outcome.video_url.as_deref(), Some(url));
        assert_eq!(*opened.borrow(), vec![url.to_string()]);
    }

    #[test]
    fn test_speech_notes_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        let generator = generator();
        let services = NotesServices {
            generator: &generator,
            speech: &FakeSpeech,
            images: ImageRenderer::new(ImageSettings::default()),
            open_url: &|_: &str| Ok(()),
        };
        let mut input = ScriptedInput::new(["Physics", "2", "Speech", "no"]);

        let outcome = tokio_test::block_on(run_notes_with(&mut input, &settings, &services)).unwrap();

        let file = outcome.file.unwrap();
        assert_eq!(file, dir.path().join("spoken_notes.mp3"));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), outcome.notes);
        assert_eq!(generator.calls.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_generation_failure_stops_flow() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings_in(dir.path());
        let services = NotesServices {
            generator: &FailingNotes,
            speech: &FakeSpeech,
            images: ImageRenderer::new(ImageSettings::default()),
            open_url: &|_: &str| Ok(()),
        };
        let mut input = ScriptedInput::new(["History", "1", "Image", "y"]);

        let result = tokio_test::block_on(run_notes_with(&mut input, &settings, &services));

        assert!(result.is_err());
        assert!(!settings.image_path().exists());
        // The video question is never asked.
        assert_eq!(input.remaining(), 1);
    }
}
