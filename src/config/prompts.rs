//! Prompt templates for notes generation.
//!
//! The defaults can be overridden with a TOML file named in the settings.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Prompts {
    pub notes: NotesPrompts,
    /// Custom variables from config, available in all prompts.
    #[serde(skip)]
    pub variables: HashMap<String, String>,
}

/// Prompts for study notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesPrompts {
    pub system: String,
    pub user: String,
}

impl Default for NotesPrompts {
    fn default() -> Self {
        Self {
            system: r#"You are a patient tutor writing revision notes for a secondary school student.

Guidelines:
- Cover the key definitions, facts and worked examples for the chapter
- Use short headings and bullet points
- Keep each line brief so the notes read well aloud and fit on an image
- Do not invent chapter content you are unsure of; stay with the core syllabus"#
                .to_string(),

            user: "Generate notes for {{subject}} Chapter {{chapter}}.".to_string(),
        }
    }
}

impl Prompts {
    /// Load prompts, applying an optional override file and custom variables.
    pub fn load(
        custom_file: Option<&str>,
        custom_variables: Option<&HashMap<String, String>>,
    ) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        if let Some(file) = custom_file {
            let path = shellexpand::tilde(file).to_string();
            let content = std::fs::read_to_string(&path)?;
            prompts = toml::from_str(&content)?;
        }

        if let Some(vars) = custom_variables {
            prompts.variables = vars.clone();
        }

        Ok(prompts)
    }

    /// Render a prompt template with the given variables.
    ///
    /// Placeholders are filled in one pass over the template, so text inside
    /// a substituted value is never expanded again. Unknown placeholders are
    /// left as written.
    pub fn render(template: &str, vars: &HashMap<String, String>) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find("{{") {
            result.push_str(&rest[..open]);
            let after_open = &rest[open + 2..];
            let Some(close) = after_open.find("}}") else {
                rest = &rest[open..];
                break;
            };

            let key = &after_open[..close];
            match vars.get(key.trim()) {
                Some(value) => result.push_str(value),
                None => {
                    result.push_str("{{");
                    result.push_str(key);
                    result.push_str("}}");
                }
            }
            rest = &after_open[close + 2..];
        }

        result.push_str(rest);
        result
    }

    /// Render a template with both provided variables and custom config variables.
    /// Provided variables take precedence over custom config variables.
    pub fn render_with_custom(&self, template: &str, vars: &HashMap<String, String>) -> String {
        let mut merged = self.variables.clone();
        for (key, value) in vars {
            merged.insert(key.clone(), value.clone());
        }
        Self::render(template, &merged)
    }

    /// The user prompt for one subject and chapter.
    pub fn notes_request(&self, subject: &str, chapter: &str) -> String {
        let mut vars = HashMap::new();
        vars.insert("subject".to_string(), subject.to_string());
        vars.insert("chapter".to_string(), chapter.to_string());
        self.render_with_custom(&self.notes.user, &vars)
    }
}
