use std::{
    env,
    fmt::{Debug, Formatter, Result as FmtResult},
};

use log::{debug, error, warn};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use tourspec_domain::{Coach, FallbackReason, Feedback, SessionLog, WorkoutDay};

use crate::prompt;

const API_KEY_ENV: &str = "GEMINI_API_KEY";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<ContentPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ContentPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<GeminiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    message: String,
}

/// Coaching feedback backed by the Gemini text-generation API.
///
/// A missing credential is a regular state, not an error: analysis
/// short-circuits to the fixed not-configured message without any
/// network IO.
pub struct GeminiCoach {
    api_key: Option<String>,
    client: Client,
    model: String,
}

impl GeminiCoach {
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            client: Client::new(),
            model: DEFAULT_MODEL.to_owned(),
        }
    }

    /// Reads the credential from the `GEMINI_API_KEY` environment
    /// variable.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(env::var(API_KEY_ENV).ok().filter(|key| !key.is_empty()))
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn request_url(&self, api_key: &str) -> String {
        format!(
            "{API_BASE_URL}/models/{}:generateContent?key={api_key}",
            self.model
        )
    }

    fn request_body(prompt_text: String) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some(String::from("user")),
                parts: vec![ContentPart { text: prompt_text }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(0.7),
                max_output_tokens: Some(256),
            }),
        }
    }

    fn generate(&self, api_key: &str, prompt_text: String) -> Result<String, String> {
        let response = self
            .client
            .post(self.request_url(api_key))
            .json(&Self::request_body(prompt_text))
            .send()
            .map_err(|err| format!("request failed: {err}"))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|err| format!("failed to read response: {err}"))?;

        if !status.is_success() {
            return Err(format!("API error ({status}): {}", error_message(&body)));
        }

        let parsed = serde_json::from_str::<GeminiResponse>(&body)
            .map_err(|err| format!("failed to parse response: {err}"))?;
        if let Some(error) = parsed.error {
            return Err(format!("API error: {}", error.message));
        }

        extract_text(&parsed).ok_or_else(|| String::from("no content in response"))
    }
}

impl Coach for GeminiCoach {
    fn analyze(&self, session_log: &SessionLog, reference: &WorkoutDay) -> Feedback {
        let Some(api_key) = self.api_key.as_deref() else {
            warn!("coaching feedback requested without a configured API key");
            return Feedback::Unavailable(FallbackReason::NotConfigured);
        };

        debug!("requesting coaching feedback for \"{}\"", reference.title);
        match self.generate(api_key, prompt::build(session_log, reference)) {
            Ok(text) => Feedback::Coached(text),
            Err(reason) => {
                error!("could not generate coaching feedback: {reason}");
                Feedback::Unavailable(FallbackReason::Unreachable)
            }
        }
    }
}

impl Debug for GeminiCoach {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("GeminiCoach")
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

fn extract_text(response: &GeminiResponse) -> Option<String> {
    let text = &response
        .candidates
        .as_ref()?
        .first()?
        .content
        .as_ref()?
        .parts
        .first()?
        .text;
    if text.trim().is_empty() {
        return None;
    }
    Some(text.clone())
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<GeminiResponse>(body)
        .ok()
        .and_then(|response| response.error)
        .map_or_else(|| body.to_owned(), |error| error.message)
}
