use async_trait::async_trait;
use reqwest::Client;
use crate::enums::ai_provider_error::AiProviderError;
use crate::helpers::prompt_generator;
use crate::services::response_interpreter::ResponseInterpreter;
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_part::GeminiPart;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::ai::gemini::gemini_response::GeminiResponse;
use crate::structs::ai::gemini::gemini_settings::GeminiSettings;
use crate::structs::analysis_response::AnalysisResponse;
use crate::structs::github::repository_data::RepositoryData;
use crate::traits::ai_provider::AiProvider;

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Clone)]
pub struct GeminiProvider {
    settings: GeminiSettings,
    client: Client,
}

impl GeminiProvider {
    pub fn new(settings: GeminiSettings) -> Self {
        Self {
            settings,
            client: Client::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.settings.api_key.is_some()
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    fn get_request(&self, prompt: String) -> GeminiRequest {
        let generation_config = if self.settings.temperature.is_some() || self.settings.max_output_tokens.is_some() {
            Some(GeminiGenerationConfig {
                temperature: self.settings.temperature,
                max_output_tokens: self.settings.max_output_tokens,
                candidate_count: Some(1),
            })
        } else {
            None
        };

        GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart { text: Some(prompt) }],
            }],
            generation_config,
        }
    }

    pub async fn get_non_streaming_response(&self, prompt: String) -> Result<String, AiProviderError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or_else(|| AiProviderError::NotConfigured("Gemini API key not configured".to_string()))?;

        log::debug!("📦 Request model: {}", self.settings.model);

        let url = format!(
            "{}/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, api_key)
            .json(&self.get_request(prompt))
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::error!("❌ Gemini API Error Response: {}", error_text);

            return Err(match status.as_u16() {
                400 => AiProviderError::ApiError(format!("Bad request: {}", error_text)),
                401 => AiProviderError::AuthenticationError(error_text),
                403 => AiProviderError::ApiError(format!("Forbidden: {}", error_text)),
                429 => AiProviderError::ApiError(format!("Rate limit exceeded: {}", error_text)),
                _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, error_text)),
            });
        }

        let body: GeminiResponse = response
            .json()
            .await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        body.text()
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))
    }

    /// Prompt, call and interpret in one go. A failed call never reaches the
    /// interpreter.
    pub async fn analyze_repository(&self, data: &RepositoryData) -> Result<AnalysisResponse, AiProviderError> {
        let request = prompt_generator::generate_analysis_request(data);
        log::debug!("Analyzing {} with {}", request.source.repo_name, self.settings.model);

        let raw_response = self.generate(request.prompt).await?;
        let analysis = ResponseInterpreter::interpret(&raw_response);

        Ok(AnalysisResponse {
            analysis,
            raw_response,
        })
    }

    pub async fn summarize(&self, text: &str, max_words: usize) -> Result<String, AiProviderError> {
        self.generate(prompt_generator::generate_summary_prompt(text, max_words)).await
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn generate(&self, prompt: String) -> Result<String, AiProviderError> {
        self.get_non_streaming_response(prompt).await
    }
}
