/// Everything the Gemini provider needs, resolved up front from config and
/// environment so the provider never reads process state itself.
#[derive(Debug, Clone, PartialEq)]
pub struct GeminiSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}
