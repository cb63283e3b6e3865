use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ChatSettings {
    /// Render full row contents into the spreadsheet context.
    #[serde(default = "default_verbose_context")]
    pub verbose_context: bool,
    /// Hard deadline for one model call, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_verbose_context() -> bool {
    true
}

fn default_request_timeout_secs() -> u64 {
    60
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            verbose_context: default_verbose_context(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub chat: ChatSettings,
}
