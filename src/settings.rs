use serde::{
    Deserialize,
    Serialize,
};

use crate::persistence::{
    load_json_or_default,
    save_json,
};

const SETTINGS_FILE: &str = "settings.json";

pub const DEFAULT_API_URL: &str = "https://backend-proj-mu.vercel.app";

#[derive(Clone, Serialize, Deserialize)]
pub struct SettingsData {
    pub api_base_url: String,
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        let api_base_url =
            std::env::var("PREPWISE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self { api_base_url, dark_mode: true }
    }
}

impl SettingsData {
    pub fn load() -> Self {
        load_json_or_default::<SettingsData>(SETTINGS_FILE)
    }

    pub fn save(&self) {
        if let Err(e) = save_json(self, SETTINGS_FILE) {
            log::error!("Failed to save settings: {}", e);
        }
    }
}
