use std::env;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.shecodes.io".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LookupConfig {
    /// Credential for the dictionary service, supplied via
    /// DICTIONARY_API_KEY; never committed to source
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl LookupConfig {
    pub fn new() -> Self {
        let api_key = env::var("DICTIONARY_API_KEY").unwrap_or_default();
        let api_url =
            env::var("DICTIONARY_API_URL").unwrap_or_else(|_| default_api_url());

        Self { api_key, api_url }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
        }
    }
}
