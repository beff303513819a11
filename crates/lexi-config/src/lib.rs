use serde::{Deserialize, Serialize};

use self::lookup::LookupConfig;

pub mod lookup;

#[derive(Default, Serialize, Deserialize)]
pub struct Config {
    pub lookup: LookupConfig,
}

impl Config {
    /// Resolve configuration from the environment
    pub fn new() -> Self {
        Config {
            lookup: LookupConfig::new(),
        }
    }
}
