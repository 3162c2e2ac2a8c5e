use serde::{Deserialize, Serialize};

const APP_NAME: &str = "flickr-search";
const API_KEY_ENV_VAR: &str = "FLICKR_API_KEY";
const DEFAULT_PER_PAGE: u32 = 20;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read or write configuration: {0}")]
    Confy(#[from] confy::ConfyError),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub api_key: Option<String>,
    pub per_page: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: None,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Config {
    /// Load the configuration from the default location
    pub fn load() -> Result<Self, ConfigError> {
        Ok(confy::load(APP_NAME, None)?)
    }

    /// Save the configuration to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, None, self)?;
        Ok(())
    }

    /// The Flickr API key. `FLICKR_API_KEY` takes precedence over the stored key.
    pub fn api_key(&self) -> Option<String> {
        resolve_api_key(std::env::var(API_KEY_ENV_VAR).ok(), self.api_key.as_deref())
    }

    pub fn set_api_key(&mut self, api_key: String) -> Result<(), ConfigError> {
        self.api_key = Some(api_key);
        self.save()
    }
}

fn resolve_api_key(from_env: Option<String>, stored: Option<&str>) -> Option<String> {
    from_env
        .filter(|key| !key.is_empty())
        .or_else(|| stored.filter(|key| !key.is_empty()).map(str::to_owned))
}
