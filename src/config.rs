use url::Url;

/// Environment variable holding the API base url.
pub const API_URL_ENV: &str = "IP_PROXIMITY_API_URL";

pub const DEFAULT_API_URL: &str = "http://localhost:8080/v1";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid API url {value:?}: {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}

/// Runtime configuration of the visualizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_base: Url,
}

impl Default for Config {
    // DEFAULT_API_URL is a constant, checked by `test_default_url_is_valid`
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_URL).expect("default API url is valid"),
        }
    }
}

impl Config {
    /// Builds the config from a base url string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if `api_base` is not an absolute url.
    pub fn new(api_base: &str) -> Result<Self, ConfigError> {
        let api_base = Url::parse(api_base).map_err(|source| ConfigError::InvalidUrl {
            value: api_base.to_string(),
            source,
        })?;
        Ok(Self { api_base })
    }

    /// Reads the API base url from `IP_PROXIMITY_API_URL`.
    ///
    /// Native builds check the process environment first and then the value
    /// captured at compile time. Web builds only have the compile time value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the variable is set to an invalid url.
    pub fn from_env() -> Result<Self, ConfigError> {
        match lookup_api_url() {
            Some(value) => Self::new(&value),
            None => Ok(Self::default()),
        }
    }

    /// Full url of an API endpoint, e.g. `endpoint("nodes")`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn lookup_api_url() -> Option<String> {
    std::env::var(API_URL_ENV)
        .ok()
        .or_else(|| option_env!("IP_PROXIMITY_API_URL").map(str::to_string))
        .filter(|v| !v.trim().is_empty())
}

#[cfg(target_arch = "wasm32")]
fn lookup_api_url() -> Option<String> {
    option_env!("IP_PROXIMITY_API_URL")
        .map(str::to_string)
        .filter(|v| !v.trim().is_empty())
}
