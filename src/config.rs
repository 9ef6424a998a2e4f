/// Environment variable holding a comma-separated resource list.
pub const BOXES_ENV: &str = "BOXBOOK_BOXES";

const DEFAULT_BOX_COUNT: usize = 8;

/// `"Box 1"` through `"Box 8"`.
pub fn default_boxes() -> Vec<String> {
    (1..=DEFAULT_BOX_COUNT).map(|i| format!("Box {i}")).collect()
}

/// Split on commas, trimming whitespace and dropping blank entries.
pub fn parse_resource_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Debug)]
pub enum ConfigError {
    /// The resource list was given but names nothing.
    NoResources,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NoResources => write!(f, "{BOXES_ENV} is set but lists no resources"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub resources: Vec<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            resources: default_boxes(),
        }
    }
}

impl StoreConfig {
    pub fn new<I, S>(resources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            resources: resources.into_iter().map(Into::into).collect(),
        }
    }

    /// Read the resource list from `BOXBOOK_BOXES`, falling back to the defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_value(std::env::var(BOXES_ENV).ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Result<Self, ConfigError> {
        let Some(raw) = value else {
            return Ok(Self::default());
        };
        let resources = parse_resource_list(raw);
        if resources.is_empty() {
            return Err(ConfigError::NoResources);
        }
        Ok(Self { resources })
    }
}
