//! User configuration from TOML (`[user]` section)

use serde::{Deserialize, Serialize};

/// Raw user configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUserConfig {
    /// Language of the current user; the environment locale when unset
    pub lang: Option<String>,
}
