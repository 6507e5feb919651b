use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tickler_core::models::TaskFilter;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Path of the SQLite database holding the task list
    pub database_path: String,
    /// Seconds between reminder checks in `tickler watch`
    pub check_interval_secs: u64,
    /// Ring the terminal bell when a reminder fires
    pub bell: bool,
    /// Which tasks `tickler list` shows without flags
    pub default_filter: TaskFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: "tickler.db".to_string(),
            check_interval_secs: 5,
            bell: true,
            default_filter: TaskFilter::Pending,
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("tickler.toml"))
            .merge(Env::prefixed("TICKLER_").ignore(&["log"]))
    }
}
