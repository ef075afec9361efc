use snake_common::config::{ConfigContentProvider, ConfigManager, ConfigSerializer};
use snake_common::snake::GameSettings;

use crate::config::Config;

/// Where the host keeps what outlives a run.
pub trait ProfileStore {
    fn save_high_score(&self, high_score: u32) -> Result<(), String>;
    fn save_settings(&self, settings: GameSettings) -> Result<(), String>;
}

impl<TProvider, TSerializer> ProfileStore for ConfigManager<TProvider, Config, TSerializer>
where
    TProvider: ConfigContentProvider,
    TSerializer: ConfigSerializer<Config>,
{
    fn save_high_score(&self, high_score: u32) -> Result<(), String> {
        self.update(|config| config.high_score = config.high_score.max(high_score))
            .map(|_| ())
    }

    fn save_settings(&self, settings: GameSettings) -> Result<(), String> {
        self.update(|config| config.game = settings).map(|_| ())
    }
}
