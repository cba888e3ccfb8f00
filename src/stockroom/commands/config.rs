use crate::commands::{CmdMessage, CmdResult, StorePaths};
use crate::config::StockroomConfig;
use crate::error::{Result, StockroomError};
use crate::model::Scope;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or updates `stockroom.json` in the scope directory.
///
/// Unknown keys and invalid values are errors; nothing is written unless the
/// new value validates.
pub fn run(paths: &StorePaths, scope: Scope, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.scope_dir(scope)?;
    let mut config = StockroomConfig::load(&dir)?;

    let mut result = CmdResult::default();
    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            let value = lookup(&config, &key)?;
            result.add_message(CmdMessage::info(value));
            return Ok(result);
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value).map_err(StockroomError::Config)?;
            config.save(&dir)?;
            let stored = lookup(&config, &key)?;
            result.add_message(CmdMessage::success(format!("{} set to {}", key, stored)));
        }
    }
    Ok(result.with_config(config))
}

fn lookup(config: &StockroomConfig, key: &str) -> Result<String> {
    config
        .get(key)
        .ok_or_else(|| StockroomError::Config(format!("Unknown config key: {}", key)))
}
