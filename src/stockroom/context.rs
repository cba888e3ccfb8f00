//! Wires config, scope and stores together for a UI client.

use crate::api::StockroomApi;
use crate::commands::{StorePaths, Stores};
use crate::config::StockroomConfig;
use crate::error::Result;
use crate::model::{RecordKind, Scope};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use log::debug;
use std::path::{Path, PathBuf};

pub struct StockroomContext {
    pub api: StockroomApi<FileStore>,
    pub scope: Scope,
    pub config: StockroomConfig,
}

pub fn global_data_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "stockroom", "stockroom").map(|d| d.data_dir().to_path_buf())
}

/// Builds the API for `cwd`.
///
/// Project scope keeps store files in `cwd` itself; global scope uses the
/// per-user data directory. `file_override` replaces the configured file for
/// one record kind; relative overrides resolve against `cwd`.
pub fn initialize(
    cwd: &Path,
    use_global: bool,
    file_override: Option<(RecordKind, PathBuf)>,
) -> Result<StockroomContext> {
    let paths = StorePaths {
        project: cwd.to_path_buf(),
        global: global_data_dir(),
    };
    let scope = if use_global {
        Scope::Global
    } else {
        Scope::Project
    };

    let dir = paths.scope_dir(scope)?;
    let config = StockroomConfig::load(&dir)?;
    debug!("Using {:?} scope at {}", scope, dir.display());

    let mut stores = Stores::from_fn(|kind| {
        FileStore::new(config.store_path(&dir, kind)).with_bom(config.write_bom)
    });
    if let Some((kind, path)) = file_override {
        let path = cwd.join(path);
        debug!("Overriding {} store with {}", kind, path.display());
        stores.replace(kind, FileStore::new(path).with_bom(config.write_bom));
    }

    Ok(StockroomContext {
        api: StockroomApi::new(stores, paths),
        scope,
        config,
    })
}
