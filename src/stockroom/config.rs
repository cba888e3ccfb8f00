use crate::error::{Result, StockroomError};
use crate::model::RecordKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "stockroom.json";

pub const KEYS: &[&str] = &["product-file", "stock-file", "supplier-file", "write-bom"];

/// Configuration for stockroom, stored in `stockroom.json` in the scope dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct StockroomConfig {
    #[serde(default = "default_product_file")]
    pub product_file: String,

    #[serde(default = "default_stock_file")]
    pub stock_file: String,

    #[serde(default = "default_supplier_file")]
    pub supplier_file: String,

    /// Start new store files with a UTF-8 BOM (helps some spreadsheet apps).
    #[serde(default)]
    pub write_bom: bool,
}

fn default_product_file() -> String {
    RecordKind::Product.default_file_name()
}

fn default_stock_file() -> String {
    RecordKind::Stock.default_file_name()
}

fn default_supplier_file() -> String {
    RecordKind::Supplier.default_file_name()
}

impl Default for StockroomConfig {
    fn default() -> Self {
        Self {
            product_file: default_product_file(),
            stock_file: default_stock_file(),
            supplier_file: default_supplier_file(),
            write_bom: false,
        }
    }
}

impl StockroomConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&config_path).map_err(|e| StockroomError::io(&config_path, e))?;
        let config: StockroomConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(|e| StockroomError::io(config_dir, e))?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content).map_err(|e| StockroomError::io(&config_path, e))?;
        Ok(())
    }

    pub fn file_name(&self, kind: RecordKind) -> &str {
        match kind {
            RecordKind::Product => &self.product_file,
            RecordKind::Stock => &self.stock_file,
            RecordKind::Supplier => &self.supplier_file,
        }
    }

    /// Resolves the store file for `kind`. Relative names are taken from `dir`.
    pub fn store_path(&self, dir: &Path, kind: RecordKind) -> PathBuf {
        dir.join(self.file_name(kind))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "product-file" => Some(self.product_file.clone()),
            "stock-file" => Some(self.stock_file.clone()),
            "supplier-file" => Some(self.supplier_file.clone()),
            "write-bom" => Some(self.write_bom.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "product-file" | "stock-file" | "supplier-file" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(format!("{} cannot be empty", key));
                }
                let slot = match key {
                    "product-file" => &mut self.product_file,
                    "stock-file" => &mut self.stock_file,
                    _ => &mut self.supplier_file,
                };
                *slot = value.to_string();
                Ok(())
            }
            "write-bom" => {
                self.write_bom = parse_bool(value)
                    .ok_or_else(|| format!("Invalid value for write-bom: {}", value))?;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|k| self.get(k).map(|v| (*k, v)))
            .collect()
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StockroomConfig::default();
        assert_eq!(config.product_file, "product.csv");
        assert_eq!(config.stock_file, "stock.csv");
        assert_eq!(config.supplier_file, "supplier.csv");
        assert!(!config.write_bom);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = StockroomConfig::load(dir.path()).unwrap();
        assert_eq!(config, StockroomConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("nested");

        let mut config = StockroomConfig::default();
        config.set("stock-file", "inventory.csv").unwrap();
        config.set("write-bom", "yes").unwrap();
        config.save(&target).unwrap();

        let loaded = StockroomConfig::load(&target).unwrap();
        assert_eq!(loaded.stock_file, "inventory.csv");
        assert!(loaded.write_bom);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{ "supplier-file": "vendors.csv" }"#,
        )
        .unwrap();

        let config = StockroomConfig::load(dir.path()).unwrap();
        assert_eq!(config.supplier_file, "vendors.csv");
        assert_eq!(config.product_file, "product.csv");
    }

    #[test]
    fn test_invalid_json_is_a_serialization_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();

        let err = StockroomConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, StockroomError::Serialization(_)));
    }

    #[test]
    fn test_set_rejects_unknown_keys_and_bad_values() {
        let mut config = StockroomConfig::default();
        assert!(config.set("colour", "red").is_err());
        assert!(config.set("write-bom", "maybe").is_err());
        assert!(config.set("product-file", "   ").is_err());
        assert_eq!(config, StockroomConfig::default());
    }

    #[test]
    fn test_store_path_resolution() {
        let mut config = StockroomConfig::default();
        let dir = Path::new("/data/shop");
        assert_eq!(
            config.store_path(dir, RecordKind::Product),
            PathBuf::from("/data/shop/product.csv")
        );

        config.set("product-file", "/srv/products.csv").unwrap();
        assert_eq!(
            config.store_path(dir, RecordKind::Product),
            PathBuf::from("/srv/products.csv")
        );
    }

    #[test]
    fn test_entries_cover_every_key() {
        let config = StockroomConfig::default();
        let keys: Vec<_> = config.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, KEYS);
    }
}
