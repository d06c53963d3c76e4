mod loader;
mod model;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
};
pub use model::{Config, ScanConfig};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert!(config.scan.categories.is_empty());
        assert!(!config.scan.sovereign);
        assert_eq!(config.scan.max_depth, 3);
    }
}
