//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;

const PROJECT_FILES: [&str; 2] = ["mindreader.toml", ".mindreader.toml"];
const ENV_PREFIX: &str = "MINDREADER_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `MINDREADER_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./mindreader.toml` or `./.mindreader.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/mindreader/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        // Add project-level config (first name found wins)
        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // MINDREADER_ENGINE__STRATEGY -> engine.strategy
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/mindreader/config.toml if set,
    /// otherwise falls back to ~/.config/mindreader/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("mindreader").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .into_iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        let env_vars: Vec<String> = std::env::vars()
            .map(|(key, _)| key)
            .filter(|key| key.starts_with(ENV_PREFIX))
            .collect();
        if env_vars.is_empty() {
            println!("  [     ] Env:     {}*", ENV_PREFIX);
        } else {
            println!("  [FOUND] Env:     {}", env_vars.join(", "));
        }

        // Explicit config
        if let Some(path) = config_path {
            if path.exists() {
                println!("  [FOUND] Explicit: {}", path.display());
            } else {
                println!("  [     ] Explicit: {} (not found)", path.display());
            }
        }

        // Project config
        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./mindreader.toml or ./.mindreader.toml");
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use mindreader_domain::{OutputFormat, QuestionStrategy};

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.catalog.path, PathBuf::from("characters.json"));
        assert_eq!(config.engine.strategy, QuestionStrategy::Ternary);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("mindreader"));
    }

    #[test]
    fn test_project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "mindreader.toml",
                r#"
[engine]
strategy = "target_value"

[catalog]
path = "heroes.json"
"#,
            )?;

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.engine.strategy, QuestionStrategy::TargetValue);
            assert_eq!(config.catalog.path, PathBuf::from("heroes.json"));
            assert!(config.output.color);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_file(".mindreader.toml", "[output]\nformat = \"text\"\ncolor = false\n")?;
            jail.create_file("custom.toml", "[output]\nformat = \"json\"\n")?;

            let explicit = PathBuf::from("custom.toml");
            let config = ConfigLoader::load(Some(&explicit)).map_err(|e| *e)?;
            assert_eq!(config.output.format, Some(OutputFormat::Json));
            // Keys the explicit file leaves out keep the project value
            assert!(!config.output.color);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_file("mindreader.toml", "[engine]\nstrategy = \"ternary\"\n")?;
            jail.set_env("MINDREADER_ENGINE__STRATEGY", "target_value");
            jail.set_env("MINDREADER_TRANSCRIPT__ENABLED", "true");
            jail.set_env("MINDREADER_TRANSCRIPT__PATH", "games.jsonl");

            let config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.engine.strategy, QuestionStrategy::TargetValue);
            assert_eq!(
                config.transcript.active_path(),
                Some(&PathBuf::from("games.jsonl"))
            );
            Ok(())
        });
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        Jail::expect_with(|jail| {
            jail.create_file("mindreader.toml", "[engine]\nstrategy = \"binary\"\n")?;
            assert!(ConfigLoader::load(None).is_err());
            Ok(())
        });
    }
}
