//! Command-line overrides, applied after every file and env source

use super::FileConfig;
use mindreader_domain::{OutputFormat, QuestionStrategy};
use std::path::PathBuf;

/// Values given on the command line. `None` leaves the loaded value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub catalog: Option<PathBuf>,
    pub strategy: Option<QuestionStrategy>,
    pub format: Option<OutputFormat>,
    /// Also switches the transcript on
    pub transcript: Option<PathBuf>,
}

impl FileConfig {
    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(path) = overrides.catalog {
            self.catalog.path = path;
        }
        if let Some(strategy) = overrides.strategy {
            self.engine.strategy = strategy;
        }
        if let Some(format) = overrides.format {
            self.output.format = Some(format);
        }
        if let Some(path) = overrides.transcript {
            self.transcript.enabled = true;
            self.transcript.path = Some(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigLoader;
    use figment::Jail;

    #[test]
    fn test_empty_overrides_keep_loaded_values() {
        let mut config: FileConfig =
            toml::from_str("[engine]\nstrategy = \"target_value\"\n[output]\nformat = \"json\"\n")
                .unwrap();
        let before = config.clone();

        config.apply_overrides(ConfigOverrides::default());
        assert_eq!(config, before);
    }

    #[test]
    fn test_transcript_flag_enables_transcript() {
        let mut config = FileConfig::default();
        assert!(config.transcript.active_path().is_none());

        config.apply_overrides(ConfigOverrides {
            transcript: Some(PathBuf::from("logs/games.jsonl")),
            ..Default::default()
        });

        assert!(config.transcript.enabled);
        assert_eq!(
            config.transcript.active_path(),
            Some(&PathBuf::from("logs/games.jsonl"))
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flags_beat_config_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "mindreader.toml",
                r#"
[engine]
strategy = "target_value"

[catalog]
path = "heroes.json"

[output]
format = "json"

[transcript]
enabled = false
path = "file.jsonl"
"#,
            )?;

            let mut config = ConfigLoader::load(None).map_err(|e| *e)?;
            assert_eq!(config.engine.strategy, QuestionStrategy::TargetValue);

            config.apply_overrides(ConfigOverrides {
                catalog: Some(PathBuf::from("villains.json")),
                strategy: Some(QuestionStrategy::Ternary),
                format: Some(OutputFormat::Text),
                transcript: Some(PathBuf::from("flag.jsonl")),
            });

            assert_eq!(config.engine.strategy, QuestionStrategy::Ternary);
            assert_eq!(config.to_engine_config().strategy, QuestionStrategy::Ternary);
            assert_eq!(config.catalog.path, PathBuf::from("villains.json"));
            assert_eq!(config.output.resolved_format(), OutputFormat::Text);
            assert_eq!(
                config.transcript.active_path(),
                Some(&PathBuf::from("flag.jsonl"))
            );
            Ok(())
        });
    }

    #[test]
    fn test_strategy_flag_beats_env() {
        Jail::expect_with(|jail| {
            jail.set_env("MINDREADER_ENGINE__STRATEGY", "target_value");

            let mut config = ConfigLoader::load(None).map_err(|e| *e)?;
            config.apply_overrides(ConfigOverrides {
                strategy: Some(QuestionStrategy::Ternary),
                ..Default::default()
            });

            assert_eq!(config.engine.strategy, QuestionStrategy::Ternary);
            Ok(())
        });
    }
}
