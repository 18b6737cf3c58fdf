use std::str::FromStr;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use crate::errors::ConfigError;
use crate::initialization::General;

const PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {M} - {m}{n}";

/// Sets up log4rs with a console appender and/or a file appender
///
/// # Arguments
///
/// * 'general' - general configuration holding log level and destinations
pub fn setup_logger(general: &General) -> Result<(), ConfigError> {
    let config = logger_config(general)?;
    log4rs::init_config(config)?;

    Ok(())
}

fn logger_config(general: &General) -> Result<Config, ConfigError> {
    let level = LevelFilter::from_str(&general.log_level)
        .map_err(|_| ConfigError(format!("invalid log level '{}'", general.log_level)))?;

    let mut builder = Config::builder();
    let mut root = Root::builder();

    if general.log_to_stdout {
        let stdout = ConsoleAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build();
        builder = builder.appender(Appender::builder().build("stdout", Box::new(stdout)));
        root = root.appender("stdout");
    }

    if let Some(path) = &general.log_path {
        let file = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(PATTERN)))
            .build(path)?;
        builder = builder.appender(Appender::builder().build("file", Box::new(file)));
        root = root.appender("file");
    }

    Ok(builder.build(root.build(level))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::conditions::ThemeMode;

    fn general(level: &str, log_path: Option<String>) -> General {
        General {
            log_path,
            log_level: level.to_string(),
            log_to_stdout: true,
            theme_mode: ThemeMode::Auto,
        }
    }

    #[test]
    fn should_build_logger_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("weatherboard.log").to_str().unwrap().to_string();

        let config = logger_config(&general("debug", Some(path))).unwrap();

        assert_eq!(config.appenders().len(), 2);
        assert_eq!(config.root().level(), LevelFilter::Debug);
    }

    #[test]
    fn should_reject_unknown_level() {
        assert!(logger_config(&general("chatty", None)).is_err());
    }
}
