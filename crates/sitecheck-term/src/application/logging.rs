use std::fs::File;
use std::fs::OpenOptions;
use std::path::Path;
use std::str::FromStr;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

fn open_log_file(path: &Path) -> Result<File> {
    return OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| return format!("Failed to open log file {}", path.display()));
}

fn parse_level(level: &str) -> Result<Level> {
    return Level::from_str(level).map_err(|_| return anyhow!("Invalid log level: {level}"));
}

/// Sends JSON logs to the configured file. Keep the guard alive until exit so
/// buffered lines are flushed.
pub fn init(config: &Config) -> Result<WorkerGuard> {
    let level = parse_level(&config.get(ConfigKey::LogLevel))?;
    let file = open_log_file(Path::new(&config.get(ConfigKey::LogFile)))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .json()
        .with_max_level(level)
        .with_writer(writer)
        .try_init()
        .map_err(|err| return anyhow!("Failed to set up logging: {err}"))?;

    return Ok(guard);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_creates_and_appends_to_the_log_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("debug.log");
        std::fs::write(&path, "existing\n")?;

        let mut file = open_log_file(&path)?;
        std::io::Write::write_all(&mut file, b"appended\n")?;

        assert_eq!(std::fs::read_to_string(&path)?, "existing\nappended\n");
        return Ok(());
    }

    #[test]
    fn it_fails_when_the_log_file_cannot_be_opened() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("missing").join("debug.log");

        let err = open_log_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to open log file"));
        return Ok(());
    }

    #[test]
    fn it_parses_levels() {
        assert_eq!(parse_level("debug").unwrap(), Level::DEBUG);
        assert_eq!(parse_level("warn").unwrap(), Level::WARN);
        assert!(parse_level("loud").is_err());
    }
}
