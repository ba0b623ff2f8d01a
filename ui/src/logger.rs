use crate::config::LoggingConfig;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

/// Maps a configured level name to a filter. Unknown names mean `Info`.
pub fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// Installs the global logger.
///
/// Everything at the configured level goes to the log file (`[logging] file`,
/// else `default_file`). Warnings and errors are also echoed, coloured, to
/// stderr.
pub fn setup_logger(
    config: &LoggingConfig,
    default_file: Option<&Path>,
) -> Result<(), log::SetLoggerError> {
    let log_level = parse_level(config.level());

    let colors = ColoredLevelConfig::new()
        .trace(Color::BrightBlack)
        .debug(Color::BrightBlue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let stderr_config = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(LevelFilter::Warn)
        .chain(std::io::stderr());

    let mut base_config = fern::Dispatch::new().level(log_level).chain(stderr_config);

    let log_file: Option<PathBuf> = config
        .file()
        .map(PathBuf::from)
        .or_else(|| default_file.map(Path::to_path_buf));

    if let Some(file_path) = log_file {
        match OpenOptions::new().create(true).append(true).open(&file_path) {
            Ok(file) => {
                let file_config = fern::Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "[{} {} {}] {}",
                            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                            record.level(),
                            record.target(),
                            message
                        ))
                    })
                    .chain(file);
                base_config = base_config.chain(file_config);
            }
            Err(e) => {
                eprintln!(
                    "Warning: Failed to open log file '{}': {}",
                    file_path.display(),
                    e
                );
                eprintln!("Continuing without file logging.");
            }
        }
    }

    base_config.apply()?;
    log::info!("Logger initialized with level: {}", config.level());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("TRACE"), LevelFilter::Trace);
        assert_eq!(parse_level("warn"), LevelFilter::Warn);
        assert_eq!(parse_level("off"), LevelFilter::Off);
        assert_eq!(parse_level("chatty"), LevelFilter::Info);
    }
}
