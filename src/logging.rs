use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Console logging settings. Logs go to stderr so stdout stays reserved for the menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub console_level: LevelFilter,
    pub show_time: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            console_level: LevelFilter::Warn,
            show_time: false,
        }
    }
}

/// Installs the global logger. Only the first call in a process can succeed; later calls return an error
/// and leave the installed logger in place.
pub fn init_logging(config: &LogConfig) -> Result<(), log::SetLoggerError> {
    let mut builder = ConfigBuilder::new();
    builder.set_target_level(LevelFilter::Off);
    if !config.show_time {
        builder.set_time_level(LevelFilter::Off);
    }
    TermLogger::init(
        config.console_level,
        builder.build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
}
