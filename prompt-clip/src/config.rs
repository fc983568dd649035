use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use clip_store::db::DATABASE_FILE;

/// Directory under the home directory holding the database
pub const DATA_DIR_NAME: &str = "prompt-clip-db";

/// Application configuration
///
/// Every option can also be set through the environment (a `.env` file in
/// the working directory is loaded first):
///
/// | Variable | Default |
/// |----------|---------|
/// | PROMPT_CLIP_DATA_DIR | ~/prompt-clip-db |
/// | PROMPT_CLIP_LOG_DIR | <data dir>/logs |
/// | PROMPT_CLIP_LOG | info |
/// | PROMPT_CLIP_TOAST_MS | 5000 |
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Keep reusable prompts one keystroke from the clipboard", long_about = None)]
pub struct AppConfig {
    /// Directory holding the SQLite database
    #[arg(long, env = "PROMPT_CLIP_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory for rolling log files
    #[arg(long, env = "PROMPT_CLIP_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, env = "PROMPT_CLIP_LOG", default_value = "info")]
    pub log_level: String,

    /// How long the "copied" toast stays up, in milliseconds
    #[arg(long, env = "PROMPT_CLIP_TOAST_MS", default_value_t = 5000)]
    pub toast_ms: u64,
}

impl AppConfig {
    /// Falls back to the current directory when there is no home directory
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(DATA_DIR_NAME)
        })
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .unwrap_or_else(|| self.data_dir().join("logs"))
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir().join(DATABASE_FILE)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_derive_from_data_dir() {
        let config =
            AppConfig::try_parse_from(["prompt-clip", "--data-dir", "/tmp/clips"]).unwrap();
        assert_eq!(config.database_path(), PathBuf::from("/tmp/clips/db.sqlite"));
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/clips/logs"));
    }

    #[test]
    fn test_toast_duration() {
        let config = AppConfig::try_parse_from([
            "prompt-clip",
            "--data-dir",
            "/tmp/clips",
            "--toast-ms",
            "1500",
        ])
        .unwrap();
        assert_eq!(config.toast_duration(), Duration::from_millis(1500));
    }

    #[test]
    fn test_explicit_log_dir_wins() {
        let config = AppConfig::try_parse_from([
            "prompt-clip",
            "--data-dir",
            "/tmp/clips",
            "--log-dir",
            "/var/log/clips",
        ])
        .unwrap();
        assert_eq!(config.log_dir(), PathBuf::from("/var/log/clips"));
    }
}
