use std::path::PathBuf;

/// 活動ログのデフォルトパス
pub const DEFAULT_LOG_PATH: &str = "library_log.txt";

/// トレースフィルタのデフォルト
pub const DEFAULT_TRACE_FILTER: &str = "library_catalog=info";

/// アプリケーション設定
///
/// 起動時に環境変数から一度だけ読み込む。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// 活動ログのパス（`LIBRARY_LOG_PATH`）
    pub log_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の参照関数から設定を組み立てる
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_path = lookup("LIBRARY_LOG_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH));

        Self { log_path }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}
