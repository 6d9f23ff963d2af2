use crate::ports::activity_log::{ActivityLog as ActivityLogTrait, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// 活動ログのファイル実装
///
/// 1行 = `<YYYY-MM-DD> - <message>`。
/// 追記のたびにファイルを開き、書き込み・フラッシュしてから閉じる。
/// 操作をまたいでファイルハンドルを保持しない。
pub struct ActivityLog {
    path: PathBuf,
}

impl ActivityLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// ログ1行の書式
pub fn format_line(logged_on: NaiveDate, message: &str) -> String {
    format!("{} - {}\n", logged_on.format("%Y-%m-%d"), message)
}

#[async_trait]
impl ActivityLogTrait for ActivityLog {
    async fn append(&self, logged_on: NaiveDate, message: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        file.write_all(format_line(logged_on, message).as_bytes())
            .await?;
        file.flush().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line(date(2024, 3, 1), "Issued Book: B1 to Member: M1"),
            "2024-03-01 - Issued Book: B1 to Member: M1\n"
        );
    }

    #[tokio::test]
    async fn test_append_creates_file_and_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log = ActivityLog::new(dir.path().join("library_log.txt"));

        log.append(date(2024, 3, 1), "first").await.unwrap();
        log.append(date(2024, 3, 2), "second").await.unwrap();

        let content = tokio::fs::read_to_string(log.path()).await.unwrap();
        assert_eq!(content, "2024-03-01 - first\n2024-03-02 - second\n");
    }

    #[tokio::test]
    async fn test_append_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("library_log.txt");
        tokio::fs::write(&path, "2024-01-01 - earlier\n")
            .await
            .unwrap();

        let log = ActivityLog::new(&path);
        log.append(date(2024, 3, 1), "later").await.unwrap();

        let content = tokio::fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, "2024-01-01 - earlier\n2024-03-01 - later\n");
    }

    #[tokio::test]
    async fn test_append_fails_when_directory_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let log = ActivityLog::new(dir.path().join("missing").join("library_log.txt"));

        assert!(log.append(date(2024, 3, 1), "lost").await.is_err());
    }
}
