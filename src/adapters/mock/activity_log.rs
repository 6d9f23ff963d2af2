use crate::ports::activity_log::{ActivityLog as ActivityLogTrait, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::io;
use tokio::sync::Mutex;

/// Mock implementation of ActivityLog
///
/// Records every appended line in memory.
/// Can be switched into a failing mode to simulate write errors.
pub struct ActivityLog {
    lines: Mutex<Vec<(NaiveDate, String)>>,
    failing: bool,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
            failing: false,
        }
    }

    /// A log whose every append fails
    pub fn failing() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    /// Messages appended so far, oldest first
    pub async fn messages(&self) -> Vec<String> {
        self.lines
            .lock()
            .await
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    /// Appended lines with their dates, oldest first
    pub async fn entries(&self) -> Vec<(NaiveDate, String)> {
        self.lines.lock().await.clone()
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityLogTrait for ActivityLog {
    async fn append(&self, logged_on: NaiveDate, message: &str) -> Result<()> {
        if self.failing {
            return Err(Box::new(io::Error::other("mock activity log failure")));
        }
        self.lines
            .lock()
            .await
            .push((logged_on, message.to_string()));
        Ok(())
    }
}
