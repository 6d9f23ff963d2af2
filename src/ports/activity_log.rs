use async_trait::async_trait;
use chrono::NaiveDate;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 活動ログポート
///
/// 貸出・返却の記録を追記専用ログに書き込む。
/// 読み戻しのAPIは持たない。
#[async_trait]
pub trait ActivityLog: Send + Sync {
    /// 1行追記する
    ///
    /// 書き込みに失敗した場合はエラーを返すが、呼び出し側は
    /// それを理由に業務操作を失敗させてはならない。
    async fn append(&self, logged_on: NaiveDate, message: &str) -> Result<()>;
}
