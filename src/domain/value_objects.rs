use serde::{Deserialize, Serialize};
use std::fmt;

/// 書籍ID - 蔵書マッピングのキー
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookId(String);

impl BookId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 会員ID - 会員マッピングのキー
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 書籍の貸出状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookStatus {
    /// 貸出可能
    #[default]
    Available,
    /// 貸出中
    Issued,
}

impl BookStatus {
    /// 在庫一覧で表示する文字列
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "Available",
            BookStatus::Issued => "Issued",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 延滞料金が発生しない猶予期間（日数）
pub const GRACE_PERIOD_DAYS: i64 = 7;

/// 猶予期間を超えた1日あたりの延滞料金
pub const FINE_PER_DAY: u32 = 2;

/// 延滞料金
///
/// 不変条件：猶予期間（7日）以内の返却は0。
/// 超過分は1日につき2単位。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fine(u32);

impl Fine {
    /// 料金なし
    pub const ZERO: Fine = Fine(0);

    /// 経過日数から延滞料金を求める
    ///
    /// 日付単位で計算するため、同日の返却は常に0日となる。
    /// 経過日数が負（時計の巻き戻り）の場合も0として扱う。
    pub fn for_elapsed_days(elapsed_days: i64) -> Self {
        let overdue_days = elapsed_days.saturating_sub(GRACE_PERIOD_DAYS);
        if overdue_days <= 0 {
            return Self::ZERO;
        }
        let overdue_days = u32::try_from(overdue_days).unwrap_or(u32::MAX);
        Self(overdue_days.saturating_mul(FINE_PER_DAY))
    }

    pub fn amount(&self) -> u32 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Fine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.0)
    }
}
