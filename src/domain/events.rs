use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{BookId, Fine, MemberId};

/// イベント：書籍が登録された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAdded {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
}

/// イベント：会員が登録された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberAdded {
    pub member_id: MemberId,
    pub name: String,
}

/// イベント：書籍が貸し出された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookIssued {
    pub book_id: BookId,
    pub member_id: MemberId,
    pub issued_on: NaiveDate,
}

/// イベント：書籍が返却された
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookReturned {
    pub book_id: BookId,
    pub member_id: MemberId,
    pub borrowed_on: NaiveDate,
    pub returned_on: NaiveDate,
    pub elapsed_days: i64,
    pub fine: Fine,
}

/// ドメインイベント統合型
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainEvent {
    BookAdded(BookAdded),
    MemberAdded(MemberAdded),
    BookIssued(BookIssued),
    BookReturned(BookReturned),
}

impl DomainEvent {
    /// 活動ログに書き込む日付とメッセージ
    ///
    /// 貸出と返却のみ記録する。登録イベントは`None`。
    pub fn activity_entry(&self) -> Option<(NaiveDate, String)> {
        match self {
            DomainEvent::BookIssued(e) => Some((
                e.issued_on,
                format!("Issued Book: {} to Member: {}", e.book_id, e.member_id),
            )),
            DomainEvent::BookReturned(e) => Some((
                e.returned_on,
                format!("Returned Book: {} | Fine: {}", e.book_id, e.fine),
            )),
            DomainEvent::BookAdded(_) | DomainEvent::MemberAdded(_) => None,
        }
    }
}
