use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::{BookId, BookStatus, MemberId};

/// 書籍エンティティ
///
/// 蔵書マッピングが排他的に所有する。削除操作は存在しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub status: BookStatus,
}

impl Book {
    /// 新規作成（貸出可能状態）
    pub fn new(book_id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            book_id,
            title: title.into(),
            author: author.into(),
            status: BookStatus::Available,
        }
    }

    pub fn is_issued(&self) -> bool {
        self.status == BookStatus::Issued
    }
}

/// 在庫一覧の1行
///
/// `id | title | author | status` 形式で表示される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    pub book_id: BookId,
    pub title: String,
    pub author: String,
    pub status: BookStatus,
}

impl From<&Book> for InventoryEntry {
    fn from(book: &Book) -> Self {
        Self {
            book_id: book.book_id.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            status: book.status,
        }
    }
}

impl fmt::Display for InventoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.book_id, self.title, self.author, self.status
        )
    }
}

/// 会員エンティティ
///
/// 借りている書籍IDと貸出日の対応を保持する。
/// 同じ書籍を重複して借りることは、書籍側の貸出中フラグで防がれる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub member_id: MemberId,
    pub name: String,
    pub borrowed_books: BTreeMap<BookId, NaiveDate>,
}

impl Member {
    /// 新規作成（貸出なし）
    pub fn new(member_id: MemberId, name: impl Into<String>) -> Self {
        Self {
            member_id,
            name: name.into(),
            borrowed_books: BTreeMap::new(),
        }
    }

    pub fn has_borrowed(&self, book_id: &BookId) -> bool {
        self.borrowed_books.contains_key(book_id)
    }

    /// 貸出日を取得する
    pub fn borrowed_on(&self, book_id: &BookId) -> Option<NaiveDate> {
        self.borrowed_books.get(book_id).copied()
    }
}
