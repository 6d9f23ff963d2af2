use crate::domain::{BookId, IssueBookError, MemberId, ReturnBookError};
use std::fmt;
use thiserror::Error;

/// 見つからなかったエンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingEntity {
    Book(BookId),
    Member(MemberId),
}

impl fmt::Display for MissingEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingEntity::Book(_) => f.write_str("Book"),
            MissingEntity::Member(_) => f.write_str("Member"),
        }
    }
}

/// 返却が拒否された理由
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidReturnReason {
    /// 書籍または会員が存在しない
    #[error("Invalid book or member.")]
    UnknownBookOrMember,

    /// この会員はこの書籍を借りていない
    #[error("This member did not borrow the book.")]
    NotBorrowed,
}

/// 図書館サービス層のエラー
///
/// メッセージはそのまま利用者に表示される。
#[derive(Debug, Error)]
pub enum LibraryError {
    /// 書籍または会員が存在しない
    #[error("{0} not found!")]
    NotFound(MissingEntity),

    /// 書籍が既に貸出中
    #[error("Book is already issued!")]
    AlreadyIssued(BookId),

    /// 貸出記録のない返却
    #[error("{0}")]
    InvalidReturn(InvalidReturnReason),

    /// リポジトリのエラー
    #[error("Repository error")]
    Repository(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl LibraryError {
    /// ドメイン層の貸出エラーを変換する
    pub(super) fn from_issue(book_id: &BookId, err: IssueBookError) -> Self {
        match err {
            IssueBookError::AlreadyIssued => LibraryError::AlreadyIssued(book_id.clone()),
        }
    }
}

impl From<ReturnBookError> for LibraryError {
    fn from(err: ReturnBookError) -> Self {
        match err {
            ReturnBookError::NotBorrowed => {
                LibraryError::InvalidReturn(InvalidReturnReason::NotBorrowed)
            }
        }
    }
}

/// 図書館サービス層の Result型
pub type Result<T> = std::result::Result<T, LibraryError>;
