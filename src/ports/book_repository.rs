use crate::domain::{Book, BookId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 蔵書リポジトリポート
///
/// 書籍IDから書籍へのマッピングを抽象化する。
/// 一覧は書籍IDの昇順で返す。
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// 書籍を保存する
    ///
    /// 同じIDが既に存在する場合は上書きする。
    async fn save(&self, book: Book) -> Result<()>;

    /// IDで書籍を取得する
    async fn get_by_id(&self, book_id: &BookId) -> Result<Option<Book>>;

    /// すべての書籍を取得する
    async fn list(&self) -> Result<Vec<Book>>;
}
