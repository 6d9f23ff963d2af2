use crate::domain::{Book, BookId};
use crate::ports::book_repository::{BookRepository as BookRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

/// BookRepositoryのインメモリ実装
///
/// プロセスの生存期間だけ書籍を保持する。
/// BTreeMapを使うため、一覧は書籍IDの昇順になる。
pub struct BookRepository {
    books: Mutex<BTreeMap<BookId, Book>>,
}

impl BookRepository {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(BTreeMap::new()),
        }
    }
}

impl Default for BookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn save(&self, book: Book) -> Result<()> {
        let mut books = self.books.lock().await;
        books.insert(book.book_id.clone(), book);
        Ok(())
    }

    async fn get_by_id(&self, book_id: &BookId) -> Result<Option<Book>> {
        let books = self.books.lock().await;
        Ok(books.get(book_id).cloned())
    }

    async fn list(&self) -> Result<Vec<Book>> {
        let books = self.books.lock().await;
        Ok(books.values().cloned().collect())
    }
}
