use std::ops::Not;

use super::Book;

/// 在庫検索用の述語
///
/// `and` / `or` / `negate` で合成できる。
///
/// ```
/// use library_catalog::domain::BookFilter;
///
/// let filter = BookFilter::available().and(BookFilter::by_author("Tolkien").negate());
/// # let _ = filter;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookFilter {
    /// すべての書籍
    All,
    /// 貸出可能な書籍
    Available,
    /// 貸出中の書籍
    Issued,
    /// 著者名の一致（大文字小文字を区別しない）
    ByAuthor(String),
    And(Box<BookFilter>, Box<BookFilter>),
    Or(Box<BookFilter>, Box<BookFilter>),
    Not(Box<BookFilter>),
}

impl BookFilter {
    pub fn all() -> Self {
        BookFilter::All
    }

    pub fn available() -> Self {
        BookFilter::Available
    }

    pub fn issued() -> Self {
        BookFilter::Issued
    }

    pub fn by_author(author: impl Into<String>) -> Self {
        BookFilter::ByAuthor(author.into())
    }

    /// 両方を満たす
    pub fn and(self, other: BookFilter) -> Self {
        BookFilter::And(Box::new(self), Box::new(other))
    }

    /// いずれかを満たす
    pub fn or(self, other: BookFilter) -> Self {
        BookFilter::Or(Box::new(self), Box::new(other))
    }

    /// 否定
    pub fn negate(self) -> Self {
        BookFilter::Not(Box::new(self))
    }

    /// 書籍が条件を満たすか判定する
    pub fn test(&self, book: &Book) -> bool {
        match self {
            BookFilter::All => true,
            BookFilter::Available => !book.is_issued(),
            BookFilter::Issued => book.is_issued(),
            BookFilter::ByAuthor(author) => book.author.to_lowercase() == author.to_lowercase(),
            BookFilter::And(left, right) => left.test(book) && right.test(book),
            BookFilter::Or(left, right) => left.test(book) || right.test(book),
            BookFilter::Not(inner) => !inner.test(book),
        }
    }
}

impl Default for BookFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl Not for BookFilter {
    type Output = BookFilter;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookId, BookStatus};

    fn books() -> Vec<Book> {
        let mut issued = Book::new(BookId::new("B2"), "The Hobbit", "J.R.R. Tolkien");
        issued.status = BookStatus::Issued;

        vec![
            Book::new(BookId::new("B1"), "Dune", "Frank Herbert"),
            issued,
            Book::new(BookId::new("B3"), "Silmarillion", "J.R.R. Tolkien"),
        ]
    }

    fn matching(filter: &BookFilter) -> Vec<String> {
        books()
            .iter()
            .filter(|b| filter.test(b))
            .map(|b| b.book_id.to_string())
            .collect()
    }

    #[test]
    fn test_all_matches_everything() {
        assert_eq!(matching(&BookFilter::all()), vec!["B1", "B2", "B3"]);
    }

    #[test]
    fn test_available_and_issued() {
        assert_eq!(matching(&BookFilter::available()), vec!["B1", "B3"]);
        assert_eq!(matching(&BookFilter::issued()), vec!["B2"]);
    }

    #[test]
    fn test_negated_available_equals_issued() {
        for book in books() {
            assert_eq!(
                BookFilter::available().negate().test(&book),
                BookFilter::issued().test(&book)
            );
        }
        assert_eq!(!BookFilter::available(), BookFilter::available().negate());
    }

    #[test]
    fn test_by_author_is_case_insensitive() {
        assert_eq!(
            matching(&BookFilter::by_author("j.r.r. tolkien")),
            vec!["B2", "B3"]
        );
    }

    #[test]
    fn test_by_author_folds_non_ascii_letters() {
        let book = Book::new(BookId::new("B4"), "Germinal", "Émile Zola");

        assert!(BookFilter::by_author("émile zola").test(&book));
        assert!(BookFilter::by_author("ÉMILE ZOLA").test(&book));
        assert!(!BookFilter::by_author("emile zola").test(&book));
    }

    #[test]
    fn test_and_or_combinators() {
        let tolkien = BookFilter::by_author("J.R.R. Tolkien");

        assert_eq!(
            matching(&tolkien.clone().and(BookFilter::available())),
            vec!["B3"]
        );
        assert_eq!(
            matching(&tolkien.or(BookFilter::available())),
            vec!["B1", "B2", "B3"]
        );
    }
}
