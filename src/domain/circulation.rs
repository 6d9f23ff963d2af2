use chrono::NaiveDate;

use super::{
    Book, BookAdded, BookId, BookIssued, BookReturned, BookStatus, Fine, IssueBookError, Member,
    MemberAdded, MemberId, ReturnBookError,
};

/// 純粋関数：書籍を登録する
///
/// 新しい書籍は貸出可能状態で作成される。
pub fn add_book(book_id: BookId, title: String, author: String) -> (Book, BookAdded) {
    let book = Book::new(book_id, title, author);

    let event = BookAdded {
        book_id: book.book_id.clone(),
        title: book.title.clone(),
        author: book.author.clone(),
    };

    (book, event)
}

/// 純粋関数：会員を登録する
pub fn add_member(member_id: MemberId, name: String) -> (Member, MemberAdded) {
    let member = Member::new(member_id, name);

    let event = MemberAdded {
        member_id: member.member_id.clone(),
        name: member.name.clone(),
    };

    (member, event)
}

/// 純粋関数：書籍を貸し出す
///
/// ビジネスルール：
/// - 貸出中の書籍は貸し出せない（会員に関係なく）
/// - 貸出日を会員の貸出記録に残す
///
/// 副作用なし。新しいBook, Memberとイベントを返す。
pub fn issue_book(
    book: &Book,
    member: &Member,
    issued_on: NaiveDate,
) -> Result<(Book, Member, BookIssued), IssueBookError> {
    if book.is_issued() {
        return Err(IssueBookError::AlreadyIssued);
    }

    let new_book = Book {
        status: BookStatus::Issued,
        ..book.clone()
    };

    let mut new_member = member.clone();
    new_member
        .borrowed_books
        .insert(book.book_id.clone(), issued_on);

    let event = BookIssued {
        book_id: book.book_id.clone(),
        member_id: member.member_id.clone(),
        issued_on,
    };

    Ok((new_book, new_member, event))
}

/// 純粋関数：書籍を返却する
///
/// ビジネスルール：
/// - その会員が借りている書籍のみ返却できる
/// - 猶予期間（7日）を超えた日数に応じて延滞料金を課す
///
/// 副作用なし。新しいBook, Memberとイベントを返す。
pub fn return_book(
    book: &Book,
    member: &Member,
    returned_on: NaiveDate,
) -> Result<(Book, Member, BookReturned), ReturnBookError> {
    let mut new_member = member.clone();
    let borrowed_on = new_member
        .borrowed_books
        .remove(&book.book_id)
        .ok_or(ReturnBookError::NotBorrowed)?;

    let elapsed = elapsed_days(borrowed_on, returned_on);
    let fine = calculate_fine(borrowed_on, returned_on);

    let new_book = Book {
        status: BookStatus::Available,
        ..book.clone()
    };

    let event = BookReturned {
        book_id: book.book_id.clone(),
        member_id: member.member_id.clone(),
        borrowed_on,
        returned_on,
        elapsed_days: elapsed,
        fine,
    };

    Ok((new_book, new_member, event))
}

/// 純粋関数：貸出日から返却日までの経過日数
///
/// 日付単位のため時刻は考慮しない。
pub fn elapsed_days(borrowed_on: NaiveDate, returned_on: NaiveDate) -> i64 {
    (returned_on - borrowed_on).num_days()
}

/// 純粋関数：延滞料金の計算
pub fn calculate_fine(borrowed_on: NaiveDate, returned_on: NaiveDate) -> Fine {
    Fine::for_elapsed_days(elapsed_days(borrowed_on, returned_on))
}
