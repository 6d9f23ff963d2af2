use crate::domain::{self, BookFilter, DomainEvent, InventoryEntry, commands::*, value_objects::*};
use crate::ports::*;
use std::sync::Arc;

use super::errors::{InvalidReturnReason, LibraryError, MissingEntity, Result};

/// サービスの依存関係
///
/// 蔵書・会員のマッピングと活動ログをまとめて明示的に渡す。
/// グローバル状態は持たない。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_repository: Arc<dyn BookRepository>,
    pub member_repository: Arc<dyn MemberRepository>,
    pub activity_log: Arc<dyn ActivityLog>,
}

/// 返却結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnReceipt {
    pub book_id: BookId,
    pub member_id: MemberId,
    pub elapsed_days: i64,
    pub fine: Fine,
}

/// イベントを活動ログに記録するヘルパー関数
///
/// 記録対象外のイベント（登録）は何もしない。
/// ログの書き込み失敗は警告として報告するだけで、呼び出し元には伝播しない。
/// 業務上の状態変更は既に確定している。
async fn record_activity(activity_log: &Arc<dyn ActivityLog>, event: DomainEvent) {
    let Some((logged_on, message)) = event.activity_entry() else {
        return;
    };

    if let Err(e) = activity_log.append(logged_on, &message).await {
        tracing::warn!(error = %e, entry = %message, "Error writing log file");
    }
}

/// 貸出・返却後の書籍と会員を保存する
///
/// 会員の保存に失敗した場合は書籍を元の状態に戻してからエラーを返す。
async fn save_circulation(
    deps: &ServiceDependencies,
    original_book: domain::Book,
    book: domain::Book,
    member: domain::Member,
) -> Result<()> {
    deps.book_repository
        .save(book)
        .await
        .map_err(LibraryError::Repository)?;

    if let Err(e) = deps.member_repository.save(member).await {
        let book_id = original_book.book_id.clone();
        if let Err(restore) = deps.book_repository.save(original_book).await {
            tracing::error!(book_id = %book_id, error = %restore, "Failed to restore book");
        }
        return Err(LibraryError::Repository(e));
    }

    Ok(())
}

async fn find_book(deps: &ServiceDependencies, book_id: &BookId) -> Result<Option<domain::Book>> {
    deps.book_repository
        .get_by_id(book_id)
        .await
        .map_err(LibraryError::Repository)
}

async fn find_member(
    deps: &ServiceDependencies,
    member_id: &MemberId,
) -> Result<Option<domain::Member>> {
    deps.member_repository
        .get_by_id(member_id)
        .await
        .map_err(LibraryError::Repository)
}

/// 書籍を登録する
///
/// 同じIDの書籍が既にある場合は上書きする（重複チェックなし）。
/// 上書きは警告としてトレースに残す。
pub async fn add_book(deps: &ServiceDependencies, cmd: AddBook) -> Result<BookId> {
    if let Some(existing) = find_book(deps, &cmd.book_id).await? {
        tracing::warn!(
            book_id = %existing.book_id,
            was_issued = existing.is_issued(),
            "Overwriting existing book"
        );
    }

    let (book, event) = domain::circulation::add_book(cmd.book_id, cmd.title, cmd.author);

    deps.book_repository
        .save(book)
        .await
        .map_err(LibraryError::Repository)?;

    tracing::info!(book_id = %event.book_id, title = %event.title, "Book added");
    let book_id = event.book_id.clone();
    record_activity(&deps.activity_log, DomainEvent::BookAdded(event)).await;
    Ok(book_id)
}

/// 会員を登録する
///
/// 書籍と同様、同じIDの会員は上書きされる。
pub async fn add_member(deps: &ServiceDependencies, cmd: AddMember) -> Result<MemberId> {
    if let Some(existing) = find_member(deps, &cmd.member_id).await? {
        tracing::warn!(
            member_id = %existing.member_id,
            borrowed = existing.borrowed_books.len(),
            "Overwriting existing member"
        );
    }

    let (member, event) = domain::circulation::add_member(cmd.member_id, cmd.name);

    deps.member_repository
        .save(member)
        .await
        .map_err(LibraryError::Repository)?;

    tracing::info!(member_id = %event.member_id, "Member added");
    let member_id = event.member_id.clone();
    record_activity(&deps.activity_log, DomainEvent::MemberAdded(event)).await;
    Ok(member_id)
}

/// 書籍を貸し出す
///
/// ビジネスルール：
/// - 書籍が存在すること（次に会員）
/// - 書籍が貸出中でないこと
///
/// すべての検証は状態変更の前に行う。失敗時はマッピングもログも変化しない。
pub async fn issue_book(deps: &ServiceDependencies, cmd: IssueBook) -> Result<()> {
    // 1. 書籍・会員の存在確認
    let book = find_book(deps, &cmd.book_id)
        .await?
        .ok_or_else(|| LibraryError::NotFound(MissingEntity::Book(cmd.book_id.clone())))?;

    let member = find_member(deps, &cmd.member_id)
        .await?
        .ok_or_else(|| LibraryError::NotFound(MissingEntity::Member(cmd.member_id.clone())))?;

    // 2. ドメイン層の純粋関数を呼び出し
    let (issued, borrower, event) =
        domain::circulation::issue_book(&book, &member, cmd.issued_on)
            .map_err(|e| LibraryError::from_issue(&cmd.book_id, e))?;

    // 3. 状態を保存
    save_circulation(deps, book, issued, borrower).await?;

    tracing::info!(
        book_id = %event.book_id,
        member_id = %event.member_id,
        issued_on = %event.issued_on,
        "Book issued"
    );

    // 4. 活動ログに記録
    record_activity(&deps.activity_log, DomainEvent::BookIssued(event)).await;

    Ok(())
}

/// 書籍を返却する
///
/// ビジネスルール：
/// - 書籍と会員が存在すること
/// - その会員がその書籍を借りていること
/// - 貸出から7日を超えた分は1日2単位の延滞料金
pub async fn return_book(deps: &ServiceDependencies, cmd: ReturnBook) -> Result<ReturnReceipt> {
    // 1. 書籍・会員の存在確認
    let book = find_book(deps, &cmd.book_id).await?;
    let member = find_member(deps, &cmd.member_id).await?;

    let (Some(book), Some(member)) = (book, member) else {
        return Err(LibraryError::InvalidReturn(
            InvalidReturnReason::UnknownBookOrMember,
        ));
    };

    // 2. ドメイン層の純粋関数を呼び出し
    let (returned, borrower, event) =
        domain::circulation::return_book(&book, &member, cmd.returned_on)?;

    // 3. 状態を保存
    save_circulation(deps, book, returned, borrower).await?;

    let receipt = ReturnReceipt {
        book_id: event.book_id.clone(),
        member_id: event.member_id.clone(),
        elapsed_days: event.elapsed_days,
        fine: event.fine,
    };

    tracing::info!(
        book_id = %receipt.book_id,
        member_id = %receipt.member_id,
        elapsed_days = receipt.elapsed_days,
        fine = receipt.fine.amount(),
        "Book returned"
    );

    // 4. 活動ログに記録
    record_activity(&deps.activity_log, DomainEvent::BookReturned(event)).await;

    Ok(receipt)
}

/// 在庫一覧を取得する
///
/// 書籍IDの昇順。副作用なし。
pub async fn show_inventory(deps: &ServiceDependencies) -> Result<Vec<InventoryEntry>> {
    show_inventory_matching(deps, &BookFilter::all()).await
}

/// 条件に合う書籍の在庫一覧を取得する
pub async fn show_inventory_matching(
    deps: &ServiceDependencies,
    filter: &BookFilter,
) -> Result<Vec<InventoryEntry>> {
    let books = deps
        .book_repository
        .list()
        .await
        .map_err(LibraryError::Repository)?;

    let entries: Vec<InventoryEntry> = books
        .iter()
        .filter(|book| filter.test(book))
        .map(InventoryEntry::from)
        .collect();

    tracing::debug!(total = books.len(), matched = entries.len(), "Inventory listed");
    Ok(entries)
}
