#![allow(dead_code)]

use chrono::NaiveDate;
use library_catalog::adapters::memory::{BookRepository, MemberRepository};
use library_catalog::adapters::mock::{
    ActivityLog as MockActivityLog, MemberRepository as MockMemberRepository,
};
use library_catalog::application::library::ServiceDependencies;
use std::sync::Arc;

/// テスト用の依存関係一式
///
/// 状態の検証ができるように、各アダプターの具象型も返す。
pub struct TestLibrary {
    pub deps: ServiceDependencies,
    pub books: Arc<BookRepository>,
    pub members: Arc<MemberRepository>,
    pub log: Arc<MockActivityLog>,
}

pub fn setup_library() -> TestLibrary {
    with_activity_log(MockActivityLog::new())
}

pub fn setup_library_with_failing_log() -> TestLibrary {
    with_activity_log(MockActivityLog::failing())
}

fn with_activity_log(log: MockActivityLog) -> TestLibrary {
    let books = Arc::new(BookRepository::new());
    let members = Arc::new(MemberRepository::new());
    let log = Arc::new(log);

    let deps = ServiceDependencies {
        book_repository: books.clone(),
        member_repository: members.clone(),
        activity_log: log.clone(),
    };

    TestLibrary {
        deps,
        books,
        members,
        log,
    }
}

/// 会員ストアを差し替えたテスト用の依存関係一式
///
/// 会員の保存失敗を起こして、途中失敗時の状態を検証する。
pub struct MockMemberLibrary {
    pub deps: ServiceDependencies,
    pub books: Arc<BookRepository>,
    pub members: Arc<MockMemberRepository>,
    pub log: Arc<MockActivityLog>,
}

pub fn setup_library_with_mock_members() -> MockMemberLibrary {
    let books = Arc::new(BookRepository::new());
    let members = Arc::new(MockMemberRepository::new());
    let log = Arc::new(MockActivityLog::new());

    let deps = ServiceDependencies {
        book_repository: books.clone(),
        member_repository: members.clone(),
        activity_log: log.clone(),
    };

    MockMemberLibrary {
        deps,
        books,
        members,
        log,
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
