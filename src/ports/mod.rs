pub mod activity_log;
pub mod book_repository;
pub mod member_repository;

pub use activity_log::ActivityLog;
pub use book_repository::BookRepository;
pub use member_repository::MemberRepository;
