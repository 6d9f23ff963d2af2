pub mod activity_log;
pub mod member_repository;

pub use activity_log::ActivityLog;
pub use member_repository::MemberRepository;
