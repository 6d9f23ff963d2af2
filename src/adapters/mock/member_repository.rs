use crate::domain::{Member, MemberId};
use crate::ports::member_repository::{MemberRepository as MemberRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

/// Mock implementation of MemberRepository
///
/// Behaves like the in-memory store until saves are switched to fail.
pub struct MemberRepository {
    members: Mutex<BTreeMap<MemberId, Member>>,
    fail_saves: AtomicBool,
}

impl MemberRepository {
    pub fn new() -> Self {
        Self {
            members: Mutex::new(BTreeMap::new()),
            fail_saves: AtomicBool::new(false),
        }
    }

    /// Make every subsequent save fail
    pub fn fail_saves(&self) {
        self.fail_saves.store(true, Ordering::SeqCst);
    }

    /// All stored members, ordered by id
    pub async fn all(&self) -> Vec<Member> {
        self.members.lock().await.values().cloned().collect()
    }
}

impl Default for MemberRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MemberRepositoryTrait for MemberRepository {
    async fn save(&self, member: Member) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(Box::new(io::Error::other("mock member store failure")));
        }
        self.members
            .lock()
            .await
            .insert(member.member_id.clone(), member);
        Ok(())
    }

    async fn get_by_id(&self, member_id: &MemberId) -> Result<Option<Member>> {
        Ok(self.members.lock().await.get(member_id).cloned())
    }
}
