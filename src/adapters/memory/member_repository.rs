use crate::domain::{Member, MemberId};
use crate::ports::member_repository::{MemberRepository as MemberRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

/// MemberRepositoryのインメモリ実装
pub struct MemberRepository {
    members: Mutex<BTreeMap<MemberId, Member>>,
}

impl MemberRepository {
    pub fn new() -> Self {
        Self {
            members: Mutex::new(BTreeMap::new()),
        }
    }

    /// 登録済みの全会員（会員IDの昇順）
    ///
    /// ポートには含めないテスト支援用の操作。
    /// 結合テストで「貸出中 ⇔ 借り手がちょうど1人」を全件検証するのに使う。
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
        let mut members = self.members.lock().await;
        members.insert(member.member_id.clone(), member);
        Ok(())
    }

    async fn get_by_id(&self, member_id: &MemberId) -> Result<Option<Member>> {
        let members = self.members.lock().await;
        Ok(members.get(member_id).cloned())
    }
}
