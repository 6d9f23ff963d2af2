use crate::domain::{Member, MemberId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 会員リポジトリポート
///
/// 会員IDから会員へのマッピングを抽象化する。
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// 会員を保存する
    ///
    /// 同じIDが既に存在する場合は上書きする。
    async fn save(&self, member: Member) -> Result<()>;

    /// IDで会員を取得する
    async fn get_by_id(&self, member_id: &MemberId) -> Result<Option<Member>>;
}
