use crate::domain::{Member, MemberId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 会員リポジトリポート
///
/// 会員の永続化を抽象化する。メールアドレスの一意性などはサービス層で検証する。
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// 会員を保存する（同じIDがあれば置き換える）
    async fn save(&self, member: Member) -> Result<()>;

    /// IDで会員を取得する
    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>>;

    /// 全会員を取得する
    async fn find_all(&self) -> Result<Vec<Member>>;

    /// 名前の部分一致で検索する（大文字小文字を区別しない）
    async fn find_by_name(&self, name: &str) -> Result<Vec<Member>>;

    /// 既存の会員をそのまま上書きする（IDが存在しない場合は何もしない）
    async fn update(&self, member: Member) -> Result<()>;

    /// 会員を削除する（存在しない場合は何もしない）
    async fn delete(&self, id: &MemberId) -> Result<()>;
}
