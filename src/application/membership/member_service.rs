use crate::domain::{
    Member, MemberId, MemberStatistics,
    validation::{is_valid_email, is_valid_phone},
};
use crate::ports::MemberRepository;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::errors::{LibraryError, Result};

/// 会員サービスの依存関係
#[derive(Clone)]
pub struct MembershipDependencies {
    pub member_repository: Arc<dyn MemberRepository>,
    pub write_lock: Arc<Mutex<()>>,
}

impl MembershipDependencies {
    pub fn new(member_repository: Arc<dyn MemberRepository>) -> Self {
        Self {
            member_repository,
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}

/// 登録時のバリデーション
///
/// チェック順：ID → ID重複 → メール形式 → メール重複 → 電話番号形式
async fn validate_registration(
    member_repository: &Arc<dyn MemberRepository>,
    member: &Member,
) -> Result<()> {
    if member.id.is_blank() {
        return Err(LibraryError::InvalidArgument(
            "Member ID cannot be null or empty".to_string(),
        ));
    }

    let existing = member_repository
        .find_by_id(&member.id)
        .await
        .map_err(LibraryError::MemberRepositoryError)?;

    if existing.is_some() {
        tracing::warn!(member_id = %member.id, "duplicate member id");
        return Err(LibraryError::DuplicateId(format!(
            "Member with ID {} already exists",
            member.id
        )));
    }

    if !is_valid_email(&member.email) {
        return Err(LibraryError::InvalidEmail(member.email.clone()));
    }

    // メールアドレスの重複は全件走査で確認する（大文字小文字を区別する）
    let email_taken = member_repository
        .find_all()
        .await
        .map_err(LibraryError::MemberRepositoryError)?
        .iter()
        .any(|m| m.email == member.email);

    if email_taken {
        tracing::warn!(member_id = %member.id, email = %member.email, "duplicate email");
        return Err(LibraryError::DuplicateEmail(member.email.clone()));
    }

    if let Some(phone) = member.phone.as_deref()
        && !is_valid_phone(phone)
    {
        return Err(LibraryError::InvalidPhone(phone.to_string()));
    }

    Ok(())
}

/// 更新時のバリデーション
///
/// 登録時と異なり、メールアドレスの重複もIDの空チェックも行わない。
fn validate_update(member: &Member) -> Result<()> {
    if !is_valid_email(&member.email) {
        return Err(LibraryError::InvalidEmail(member.email.clone()));
    }

    Ok(())
}

/// 会員を登録する
///
/// # 戻り値
/// 登録された会員のID
pub async fn register_member(deps: &MembershipDependencies, member: Member) -> Result<MemberId> {
    let _guard = deps.write_lock.lock().await;

    validate_registration(&deps.member_repository, &member).await?;

    let member_id = member.id.clone();
    let name = member.name.clone();

    deps.member_repository
        .save(member)
        .await
        .map_err(LibraryError::MemberRepositoryError)?;

    tracing::info!(member_id = %member_id, name = %name, "member registered");
    Ok(member_id)
}

pub async fn get_member_by_id(
    deps: &MembershipDependencies,
    id: &MemberId,
) -> Result<Option<Member>> {
    deps.member_repository
        .find_by_id(id)
        .await
        .map_err(LibraryError::MemberRepositoryError)
}

pub async fn get_all_members(deps: &MembershipDependencies) -> Result<Vec<Member>> {
    deps.member_repository
        .find_all()
        .await
        .map_err(LibraryError::MemberRepositoryError)
}

/// 名前の部分一致で検索する（大文字小文字を区別しない）
pub async fn search_members_by_name(
    deps: &MembershipDependencies,
    query: &str,
) -> Result<Vec<Member>> {
    if query.trim().is_empty() {
        return Err(LibraryError::InvalidArgument(
            "Name cannot be null or empty".to_string(),
        ));
    }

    deps.member_repository
        .find_by_name(query)
        .await
        .map_err(LibraryError::MemberRepositoryError)
}

/// 会員情報を上書きする
///
/// メール形式のみ確認する。重複は確認しない。
pub async fn update_member(deps: &MembershipDependencies, member: Member) -> Result<()> {
    validate_update(&member)?;

    let _guard = deps.write_lock.lock().await;

    deps.member_repository
        .update(member)
        .await
        .map_err(LibraryError::MemberRepositoryError)
}

/// 会員を削除する（存在しない場合は何もしない）
pub async fn delete_member(deps: &MembershipDependencies, id: &MemberId) -> Result<()> {
    if id.is_blank() {
        return Err(LibraryError::InvalidArgument(
            "Member ID cannot be null or empty".to_string(),
        ));
    }

    let _guard = deps.write_lock.lock().await;

    deps.member_repository
        .delete(id)
        .await
        .map_err(LibraryError::MemberRepositoryError)
}

/// 会員統計を取得する（都度計算）
pub async fn get_member_statistics(deps: &MembershipDependencies) -> Result<MemberStatistics> {
    let members = get_all_members(deps).await?;
    Ok(MemberStatistics::from_members(&members))
}
