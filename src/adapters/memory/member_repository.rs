use crate::domain::{Member, MemberId};
use crate::ports::member_repository::{MemberRepository as MemberRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// In-memory implementation of MemberRepository
#[derive(Default)]
pub struct MemberRepository {
    members: RwLock<BTreeMap<MemberId, Member>>,
}

impl MemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored members
    pub async fn len(&self) -> usize {
        self.members.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.members.read().await.is_empty()
    }
}

#[async_trait]
impl MemberRepositoryTrait for MemberRepository {
    async fn save(&self, member: Member) -> Result<()> {
        tracing::debug!(member_id = %member.id, "saving member");
        self.members.write().await.insert(member.id.clone(), member);
        Ok(())
    }

    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>> {
        Ok(self.members.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Member>> {
        Ok(self.members.read().await.values().cloned().collect())
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Member>> {
        let needle = name.to_lowercase();
        Ok(self
            .members
            .read()
            .await
            .values()
            .filter(|m| m.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn update(&self, member: Member) -> Result<()> {
        let mut members = self.members.write().await;
        if let Some(existing) = members.get_mut(&member.id) {
            tracing::debug!(member_id = %member.id, "updating member");
            *existing = member;
        }
        Ok(())
    }

    async fn delete(&self, id: &MemberId) -> Result<()> {
        tracing::debug!(member_id = %id, "deleting member");
        self.members.write().await.remove(id);
        Ok(())
    }
}
