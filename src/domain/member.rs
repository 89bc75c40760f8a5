use std::fmt;

use serde::{Deserialize, Serialize};

use super::MemberId;

/// Member集約 - 図書館の会員
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
}

impl Member {
    pub fn new(
        id: impl Into<MemberId>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.map(str::to_string),
        }
    }

    /// 電話番号が登録されているか（空白のみは未登録扱い）
    pub fn has_phone(&self) -> bool {
        self.phone
            .as_deref()
            .is_some_and(|phone| !phone.trim().is_empty())
    }
}

/// 会員統計（都度計算、永続化しない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberStatistics {
    pub total: usize,
    pub with_phone: usize,
}

impl MemberStatistics {
    /// 全会員のスナップショットから集計する
    pub fn from_members(members: &[Member]) -> Self {
        Self {
            total: members.len(),
            with_phone: members.iter().filter(|m| m.has_phone()).count(),
        }
    }
}

impl fmt::Display for MemberStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MemberStatistics{{total={}, withPhone={}}}",
            self.total, self.with_phone
        )
    }
}
