use std::fmt;

use serde::{Deserialize, Serialize};

/// 書籍ID - カタログ管理コンテキストの集約ID
///
/// 呼び出し側が決めた文字列（例: "B001"）をそのまま保持する。
/// 空白のみのIDはサービス層で拒否される。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 空文字、または空白のみか
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for BookId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// 会員ID - 会員管理コンテキストの集約ID
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 空文字、または空白のみか
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MemberId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_id_keeps_caller_value() {
        let id = BookId::new("B001");
        assert_eq!(id.as_str(), "B001");
        assert_eq!(id.to_string(), "B001");
    }

    #[test]
    fn test_blank_ids() {
        assert!(BookId::new("").is_blank());
        assert!(BookId::new("   ").is_blank());
        assert!(!BookId::new("B001").is_blank());
        assert!(MemberId::new("\t").is_blank());
        assert!(!MemberId::new("M001").is_blank());
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&BookId::new("B001")).unwrap();
        assert_eq!(json, "\"B001\"");
    }
}
