use serde::{Deserialize, Serialize};

use super::{BookId, MemberId};

/// コマンド：会員が書籍を借りる
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowBook {
    pub member_id: MemberId,
    pub book_id: BookId,
}

/// コマンド：会員が書籍を返す
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnBook {
    pub member_id: MemberId,
    pub book_id: BookId,
}

/// コマンド：会員が延滞料金を支払う
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayFine {
    pub member_id: MemberId,
    pub amount: f64,
}
