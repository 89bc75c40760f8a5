use std::fmt;

use serde::{Deserialize, Serialize};

use super::{BookId, BorrowBookError, ReturnBookError};

/// Book集約 - 蔵書1冊
///
/// 貸出状態は `available` フラグで表す。
/// - `true`: 書架にある（Available）
/// - `false`: 貸出中（Borrowed）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub available: bool,
}

impl Book {
    /// 新規作成時は常に貸出可能
    pub fn new(
        id: impl Into<BookId>,
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            available: true,
        }
    }
}

/// 破損判定ポリシー
///
/// 書籍の状態管理は持たないため、タイトルに "damaged" を含むかどうかで代用する。
pub fn is_damaged(book: &Book) -> bool {
    book.title.to_lowercase().contains("damaged")
}

/// 純粋関数：書籍を貸し出す（Available → Borrowed）
///
/// ビジネスルール：
/// - 貸出中の書籍は貸し出せない
/// - 破損している書籍は貸し出せない
///
/// 副作用なし。更新後のBookを返す。
pub fn borrow(book: Book) -> Result<Book, BorrowBookError> {
    if !book.available {
        return Err(BorrowBookError::NotAvailable);
    }

    if is_damaged(&book) {
        return Err(BorrowBookError::Damaged);
    }

    Ok(Book {
        available: false,
        ..book
    })
}

/// 純粋関数：書籍を返却する（Borrowed → Available）
///
/// ビジネスルール：
/// - 既に書架にある書籍は返却できない
pub fn give_back(book: Book) -> Result<Book, ReturnBookError> {
    if book.available {
        return Err(ReturnBookError::AlreadyAvailable);
    }

    Ok(Book {
        available: true,
        ..book
    })
}

/// 蔵書統計（都度計算、永続化しない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookStatistics {
    pub total: usize,
    pub available: usize,
    pub borrowed: usize,
}

impl BookStatistics {
    /// 全蔵書のスナップショットから集計する
    pub fn from_books(books: &[Book]) -> Self {
        let total = books.len();
        let available = books.iter().filter(|b| b.available).count();

        Self {
            total,
            available,
            borrowed: total - available,
        }
    }
}

impl fmt::Display for BookStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BookStatistics{{total={}, available={}, borrowed={}}}",
            self.total, self.available, self.borrowed
        )
    }
}
