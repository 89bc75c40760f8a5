use thiserror::Error;

/// 図書館アプリケーション層のエラー
///
/// ドメインサービスが返し、オーケストレーション層はそのまま呼び出し元へ伝播する。
#[derive(Debug, Error)]
pub enum LibraryError {
    /// 必須の入力が欠けている、または空
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// 作成時のID重複
    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    /// 会員登録時のメールアドレス重複
    #[error("Email {0} is already registered")]
    DuplicateEmail(String),

    /// ISBNのチェックディジット不正
    #[error("Invalid ISBN format: {0}")]
    InvalidIsbn(String),

    /// メールアドレス形式不正
    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    /// 電話番号形式不正
    #[error("Invalid phone number format: {0}")]
    InvalidPhone(String),

    /// 対象が存在しない
    #[error("Not found: {0}")]
    NotFound(String),

    /// 書籍が貸出中
    #[error("Book '{0}' is not available for borrowing")]
    NotAvailable(String),

    /// 書籍が既に書架にある
    #[error("Book '{0}' is already available")]
    AlreadyAvailable(String),

    /// 書籍が破損している
    #[error("Book '{0}' is damaged and cannot be borrowed")]
    Damaged(String),

    /// BookRepositoryのエラー
    #[error("Book repository error")]
    BookRepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// MemberRepositoryのエラー
    #[error("Member repository error")]
    MemberRepositoryError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// アプリケーション層の Result型
pub type Result<T> = std::result::Result<T, LibraryError>;
