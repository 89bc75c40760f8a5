use crate::domain::{Book, BookId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 書籍リポジトリポート
///
/// 書籍の永続化を抽象化する。バックエンド（インメモリ、DBなど）は差し替え可能。
/// ドメインルールは持たない。重複チェックや状態遷移はサービス層の責務。
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// 書籍を保存する（同じIDがあれば置き換える）
    async fn save(&self, book: Book) -> Result<()>;

    /// IDで書籍を取得する
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>>;

    /// 全書籍を取得する
    async fn find_all(&self) -> Result<Vec<Book>>;

    /// 著者名で検索する（大文字小文字を区別しない完全一致）
    async fn find_by_author(&self, author: &str) -> Result<Vec<Book>>;

    /// 貸出可能な書籍を取得する
    async fn find_available(&self) -> Result<Vec<Book>>;

    /// 既存の書籍をそのまま上書きする
    ///
    /// 貸出状態の遷移ルールを経由しない生の上書き。
    /// IDが存在しない場合は何もしない。
    async fn update(&self, book: Book) -> Result<()>;

    /// 書籍を削除する（存在しない場合は何もしない）
    async fn delete(&self, id: &BookId) -> Result<()>;
}
