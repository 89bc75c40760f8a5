use crate::domain::{
    self, Book, BookId, BookStatistics, BorrowBookError, ReturnBookError,
    validation::is_valid_isbn,
};
use crate::ports::BookRepository;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::application::errors::{LibraryError, Result};

/// 蔵書サービスの依存関係
///
/// データ構造として定義し、振る舞いは持たない。
/// `write_lock` は書き込み系の操作（確認してから保存する一連の処理）を
/// 直列化するためのロック。クローンしても同じロックを共有する。
#[derive(Clone)]
pub struct CatalogDependencies {
    pub book_repository: Arc<dyn BookRepository>,
    pub write_lock: Arc<Mutex<()>>,
}

impl CatalogDependencies {
    pub fn new(book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            book_repository,
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}

/// リポジトリから書籍を取得するヘルパー関数
///
/// borrow_book, return_book で共通利用される。
///
/// # エラー
/// - BookRepositoryError: 読み込み失敗
/// - NotFound: 書籍が存在しない
async fn load_book(book_repository: &Arc<dyn BookRepository>, id: &BookId) -> Result<Book> {
    book_repository
        .find_by_id(id)
        .await
        .map_err(LibraryError::BookRepositoryError)?
        .ok_or_else(|| LibraryError::NotFound(format!("Book not found with ID: {}", id)))
}

/// 書籍を登録する
///
/// ビジネスルール：
/// - IDが空でないこと
/// - 同じIDの書籍が存在しないこと
/// - ISBNのチェックディジットが正しいこと
/// - 登録時は入力に関わらず貸出可能（available = true）
///
/// # 戻り値
/// 登録された書籍のID
pub async fn add_book(deps: &CatalogDependencies, book: Book) -> Result<BookId> {
    // 1. 入力チェック
    if book.id.is_blank() {
        return Err(LibraryError::InvalidArgument(
            "Book ID cannot be null or empty".to_string(),
        ));
    }

    let _guard = deps.write_lock.lock().await;

    // 2. ID重複チェック
    let existing = deps
        .book_repository
        .find_by_id(&book.id)
        .await
        .map_err(LibraryError::BookRepositoryError)?;

    if existing.is_some() {
        tracing::warn!(book_id = %book.id, "duplicate book id");
        return Err(LibraryError::DuplicateId(format!(
            "Book with ID {} already exists",
            book.id
        )));
    }

    // 3. ISBNチェック
    if !is_valid_isbn(&book.isbn) {
        tracing::warn!(book_id = %book.id, isbn = %book.isbn, "invalid isbn");
        return Err(LibraryError::InvalidIsbn(book.isbn));
    }

    // 4. 初期状態は貸出可能
    let book = Book {
        available: true,
        ..book
    };
    let book_id = book.id.clone();
    let title = book.title.clone();

    deps.book_repository
        .save(book)
        .await
        .map_err(LibraryError::BookRepositoryError)?;

    tracing::info!(book_id = %book_id, title = %title, "book added");
    Ok(book_id)
}

pub async fn get_book_by_id(deps: &CatalogDependencies, id: &BookId) -> Result<Option<Book>> {
    deps.book_repository
        .find_by_id(id)
        .await
        .map_err(LibraryError::BookRepositoryError)
}

pub async fn get_all_books(deps: &CatalogDependencies) -> Result<Vec<Book>> {
    deps.book_repository
        .find_all()
        .await
        .map_err(LibraryError::BookRepositoryError)
}

/// 著者名で検索する（大文字小文字を区別しない完全一致）
pub async fn get_books_by_author(deps: &CatalogDependencies, author: &str) -> Result<Vec<Book>> {
    if author.trim().is_empty() {
        return Err(LibraryError::InvalidArgument(
            "Author cannot be null or empty".to_string(),
        ));
    }

    deps.book_repository
        .find_by_author(author)
        .await
        .map_err(LibraryError::BookRepositoryError)
}

pub async fn get_available_books(deps: &CatalogDependencies) -> Result<Vec<Book>> {
    deps.book_repository
        .find_available()
        .await
        .map_err(LibraryError::BookRepositoryError)
}

/// 書籍をそのまま上書きする
///
/// ISBNや重複の再チェックは行わず、貸出状態の遷移ルールも経由しない。
/// `available` を直接書き換えることもできる。存在しないIDは無視される。
/// 空のIDも同様にストアへ渡され、何も変わらない。
pub async fn update_book(deps: &CatalogDependencies, book: Book) -> Result<()> {
    let _guard = deps.write_lock.lock().await;

    deps.book_repository
        .update(book)
        .await
        .map_err(LibraryError::BookRepositoryError)
}

/// 書籍を削除する（存在しない場合は何もしない）
pub async fn delete_book(deps: &CatalogDependencies, id: &BookId) -> Result<()> {
    if id.is_blank() {
        return Err(LibraryError::InvalidArgument(
            "Book ID cannot be null or empty".to_string(),
        ));
    }

    let _guard = deps.write_lock.lock().await;

    deps.book_repository
        .delete(id)
        .await
        .map_err(LibraryError::BookRepositoryError)
}

/// 書籍を貸し出す（Available → Borrowed）
///
/// ビジネスルール：
/// - 書籍が存在すること
/// - 貸出中でないこと
/// - 破損していないこと
pub async fn borrow_book(deps: &CatalogDependencies, id: &BookId) -> Result<()> {
    let _guard = deps.write_lock.lock().await;

    // 1. 書籍を取得
    let book = load_book(&deps.book_repository, id).await?;
    let title = book.title.clone();

    // 2. ドメイン層の純粋関数を呼び出し
    let borrowed = domain::book::borrow(book).map_err(|e| {
        tracing::warn!(book_id = %id, reason = ?e, "borrow rejected");
        match e {
            BorrowBookError::NotAvailable => LibraryError::NotAvailable(title.clone()),
            BorrowBookError::Damaged => LibraryError::Damaged(title.clone()),
        }
    })?;

    // 3. 保存
    deps.book_repository
        .update(borrowed)
        .await
        .map_err(LibraryError::BookRepositoryError)?;

    tracing::info!(book_id = %id, title = %title, "book borrowed");
    Ok(())
}

/// 書籍を返却する（Borrowed → Available）
///
/// ビジネスルール：
/// - 書籍が存在すること
/// - 貸出中であること
pub async fn return_book(deps: &CatalogDependencies, id: &BookId) -> Result<()> {
    let _guard = deps.write_lock.lock().await;

    let book = load_book(&deps.book_repository, id).await?;
    let title = book.title.clone();

    let returned = domain::book::give_back(book).map_err(|e| {
        tracing::warn!(book_id = %id, reason = ?e, "return rejected");
        match e {
            ReturnBookError::AlreadyAvailable => LibraryError::AlreadyAvailable(title.clone()),
        }
    })?;

    deps.book_repository
        .update(returned)
        .await
        .map_err(LibraryError::BookRepositoryError)?;

    tracing::info!(book_id = %id, title = %title, "book returned");
    Ok(())
}

/// 蔵書統計を取得する
///
/// キャッシュせず、呼ばれるたびに全件から計算する。
pub async fn get_book_statistics(deps: &CatalogDependencies) -> Result<BookStatistics> {
    let books = get_all_books(deps).await?;
    Ok(BookStatistics::from_books(&books))
}
