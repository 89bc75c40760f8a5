use crate::domain::{Book, BookId};
use crate::ports::book_repository::{BookRepository as BookRepositoryTrait, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// In-memory implementation of BookRepository
///
/// Books are kept in ID order so listings are deterministic.
#[derive(Default)]
pub struct BookRepository {
    books: RwLock<BTreeMap<BookId, Book>>,
}

impl BookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored books
    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

#[async_trait]
impl BookRepositoryTrait for BookRepository {
    async fn save(&self, book: Book) -> Result<()> {
        tracing::debug!(book_id = %book.id, "saving book");
        self.books.write().await.insert(book.id.clone(), book);
        Ok(())
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>> {
        Ok(self.books.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Book>> {
        Ok(self.books.read().await.values().cloned().collect())
    }

    async fn find_by_author(&self, author: &str) -> Result<Vec<Book>> {
        let author = author.to_lowercase();
        Ok(self
            .books
            .read()
            .await
            .values()
            .filter(|b| b.author.to_lowercase() == author)
            .cloned()
            .collect())
    }

    async fn find_available(&self) -> Result<Vec<Book>> {
        Ok(self
            .books
            .read()
            .await
            .values()
            .filter(|b| b.available)
            .cloned()
            .collect())
    }

    /// Overwrite only when the ID is already known
    async fn update(&self, book: Book) -> Result<()> {
        let mut books = self.books.write().await;
        if let Some(existing) = books.get_mut(&book.id) {
            tracing::debug!(book_id = %book.id, "updating book");
            *existing = book;
        }
        Ok(())
    }

    async fn delete(&self, id: &BookId) -> Result<()> {
        tracing::debug!(book_id = %id, "deleting book");
        self.books.write().await.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_find_by_id() {
        let repo = BookRepository::new();
        let book = Book::new("B001", "Clean Code", "Robert Martin", "9780132350884");

        repo.save(book.clone()).await.unwrap();

        let found = repo.find_by_id(&BookId::new("B001")).await.unwrap();
        assert_eq!(found, Some(book));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_update_is_noop_for_unknown_id() {
        let repo = BookRepository::new();
        let book = Book::new("B404", "Ghost", "Nobody", "9780132350884");

        repo.update(book).await.unwrap();

        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn test_find_by_author_ignores_case() {
        let repo = BookRepository::new();
        repo.save(Book::new("B001", "Clean Code", "Robert Martin", "9780132350884"))
            .await
            .unwrap();
        repo.save(Book::new("B002", "Design Patterns", "Gang of Four", "9780201633610"))
            .await
            .unwrap();

        let found = repo.find_by_author("ROBERT MARTIN").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, BookId::new("B001"));

        // 部分一致はしない
        assert!(repo.find_by_author("Robert").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let repo = BookRepository::new();
        for id in ["B003", "B001", "B002"] {
            repo.save(Book::new(id, "T", "A", "9780132350884"))
                .await
                .unwrap();
        }

        let ids: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|b| b.id.to_string())
            .collect();
        assert_eq!(ids, vec!["B001", "B002", "B003"]);
    }

    #[tokio::test]
    async fn test_delete_missing_is_noop() {
        let repo = BookRepository::new();
        assert!(repo.delete(&BookId::new("B404")).await.is_ok());
    }
}
