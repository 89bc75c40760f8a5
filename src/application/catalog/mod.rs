mod book_service;

pub use book_service::{
    CatalogDependencies, add_book, borrow_book, delete_book, get_all_books, get_available_books,
    get_book_by_id, get_book_statistics, get_books_by_author, return_book, update_book,
};
