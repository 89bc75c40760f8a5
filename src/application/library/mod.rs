mod library_service;

pub use library_service::{
    LibraryDependencies, LibraryReport, borrow_book, generate_library_report,
    process_fine_payment, return_book,
};
