pub mod book_repository;
pub mod member_repository;
pub mod notification_service;
pub mod payment_processor;
pub mod report_generator;

pub use book_repository::BookRepository;
pub use member_repository::MemberRepository;
pub use notification_service::NotificationService;
pub use payment_processor::PaymentProcessor;
pub use report_generator::{ReportGenerator, ReportRecord};
