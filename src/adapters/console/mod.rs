pub mod notification_service;
pub mod payment_processor;
pub mod report_generator;

pub use notification_service::{
    EmailNotificationService, PushNotificationService, SmsNotificationService,
};
pub use payment_processor::{
    BankTransferPaymentProcessor, CreditCardPaymentProcessor, PayPalPaymentProcessor,
};
pub use report_generator::{BookReportGenerator, MemberReportGenerator};
