use async_trait::async_trait;
use rusty_library_catalog::adapters::memory::{InMemoryBookRepository, InMemoryMemberRepository};
use rusty_library_catalog::application::library::*;
use rusty_library_catalog::application::{LibraryError, catalog, membership};
use rusty_library_catalog::domain::commands::*;
use rusty_library_catalog::domain::*;
use rusty_library_catalog::ports::*;
use std::sync::{Arc, Mutex};

// ============================================================================
// 記録用モック実装（テスト用）
// ============================================================================

/// 送信された通知を記録するNotificationService
#[derive(Default)]
struct RecordingNotificationService {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingNotificationService {
    fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationService for RecordingNotificationService {
    async fn send(&self, message: &str, recipient: &str) {
        self.sent
            .lock()
            .unwrap()
            .push((message.to_string(), recipient.to_string()));
    }

    fn channel_name(&self) -> &'static str {
        "recording"
    }
}

/// 結果を固定できるPaymentProcessor
struct StubPaymentProcessor {
    approve: bool,
    calls: Mutex<Vec<(f64, String)>>,
}

impl StubPaymentProcessor {
    fn new(approve: bool) -> Self {
        Self {
            approve,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PaymentProcessor for StubPaymentProcessor {
    async fn process(&self, amount: f64, account_ref: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .push((amount, account_ref.to_string()));
        self.approve
    }

    fn payment_method_name(&self) -> &'static str {
        "Stub"
    }
}

/// 受け取ったレコードを記録するReportGenerator
#[derive(Default)]
struct RecordingReportGenerator {
    records: Mutex<Vec<ReportRecord>>,
}

#[async_trait]
impl ReportGenerator for RecordingReportGenerator {
    async fn generate(&self, records: &[ReportRecord]) {
        self.records.lock().unwrap().extend_from_slice(records);
    }

    fn report_type(&self) -> &'static str {
        "Recording Report"
    }
}

struct Fixture {
    deps: LibraryDependencies,
    notifications: Arc<RecordingNotificationService>,
    payments: Arc<StubPaymentProcessor>,
    reports: Arc<RecordingReportGenerator>,
}

/// 書籍2冊と会員1人を登録済みの状態を作る
async fn setup(approve_payments: bool) -> Fixture {
    let notifications = Arc::new(RecordingNotificationService::default());
    let payments = Arc::new(StubPaymentProcessor::new(approve_payments));
    let reports = Arc::new(RecordingReportGenerator::default());

    let deps = LibraryDependencies {
        catalog: catalog::CatalogDependencies::new(Arc::new(InMemoryBookRepository::new())),
        membership: membership::MembershipDependencies::new(Arc::new(
            InMemoryMemberRepository::new(),
        )),
        notification_service: notifications.clone(),
        payment_processor: payments.clone(),
        report_generator: reports.clone(),
    };

    catalog::add_book(
        &deps.catalog,
        Book::new("B001", "Clean Code", "Robert Martin", "978-0132350884"),
    )
    .await
    .unwrap();
    catalog::add_book(
        &deps.catalog,
        Book::new("B002", "Design Patterns", "Gang of Four", "978-0201633610"),
    )
    .await
    .unwrap();
    membership::register_member(
        &deps.membership,
        Member::new("M001", "John Doe", "john@example.com", Some("0123456789")),
    )
    .await
    .unwrap();

    Fixture {
        deps,
        notifications,
        payments,
        reports,
    }
}

fn borrow_cmd(member: &str, book: &str) -> BorrowBook {
    BorrowBook {
        member_id: MemberId::new(member),
        book_id: BookId::new(book),
    }
}

fn return_cmd(member: &str, book: &str) -> ReturnBook {
    ReturnBook {
        member_id: MemberId::new(member),
        book_id: BookId::new(book),
    }
}

// ============================================================================
// 貸出・返却
// ============================================================================

#[tokio::test]
async fn test_borrow_book_marks_book_and_notifies_member() {
    let fx = setup(true).await;

    borrow_book(&fx.deps, borrow_cmd("M001", "B001")).await.unwrap();

    let book = catalog::get_book_by_id(&fx.deps.catalog, &BookId::new("B001"))
        .await
        .unwrap()
        .unwrap();
    assert!(!book.available);

    assert_eq!(
        fx.notifications.sent(),
        vec![(
            "You have successfully borrowed book with ID: B001".to_string(),
            "john@example.com".to_string()
        )]
    );
}

#[tokio::test]
async fn test_return_book_notifies_member() {
    let fx = setup(true).await;
    borrow_book(&fx.deps, borrow_cmd("M001", "B001")).await.unwrap();

    return_book(&fx.deps, return_cmd("M001", "B001")).await.unwrap();

    let book = catalog::get_book_by_id(&fx.deps.catalog, &BookId::new("B001"))
        .await
        .unwrap()
        .unwrap();
    assert!(book.available);

    let sent = fx.notifications.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(
        sent[1].0,
        "You have successfully returned book with ID: B001"
    );
}

#[tokio::test]
async fn test_unknown_member_fails_before_touching_the_book() {
    let fx = setup(true).await;

    let result = borrow_book(&fx.deps, borrow_cmd("M404", "B001")).await;

    assert!(matches!(result, Err(LibraryError::NotFound(_))));
    let book = catalog::get_book_by_id(&fx.deps.catalog, &BookId::new("B001"))
        .await
        .unwrap()
        .unwrap();
    assert!(book.available);
    assert!(fx.notifications.sent().is_empty());
}

#[tokio::test]
async fn test_domain_errors_propagate_unchanged_without_notification() {
    let fx = setup(true).await;
    borrow_book(&fx.deps, borrow_cmd("M001", "B001")).await.unwrap();

    let result = borrow_book(&fx.deps, borrow_cmd("M001", "B001")).await;
    assert!(matches!(result, Err(LibraryError::NotAvailable(_))));

    let result = return_book(&fx.deps, return_cmd("M001", "B002")).await;
    assert!(matches!(result, Err(LibraryError::AlreadyAvailable(_))));

    let result = borrow_book(&fx.deps, borrow_cmd("M001", "B999")).await;
    assert!(matches!(result, Err(LibraryError::NotFound(_))));

    // 成功した1回分の通知のみ
    assert_eq!(fx.notifications.sent().len(), 1);
}

// ============================================================================
// 延滞料金
// ============================================================================

#[tokio::test]
async fn test_fine_payment_success_notifies_member() {
    let fx = setup(true).await;

    let paid = process_fine_payment(
        &fx.deps,
        PayFine {
            member_id: MemberId::new("M001"),
            amount: 5.5,
        },
    )
    .await
    .unwrap();

    assert!(paid);
    assert_eq!(
        fx.payments.calls.lock().unwrap().clone(),
        vec![(5.5, "M001".to_string())]
    );
    assert_eq!(
        fx.notifications.sent(),
        vec![(
            "Fine payment of $5.5 processed successfully".to_string(),
            "john@example.com".to_string()
        )]
    );
}

#[tokio::test]
async fn test_fine_payment_refusal_is_not_an_error() {
    let fx = setup(false).await;

    let paid = process_fine_payment(
        &fx.deps,
        PayFine {
            member_id: MemberId::new("M001"),
            amount: 5.5,
        },
    )
    .await
    .unwrap();

    assert!(!paid);
    assert!(fx.notifications.sent().is_empty());
}

#[tokio::test]
async fn test_fine_payment_unknown_member() {
    let fx = setup(true).await;

    let result = process_fine_payment(
        &fx.deps,
        PayFine {
            member_id: MemberId::new("M404"),
            amount: 1.0,
        },
    )
    .await;

    assert!(matches!(result, Err(LibraryError::NotFound(_))));
    assert!(fx.payments.calls.lock().unwrap().is_empty());
}

// ============================================================================
// レポート
// ============================================================================

#[tokio::test]
async fn test_generate_library_report() {
    let fx = setup(true).await;
    borrow_book(&fx.deps, borrow_cmd("M001", "B002")).await.unwrap();

    let report = generate_library_report(&fx.deps).await.unwrap();

    assert_eq!(report.total_books, 2);
    assert_eq!(report.total_members, 1);
    assert_eq!(report.available_books, 1);
    assert_eq!(report.report_type, "Recording Report");

    let records = fx.reports.records.lock().unwrap().clone();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| matches!(r, ReportRecord::Book(_))));
}

#[tokio::test]
async fn test_library_report_serializes_to_json() {
    let fx = setup(true).await;

    let report = generate_library_report(&fx.deps).await.unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["total_books"], 2);
    assert_eq!(json["available_books"], 2);
    assert!(json["generated_at"].is_string());
}
