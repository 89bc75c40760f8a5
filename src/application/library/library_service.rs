use crate::application::{catalog, membership};
use crate::domain::{Member, MemberId, commands::*};
use crate::ports::*;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::application::errors::{LibraryError, Result};

/// 図書館サービスの依存関係
///
/// 蔵書・会員の各サービスと、通知・決済・レポートの外部コラボレーターをまとめる。
#[derive(Clone)]
pub struct LibraryDependencies {
    pub catalog: catalog::CatalogDependencies,
    pub membership: membership::MembershipDependencies,
    pub notification_service: Arc<dyn NotificationService>,
    pub payment_processor: Arc<dyn PaymentProcessor>,
    pub report_generator: Arc<dyn ReportGenerator>,
}

/// 図書館全体のサマリー
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LibraryReport {
    pub total_books: usize,
    pub total_members: usize,
    pub available_books: usize,
    pub report_type: String,
    pub generated_at: DateTime<Utc>,
}

/// 会員の存在確認ヘルパー
async fn require_member(deps: &LibraryDependencies, member_id: &MemberId) -> Result<Member> {
    membership::get_member_by_id(&deps.membership, member_id)
        .await?
        .ok_or_else(|| LibraryError::NotFound("Member not found".to_string()))
}

/// 会員が書籍を借りる
///
/// 処理フロー：
/// 1. 会員の存在確認
/// 2. 蔵書サービスで貸出（状態遷移のルールはそちらで検証）
/// 3. 会員のメールアドレスへ通知
///
/// 通知は状態変更の後に行われ、ロールバックはない。
pub async fn borrow_book(deps: &LibraryDependencies, cmd: BorrowBook) -> Result<()> {
    let member = require_member(deps, &cmd.member_id).await?;

    catalog::borrow_book(&deps.catalog, &cmd.book_id).await?;

    deps.notification_service
        .send(
            &format!("You have successfully borrowed book with ID: {}", cmd.book_id),
            &member.email,
        )
        .await;

    Ok(())
}

/// 会員が書籍を返す
pub async fn return_book(deps: &LibraryDependencies, cmd: ReturnBook) -> Result<()> {
    let member = require_member(deps, &cmd.member_id).await?;

    catalog::return_book(&deps.catalog, &cmd.book_id).await?;

    deps.notification_service
        .send(
            &format!("You have successfully returned book with ID: {}", cmd.book_id),
            &member.email,
        )
        .await;

    Ok(())
}

/// 延滞料金を支払う
///
/// # 戻り値
/// 決済が成功したかどうか。決済の拒否はエラーではなく `false` で返す。
pub async fn process_fine_payment(deps: &LibraryDependencies, cmd: PayFine) -> Result<bool> {
    let member = require_member(deps, &cmd.member_id).await?;

    let success = deps
        .payment_processor
        .process(cmd.amount, cmd.member_id.as_str())
        .await;

    if success {
        deps.notification_service
            .send(
                &format!("Fine payment of ${} processed successfully", cmd.amount),
                &member.email,
            )
            .await;
        tracing::info!(
            member_id = %cmd.member_id,
            amount = cmd.amount,
            method = deps.payment_processor.payment_method_name(),
            "fine payment processed"
        );
    } else {
        tracing::warn!(
            member_id = %cmd.member_id,
            amount = cmd.amount,
            method = deps.payment_processor.payment_method_name(),
            "payment failed"
        );
    }

    Ok(success)
}

/// 図書館レポートを生成する
///
/// 全書籍をレポートジェネレーターに渡し、件数のサマリーを返す。
pub async fn generate_library_report(deps: &LibraryDependencies) -> Result<LibraryReport> {
    let books = catalog::get_all_books(&deps.catalog).await?;
    let members = membership::get_all_members(&deps.membership).await?;
    let available_books = catalog::get_available_books(&deps.catalog).await?.len();

    let report = LibraryReport {
        total_books: books.len(),
        total_members: members.len(),
        available_books,
        report_type: deps.report_generator.report_type().to_string(),
        generated_at: Utc::now(),
    };

    tracing::info!(
        total_books = report.total_books,
        total_members = report.total_members,
        available_books = report.available_books,
        "library report"
    );

    let records: Vec<ReportRecord> = books.into_iter().map(ReportRecord::from).collect();
    deps.report_generator.generate(&records).await;

    Ok(report)
}
