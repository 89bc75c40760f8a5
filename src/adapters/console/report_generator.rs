use crate::ports::report_generator::{ReportGenerator, ReportRecord};
use async_trait::async_trait;

/// 書籍レポート: 書籍レコードだけを出力する
#[derive(Debug, Default, Clone, Copy)]
pub struct BookReportGenerator;

/// 会員レポート: 会員レコードだけを出力する
#[derive(Debug, Default, Clone, Copy)]
pub struct MemberReportGenerator;

#[async_trait]
impl ReportGenerator for BookReportGenerator {
    async fn generate(&self, records: &[ReportRecord]) {
        tracing::info!(report = self.report_type(), "generating report");
        for record in records {
            if let ReportRecord::Book(book) = record {
                let available = if book.available { "Yes" } else { "No" };
                tracing::info!(
                    title = %book.title,
                    author = %book.author,
                    available,
                    "book"
                );
            }
        }
    }

    fn report_type(&self) -> &'static str {
        "Book Report"
    }
}

#[async_trait]
impl ReportGenerator for MemberReportGenerator {
    async fn generate(&self, records: &[ReportRecord]) {
        tracing::info!(report = self.report_type(), "generating report");
        for record in records {
            if let ReportRecord::Member(member) = record {
                tracing::info!(
                    name = %member.name,
                    email = %member.email,
                    phone = member.phone.as_deref().unwrap_or("-"),
                    "member"
                );
            }
        }
    }

    fn report_type(&self) -> &'static str {
        "Member Report"
    }
}
