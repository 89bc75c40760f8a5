use crate::domain::{Book, Member};
use async_trait::async_trait;

/// レポートに渡すレコード
///
/// 各レポートは自分が扱える種類のレコードだけを出力し、残りは読み飛ばす。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportRecord {
    Book(Book),
    Member(Member),
}

impl From<Book> for ReportRecord {
    fn from(book: Book) -> Self {
        ReportRecord::Book(book)
    }
}

impl From<Member> for ReportRecord {
    fn from(member: Member) -> Self {
        ReportRecord::Member(member)
    }
}

/// レポート生成ポート
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    /// レコード一覧からレポートを生成する
    async fn generate(&self, records: &[ReportRecord]);

    /// レポート種別名
    fn report_type(&self) -> &'static str;
}
