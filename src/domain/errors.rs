/// 貸出のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowBookError {
    /// 既に貸出中
    NotAvailable,
    /// 破損しているため貸出不可
    Damaged,
}

/// 返却のエラー
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnBookError {
    /// 既に書架にある
    AlreadyAvailable,
}
