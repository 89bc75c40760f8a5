use async_trait::async_trait;

/// 決済ポート
///
/// 決済手段（クレジットカード、銀行振込、PayPal）を差し替え可能にする。
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// 決済を実行する
    ///
    /// 決済が拒否された場合は `false` を返す。エラーではない。
    async fn process(&self, amount: f64, account_ref: &str) -> bool;

    /// 決済手段名
    fn payment_method_name(&self) -> &'static str;
}
