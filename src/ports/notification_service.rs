use async_trait::async_trait;

/// 通知サービスポート
///
/// 会員への通知配信メカニズムを抽象化する。
/// 実装はメール、SMS、プッシュ通知など。
///
/// 呼び出し側を失敗させない。配信エラーは実装側でログに記録する。
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// メッセージを宛先に送信する
    async fn send(&self, message: &str, recipient: &str);

    /// 通知チャネル名（ログ表示用）
    fn channel_name(&self) -> &'static str;
}
