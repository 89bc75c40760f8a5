//! 環境変数から読み込むアプリケーション設定

use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::adapters::console::*;
use crate::ports::{NotificationService, PaymentProcessor, ReportGenerator};

/// 設定値のエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown notification channel: {0}")]
    UnknownNotificationChannel(String),

    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    #[error("Unknown report kind: {0}")]
    UnknownReportKind(String),
}

/// 通知チャネル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationChannel {
    #[default]
    Email,
    Sms,
    Push,
}

impl FromStr for NotificationChannel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "email" => Ok(NotificationChannel::Email),
            "sms" => Ok(NotificationChannel::Sms),
            "push" => Ok(NotificationChannel::Push),
            other => Err(ConfigError::UnknownNotificationChannel(other.to_string())),
        }
    }
}

impl NotificationChannel {
    pub fn build(self) -> Arc<dyn NotificationService> {
        match self {
            NotificationChannel::Email => Arc::new(EmailNotificationService),
            NotificationChannel::Sms => Arc::new(SmsNotificationService),
            NotificationChannel::Push => Arc::new(PushNotificationService),
        }
    }
}

/// 決済手段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    CreditCard,
    BankTransfer,
    PayPal,
}

impl FromStr for PaymentMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "credit_card" => Ok(PaymentMethod::CreditCard),
            "bank_transfer" => Ok(PaymentMethod::BankTransfer),
            "paypal" => Ok(PaymentMethod::PayPal),
            other => Err(ConfigError::UnknownPaymentMethod(other.to_string())),
        }
    }
}

impl PaymentMethod {
    pub fn build(self) -> Arc<dyn PaymentProcessor> {
        match self {
            PaymentMethod::CreditCard => Arc::new(CreditCardPaymentProcessor),
            PaymentMethod::BankTransfer => Arc::new(BankTransferPaymentProcessor),
            PaymentMethod::PayPal => Arc::new(PayPalPaymentProcessor),
        }
    }
}

/// レポート種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportKind {
    #[default]
    Book,
    Member,
}

impl FromStr for ReportKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "book" => Ok(ReportKind::Book),
            "member" => Ok(ReportKind::Member),
            other => Err(ConfigError::UnknownReportKind(other.to_string())),
        }
    }
}

impl ReportKind {
    pub fn build(self) -> Arc<dyn ReportGenerator> {
        match self {
            ReportKind::Book => Arc::new(BookReportGenerator),
            ReportKind::Member => Arc::new(MemberReportGenerator),
        }
    }
}

/// アプリケーション設定
///
/// 読み込む環境変数:
/// - `LIBRARY_NOTIFICATION_CHANNEL`: `email` | `sms` | `push`（既定: `email`）
/// - `LIBRARY_PAYMENT_METHOD`: `credit_card` | `bank_transfer` | `paypal`（既定: `credit_card`）
/// - `LIBRARY_REPORT`: `book` | `member`（既定: `book`）
/// - `RUST_LOG`: tracingのフィルタ（既定: `rusty_library_catalog=info`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub notification_channel: NotificationChannel,
    pub payment_method: PaymentMethod,
    pub report_kind: ReportKind,
    pub log_filter: String,
}

const DEFAULT_LOG_FILTER: &str = "rusty_library_catalog=info";

impl Config {
    /// 環境変数から読み込む。未設定の項目は既定値を使う。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の参照関数から読み込む（テストで環境変数を汚さないため）
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let notification_channel: NotificationChannel = lookup("LIBRARY_NOTIFICATION_CHANNEL")
            .map(|v| v.parse::<NotificationChannel>())
            .transpose()?
            .unwrap_or_default();
        let payment_method: PaymentMethod = lookup("LIBRARY_PAYMENT_METHOD")
            .map(|v| v.parse::<PaymentMethod>())
            .transpose()?
            .unwrap_or_default();
        let report_kind: ReportKind = lookup("LIBRARY_REPORT")
            .map(|v| v.parse::<ReportKind>())
            .transpose()?
            .unwrap_or_default();
        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            notification_channel,
            payment_method,
            report_kind,
            log_filter,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notification_channel: NotificationChannel::default(),
            payment_method: PaymentMethod::default(),
            report_kind: ReportKind::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
