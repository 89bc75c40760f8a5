use crate::ports::payment_processor::PaymentProcessor;
use async_trait::async_trait;

/// Simulated approval rule shared by every payment method:
/// the amount must be positive and the account reference non-blank.
fn approve(amount: f64, account_ref: &str) -> bool {
    amount > 0.0 && !account_ref.trim().is_empty()
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CreditCardPaymentProcessor;

#[derive(Debug, Default, Clone, Copy)]
pub struct BankTransferPaymentProcessor;

#[derive(Debug, Default, Clone, Copy)]
pub struct PayPalPaymentProcessor;

#[async_trait]
impl PaymentProcessor for CreditCardPaymentProcessor {
    async fn process(&self, amount: f64, account_ref: &str) -> bool {
        tracing::info!(amount, account = account_ref, "processing credit card payment");
        approve(amount, account_ref)
    }

    fn payment_method_name(&self) -> &'static str {
        "Credit Card"
    }
}

#[async_trait]
impl PaymentProcessor for BankTransferPaymentProcessor {
    async fn process(&self, amount: f64, account_ref: &str) -> bool {
        tracing::info!(amount, account = account_ref, "processing bank transfer");
        approve(amount, account_ref)
    }

    fn payment_method_name(&self) -> &'static str {
        "Bank Transfer"
    }
}

#[async_trait]
impl PaymentProcessor for PayPalPaymentProcessor {
    async fn process(&self, amount: f64, account_ref: &str) -> bool {
        tracing::info!(amount, account = account_ref, "processing PayPal payment");
        approve(amount, account_ref)
    }

    fn payment_method_name(&self) -> &'static str {
        "PayPal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_every_method_applies_the_same_rule() {
        let processors: Vec<Box<dyn PaymentProcessor>> = vec![
            Box::new(CreditCardPaymentProcessor),
            Box::new(BankTransferPaymentProcessor),
            Box::new(PayPalPaymentProcessor),
        ];

        for processor in processors {
            assert!(processor.process(5.0, "M001").await);
            assert!(!processor.process(0.0, "M001").await);
            assert!(!processor.process(-1.5, "M001").await);
            assert!(!processor.process(5.0, "   ").await);
        }
    }

    #[test]
    fn test_method_names() {
        assert_eq!(CreditCardPaymentProcessor.payment_method_name(), "Credit Card");
        assert_eq!(BankTransferPaymentProcessor.payment_method_name(), "Bank Transfer");
        assert_eq!(PayPalPaymentProcessor.payment_method_name(), "PayPal");
    }
}
