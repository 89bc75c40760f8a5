//! 識別子バリデーション
//!
//! ISBN・メールアドレス・電話番号の形式チェック。
//! すべて副作用のない純粋関数で、失敗は `false` で表す。

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // ASCII空白とハイフン（区切り文字）
    static ref ISBN_SEPARATOR_REGEX: Regex = Regex::new(r"(?-u:\s)|-").unwrap();

    static ref ISBN13_REGEX: Regex = Regex::new(r"^[0-9]{13}$").unwrap();

    // 9桁の数字 + 数字または大文字X
    static ref ISBN10_REGEX: Regex = Regex::new(r"^[0-9]{9}[0-9X]$").unwrap();

    // 0 + 9〜10桁の数字
    static ref PHONE_REGEX: Regex = Regex::new(r"^0[0-9]{9,10}$").unwrap();
}

/// ISBN-10 / ISBN-13 のチェックディジットを検証する
///
/// ASCII空白とハイフンは除去してから判定する。
/// - 13桁の数字 → ISBN-13 のチェックディジット
/// - 9桁の数字 + 数字または `X` → ISBN-10 のチェックディジット
/// - それ以外 → 不正
pub fn is_valid_isbn(raw: &str) -> bool {
    if raw.trim().is_empty() {
        return false;
    }

    let cleaned = ISBN_SEPARATOR_REGEX.replace_all(raw, "");

    if ISBN13_REGEX.is_match(&cleaned) {
        validate_isbn13(cleaned.as_bytes())
    } else if ISBN10_REGEX.is_match(&cleaned) {
        validate_isbn10(cleaned.as_bytes())
    } else {
        false
    }
}

fn digit_value(b: u8) -> u32 {
    u32::from(b - b'0')
}

/// 重み 1,3,1,3... の総和からチェックディジットを求める
fn validate_isbn13(digits: &[u8]) -> bool {
    let sum: u32 = digits[..12]
        .iter()
        .enumerate()
        .map(|(i, b)| {
            let weight = if i % 2 == 0 { 1 } else { 3 };
            digit_value(*b) * weight
        })
        .sum();

    let check_digit = (10 - sum % 10) % 10;
    check_digit == digit_value(digits[12])
}

/// 重み 10,9,...,2 の総和 mod 11 をチェックディジットとする
///
/// 10 の場合は末尾が `X` であること。
fn validate_isbn10(digits: &[u8]) -> bool {
    let sum: u32 = digits[..9]
        .iter()
        .enumerate()
        .map(|(i, b)| digit_value(*b) * (10 - i as u32))
        .sum();

    let check_digit = sum % 11;
    match digits[9] {
        b'X' => check_digit == 10,
        last => check_digit == digit_value(last),
    }
}

/// メールアドレスの簡易チェック（`@` と `.` を含むこと）
///
/// RFC準拠ではない。登録・更新の両方で使う。
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.contains('@') && email.contains('.')
}

/// 電話番号チェック: `0` + 9〜10桁の数字
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}
