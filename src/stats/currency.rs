//! Indian Rupee formatting
//!
//! Formats amounts the way the `en-IN` locale prints INR currency: a rupee
//! sign, two decimal places, and digit groups of three for the last group
//! and two for every group before it (`₹12,34,567.00`).

const RUPEE_SIGN: char = '₹';

pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return "N/A".to_string();
    }

    // Exact decimal expansion, so amounts beyond any integer type keep their digits
    let fixed = format!("{:.2}", amount.abs());
    let (rupees, paise) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let rounds_to_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if amount < 0.0 && !rounds_to_zero { "-" } else { "" };
    format!(
        "{}{}{}.{}",
        sign,
        RUPEE_SIGN,
        group_indian(rupees),
        paise
    )
}

/// Insert en-IN digit separators into a string of ASCII digits
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 2);

    let lead = head.len() % 2;
    if lead > 0 {
        grouped.push_str(&head[..lead]);
    }
    for pair in head.as_bytes()[lead..].chunks(2) {
        if !grouped.is_empty() {
            grouped.push(',');
        }
        grouped.extend(pair.iter().map(|&b| b as char));
    }

    grouped.push(',');
    grouped.push_str(tail);
    grouped
}
