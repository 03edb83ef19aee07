// src/core/sanitize.rs

/// Keep the last four digits of a card number for logs.
pub fn mask_card_no(card_no: &str) -> String {
    let digits: Vec<char> = card_no.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() <= 4 {
        return "*".repeat(digits.len());
    }
    let (hidden, shown) = digits.split_at(digits.len() - 4);
    let mut out = "*".repeat(hidden.len());
    out.extend(shown);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_no_keeps_last_four() {
        assert_eq!(mask_card_no("50211234567890"), "**********7890");
        assert_eq!(mask_card_no("123"), "***");
    }
}
