/// Amount helpers for Albanian lek (ALL).
///
/// Every price, budget and package cost in the marketplace is a whole
/// number of lek, so amounts are plain `u64`.

/// Insert thousands separators: 4500 -> "4,500".
pub fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format an amount the way the app displays it: "4,500 ALL".
pub fn format_lek(amount: u64) -> String {
    format!("{} ALL", group_thousands(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(4500), "4,500");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_lek() {
        assert_eq!(format_lek(5200), "5,200 ALL");
        assert_eq!(format_lek(500), "500 ALL");
    }
}
