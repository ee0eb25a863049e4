//! Shared utility functions for SproutSight crates.

/// Number formatting for gold amounts shown in tooltips and summaries
pub mod numbers {
    /// Group the digits of `number` in threes with commas, e.g. `-1234567` -> `-1,234,567`.
    pub fn format_thousands(number: i64) -> String {
        let digits = number.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if number < 0 {
            grouped.push('-');
        }
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        grouped
    }

    /// Format a gold amount the way the game does: grouped digits with a `g` suffix.
    pub fn format_gold_number(number: i64) -> String {
        format!("{}g", format_thousands(number))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_format_thousands() {
            assert_eq!(format_thousands(0), "0");
            assert_eq!(format_thousands(999), "999");
            assert_eq!(format_thousands(1000), "1,000");
            assert_eq!(format_thousands(1234567), "1,234,567");
            assert_eq!(format_thousands(-1234), "-1,234");
            assert_eq!(format_thousands(i64::MIN), "-9,223,372,036,854,775,808");
        }

        #[test]
        fn test_format_gold_number() {
            assert_eq!(format_gold_number(2000), "2,000g");
            assert_eq!(format_gold_number(-500), "-500g");
        }
    }
}
