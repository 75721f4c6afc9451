/// How a price is rendered: currency symbol and thousands separator, no decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    pub symbol: &'static str,
    pub group_separator: char,
}

impl CurrencyFormat {
    /// Indonesian Rupiah, e.g. `Rp 1.234.567`.
    pub const RUPIAH: Self = Self {
        symbol: "Rp",
        group_separator: '.',
    };

    /// Rounds `value` to a whole amount and groups its digits by thousands.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return format!("{} {value}", self.symbol);
        }

        let rounded = format!("{value:.0}");
        let (sign, digits) = match rounded.strip_prefix('-') {
            Some(digits) if digits.bytes().any(|b| b != b'0') => ("-", digits),
            Some(digits) => ("", digits),
            None => ("", rounded.as_str()),
        };

        format!("{} {sign}{}", self.symbol, self.group(digits))
    }

    fn group(&self, digits: &str) -> String {
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(self.group_separator);
            }
            out.push(c);
        }
        out
    }
}

/// Formats `value` as Rupiah.
pub fn format_rupiah(value: f64) -> String {
    CurrencyFormat::RUPIAH.format(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_thousands_with_periods() {
        assert_eq!(format_rupiah(1_234_567.), "Rp 1.234.567");
        assert_eq!(format_rupiah(1_000_000_000.), "Rp 1.000.000.000");
    }

    #[test]
    fn short_amounts_are_not_grouped() {
        assert_eq!(format_rupiah(0.), "Rp 0");
        assert_eq!(format_rupiah(7.), "Rp 7");
        assert_eq!(format_rupiah(999.), "Rp 999");
        assert_eq!(format_rupiah(1_000.), "Rp 1.000");
    }

    #[test]
    fn drops_decimals() {
        assert_eq!(format_rupiah(1_234_567.4), "Rp 1.234.567");
        assert_eq!(format_rupiah(1_234_567.6), "Rp 1.234.568");
    }

    #[test]
    fn keeps_sign_after_symbol() {
        assert_eq!(format_rupiah(-1_234.2), "Rp -1.234");
        assert_eq!(format_rupiah(-0.2), "Rp 0");
    }

    #[test]
    fn non_finite_is_verbatim() {
        assert_eq!(format_rupiah(f64::NAN), "Rp NaN");
        assert_eq!(format_rupiah(f64::INFINITY), "Rp inf");
    }

    #[test]
    fn custom_separator() {
        let fmt = CurrencyFormat {
            symbol: "$",
            group_separator: ',',
        };
        assert_eq!(fmt.format(1_234_567.), "$ 1,234,567");
    }
}
