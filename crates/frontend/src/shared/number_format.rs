//! Number formatting for the pt-BR locale
//!
//! Thousands are grouped with `.`, decimals separated with `,`, currency
//! prefixed with `R$`.

pub const CURRENCY_SYMBOL: &str = "R$";
const THOUSANDS_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

/// Formats a number with grouped thousands and a fixed number of decimals
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1.234,57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (unsigned, None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(THOUSANDS_SEPARATOR);
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    // "-0,00" reads badly
    let sign = if unsigned.chars().all(|c| c == '0' || c == '.') {
        ""
    } else {
        sign
    };

    match decimal_part {
        Some(d) => format!("{}{}{}{}", sign, grouped, DECIMAL_SEPARATOR, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Formats a monetary amount: `R$ 15.000,50`, `-R$ 1.234,50`
pub fn format_currency(value: f64) -> String {
    with_symbol(&format_number_with_decimals(value, 2))
}

// Sign goes before the symbol
fn with_symbol(amount: &str) -> String {
    match amount.strip_prefix('-') {
        Some(unsigned) => format!("-{} {}", CURRENCY_SYMBOL, unsigned),
        None => format!("{} {}", CURRENCY_SYMBOL, amount),
    }
}

/// Formats an integer count: `1.234`
pub fn format_integer(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Formats an axis tick value: `R$ 15.000` or `R$ 12,5`
///
/// Whole amounts drop their decimals, fractional ones keep up to three,
/// like `toLocaleString('pt-BR')` does.
pub fn format_currency_tick(value: f64) -> String {
    with_symbol(&format_plain(value))
}

/// Formats a percentage as sent by the backend: `12.5%`
pub fn format_percent(value: f64) -> String {
    format!("{}%", value)
}

fn format_plain(value: f64) -> String {
    let formatted = format_number_with_decimals(value, 3);
    if let Some((integer, decimals)) = formatted.split_once(DECIMAL_SEPARATOR) {
        let decimals = decimals.trim_end_matches('0');
        if decimals.is_empty() {
            integer.to_string()
        } else {
            format!("{}{}{}", integer, DECIMAL_SEPARATOR, decimals)
        }
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(15000.5), "R$ 15.000,50");
        assert_eq!(format_currency(357.15), "R$ 357,15");
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(1234567.891), "R$ 1.234.567,89");
        assert_eq!(format_currency(-1234.5), "-R$ 1.234,50");
        assert_eq!(format_currency(-0.001), "R$ 0,00");
    }

    #[test]
    fn test_format_integer() {
        assert_eq!(format_integer(42.0), "42");
        assert_eq!(format_integer(1234567.0), "1.234.567");
        assert_eq!(format_integer(-1000.0), "-1.000");
    }

    #[test]
    fn test_no_negative_zero() {
        assert_eq!(format_number_with_decimals(-0.001, 2), "0,00");
    }

    #[test]
    fn test_ticks_and_percent() {
        assert_eq!(format_currency_tick(15000.0), "R$ 15.000");
        assert_eq!(format_currency_tick(2500.25), "R$ 2.500,25");
        assert_eq!(format_currency_tick(-500.0), "-R$ 500");
        assert_eq!(format_percent(12.5), "12.5%");
        assert_eq!(format_percent(100.0), "100%");
    }
}
