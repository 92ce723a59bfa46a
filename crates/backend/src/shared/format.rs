/// Группирует цифры по три, разделяя точками: `1234567` -> `1.234.567`
fn group_digits(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result
}

/// Форматирует число с разделителями тысяч (точками)
///
/// Используется для размеров ответов и количества строк в логах.
pub fn format_number(n: usize) -> String {
    group_digits(&n.to_string())
}

/// Форматирует сумму: разделители тысяч и два знака после запятой
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{sign}{},{:02}",
        group_digits(&(cents / 100).to_string()),
        cents % 100
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1.000");
        assert_eq!(format_number(1234567), "1.234.567");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0,00");
        assert_eq!(format_amount(180.0), "180,00");
        assert_eq!(format_amount(1234567.891), "1.234.567,89");
        assert_eq!(format_amount(-2500.5), "-2.500,50");
        assert_eq!(format_amount(-0.001), "0,00");
    }
}
