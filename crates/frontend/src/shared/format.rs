//! Форматирование чисел и дат для таблиц

use chrono::{DateTime, Datelike, Utc};

/// Форматирует число с разделителем тысяч (пробел) и двумя знаками
/// после запятой
pub fn format_money(value: f64) -> String {
    let formatted = format!("{:.2}", value);

    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1);

    // Вставляем пробелы каждые 3 цифры с конца целой части
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(' ');
        }
        result.push(*c);
    }

    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Вес в килограммах, без хвостовых нулей
pub fn format_weight(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{} кг", trimmed)
}

const MONTHS_RU: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Дата заказа в виде "2 ноября 2024"
pub fn format_order_date(dt: DateTime<Utc>) -> String {
    let month = MONTHS_RU[(dt.month0()) as usize];
    format!("{} {} {}", dt.day(), month, dt.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.891), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1 234.56");
        assert_eq!(format_money(801.2), "801.20");
    }

    #[test]
    fn test_format_weight() {
        assert_eq!(format_weight(2.0), "2 кг");
        assert_eq!(format_weight(3.25), "3.25 кг");
        assert_eq!(format_weight(0.5), "0.5 кг");
    }

    #[test]
    fn test_format_order_date() {
        let dt = Utc.with_ymd_and_hms(2024, 11, 2, 10, 15, 0).unwrap();
        assert_eq!(format_order_date(dt), "2 ноября 2024");
        let dt = Utc.with_ymd_and_hms(2025, 1, 31, 0, 0, 0).unwrap();
        assert_eq!(format_order_date(dt), "31 января 2025");
    }
}
