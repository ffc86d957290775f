use kurs_scraper_rs::{NumberFormat, parse_rate};

#[test]
fn test_comma_thousands_normalize() {
    assert_eq!(NumberFormat::CommaThousands.normalize("1,234.56"), "1234.56");
    assert_eq!(
        NumberFormat::CommaThousands.normalize("16,250,000.75"),
        "16250000.75"
    );
    assert_eq!(parse_rate("1,234.56", NumberFormat::CommaThousands), Some(1234.56));
}

#[test]
fn test_dot_thousands_normalize() {
    assert_eq!(NumberFormat::DotThousands.normalize("1.234,56"), "1234.56");
    assert_eq!(NumberFormat::DotThousands.normalize("16.250.000,75"), "16250000.75");
    assert_eq!(parse_rate("1.234,56", NumberFormat::DotThousands), Some(1234.56));
}

#[test]
fn test_dot_thousands_without_decimal_comma() {
    // Indonesian pages drop ",00" on some rows
    assert_eq!(NumberFormat::DotThousands.normalize("16.250"), "16250");
    assert_eq!(NumberFormat::DotThousands.normalize("1.234.567"), "1234567");
    assert_eq!(parse_rate("16.250", NumberFormat::DotThousands), Some(16250.0));
}

#[test]
fn test_normalizers_are_idempotent_on_canonical_input() {
    for format in [NumberFormat::CommaThousands, NumberFormat::DotThousands] {
        assert_eq!(format.normalize("1234.56"), "1234.56", "{:?}", format);
        let once = format.normalize("1234.56");
        assert_eq!(format.normalize(&once), once, "{:?}", format);
        assert_eq!(parse_rate("1234.56", format), Some(1234.56));
    }
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    assert_eq!(parse_rate("  16.331,59\n", NumberFormat::DotThousands), Some(16331.59));
    assert_eq!(parse_rate("\t16,331.59 ", NumberFormat::CommaThousands), Some(16331.59));
}

#[test]
fn test_unparsable_cells_yield_none() {
    for raw in ["", "   ", "-", "n/a", "Rp", "inf", "NaN"] {
        assert_eq!(parse_rate(raw, NumberFormat::DotThousands), None, "{:?}", raw);
        assert_eq!(parse_rate(raw, NumberFormat::CommaThousands), None, "{:?}", raw);
    }
}

#[test]
fn test_zero_is_a_real_rate() {
    assert_eq!(parse_rate("0,00", NumberFormat::DotThousands), Some(0.0));
    assert_eq!(parse_rate("0.00", NumberFormat::CommaThousands), Some(0.0));
}
