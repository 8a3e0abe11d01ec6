// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_matcher::prelude::*;
use rust_decimal::Decimal;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Decimal Matcher Example ===\n");

    // Prices: up to 9 significant digits, 2 decimal places
    let config = MatcherConfig::new()
        .with_max_digits(9)
        .with_max_decimal_places(2);
    if let Err(reason) = config.validate() {
        eprintln!("Invalid configuration: {}", reason);
        return;
    }
    let matcher = DecimalMatcher::from_config(config);

    println!(
        "Created matcher: max_digits={}, max_decimal_places={:?}\n",
        matcher.max_digits(),
        matcher.max_decimal_places()
    );

    println!("Matching text values...");
    for input in ["1499.99", "0.5", "1e3", "1234567.891", "12345678901", "12,50", "abc"] {
        report(input, &matcher.match_value(input));
    }

    println!("\nMatching non-text values...");
    report("None", &matcher.match_value(None::<&str>));
    report("Decimal 19.995", &matcher.match_value(Decimal::new(19995, 3)));
    report("i64 42", &matcher.match_value(42i64));

    // Loosely-typed limits (e.g. from a form): negatives disable or default
    let loose = DecimalMatcher::from_signed_limits(Some(-1), Some(-1));
    println!(
        "\nLoose matcher: max_digits={}, max_decimal_places={:?}",
        loose.max_digits(),
        loose.max_decimal_places()
    );
    report("0.123456789", &loose.match_value("0.123456789"));
}

fn report(label: &str, result: &ValidationResult) {
    if result.is_valid() {
        println!("  {:<16} ok", label);
    } else {
        println!("  {:<16} {}", label, result);
    }
}
