// tests/integration_tests/formatting_test.rs
use webtools::{escape_html, format_number};

#[test]
fn test_format_number_bands() {
    let cases = [
        (0.0, "0"),
        (0.00005, "5.0000e-5"),
        (0.75, "0.75"),
        (1234.5, "1,234.5"),
        (9876.54321, "9,876.5432"),
        (123_456.789, "123,456.79"),
        (5_000_000.0, "5.0000e+6"),
        (1.03125, "1.0313"),
        (12_345.125, "12,345.13"),
        (1_000_050.0, "1.0001e+6"),
        (0.507_812_5, "0.507813"),
    ];
    for (input, expected) in cases {
        assert_eq!(format_number(input), expected, "formatting {input}");
    }
}

#[test]
fn test_format_number_negative_mirrors_positive() {
    for value in [0.00005, 0.75, 1234.5, 123_456.789, 5_000_000.0] {
        assert_eq!(
            format_number(-value),
            format!("-{}", format_number(value)),
            "formatting -{value}"
        );
    }
}

#[test]
fn test_escape_html_covers_all_five_characters() {
    assert_eq!(
        escape_html("<b>&\"'</b>"),
        "&lt;b&gt;&amp;&quot;&#039;&lt;/b&gt;"
    );
}

#[test]
fn test_escape_html_leaves_unicode_alone() {
    assert_eq!(escape_html("Crème brûlée → 5€"), "Crème brûlée → 5€");
}
