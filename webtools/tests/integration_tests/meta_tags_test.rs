// tests/integration_tests/meta_tags_test.rs
use webtools::{MetaTagDocument, MetaTagFields, extract_domain, generate, keyword_count};

#[test]
fn test_blank_title_gets_default() {
    let fields = MetaTagFields {
        title: String::new(),
        description: String::from("x"),
        ..MetaTagFields::default()
    };
    let document = generate(&fields);
    assert!(document.code.contains("<title>My Website</title>"));
    assert!(
        document
            .code
            .contains("<meta property=\"og:title\" content=\"My Website\">")
    );
}

#[test]
fn test_domain_extraction() {
    let fields = MetaTagFields {
        url: String::from("https://www.example.com/page"),
        ..MetaTagFields::default()
    };
    assert_eq!(generate(&fields).domain, "example.com");
    assert_eq!(extract_domain("http://shop.example.co.uk/cart"), "shop.example.co.uk");
}

#[test]
fn test_disabled_blocks_are_omitted() {
    let fields = MetaTagFields {
        include_open_graph: false,
        include_twitter: false,
        ..MetaTagFields::sample()
    };
    let document = generate(&fields);
    assert!(!document.code.contains("og:"));
    assert!(!document.code.contains("twitter:"));
    assert!(document.code.contains("<meta name=\"robots\" content=\"index, follow\">"));
    assert!(document.code.contains("name=\"viewport\""));
}

#[test]
fn test_canonical_is_always_last() {
    for seo in [false, true] {
        for twitter in [false, true] {
            let fields = MetaTagFields {
                include_seo: seo,
                include_twitter: twitter,
                ..MetaTagFields::sample()
            };
            let document = generate(&fields);
            assert!(
                document
                    .lines()
                    .last()
                    .is_some_and(|line| line.starts_with("<link rel=\"canonical\""))
            );
        }
    }
}

#[test]
fn test_sample_snippet_lines() {
    let document = generate(&MetaTagFields::sample());
    let comment_lines = document
        .lines()
        .filter(|line| MetaTagDocument::is_comment_line(line))
        .count();
    assert_eq!(comment_lines, 6);
    assert!(
        document
            .code
            .contains("<title>My Awesome Website - Best Products &amp; Services</title>")
    );
    assert_eq!(document.title, "My Awesome Website - Best Products & Services");
    assert_eq!(document.image, "https://www.example.com/image.jpg");
}

#[test]
fn test_injection_attempt_is_neutralised() {
    let fields = MetaTagFields {
        url: String::from("https://example.com/\"><script>alert(1)</script>"),
        ..MetaTagFields::default()
    };
    let document = generate(&fields);
    assert!(!document.code.contains("<script>"));
    assert!(
        document
            .code
            .contains("href=\"https://example.com/&quot;&gt;&lt;script&gt;alert(1)&lt;/script&gt;\"")
    );
}

#[test]
fn test_keyword_counter() {
    assert_eq!(keyword_count(&MetaTagFields::sample().keywords), 5);
    assert_eq!(keyword_count(",,,"), 0);
}
