use super::*;

fn record() -> ExpenseRecord {
    ExpenseRecord {
        location: "Luzern".into(),
        category: "Essen".into(),
        amount: 12.5,
        lon: 8.3,
        lat: 47.05,
        description: "Mittagessen".into(),
    }
}

#[test]
fn record_tooltip_lists_description_location_category_amount() {
    assert_eq!(
        record_html(&record(), "CHF"),
        "<strong>Mittagessen</strong><br>Luzern<br><em>Essen</em><br>12.5 CHF"
    );
}

#[test]
fn whole_amounts_have_no_decimals() {
    let mut r = record();
    r.amount = 30.0;
    assert!(record_html(&r, "CHF").ends_with("<br>30 CHF"));
}

#[test]
fn category_tooltip_has_two_decimals() {
    assert_eq!(category_html("Hotel", 150.0, "EUR"), "<strong>Hotel</strong><br>150.00 EUR");
    assert_eq!(category_html("Zug", 12.5, "CHF"), "<strong>Zug</strong><br>12.50 CHF");
}

#[test]
fn record_text_is_escaped() {
    let mut r = record();
    r.description = "<img src=x onerror=alert(1)>".into();
    r.location = "Tom & Jerry's".into();
    let html = record_html(&r, "CHF");
    assert!(!html.contains("<img"));
    assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    assert!(html.contains("Tom &amp; Jerry&#39;s"));
}

#[test]
fn escape_passes_plain_text() {
    assert_eq!(escape("Übernachtung Zürich"), "Übernachtung Zürich");
    assert_eq!(escape("\"q\""), "&quot;q&quot;");
}

#[test]
fn placement_offsets_from_pointer() {
    assert_eq!(placement(Point::new(100.0, 200.0)), Point::new(110.0, 172.0));
}
