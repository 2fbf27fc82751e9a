//! Pipeline Integration Tests
//!
//! Exercises the full path the application takes: JSON records → catalog →
//! pairwise classification → markdown report, plus seed-calendar decoding
//! for realistic crop entries.

use garden_planner::{classify, decode_ranges, encode_ranges};
use garden_planner::{PlantCatalog, SeedCalendar};

// Small but realistic slice of the companion-planting dataset. Relationships
// are deliberately one-directional in places (Basil's record never mentions
// Tomato) to mirror the asymmetry of the real data.
const CATALOG_JSON: &str = r#"[
    {
        "id": "tomato",
        "name": "Tomato",
        "companions": ["basil", "carrot"],
        "antagonists": ["potato"],
        "benefits": ["Improves flavor", "Repels hornworms"]
    },
    {"id": "basil", "name": "Basil", "benefits": ["Repels aphids"]},
    {"id": "carrot", "name": "Carrot"},
    {"id": "potato", "name": "Potato", "antagonists": ["cucumber"]},
    {"id": "cucumber", "name": "Cucumber"}
]"#;

const CALENDAR_JSON: &str = r#"[
    {
        "vegetable": "Tomato",
        "sow_indoors": ["Feb-Apr"],
        "transplant_outdoors": ["May-Jun"],
        "harvest_period": ["Jul-Oct"]
    },
    {
        "vegetable": "Parsnip",
        "sow_outdoors": ["Feb-May"],
        "harvest_period": ["Oct-Feb"]
    }
]"#;

#[test]
fn test_selection_classifies_end_to_end() {
    let catalog = PlantCatalog::from_json(CATALOG_JSON).unwrap();
    let ids: Vec<String> = ["tomato", "basil", "potato", "cucumber"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let report = classify(&catalog.plants_for(&ids));

    assert_eq!(report.compatible.pairs, vec!["Tomato & Basil"]);
    assert_eq!(
        report.compatible.reasons,
        vec!["Improves flavor", "Repels hornworms", "Repels aphids"]
    );
    assert_eq!(
        report.incompatible.pairs,
        vec!["Tomato & Potato", "Potato & Cucumber"]
    );
    // Cautions deduplicated across the two incompatible pairs
    assert_eq!(report.incompatible.reasons.len(), 3);
    assert_eq!(
        report.neutral,
        vec!["Tomato & Cucumber", "Basil & Potato", "Basil & Cucumber"]
    );
}

#[test]
fn test_unknown_ids_shrink_the_selection() {
    let catalog = PlantCatalog::from_json(CATALOG_JSON).unwrap();
    let ids: Vec<String> = ["tomato", "not-a-plant"].iter().map(|s| s.to_string()).collect();

    // One resolvable plant: no pairs, empty report
    let report = classify(&catalog.plants_for(&ids));
    assert!(report.is_empty());
}

#[test]
fn test_report_renders_for_dashboard() {
    let catalog = PlantCatalog::from_json(CATALOG_JSON).unwrap();
    let ids: Vec<String> = ["tomato", "basil", "potato"].iter().map(|s| s.to_string()).collect();

    let rendered = garden_planner::render_markdown(&classify(&catalog.plants_for(&ids)));

    assert!(rendered.contains("### Compatible"));
    assert!(rendered.contains("- Tomato & Basil"));
    assert!(rendered.contains("### Incompatible"));
    assert!(rendered.contains("- May inhibit growth"));
}

#[test]
fn test_calendar_decodes_realistic_crops() {
    let calendar = SeedCalendar::from_json(CALENDAR_JSON).unwrap();

    let tomato = calendar.get("Tomato").unwrap().month_sets();
    assert_eq!(tomato.sow_indoors, (1..=3).collect());
    assert!(tomato.sow_outdoors.is_empty());
    assert_eq!(tomato.harvest_period, (6..=9).collect());

    // Parsnip harvest wraps the year: Oct-Feb
    let parsnip = calendar.get("Parsnip").unwrap().month_sets();
    assert_eq!(parsnip.harvest_period, [9u8, 10, 11, 0, 1].into_iter().collect());
}

#[test]
fn test_editor_toggle_cycle_keeps_tokens_normalized() {
    // Simulates the calendar editor: decode stored tokens, toggle a month,
    // re-encode for storage
    let mut months = decode_ranges(&["Mar-Jun"]);
    months.insert(6); // User toggles July on
    assert_eq!(encode_ranges(&months), vec!["Mar-Jul"]);

    months.remove(&4); // User toggles May off
    assert_eq!(encode_ranges(&months), vec!["Mar-Apr", "Jun-Jul"]);
}
