use fred_navigator::error::NavigatorError;
use fred_navigator::index::JobIndex;
use fred_navigator::params::Selection;
use fred_navigator::report::parse_report;
use proptest::prelude::*;
use std::collections::HashMap;
use std::path::Path;

// --- STRATEGIES ---

prop_compose! {
    fn arb_pairs()(
        pairs in proptest::collection::vec(("[A-Za-z0-9=.-]{1,24}", "[0-9]{1,6}"), 0..40)
    ) -> Vec<(String, String)> {
        pairs
    }
}

prop_compose! {
    fn arb_records()(
        records in proptest::collection::vec((0.0..500.0f64, -1e6..1e6f64), 0..60)
    ) -> Vec<(f64, f64)> {
        records
    }
}

fn render_report(records: &[(f64, f64)]) -> String {
    let mut out = String::from("Day Mean Std Min Max N Run\n");
    for (day, value) in records {
        out.push_str(&format!("{:?} {:?} 0 0 0 0 0 0\n", day, value));
    }
    out
}

proptest! {
    #[test]
    fn prop_every_built_key_resolves(pairs in arb_pairs()) {
        let text: String = pairs.iter().map(|(k, v)| format!("{} {}\n", k, v)).collect();
        let index = JobIndex::parse(&text, "prop").unwrap();

        let mut expected = HashMap::new();
        for (k, v) in &pairs {
            expected.insert(k.clone(), v.clone());
        }

        prop_assert_eq!(index.len(), expected.len());
        for (k, v) in &expected {
            prop_assert_eq!(index.lookup(k).unwrap().as_str(), v.as_str());
        }
    }

    #[test]
    fn prop_dangling_key_is_malformed(pairs in arb_pairs(), tail in "[A-Za-z0-9=.]{1,12}") {
        let mut text: String = pairs.iter().map(|(k, v)| format!("{} {} ", k, v)).collect();
        text.push_str(&tail);
        let is_malformed = matches!(
            JobIndex::parse(&text, "prop"),
            Err(NavigatorError::MalformedIndex(_))
        );
        prop_assert!(is_malformed);
    }

    #[test]
    fn prop_report_round_trips_day_and_value(records in arb_records()) {
        let points = parse_report(&render_report(&records), Path::new("prop.dat")).unwrap();
        prop_assert_eq!(points.len(), records.len());
        for (p, (day, value)) in points.iter().zip(&records) {
            prop_assert_eq!(p.day, *day);
            prop_assert_eq!(p.value, *value);
        }
    }

    #[test]
    fn prop_truncated_report_is_malformed(records in arb_records(), cut in 1usize..8) {
        let mut text = render_report(&records);
        for _ in 0..cut {
            text.push_str(" 0");
        }
        let is_malformed = matches!(
            parse_report(&text, Path::new("prop.dat")),
            Err(NavigatorError::MalformedReport { .. })
        );
        prop_assert!(is_malformed);
    }

    #[test]
    fn prop_transmission_key_has_one_decimal(r0 in 0.05..9.94f64) {
        let key = Selection::transmission(r0).unwrap().key();
        let value = key.as_str().strip_prefix("R0=").unwrap();
        let (whole, frac) = value.split_once('.').unwrap();
        prop_assert_eq!(frac.len(), 1);
        prop_assert!(!whole.is_empty());
        prop_assert!((value.parse::<f64>().unwrap() - r0).abs() <= 0.05 + 1e-9);
    }
}
