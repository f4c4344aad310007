//! Frequency classification for free-text dosing directions.

/// One classification rule: any phrase match assigns the rule's dose hours
/// and human-readable summary label.
#[derive(Debug)]
pub struct DoseRule {
    pub phrases: &'static [&'static str],
    pub hours: &'static [u32],
    pub label: &'static str,
}

/// Ordered classification policy. More frequent regimens come first so a
/// directions string carrying tokens for several families resolves to the
/// most frequent one.
pub const DOSE_RULES: &[DoseRule] = &[
    DoseRule {
        phrases: &["THREE TIMES A DAY", "3 TIMES DAILY", "TID"],
        hours: &[7, 13, 20],
        label: "3x Day",
    },
    DoseRule {
        phrases: &["TWICE DAILY", "2 TIMES A DAY", "BID"],
        hours: &[7, 19],
        label: "2x Day",
    },
    DoseRule {
        phrases: &["ONCE DAILY", "1 TIME A DAY", "QD"],
        hours: &[8],
        label: "1x Day",
    },
];

/// Classify directions text against the ordered rule table. First match
/// wins; matching is a case-insensitive substring check.
pub fn classify(directions: &str) -> Option<&'static DoseRule> {
    let directions = directions.to_uppercase();
    DOSE_RULES
        .iter()
        .find(|rule| rule.phrases.iter().any(|phrase| directions.contains(phrase)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_times_daily_variants() {
        for directions in [
            "TAKE 1 TABLET THREE TIMES A DAY",
            "take 1 tablet 3 times daily",
            "TAKE 1 TABLET TID WITH FOOD",
        ] {
            let rule = classify(directions).expect("Should classify");
            assert_eq!(rule.hours, &[7, 13, 20]);
            assert_eq!(rule.label, "3x Day");
        }
    }

    #[test]
    fn test_twice_daily_variants() {
        for directions in [
            "TAKE 1 TABLET TWICE DAILY",
            "TAKE 1 CAPSULE 2 TIMES A DAY",
            "take one tablet bid",
        ] {
            let rule = classify(directions).expect("Should classify");
            assert_eq!(rule.hours, &[7, 19]);
            assert_eq!(rule.label, "2x Day");
        }
    }

    #[test]
    fn test_once_daily_variants() {
        for directions in [
            "TAKE 1 TABLET ONCE DAILY",
            "TAKE 1 TABLET 1 TIME A DAY",
            "TAKE 1 TABLET QD AT BEDTIME",
        ] {
            let rule = classify(directions).expect("Should classify");
            assert_eq!(rule.hours, &[8]);
            assert_eq!(rule.label, "1x Day");
        }
    }

    #[test]
    fn test_unrecognized_directions_do_not_classify() {
        assert!(classify("TAKE AS NEEDED FOR PAIN").is_none());
        assert!(classify("APPLY TO AFFECTED AREA EVERY WEEK").is_none());
        assert!(classify("").is_none());
    }

    #[test]
    fn test_more_frequent_regimen_wins_on_mixed_tokens() {
        // Both TID and BID tokens present: first-match precedence picks the
        // three-times-daily family.
        let rule = classify("TAKE ONE TABLET TID; MAY ALSO USE BID IF NEEDED")
            .expect("Should classify");
        assert_eq!(rule.hours, &[7, 13, 20]);
    }

    #[test]
    fn test_daily_alone_does_not_match_a_looser_pattern() {
        // "daily" on its own is ambiguous and must not classify.
        assert!(classify("TAKE DAILY AS DIRECTED").is_none());
    }
}
