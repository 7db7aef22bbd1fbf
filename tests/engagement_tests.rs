// Integration tests for the engagement heuristics

#[cfg(test)]
mod engagement_integration_tests {
    use chrono::{Duration, TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use roadmapper::engagement::{
        assign_variant, should_show_popup, Experiment, PopupPolicy, Variant, VisitorActivity,
    };

    #[test]
    fn test_popup_decision_is_pure_over_supplied_time() {
        let activity = VisitorActivity {
            seconds_on_page: 120,
            scroll_depth_percent: 90,
            pages_viewed: 4,
            returning_visitor: true,
        };
        let policy = PopupPolicy::default();
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();

        // Same inputs, same answer, no matter how often we ask
        for _ in 0..3 {
            assert!(should_show_popup(&activity, now, None, &policy));
        }

        // Shown 23 hours ago: still inside the 24h cooldown
        let last_shown = Some(now - Duration::hours(23));
        assert!(!should_show_popup(&activity, now, last_shown, &policy));

        // Shown 25 hours ago: eligible again
        let last_shown = Some(now - Duration::hours(25));
        assert!(should_show_popup(&activity, now, last_shown, &policy));
    }

    #[test]
    fn test_weighted_assignment_distribution() {
        let experiment = Experiment::new(
            "estimate_cta_copy",
            vec![
                Variant { id: "control".to_string(), weight: 9 },
                Variant { id: "challenger".to_string(), weight: 1 },
            ],
        );

        let mut rng = StdRng::seed_from_u64(2024);
        let mut control_count = 0;
        for _ in 0..1000 {
            if assign_variant(&experiment, &mut rng).unwrap().id == "control" {
                control_count += 1;
            }
        }

        // 9:1 weighting: control should dominate but not monopolize
        assert!(control_count > 800, "control picked {} times", control_count);
        assert!(control_count < 1000, "challenger never picked");
    }
}
