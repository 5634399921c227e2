use permit_core::{AppliesWhen, BusinessProfile, NumericBound, Priority, Rule, RuleCatalog};
use permit_engine::match_requirements;
use proptest::prelude::*;

fn priority_strategy() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::High),
        Just(Priority::Medium),
        Just(Priority::Low),
        Just(Priority::Unknown),
    ]
}

fn bound_strategy() -> impl Strategy<Value = Option<NumericBound>> {
    proptest::option::of((0.0f64..300.0, 0.0f64..300.0).prop_map(|(a, b)| {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        NumericBound {
            gte: Some(lo),
            lte: Some(hi),
            eq: None,
        }
    }))
}

fn catalog_strategy() -> impl Strategy<Value = RuleCatalog> {
    let rule_parts = (
        priority_strategy(),
        bound_strategy(),
        bound_strategy(),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
    );
    proptest::collection::vec(rule_parts, 0..12).prop_map(|parts| {
        let rules = parts
            .into_iter()
            .enumerate()
            .map(
                |(index, (priority, area_m2, seats, serves_alcohol, uses_gas))| Rule {
                    id: format!("r{index}"),
                    title: format!("Requirement {index}"),
                    authority: "Authority".to_string(),
                    priority,
                    steps: Vec::new(),
                    legal_ref: None,
                    applies_when: AppliesWhen {
                        area_m2,
                        seats,
                        serves_alcohol,
                        uses_gas,
                        ..Default::default()
                    },
                },
            )
            .collect();
        RuleCatalog::from_rules(rules).expect("generated ids are unique")
    })
}

fn profile_strategy() -> impl Strategy<Value = BusinessProfile> {
    (
        any::<u8>(),
        0.0f64..300.0,
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(seats, area_m2, serves_alcohol, uses_gas)| BusinessProfile {
            seats: u32::from(seats),
            area_m2,
            serves_alcohol,
            uses_gas,
            ..Default::default()
        })
}

proptest! {
    #[test]
    fn matched_agrees_with_pointwise_evaluation(
        profile in profile_strategy(),
        catalog in catalog_strategy(),
    ) {
        let matched = match_requirements(&profile, &catalog);
        let expected = catalog
            .rules()
            .iter()
            .filter(|rule| rule.applies_to(&profile))
            .count();
        prop_assert_eq!(matched.len(), expected);
        for rule in &matched {
            prop_assert!(rule.applies_to(&profile));
        }
    }

    #[test]
    fn matched_is_sorted_by_priority_rank(
        profile in profile_strategy(),
        catalog in catalog_strategy(),
    ) {
        let matched = match_requirements(&profile, &catalog);
        for pair in matched.windows(2) {
            prop_assert!(pair[0].priority.rank() <= pair[1].priority.rank());
        }
    }

    #[test]
    fn priority_ties_preserve_catalog_order(
        profile in profile_strategy(),
        catalog in catalog_strategy(),
    ) {
        let matched = match_requirements(&profile, &catalog);
        let catalog_index = |id: &str| {
            catalog
                .rules()
                .iter()
                .position(|rule| rule.id == id)
                .expect("matched rule must come from the catalog")
        };
        for pair in matched.windows(2) {
            if pair[0].priority.rank() == pair[1].priority.rank() {
                prop_assert!(catalog_index(&pair[0].id) < catalog_index(&pair[1].id));
            }
        }
    }

    #[test]
    fn matching_is_deterministic(
        profile in profile_strategy(),
        catalog in catalog_strategy(),
    ) {
        prop_assert_eq!(
            match_requirements(&profile, &catalog),
            match_requirements(&profile, &catalog)
        );
    }

    #[test]
    fn unconditional_catalog_matches_in_full(
        profile in profile_strategy(),
        priorities in proptest::collection::vec(priority_strategy(), 0..8),
    ) {
        let rules = priorities
            .into_iter()
            .enumerate()
            .map(|(index, priority)| Rule {
                id: format!("u{index}"),
                title: format!("Unconditional {index}"),
                authority: "Authority".to_string(),
                priority,
                steps: Vec::new(),
                legal_ref: None,
                applies_when: AppliesWhen::default(),
            })
            .collect();
        let catalog = RuleCatalog::from_rules(rules).expect("generated ids are unique");
        let matched = match_requirements(&profile, &catalog);
        prop_assert_eq!(matched.len(), catalog.len());
    }
}
