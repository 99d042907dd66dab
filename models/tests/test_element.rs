use models::{Element, NEUTRAL_MODIFIER, STRONG_MODIFIER, WEAK_MODIFIER, type_modifier};
use rstest::rstest;

#[rstest]
fn test_modifier_is_always_a_known_value() {
    for attacker in Element::ALL {
        for defender in Element::ALL {
            let modifier = type_modifier(attacker, defender);
            assert!(
                [STRONG_MODIFIER, WEAK_MODIFIER, NEUTRAL_MODIFIER].contains(&modifier),
                "{attacker} vs {defender} gave {modifier}"
            );
        }
    }
}

#[rstest]
fn test_strong_and_weak_are_inverse() {
    for attacker in Element::ALL {
        let victim = attacker.strong_against();
        assert_eq!(victim.weak_against(), attacker);
        assert_eq!(type_modifier(attacker, victim), STRONG_MODIFIER);
        assert_eq!(type_modifier(victim, attacker), WEAK_MODIFIER);
    }
}

#[rstest]
fn test_self_pairs_are_neutral() {
    for element in Element::ALL {
        assert_eq!(type_modifier(element, element), NEUTRAL_MODIFIER);
    }
}

#[rstest]
#[case(Element::Air, Element::Earth, STRONG_MODIFIER)]
#[case(Element::Earth, Element::Fire, STRONG_MODIFIER)]
#[case(Element::Fire, Element::Water, STRONG_MODIFIER)]
#[case(Element::Water, Element::Air, STRONG_MODIFIER)]
#[case(Element::Fire, Element::Earth, WEAK_MODIFIER)]
#[case(Element::Air, Element::Fire, NEUTRAL_MODIFIER)]
#[case(Element::Earth, Element::Water, NEUTRAL_MODIFIER)]
fn test_type_chart(#[case] attacker: Element, #[case] defender: Element, #[case] expected: f64) {
    assert_eq!(type_modifier(attacker, defender), expected);
}

#[rstest]
#[case("fire", Element::Fire)]
#[case("  Water ", Element::Water)]
#[case("EARTH", Element::Earth)]
#[case("tűz", Element::Fire)]
#[case("víz", Element::Water)]
#[case("föld", Element::Earth)]
#[case("Levegő", Element::Air)]
fn test_element_aliases(#[case] label: &str, #[case] expected: Element) {
    assert_eq!(Element::try_from(label).unwrap(), expected);
}

#[rstest]
fn test_unknown_element_is_rejected() {
    assert!(Element::try_from("lightning").is_err());
}
