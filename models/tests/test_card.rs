use models::{Card, Element};
use rstest::rstest;

#[rstest]
fn test_card_keeps_label_and_normalizes_element() {
    let card = Card::new("Kael", 3, 5, "Tűz").unwrap();
    assert_eq!(card.element, Element::Fire);
    assert_eq!(card.element_label, "Tűz");
    assert_eq!(card.current_hp(), 5);
    assert!(!card.leader);
}

#[rstest]
fn test_card_with_unknown_type_fails() {
    assert!(Card::new("Ghost", 1, 1, "shadow").is_err());
}

#[rstest]
fn test_heal_is_capped_at_max() {
    let mut card = Card::new("Arin", 2, 5, "earth").unwrap();
    card.take_damage(2);
    card.heal(1);
    assert_eq!(card.current_hp(), 4);
    card.heal(10);
    assert_eq!(card.current_hp(), 5);
}

#[rstest]
fn test_damage_may_go_below_zero() {
    let mut card = Card::new("Arin", 2, 5, "earth").unwrap();
    card.take_damage(8);
    assert_eq!(card.current_hp(), -3);
    assert_eq!(card.health.displayed(), 0);
    assert!(card.is_defeated());
}

#[rstest]
#[case("damage", 6, 4)]
#[case("sebzes", 6, 4)]
#[case("extra vitality", 3, 8)]
#[case("nothing", 3, 4)]
fn test_leader_variant(#[case] keyword: &str, #[case] damage: i64, #[case] hp: i64) {
    let base = Card::new("Torak", 3, 4, "earth").unwrap();
    let leader = base.leader_variant("Lord Torak", keyword).unwrap();
    assert_eq!(leader.name, "Lord Torak");
    assert_eq!(leader.base_damage, damage);
    assert_eq!(leader.max_hp(), hp);
    assert_eq!(leader.current_hp(), hp);
    assert!(leader.leader);
    assert_eq!(leader.element_label, "earth");
}

#[rstest]
fn test_vitality_increase_heals_to_full() {
    let mut card = Card::new("Selia", 2, 6, "water").unwrap();
    card.take_damage(4);
    card.increase_vitality(2);
    assert_eq!(card.max_hp(), 8);
    assert_eq!(card.current_hp(), 8);
}

#[rstest]
#[case("damage", i64::MAX, 5)]
#[case("vitality", 1, i64::MAX)]
fn test_leader_variant_overflow_is_an_error(#[case] keyword: &str, #[case] damage: i64, #[case] hp: i64) {
    let base = Card::new("Big", damage, hp, "fire").unwrap();
    assert!(base.leader_variant("Boss", keyword).is_err());
}

#[rstest]
fn test_stat_changes_saturate() {
    let mut card = Card::new("Big", i64::MAX, i64::MAX, "fire").unwrap();
    card.increase_damage(1);
    card.increase_vitality(2);
    assert_eq!(card.base_damage, i64::MAX);
    assert_eq!((card.current_hp(), card.max_hp()), (i64::MAX, i64::MAX));

    for _ in 0..3 {
        card.take_damage(i64::MAX);
    }
    assert_eq!(card.current_hp(), i64::MIN);
    assert!(card.is_defeated());
    card.heal(i64::MAX);
    assert_eq!(card.current_hp(), -1);
}
