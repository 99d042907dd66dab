use gamedata::{DEFAULT_CARDS, DEFAULT_COLLECTION, DEFAULT_LEADERS, default_world};
use models::DungeonTier;
use rstest::rstest;

#[rstest]
fn test_default_world_builds() {
    let world = default_world().unwrap();
    assert_eq!(world.cards.len(), DEFAULT_CARDS.len() + DEFAULT_LEADERS.len());
    assert_eq!(world.collection.len(), DEFAULT_COLLECTION.len());
    assert!(world.deck.is_empty());
    assert_eq!(world.difficulty, 0);
}

#[rstest]
fn test_default_leaders_are_doubled() {
    let world = default_world().unwrap();
    let lord = world.card("Lord Torak").unwrap();
    assert_eq!((lord.base_damage, lord.max_hp()), (6, 4));
    let priestess = world.card("Priestess Selia").unwrap();
    assert_eq!((priestess.base_damage, priestess.max_hp()), (2, 12));
}

#[rstest]
fn test_default_dungeons_reference_world_cards() {
    let world = default_world().unwrap();
    for dungeon in &world.dungeons {
        for name in dungeon.roster_names() {
            assert!(world.card(name).is_some(), "{} references {name}", dungeon.name);
        }
    }
    let large = world.dungeons.iter().find(|d| d.tier == DungeonTier::Large).unwrap();
    assert_eq!(world.new_base_element_card().unwrap().name, "Vorn");
    assert_eq!(large.reward, None);
}
