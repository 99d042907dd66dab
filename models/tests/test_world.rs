use models::{Card, Dungeon, DungeonTier, GameState, RewardType};
use rstest::{fixture, rstest};

#[fixture]
fn world() -> GameState {
    let mut state = GameState::default();
    for (name, damage, hp, element) in [
        ("Arin", 2, 5, "earth"),
        ("Liora", 2, 4, "air"),
        ("Nerun", 3, 3, "fire"),
        ("Selia", 2, 6, "water"),
    ] {
        state.add_card(Card::new(name, damage, hp, element).unwrap());
    }
    let leader = state.card("Arin").unwrap().leader_variant("Lord Arin", "damage").unwrap();
    state.add_card(leader);
    state.add_dungeon(
        Dungeon::new(DungeonTier::Small, "Shrine", vec!["Nerun".into(), "Ghost".into()])
            .with_leader("Lord Arin")
            .with_reward(RewardType::Vitality),
    );
    state
}

#[rstest]
fn test_deck_limit_rounds_up(mut world: GameState) {
    assert_eq!(world.deck_limit(), 0);
    for name in ["Arin", "Liora", "Nerun"] {
        world.add_to_collection(name).unwrap();
    }
    assert_eq!(world.deck_limit(), 2);
}

#[rstest]
fn test_full_deck_rejects_without_mutation(mut world: GameState) {
    for name in ["Arin", "Liora", "Nerun"] {
        world.add_to_collection(name).unwrap();
    }
    world.add_to_deck("Arin").unwrap();
    world.add_to_deck("Nerun").unwrap();
    let before = world.deck.clone();
    assert!(world.add_to_deck("Liora").is_err());
    assert_eq!(world.deck, before);
}

#[rstest]
fn test_deck_only_takes_owned_cards(mut world: GameState) {
    world.add_to_collection("Arin").unwrap();
    assert!(world.add_to_deck("Selia").is_err());
    assert!(world.deck.is_empty());
}

#[rstest]
fn test_unknown_card_is_not_collected(mut world: GameState) {
    assert!(world.add_to_collection("Ghost").is_err());
    assert!(world.collection.is_empty());
}

#[rstest]
fn test_collection_holds_copies(mut world: GameState) {
    world.add_to_collection("Arin").unwrap();
    world.collection_card_mut("Arin").unwrap().increase_damage(1);
    assert_eq!(world.collection_card("Arin").unwrap().base_damage, 3);
    assert_eq!(world.card("Arin").unwrap().base_damage, 2);
}

#[rstest]
fn test_enemy_roster_skips_missing_and_ends_with_leader(world: GameState) {
    let dungeon = world.dungeon("Shrine").unwrap();
    let roster: Vec<String> = world
        .enemy_roster(dungeon)
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(roster, vec!["Nerun".to_string(), "Lord Arin".to_string()]);
}

#[rstest]
fn test_new_base_element_card_follows_template_order(mut world: GameState) {
    assert_eq!(world.new_base_element_card().unwrap().name, "Arin");
    world.add_to_collection("Arin").unwrap();
    assert_eq!(world.new_base_element_card().unwrap().name, "Liora");
    for name in ["Liora", "Nerun", "Selia", "Lord Arin"] {
        world.add_to_collection(name).unwrap();
    }
    assert!(world.new_base_element_card().is_none());
}

#[rstest]
fn test_large_dungeon_closes_when_nothing_is_left(mut world: GameState) {
    let large = Dungeon::new(DungeonTier::Large, "Depths", vec!["Selia".into()]);
    let simple = Dungeon::new(DungeonTier::Simple, "Cave", vec!["Nerun".into()]);
    assert!(!world.can_enter(&simple), "empty deck never enters");

    for name in ["Arin", "Liora", "Nerun", "Selia", "Lord Arin"] {
        world.add_to_collection(name).unwrap();
    }
    world.add_to_deck("Arin").unwrap();
    assert!(world.can_enter(&simple));
    assert!(!world.can_enter(&large));
}

#[rstest]
fn test_difficulty_is_clamped(mut world: GameState) {
    world.set_difficulty(42);
    assert_eq!(world.difficulty, 10);
}

#[rstest]
#[case("nagy", Some("sebzés"), "nagy", Some("sebzés"))]
#[case("large", Some("damage"), "large", Some("damage"))]
#[case(" small ", None, "small", None)]
fn test_dungeon_keeps_written_labels(
    #[case] tier: &str,
    #[case] reward: Option<&str>,
    #[case] tier_text: &str,
    #[case] reward_text: Option<&str>,
) {
    let mut dungeon = Dungeon::new(DungeonTier::try_from(tier).unwrap(), "Depths", vec![])
        .with_tier_label(tier);
    if let Some(reward) = reward {
        dungeon = dungeon
            .with_reward(RewardType::try_from(reward).unwrap())
            .with_reward_label(reward);
    }
    assert_eq!(dungeon.tier_text(), tier_text);
    assert_eq!(dungeon.reward_text(), reward_text);
    if tier_text == DungeonTier::try_from(tier).unwrap().as_str() {
        assert_eq!(dungeon.tier_label, None);
    }
}
