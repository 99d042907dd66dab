mod aux;

use aux::{arin, card, liora, nerun, selia, world_with};
use models::{DungeonTier, RewardType};
use rstest::rstest;
use simulator::{Battle, FixedRoll, RewardOutcome, apply_reward};

fn fight(state: &mut models::GameState) -> RewardOutcome {
    let dungeon = state.dungeons[0].clone();
    let result = Battle::from_world(state, &dungeon, false, FixedRoll(0.0)).run_to_completion();
    apply_reward(state, &result)
}

#[rstest]
fn test_simple_damage_reward() {
    let mut state = world_with(
        &[arin(), nerun()],
        &["Arin"],
        &["Arin"],
        DungeonTier::Simple,
        &["Nerun"],
        Some(RewardType::Damage),
    );
    assert_eq!(fight(&mut state), RewardOutcome::Damage("Arin".to_string()));
    let arin = state.collection_card("Arin").unwrap();
    assert_eq!(arin.base_damage, 3);
    assert_eq!((arin.current_hp(), arin.max_hp()), (5, 5));
    assert_eq!(state.card("Arin").unwrap().base_damage, 2, "templates stay untouched");
}

#[rstest]
fn test_small_vitality_reward() {
    let mut state = world_with(
        &[arin(), nerun()],
        &["Arin"],
        &["Arin"],
        DungeonTier::Small,
        &["Nerun"],
        Some(RewardType::Vitality),
    );
    assert_eq!(fight(&mut state), RewardOutcome::Vitality("Arin".to_string()));
    let arin = state.collection_card("Arin").unwrap();
    assert_eq!(arin.base_damage, 2);
    assert_eq!((arin.current_hp(), arin.max_hp()), (7, 7));
}

#[rstest]
fn test_reward_goes_to_the_card_that_finished_the_fight() {
    let mut state = world_with(
        &[liora(), arin(), nerun()],
        &["Liora", "Arin", "Nerun"],
        &["Liora", "Arin"],
        DungeonTier::Simple,
        &["Nerun"],
        Some(RewardType::Damage),
    );
    assert_eq!(fight(&mut state), RewardOutcome::Damage("Arin".to_string()));
    assert_eq!(state.collection_card("Liora").unwrap().base_damage, 2);
    assert_eq!(state.collection_card("Arin").unwrap().base_damage, 3);
}

#[rstest]
fn test_no_reward_type_changes_nothing() {
    let mut state = world_with(
        &[arin(), nerun()],
        &["Arin"],
        &["Arin"],
        DungeonTier::Simple,
        &["Nerun"],
        None,
    );
    let before = state.collection.clone();
    assert_eq!(fight(&mut state), RewardOutcome::Unrewarded("Arin".to_string()));
    assert_eq!(state.collection, before);
}

#[rstest]
fn test_large_dungeon_awards_first_unowned_card() {
    let mut state = world_with(
        &[arin(), nerun(), selia()],
        &["Arin"],
        &["Arin"],
        DungeonTier::Large,
        &["Nerun"],
        None,
    );
    assert_eq!(fight(&mut state), RewardOutcome::NewCard("Nerun".to_string()));
    let names: Vec<&str> = state.collection.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Arin", "Nerun"]);
}

#[rstest]
fn test_large_dungeon_with_nothing_left() {
    let mut state = world_with(
        &[arin(), nerun(), selia()],
        &["Arin", "Nerun", "Selia"],
        &["Arin"],
        DungeonTier::Large,
        &["Nerun"],
        None,
    );
    assert!(!state.can_enter(&state.dungeons[0].clone()));
    assert_eq!(fight(&mut state), RewardOutcome::NoNewCard);
    assert_eq!(state.collection.len(), 3);
}

#[rstest]
fn test_defeat_is_not_rewarded() {
    let mut state = world_with(
        &[arin(), card("Brute", 10, 20, "earth")],
        &["Arin"],
        &["Arin"],
        DungeonTier::Simple,
        &["Brute"],
        Some(RewardType::Damage),
    );
    let before = state.clone();
    assert_eq!(fight(&mut state), RewardOutcome::NotAwarded);
    assert_eq!(state, before);
}
