use models::{Card, Dungeon, DungeonTier, GameState, RewardType};

pub struct CardDefinition {
    pub name: &'static str,
    pub damage: i64,
    pub health: i64,
    pub element: &'static str,
}

pub struct LeaderDefinition {
    pub name: &'static str,
    pub base: &'static str,
    pub keyword: &'static str,
}

pub struct DungeonDefinition {
    pub tier: DungeonTier,
    pub name: &'static str,
    pub cards: &'static [&'static str],
    pub leader: Option<&'static str>,
    pub reward: Option<RewardType>,
}

lazy_static::lazy_static! {
    pub static ref DEFAULT_CARDS: Vec<CardDefinition> = vec![
        CardDefinition { name: "Arin", damage: 2, health: 5, element: "earth" },
        CardDefinition { name: "Liora", damage: 2, health: 4, element: "air" },
        CardDefinition { name: "Nerun", damage: 3, health: 3, element: "fire" },
        CardDefinition { name: "Selia", damage: 2, health: 6, element: "water" },
        CardDefinition { name: "Torak", damage: 3, health: 4, element: "earth" },
        CardDefinition { name: "Emera", damage: 2, health: 5, element: "air" },
        CardDefinition { name: "Vorn", damage: 2, health: 7, element: "water" },
        CardDefinition { name: "Kael", damage: 3, health: 5, element: "fire" },
        CardDefinition { name: "Myra", damage: 2, health: 6, element: "earth" },
        CardDefinition { name: "Thalen", damage: 3, health: 5, element: "air" },
        CardDefinition { name: "Isara", damage: 2, health: 6, element: "water" },
    ];
    pub static ref DEFAULT_LEADERS: Vec<LeaderDefinition> = vec![
        LeaderDefinition { name: "Lord Torak", base: "Torak", keyword: "damage" },
        LeaderDefinition { name: "Priestess Selia", base: "Selia", keyword: "vitality" },
    ];
    pub static ref DEFAULT_DUNGEONS: Vec<DungeonDefinition> = vec![
        DungeonDefinition {
            tier: DungeonTier::Simple,
            name: "Cave Raid",
            cards: &["Nerun"],
            leader: None,
            reward: Some(RewardType::Damage),
        },
        DungeonDefinition {
            tier: DungeonTier::Small,
            name: "Ancient Shrine",
            cards: &["Arin", "Emera", "Selia"],
            leader: Some("Lord Torak"),
            reward: Some(RewardType::Vitality),
        },
        DungeonDefinition {
            tier: DungeonTier::Large,
            name: "Queen of the Depths",
            cards: &["Liora", "Arin", "Selia", "Nerun", "Torak"],
            leader: Some("Priestess Selia"),
            reward: None,
        },
    ];
    pub static ref DEFAULT_COLLECTION: Vec<&'static str> = vec![
        "Arin", "Liora", "Selia", "Nerun", "Torak", "Emera", "Kael", "Myra", "Thalen", "Isara",
    ];
}

/// The world a new game starts from.
pub fn default_world() -> anyhow::Result<GameState> {
    let mut state = GameState::default();
    for definition in DEFAULT_CARDS.iter() {
        state.add_card(Card::new(
            definition.name,
            definition.damage,
            definition.health,
            definition.element,
        )?);
    }
    for definition in DEFAULT_LEADERS.iter() {
        let base = state
            .card(definition.base)
            .ok_or(anyhow::anyhow!("leader {} has unknown base {}", definition.name, definition.base))?;
        let leader = base.leader_variant(definition.name, definition.keyword)?;
        state.add_card(leader);
    }
    for definition in DEFAULT_DUNGEONS.iter() {
        let mut dungeon = Dungeon::new(
            definition.tier,
            definition.name,
            definition.cards.iter().map(|c| c.to_string()).collect(),
        );
        if let Some(leader) = definition.leader {
            dungeon = dungeon.with_leader(leader);
        }
        if let Some(reward) = definition.reward {
            dungeon = dungeon.with_reward(reward);
        }
        state.add_dungeon(dungeon);
    }
    for name in DEFAULT_COLLECTION.iter() {
        state.add_to_collection(name)?;
    }
    Ok(state)
}
