use std::collections::HashMap;

use models::{normalize_text, split_name_list, DungeonTier};

lazy_static::lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, Keyword> = HashMap::from([
        ("new card", Keyword::NewCard),
        ("uj kartya", Keyword::NewCard),
        ("new leader", Keyword::NewLeader),
        ("uj vezer", Keyword::NewLeader),
        ("new dungeon", Keyword::NewDungeon),
        ("uj kazamata", Keyword::NewDungeon),
        ("new player", Keyword::NewPlayer),
        ("uj jatekos", Keyword::NewPlayer),
        ("add to collection", Keyword::AddToCollection),
        ("felvetel gyujtemenybe", Keyword::AddToCollection),
        ("new deck", Keyword::NewDeck),
        ("uj pakli", Keyword::NewDeck),
        ("battle", Keyword::Battle),
        ("harc", Keyword::Battle),
        ("export world", Keyword::ExportWorld),
        ("export vilag", Keyword::ExportWorld),
        ("export player", Keyword::ExportPlayer),
        ("export jatekos", Keyword::ExportPlayer),
    ]);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Keyword {
    NewCard,
    NewLeader,
    NewDungeon,
    NewPlayer,
    AddToCollection,
    NewDeck,
    Battle,
    ExportWorld,
    ExportPlayer,
}

impl Keyword {
    /// Number of `;` separated fields the command needs, keyword included.
    pub fn min_fields(&self) -> usize {
        match self {
            Keyword::NewCard => 5,
            Keyword::NewLeader => 4,
            Keyword::NewDungeon => 4,
            Keyword::NewPlayer => 1,
            Keyword::AddToCollection => 2,
            Keyword::NewDeck => 2,
            Keyword::Battle => 3,
            Keyword::ExportWorld => 2,
            Keyword::ExportPlayer => 2,
        }
    }
}

impl TryFrom<&str> for Keyword {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        KEYWORDS
            .get(normalize_text(value).as_str())
            .copied()
            .ok_or(anyhow::anyhow!("unknown command {value:?}"))
    }
}

/// One line of a batch file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    NewCard {
        name: String,
        damage: i64,
        health: i64,
        element: String,
    },
    NewLeader {
        name: String,
        base: String,
        keyword: String,
    },
    NewDungeon {
        tier: DungeonTier,
        /// The tier as written in the batch file.
        tier_label: String,
        name: String,
        cards: Vec<String>,
        leader: Option<String>,
        reward: Option<String>,
    },
    NewPlayer,
    AddToCollection {
        name: String,
    },
    NewDeck {
        cards: Vec<String>,
    },
    Battle {
        dungeon: String,
        output: String,
    },
    ExportWorld {
        output: String,
    },
    ExportPlayer {
        output: String,
    },
}

impl Command {
    /// Parses a line. Blank lines and `//` comments yield `Ok(None)`.
    pub fn parse(line: &str) -> anyhow::Result<Option<Command>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            return Ok(None);
        }
        Command::try_from(line).map(Some)
    }
}

fn parse_number(field: &str, what: &str) -> anyhow::Result<i64> {
    field
        .parse::<i64>()
        .map_err(|error| anyhow::anyhow!("invalid {what} {field:?}: {error}"))
}

fn optional_field(fields: &[&str], index: usize) -> Option<String> {
    fields
        .get(index)
        .filter(|f| !f.is_empty())
        .map(|f| f.to_string())
}

impl TryFrom<&str> for Command {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let fields: Vec<&str> = value.split(';').map(str::trim).collect();
        let keyword = Keyword::try_from(fields[0])?;
        if fields.len() < keyword.min_fields() {
            anyhow::bail!(
                "{:?} needs {} field(s), got {}",
                fields[0],
                keyword.min_fields(),
                fields.len()
            );
        }

        let command = match keyword {
            Keyword::NewCard => Command::NewCard {
                name: fields[1].to_string(),
                damage: parse_number(fields[2], "damage")?,
                health: parse_number(fields[3], "health")?,
                element: fields[4].to_string(),
            },
            Keyword::NewLeader => Command::NewLeader {
                name: fields[1].to_string(),
                base: fields[2].to_string(),
                keyword: fields[3].to_string(),
            },
            Keyword::NewDungeon => {
                let tier = DungeonTier::try_from(fields[1])?;
                let (leader, reward) = match tier {
                    DungeonTier::Simple => (None, optional_field(&fields, 4)),
                    DungeonTier::Small => (optional_field(&fields, 4), optional_field(&fields, 5)),
                    DungeonTier::Large => (optional_field(&fields, 4), None),
                };
                Command::NewDungeon {
                    tier,
                    tier_label: fields[1].to_string(),
                    name: fields[2].to_string(),
                    cards: split_name_list(fields[3]),
                    leader,
                    reward,
                }
            }
            Keyword::NewPlayer => Command::NewPlayer,
            Keyword::AddToCollection => Command::AddToCollection {
                name: fields[1].to_string(),
            },
            Keyword::NewDeck => Command::NewDeck {
                cards: split_name_list(fields[1]),
            },
            Keyword::Battle => Command::Battle {
                dungeon: fields[1].to_string(),
                output: fields[2].to_string(),
            },
            Keyword::ExportWorld => Command::ExportWorld {
                output: fields[1].to_string(),
            },
            Keyword::ExportPlayer => Command::ExportPlayer {
                output: fields[1].to_string(),
            },
        };
        Ok(command)
    }
}
