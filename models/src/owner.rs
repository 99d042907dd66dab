#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Owner {
    Dungeon,
    Player,
}

impl Owner {
    pub fn inverse(&self) -> Owner {
        match self {
            Owner::Dungeon => Owner::Player,
            Owner::Player => Owner::Dungeon,
        }
    }

    /// Tag used in battle logs.
    pub fn tag(&self) -> &'static str {
        match self {
            Owner::Dungeon => "dungeon",
            Owner::Player => "player",
        }
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
