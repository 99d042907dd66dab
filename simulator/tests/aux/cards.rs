use models::Card;

#[allow(unused)]
pub fn card(name: &str, damage: i64, health: i64, element: &str) -> Card {
    Card::new(name, damage, health, element).expect("valid test card")
}

#[allow(unused)]
pub fn arin() -> Card {
    card("Arin", 2, 5, "earth")
}

#[allow(unused)]
pub fn liora() -> Card {
    card("Liora", 2, 4, "air")
}

#[allow(unused)]
pub fn nerun() -> Card {
    card("Nerun", 3, 3, "fire")
}

#[allow(unused)]
pub fn selia() -> Card {
    card("Selia", 2, 6, "water")
}
