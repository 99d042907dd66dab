lazy_static::lazy_static! {
    /// Heckling shouted by the kobold announcer after an attack.
    pub static ref ATTACK_QUIPS: Vec<&'static str> = vec![
        "My cat hits harder than that!",
        "Ouch, that would have hurt... if I cared!",
        "You call that an attack?!",
        "Boom! Right in the middle! Or next to it...",
        "Should I be nervous now?",
        "Somebody bring me a beer!",
        "This match is slower than a snail race!",
        "Finally, some blood!",
        "My grandma hits harder, and she is not even alive!",
        "Biff, bam, pow, what is going on here?",
    ];

    /// Heckling shouted by the kobold announcer when a card enters the fight.
    pub static ref PLAY_QUIPS: Vec<&'static str> = vec![
        "This card again? Boring.",
        "Oh wow, the big gun is out... oh wait, no.",
        "Am I supposed to be scared now?",
        "Nice card. Shame you are bad at this.",
        "Look who came to the party!",
        "I would not have played that one...",
        "Finally some action!",
        "This card stinks like my feet.",
    ];
}

pub const BATTLE_OVER_QUIP: &str = "Well, fun is over. Who is paying?";
