/// Every slot of the 16-team bracket with preliminaries, in write order.
pub const POSITION_CODES: [&str; 21] = [
    "p1", "p2", "p3", "p4", "p5", "p6", "o1", "o2", "o3", "o4", "o5", "o6", "o7", "o8", "q1", "q2",
    "q3", "q4", "s1", "s2", "final",
];

pub const FINAL_CODE: &str = "final";

/// Bracket format reported to the frontend.
pub const BRACKET_FORMAT: &str = "16";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Round {
    Preliminary,
    RoundOf16,
    Quarterfinal,
    Semifinal,
    Final,
}

impl Round {
    pub fn from_code(code: &str) -> Option<Self> {
        if code == FINAL_CODE {
            return Some(Round::Final);
        }
        match code.chars().next()? {
            'p' => Some(Round::Preliminary),
            'o' => Some(Round::RoundOf16),
            'q' => Some(Round::Quarterfinal),
            's' => Some(Round::Semifinal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Round::Preliminary => "Preliminary",
            Round::RoundOf16 => "Round of 16",
            Round::Quarterfinal => "Quarterfinal",
            Round::Semifinal => "Semifinal",
            Round::Final => "Final",
        }
    }
}

/// Prefix used by the frontend keys for a slot. The final is `f` on the HTML side.
pub fn key_prefix(code: &str) -> &str {
    if code == FINAL_CODE {
        "f"
    } else {
        code
    }
}
