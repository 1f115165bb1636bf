#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// Mark written into the gameplay grid (1 = Red, 2 = Yellow)
    pub fn id(self) -> u8 {
        match self {
            Player::Red => 1,
            Player::Yellow => 2,
        }
    }

    /// Inverse of [`Player::id`]; 0 and unknown marks map to `None`
    pub fn from_id(id: u8) -> Option<Player> {
        match id {
            1 => Some(Player::Red),
            2 => Some(Player::Yellow),
            _ => None,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Yellow => "Yellow",
        }
    }
}
