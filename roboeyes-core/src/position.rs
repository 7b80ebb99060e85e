//! Predefined gaze positions
//!
//! Each position maps onto an extreme or midpoint of the left eye's travel
//! rectangle `[0, constraint_x] x [0, constraint_y]`.

/// Where the eyes look
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Position {
    /// Middle of the screen
    #[default]
    Center,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Position {
    /// All positions, compass points clockwise after the center
    pub const ALL: [Position; 9] = [
        Position::Center,
        Position::North,
        Position::NorthEast,
        Position::East,
        Position::SouthEast,
        Position::South,
        Position::SouthWest,
        Position::West,
        Position::NorthWest,
    ];

    /// Decode a wire code (1 = N, clockwise to 8 = NW)
    ///
    /// Anything else means [`Position::Center`].
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Position::North,
            2 => Position::NorthEast,
            3 => Position::East,
            4 => Position::SouthEast,
            5 => Position::South,
            6 => Position::SouthWest,
            7 => Position::West,
            8 => Position::NorthWest,
            _ => Position::Center,
        }
    }

    /// Wire code, 0 for center
    pub fn code(self) -> u8 {
        match self {
            Position::Center => 0,
            Position::North => 1,
            Position::NorthEast => 2,
            Position::East => 3,
            Position::SouthEast => 4,
            Position::South => 5,
            Position::SouthWest => 6,
            Position::West => 7,
            Position::NorthWest => 8,
        }
    }

    /// Left eye target for the given travel limits
    pub fn resolve(self, max_x: i32, max_y: i32) -> (i32, i32) {
        let mid_x = max_x / 2;
        let mid_y = max_y / 2;
        match self {
            Position::Center => (mid_x, mid_y),
            Position::North => (mid_x, 0),
            Position::NorthEast => (max_x, 0),
            Position::East => (max_x, mid_y),
            Position::SouthEast => (max_x, max_y),
            Position::South => (mid_x, max_y),
            Position::SouthWest => (0, max_y),
            Position::West => (0, mid_y),
            Position::NorthWest => (0, 0),
        }
    }
}
