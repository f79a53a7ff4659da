//! Seat positions and partnership assignment.

/// A seat at the table, in play order.
///
/// Play rotates `North -> East -> South -> West -> North`. Partners sit
/// opposite each other: North/South against East/West.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    /// First seat.
    North,
    /// Second seat.
    East,
    /// Third seat.
    South,
    /// Fourth seat.
    West,
}

impl Seat {
    /// All four seats in play order.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Returns the seat's index in play order (0..=3).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the seat at the given index, modulo 4.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// Returns the next seat in play order.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Returns the seat sitting opposite.
    #[must_use]
    pub const fn partner(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// Returns the team this seat belongs to.
    ///
    /// Teams alternate around the table: even indices are North/South, odd
    /// indices are East/West.
    #[must_use]
    pub const fn team(self) -> TeamId {
        if self.index() % 2 == 0 {
            TeamId::NorthSouth
        } else {
            TeamId::EastWest
        }
    }
}

/// Identifies one of the two partnerships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamId {
    /// The North/South partnership.
    NorthSouth,
    /// The East/West partnership.
    EastWest,
}

impl TeamId {
    /// Both partnerships.
    pub const ALL: [Self; 2] = [Self::NorthSouth, Self::EastWest];

    /// Returns the team's index (0 or 1).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the two seats on this team.
    #[must_use]
    pub const fn seats(self) -> [Seat; 2] {
        match self {
            Self::NorthSouth => [Seat::North, Seat::South],
            Self::EastWest => [Seat::East, Seat::West],
        }
    }

    /// Returns the opposing team.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::NorthSouth => Self::EastWest,
            Self::EastWest => Self::NorthSouth,
        }
    }
}
