//! Room categories, room hint attributes, and per-action player outcomes.
//!
//! A room's *type* says what the room is (hazard, hallway, start point).
//! *Attributes* are markers layered on top of the type: hints that a hazard
//! is adjacent, and which players currently stand in the room. *Effects*
//! belong to players, not rooms: each one records an outcome of the
//! player's most recent action.

use serde::{Deserialize, Serialize};

/// The category of a room.
///
/// The discriminant order is load-bearing: hazard placement derives its
/// shuffle seed from it (see [`crate::core::rng::hazard_shuffle_seed`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    /// The goal room; walking in unarmed ends the walker's game.
    Wumpus,
    /// Where every player begins.
    Start,
    Empty,
    /// A degree-2 pass-through corridor. Never a hazard.
    Hallway,
    Superbat,
    Pit,
    /// A superbat and a pit sharing one cell.
    SuperbatAndPit,
}

impl RoomType {
    /// The hazard this one combines with when both land on the same cell.
    ///
    /// Superbat and Pit are counterparts of each other; every other type
    /// is its own counterpart.
    #[must_use]
    pub const fn counterpart(self) -> Self {
        match self {
            RoomType::Superbat => RoomType::Pit,
            RoomType::Pit => RoomType::Superbat,
            other => other,
        }
    }

    /// Discriminant value, used in seed derivation.
    #[must_use]
    pub const fn ordinal(self) -> u64 {
        self as u64
    }

    /// Whether entering this room can harm or displace a player.
    #[must_use]
    pub const fn is_hazard(self) -> bool {
        matches!(
            self,
            RoomType::Superbat | RoomType::Pit | RoomType::SuperbatAndPit
        )
    }
}

/// A persistent hint or marker attached to a room, independent of its type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomAttribute {
    /// The wumpus sits in an adjacent room (hallways skipped through).
    NextToWumpus,
    /// A pit sits in an adjacent room (hallways skipped through).
    NextToPit,
    /// The player with this 1-based number currently occupies the room.
    HasPlayer(u8),
}

impl RoomAttribute {
    /// Whether this attribute marks a player's presence.
    #[must_use]
    pub const fn is_player_marker(self) -> bool {
        matches!(self, RoomAttribute::HasPlayer(_))
    }
}

/// A transient outcome recorded on a player during one of their actions.
///
/// The log is replaced, never accumulated: each action clears the acting
/// player's previous effects before resolving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerEffect {
    FellIntoPit,
    GrabbedByBat,
    AvoidedBat,
    RanIntoWumpus,
    ShotWumpus,
    MissedWumpus,
    NoArrows,
}

impl PlayerEffect {
    /// Whether carrying this effect ends the game for its player.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            PlayerEffect::NoArrows
                | PlayerEffect::ShotWumpus
                | PlayerEffect::RanIntoWumpus
                | PlayerEffect::FellIntoPit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counterpart_pairs() {
        assert_eq!(RoomType::Superbat.counterpart(), RoomType::Pit);
        assert_eq!(RoomType::Pit.counterpart(), RoomType::Superbat);
        assert_eq!(RoomType::Hallway.counterpart(), RoomType::Hallway);
        assert_eq!(RoomType::Empty.counterpart(), RoomType::Empty);
    }

    #[test]
    fn test_ordinals_are_stable() {
        // Hazard seed derivation multiplies by these values; moving a
        // variant would silently re-deal every maze.
        assert_eq!(RoomType::Wumpus.ordinal(), 0);
        assert_eq!(RoomType::Start.ordinal(), 1);
        assert_eq!(RoomType::Empty.ordinal(), 2);
        assert_eq!(RoomType::Hallway.ordinal(), 3);
        assert_eq!(RoomType::Superbat.ordinal(), 4);
        assert_eq!(RoomType::Pit.ordinal(), 5);
        assert_eq!(RoomType::SuperbatAndPit.ordinal(), 6);
    }

    #[test]
    fn test_is_hazard() {
        assert!(RoomType::Superbat.is_hazard());
        assert!(RoomType::Pit.is_hazard());
        assert!(RoomType::SuperbatAndPit.is_hazard());
        assert!(!RoomType::Hallway.is_hazard());
        assert!(!RoomType::Start.is_hazard());
        assert!(!RoomType::Wumpus.is_hazard());
    }

    #[test]
    fn test_terminal_effects() {
        assert!(PlayerEffect::FellIntoPit.is_terminal());
        assert!(PlayerEffect::RanIntoWumpus.is_terminal());
        assert!(PlayerEffect::ShotWumpus.is_terminal());
        assert!(PlayerEffect::NoArrows.is_terminal());
        assert!(!PlayerEffect::MissedWumpus.is_terminal());
        assert!(!PlayerEffect::GrabbedByBat.is_terminal());
        assert!(!PlayerEffect::AvoidedBat.is_terminal());
    }

    #[test]
    fn test_player_marker() {
        assert!(RoomAttribute::HasPlayer(1).is_player_marker());
        assert!(!RoomAttribute::NextToPit.is_player_marker());
    }

    #[test]
    fn test_room_type_serde() {
        let json = serde_json::to_string(&RoomType::SuperbatAndPit).unwrap();
        let back: RoomType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RoomType::SuperbatAndPit);
    }
}
