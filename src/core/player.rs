//! The player actor: position, arrows, and the per-action outcome log.

use smallvec::SmallVec;

use super::position::Position;
use super::room::PlayerEffect;

/// A competitor walking the maze.
///
/// Players are plain records: every legality check lives in the maze
/// itself. The effect log holds the outcomes of this player's most recent
/// action only; it is cleared when the next action starts.
#[derive(Clone, Debug)]
pub struct Player {
    position: Position,
    arrows: u32,
    number: u8,
    effects: SmallVec<[PlayerEffect; 4]>,
}

impl Player {
    pub(crate) fn new(position: Position, arrows: u32, number: u8) -> Self {
        Self {
            position,
            arrows,
            number,
            effects: SmallVec::new(),
        }
    }

    /// Where the player currently stands.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Arrows left in the quiver.
    #[must_use]
    pub fn arrows(&self) -> u32 {
        self.arrows
    }

    /// Spend one arrow.
    pub(crate) fn take_arrow(&mut self) {
        assert!(self.arrows > 0, "player {} has no arrows left", self.number);
        self.arrows -= 1;
    }

    /// This player's 1-based number.
    #[must_use]
    pub fn number(&self) -> u8 {
        self.number
    }

    /// Outcomes of the most recent action, in the order they occurred.
    #[must_use]
    pub fn effects(&self) -> &[PlayerEffect] {
        &self.effects
    }

    pub(crate) fn add_effect(&mut self, effect: PlayerEffect) {
        self.effects.push(effect);
    }

    pub(crate) fn clear_effects(&mut self) {
        self.effects.clear();
    }

    /// Whether one of the recent effects ended this player's game.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.effects.iter().any(|e| e.is_terminal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player() {
        let player = Player::new(Position::new(0, 0), 3, 1);
        assert_eq!(player.position(), Position::new(0, 0));
        assert_eq!(player.arrows(), 3);
        assert_eq!(player.number(), 1);
        assert!(player.effects().is_empty());
        assert!(!player.is_terminal());
    }

    #[test]
    fn test_arrows_decrement() {
        let mut player = Player::new(Position::new(0, 0), 2, 1);
        player.take_arrow();
        assert_eq!(player.arrows(), 1);
        player.take_arrow();
        assert_eq!(player.arrows(), 0);
    }

    #[test]
    #[should_panic(expected = "no arrows left")]
    fn test_take_arrow_from_empty_quiver() {
        let mut player = Player::new(Position::new(0, 0), 0, 1);
        player.take_arrow();
    }

    #[test]
    fn test_effects_replaced_per_action() {
        let mut player = Player::new(Position::new(0, 0), 2, 1);
        player.add_effect(PlayerEffect::MissedWumpus);
        player.add_effect(PlayerEffect::NoArrows);
        assert_eq!(
            player.effects(),
            &[PlayerEffect::MissedWumpus, PlayerEffect::NoArrows]
        );
        assert!(player.is_terminal());

        player.clear_effects();
        assert!(player.effects().is_empty());
        assert!(!player.is_terminal());
    }

    #[test]
    fn test_terminal_detection() {
        let mut player = Player::new(Position::new(1, 1), 2, 2);
        player.add_effect(PlayerEffect::AvoidedBat);
        assert!(!player.is_terminal());
        player.add_effect(PlayerEffect::FellIntoPit);
        assert!(player.is_terminal());
    }
}
