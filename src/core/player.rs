//! Player identification, dice pools, and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier supporting 2-255 players. Seats are fixed at
//! game start and never reused, even after a player is eliminated.
//!
//! ## Player
//!
//! A named seat holding a pool of dice. The pool only shrinks; a player whose
//! pool reaches zero is marked eliminated between rounds.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::rng::DiceRoller;

/// Seat identifier. The first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats for a game with `player_count` players.
    ///
    /// ```
    /// use liars_dice::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Dice held by one player. Five dice is the common case, so up to eight
/// stay inline.
pub type DicePool = SmallVec<[u8; 8]>;

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Seat identifier.
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    dice: DicePool,

    eliminated: bool,
}

impl Player {
    /// Create a player holding `dice_count` dice, all showing the lowest face
    /// until the first roll.
    pub fn new(id: PlayerId, name: impl Into<String>, dice_count: usize) -> Self {
        Self {
            id,
            name: name.into(),
            dice: SmallVec::from_elem(1, dice_count),
            eliminated: false,
        }
    }

    /// Current face values, in roll order.
    #[must_use]
    pub fn dice(&self) -> &[u8] {
        &self.dice
    }

    /// Number of dice still held.
    #[must_use]
    pub fn dice_count(&self) -> usize {
        self.dice.len()
    }

    /// True once the player has been removed from turn order.
    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    /// True if the player has no dice left, eliminated or not.
    #[must_use]
    pub fn is_out(&self) -> bool {
        self.dice.is_empty()
    }

    /// Re-roll every die still held. The count never changes.
    pub fn roll<R: DiceRoller + ?Sized>(&mut self, faces: u8, roller: &mut R) {
        for die in self.dice.iter_mut() {
            *die = roller.roll(faces);
        }
    }

    /// Lose one die. Returns false if there was nothing to lose.
    pub fn remove_die(&mut self) -> bool {
        self.dice.pop().is_some()
    }

    pub(crate) fn eliminate(&mut self) {
        self.eliminated = true;
    }

    /// Overwrite the dice directly. Used by tests and scripted setups.
    pub fn set_dice(&mut self, dice: &[u8]) {
        self.dice = SmallVec::from_slice(dice);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>10}:", self.name)?;
        for die in &self.dice {
            write!(f, " [{}]", die)?;
        }
        Ok(())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use liars_dice::core::{PlayerId, PlayerMap};
///
/// let mut dice: PlayerMap<usize> = PlayerMap::new(4, |_| 5);
/// dice[PlayerId::new(1)] -= 1;
/// assert_eq!(dice[PlayerId::new(0)], 5);
/// assert_eq!(dice[PlayerId::new(1)], 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, mut factory: impl FnMut(PlayerId) -> T) -> Self {
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data, if the seat exists.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data, if the seat exists.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
