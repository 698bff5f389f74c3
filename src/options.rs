//! Game configuration options.

use crate::game::Side;

/// Configuration options for a War simulation.
///
/// The rules themselves are fixed; options only cover naming and how long a
/// host is willing to let a simulation run.
///
/// ```
/// use warsim::GameOptions;
///
/// let options = GameOptions::default()
///     .with_player_name("alice")
///     .with_max_rounds(10_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Display name of the player side.
    pub player_name: &'static str,
    /// Display name of the computer side.
    pub computer_name: &'static str,
    /// Maximum number of rounds [`Game::simulate_game`](crate::Game::simulate_game)
    /// plays before giving up. `None` for no limit.
    pub max_rounds: Option<u32>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            player_name: "player",
            computer_name: "computer",
            max_rounds: None,
        }
    }
}

impl GameOptions {
    /// Sets the player's display name.
    ///
    /// # Example
    ///
    /// ```
    /// use warsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_player_name("alice");
    /// assert_eq!(options.player_name, "alice");
    /// ```
    #[must_use]
    pub const fn with_player_name(mut self, name: &'static str) -> Self {
        self.player_name = name;
        self
    }

    /// Sets the computer's display name.
    ///
    /// # Example
    ///
    /// ```
    /// use warsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_computer_name("hal");
    /// assert_eq!(options.computer_name, "hal");
    /// ```
    #[must_use]
    pub const fn with_computer_name(mut self, name: &'static str) -> Self {
        self.computer_name = name;
        self
    }

    /// Sets the round limit for a simulation.
    ///
    /// # Example
    ///
    /// ```
    /// use warsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_rounds(500);
    /// assert_eq!(options.max_rounds, Some(500));
    /// ```
    #[must_use]
    pub const fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = Some(rounds);
        self
    }

    /// Removes the round limit.
    #[must_use]
    pub const fn without_max_rounds(mut self) -> Self {
        self.max_rounds = None;
        self
    }

    /// Returns the display name of a side.
    #[must_use]
    pub const fn name(&self, side: Side) -> &'static str {
        match side {
            Side::Player => self.player_name,
            Side::Computer => self.computer_name,
        }
    }
}
