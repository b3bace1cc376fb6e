//! Game configuration options.

/// Environment variable holding a fixed shuffle seed.
pub const SEED_ENV: &str = "BLACKJACK_SEED";

/// Environment variable controlling screen clearing (`0`/`false` disables).
pub const CLEAR_ENV: &str = "BLACKJACK_CLEAR";

/// Configuration options for a blackjack session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjcli::GameOptions;
///
/// let options = GameOptions::default()
///     .with_seed(Some(42))
///     .with_clear_screen(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Seed for every deck shuffle. `None` lets the caller pick one per round.
    pub seed: Option<u64>,
    /// Whether the terminal is cleared at the start of each round.
    pub clear_screen: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            seed: None,
            clear_screen: true,
        }
    }
}

impl GameOptions {
    /// Sets the shuffle seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcli::GameOptions;
    ///
    /// let options = GameOptions::default().with_seed(Some(7));
    /// assert_eq!(options.seed, Some(7));
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets whether the screen is cleared between rounds.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcli::GameOptions;
    ///
    /// let options = GameOptions::default().with_clear_screen(false);
    /// assert_eq!(options.clear_screen, false);
    /// ```
    #[must_use]
    pub const fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// Applies overrides from a variable lookup, ignoring values that do not
    /// parse.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcli::GameOptions;
    ///
    /// let options = GameOptions::default().with_overrides(|key| match key {
    ///     "BLACKJACK_SEED" => Some("99".into()),
    ///     "BLACKJACK_CLEAR" => Some("false".into()),
    ///     _ => None,
    /// });
    /// assert_eq!(options.seed, Some(99));
    /// assert!(!options.clear_screen);
    /// ```
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<alloc::string::String>,
    {
        if let Some(seed) = lookup(SEED_ENV).and_then(|value| value.trim().parse().ok()) {
            self.seed = Some(seed);
        }

        if let Some(clear) = lookup(CLEAR_ENV) {
            match clear.trim().to_ascii_lowercase().as_str() {
                "0" | "false" | "no" | "off" => self.clear_screen = false,
                "1" | "true" | "yes" | "on" => self.clear_screen = true,
                other => log::warn!("ignoring {CLEAR_ENV}={other:?}"),
            }
        }

        self
    }

    /// Seed for the `round`-th round of a session (counting from 0).
    ///
    /// A fixed seed is offset per round so rounds differ but replay exactly;
    /// without one the system clock is used.
    ///
    /// # Example
    ///
    /// ```
    /// use bjcli::GameOptions;
    ///
    /// let options = GameOptions::default().with_seed(Some(10));
    /// assert_eq!(options.round_seed(0), 10);
    /// assert_eq!(options.round_seed(3), 13);
    /// ```
    #[cfg(feature = "std")]
    #[must_use]
    pub fn round_seed(&self, round: u64) -> u64 {
        self.seed.map_or_else(
            || {
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .unwrap_or_default()
                    .as_nanos() as u64
            },
            |seed| seed.wrapping_add(round),
        )
    }

    /// Reads [`SEED_ENV`] and [`CLEAR_ENV`] from the process environment.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }
}
