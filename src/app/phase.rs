//! Session phase and key types for the application.
//!
//! # State Machine
//!
//! A session starts in exactly one phase and never leaves it:
//! - **Loaded**: the working set is available and every event is handled
//! - **Error**: loading failed; every event is a no-op until a reload
//!
//! # Example
//!
//! ```rust
//! use campusnav::app::{Key, Phase};
//!
//! let phase = Phase::Loaded;
//! assert!(phase.is_loaded());
//! assert!(Key::Space.activates());
//! ```

/// Lifecycle phase of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Working set loaded; search and activation are live.
    Loaded,

    /// Loading failed.
    ///
    /// `message` is the load failure cause. It is logged when the session
    /// enters this phase and never reaches the page, whose notice uses a
    /// fixed user-facing text.
    Error {
        /// Human-readable load failure cause.
        message: String,
    },
}

impl Phase {
    /// Returns `true` in the loaded phase.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded)
    }
}

/// Keys the handler distinguishes.
///
/// Surfaces map their native key events onto this enum; anything that is
/// neither Enter nor Space arrives as [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Other,
}

impl Key {
    /// Whether the key activates a focused card (Enter or Space).
    #[must_use]
    pub const fn activates(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }

    /// Whether the key submits the search input (Enter only).
    #[must_use]
    pub const fn submits(self) -> bool {
        matches!(self, Self::Enter)
    }
}
