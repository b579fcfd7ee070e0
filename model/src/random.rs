mod walked;

/// Generate a board by random-walking legal moves away from solved, so it's
/// always possible to slide it back.
pub use walked::walked_random;
