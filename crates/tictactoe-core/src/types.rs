//! Common type aliases used throughout the engine.

/// Search depth in plies.
pub type Depth = u32;

/// Game-theoretic score from O's point of view (-10, 0 or +10).
pub type Score = i32;
