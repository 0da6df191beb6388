//! Timeline descriptions, their construction, play heads and scroll triggers.

/// Stage-by-stage construction of timeline descriptions.
pub mod builder;
/// Resolved timeline descriptions and sampling.
pub mod model;
/// Play head state.
pub mod playback;
/// Start-time spreads.
pub mod stagger;
/// Trigger points, replay policies and scroll ranges.
pub mod trigger;
