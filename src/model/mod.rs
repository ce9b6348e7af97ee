/// Beatmap related types.
pub mod beatmap;

/// Timing and difficulty control points.
pub mod control_point;

/// Hit window calculation.
pub mod hit_windows;

/// Gamemode related types.
pub mod mode;

/// Mod related types.
pub mod mods;

/// Note related types.
pub mod note;
