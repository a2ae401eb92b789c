//! Level progression derived from experience
//!
//! ```text
//! level          = floor((sqrt(2500 + 200 * exp) - 50) / 100)
//! untilNextLevel = 50 * (level + 1) * (level + 2) - exp
//! ```
//!
//! Level `L` spans experience `50 * L * (L + 1) ..= 50 * (L + 1) * (L + 2) - 1`.

/// Derived level fields for a given experience
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: i64,
    pub until_next_level: i64,
}

impl LevelProgress {
    pub fn from_experience(experience: i64) -> Self {
        let level = level_for(experience);
        Self {
            level,
            until_next_level: until_next_level(level, experience),
        }
    }
}

/// Level reached with the given experience (0 for non-positive experience)
pub fn level_for(experience: i64) -> i64 {
    if experience <= 0 {
        return 0;
    }
    let root = (2500.0 + 200.0 * experience as f64).sqrt();
    ((root - 50.0) / 100.0) as i64
}

/// Experience still needed to reach `level + 1`
pub fn until_next_level(level: i64, experience: i64) -> i64 {
    50 * (level + 1) * (level + 2) - experience
}
