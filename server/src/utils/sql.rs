//! SQL utility functions

/// Escape SQL LIKE metacharacters (%, _, \) in user input
///
/// Pair the resulting pattern with `ESCAPE '\'` in the query.
///
/// ```
/// use player_registry_server::utils::sql::escape_like_pattern;
///
/// let pattern = format!("%{}%", escape_like_pattern("50%_off"));
/// assert_eq!(pattern, "%50\\%\\_off%");
/// ```
pub fn escape_like_pattern(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Unicode lowercase used for case-insensitive text matching
///
/// Applied to both the stored `*_lower` columns and MATCH needles, so the
/// in-memory and SQL evaluators fold identically.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}
