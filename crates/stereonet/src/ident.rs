//! Point-identifier scheme shared by the cube and the stereogram.
//!
//! Naming
//! - Cube vertices are `"0"`..`"7"`, edge midpoints are the two incident
//!   vertex digits (`"47"`), face centers the four corner digits (`"2347"`).
//! - `"origin"` is reserved for the projection center / the basal or top
//!   face center, resolved by context.
//! - Composite identifiers join point ids with `'_'`. The canonical order
//!   puts `"origin"` first, then shorter ids before longer, ties broken by
//!   string value. Curve-catalog keys are canonicalized pairs.

/// Reserved identifier for the projection center.
pub const ORIGIN_ID: &str = "origin";

/// Separator between point ids in a composite identifier.
pub const ID_SEPARATOR: char = '_';

#[inline]
fn id_rank(id: &str) -> isize {
    if id == ORIGIN_ID {
        -1
    } else {
        id.len() as isize
    }
}

/// Canonical composite identifier for a set of point ids.
pub fn composite_id(ids: &[&str]) -> String {
    let mut sorted = ids.to_vec();
    sorted.sort_by_key(|id| (id_rank(id), *id));
    sorted.join("_")
}

/// Canonical curve-catalog key for an unordered pair of point ids.
#[inline]
pub fn pair_key(a: &str, b: &str) -> String {
    composite_id(&[a, b])
}

/// Split a composite identifier into its point ids.
pub fn split_composite(area_id: &str) -> Vec<&str> {
    area_id.split(ID_SEPARATOR).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_sorts_first() {
        assert_eq!(pair_key("47", ORIGIN_ID), "origin_47");
        assert_eq!(pair_key(ORIGIN_ID, "4"), "origin_4");
    }

    #[test]
    fn shorter_ids_precede_longer() {
        assert_eq!(pair_key("2347", "47"), "47_2347");
        assert_eq!(pair_key("4", "4567"), "4_4567");
        assert_eq!(pair_key("34", "3"), "3_34");
    }

    #[test]
    fn equal_length_ties_break_by_value() {
        assert_eq!(pair_key("7", "4"), "4_7");
        assert_eq!(pair_key("56", "05"), "05_56");
    }

    #[test]
    fn composite_of_three() {
        assert_eq!(composite_id(&["4567", "origin", "4"]), "origin_4_4567");
    }

    #[test]
    fn split_round_trips() {
        assert_eq!(split_composite("4_47_4567"), vec!["4", "47", "4567"]);
        assert_eq!(split_composite("origin"), vec!["origin"]);
    }
}
