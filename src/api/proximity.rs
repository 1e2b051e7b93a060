use super::coords::{looks_like_coordinates, parse_coordinates, Coordinates};
use super::models::Location;

/// Per-axis threshold in degrees, roughly one kilometre at the equator.
/// Applied to both axes as-is; the box is deliberately not corrected for
/// longitude compression away from the equator, because existing search
/// results depend on the current box shape.
pub(super) const PROXIMITY_EPSILON: f64 = 0.01;

/// Keep the points inside the epsilon box around the query, in the
/// catalog's pre-existing order. Not a geodesic radius test.
pub(super) fn filter_by_proximity(query: Coordinates, points: Vec<Location>) -> Vec<Location> {
    points
        .into_iter()
        .filter(|point| {
            (point.latitude - query.latitude).abs() < PROXIMITY_EPSILON
                && (point.longitude - query.longitude).abs() < PROXIMITY_EPSILON
        })
        .collect()
}

fn filter_by_name(query: &str, points: Vec<Location>) -> Vec<Location> {
    let needle = query.to_lowercase();
    points
        .into_iter()
        .filter(|point| point.name.to_lowercase().contains(&needle))
        .collect()
}

/// The sidebar filter pipeline: state filter first, then either proximity
/// matching (when the query parses as a coordinate) or name substring
/// matching, never both. A coordinate-looking query that fails to parse
/// falls back to the name search.
pub(super) fn filter_catalog(
    locations: Vec<Location>,
    state: Option<&str>,
    search: Option<&str>,
) -> Vec<Location> {
    let mut filtered = locations;

    if let Some(state) = state.filter(|s| !s.is_empty()) {
        filtered.retain(|location| location.state == state);
    }

    let Some(query) = search.map(str::trim).filter(|q| !q.is_empty()) else {
        return filtered;
    };

    if looks_like_coordinates(query) {
        if let Some(coords) = parse_coordinates(query) {
            return filter_by_proximity(coords, filtered);
        }
    }

    filter_by_name(query, filtered)
}
