use serde::{Deserialize, Serialize};

use super::coords::{self, Coordinates, Notation};

/// Malaysian states and federal territories accepted for `state`.
pub(super) const MALAYSIAN_STATES: [&str; 16] = [
    "Johor",
    "Kedah",
    "Kelantan",
    "Melaka",
    "Negeri Sembilan",
    "Pahang",
    "Penang",
    "Perak",
    "Perlis",
    "Sabah",
    "Sarawak",
    "Selangor",
    "Terengganu",
    "Kuala Lumpur",
    "Labuan",
    "Putrajaya",
];

pub(super) fn is_known_state(state: &str) -> bool {
    MALAYSIAN_STATES.contains(&state)
}

/// A stored catalog record. Latitude and longitude are always canonical:
/// every write path goes through `Coordinates::new`.
#[derive(Debug, Clone, Serialize)]
pub(super) struct Location {
    pub(super) id: u64,
    pub(super) name: String,
    pub(super) state: String,
    pub(super) latitude: f64,
    pub(super) longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) elevation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(super) description: Option<String>,
}

/// Validated input for a create or full update.
#[derive(Debug, Clone)]
pub(super) struct NewLocation {
    pub(super) name: String,
    pub(super) state: String,
    pub(super) coordinates: Coordinates,
    pub(super) elevation: Option<f64>,
    pub(super) description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct LocationPayload {
    pub(super) name: String,
    pub(super) state: String,
    /// Free-form coordinate string in either notation.
    pub(super) coordinates: String,
    #[serde(default)]
    pub(super) elevation: Option<f64>,
    #[serde(default)]
    pub(super) description: Option<String>,
}

impl LocationPayload {
    pub(super) fn validate(self) -> Result<NewLocation, &'static str> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty");
        }
        if !is_known_state(&self.state) {
            return Err("unknown state");
        }
        let coordinates =
            coords::parse_coordinates(&self.coordinates).ok_or("invalid coordinate format")?;
        Ok(NewLocation {
            name: self.name,
            state: self.state,
            coordinates,
            elevation: self.elevation,
            description: self.description,
        })
    }
}

#[derive(Deserialize)]
pub(super) struct LocationQuery {
    pub(super) search: Option<String>,
    pub(super) state: Option<String>,
}

#[derive(Deserialize)]
pub(super) struct PreviewQuery {
    pub(super) q: String,
}

/// Read-side view of a record, with the DMS rendering the sidebar shows.
#[derive(Serialize)]
pub(super) struct LocationResponse {
    #[serde(flatten)]
    pub(super) location: Location,
    pub(super) coordinates: String,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        let coordinates = coords::to_dms(location.latitude, location.longitude);
        Self {
            location,
            coordinates,
        }
    }
}

/// Startup seed record, read from the `CATALOG_SEED` JSON file.
#[derive(Debug, Deserialize)]
pub struct SeedLocation {
    pub(super) name: String,
    pub(super) state: String,
    pub(super) latitude: f64,
    pub(super) longitude: f64,
    #[serde(default)]
    pub(super) elevation: Option<f64>,
    #[serde(default)]
    pub(super) description: Option<String>,
}

/// Interpretation preview returned to the admin form.
#[derive(Serialize)]
pub(super) struct CoordinatePreview {
    pub(super) latitude: f64,
    pub(super) longitude: f64,
    pub(super) sexagesimal: String,
    pub(super) decimal: String,
}

impl CoordinatePreview {
    pub(super) fn of(coords: Coordinates) -> Self {
        Self {
            latitude: coords.latitude,
            longitude: coords.longitude,
            sexagesimal: coords::format_coordinates(coords, Notation::Sexagesimal),
            decimal: coords::format_coordinates(coords, Notation::Decimal),
        }
    }
}
