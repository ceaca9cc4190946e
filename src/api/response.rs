//! Wire types of the vehicles query response.
//!
//! These mirror the JSON the endpoint returns and are kept apart from the
//! domain [`Vehicle`]. Conversion is a field mapping with no validation,
//! except that a category without a title is labelled by its name. Blank
//! records are filtered later by the grid view.

use crate::domain::{Category, Vehicle};
use serde::Deserialize;

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<VehiclesData>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

/// One entry of the GraphQL `errors` array.
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct VehiclesData {
    #[serde(default)]
    pub vehicles: Option<Vec<WireVehicle>>,
}

#[derive(Debug, Deserialize)]
pub struct WireVehicle {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icons: Option<WireIcons>,
    pub level: u32,
    #[serde(rename = "type")]
    pub kind: WireCategory,
    pub nation: WireCategory,
}

#[derive(Debug, Deserialize)]
pub struct WireIcons {
    #[serde(default)]
    pub large: Option<String>,
}

/// A `{ name, title }` pair as sent for both `type` and `nation`.
#[derive(Debug, Deserialize)]
pub struct WireCategory {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// A missing or blank title is displayed as the name.
impl From<WireCategory> for Category {
    fn from(wire: WireCategory) -> Self {
        let label = wire
            .title
            .filter(|title| !title.trim().is_empty())
            .unwrap_or_else(|| wire.name.clone());
        Self {
            key: wire.name,
            label,
        }
    }
}

impl From<WireVehicle> for Vehicle {
    fn from(wire: WireVehicle) -> Self {
        Self {
            title: wire.title.unwrap_or_default(),
            description: wire.description.unwrap_or_default(),
            icon: wire.icons.and_then(|icons| icons.large).unwrap_or_default(),
            level: wire.level,
            kind: wire.kind.into(),
            nation: wire.nation.into(),
        }
    }
}
