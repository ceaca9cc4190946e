//! Vehicle domain model.
//!
//! A [`Vehicle`] is one entry of the remote glossary: a ship with display text,
//! an icon reference, a tier and two categorical dimensions (type and nation).
//! Records are immutable once decoded from the wire.

/// A categorical dimension of a vehicle such as its nation or type.
///
/// `key` is the stable identifier used for equality when filtering. `label` is
/// the human-readable name and is only ever displayed, never compared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category {
    pub key: String,
    pub label: String,
}

impl Category {
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// A single catalog entry.
///
/// # Examples
///
/// ```
/// use fleetview::domain::{Category, Vehicle};
///
/// let vehicle = Vehicle {
///     title: "Gremyashchy".to_string(),
///     description: "Soviet destroyer".to_string(),
///     icon: "https://example.org/gremyashchy.png".to_string(),
///     level: 5,
///     kind: Category::new("Destroyer", "Destroyer"),
///     nation: Category::new("ussr", "U.S.S.R."),
/// };
/// assert!(vehicle.is_displayable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    pub title: String,
    pub description: String,
    /// URL of the large icon.
    pub icon: String,
    /// Tier of the vehicle.
    pub level: u32,
    /// Vehicle type (destroyer, cruiser, ...).
    pub kind: Category,
    pub nation: Category,
}

impl Vehicle {
    /// Returns whether the record can be shown in the grid.
    ///
    /// A record is displayable iff both its title and description are non-empty
    /// after trimming surrounding whitespace. The same predicate decides which
    /// records contribute to the filter option sets.
    #[must_use]
    pub fn is_displayable(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }
}
