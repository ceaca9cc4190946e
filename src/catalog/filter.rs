//! Filter state and the conjunctive filter predicate.

use crate::catalog::options::OptionSets;
use crate::domain::Vehicle;

/// One independent filter dimension, in the order the controls are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterDimension {
    Level,
    Nation,
    Kind,
}

impl FilterDimension {
    /// All dimensions in control order.
    pub const ALL: [Self; 3] = [Self::Level, Self::Nation, Self::Kind];

    /// Label of the "no constraint" entry of this dimension's dropdown.
    #[must_use]
    pub const fn all_label(self) -> &'static str {
        match self {
            Self::Level => "All Levels",
            Self::Nation => "All Nations",
            Self::Kind => "All Types",
        }
    }

    /// The next dimension, wrapping after the last.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Level => Self::Nation,
            Self::Nation => Self::Kind,
            Self::Kind => Self::Level,
        }
    }

    /// The previous dimension, wrapping before the first.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Level => Self::Kind,
            Self::Nation => Self::Level,
            Self::Kind => Self::Nation,
        }
    }
}

/// Which way to move through a dropdown's entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Forward,
    Backward,
}

/// The user's current filter selection.
///
/// `None` in any field means that dimension is unconstrained. Nation and type
/// hold category keys, never labels.
///
/// # Examples
///
/// ```
/// use fleetview::catalog::FilterState;
///
/// let filters = FilterState { level: Some(5), ..FilterState::default() };
/// assert!(!filters.is_empty());
/// assert!(FilterState::default().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub level: Option<u32>,
    pub nation: Option<String>,
    pub kind: Option<String>,
}

impl FilterState {
    /// Returns whether no dimension is constrained.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.level.is_none() && self.nation.is_none() && self.kind.is_none()
    }

    /// Returns whether the record satisfies every set dimension.
    ///
    /// Validity is not checked here; see [`filter_vehicles`].
    #[must_use]
    pub fn matches(&self, vehicle: &Vehicle) -> bool {
        self.level.map_or(true, |level| vehicle.level == level)
            && self
                .nation
                .as_deref()
                .map_or(true, |key| vehicle.nation.key == key)
            && self
                .kind
                .as_deref()
                .map_or(true, |key| vehicle.kind.key == key)
    }

    /// Clears one dimension.
    pub fn reset(&mut self, dimension: FilterDimension) {
        match dimension {
            FilterDimension::Level => self.level = None,
            FilterDimension::Nation => self.nation = None,
            FilterDimension::Kind => self.kind = None,
        }
    }

    /// Moves one dimension to its neighbouring dropdown entry.
    ///
    /// Entries are "All" followed by the dimension's options, and stepping
    /// wraps around at both ends. A current value that is not among the
    /// options is treated as "All".
    pub fn step(&mut self, dimension: FilterDimension, options: &OptionSets, step: Step) {
        match dimension {
            FilterDimension::Level => {
                self.level = step_through(options.levels(), self.level.as_ref(), step).copied();
            }
            FilterDimension::Nation => {
                let keys: Vec<&String> = options.nations().keys().collect();
                self.nation = step_through(&keys, self.nation.as_ref().as_ref(), step)
                    .map(|key| (*key).clone());
            }
            FilterDimension::Kind => {
                let keys: Vec<&String> = options.kinds().keys().collect();
                self.kind = step_through(&keys, self.kind.as_ref().as_ref(), step)
                    .map(|key| (*key).clone());
            }
        }
    }
}

/// Picks the entry next to `current` in `[All, values...]`; `None` is "All".
fn step_through<'a, T: PartialEq>(values: &'a [T], current: Option<&T>, step: Step) -> Option<&'a T> {
    if values.is_empty() {
        return None;
    }

    // Position 0 is "All", positions 1..=len are the values.
    let len = values.len() + 1;
    let position = current
        .and_then(|current| values.iter().position(|value| value == current))
        .map_or(0, |index| index + 1);

    let next = match step {
        Step::Forward => (position + 1) % len,
        Step::Backward => (position + len - 1) % len,
    };

    next.checked_sub(1).map(|index| &values[index])
}

/// Returns the indices of valid records passing the filters, in source order.
///
/// # Examples
///
/// ```
/// use fleetview::catalog::{filter_vehicles, FilterState};
///
/// let indices = filter_vehicles(&[], &FilterState::default());
/// assert!(indices.is_empty());
/// ```
#[must_use]
pub fn filter_vehicles(vehicles: &[Vehicle], filters: &FilterState) -> Vec<usize> {
    vehicles
        .iter()
        .enumerate()
        .filter(|(_, vehicle)| vehicle.is_displayable() && filters.matches(vehicle))
        .map(|(index, _)| index)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn vehicle(title: &str, level: u32, nation: &str, kind: &str) -> Vehicle {
        Vehicle {
            title: title.to_string(),
            description: format!("{title} description"),
            icon: String::new(),
            level,
            kind: Category::new(kind, kind.to_uppercase()),
            nation: Category::new(nation, nation.to_uppercase()),
        }
    }

    fn fleet() -> Vec<Vehicle> {
        vec![
            vehicle("A", 3, "ussr", "Destroyer"),
            vehicle("B", 5, "japan", "Cruiser"),
            vehicle("C", 7, "ussr", "Cruiser"),
            vehicle("D", 5, "ussr", "Destroyer"),
            vehicle("E", 5, "japan", "Destroyer"),
        ]
    }

    fn titles(vehicles: &[Vehicle], indices: &[usize]) -> Vec<String> {
        indices.iter().map(|&i| vehicles[i].title.clone()).collect()
    }

    #[test]
    fn empty_filter_keeps_all_valid_records() {
        let vehicles = fleet();
        let indices = filter_vehicles(&vehicles, &FilterState::default());
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn level_filter_keeps_matching_records_in_order() {
        let vehicles = fleet();
        let filters = FilterState {
            level: Some(5),
            ..FilterState::default()
        };
        assert_eq!(titles(&vehicles, &filter_vehicles(&vehicles, &filters)), vec!["B", "D", "E"]);
    }

    #[test]
    fn dimensions_combine_conjunctively() {
        let vehicles = fleet();
        let filters = FilterState {
            level: Some(5),
            nation: Some("ussr".to_string()),
            kind: Some("Destroyer".to_string()),
        };
        assert_eq!(titles(&vehicles, &filter_vehicles(&vehicles, &filters)), vec!["D"]);
    }

    #[test]
    fn comparison_uses_keys_not_labels() {
        let vehicles = fleet();
        let filters = FilterState {
            nation: Some("USSR".to_string()),
            ..FilterState::default()
        };
        assert!(filter_vehicles(&vehicles, &filters).is_empty());
    }

    #[test]
    fn invalid_records_never_pass() {
        let mut vehicles = fleet();
        vehicles[1].title = "  ".to_string();
        vehicles[3].description = String::new();
        let indices = filter_vehicles(&vehicles, &FilterState::default());
        assert_eq!(indices, vec![0, 2, 4]);
    }

    #[test]
    fn reset_clears_single_dimension() {
        let mut filters = FilterState {
            level: Some(3),
            nation: Some("uk".to_string()),
            kind: None,
        };
        filters.reset(FilterDimension::Level);
        assert_eq!(filters.level, None);
        assert_eq!(filters.nation.as_deref(), Some("uk"));
    }

    #[test]
    fn stepping_levels_cycles_through_all() {
        let options = OptionSets::derive(&fleet());
        let mut filters = FilterState::default();

        let mut seen = Vec::new();
        for _ in 0..4 {
            filters.step(FilterDimension::Level, &options, Step::Forward);
            seen.push(filters.level);
        }
        assert_eq!(seen, vec![Some(3), Some(5), Some(7), None]);

        filters.step(FilterDimension::Level, &options, Step::Backward);
        assert_eq!(filters.level, Some(7));
    }

    #[test]
    fn stepping_nations_follows_first_seen_order() {
        let options = OptionSets::derive(&fleet());
        let mut filters = FilterState::default();

        filters.step(FilterDimension::Nation, &options, Step::Forward);
        assert_eq!(filters.nation.as_deref(), Some("ussr"));
        filters.step(FilterDimension::Nation, &options, Step::Forward);
        assert_eq!(filters.nation.as_deref(), Some("japan"));
        filters.step(FilterDimension::Nation, &options, Step::Forward);
        assert_eq!(filters.nation, None);
    }

    #[test]
    fn stepping_with_no_options_stays_unset() {
        let options = OptionSets::derive(&[]);
        let mut filters = FilterState::default();
        filters.step(FilterDimension::Kind, &options, Step::Forward);
        assert_eq!(filters.kind, None);
    }

    #[test]
    fn dimension_focus_wraps() {
        assert_eq!(FilterDimension::Kind.next(), FilterDimension::Level);
        assert_eq!(FilterDimension::Level.previous(), FilterDimension::Kind);
    }
}
