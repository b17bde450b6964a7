use std::collections::BTreeSet;

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::{
    repository::{Gender, Profile},
    search::normalize,
};

/// First year offered by [`year_options`].
pub const FIRST_YEAR: i32 = 2010;

/// The current search term plus the categorical filters. `None` means "no constraint".
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterState {
    pub gender: Option<Gender>,
    pub area: Option<String>,
    pub start_year: Option<String>,
    /// Persisted under its own key, see [`Repository`](crate::Repository).
    #[serde(skip)]
    pub search_term: String,
}

impl FilterState {
    /// Whether this state lets every profile through.
    pub fn is_empty(&self) -> bool {
        self.gender.is_none()
            && self.area.is_none()
            && self.start_year.is_none()
            && self.search_term.is_empty()
    }

    /// Clear the categorical filters, keeping the search term.
    pub fn clear_filters(&mut self) {
        self.gender = None;
        self.area = None;
        self.start_year = None;
    }

    /// Count of categorical filters in effect.
    pub fn active_filters(&self) -> usize {
        [
            self.gender.is_some(),
            self.area.is_some(),
            self.start_year.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn matches(&self, profile: &Profile) -> bool {
        self.matches_search(profile)
            && self.matches_gender(profile)
            && self.matches_area(profile)
            && self.matches_year(profile)
    }

    fn matches_search(&self, profile: &Profile) -> bool {
        let term = normalize(&self.search_term);
        if term.is_empty() {
            return true;
        }

        profile
            .searchable_fields()
            .iter()
            .any(|field| normalize(field).contains(&term))
    }

    fn matches_gender(&self, profile: &Profile) -> bool {
        self.gender.is_none_or(|gender| profile.gender == Some(gender))
    }

    fn matches_area(&self, profile: &Profile) -> bool {
        self.area.as_ref().is_none_or(|area| &profile.area == area)
    }

    fn matches_year(&self, profile: &Profile) -> bool {
        self.start_year
            .as_ref()
            .is_none_or(|year| &profile.start_year == year)
    }
}

/// The profiles of `roster` that pass every predicate of `filters`, in roster order.
pub fn visible_profiles(roster: &[Profile], filters: &FilterState) -> Vec<Profile> {
    roster
        .iter()
        .filter(|profile| filters.matches(profile))
        .cloned()
        .collect()
}

/// Sorted, distinct areas present in `roster`. Profiles without an area are skipped.
pub fn unique_areas(roster: &[Profile]) -> Vec<String> {
    roster
        .iter()
        .map(|profile| profile.area.as_str())
        .filter(|area| !area.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Candidate entry years, [`FIRST_YEAR`] through next year.
pub fn year_options() -> Vec<String> {
    year_options_from(FIRST_YEAR)
}

/// Candidate entry years, `first` through next year, ascending.
pub fn year_options_from(first: i32) -> Vec<String> {
    let last = chrono::Local::now().year().saturating_add(1);

    (first..=last).map(|year| year.to_string()).collect()
}
