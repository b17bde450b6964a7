//! Free-text search and categorical filtering over the roster.

mod filter;
mod normalize;

pub use filter::{
    FIRST_YEAR, FilterState, unique_areas, visible_profiles, year_options, year_options_from,
};
pub use normalize::normalize;
