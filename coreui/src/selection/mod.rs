//! The filterable selection core shared by Select, MultiSelect and
//! Autocomplete.

mod combobox;
mod filter;
mod option;

pub use combobox::{Combobox, Nav, Section};
pub use filter::{Filter, FilterMatch, fuzzy_filter};
pub use option::{SelectOption, display_order};
