//! Bounded comparison pick set.
//!
//! [`SelectionSet`] tracks the countries the user has picked for comparison:
//! at most two, insertion-ordered (the order decides which side of the
//! comparison overlay a country occupies), keyed strictly by country code.
//! Picks accumulate across filter and page changes and are only ever removed
//! by an explicit re-toggle, never implicitly.

use crate::domain::Country;

/// Insertion-ordered pick set with a hard capacity of two.
///
/// Membership is decided by [`Country::code`] alone; two records with the
/// same display name but different codes are distinct picks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionSet {
    picks: Vec<Country>,
}

impl SelectionSet {
    /// Maximum number of simultaneous picks.
    pub const CAPACITY: usize = 2;

    /// Creates an empty pick set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles a country's membership.
    ///
    /// - Already picked: the pick is removed.
    /// - Not picked, with room: appended at the end.
    /// - Not picked, at capacity: nothing happens; the existing picks and
    ///   their order are untouched.
    pub fn toggle(&mut self, country: &Country) {
        if let Some(position) = self.picks.iter().position(|c| c.code == country.code) {
            self.picks.remove(position);
        } else if self.picks.len() < Self::CAPACITY {
            self.picks.push(country.clone());
        }
    }

    /// Returns the pick slot (0 or 1) the country occupies, if any.
    #[must_use]
    pub fn slot_of(&self, code: &str) -> Option<usize> {
        self.picks.iter().position(|c| c.code == code)
    }

    /// Returns true when the country is currently picked.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.slot_of(code).is_some()
    }

    /// Number of current picks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// Returns true when nothing is picked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Returns true when the set is at capacity, the only state in which the
    /// comparison view may open.
    #[must_use]
    pub fn compare_ready(&self) -> bool {
        self.picks.len() == Self::CAPACITY
    }

    /// Current picks in insertion order.
    #[must_use]
    pub fn picks(&self) -> &[Country] {
        &self.picks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CountryName;

    fn country(code: &str) -> Country {
        Country {
            name: CountryName {
                common: code.to_string(),
                official: code.to_string(),
            },
            code: code.to_string(),
            region: "Europe".to_string(),
            population: 1,
            area: 1.0,
            flag_png: String::new(),
            flag_alt: String::new(),
            gdp_estimate: 0,
            capital: None,
            coat_of_arms_png: None,
        }
    }

    #[test]
    fn picks_accumulate_in_insertion_order() {
        let mut set = SelectionSet::new();
        set.toggle(&country("FRA"));
        set.toggle(&country("DEU"));

        assert_eq!(set.slot_of("FRA"), Some(0));
        assert_eq!(set.slot_of("DEU"), Some(1));
        assert!(set.compare_ready());
    }

    #[test]
    fn a_third_pick_at_capacity_is_ignored() {
        let mut set = SelectionSet::new();
        set.toggle(&country("FRA"));
        set.toggle(&country("DEU"));
        let before = set.clone();

        set.toggle(&country("ESP"));

        assert_eq!(set, before);
        assert_eq!(set.len(), 2);
        assert!(!set.contains("ESP"));
    }

    #[test]
    fn toggling_twice_round_trips() {
        let mut set = SelectionSet::new();
        set.toggle(&country("FRA"));
        let before = set.clone();

        set.toggle(&country("DEU"));
        set.toggle(&country("DEU"));

        assert_eq!(set, before);
    }

    #[test]
    fn removing_the_first_pick_shifts_the_second_into_slot_zero() {
        let mut set = SelectionSet::new();
        set.toggle(&country("FRA"));
        set.toggle(&country("DEU"));

        set.toggle(&country("FRA"));

        assert_eq!(set.slot_of("DEU"), Some(0));
        assert!(!set.compare_ready());
    }

    #[test]
    fn membership_is_by_code_not_name() {
        let mut set = SelectionSet::new();
        let mut a = country("KOR");
        a.name.common = "Korea".to_string();
        let mut b = country("PRK");
        b.name.common = "Korea".to_string();

        set.toggle(&a);
        set.toggle(&b);

        assert_eq!(set.len(), 2);
    }
}
