/// Most clocks shown at once.
pub const MAX_CLOCKS: usize = 5;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct City {
    pub id: &'static str,
    pub name: &'static str,
    /// IANA timezone identifier
    pub timezone: &'static str,
}

impl City {
    const fn new(id: &'static str, name: &'static str, timezone: &'static str) -> Self {
        Self { id, name, timezone }
    }
}

pub static CITIES: [City; 15] = [
    City::new("new-york", "New York", "America/New_York"),
    City::new("london", "London", "Europe/London"),
    City::new("tokyo", "Tokyo", "Asia/Tokyo"),
    City::new("sydney", "Sydney", "Australia/Sydney"),
    City::new("paris", "Paris", "Europe/Paris"),
    City::new("dubai", "Dubai", "Asia/Dubai"),
    City::new("singapore", "Singapore", "Asia/Singapore"),
    City::new("hong-kong", "Hong Kong", "Asia/Hong_Kong"),
    City::new("moscow", "Moscow", "Europe/Moscow"),
    City::new("los-angeles", "Los Angeles", "America/Los_Angeles"),
    City::new("chicago", "Chicago", "America/Chicago"),
    City::new("toronto", "Toronto", "America/Toronto"),
    City::new("berlin", "Berlin", "Europe/Berlin"),
    City::new("mumbai", "Mumbai", "Asia/Kolkata"),
    City::new("sao-paulo", "São Paulo", "America/Sao_Paulo"),
];

/// Shown when nothing usable was stored.
pub const DEFAULT_CITIES: [&str; MAX_CLOCKS] = ["new-york", "london", "tokyo", "sydney", "paris"];

pub fn by_id(id: &str) -> Option<&'static City> {
    CITIES.iter().find(|city| city.id == id)
}

/// Catalog entries that are not in `active`, in catalog order.
pub fn available(active: &[&str]) -> Vec<&'static City> {
    CITIES
        .iter()
        .filter(|city| !active.contains(&city.id))
        .collect()
}

pub fn defaults() -> Vec<&'static City> {
    DEFAULT_CITIES.iter().filter_map(|id| by_id(id)).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono_tz::Tz;

    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let ids: HashSet<_> = CITIES.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), CITIES.len());
        assert!(CITIES.len() >= MAX_CLOCKS);
    }

    #[test]
    fn catalog_timezones_parse() {
        for city in &CITIES {
            assert!(city.timezone.parse::<Tz>().is_ok(), "{}", city.timezone);
        }
    }

    #[test]
    fn defaults_resolve() {
        let defaults = defaults();
        assert_eq!(defaults.len(), MAX_CLOCKS);
        assert_eq!(
            defaults.iter().map(|c| c.id).collect::<Vec<_>>(),
            DEFAULT_CITIES
        );
    }

    #[test]
    fn lookup() {
        let city = by_id("new-york").unwrap();
        assert_eq!(city.name, "New York");
        assert_eq!(city.timezone, "America/New_York");
        assert!(by_id("invalid-city").is_none());
        assert!(by_id("").is_none());
    }

    #[test]
    fn available_excludes_active_and_keeps_order() {
        assert_eq!(available(&[]).len(), CITIES.len());

        let rest = available(&["new-york", "london"]);
        assert_eq!(rest.len(), CITIES.len() - 2);
        assert_eq!(rest[0].id, "tokyo");
        assert!(rest.iter().all(|c| c.id != "new-york" && c.id != "london"));

        let all: Vec<_> = CITIES.iter().map(|c| c.id).collect();
        assert!(available(&all).is_empty());
    }
}
