//! Built-in monkey catalog
//!
//! This module contains the static list of known species. It backs the
//! offline provider and is the single source the fallback dataset is
//! derived from.

use super::Record;

/// Static catalog entry
///
/// Uses `&'static str` fields so the catalog can live in a `static` array;
/// convert to an owned [`Record`] with `Record::from`.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub location: &'static str,
    pub details: &'static str,
    pub image_ref: &'static str,
    pub population: u64,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&CatalogEntry> for Record {
    fn from(entry: &CatalogEntry) -> Self {
        Record {
            name: entry.name.to_string(),
            location: entry.location.to_string(),
            details: entry.details.to_string(),
            image_ref: entry.image_ref.to_string(),
            population: entry.population,
            latitude: entry.latitude,
            longitude: entry.longitude,
        }
    }
}

/// Names of the entries served when the remote source is unreachable
pub const FALLBACK_NAMES: [&str; 3] = ["Baboon", "Japanese Macaque", "Sebastian"];

/// Static array of all known species
pub static CATALOG: [CatalogEntry; 13] = [
    CatalogEntry {
        name: "Baboon",
        location: "Africa & Asia",
        details: "Baboons are African and Arabian Old World monkeys belonging to the genus Papio, part of the subfamily Cercopithecinae.",
        image_ref: "https://raw.githubusercontent.com/jamesmontemagno/app-monkeys/master/baboon.jpg",
        population: 10000,
        latitude: -8.783195,
        longitude: 34.508523,
    },
    CatalogEntry {
        name: "Capuchin Monkey",
        location: "Central & South America",
        details: "The capuchin monkeys are New World monkeys of the subfamily Cebinae. Prior to 2011, the subfamily contained only a single genus, Cebus.",
        image_ref: "https://raw.githubusercontent.com/jamesmontemagno/app-monkeys/master/capuchin.jpg",
        population: 23000,
        latitude: 12.769013,
        longitude: -85.602364,
    },
    CatalogEntry {
        name: "Blue Monkey",
        location: "Central and East Africa",
        details: "The blue monkey or diademed monkey is a species of Old World monkey native to Central and East Africa, ranging from the upper Congo River basin east to the East African Rift and south to northern Angola and Zambia",
        image_ref: "https://raw.githubusercontent.com/jamesmontemagno/app-monkeys/master/bluemonkey.jpg",
        population: 12000,
        latitude: 1.957709,
        longitude: 37.297204,
    },
    CatalogEntry {
        name: "Squirrel Monkey",
        location: "Central & South America",
        details: "The squirrel monkeys are the New World monkeys of the genus Saimiri. They are the only genus in the subfamily Saimirinae.",
        image_ref: "https://raw.githubusercontent.com/jamesmontemagno/app-monkeys/master/saimiri.jpg",
        population: 11000,
        latitude: -8.783195,
        longitude: -55.491477,
    },
    CatalogEntry {
        name: "Golden Lion Tamarin",
        location: "Brazil",
        details: "The golden lion tamarin also known as the golden marmoset, is a small New World monkey of the family Callitrichidae.",
        image_ref: "https://raw.githubusercontent.com/jamesmontemagno/app-monkeys/master/tamarin.jpg",
        population: 19000,
        latitude: -14.235004,
        longitude: -51.92528,
    },
    CatalogEntry {
        name: "Howler Monkey",
        location: "South America",
        details: "Howler monkeys are among the largest of the New World monkeys. Fifteen species are currently recognised.",
        image_ref: "https://raw.githubusercontent.com/jamesmontemagno/app-monkeys/master/alouatta.jpg",
        population: 8000,
        latitude: -8.783195,
        longitude: -55.491477,
    },
    CatalogEntry {
        name: "Japanese Macaque",
        location: "Japan",
        details: "The Japanese macaque is a terrestrial Old World monkey species native to Japan. They are also sometimes known as the snow monkey.",
        image_ref: "https://raw.githubusercontent.com/jamesmontemagno/app-monkeys/master/macasa.jpg",
        population: 1000,
        latitude: 36.204824,
        longitude: 138.252924,
    },
    CatalogEntry {
        name: "Mandrill",
        location: "Southern Cameroon, Gabon, and Congo",
        details: "The mandrill is a primate of the Old World monkey family, closely related to the baboons and even more closely to the drill.",
        image_ref: "https://raw.githubusercontent.com/jamesmontemagno/app-monkeys/master/mandrill.jpg",
        population: 17000,
        latitude: 7.369722,
        longitude: 12.354722,
    },
    CatalogEntry {
        name: "Proboscis Monkey",
        location: "Borneo",
        details: "The proboscis monkey or long-nosed monkey is a reddish-brown arboreal Old World monkey that is endemic to the south-east Asian island of Borneo.",
        image_ref: "https://raw.githubusercontent.com/jamesmontemagno/app-monkeys/master/borneo.jpg",
        population: 15000,
        latitude: 0.961883,
        longitude: 114.55485,
    },
    CatalogEntry {
        name: "Sebastian",
        location: "Seattle",
        details: "This little trouble maker lives in Seattle and loves traveling on adventures.",
        image_ref: "https://raw.githubusercontent.com/jamesmontemagno/app-monkeys/master/sebastian.jpg",
        population: 1,
        latitude: 47.606209,
        longitude: -122.332071,
    },
    CatalogEntry {
        name: "Henry",
        location: "Phoenix",
        details: "An adorable monkey who is traveling the world and live tweets his adventures.",
        image_ref: "https://raw.githubusercontent.com/jamesmontemagno/app-monkeys/master/henry.jpg",
        population: 1,
        latitude: 33.448377,
        longitude: -112.074037,
    },
    CatalogEntry {
        name: "Red-shanked douc",
        location: "Vietnam",
        details: "The red-shanked douc is a species of Old World monkey, among the most colourful of all primates.",
        image_ref: "https://raw.githubusercontent.com/jamesmontemagno/app-monkeys/master/douc.jpg",
        population: 1300,
        latitude: 16.111648,
        longitude: 108.262122,
    },
    CatalogEntry {
        name: "Mooch",
        location: "Seattle",
        details: "An adorable monkey who is traveling the world and live tweets her adventures.",
        image_ref: "https://raw.githubusercontent.com/jamesmontemagno/app-monkeys/master/Mooch.PNG",
        population: 1,
        latitude: 47.608013,
        longitude: -122.335167,
    },
];

/// Returns every species in the built-in catalog as owned records
pub fn builtin_catalog() -> Vec<Record> {
    CATALOG.iter().map(Record::from).collect()
}

/// Returns the small subset of the catalog served when the provider fails
///
/// Entries keep catalog order.
pub fn fallback_catalog() -> Vec<Record> {
    CATALOG
        .iter()
        .filter(|entry| FALLBACK_NAMES.contains(&entry.name))
        .map(Record::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_13_entries() {
        assert_eq!(builtin_catalog().len(), 13);
    }

    #[test]
    fn test_catalog_names_are_unique_ignoring_case() {
        let mut names: Vec<String> = CATALOG.iter().map(|e| e.name.to_lowercase()).collect();
        names.sort();
        let original_len = names.len();
        names.dedup();
        assert_eq!(names.len(), original_len, "Catalog names are not unique");
    }

    #[test]
    fn test_fallback_is_non_empty_subset_of_catalog() {
        let fallback = fallback_catalog();
        let catalog = builtin_catalog();

        assert_eq!(fallback.len(), FALLBACK_NAMES.len());
        for record in &fallback {
            assert!(
                catalog.contains(record),
                "Fallback record {} missing from catalog",
                record.name
            );
        }
    }

    #[test]
    fn test_fallback_keeps_catalog_order() {
        let names: Vec<String> = fallback_catalog().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Baboon", "Japanese Macaque", "Sebastian"]);
    }

    #[test]
    fn test_each_entry_has_valid_coordinates() {
        for entry in CATALOG.iter() {
            assert!(
                (-90.0..=90.0).contains(&entry.latitude),
                "{} has invalid latitude: {}",
                entry.name,
                entry.latitude
            );
            assert!(
                (-180.0..=180.0).contains(&entry.longitude),
                "{} has invalid longitude: {}",
                entry.name,
                entry.longitude
            );
        }
    }
}
