use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct City {
    pub id: u32,
    pub name: &'static str,
    /// Region identifier at the upstream provider. Not used when fetching,
    /// every request is made for the configured region.
    pub region_code: &'static str,
}

/// The public view of a city, as listed to clients.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CitySummary {
    pub id: u32,
    #[serde(rename = "nom")]
    pub name: String,
}

impl From<&City> for CitySummary {
    fn from(city: &City) -> Self {
        CitySummary {
            id: city.id,
            name: city.name.to_string(),
        }
    }
}

const CHAD_CITIES: [City; 10] = [
    City {
        id: 1,
        name: "N'Djamena",
        region_code: "TD001",
    },
    City {
        id: 2,
        name: "Moundou",
        region_code: "TD002",
    },
    City {
        id: 3,
        name: "Sarh",
        region_code: "TD003",
    },
    City {
        id: 4,
        name: "Abéché",
        region_code: "TD004",
    },
    City {
        id: 5,
        name: "Mongo",
        region_code: "TD005",
    },
    City {
        id: 6,
        name: "Kélo",
        region_code: "TD006",
    },
    City {
        id: 7,
        name: "Koumra",
        region_code: "TD007",
    },
    City {
        id: 8,
        name: "Pala",
        region_code: "TD008",
    },
    City {
        id: 9,
        name: "Am Timan",
        region_code: "TD009",
    },
    City {
        id: 10,
        name: "Bongor",
        region_code: "TD010",
    },
];

/// Read-only registry of the cities the service knows about.
#[derive(Debug, Clone, Copy)]
pub struct CityRegistry {
    cities: &'static [City],
}

impl Default for CityRegistry {
    fn default() -> Self {
        CityRegistry {
            cities: &CHAD_CITIES,
        }
    }
}

impl CityRegistry {
    pub fn list_cities(&self) -> Vec<CitySummary> {
        self.cities.iter().map(CitySummary::from).collect()
    }

    pub fn find_city(&self, id: u32) -> Option<&'static City> {
        self.cities.iter().find(|city| city.id == id)
    }
}
