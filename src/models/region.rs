/// One entry of the fixed UK collection catalog.
///
/// Each id carries both provider names, so an id that exists for one
/// provider always exists for the other. The carbon name is the DNO
/// (Distribution Network Operator) region the carbon-intensity API
/// reports under; the weather name is the city OpenWeatherMap resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub id: u8,
    pub weather_name: &'static str,
    pub carbon_name: &'static str,
}

/// The carbon-intensity API's 17 GB regions, each paired with a
/// representative city for the weather lookup. Ids match the API's
/// `regionid` values.
const CATALOG: [Region; 17] = [
    Region { id: 1, weather_name: "Inverness", carbon_name: "North Scotland" },
    Region { id: 2, weather_name: "Edinburgh", carbon_name: "South Scotland" },
    Region { id: 3, weather_name: "Manchester", carbon_name: "North West England" },
    Region { id: 4, weather_name: "Newcastle upon Tyne", carbon_name: "North East England" },
    Region { id: 5, weather_name: "Sheffield", carbon_name: "South Yorkshire" },
    Region { id: 6, weather_name: "Liverpool", carbon_name: "North Wales, Merseyside and Cheshire" },
    Region { id: 7, weather_name: "Cardiff", carbon_name: "South Wales" },
    Region { id: 8, weather_name: "Birmingham", carbon_name: "West Midlands" },
    Region { id: 9, weather_name: "Nottingham", carbon_name: "East Midlands" },
    Region { id: 10, weather_name: "Cambridge", carbon_name: "East of England" },
    Region { id: 11, weather_name: "Bristol", carbon_name: "South West England" },
    Region { id: 12, weather_name: "Southampton", carbon_name: "South England" },
    Region { id: 13, weather_name: "London", carbon_name: "London" },
    Region { id: 14, weather_name: "Brighton", carbon_name: "South East England" },
    Region { id: 15, weather_name: "Leeds", carbon_name: "Yorkshire" },
    Region { id: 16, weather_name: "Glasgow", carbon_name: "Central Scotland" },
    Region { id: 17, weather_name: "Swansea", carbon_name: "South West Scotland" },
];

impl Region {
    /// The full catalog in ascending id order.
    pub fn catalog() -> &'static [Region] {
        &CATALOG
    }

    pub fn by_id(id: u8) -> Option<&'static Region> {
        CATALOG.iter().find(|r| r.id == id)
    }

    /// Query string for the coordinate lookup, e.g. "London,GB".
    pub fn weather_query(&self, country_code: &str) -> String {
        format!("{},{}", self.weather_name, country_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size_and_order() {
        let catalog = Region::catalog();
        assert_eq!(catalog.len(), 17);

        for (i, region) in catalog.iter().enumerate() {
            assert_eq!(region.id as usize, i + 1, "ids must ascend without gaps");
        }
    }

    #[test]
    fn test_every_id_has_both_names() {
        for region in Region::catalog() {
            assert!(!region.weather_name.is_empty());
            assert!(!region.carbon_name.is_empty());
        }
    }

    #[test]
    fn test_london_entry() {
        let london = Region::by_id(13).unwrap();
        assert_eq!(london.weather_name, "London");
        assert_eq!(london.carbon_name, "London");
        assert_eq!(london.weather_query("GB"), "London,GB");
    }

    #[test]
    fn test_unknown_id() {
        assert!(Region::by_id(0).is_none());
        assert!(Region::by_id(18).is_none());
    }
}
