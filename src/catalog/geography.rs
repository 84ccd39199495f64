//! Countries, their states and cities, airport codes and city reference points

use crate::models::GeoPoint;

/// A country with its administrative divisions and lookups
#[derive(Debug)]
pub struct Country {
    pub name: &'static str,
    pub states: &'static [State],
    /// City name to three-letter airport code
    pub airports: &'static [(&'static str, &'static str)],
    /// City name to reference point used for accommodation coordinates
    pub landmarks: &'static [(&'static str, GeoPoint)],
}

/// A state, province or region within a country
#[derive(Debug)]
pub struct State {
    pub name: &'static str,
    pub cities: &'static [&'static str],
}

impl Country {
    /// Look up a state by name
    #[must_use]
    pub fn state(&self, name: &str) -> Option<&State> {
        self.states.iter().find(|state| state.name == name)
    }

    /// Airport code mapped for `city`, if any
    #[must_use]
    pub fn airport(&self, city: &str) -> Option<&'static str> {
        self.airports
            .iter()
            .find(|(name, _)| *name == city)
            .map(|(_, code)| *code)
    }

    /// Reference point for `city`, if any
    #[must_use]
    pub fn landmark(&self, city: &str) -> Option<GeoPoint> {
        self.landmarks
            .iter()
            .find(|(name, _)| *name == city)
            .map(|(_, point)| *point)
    }
}

const fn state(name: &'static str, cities: &'static [&'static str]) -> State {
    State { name, cities }
}

pub const COUNTRIES: &[Country] = &[
    Country {
        name: "United States",
        states: &[
            state("California", &["Los Angeles", "San Francisco", "San Diego", "Sacramento", "Fresno"]),
            state("New York", &["New York City", "Buffalo", "Rochester", "Syracuse", "Albany"]),
            state("Texas", &["Houston", "Dallas", "Austin", "San Antonio", "Fort Worth"]),
            state("Florida", &["Miami", "Orlando", "Tampa", "Jacksonville", "Tallahassee"]),
            state("Illinois", &["Chicago", "Aurora", "Rockford", "Joliet", "Naperville"]),
            state("Pennsylvania", &["Philadelphia", "Pittsburgh", "Allentown", "Erie", "Reading"]),
            state("Ohio", &["Columbus", "Cleveland", "Cincinnati", "Toledo", "Akron"]),
            state("Georgia", &["Atlanta", "Augusta", "Columbus", "Savannah", "Athens"]),
        ],
        airports: &[
            ("Los Angeles", "LAX"),
            ("San Francisco", "SFO"),
            ("New York City", "JFK"),
            ("Chicago", "ORD"),
            ("Houston", "IAH"),
            ("Dallas", "DFW"),
            ("Miami", "MIA"),
            ("Atlanta", "ATL"),
            ("Denver", "DEN"),
            ("Las Vegas", "LAS"),
            ("Seattle", "SEA"),
            ("Boston", "BOS"),
        ],
        landmarks: &[
            ("Los Angeles", GeoPoint::new(34.0522, -118.2437)),
            ("New York City", GeoPoint::new(40.7128, -74.0060)),
            ("Chicago", GeoPoint::new(41.8781, -87.6298)),
            ("Houston", GeoPoint::new(29.7604, -95.3698)),
            ("Miami", GeoPoint::new(25.7617, -80.1918)),
            ("Atlanta", GeoPoint::new(33.7490, -84.3880)),
        ],
    },
    Country {
        name: "United Kingdom",
        states: &[
            state("England", &["London", "Birmingham", "Manchester", "Liverpool", "Leeds"]),
            state("Scotland", &["Edinburgh", "Glasgow", "Aberdeen", "Dundee", "Stirling"]),
            state("Wales", &["Cardiff", "Swansea", "Newport", "Wrexham", "Barry"]),
            state("Northern Ireland", &["Belfast", "Derry", "Lisburn", "Newtownabbey", "Bangor"]),
        ],
        airports: &[
            ("London", "LHR"),
            ("Manchester", "MAN"),
            ("Birmingham", "BHX"),
            ("Edinburgh", "EDI"),
            ("Glasgow", "GLA"),
            ("Belfast", "BFS"),
            ("Newcastle", "NCL"),
            ("Liverpool", "LPL"),
        ],
        landmarks: &[
            ("London", GeoPoint::new(51.5074, -0.1278)),
            ("Manchester", GeoPoint::new(53.4808, -2.2426)),
            ("Birmingham", GeoPoint::new(52.4862, -1.8904)),
            ("Edinburgh", GeoPoint::new(55.9533, -3.1883)),
        ],
    },
    Country {
        name: "France",
        states: &[
            state("Île-de-France", &["Paris", "Versailles", "Boulogne-Billancourt", "Saint-Denis", "Argenteuil"]),
            state("Provence-Alpes-Côte d'Azur", &["Marseille", "Nice", "Toulon", "Aix-en-Provence", "Avignon"]),
            state("Auvergne-Rhône-Alpes", &["Lyon", "Grenoble", "Saint-Étienne", "Villeurbanne", "Valence"]),
            state("Occitanie", &["Toulouse", "Montpellier", "Nîmes", "Perpignan", "Béziers"]),
            state("Nouvelle-Aquitaine", &["Bordeaux", "Limoges", "Poitiers", "La Rochelle", "Angoulême"]),
        ],
        airports: &[
            ("Paris", "CDG"),
            ("Marseille", "MRS"),
            ("Lyon", "LYS"),
            ("Nice", "NCE"),
            ("Toulouse", "TLS"),
            ("Bordeaux", "BOD"),
            ("Nantes", "NTE"),
            ("Strasbourg", "SXB"),
        ],
        landmarks: &[
            ("Paris", GeoPoint::new(48.8566, 2.3522)),
            ("Marseille", GeoPoint::new(43.2965, 5.3698)),
            ("Lyon", GeoPoint::new(45.7640, 4.8357)),
            ("Nice", GeoPoint::new(43.7102, 7.2620)),
        ],
    },
    Country {
        name: "Germany",
        states: &[
            state("Bavaria", &["Munich", "Nuremberg", "Augsburg", "Regensburg", "Würzburg"]),
            state("Baden-Württemberg", &["Stuttgart", "Mannheim", "Karlsruhe", "Freiburg", "Heidelberg"]),
            state("North Rhine-Westphalia", &["Cologne", "Düsseldorf", "Dortmund", "Essen", "Duisburg"]),
            state("Hesse", &["Frankfurt", "Wiesbaden", "Kassel", "Darmstadt", "Offenbach"]),
            state("Saxony", &["Dresden", "Leipzig", "Chemnitz", "Zwickau", "Plauen"]),
        ],
        airports: &[
            ("Munich", "MUC"),
            ("Frankfurt", "FRA"),
            ("Berlin", "BER"),
            ("Hamburg", "HAM"),
            ("Cologne", "CGN"),
            ("Stuttgart", "STR"),
            ("Düsseldorf", "DUS"),
            ("Hannover", "HAJ"),
        ],
        landmarks: &[
            ("Munich", GeoPoint::new(48.1351, 11.5820)),
            ("Frankfurt", GeoPoint::new(50.1109, 8.6821)),
            ("Berlin", GeoPoint::new(52.5200, 13.4050)),
            ("Hamburg", GeoPoint::new(53.5511, 9.9937)),
        ],
    },
    Country {
        name: "Japan",
        states: &[
            state("Tokyo", &["Shibuya", "Shinjuku", "Ginza", "Harajuku", "Roppongi"]),
            state("Osaka", &["Namba", "Umeda", "Shinsaibashi", "Dotonbori", "Tennoji"]),
            state("Kyoto", &["Gion", "Arashiyama", "Higashiyama", "Fushimi", "Nishiki"]),
            state("Hokkaido", &["Sapporo", "Hakodate", "Asahikawa", "Kushiro", "Obihiro"]),
            state("Fukuoka", &["Hakata", "Tenjin", "Daimyo", "Nakasu", "Ohori"]),
        ],
        airports: &[
            ("Tokyo", "NRT"),
            ("Osaka", "KIX"),
            ("Kyoto", "UKB"),
            ("Sapporo", "CTS"),
            ("Fukuoka", "FUK"),
            ("Nagoya", "NGO"),
            ("Hiroshima", "HIJ"),
            ("Sendai", "SDJ"),
        ],
        landmarks: &[
            ("Tokyo", GeoPoint::new(35.6762, 139.6503)),
            ("Osaka", GeoPoint::new(34.6937, 135.5023)),
            ("Kyoto", GeoPoint::new(35.0116, 135.7681)),
            ("Sapporo", GeoPoint::new(43.0642, 141.3469)),
        ],
    },
    Country {
        name: "Australia",
        states: &[
            state("New South Wales", &["Sydney", "Newcastle", "Wollongong", "Wagga Wagga", "Albury"]),
            state("Victoria", &["Melbourne", "Geelong", "Ballarat", "Bendigo", "Shepparton"]),
            state("Queensland", &["Brisbane", "Gold Coast", "Cairns", "Townsville", "Toowoomba"]),
            state("Western Australia", &["Perth", "Fremantle", "Rockingham", "Mandurah", "Bunbury"]),
            state("South Australia", &["Adelaide", "Mount Gambier", "Whyalla", "Murray Bridge", "Port Augusta"]),
        ],
        airports: &[
            ("Sydney", "SYD"),
            ("Melbourne", "MEL"),
            ("Brisbane", "BNE"),
            ("Perth", "PER"),
            ("Adelaide", "ADL"),
            ("Gold Coast", "OOL"),
            ("Cairns", "CNS"),
            ("Darwin", "DRW"),
        ],
        landmarks: &[],
    },
    Country {
        name: "Canada",
        states: &[
            state("Ontario", &["Toronto", "Ottawa", "Hamilton", "London", "Kitchener"]),
            state("Quebec", &["Montreal", "Quebec City", "Laval", "Gatineau", "Longueuil"]),
            state("British Columbia", &["Vancouver", "Victoria", "Surrey", "Burnaby", "Richmond"]),
            state("Alberta", &["Calgary", "Edmonton", "Red Deer", "Lethbridge", "St. Albert"]),
            state("Manitoba", &["Winnipeg", "Brandon", "Steinbach", "Thompson", "Portage la Prairie"]),
        ],
        airports: &[
            ("Toronto", "YYZ"),
            ("Vancouver", "YVR"),
            ("Montreal", "YUL"),
            ("Calgary", "YYC"),
            ("Ottawa", "YOW"),
            ("Edmonton", "YEG"),
            ("Winnipeg", "YWG"),
            ("Halifax", "YHZ"),
        ],
        landmarks: &[],
    },
    Country {
        name: "United Arab Emirates",
        states: &[
            state("Dubai", &["Downtown Dubai", "Jumeirah", "Marina", "Business Bay", "Deira"]),
            state("Abu Dhabi", &["Al Reem Island", "Yas Island", "Saadiyat Island", "Al Ain", "Liwa"]),
            state("Sharjah", &["Al Qasba", "Al Majaz", "Al Khan", "Al Rolla", "Al Nahda"]),
            state("Ajman", &["Ajman City", "Al Nuaimiya", "Al Rawda", "Al Rashidiya", "Al Jerf"]),
            state("Ras Al Khaimah", &["Al Marjan Island", "Al Hamra", "Jebel Jais", "Al Qawasim", "Al Nakheel"]),
        ],
        airports: &[
            ("Dubai", "DXB"),
            ("Abu Dhabi", "AUH"),
            ("Sharjah", "SHJ"),
            ("Ras Al Khaimah", "RKT"),
        ],
        landmarks: &[],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_state_has_five_cities() {
        for country in COUNTRIES {
            for state in country.states {
                assert_eq!(state.cities.len(), 5, "{} / {}", country.name, state.name);
            }
        }
    }

    #[test]
    fn test_country_lookups() {
        let japan = COUNTRIES.iter().find(|c| c.name == "Japan").unwrap();
        assert_eq!(japan.airport("Sapporo"), Some("CTS"));
        assert_eq!(japan.airport("Gion"), None);
        assert!(japan.landmark("Sapporo").is_some());
        assert_eq!(japan.state("Hokkaido").unwrap().cities[0], "Sapporo");
    }

    #[test]
    fn test_landmarks_are_valid_points() {
        for country in COUNTRIES {
            for (city, point) in country.landmarks {
                assert!(point.is_valid(), "{city} has an invalid reference point");
            }
        }
    }
}
