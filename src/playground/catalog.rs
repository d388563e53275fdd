//! Built-in playground catalog
//!
//! Venues around Tokyo plus a handful of destinations further out. The
//! catalog is checked once when it is built: ids must be unique, every venue
//! needs at least one age group and scores must stay within 0-10.

use std::collections::HashSet;

use tracing::info;

use crate::error::KidsWeatherError;
use crate::models::{
    AgeGroup, Coordinates, Cost, PlaygroundVenue, VenueCategory, WeatherSuitability,
};

const MAX_SCORE: u8 = 10;

const ALL_AGES: &[AgeGroup] = &[AgeGroup::Toddler, AgeGroup::Preschool, AgeGroup::School];
const YOUNG: &[AgeGroup] = &[AgeGroup::Toddler, AgeGroup::Preschool];
const OLDER: &[AgeGroup] = &[AgeGroup::Preschool, AgeGroup::School];

/// Immutable, validated venue list
#[derive(Debug, Clone)]
pub struct PlaygroundCatalog {
    venues: Vec<PlaygroundVenue>,
}

impl PlaygroundCatalog {
    /// Validate `venues` and fill in map links
    pub fn from_venues(mut venues: Vec<PlaygroundVenue>) -> crate::Result<Self> {
        let mut seen = HashSet::new();
        for venue in &mut venues {
            if !seen.insert(venue.id) {
                return Err(KidsWeatherError::catalog(format!(
                    "duplicate venue id '{}'",
                    venue.id
                )));
            }
            if venue.age_groups.is_empty() {
                return Err(KidsWeatherError::catalog(format!(
                    "venue '{}' supports no age group",
                    venue.id
                )));
            }
            if venue.weather_suitability.max() > MAX_SCORE {
                return Err(KidsWeatherError::catalog(format!(
                    "venue '{}' has a suitability score above {MAX_SCORE}",
                    venue.id
                )));
            }
            if venue.map_url.is_none() {
                venue.map_url = Some(maps_search_url(venue.official_name));
            }
        }
        Ok(Self { venues })
    }

    /// The catalog shipped with the service
    pub fn builtin() -> crate::Result<Self> {
        let catalog = Self::from_venues(builtin_venues())?;
        info!(venues = catalog.len(), "Loaded playground catalog");
        Ok(catalog)
    }

    #[must_use]
    pub fn venues(&self) -> &[PlaygroundVenue] {
        &self.venues
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&PlaygroundVenue> {
        self.venues.iter().find(|v| v.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.venues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }
}

fn maps_search_url(query: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        urlencoding::encode(query)
    )
}

#[allow(clippy::too_many_lines)]
fn builtin_venues() -> Vec<PlaygroundVenue> {
    vec![
        PlaygroundVenue {
            id: "outdoor-park-1",
            name: "Showa Kinen Park",
            official_name: "Showa Kinen National Government Park",
            category: VenueCategory::Outdoor,
            description: "A vast national park with open lawns and giant play equipment, seasonal flowers and picnic areas.",
            weather_suitability: WeatherSuitability::new(10, 8, 2, 4),
            age_groups: ALL_AGES,
            features: &["Giant play structures", "Lawn plaza", "Seasonal flowers", "Cycling", "Barbecue garden", "Restaurant"],
            safety_notes: &["Sun protection essential", "Check the park map", "Name tags recommended"],
            estimated_duration: "3-6 hours",
            cost: Cost::Low,
            coordinates: Some(Coordinates::new(35.7056, 139.4084)),
            map_url: None,
            temperature_exempt: false,
        },
        PlaygroundVenue {
            id: "outdoor-adventure-1",
            name: "Forest Adventure",
            official_name: "Forest Adventure Tachikawa",
            category: VenueCategory::Adventure,
            description: "A treetop adventure course with athletics and ziplines in the forest.",
            weather_suitability: WeatherSuitability::new(9, 9, 1, 3),
            age_groups: OLDER,
            features: &["Ziplines", "Athletic course", "Harness provided", "Instructors on site"],
            safety_notes: &["Sports shoes required", "Check height limits", "Wear safety gear"],
            estimated_duration: "2-4 hours",
            cost: Cost::High,
            coordinates: Some(Coordinates::new(35.7272, 139.4394)),
            map_url: None,
            temperature_exempt: false,
        },
        PlaygroundVenue {
            id: "outdoor-beach-1",
            name: "Odaiba Seaside Park",
            official_name: "Odaiba Seaside Park",
            category: VenueCategory::Water,
            description: "A family beach on Tokyo Bay with sand and shallow water play.",
            weather_suitability: WeatherSuitability::new(10, 6, 1, 0),
            age_groups: ALL_AGES,
            features: &["Artificial beach", "Rainbow Bridge view", "Kiosk", "Toilets", "Parking"],
            safety_notes: &["Sunscreen essential", "Stay hydrated", "Watch the tide"],
            estimated_duration: "3-5 hours",
            cost: Cost::Free,
            coordinates: Some(Coordinates::new(35.6267, 139.7731)),
            map_url: None,
            temperature_exempt: false,
        },
        PlaygroundVenue {
            id: "indoor-play-1",
            name: "KID-O-KID",
            official_name: "Bornelund KID-O-KID Yomiuriland",
            category: VenueCategory::Indoor,
            description: "A large indoor playground run by Bornelund with educational toys and active play equipment.",
            weather_suitability: WeatherSuitability::new(5, 7, 10, 10),
            age_groups: YOUNG,
            features: &["Ball pool", "Air track", "Building play", "Play leaders on site", "Cafe"],
            safety_notes: &["Socks required", "Guardian must accompany", "Check age zones"],
            estimated_duration: "2-4 hours",
            cost: Cost::Medium,
            coordinates: Some(Coordinates::new(35.6289, 139.5420)),
            map_url: None,
            temperature_exempt: false,
        },
        PlaygroundVenue {
            id: "indoor-library-1",
            name: "Children's Book Forest Nakanoshima",
            official_name: "Children's Book Forest Nakanoshima",
            category: VenueCategory::Educational,
            description: "A children's library designed by Tadao Ando, from picture books to science titles.",
            weather_suitability: WeatherSuitability::new(4, 6, 9, 8),
            age_groups: OLDER,
            features: &["Picture book corner", "Story time space", "Rooftop terrace", "Special exhibitions"],
            safety_notes: &["Reservation required", "Keep quiet", "Handle books with care"],
            estimated_duration: "1-3 hours",
            cost: Cost::Free,
            coordinates: Some(Coordinates::new(34.6919, 135.5060)),
            map_url: None,
            temperature_exempt: false,
        },
        PlaygroundVenue {
            id: "indoor-aquarium-1",
            name: "Sumida Aquarium",
            official_name: "Sumida Aquarium",
            category: VenueCategory::Educational,
            description: "An urban aquarium inside Tokyo Skytree Town, famous for penguins and jellyfish.",
            weather_suitability: WeatherSuitability::new(6, 8, 10, 9),
            age_groups: ALL_AGES,
            features: &["Penguin cafe", "Jellyfish area", "Garden eels", "Workshops", "Cafe"],
            safety_notes: &["Hands out of the tanks", "No running", "Queue when crowded"],
            estimated_duration: "2-4 hours",
            cost: Cost::High,
            coordinates: Some(Coordinates::new(35.7100, 139.8107)),
            map_url: None,
            temperature_exempt: false,
        },
        PlaygroundVenue {
            id: "covered-mall-1",
            name: "LaLaport Toyosu",
            official_name: "Urban Dock LaLaport Toyosu",
            category: VenueCategory::Covered,
            description: "A big shopping mall in Toyosu with kids' areas and a wide range of shops.",
            weather_suitability: WeatherSuitability::new(6, 8, 9, 9),
            age_groups: ALL_AGES,
            features: &["Kids' forest", "Food court", "Cinema", "Game centre", "Parking"],
            safety_notes: &["Watch for lost children", "Careful on escalators", "Hold hands when crowded"],
            estimated_duration: "3-6 hours",
            cost: Cost::Low,
            coordinates: Some(Coordinates::new(35.6551, 139.7967)),
            map_url: None,
            temperature_exempt: false,
        },
        PlaygroundVenue {
            id: "covered-station-1",
            name: "Tokyo Character Street",
            official_name: "Tokyo Station Ichibangai Character Street",
            category: VenueCategory::Covered,
            description: "Character shops beneath Tokyo Station with trains in view, a favourite with children.",
            weather_suitability: WeatherSuitability::new(5, 7, 8, 8),
            age_groups: YOUNG,
            features: &["Character shops", "Train views", "Restaurants", "Direct station access"],
            safety_notes: &["Mind the crowds", "Watch for lost children", "Walk hand in hand"],
            estimated_duration: "1-3 hours",
            cost: Cost::Free,
            coordinates: Some(Coordinates::new(35.6814, 139.7671)),
            map_url: None,
            temperature_exempt: false,
        },
        PlaygroundVenue {
            id: "winter-skiing-1",
            name: "Karuizawa Prince Snow Resort",
            official_name: "Karuizawa Prince Hotel Ski Resort",
            category: VenueCategory::Adventure,
            description: "A family ski resort within easy reach of Kanto, with reliable artificial snow.",
            weather_suitability: WeatherSuitability::new(7, 8, 0, 10),
            age_groups: OLDER,
            features: &["Kids' park", "Ski rental", "Ski school", "Restaurant", "Hotel"],
            safety_notes: &["Helmet recommended", "Use children's harness", "Dress warmly"],
            estimated_duration: "4-8 hours",
            cost: Cost::High,
            coordinates: Some(Coordinates::new(36.3497, 138.5779)),
            map_url: None,
            temperature_exempt: false,
        },
        PlaygroundVenue {
            id: "rainy-craft-1",
            name: "Tokyo Toy Museum",
            official_name: "Tokyo Toy Museum",
            category: VenueCategory::Educational,
            description: "A museum of wooden toys with hands-on craft sessions, fun all day even when it rains.",
            weather_suitability: WeatherSuitability::new(3, 5, 10, 7),
            age_groups: ALL_AGES,
            features: &["Wooden toys", "Craft workshops", "Mechanical toy exhibits", "Toy studio", "Museum shop"],
            safety_notes: &["Socks required", "Adult must accompany", "Beware of small parts"],
            estimated_duration: "2-4 hours",
            cost: Cost::Low,
            coordinates: Some(Coordinates::new(35.6937, 139.7064)),
            map_url: None,
            temperature_exempt: false,
        },
        PlaygroundVenue {
            id: "outdoor-park-2",
            name: "Yoyogi Park",
            official_name: "Yoyogi Park",
            category: VenueCategory::Outdoor,
            description: "A leafy park in central Tokyo, popular for its wide lawns and cycling course.",
            weather_suitability: WeatherSuitability::new(9, 8, 2, 4),
            age_groups: ALL_AGES,
            features: &["Cycling", "Lawn plaza", "Fountain", "Dog run", "Kiosk"],
            safety_notes: &["Watch for bicycles", "Mind the crowds", "Lost child precautions"],
            estimated_duration: "2-4 hours",
            cost: Cost::Free,
            coordinates: Some(Coordinates::new(35.6720, 139.6943)),
            map_url: None,
            temperature_exempt: false,
        },
        PlaygroundVenue {
            id: "outdoor-park-3",
            name: "Inokashira Park",
            official_name: "Inokashira Onshi Park",
            category: VenueCategory::Outdoor,
            description: "A park famous for rowing boats on the pond and cherry blossoms, with a small zoo.",
            weather_suitability: WeatherSuitability::new(9, 8, 3, 4),
            age_groups: ALL_AGES,
            features: &["Boats", "Zoo", "Play equipment", "Cherry trees", "Cafe"],
            safety_notes: &["Careful near the pond", "Zoo admission fee", "Lost child precautions when busy"],
            estimated_duration: "3-5 hours",
            cost: Cost::Low,
            coordinates: Some(Coordinates::new(35.7009, 139.5703)),
            map_url: None,
            temperature_exempt: false,
        },
        PlaygroundVenue {
            id: "outdoor-park-4",
            name: "Kinuta Park",
            official_name: "Kinuta Park",
            category: VenueCategory::Outdoor,
            description: "A large park in Setagaya for cycling and playing on the grass.",
            weather_suitability: WeatherSuitability::new(9, 8, 2, 4),
            age_groups: ALL_AGES,
            features: &["Huge lawn", "Cycling", "Athletic course", "Next to an art museum"],
            safety_notes: &["Check bicycle rental", "Sun protection on the lawn"],
            estimated_duration: "2-4 hours",
            cost: Cost::Free,
            coordinates: Some(Coordinates::new(35.6283, 139.6267)),
            map_url: None,
            temperature_exempt: false,
        },
        PlaygroundVenue {
            id: "outdoor-park-5",
            name: "Hikarigaoka Park",
            official_name: "Hikarigaoka Park",
            category: VenueCategory::Outdoor,
            description: "A large park in Nerima with big play structures and a barbecue area.",
            weather_suitability: WeatherSuitability::new(9, 8, 2, 4),
            age_groups: ALL_AGES,
            features: &["Large combination play structure", "Barbecue area", "Lawn", "Tennis courts"],
            safety_notes: &["Check play equipment safety", "Barbecue needs a booking"],
            estimated_duration: "3-6 hours",
            cost: Cost::Free,
            coordinates: Some(Coordinates::new(35.7628, 139.6264)),
            map_url: None,
            temperature_exempt: false,
        },
        PlaygroundVenue {
            id: "indoor-play-2",
            name: "ANEBY TRIM PARK",
            official_name: "ANEBY TRIM PARK Odaiba",
            category: VenueCategory::Indoor,
            description: "A large indoor play facility equipped with European play structures.",
            weather_suitability: WeatherSuitability::new(6, 9, 10, 10),
            age_groups: ALL_AGES,
            features: &["European play equipment", "Trampolines", "Climbing", "Cafe"],
            safety_notes: &["Socks required", "Adult must accompany", "Check time limits"],
            estimated_duration: "2-3 hours",
            cost: Cost::High,
            coordinates: Some(Coordinates::new(35.6256, 139.7756)),
            map_url: None,
            temperature_exempt: false,
        },
        PlaygroundVenue {
            id: "indoor-play-3",
            name: "KidZania Tokyo",
            official_name: "KidZania Tokyo",
            category: VenueCategory::Educational,
            description: "A job-experience theme park for children with over 90 professions to try.",
            weather_suitability: WeatherSuitability::new(7, 9, 10, 10),
            age_groups: OLDER,
            features: &["Job experiences", "KidZo currency", "Realistic facilities", "Photo spots"],
            safety_notes: &["Advance booking required", "Be on time", "Wear a name tag"],
            estimated_duration: "4-6 hours",
            cost: Cost::High,
            coordinates: Some(Coordinates::new(35.6447, 139.7961)),
            map_url: None,
            temperature_exempt: false,
        },
        PlaygroundVenue {
            id: "water-park-2",
            name: "Oedo Onsen Monogatari",
            official_name: "Oedo Onsen Monogatari Odaiba",
            category: VenueCategory::Water,
            description: "An Edo-period themed hot spring park with a festival street for children.",
            weather_suitability: WeatherSuitability::new(7, 8, 9, 10),
            age_groups: ALL_AGES,
            features: &["Hot springs", "Festival stalls", "Foot bath", "Restaurants", "Yukata rental"],
            safety_notes: &["Bath etiquette", "Slippery floors", "Stay hydrated"],
            estimated_duration: "3-5 hours",
            cost: Cost::Medium,
            coordinates: Some(Coordinates::new(35.6167, 139.7811)),
            map_url: None,
            temperature_exempt: true,
        },
        PlaygroundVenue {
            id: "water-park-3",
            name: "Toshimaen",
            official_name: "Toshimaen Pool",
            category: VenueCategory::Water,
            description: "An amusement park with many pools and thrill rides.",
            weather_suitability: WeatherSuitability::new(10, 7, 1, 0),
            age_groups: OLDER,
            features: &["Wave pool", "Lazy river", "Water slides", "Toddler pool"],
            safety_notes: &["Swimwear required", "Float rental", "Sun protection"],
            estimated_duration: "4-8 hours",
            cost: Cost::High,
            coordinates: Some(Coordinates::new(35.7389, 139.6539)),
            map_url: None,
            temperature_exempt: false,
        },
        PlaygroundVenue {
            id: "educational-2",
            name: "National Museum of Nature and Science",
            official_name: "National Museum of Nature and Science",
            category: VenueCategory::Educational,
            description: "A comprehensive museum with dinosaur skeletons and science experiments.",
            weather_suitability: WeatherSuitability::new(7, 9, 10, 10),
            age_groups: OLDER,
            features: &["Dinosaur exhibits", "Science experiments", "Planetarium", "Theatre"],
            safety_notes: &["No running inside", "Do not touch exhibits", "Lost child precautions"],
            estimated_duration: "3-5 hours",
            cost: Cost::Low,
            coordinates: Some(Coordinates::new(35.7188, 139.7756)),
            map_url: None,
            temperature_exempt: false,
        },
        PlaygroundVenue {
            id: "educational-3",
            name: "Miraikan",
            official_name: "National Museum of Emerging Science and Innovation",
            category: VenueCategory::Educational,
            description: "A future-facing museum for experiencing the latest science and technology.",
            weather_suitability: WeatherSuitability::new(7, 9, 10, 10),
            age_groups: OLDER,
            features: &["Robots", "Space exhibits", "Interactive displays", "Planetarium"],
            safety_notes: &["Check hands-on corner rules", "Entry limits when crowded", "Booking recommended"],
            estimated_duration: "3-4 hours",
            cost: Cost::Medium,
            coordinates: Some(Coordinates::new(35.6197, 139.7756)),
            map_url: None,
            temperature_exempt: false,
        },
        PlaygroundVenue {
            id: "covered-amusement-1",
            name: "Round1",
            official_name: "Round1 Stadium Odaiba",
            category: VenueCategory::Covered,
            description: "An all-round amusement centre with bowling, karaoke and games.",
            weather_suitability: WeatherSuitability::new(6, 8, 9, 9),
            age_groups: OLDER,
            features: &["Bowling", "Karaoke", "Arcade games", "Spocha sports zone"],
            safety_notes: &["Change into venue shoes", "Limit game time", "Check prices"],
            estimated_duration: "2-4 hours",
            cost: Cost::Medium,
            coordinates: Some(Coordinates::new(35.6267, 139.7822)),
            map_url: None,
            temperature_exempt: false,
        },
        PlaygroundVenue {
            id: "covered-mall-2",
            name: "DiverCity Tokyo",
            official_name: "DiverCity Tokyo Plaza",
            category: VenueCategory::Covered,
            description: "A shopping mall with The Gundam Base Tokyo and a food court.",
            weather_suitability: WeatherSuitability::new(6, 8, 9, 9),
            age_groups: ALL_AGES,
            features: &["Life-size Gundam statue", "The Gundam Base", "Food court", "Cinema"],
            safety_notes: &["Lost child precautions when busy", "Careful on escalators", "Timed parking"],
            estimated_duration: "2-4 hours",
            cost: Cost::Medium,
            coordinates: Some(Coordinates::new(35.6256, 139.7756)),
            map_url: None,
            temperature_exempt: false,
        },
        PlaygroundVenue {
            id: "educational-zoo-2",
            name: "Tama Zoo",
            official_name: "Tama Zoological Park",
            category: VenueCategory::Educational,
            description: "A zoo where animals live in open, natural enclosures without cages.",
            weather_suitability: WeatherSuitability::new(9, 8, 4, 5),
            age_groups: ALL_AGES,
            features: &["Lion bus", "Insectarium", "Koala house", "Africa zone"],
            safety_notes: &["Many slopes", "Comfortable shoes", "Do not feed the animals"],
            estimated_duration: "4-6 hours",
            cost: Cost::Low,
            coordinates: Some(Coordinates::new(35.6639, 139.4011)),
            map_url: None,
            temperature_exempt: false,
        },
        PlaygroundVenue {
            id: "educational-zoo-3",
            name: "Ueno Zoo",
            official_name: "Ueno Zoological Gardens",
            category: VenueCategory::Educational,
            description: "Japan's oldest zoo in the heart of the city, famous for its pandas.",
            weather_suitability: WeatherSuitability::new(8, 8, 4, 5),
            age_groups: ALL_AGES,
            features: &["Pandas", "Monorail", "Children's zoo", "Reptile and amphibian house"],
            safety_notes: &["Plan for crowds", "Panda viewing reservation", "Lost child precautions"],
            estimated_duration: "3-5 hours",
            cost: Cost::Low,
            coordinates: Some(Coordinates::new(35.7158, 139.7714)),
            map_url: None,
            temperature_exempt: false,
        },
        PlaygroundVenue {
            id: "seasonal-winter-1",
            name: "Tokyo Dome City",
            official_name: "Tokyo Dome City Attractions",
            category: VenueCategory::Covered,
            description: "A city-centre amusement park with indoor and outdoor attractions.",
            weather_suitability: WeatherSuitability::new(8, 8, 7, 8),
            age_groups: ALL_AGES,
            features: &["Ferris wheel", "Roller coaster", "Indoor amusement area", "Spa"],
            safety_notes: &["Check height limits", "Attraction waiting times", "Check ticket types"],
            estimated_duration: "4-8 hours",
            cost: Cost::High,
            coordinates: Some(Coordinates::new(35.7056, 139.7519)),
            map_url: None,
            temperature_exempt: false,
        },
        PlaygroundVenue {
            id: "seasonal-winter-2",
            name: "Ice Skating Rink",
            official_name: "Aqua Rink Chikuba",
            category: VenueCategory::Covered,
            description: "An indoor ice rink with plenty of beginner lessons.",
            weather_suitability: WeatherSuitability::new(5, 7, 9, 10),
            age_groups: OLDER,
            features: &["Skating lessons", "Skate rental", "Cafe", "Spectator seats"],
            safety_notes: &["Dress warmly", "Gloves required", "Watch for falls"],
            estimated_duration: "2-3 hours",
            cost: Cost::Medium,
            coordinates: Some(Coordinates::new(36.0833, 140.0833)),
            map_url: None,
            temperature_exempt: false,
        },
    ]
}
