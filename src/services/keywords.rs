// src/services/keywords.rs
// DOCUMENTATION: Search vocabulary
// PURPOSE: Keywords queried around every location, in query order

/// Keywords searched for each location; each doubles as the row category
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "non-profit",
    "airport",
    "amusement_park",
    "aquarium",
    "art_gallery",
    "bowling_alley",
    "campground",
    "church",
    "church_of_the_nazarene",
    "city_hall",
    "fire_station",
    "fitness",
    "garden",
    "hospital",
    "library",
    "local_government_office",
    "monument",
    "mosque",
    "movie_theater",
    "museum",
    "night_club",
    "park",
    "police",
    "primary_school",
    "rv_park",
    "school",
    "secondary_school",
    "shelter",
    "stadium",
    "storage",
    "synagogue",
    "thrift_store",
    "tourist_attraction",
    "university",
    "zoo",
];
