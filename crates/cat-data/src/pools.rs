//! Fixed reference pools for cat names and breeds.
//!
//! Generated records only ever carry values from these arrays.

/// Names a generated cat may carry.
pub const CAT_NAMES: [&str; 30] = [
    "Whiskers", "Luna", "Bella", "Lucy", "Oliver", "Leo", "Milo", "Charlie", "Simba", "Max",
    "Jasper", "Shadow", "Coco", "Smokey", "Mittens", "Pumpkin", "Nala", "Biscuit", "Paws",
    "Fluffy", "Snowball", "Tiger", "Pepper", "Ginger", "Felix", "Lucky", "Oreo", "Boots",
    "Daisy", "Cinnamon",
];

/// Breeds a generated cat may carry.
pub const CAT_BREEDS: [&str; 18] = [
    "Abyssinian",
    "American Bobtail",
    "American Curl",
    "American Shorthair",
    "American Wirehair",
    "Balinese",
    "Bengal",
    "Birman",
    "Bombay",
    "British Shorthair",
    "Burmese",
    "Burmilla",
    "Chartreux",
    "Chinese Li Hua",
    "Colorpoint Shorthair",
    "Cornish Rex",
    "Cymric",
    "Devon Rex",
];
