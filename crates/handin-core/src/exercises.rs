//! Exercise key → required source files.
//!
//! Flat static table; keys are lowercase and matched after lowercasing input.

use crate::error::HandinError;

/// One exercise resolved from the table. Immutable for a whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseRequest {
    /// Lowercased exercise key as typed by the user.
    pub key: String,
    /// File stems in upload order (suffix is added by the submission step).
    pub files: Vec<String>,
}

impl ExerciseRequest {
    /// Tag sent as the `h` field; see [`upload_tag`].
    pub fn upload_tag(&self) -> String {
        upload_tag(&self.key)
    }
}

const DIE_CUP: &[&str] = &["Die", "DieCup"];

static EXERCISES: &[(&str, &[&str])] = &[
    // DieCup
    ("dc1", DIE_CUP),
    ("dc2", DIE_CUP),
    ("dc3-1", DIE_CUP),
    ("dc3-4", DIE_CUP),
    ("dt-2", &["Median", "MedianTest"]),
    // 2016
    ("basketplayer", &["BasketPlayer", "BasketTeam"]),
    ("cow", &["Cow", "DiaryFarm"]),
    ("field-1", &["Field", "Farm"]),
    ("field-2", &["Field", "Farm"]),
    ("goat", &["Goat", "GoatFarm"]),
    ("handballplayer", &["HandballPlayer", "HandballTeam"]),
    ("image", &["Image", "UsbStick"]),
    ("soccerplayer", &["SoccerPlayer", "SoccerTeam"]),
    ("volleyplayer", &["VolleyPlayer", "VolleyTeam"]),
    ("passenger", &["Passenger", "Ferry"]),
    ("picture", &["Picture", "UsbStick"]),
    ("song", &["Song", "DVD"]),
    // 2017
    ("animal", &["Animal", "Zoo"]),
    ("brick-1", &["Brick", "LegoBox"]),
    ("brick-2", &["Brick", "LegoBox"]),
    ("carpet-1", &["Carpet", "Shop"]),
    ("carpet-2", &["Carpet", "Shop"]),
    ("tool-1", &["Tool", "ToolBox"]),
    ("tool-2", &["Tool", "ToolBox"]),
    ("vegetable-1", &["Vegetable", "Shop"]),
    ("vegetable-2", &["Vegetable", "Shop"]),
    ("nail", &["Nail", "Box"]),
    ("screw", &["Screw", "Box"]),
    ("chicken", &["Chicken", "ChickenYard"]),
    ("pigeon", &["Pigeon", "PigeonLoft"]),
    ("penguin", &["Penguin", "Group"]),
    // 2018
    ("ferry", &["Ferry", "Harbour"]),
    ("train-1", &["Train", "TrainStation"]),
    ("train-2", &["Train", "TrainStation"]),
    ("bus-1", &["Bus", "BusStation"]),
    ("bus-2", &["Bus", "BusStation"]),
    ("flight", &["Flight", "Airport"]),
    // 2019
    ("chapter", &["Chapter", "Book"]),
    ("cheese", &["Cheese", "Cooler"]),
    ("drink", &["Drink", "Refrigerator"]),
    ("flower", &["Flower", "Bouqet"]),
    ("food", &["Food", "DeepFreezer"]),
    ("fruit", &["Fruit", "Basket"]),
    ("pearl", &["Pearl", "Necklace"]),
    ("photo", &["Photo", "Album"]),
    // Videos
    ("phone", &["Phone", "WebShop"]),
    ("pirate", &["Pirate", "PirateShip"]),
    ("car", &["Car", "PirateShip"]),
    ("turtle", &["Turtle", "Zoo"]),
    // Hand-ins
    ("musician", &["Musician", "Band"]),
    ("racer", &["Racer", "FormulaOne"]),
    ("dog", &["Dog", "Kennel"]),
    ("boat", &["Boat", "Marina"]),
    ("biker", &["Biker", "MotorcycleClub"]),
    ("film", &["Film", "FilmCollection"]),
];

/// Like [`lookup`], but an unknown key is an error.
pub fn require(key: &str) -> Result<ExerciseRequest, HandinError> {
    lookup(key).ok_or_else(|| HandinError::UnknownExercise(key.to_string()))
}

/// Look up an exercise key (case-insensitive).
pub fn lookup(key: &str) -> Option<ExerciseRequest> {
    let key = key.trim().to_lowercase();
    EXERCISES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, files)| ExerciseRequest {
            files: files.iter().map(|f| f.to_string()).collect(),
            key,
        })
}

/// All known keys with their file stems, in table order.
pub fn all() -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
    EXERCISES.iter().copied()
}

/// Server-side tag for an exercise key. Two legacy keys are renamed by plain
/// substring replacement, exactly as the server expects.
pub fn upload_tag(key: &str) -> String {
    key.replace("dc3-1", "dc3a").replace("dc3-4", "dc3b")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_dice_cup() {
        let req = lookup("dc1").unwrap();
        assert_eq!(req.key, "dc1");
        assert_eq!(req.files, vec!["Die", "DieCup"]);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let req = lookup("  Dc3-1 ").unwrap();
        assert_eq!(req.key, "dc3-1");
        assert_eq!(req.upload_tag(), "dc3a");
    }

    #[test]
    fn lookup_unknown_key() {
        assert!(lookup("dc9").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn require_unknown_key_is_error() {
        let err = require("Nope").unwrap_err();
        assert!(matches!(err, HandinError::UnknownExercise(ref k) if k == "Nope"));
    }

    #[test]
    fn upload_tag_aliases_legacy_keys_only() {
        assert_eq!(upload_tag("dc3-1"), "dc3a");
        assert_eq!(upload_tag("dc3-4"), "dc3b");
        assert_eq!(upload_tag("dc1"), "dc1");
        assert_eq!(upload_tag("dc3-2"), "dc3-2");
    }

    #[test]
    fn table_keys_are_unique_and_lowercase() {
        let keys: Vec<&str> = all().map(|(k, _)| k).collect();
        for (i, k) in keys.iter().enumerate() {
            assert_eq!(*k, k.to_lowercase());
            assert!(!keys[i + 1..].contains(k), "duplicate key {}", k);
        }
    }
}
