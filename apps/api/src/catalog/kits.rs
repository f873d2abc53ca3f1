use crate::catalog::models::{DrumKit, KitType, SkillLevel, Space};

/// The fixed catalog served by this process.
pub static KITS: &[DrumKit] = &[
    DrumKit {
        id: "roland-td-17kvx2",
        name: "Roland TD-17KVX2",
        kit_type: KitType::Electronic,
        price_min: 1700,
        price_max: 2300,
        space: Space::Apartment,
        genres: &["rock", "metal", "pop", "funk", "jazz"],
        skill: SkillLevel::Intermediate,
        notes: "Solid pads, good module, quiet enough for most apartments with a mat.",
    },
    DrumKit {
        id: "alesis-nitro-max",
        name: "Alesis Nitro Max",
        kit_type: KitType::Electronic,
        price_min: 300,
        price_max: 450,
        space: Space::Apartment,
        genres: &["rock", "pop", "hiphop", "edm"],
        skill: SkillLevel::Beginner,
        notes: "Budget-friendly starter kit, expect compromises in feel/durability.",
    },
    DrumKit {
        id: "yamaha-dtx6k2-x",
        name: "Yamaha DTX6K2-X",
        kit_type: KitType::Electronic,
        price_min: 900,
        price_max: 1300,
        space: Space::Apartment,
        genres: &["rock", "pop", "funk", "jazz"],
        skill: SkillLevel::Intermediate,
        notes: "Strong sounds and training features; pad feel is preference-dependent.",
    },
    DrumKit {
        id: "yamaha-stage-custom-birch",
        name: "Yamaha Stage Custom Birch",
        kit_type: KitType::Acoustic,
        price_min: 750,
        price_max: 1100,
        space: Space::House,
        genres: &["rock", "pop", "funk", "jazz", "country"],
        skill: SkillLevel::Beginner,
        notes: "Reliable entry acoustic kit; cymbals/hardware may be extra depending on bundle.",
    },
    DrumKit {
        id: "tama-imperialstar",
        name: "Tama Imperialstar",
        kit_type: KitType::Acoustic,
        price_min: 700,
        price_max: 1100,
        space: Space::House,
        genres: &["rock", "metal", "pop"],
        skill: SkillLevel::Beginner,
        notes: "Often sold as complete packages; good value, not subtle.",
    },
    DrumKit {
        id: "gretsch-catalina-club",
        name: "Gretsch Catalina Club",
        kit_type: KitType::Acoustic,
        price_min: 800,
        price_max: 1200,
        space: Space::House,
        genres: &["jazz", "funk", "pop", "rock"],
        skill: SkillLevel::Intermediate,
        notes: "Smaller shells, easier in tight spaces, still loud like any acoustic kit.",
    },
];

/// Every genre tag in the catalog, in order of first appearance.
pub fn known_genres(catalog: &[DrumKit]) -> Vec<&'static str> {
    let mut genres: Vec<&'static str> = Vec::new();
    for genre in catalog.iter().flat_map(|kit| kit.genres.iter().copied()) {
        if !genres.contains(&genre) {
            genres.push(genre);
        }
    }
    genres
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<&str> = KITS.iter().map(|k| k.id).collect();
        assert_eq!(ids.len(), KITS.len());
    }

    #[test]
    fn test_catalog_entries_are_well_formed() {
        for kit in KITS {
            assert!(kit.price_min <= kit.price_max, "{} has inverted prices", kit.id);
            assert!(!kit.genres.is_empty(), "{} has no genres", kit.id);
            assert!(
                kit.genres.iter().all(|g| *g == g.to_lowercase()),
                "{} has non-lowercase genre tags",
                kit.id
            );
        }
    }

    #[test]
    fn test_known_genres_deduplicates_in_order() {
        let genres = known_genres(KITS);
        assert_eq!(&genres[..5], &["rock", "metal", "pop", "funk", "jazz"]);
        assert!(genres.contains(&"hiphop"));
        assert!(genres.contains(&"country"));
        let unique: HashSet<&str> = genres.iter().copied().collect();
        assert_eq!(unique.len(), genres.len());
    }

    #[test]
    fn test_known_genres_of_empty_catalog() {
        assert!(known_genres(&[]).is_empty());
    }
}
