//! The static fact catalog.
//!
//! A fixed, ordered list of "facts" that were once taught as true and have
//! since been corrected. The catalog is loaded once as a `static` slice and
//! never mutated; every query borrows from it.

use std::fmt;

use serde::Serialize;

/// Subject category for a catalog entry.
///
/// The catalog only uses the named variants; `General` is the fallback for
/// labels the parser does not recognize, so untyped input (e.g. from an API
/// consumer) can never crash the display layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Astronomy,
    Biology,
    Paleontology,
    Health,
    Neuroscience,
    Medicine,
    Chemistry,
    History,
    Genetics,
    Geography,
    /// Neutral fallback category for unrecognized labels.
    General,
}

impl Subject {
    /// All subjects that appear in the catalog (excludes `General`).
    pub const KNOWN: &'static [Subject] = &[
        Subject::Astronomy,
        Subject::Biology,
        Subject::Paleontology,
        Subject::Health,
        Subject::Neuroscience,
        Subject::Medicine,
        Subject::Chemistry,
        Subject::History,
        Subject::Genetics,
        Subject::Geography,
    ];

    /// Parse a subject label. Unknown labels map to [`Subject::General`].
    pub fn parse(label: &str) -> Subject {
        match label.trim() {
            "Astronomy" => Subject::Astronomy,
            "Biology" => Subject::Biology,
            "Paleontology" => Subject::Paleontology,
            "Health" => Subject::Health,
            "Neuroscience" => Subject::Neuroscience,
            "Medicine" => Subject::Medicine,
            "Chemistry" => Subject::Chemistry,
            "History" => Subject::History,
            "Genetics" => Subject::Genetics,
            "Geography" => Subject::Geography,
            _ => Subject::General,
        }
    }

    /// CSS class for the subject badge. `General` maps to the neutral palette.
    pub fn css_class(&self) -> &'static str {
        match self {
            Subject::Astronomy => "astronomy",
            Subject::Biology => "biology",
            Subject::Paleontology => "paleontology",
            Subject::Health => "health",
            Subject::Neuroscience => "neuroscience",
            Subject::Medicine => "medicine",
            Subject::Chemistry => "chemistry",
            Subject::History => "history",
            Subject::Genetics => "genetics",
            Subject::Geography => "geography",
            Subject::General => "general",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Subject::Astronomy => "Astronomy",
            Subject::Biology => "Biology",
            Subject::Paleontology => "Paleontology",
            Subject::Health => "Health",
            Subject::Neuroscience => "Neuroscience",
            Subject::Medicine => "Medicine",
            Subject::Chemistry => "Chemistry",
            Subject::History => "History",
            Subject::Genetics => "Genetics",
            Subject::Geography => "Geography",
            Subject::General => "General",
        };
        write!(f, "{}", label)
    }
}

/// One catalog entry: an outdated claim and its correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FactRecord {
    /// The outdated statement as it was taught.
    pub claim: &'static str,
    /// The updated understanding.
    pub correction: &'static str,
    /// Subject category.
    pub subject: Subject,
    /// Last year the claim was commonly taught as true.
    pub taught_until_year: i32,
    /// Year the correction became recognized.
    ///
    /// Independent of `taught_until_year`: corrections can predate the year
    /// a claim stopped being taught (Brontosaurus was declared invalid in
    /// 1903 and reinstated in 2015), so neither field is derivable from the
    /// other.
    pub changed_year: i32,
}

/// The seed catalog, in original order. Tie-breaking in the eligibility
/// filter relies on this ordering being stable.
pub static CATALOG: &[FactRecord] = &[
    FactRecord {
        claim: "Pluto is the 9th planet in our solar system",
        correction: "Pluto was reclassified as a 'dwarf planet' in 2006",
        subject: Subject::Astronomy,
        taught_until_year: 2006,
        changed_year: 2006,
    },
    FactRecord {
        claim: "There are 4 taste categories: sweet, sour, salty, and bitter",
        correction: "Umami was recognized as the 5th basic taste in the early 2000s",
        subject: Subject::Biology,
        taught_until_year: 2002,
        changed_year: 2002,
    },
    FactRecord {
        claim: "Dinosaurs were cold-blooded reptiles",
        correction: "Evidence suggests many dinosaurs were warm-blooded or mesothermic",
        subject: Subject::Paleontology,
        taught_until_year: 1995,
        changed_year: 1995,
    },
    FactRecord {
        claim: "The food pyramid with 6-11 servings of bread/grains at the base",
        correction: "Updated to MyPlate in 2011, emphasizing vegetables and portion control",
        subject: Subject::Health,
        taught_until_year: 2011,
        changed_year: 2011,
    },
    FactRecord {
        claim: "Humans only use 10% of their brain",
        correction: "Neuroimaging shows we use virtually all of our brain throughout the day",
        subject: Subject::Neuroscience,
        taught_until_year: 2000,
        changed_year: 2000,
    },
    FactRecord {
        claim: "Stress and spicy foods cause stomach ulcers",
        correction: "Most ulcers are caused by H. pylori bacteria (discovered 1982)",
        subject: Subject::Medicine,
        taught_until_year: 1994,
        changed_year: 1994,
    },
    FactRecord {
        claim: "The tongue has distinct taste zones (tongue map)",
        correction: "Taste receptors for all tastes are distributed across the entire tongue",
        subject: Subject::Biology,
        taught_until_year: 2000,
        changed_year: 2000,
    },
    FactRecord {
        claim: "Glass is a slow-moving liquid",
        correction: "Glass is an amorphous solid, not a supercooled liquid",
        subject: Subject::Chemistry,
        taught_until_year: 2008,
        changed_year: 2008,
    },
    FactRecord {
        claim: "There are 9 planets in the solar system",
        correction: "There are 8 planets (Pluto reclassified) but potentially a 9th undiscovered planet",
        subject: Subject::Astronomy,
        taught_until_year: 2006,
        changed_year: 2006,
    },
    FactRecord {
        claim: "Brontosaurus was a distinct dinosaur species",
        correction: "Declared invalid in 1903, then reinstated as valid in 2015!",
        subject: Subject::Paleontology,
        taught_until_year: 1903,
        changed_year: 2015,
    },
    FactRecord {
        claim: "Christopher Columbus discovered America in 1492",
        correction: "Indigenous peoples lived in the Americas for thousands of years; Vikings arrived ~1000 AD",
        subject: Subject::History,
        taught_until_year: 2010,
        changed_year: 2010,
    },
    FactRecord {
        claim: "Humans have 5 senses",
        correction: "Humans have many more senses including proprioception, thermoception, nociception, etc.",
        subject: Subject::Biology,
        taught_until_year: 2005,
        changed_year: 2005,
    },
    FactRecord {
        claim: "Mount Everest is Earth's tallest mountain",
        correction: "Mauna Kea is taller when measured from base to peak (underwater to summit)",
        subject: Subject::Geography,
        taught_until_year: 1990,
        changed_year: 1990,
    },
    FactRecord {
        claim: "DNA is the only hereditary molecule",
        correction: "Epigenetic inheritance and RNA-based inheritance mechanisms also exist",
        subject: Subject::Genetics,
        taught_until_year: 2000,
        changed_year: 2000,
    },
    FactRecord {
        claim: "The Great Wall of China is visible from space",
        correction: "It's not visible from low Earth orbit without aid, contrary to popular belief",
        subject: Subject::Geography,
        taught_until_year: 2003,
        changed_year: 2003,
    },
    FactRecord {
        claim: "Blood is blue when it's deoxygenated",
        correction: "Blood is always red; it appears blue through skin due to light absorption",
        subject: Subject::Biology,
        taught_until_year: 2005,
        changed_year: 2005,
    },
    FactRecord {
        claim: "Different parts of the brain control specific functions exclusively",
        correction: "Brain functions involve complex networks; strict localization is oversimplified",
        subject: Subject::Neuroscience,
        taught_until_year: 2010,
        changed_year: 2010,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn catalog_entries_are_well_formed() {
        assert!(!CATALOG.is_empty());
        for fact in CATALOG {
            assert!(!fact.claim.is_empty());
            assert!(!fact.correction.is_empty());
            assert!(fact.taught_until_year >= 1900);
            assert!(fact.changed_year >= 1900);
        }
    }

    #[test]
    fn catalog_subjects_are_known() {
        for fact in CATALOG {
            assert_ne!(
                fact.subject,
                Subject::General,
                "catalog entries should carry a named subject: {}",
                fact.claim
            );
        }
    }

    #[test]
    fn year_fields_are_independent() {
        // Brontosaurus: correction long after the claim stopped being taught.
        let brontosaurus = CATALOG
            .iter()
            .find(|f| f.claim.contains("Brontosaurus"))
            .unwrap();
        assert_eq!(brontosaurus.taught_until_year, 1903);
        assert_eq!(brontosaurus.changed_year, 2015);
    }

    #[test_case("Astronomy", Subject::Astronomy)]
    #[test_case("Geography", Subject::Geography)]
    #[test_case(" Biology ", Subject::Biology; "trims whitespace")]
    #[test_case("Phrenology", Subject::General; "unknown label falls back")]
    #[test_case("", Subject::General; "empty label falls back")]
    fn parse_subject_labels(label: &str, expected: Subject) {
        assert_eq!(Subject::parse(label), expected);
    }

    #[test]
    fn display_and_parse_agree_for_known_subjects() {
        for subject in Subject::KNOWN {
            assert_eq!(Subject::parse(&subject.to_string()), *subject);
        }
    }

    #[test]
    fn css_classes_are_distinct() {
        let mut classes: Vec<&str> = Subject::KNOWN.iter().map(|s| s.css_class()).collect();
        classes.push(Subject::General.css_class());
        let mut deduped = classes.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(classes.len(), deduped.len());
    }

    #[test]
    fn subject_serializes_snake_case() {
        let json = serde_json::to_string(&Subject::Neuroscience).unwrap();
        assert_eq!(json, "\"neuroscience\"");
    }
}
