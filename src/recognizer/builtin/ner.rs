//! Heuristic person and location recognition
//!
//! A lightweight stand-in for statistical NER: honorific-prefixed names,
//! runs of capitalized words, a given-name lexicon, and street-address
//! shapes. Scores reflect how strong each signal is; the capitalized-run
//! heuristic in particular fires on sentence-initial word pairs and is
//! scored accordingly.

use super::compile;
use crate::domain::{tags, EntityType, PiiMatch, Result};
use crate::recognizer::{char_span, Recognizer};
use regex::Regex;

/// Common given names used by the lexicon heuristic
const GIVEN_NAMES: &[&str] = &[
    "Aaron", "Adam", "Alan", "Albert", "Alice", "Amanda", "Amy", "Andrea", "Andrew", "Angela",
    "Anna", "Anthony", "Arthur", "Barbara", "Benjamin", "Betty", "Bob", "Brandon", "Brian",
    "Carl", "Carlos", "Carol", "Carolyn", "Catherine", "Charles", "Christina", "Christine",
    "Christopher", "Cynthia", "Daniel", "David", "Deborah", "Dennis", "Diana", "Diane", "Donald",
    "Donna", "Dorothy", "Douglas", "Edward", "Elizabeth", "Emily", "Emma", "Eric", "Frances",
    "Frank", "Gary", "George", "Gerald", "Gloria", "Grace", "Gregory", "Hannah", "Harold",
    "Harry", "Heather", "Helen", "Henry", "Jack", "Jacob", "James", "Jane", "Janet", "Jason",
    "Jean", "Jeffrey", "Jennifer", "Jeremy", "Jerry", "Jessica", "Joan", "Joe", "John",
    "Jonathan", "Jose", "Joseph", "Joshua", "Joyce", "Juan", "Judith", "Julia", "Julie",
    "Justin", "Karen", "Katherine", "Kathleen", "Keith", "Kelly", "Kenneth", "Kevin",
    "Kimberly", "Larry", "Laura", "Lawrence", "Linda", "Lisa", "Margaret", "Maria", "María",
    "Marie", "Mark", "Martha", "Mary", "Matthew", "Megan", "Melissa", "Michael", "Michelle",
    "Nancy", "Nathan", "Nicholas", "Nicole", "Noah", "Olivia", "Pamela", "Patricia", "Patrick",
    "Paul", "Peter", "Philip", "Rachel", "Ralph", "Raymond", "Rebecca", "Richard", "Robert",
    "Roger", "Ronald", "Rose", "Russell", "Ruth", "Ryan", "Samantha", "Samuel", "Sandra",
    "Sara", "Sarah", "Scott", "Sean", "Sharon", "Shirley", "Sophia", "Stephanie", "Stephen",
    "Steven", "Susan", "Teresa", "Terry", "Thomas", "Timothy", "Tyler", "Victoria", "Vincent",
    "Virginia", "Walter", "Wayne", "William", "Zachary",
];

/// Multi-entity heuristic recognizer emitting `PERSON` and `LOCATION`
pub struct HeuristicNerRecognizer {
    entities: [EntityType; 2],
    titled_name: Regex,
    capitalized_run: Regex,
    capitalized_word: Regex,
    street_address: Regex,
}

impl HeuristicNerRecognizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            entities: [EntityType::new(tags::PERSON), EntityType::new(tags::LOCATION)],
            titled_name: compile(
                tags::PERSON,
                r"\b(?:Mr|Mrs|Ms|Dr|Prof|Miss)\.?\s+([A-Z]\p{Ll}+(?:\s+[A-Z]\p{Ll}+)*)",
            )?,
            capitalized_run: compile(tags::PERSON, r"\b[A-Z]\p{Ll}+(?:\s+[A-Z]\p{Ll}+)+\b")?,
            capitalized_word: compile(tags::PERSON, r"\b[A-Z]\p{Ll}+\b")?,
            street_address: compile(
                tags::LOCATION,
                r"\b\d+(?:\s+[A-Z][A-Za-z]*){1,3}\s+(?:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Drive|Dr|Lane|Ln|Way|Court|Ct)\b",
            )?,
        })
    }

    fn person(&self) -> &EntityType {
        &self.entities[0]
    }

    fn location(&self) -> &EntityType {
        &self.entities[1]
    }
}

impl Recognizer for HeuristicNerRecognizer {
    fn name(&self) -> &str {
        "heuristic_ner_recognizer"
    }

    fn supported_entities(&self) -> &[EntityType] {
        &self.entities
    }

    fn language(&self) -> &str {
        "en"
    }

    fn detect(&self, text: &str) -> Result<Vec<PiiMatch>> {
        let mut matches = Vec::new();

        // Honorific-prefixed names; the span covers the name, not the title.
        for cap in self.titled_name.captures_iter(text) {
            if let Some(name) = cap.get(1) {
                let (start, end) = char_span(text, name.start(), name.end());
                matches.push(PiiMatch::new(self.person().clone(), start, end, 0.85));
            }
        }

        for m in self.capitalized_run.find_iter(text) {
            let (start, end) = char_span(text, m.start(), m.end());
            if matches
                .iter()
                .any(|p: &PiiMatch| p.start <= start && end <= p.end)
            {
                continue;
            }
            matches.push(PiiMatch::new(self.person().clone(), start, end, 0.4));
        }

        // Lexicon hits only count when not already inside a person span.
        for m in self.capitalized_word.find_iter(text) {
            if !GIVEN_NAMES.contains(&m.as_str()) {
                continue;
            }
            let (start, end) = char_span(text, m.start(), m.end());
            if matches
                .iter()
                .any(|p: &PiiMatch| p.start <= start && end <= p.end)
            {
                continue;
            }
            matches.push(PiiMatch::new(self.person().clone(), start, end, 0.7));
        }

        for m in self.street_address.find_iter(text) {
            let (start, end) = char_span(text, m.start(), m.end());
            matches.push(PiiMatch::new(self.location().clone(), start, end, 0.7));
        }

        Ok(matches)
    }
}
