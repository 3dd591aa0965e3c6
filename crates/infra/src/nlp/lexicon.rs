//! Lexicon-based person-name recognition
//!
//! Backs the `NameModel` port with a first-name lexicon plus honorific
//! triggers, one instance per supported language. A capitalized token found
//! in the lexicon (or any capitalized token directly after an honorific)
//! opens a candidate name; following capitalized tokens extend it as the
//! surname part. High precision on its target domain, no external models or
//! runtime downloads.

use std::collections::HashSet;

use mailsift_core::NameModel;
use once_cell::sync::Lazy;

/// Additional capitalized tokens accepted after the trigger token.
const MAX_SURNAME_TOKENS: usize = 2;

static ENGLISH_FIRST_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Thomas",
        "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark", "Donald", "Steven",
        "Paul", "Andrew", "Joshua", "Kenneth", "Kevin", "Brian", "George", "Edward", "Ronald",
        "Timothy", "Jason", "Jeffrey", "Ryan", "Jacob", "Gary", "Nicholas", "Eric", "Jonathan",
        "Stephen", "Larry", "Justin", "Scott", "Brandon", "Mary", "Patricia", "Jennifer", "Linda",
        "Elizabeth", "Barbara", "Susan", "Jessica", "Sarah", "Karen", "Nancy", "Lisa", "Betty",
        "Margaret", "Sandra", "Ashley", "Kimberly", "Emily", "Donna", "Michelle", "Dorothy",
        "Carol", "Amanda", "Melissa", "Deborah", "Stephanie", "Rebecca", "Sharon", "Laura",
        "Cynthia", "Kathleen", "Amy", "Angela", "Shirley", "Anna", "Brenda", "Pamela", "Emma",
        "Nicole", "Helen", "Samantha", "Katherine", "Christine", "Debra", "Rachel", "Jane",
        "Alice", "Grace", "Victoria", "Olivia", "Sophia", "Isabella", "Charlotte", "Henry",
        "Oliver", "Peter", "Samuel", "Benjamin", "Alexander", "Frank",
    ]
    .into_iter()
    .collect()
});

static GERMAN_FIRST_NAMES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "Hans", "Peter", "Wolfgang", "Klaus", "Jürgen", "Dieter", "Manfred", "Uwe", "Günter",
        "Stefan", "Michael", "Thomas", "Andreas", "Frank", "Markus", "Martin", "Matthias",
        "Christian", "Alexander", "Sebastian", "Tobias", "Florian", "Felix", "Lukas", "Jonas",
        "Maximilian", "Moritz", "Leon", "Paul", "Karl", "Heinrich", "Friedrich", "Werner",
        "Helmut", "Gerhard", "Walter", "Horst", "Rainer", "Bernd", "Ursula", "Monika", "Petra",
        "Sabine", "Renate", "Karin", "Brigitte", "Ingrid", "Erika", "Andrea", "Claudia",
        "Susanne", "Birgit", "Gabriele", "Martina", "Angelika", "Heike", "Anja", "Katrin",
        "Stefanie", "Julia", "Anna", "Lena", "Laura", "Sophie", "Marie", "Hannah", "Lisa",
        "Sarah", "Lea", "Johanna", "Katharina", "Franziska", "Christina", "Nicole", "Melanie",
        "Greta", "Clara", "Frieda", "Helga", "Gisela", "Hildegard",
    ]
    .into_iter()
    .collect()
});

static ENGLISH_HONORIFICS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["Mr", "Mrs", "Ms", "Miss", "Dr", "Prof"].into_iter().collect());

static GERMAN_HONORIFICS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["Herr", "Frau", "Dr", "Prof"].into_iter().collect());

/// First-name lexicon plus honorific triggers for one language.
pub struct LexiconNameModel {
    first_names: &'static HashSet<&'static str>,
    honorifics: &'static HashSet<&'static str>,
}

impl LexiconNameModel {
    pub fn english() -> Self {
        Self { first_names: &ENGLISH_FIRST_NAMES, honorifics: &ENGLISH_HONORIFICS }
    }

    pub fn german() -> Self {
        Self { first_names: &GERMAN_FIRST_NAMES, honorifics: &GERMAN_HONORIFICS }
    }

    fn is_honorific(&self, token: &str) -> bool {
        self.honorifics.contains(token)
    }

    fn is_known_first_name(&self, token: &str) -> bool {
        self.first_names.contains(token)
    }
}

impl NameModel for LexiconNameModel {
    fn person_names(&self, text: &str) -> Vec<String> {
        let tokens: Vec<&str> = text.split_whitespace().map(strip_punctuation).collect();
        let mut names = Vec::new();
        let mut i = 0;

        while i < tokens.len() {
            let token = tokens[i];

            // An honorific makes the next capitalized token a name start
            // even when it is not in the lexicon.
            let start = if self.is_honorific(token)
                && tokens.get(i + 1).is_some_and(|t| is_capitalized(t))
            {
                i + 1
            } else if is_capitalized(token) && self.is_known_first_name(token) {
                i
            } else {
                i += 1;
                continue;
            };

            let mut end = start + 1;
            while end < tokens.len()
                && end - start <= MAX_SURNAME_TOKENS
                && is_capitalized(tokens[end])
                && !self.is_honorific(tokens[end])
            {
                end += 1;
            }

            names.push(tokens[start..end].join(" "));
            i = end;
        }

        names
    }
}

/// Capitalized word: uppercase initial, lowercase alphabetic tail.
fn is_capitalized(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => chars.all(|c| c.is_alphabetic() && c.is_lowercase()),
        _ => false,
    }
}

/// Trim leading/trailing punctuation so "Smith," matches as "Smith".
fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}
