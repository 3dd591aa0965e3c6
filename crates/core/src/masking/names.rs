//! Person-name extraction
//!
//! Two independent sub-extractors whose results are concatenated without
//! deduplication:
//!
//! 1. NER: the language-appropriate [`NameModel`] proposes person surface
//!    texts; names with fewer than two tokens are discarded and spans are
//!    recovered by locating the *first* occurrence of the surface text in
//!    the input. A name string that repeats earlier in the text for
//!    unrelated reasons therefore anchors at that earlier occurrence.
//! 2. Introduction phrases: "my name is X" style templates for both
//!    languages, run over every input. Only the captured name group is
//!    reported.

use std::sync::Arc;

use mailsift_domain::{EntityKind, EntityMatch, Language, Span};
use once_cell::sync::Lazy;
use regex::Regex;

use super::char_span;
use super::ports::NameModel;

/// Introduction-phrase templates. Case-insensitive to match greetings at
/// sentence starts; the capture group is the two-token name itself.
static INTRO_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)(?:my name is|I am|I'm|This is) (\p{Lu}\p{Ll}+ \p{Lu}\p{Ll}+)")
            .expect("english intro pattern should compile"),
        Regex::new(r"(?i)(?:mein Name ist|Ich bin|das ist) (\p{Lu}\p{Ll}+ \p{Lu}\p{Ll}+)")
            .expect("german intro pattern should compile"),
    ]
});

/// Dependency container for the per-language NER models.
///
/// Constructed once at startup and shared read-only across requests; the
/// models never change after construction.
#[derive(Clone)]
pub struct NameExtractor {
    english: Arc<dyn NameModel>,
    german: Arc<dyn NameModel>,
}

impl NameExtractor {
    pub fn new(english: Arc<dyn NameModel>, german: Arc<dyn NameModel>) -> Self {
        Self { english, german }
    }

    /// Detect person names in `text`, classified `full_name`.
    ///
    /// The whole text is treated as German if the language heuristic says
    /// so, English otherwise; the introduction-phrase templates of both
    /// languages always run. Absence of names yields an empty vector.
    pub fn find_person_names(&self, text: &str) -> Vec<EntityMatch> {
        let model = match Language::of_text(text) {
            Language::German => &self.german,
            Language::English => &self.english,
        };

        let mut entities = self.ner_names(model.as_ref(), text);
        entities.extend(intro_phrase_names(text));
        entities
    }

    fn ner_names(&self, model: &dyn NameModel, text: &str) -> Vec<EntityMatch> {
        let mut entities = Vec::new();

        for name in model.person_names(text) {
            // Single first names are too noisy to mask.
            if name.split_whitespace().count() < 2 {
                continue;
            }
            // First occurrence wins; a model hallucinating text that is not
            // present verbatim contributes nothing.
            if let Some(byte_start) = text.find(&name) {
                let (start, end) = char_span(text, byte_start, byte_start + name.len());
                entities.push(EntityMatch::new(Span::new(start, end), EntityKind::FullName, name));
            }
        }

        entities
    }
}

/// Apply the introduction-phrase templates, reporting only the captured
/// name group (the greeting prefix is not part of the entity).
fn intro_phrase_names(text: &str) -> Vec<EntityMatch> {
    let mut entities = Vec::new();

    for pattern in INTRO_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            if let Some(name) = caps.get(1) {
                let (start, end) = char_span(text, name.start(), name.end());
                entities.push(EntityMatch::new(
                    Span::new(start, end),
                    EntityKind::FullName,
                    name.as_str(),
                ));
            }
        }
    }

    entities
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Model stub returning a fixed list of names regardless of input.
    struct FixedModel(Vec<&'static str>);

    impl NameModel for FixedModel {
        fn person_names(&self, _text: &str) -> Vec<String> {
            self.0.iter().map(|s| s.to_string()).collect()
        }
    }

    fn extractor(en: Vec<&'static str>, de: Vec<&'static str>) -> NameExtractor {
        NameExtractor::new(Arc::new(FixedModel(en)), Arc::new(FixedModel(de)))
    }

    #[test]
    fn ner_names_get_first_occurrence_spans() {
        let ex = extractor(vec!["Jane Smith"], vec![]);
        let text = "Regards, Jane Smith";
        let entities = ex.find_person_names(text);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].classification, EntityKind::FullName);
        assert_eq!(entities[0].span, Span::new(9, 19));
        assert_eq!(entities[0].value, "Jane Smith");
    }

    #[test]
    fn single_token_names_are_filtered() {
        let ex = extractor(vec!["Jane"], vec![]);
        assert!(ex.find_person_names("Hello from Jane").is_empty());
    }

    #[test]
    fn names_absent_from_text_are_dropped() {
        let ex = extractor(vec!["Ghost Writer"], vec![]);
        assert!(ex.find_person_names("no such person here").is_empty());
    }

    #[test]
    fn repeated_name_anchors_at_first_occurrence() {
        let ex = extractor(vec!["Jane Smith"], vec![]);
        let text = "Jane Smith mentioned that Jane Smith will attend";
        let entities = ex.find_person_names(text);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].span, Span::new(0, 10));
    }

    #[test]
    fn intro_phrase_captures_only_the_name() {
        let ex = extractor(vec![], vec![]);
        let text = "My name is Jane Smith, CVV: 1234";
        let entities = ex.find_person_names(text);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].value, "Jane Smith");
        assert_eq!(entities[0].span, Span::new(11, 21));
    }

    #[test]
    fn german_text_selects_german_model() {
        let ex = extractor(vec![], vec!["Anna Müller"]);
        let text = "Grüße! Mein Name ist Anna Müller und ich habe eine Frage.";
        let entities = ex.find_person_names(text);
        // NER hit plus the german intro template: concatenated, not deduped.
        assert!(entities.iter().any(|e| e.value == "Anna Müller"));
        let ner = &entities[0];
        let chars: Vec<char> = text.chars().collect();
        let slice: String = chars[ner.span.start..ner.span.end].iter().collect();
        assert_eq!(slice, "Anna Müller");
    }

    #[test]
    fn both_intro_template_sets_always_run() {
        let ex = extractor(vec![], vec![]);
        // English text with a German introduction phrase still matches.
        let entities = ex.find_person_names("mein Name ist Hans Gruber");
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].value, "Hans Gruber");
    }

    #[test]
    fn no_names_yields_empty() {
        let ex = extractor(vec![], vec![]);
        assert!(ex.find_person_names("nothing to see").is_empty());
    }
}
