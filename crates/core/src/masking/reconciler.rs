//! Entity reconciliation and masking
//!
//! Merges the pattern matcher's and name extractor's outputs into one
//! position-ordered list and rewrites the text right-to-left so that
//! pending (leftward) spans never shift. Overlapping spans are NOT
//! resolved: each replacement executes independently against the current
//! snapshot of the text, which can leave artifacts when spans intersect.
//! That behavior is part of the contract.

use mailsift_domain::EntityMatch;

/// Mask every detected entity in `text`.
///
/// Returns the masked text and the full entity list sorted ascending by
/// span start (stable: ties keep insertion order, structured entities
/// before names).
pub fn mask(
    text: &str,
    structured: Vec<EntityMatch>,
    names: Vec<EntityMatch>,
) -> (String, Vec<EntityMatch>) {
    let mut all_entities = structured;
    all_entities.extend(names);

    // Ascending reading order for the caller.
    all_entities.sort_by_key(|e| e.span.start);

    // Replace right-to-left so earlier substitutions never invalidate the
    // character offsets of spans that are still pending.
    let mut order: Vec<&EntityMatch> = all_entities.iter().collect();
    order.sort_by_key(|e| std::cmp::Reverse(e.span.start));

    let mut masked: Vec<char> = text.chars().collect();
    for entity in order {
        let tag: Vec<char> = entity.classification.mask_tag().chars().collect();
        // A prior overlapping replacement may have consumed part of this
        // span; clamp to the current snapshot instead of panicking.
        let end = entity.span.end.min(masked.len());
        let start = entity.span.start.min(end);
        let _ = masked.splice(start..end, tag);
    }

    (masked.into_iter().collect(), all_entities)
}
