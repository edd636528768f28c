//! Synonym table: normalized column label → canonical field.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use invdir_model::CanonicalField;
use invdir_model::CanonicalField as F;

/// Every recognized column label, already lowercased and trimmed.
///
/// Many labels may share a field; a label appears at most once.
pub const SYNONYMS: &[(&str, CanonicalField)] = &[
    // name
    ("name", F::Name),
    ("investor name", F::Name),
    ("vc name", F::Name),
    ("firm name", F::Name),
    ("company", F::Name),
    ("angel name", F::Name),
    ("company name", F::Name),
    ("fund name", F::Name),
    ("organization", F::Name),
    ("vc firm name", F::Name),
    // type
    ("type", F::Type),
    ("investor type", F::Type),
    ("category", F::Type),
    ("kind", F::Type),
    // geography
    ("geography", F::Geography),
    ("location", F::Geography),
    ("region", F::Geography),
    ("country", F::Geography),
    // city
    ("city", F::City),
    ("hq", F::City),
    ("headquarters", F::City),
    ("global hq", F::City),
    // stage
    ("stage", F::Stage),
    ("investment stage", F::Stage),
    ("funding stage", F::Stage),
    ("stages", F::Stage),
    ("stage of investment", F::Stage),
    // focus
    ("focus", F::Focus),
    ("sector", F::Focus),
    ("industry", F::Focus),
    ("focus area", F::Focus),
    ("verticals", F::Focus),
    ("sectors", F::Focus),
    ("industries", F::Focus),
    ("vertical", F::Focus),
    ("countries of investment", F::Focus),
    // contact channels
    ("email", F::Email),
    ("contact email", F::Email),
    ("e-mail", F::Email),
    ("linkedin", F::Linkedin),
    ("linkedin url", F::Linkedin),
    ("linkedin profile", F::Linkedin),
    ("website", F::Website),
    ("url", F::Website),
    ("web", F::Website),
    ("site", F::Website),
    // deal size
    ("ticket size", F::TicketSize),
    ("check size", F::TicketSize),
    ("investment size", F::TicketSize),
    ("ticket", F::TicketSize),
    ("ticket_size", F::TicketSize),
    // free text
    ("description", F::Description),
    ("about", F::Description),
    ("bio", F::Description),
    ("overview", F::Description),
    ("notes", F::Notes),
    ("portfolio", F::Portfolio),
    // people
    ("contact", F::ContactPerson),
    ("contact name", F::ContactPerson),
    ("partner", F::ContactPerson),
    ("key person", F::ContactPerson),
    ("contact_person", F::ContactPerson),
    ("phone", F::Phone),
    ("mobile", F::Phone),
    ("contact number", F::Phone),
    ("tel", F::Phone),
];

static INDEX: LazyLock<BTreeMap<&'static str, CanonicalField>> =
    LazyLock::new(|| SYNONYMS.iter().copied().collect());

/// Looks up an already-normalized label.
pub(crate) fn lookup(normalized: &str) -> Option<CanonicalField> {
    INDEX.get(normalized).copied()
}

/// Labels that map to `field`, in table order.
pub fn synonyms_for(field: CanonicalField) -> Vec<&'static str> {
    SYNONYMS
        .iter()
        .filter(|(_, target)| *target == field)
        .map(|(label, _)| *label)
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::normalize_label;

    #[test]
    fn labels_are_unique() {
        let mut seen = BTreeSet::new();
        for (label, _) in SYNONYMS {
            assert!(seen.insert(*label), "duplicate synonym: {label}");
        }
        assert_eq!(INDEX.len(), SYNONYMS.len());
    }

    #[test]
    fn labels_are_normalized() {
        for (label, _) in SYNONYMS {
            assert_eq!(&normalize_label(label), label);
        }
    }

    #[test]
    fn every_field_maps_from_its_own_name() {
        for field in CanonicalField::ALL {
            if field.is_provenance() {
                assert!(synonyms_for(field).is_empty());
                continue;
            }
            assert_eq!(lookup(field.as_str()), Some(field), "{field}");
        }
    }
}
