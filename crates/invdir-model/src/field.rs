//! The closed set of output fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A field of the consolidated investor record.
///
/// Declaration order is the order fields appear in a serialized record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    Name,
    Type,
    Geography,
    City,
    Stage,
    Focus,
    Email,
    Linkedin,
    Website,
    TicketSize,
    Description,
    Notes,
    Portfolio,
    ContactPerson,
    Phone,
    /// Identifier of the batch the record came from.
    Source,
    /// Geography label of the batch the record came from.
    SourceGeography,
}

impl CanonicalField {
    /// Every field, in declaration order.
    pub const ALL: [CanonicalField; 17] = [
        Self::Name,
        Self::Type,
        Self::Geography,
        Self::City,
        Self::Stage,
        Self::Focus,
        Self::Email,
        Self::Linkedin,
        Self::Website,
        Self::TicketSize,
        Self::Description,
        Self::Notes,
        Self::Portfolio,
        Self::ContactPerson,
        Self::Phone,
        Self::Source,
        Self::SourceGeography,
    ];

    /// The serialized field name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::Geography => "geography",
            Self::City => "city",
            Self::Stage => "stage",
            Self::Focus => "focus",
            Self::Email => "email",
            Self::Linkedin => "linkedin",
            Self::Website => "website",
            Self::TicketSize => "ticket_size",
            Self::Description => "description",
            Self::Notes => "notes",
            Self::Portfolio => "portfolio",
            Self::ContactPerson => "contact_person",
            Self::Phone => "phone",
            Self::Source => "source",
            Self::SourceGeography => "source_geography",
        }
    }

    /// Looks a field up by its serialized name (exact match).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }

    /// Provenance fields are written by the tagger, never by a source column.
    pub fn is_provenance(self) -> bool {
        matches!(self, Self::Source | Self::SourceGeography)
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_serde() {
        for field in CanonicalField::ALL {
            let json = serde_json::to_string(&field).unwrap();
            assert_eq!(json, format!("\"{}\"", field.as_str()));
            assert_eq!(CanonicalField::from_name(field.as_str()), Some(field));
        }
    }

    #[test]
    fn all_is_sorted() {
        let mut sorted = CanonicalField::ALL;
        sorted.sort();
        assert_eq!(sorted, CanonicalField::ALL);
    }

    #[test]
    fn provenance_fields() {
        let provenance: Vec<_> = CanonicalField::ALL
            .into_iter()
            .filter(|f| f.is_provenance())
            .collect();
        assert_eq!(
            provenance,
            vec![CanonicalField::Source, CanonicalField::SourceGeography]
        );
    }

    #[test]
    fn unknown_name() {
        assert_eq!(CanonicalField::from_name("Name"), None);
        assert_eq!(CanonicalField::from_name("title"), None);
    }
}
