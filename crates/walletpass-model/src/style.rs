//! Pass style variants and their field collections.
//!
//! A descriptor carries exactly one style out of a closed set of five. The
//! style determines the JSON key its payload serializes under and shares the
//! same five-collection field shape across all variants.

use crate::fields::Field;
use serde::{Deserialize, Serialize};

/// Transit mode shown on a boarding pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitType {
    #[default]
    #[serde(rename = "PKTransitTypeAir")]
    Air,
    #[serde(rename = "PKTransitTypeTrain")]
    Train,
    #[serde(rename = "PKTransitTypeBus")]
    Bus,
    #[serde(rename = "PKTransitTypeBoat")]
    Boat,
    #[serde(rename = "PKTransitTypeGeneric")]
    Generic,
}

/// The five ordered field collections shared by every pass style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSet {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub header_fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub primary_fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secondary_fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub back_fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub auxiliary_fields: Vec<Field>,
}

impl FieldSet {
    pub fn add_header_field(&mut self, field: Field) {
        self.header_fields.push(field);
    }

    pub fn add_primary_field(&mut self, field: Field) {
        self.primary_fields.push(field);
    }

    pub fn add_secondary_field(&mut self, field: Field) {
        self.secondary_fields.push(field);
    }

    pub fn add_back_field(&mut self, field: Field) {
        self.back_fields.push(field);
    }

    pub fn add_auxiliary_field(&mut self, field: Field) {
        self.auxiliary_fields.push(field);
    }
}

/// Boarding pass payload: the shared field collections plus a transit mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardingPass {
    #[serde(default)]
    pub transit_type: TransitType,
    #[serde(flatten)]
    pub fields: FieldSet,
}

/// The category payload of a pass: one of five mutually exclusive variants.
#[derive(Debug, Clone, PartialEq)]
pub enum PassStyle {
    BoardingPass(BoardingPass),
    Coupon(FieldSet),
    EventTicket(FieldSet),
    Generic(FieldSet),
    StoreCard(FieldSet),
}

impl PassStyle {
    /// JSON key this variant serializes under.
    pub fn key(&self) -> &'static str {
        match self {
            Self::BoardingPass(_) => "boardingPass",
            Self::Coupon(_) => "coupon",
            Self::EventTicket(_) => "eventTicket",
            Self::Generic(_) => "generic",
            Self::StoreCard(_) => "storeCard",
        }
    }

    /// The variant's field collections.
    pub fn fields(&self) -> &FieldSet {
        match self {
            Self::BoardingPass(boarding) => &boarding.fields,
            Self::Coupon(fields)
            | Self::EventTicket(fields)
            | Self::Generic(fields)
            | Self::StoreCard(fields) => fields,
        }
    }

    pub fn fields_mut(&mut self) -> &mut FieldSet {
        match self {
            Self::BoardingPass(boarding) => &mut boarding.fields,
            Self::Coupon(fields)
            | Self::EventTicket(fields)
            | Self::Generic(fields)
            | Self::StoreCard(fields) => fields,
        }
    }

    /// Empty boarding pass payload (air transit).
    pub fn boarding_pass() -> Self {
        Self::BoardingPass(BoardingPass::default())
    }

    /// Empty coupon payload.
    pub fn coupon() -> Self {
        Self::Coupon(FieldSet::default())
    }

    /// Empty event ticket payload.
    pub fn event_ticket() -> Self {
        Self::EventTicket(FieldSet::default())
    }

    /// Empty generic payload.
    pub fn generic() -> Self {
        Self::Generic(FieldSet::default())
    }

    /// Empty store card payload.
    pub fn store_card() -> Self {
        Self::StoreCard(FieldSet::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::Field;

    #[test]
    fn field_set_collections_keep_insertion_order() {
        let mut fields = FieldSet::default();
        fields.add_back_field(Field::new("first", "1"));
        fields.add_back_field(Field::new("second", "2"));
        assert_eq!(fields.back_fields[0].key, "first");
        assert_eq!(fields.back_fields[1].key, "second");
    }

    #[test]
    fn empty_collections_are_omitted() {
        let json = serde_json::to_value(FieldSet::default()).unwrap();
        assert!(json.as_object().unwrap().is_empty());
    }

    #[test]
    fn boarding_pass_flattens_fields() {
        let mut boarding = BoardingPass {
            transit_type: TransitType::Train,
            ..BoardingPass::default()
        };
        boarding.fields.add_primary_field(Field::new("origin", "AMS"));
        let json = serde_json::to_value(&boarding).unwrap();
        assert_eq!(json["transitType"], "PKTransitTypeTrain");
        assert_eq!(json["primaryFields"][0]["key"], "origin");
    }

    #[test]
    fn style_keys() {
        assert_eq!(PassStyle::boarding_pass().key(), "boardingPass");
        assert_eq!(PassStyle::coupon().key(), "coupon");
        assert_eq!(PassStyle::event_ticket().key(), "eventTicket");
        assert_eq!(PassStyle::generic().key(), "generic");
        assert_eq!(PassStyle::store_card().key(), "storeCard");
    }
}
