//! Asset aggregation types — asset documents with hardcoded valuations
//! and the derived discovered-asset rows.

/// One uploadable asset-class document with a fixed demo valuation.
#[derive(Debug, Clone)]
pub struct AssetDocument {
    pub id: String,
    pub name: String,
    pub description: String,
    pub uploaded: bool,
    /// Estimated value in whole Singapore dollars.
    pub value: u64,
}

/// A normalized estate-value entry, produced either from an uploaded
/// asset document (keyed by the document id) or from a bank reply
/// (keyed `bank-<bank id>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredAsset {
    pub id: String,
    pub institution: String,
    pub account_type: String,
    pub value: u64,
}

/// The fixed asset-document catalog.
pub fn seed_asset_documents() -> Vec<AssetDocument> {
    vec![
        AssetDocument {
            id: "bank-statement".into(),
            name: "Bank Statements".into(),
            description: "Statements from any known bank accounts".into(),
            uploaded: false,
            value: 45_000,
        },
        AssetDocument {
            id: "insurance-plan".into(),
            name: "Insurance Plans".into(),
            description: "Life insurance, health insurance policies".into(),
            uploaded: false,
            value: 150_000,
        },
        AssetDocument {
            id: "property-lease".into(),
            name: "Private Property Lease".into(),
            description: "Property ownership or lease documents".into(),
            uploaded: false,
            value: 850_000,
        },
        AssetDocument {
            id: "vehicle-registration".into(),
            name: "Vehicle Registration".into(),
            description: "Car or motorcycle registration documents".into(),
            uploaded: false,
            value: 35_000,
        },
    ]
}

/// Presentation label tables for document-sourced discovered assets.
/// Unknown ids fall back to the document's own name at the call site.
pub fn institution_label(doc_id: &str) -> Option<&'static str> {
    match doc_id {
        "bank-statement" => Some("Various Banks"),
        "insurance-plan" => Some("Insurance Provider"),
        "property-lease" => Some("HDB/Private"),
        "vehicle-registration" => Some("LTA"),
        _ => None,
    }
}

pub fn account_type_label(doc_id: &str) -> Option<&'static str> {
    match doc_id {
        "bank-statement" => Some("Bank Account"),
        "insurance-plan" => Some("Life Insurance Policy"),
        "property-lease" => Some("Property"),
        "vehicle-registration" => Some("Vehicle"),
        _ => None,
    }
}
