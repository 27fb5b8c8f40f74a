//! Document schemas (tariff and contract of an account).

use serde::{Deserialize, Serialize};

/// A document: where it lives and its (base64) content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub url: String,
    pub document: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetTariffDocumentResponse {
    pub tariff: Document,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetContractDocumentResponse {
    pub contract: Document,
}
