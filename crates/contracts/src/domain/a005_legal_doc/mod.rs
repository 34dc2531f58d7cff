pub mod schema;

use serde::{Deserialize, Serialize};

use crate::shared::list::Pagination;
use crate::shared::sentinel::UNSET_STR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegalDocType {
    #[serde(rename = "terms")]
    TermsAndConditions,
    #[serde(rename = "privacy")]
    PrivacyPolicy,
    #[serde(rename = "about")]
    AboutUs,
    #[serde(rename = "faq")]
    Faq,
}

impl LegalDocType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LegalDocType::TermsAndConditions => "terms",
            LegalDocType::PrivacyPolicy => "privacy",
            LegalDocType::AboutUs => "about",
            LegalDocType::Faq => "faq",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LegalDocType::TermsAndConditions => "Terms & Conditions",
            LegalDocType::PrivacyPolicy => "Privacy Policy",
            LegalDocType::AboutUs => "About Us",
            LegalDocType::Faq => "FAQ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalDoc {
    #[serde(rename = "type")]
    pub doc_type: LegalDocType,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Arguments of the legal-docs read.
///
/// `faq_id = "-1"` means "no particular FAQ" and `Pagination::all()` means
/// "unpaged"; both are omitted from the URL rather than sent literally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalDocArgs {
    #[serde(rename = "type")]
    pub doc_type: LegalDocType,
    pub faq_id: String,
    pub pagination: Pagination,
}

impl LegalDocArgs {
    /// A whole document (terms, privacy, about), unpaged
    pub fn document(doc_type: LegalDocType) -> Self {
        Self {
            doc_type,
            faq_id: UNSET_STR.to_string(),
            pagination: Pagination::all(),
        }
    }

    pub fn faq_page(pagination: Pagination) -> Self {
        Self {
            doc_type: LegalDocType::Faq,
            faq_id: UNSET_STR.to_string(),
            pagination,
        }
    }

    pub fn faq(faq_id: impl Into<String>) -> Self {
        Self {
            doc_type: LegalDocType::Faq,
            faq_id: faq_id.into(),
            pagination: Pagination::all(),
        }
    }
}

/// Body of `POST /legal-docs`; document and FAQ writes share it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveLegalDocRequest {
    #[serde(rename = "type")]
    pub doc_type: LegalDocType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faq_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl SaveLegalDocRequest {
    pub fn document(doc_type: LegalDocType, content: String) -> Self {
        Self {
            doc_type,
            faq_id: None,
            content: Some(content),
            question: None,
            answer: None,
        }
    }

    /// `faq_id = None` creates a new FAQ entry
    pub fn faq(faq_id: Option<String>, question: String, answer: String) -> Self {
        Self {
            doc_type: LegalDocType::Faq,
            faq_id,
            content: None,
            question: Some(question),
            answer: Some(answer),
        }
    }
}
