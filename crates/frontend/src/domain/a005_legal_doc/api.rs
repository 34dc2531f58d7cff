use contracts::domain::a005_legal_doc::{Faq, LegalDoc, LegalDocArgs, LegalDocType, SaveLegalDocRequest};
use contracts::shared::list::ListResponse;
use serde_json::Value;

use crate::shared::query::{MutationEndpoint, QueryEndpoint, QueryParams, RequestSpec, Tag};

const LEGAL_DOCS: &str = "/content-moderation/legal-docs";

fn legal_docs_url(args: &LegalDocArgs) -> String {
    QueryParams::new()
        .set("type", args.doc_type.as_str())
        .opt("faqId", args.faq_id.as_str())
        .page(args.pagination)
        .append_to(LEGAL_DOCS)
}

/// FAQ entries: a page of them, or the one named by `faq_id`.
pub struct GetLegalDocs;

impl QueryEndpoint for GetLegalDocs {
    const NAME: &'static str = "getLegalDocs";
    type Args = LegalDocArgs;
    type Output = ListResponse<Faq>;

    fn request(args: &Self::Args) -> RequestSpec {
        RequestSpec::get(legal_docs_url(args))
    }

    fn provides(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::LegalDocs]
    }
}

/// A whole document (terms, privacy, about), unpaged.
pub struct GetLegalDoc;

impl QueryEndpoint for GetLegalDoc {
    const NAME: &'static str = "getLegalDoc";
    type Args = LegalDocType;
    type Output = LegalDoc;

    fn request(doc_type: &Self::Args) -> RequestSpec {
        RequestSpec::get(legal_docs_url(&LegalDocArgs::document(*doc_type)))
    }

    fn provides(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::LegalDocs]
    }
}

pub struct SaveLegalDoc;

impl MutationEndpoint for SaveLegalDoc {
    const NAME: &'static str = "saveLegalDoc";
    type Args = SaveLegalDocRequest;
    type Output = Value;

    fn request(args: &Self::Args) -> RequestSpec {
        RequestSpec::post(LEGAL_DOCS, args)
    }

    fn invalidates(_: &Self::Args) -> Vec<Tag> {
        vec![Tag::LegalDocs]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list::Pagination;

    #[test]
    fn test_unset_faq_id_is_omitted() {
        let args = LegalDocArgs::faq("-1");
        assert_eq!(
            GetLegalDocs::request(&args).url,
            "/content-moderation/legal-docs?type=faq"
        );
    }

    #[test]
    fn test_faq_id_is_included() {
        let args = LegalDocArgs::faq("42");
        assert_eq!(
            GetLegalDocs::request(&args).url,
            "/content-moderation/legal-docs?type=faq&faqId=42"
        );
    }

    #[test]
    fn test_faq_page_url() {
        let args = LegalDocArgs::faq_page(Pagination::new(2, 10));
        assert_eq!(
            GetLegalDocs::request(&args).url,
            "/content-moderation/legal-docs?type=faq&page=2&limit=10"
        );
    }

    #[test]
    fn test_document_url() {
        assert_eq!(
            GetLegalDoc::request(&LegalDocType::PrivacyPolicy).url,
            "/content-moderation/legal-docs?type=privacy"
        );
    }

    #[test]
    fn test_save_invalidates_legal_docs() {
        let args = SaveLegalDocRequest::faq(None, "Q?".into(), "A.".into());
        assert_eq!(SaveLegalDoc::invalidates(&args), vec![Tag::LegalDocs]);
        assert_eq!(SaveLegalDoc::request(&args).url, LEGAL_DOCS);
    }
}
