use axum::{
    extract::RawQuery,
    http::header,
    response::{IntoResponse, Response},
};
use easy_privacy_types::{
    policy::PolicyDocument,
    wizard::{WizardQuery, WizardState},
};
use tracing::instrument;

use super::error::ApiError;

pub(crate) const MARKDOWN_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";
pub(crate) const MARKDOWN_DISPOSITION: &str = "attachment; filename=\"privacy-notice.md\"";

/// Renders the notice for the same query the renderer view reads.
/// A missing or malformed `dataEntries` still produces a notice with an empty purpose list.
#[instrument]
#[axum::debug_handler]
pub(crate) async fn policy_markdown(RawQuery(query): RawQuery) -> Result<Response, ApiError> {
    let query = WizardQuery::parse(query.as_deref().unwrap_or_default())?;
    let document = PolicyDocument::new(WizardState::from_query(&query));
    tracing::debug!(
        company = document.company_name(),
        purposes = document.purposes().len(),
        "rendering markdown"
    );
    Ok((
        [
            (header::CONTENT_TYPE, MARKDOWN_CONTENT_TYPE),
            (header::CONTENT_DISPOSITION, MARKDOWN_DISPOSITION),
        ],
        document.to_markdown(),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::to_bytes, http::StatusCode};
    use easy_privacy_types::DataEntry;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn exports_the_rendered_notice() {
        let state = WizardState {
            company_name: "Acme & Sons".to_string(),
            industry: "Restaurants".to_string(),
            email_id: Some("privacy@acme.com".to_string()),
            entries: vec![DataEntry::new("Name", "Identification")],
        };
        let query = state.query_string().unwrap();
        let response = policy_markdown(RawQuery(Some(query))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            MARKDOWN_CONTENT_TYPE
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            MARKDOWN_DISPOSITION
        );
        let body = body_text(response).await;
        assert_eq!(body, PolicyDocument::new(state).to_markdown());
        assert!(body.starts_with("# Acme & Sons's Privacy Notice"));
        assert!(body.contains("1. **Name** - Identification"));
        assert!(body.contains("**privacy@acme.com**"));
    }

    #[tokio::test]
    async fn malformed_entries_render_an_empty_list() {
        let query = "companyName=Acme&emailId=a%40b.co&dataEntries=%5B%7Bbroken".to_string();
        let response = policy_markdown(RawQuery(Some(query))).await.unwrap();
        let body = body_text(response).await;
        assert!(body.starts_with("# Acme's Privacy Notice"));
        assert!(!body.contains("1. **"));
    }

    #[tokio::test]
    async fn missing_query_still_renders() {
        let response = policy_markdown(RawQuery(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.starts_with("# 's Privacy Notice"));
    }

    #[tokio::test]
    async fn repeated_keys_render_like_the_policy_view() {
        let query = "companyName=Acme&companyName=Other&emailId=a%40b.co".to_string();
        let response = policy_markdown(RawQuery(Some(query))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.starts_with("# Acme's Privacy Notice"));
    }

    #[tokio::test]
    async fn nested_keys_are_rejected() {
        let query = "companyName[first]=Acme".to_string();
        let err = policy_markdown(RawQuery(Some(query))).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
