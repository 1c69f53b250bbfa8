//! The query-string boundary between the wizard views.
//!
//! Values are percent-encoded with the `encodeURIComponent` unreserved set. `dataEntries` is
//! a JSON array that is percent-encoded before it is placed in the URL, so the renderer decodes
//! it once more after the router has decoded the query itself.

use std::{collections::HashSet, fmt::Write};

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::{entry::DataEntry, error::WireError, industry::IndustryKey, paths};

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// Query keys understood by the editor and the renderer. Unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WizardQuery {
    pub company_name: Option<String>,
    pub industry: Option<String>,
    pub email_id: Option<String>,
    pub data_entries: Option<String>,
}

impl WizardQuery {
    /// Parses a raw query string, with or without the leading `?`.
    /// A repeated key keeps its first value, matching the router's query map.
    pub fn parse(query: &str) -> Result<Self, WireError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        Ok(serde_qs::from_str(&first_value_wins(query))?)
    }

    /// Builds the query from any key lookup, such as a router's parameter map.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            company_name: get("companyName"),
            industry: get("industry"),
            email_id: get("emailId"),
            data_entries: get("dataEntries"),
        }
    }
}

fn first_value_wins(query: &str) -> String {
    let mut seen = HashSet::new();
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = pair.split_once('=').map_or(*pair, |(key, _)| key);
            seen.insert(percent_decode_str(key).decode_utf8_lossy().into_owned())
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Percent-encoded JSON array of entries.
pub fn encode_entries(entries: &[DataEntry]) -> Result<String, WireError> {
    let json = serde_json::to_string(entries)?;
    Ok(encode_component(&json))
}

pub fn try_decode_entries(raw: &str) -> Result<Vec<DataEntry>, WireError> {
    let decoded = percent_decode_str(raw)
        .decode_utf8()
        .map_err(|_| WireError::Utf8)?;
    Ok(serde_json::from_str(&decoded)?)
}

/// Decodes forwarded entries, treating anything missing or malformed as an empty list.
pub fn decode_entries(raw: Option<&str>) -> Vec<DataEntry> {
    raw.and_then(|raw| try_decode_entries(raw).ok())
        .unwrap_or_default()
}

/// Href from the landing form into the editor.
pub fn editor_href(company_name: &str, industry: IndustryKey) -> String {
    format!(
        "{}?companyName={}&industry={}",
        paths::EDITOR,
        encode_component(company_name),
        encode_component(industry.as_key())
    )
}

/// Snapshot of the wizard as carried in a URL.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub company_name: String,
    pub industry: String,
    pub email_id: Option<String>,
    pub entries: Vec<DataEntry>,
}

impl WizardState {
    /// Never fails: absent values become empty and malformed entries become `[]`.
    pub fn from_query(query: &WizardQuery) -> Self {
        Self {
            company_name: query.company_name.clone().unwrap_or_default(),
            industry: query.industry.clone().unwrap_or_default(),
            email_id: query.email_id.clone(),
            entries: decode_entries(query.data_entries.as_deref()),
        }
    }

    pub fn query_string(&self) -> Result<String, WireError> {
        let mut query = format!(
            "companyName={}&industry={}",
            encode_component(&self.company_name),
            encode_component(&self.industry)
        );
        if let Some(email_id) = &self.email_id {
            let _ = write!(query, "&emailId={}", encode_component(email_id));
        }
        // the entries are already percent-encoded JSON, encoding them again would double escape
        let _ = write!(query, "&dataEntries={}", encode_entries(&self.entries)?);
        Ok(query)
    }

    /// Href of the rendered policy for this state.
    pub fn policy_href(&self) -> Result<String, WireError> {
        Ok(format!("{}?{}", paths::RENDERER, self.query_string()?))
    }

    /// Href of the server-side Markdown export for this state.
    pub fn markdown_href(&self) -> Result<String, WireError> {
        Ok(format!("{}?{}", paths::MARKDOWN_EXPORT, self.query_string()?))
    }
}
