use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    defaults::default_entries,
    entry::{DataEntry, EntryField},
    error::EditorError,
    wizard::{WizardQuery, WizardState},
};

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// In-memory state of the entry editor for one editing session.
///
/// Rows are identified by position only. `revision` moves forward whenever positions stop
/// meaning what they meant before (a deletion or an industry switch), so anything keyed by
/// `(revision, index)` is dropped instead of being attached to the wrong row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryEditor {
    company_name: String,
    industry: String,
    email_id: String,
    entries: Vec<DataEntry>,
    revision: u64,
}

impl EntryEditor {
    pub fn new(company_name: impl Into<String>, industry: impl Into<String>) -> Self {
        let industry = industry.into();
        Self {
            company_name: company_name.into(),
            entries: default_entries(&industry),
            industry,
            email_id: String::new(),
            revision: 0,
        }
    }

    /// Mount-time constructor reading `companyName` and `industry` from the incoming URL.
    pub fn from_query(query: &WizardQuery) -> Self {
        Self::new(
            query.company_name.clone().unwrap_or_default(),
            query.industry.clone().unwrap_or_default(),
        )
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn industry(&self) -> &str {
        &self.industry
    }

    pub fn email_id(&self) -> &str {
        &self.email_id
    }

    pub fn entries(&self) -> &[DataEntry] {
        &self.entries
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_company_name(&mut self, company_name: impl Into<String>) {
        self.company_name = company_name.into();
    }

    pub fn set_email_id(&mut self, email_id: impl Into<String>) {
        self.email_id = email_id.into();
    }

    /// Switches industry and replaces every row with the new industry's defaults.
    pub fn change_industry(&mut self, industry: impl Into<String>) {
        self.industry = industry.into();
        self.entries = default_entries(&self.industry);
        self.revision += 1;
    }

    /// Updates one cell in place. Indices past the end are ignored.
    pub fn edit_cell(&mut self, row: usize, field: EntryField, value: impl Into<String>) {
        if let Some(entry) = self.entries.get_mut(row) {
            *entry.field_mut(field) = value.into();
        }
    }

    pub fn add_row(&mut self) {
        self.entries.push(DataEntry::default());
    }

    /// Removes the row at `row`; later rows shift down by one.
    pub fn delete_row(&mut self, row: usize) -> Option<DataEntry> {
        if row >= self.entries.len() {
            return None;
        }
        self.revision += 1;
        Some(self.entries.remove(row))
    }

    /// Returns the first failure, checked in the order the messages are prioritised.
    pub fn validate(&self) -> Result<(), EditorError> {
        if self.company_name.is_empty() {
            return Err(EditorError::MissingCompanyName);
        }
        if self.industry.is_empty() {
            return Err(EditorError::MissingIndustry);
        }
        if self.email_id.is_empty() {
            return Err(EditorError::MissingEmail);
        }
        if !is_valid_email(&self.email_id) {
            return Err(EditorError::InvalidEmail);
        }
        for (index, entry) in self.entries.iter().enumerate() {
            for field in [EntryField::Data, EntryField::Purpose] {
                if entry.field(field).is_empty() {
                    return Err(EditorError::EmptyCell {
                        row: index + 1,
                        field,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn to_state(&self) -> WizardState {
        WizardState {
            company_name: self.company_name.clone(),
            industry: self.industry.clone(),
            email_id: Some(self.email_id.clone()),
            entries: self.entries.clone(),
        }
    }

    /// Validates and returns the href of the rendered policy.
    pub fn submit(&self) -> Result<String, EditorError> {
        self.validate()?;
        Ok(self.to_state().policy_href()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{defaults::default_rows, industry::IndustryKey, wizard::decode_entries};

    fn valid_editor(entries: Vec<DataEntry>) -> EntryEditor {
        let mut editor = EntryEditor::new("Acme", "Restaurants");
        editor.set_email_id("privacy@acme.com");
        editor.entries = entries;
        editor
    }

    fn abc() -> Vec<DataEntry> {
        vec![
            DataEntry::new("A", "a"),
            DataEntry::new("B", "b"),
            DataEntry::new("C", "c"),
        ]
    }

    #[test]
    fn mount_copies_industry_defaults() {
        for key in IndustryKey::ALL {
            let editor = EntryEditor::new("Acme", key.as_key());
            let table: Vec<DataEntry> = default_rows(key.as_key())
                .unwrap_or_default()
                .iter()
                .map(DataEntry::from)
                .collect();
            assert_eq!(editor.entries(), table.as_slice());
        }
    }

    #[test]
    fn editing_never_touches_the_default_table() {
        let mut editor = EntryEditor::new("Acme", "Banks");
        editor.edit_cell(0, EntryField::Data, "Changed");
        editor.delete_row(1);
        editor.add_row();
        let rows = default_rows("Banks").unwrap_or_default();
        assert_eq!(rows[0].data, "Name");
        assert_eq!(default_entries("Banks").len(), rows.len());
        assert_ne!(editor.entries()[0].data, rows[0].data);
    }

    #[test]
    fn unknown_industry_starts_empty() {
        let query = WizardQuery {
            company_name: Some("Acme".to_string()),
            industry: Some("Aerospace".to_string()),
            ..Default::default()
        };
        let editor = EntryEditor::from_query(&query);
        assert_eq!(editor.company_name(), "Acme");
        assert_eq!(editor.industry(), "Aerospace");
        assert!(editor.entries().is_empty());
    }

    #[test]
    fn change_industry_discards_edits() {
        let mut editor = EntryEditor::new("Acme", "Hotel");
        editor.edit_cell(0, EntryField::Purpose, "Edited");
        editor.add_row();
        let before = editor.revision();
        editor.change_industry("Gaming");
        assert_eq!(editor.entries(), default_entries("Gaming").as_slice());
        assert!(editor.revision() > before);
        editor.change_industry("Hotel");
        assert_eq!(editor.entries(), default_entries("Hotel").as_slice());
    }

    #[test]
    fn edit_cell_updates_one_field() {
        let mut editor = valid_editor(abc());
        editor.edit_cell(1, EntryField::Purpose, "");
        assert_eq!(editor.entries()[1], DataEntry::new("B", ""));
        editor.edit_cell(7, EntryField::Data, "ignored");
        assert_eq!(editor.entries().len(), 3);
    }

    #[test]
    fn add_row_appends_blank_row() {
        let mut editor = valid_editor(abc());
        editor.add_row();
        assert_eq!(editor.entries().len(), 4);
        assert_eq!(editor.entries()[3], DataEntry::default());
    }

    #[test]
    fn delete_row_shifts_later_rows() {
        let mut editor = valid_editor(abc());
        let before = editor.revision();
        assert_eq!(editor.delete_row(1), Some(DataEntry::new("B", "b")));
        assert_eq!(
            editor.entries(),
            &[DataEntry::new("A", "a"), DataEntry::new("C", "c")]
        );
        assert!(editor.revision() > before);
        assert_eq!(editor.delete_row(2), None);
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("privacy@acme.com"));
        assert!(is_valid_email("a.b@c.d.e"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b .com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("@b.com"));
    }

    #[test]
    fn invalid_email_blocks_submit() {
        let mut editor = valid_editor(vec![DataEntry::new("x", "y")]);
        editor.set_email_id("not-an-email");
        let err = editor.submit().unwrap_err();
        assert_eq!(err, EditorError::InvalidEmail);
        assert_eq!(err.to_string(), "Please provide a valid email address.");
    }

    #[test]
    fn reports_first_failing_row_one_based() {
        let editor = valid_editor(vec![
            DataEntry::new("Name", "Identification"),
            DataEntry::new("Email", ""),
            DataEntry::new("", ""),
        ]);
        assert_eq!(
            editor.validate().unwrap_err().to_string(),
            "Row 2: Purpose cannot be empty."
        );
    }

    #[test]
    fn data_is_checked_before_purpose() {
        let editor = valid_editor(vec![DataEntry::new("", "")]);
        assert_eq!(
            editor.validate(),
            Err(EditorError::EmptyCell {
                row: 1,
                field: EntryField::Data
            })
        );
    }

    #[test]
    fn validation_priority() {
        let mut editor = EntryEditor::new("", "");
        editor.entries = vec![DataEntry::default()];
        assert_eq!(editor.validate(), Err(EditorError::MissingCompanyName));
        editor.set_company_name("Acme");
        assert_eq!(editor.validate(), Err(EditorError::MissingIndustry));
        editor.industry = "Restaurants".to_string();
        assert_eq!(editor.validate(), Err(EditorError::MissingEmail));
        editor.set_email_id("nope");
        assert_eq!(editor.validate(), Err(EditorError::InvalidEmail));
        editor.set_email_id("a@b.co");
        assert!(matches!(
            editor.validate(),
            Err(EditorError::EmptyCell { row: 1, .. })
        ));
    }

    #[test]
    fn empty_table_is_valid() {
        let editor = valid_editor(Vec::new());
        assert_eq!(editor.validate(), Ok(()));
    }

    #[test]
    fn submit_forwards_every_value() {
        let editor = valid_editor(vec![DataEntry::new("Name", "Identification")]);
        let href = editor.submit().unwrap();
        let (path, query) = href.split_once('?').unwrap();
        assert_eq!(path, "/final-policy");
        let query = WizardQuery::parse(query).unwrap();
        assert_eq!(query.company_name.as_deref(), Some("Acme"));
        assert_eq!(query.industry.as_deref(), Some("Restaurants"));
        assert_eq!(query.email_id.as_deref(), Some("privacy@acme.com"));
        assert_eq!(
            decode_entries(query.data_entries.as_deref()),
            vec![DataEntry::new("Name", "Identification")]
        );
    }
}
