use serde::{Deserialize, Serialize};

/// One category of personal data and the reason it is processed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataEntry {
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub purpose: String,
}

impl DataEntry {
    pub fn new(data: impl Into<String>, purpose: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            purpose: purpose.into(),
        }
    }

    pub fn field(&self, field: EntryField) -> &str {
        match field {
            EntryField::Data => &self.data,
            EntryField::Purpose => &self.purpose,
        }
    }

    pub(crate) fn field_mut(&mut self, field: EntryField) -> &mut String {
        match field {
            EntryField::Data => &mut self.data,
            EntryField::Purpose => &mut self.purpose,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryField {
    Data,
    Purpose,
}

impl EntryField {
    pub fn label(self) -> &'static str {
        match self {
            EntryField::Data => "Data",
            EntryField::Purpose => "Purpose",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty() {
        let entry: DataEntry = serde_json::from_str(r#"{"data":"Name"}"#).unwrap();
        assert_eq!(entry, DataEntry::new("Name", ""));
    }

    #[test]
    fn serializes_with_plain_field_names() {
        let json = serde_json::to_string(&DataEntry::new("Name", "Identification")).unwrap();
        assert_eq!(json, r#"{"data":"Name","purpose":"Identification"}"#);
    }
}
