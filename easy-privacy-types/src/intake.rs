use crate::{error::IntakeError, industry::IndustryKey, wizard::editor_href};

/// State of the landing page form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntakeForm {
    pub company_name: String,
    pub industry: Option<IndustryKey>,
}

impl IntakeForm {
    /// Selects an industry from a menu value; the empty placeholder option clears it.
    pub fn select_industry(&mut self, value: &str) {
        self.industry = value.parse().ok();
    }

    /// Returns the editor href, or the error to show inline.
    pub fn submit(&self) -> Result<String, IntakeError> {
        match self.industry {
            Some(industry) if !self.company_name.is_empty() => {
                Ok(editor_href(&self.company_name, industry))
            }
            _ => Err(IntakeError::MissingFields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_company_name_is_rejected() {
        let form = IntakeForm {
            company_name: String::new(),
            industry: Some(IndustryKey::Restaurants),
        };
        let err = form.submit().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please enter company name and select an industry"
        );
    }

    #[test]
    fn missing_industry_is_rejected() {
        let mut form = IntakeForm {
            company_name: "Acme".to_string(),
            industry: None,
        };
        assert_eq!(form.submit(), Err(IntakeError::MissingFields));
        form.select_industry("");
        assert_eq!(form.submit(), Err(IntakeError::MissingFields));
    }

    #[test]
    fn valid_form_forwards_to_editor() {
        let mut form = IntakeForm {
            company_name: "Acme Health".to_string(),
            industry: None,
        };
        form.select_industry("Hospitals_and_Healthcare");
        assert_eq!(
            form.submit().unwrap(),
            "/policy-generator?companyName=Acme%20Health&industry=Hospitals_and_Healthcare"
        );
    }
}
