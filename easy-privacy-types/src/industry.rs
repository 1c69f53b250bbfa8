use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::UnknownIndustry;

/// Canonical industry identifiers offered in the industry menus.
///
/// The canonical key (`Hospitals_and_Healthcare`) is what travels in URLs and keys the
/// default row table; the display label (`Hospitals and Healthcare`) is only shown to people.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IndustryKey {
    Restaurants,
    Hotel,
    HospitalsAndHealthcare,
    EducationalInstitutions,
    Ecommerce,
    Charity,
    SocialMedia,
    TechManufacturing,
    Manufacturing,
    TransportationAndWarehousing,
    Retail,
    Construction,
    Insurance,
    Banks,
    DigitalLendingPlatforms,
    Agriculture,
    Pharmaceutical,
    CarManufacturing,
    Gaming,
    FoodAndBeverages,
    ItOutsourcing,
}

impl IndustryKey {
    /// Every industry, in menu order.
    pub const ALL: [IndustryKey; 21] = [
        IndustryKey::Restaurants,
        IndustryKey::Hotel,
        IndustryKey::HospitalsAndHealthcare,
        IndustryKey::EducationalInstitutions,
        IndustryKey::Ecommerce,
        IndustryKey::Charity,
        IndustryKey::SocialMedia,
        IndustryKey::TechManufacturing,
        IndustryKey::Manufacturing,
        IndustryKey::TransportationAndWarehousing,
        IndustryKey::Retail,
        IndustryKey::Construction,
        IndustryKey::Insurance,
        IndustryKey::Banks,
        IndustryKey::DigitalLendingPlatforms,
        IndustryKey::Agriculture,
        IndustryKey::Pharmaceutical,
        IndustryKey::CarManufacturing,
        IndustryKey::Gaming,
        IndustryKey::FoodAndBeverages,
        IndustryKey::ItOutsourcing,
    ];

    pub fn as_key(self) -> &'static str {
        match self {
            IndustryKey::Restaurants => "Restaurants",
            IndustryKey::Hotel => "Hotel",
            IndustryKey::HospitalsAndHealthcare => "Hospitals_and_Healthcare",
            IndustryKey::EducationalInstitutions => "Educational_Institutions",
            IndustryKey::Ecommerce => "Ecommerce",
            IndustryKey::Charity => "Charity",
            IndustryKey::SocialMedia => "Social_Media",
            IndustryKey::TechManufacturing => "Tech_Manufacturing",
            IndustryKey::Manufacturing => "Manufacturing",
            IndustryKey::TransportationAndWarehousing => "Transportation_and_Warehousing",
            IndustryKey::Retail => "Retail",
            IndustryKey::Construction => "Construction",
            IndustryKey::Insurance => "Insurance",
            IndustryKey::Banks => "Banks",
            IndustryKey::DigitalLendingPlatforms => "Digital_Lending_Platforms",
            IndustryKey::Agriculture => "Agriculture",
            IndustryKey::Pharmaceutical => "Pharmaceutical",
            IndustryKey::CarManufacturing => "Car_Manufacturing",
            IndustryKey::Gaming => "Gaming",
            IndustryKey::FoodAndBeverages => "Food_and_Beverages",
            IndustryKey::ItOutsourcing => "IT_Outsourcing",
        }
    }

    pub fn display_label(self) -> &'static str {
        match self {
            IndustryKey::Restaurants => "Restaurants",
            IndustryKey::Hotel => "Hotel",
            IndustryKey::HospitalsAndHealthcare => "Hospitals and Healthcare",
            IndustryKey::EducationalInstitutions => "Educational Institutions",
            IndustryKey::Ecommerce => "Ecommerce",
            IndustryKey::Charity => "Charity",
            IndustryKey::SocialMedia => "Social Media",
            IndustryKey::TechManufacturing => "Tech Manufacturing",
            IndustryKey::Manufacturing => "Manufacturing",
            IndustryKey::TransportationAndWarehousing => "Transportation and Warehousing",
            IndustryKey::Retail => "Retail",
            IndustryKey::Construction => "Construction",
            IndustryKey::Insurance => "Insurance",
            IndustryKey::Banks => "Banks",
            IndustryKey::DigitalLendingPlatforms => "Digital Lending Platforms",
            IndustryKey::Agriculture => "Agriculture",
            IndustryKey::Pharmaceutical => "Pharmaceutical",
            IndustryKey::CarManufacturing => "Car Manufacturing",
            IndustryKey::Gaming => "Gaming",
            IndustryKey::FoodAndBeverages => "Food and Beverages",
            IndustryKey::ItOutsourcing => "IT Outsourcing",
        }
    }
}

/// `(display label, canonical key)` pairs in menu order.
pub fn industry_menu() -> impl Iterator<Item = (&'static str, IndustryKey)> {
    IndustryKey::ALL
        .into_iter()
        .map(|key| (key.display_label(), key))
}

impl FromStr for IndustryKey {
    type Err = UnknownIndustry;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IndustryKey::ALL
            .into_iter()
            .find(|key| key.as_key() == s)
            .ok_or_else(|| UnknownIndustry(s.to_string()))
    }
}

impl TryFrom<String> for IndustryKey {
    type Error = UnknownIndustry;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<IndustryKey> for String {
    fn from(value: IndustryKey) -> Self {
        value.as_key().to_string()
    }
}

impl Display for IndustryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_keys_round_trip_through_from_str() {
        for key in IndustryKey::ALL {
            assert_eq!(key.as_key().parse::<IndustryKey>(), Ok(key));
        }
    }

    #[test]
    fn display_labels_are_not_parsed_as_keys() {
        assert!("Hospitals and Healthcare".parse::<IndustryKey>().is_err());
        assert_eq!(
            "Hospitals_and_Healthcare".parse::<IndustryKey>(),
            Ok(IndustryKey::HospitalsAndHealthcare)
        );
    }

    #[test]
    fn menu_keeps_insertion_order() {
        let labels: Vec<_> = industry_menu().map(|(label, _)| label).take(3).collect();
        assert_eq!(
            labels,
            vec!["Restaurants", "Hotel", "Hospitals and Healthcare"]
        );
        assert_eq!(industry_menu().count(), IndustryKey::ALL.len());
        assert_eq!(
            industry_menu().last(),
            Some(("IT Outsourcing", IndustryKey::ItOutsourcing))
        );
    }

    #[test]
    fn canonical_key_is_underscore_joined_label() {
        for key in IndustryKey::ALL {
            assert_eq!(key.display_label().replace(' ', "_"), key.as_key());
        }
    }

    #[test]
    fn serde_uses_canonical_key() {
        let json = serde_json::to_string(&IndustryKey::FoodAndBeverages).unwrap();
        assert_eq!(json, "\"Food_and_Beverages\"");
        let parsed: IndustryKey = serde_json::from_str("\"IT_Outsourcing\"").unwrap();
        assert_eq!(parsed, IndustryKey::ItOutsourcing);
        assert!(serde_json::from_str::<IndustryKey>("\"Aerospace\"").is_err());
    }
}
