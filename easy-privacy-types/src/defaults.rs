//! Starting data/purpose rows for each industry.
//!
//! Rows are `&'static str` pairs so the table can never be written to; the editor always
//! receives owned copies through [`default_entries`].

use crate::entry::DataEntry;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DefaultRow {
    pub data: &'static str,
    pub purpose: &'static str,
}

const fn row(data: &'static str, purpose: &'static str) -> DefaultRow {
    DefaultRow { data, purpose }
}

impl From<&DefaultRow> for DataEntry {
    fn from(value: &DefaultRow) -> Self {
        DataEntry::new(value.data, value.purpose)
    }
}

const RESTAURANTS: &[DefaultRow] = &[
    row("Name", "To manage table reservations and takeaway orders"),
    row("Phone number", "To confirm reservations and contact you about your order"),
    row("Email address", "To send booking confirmations and promotional offers"),
    row("Delivery address", "To deliver food orders placed online"),
    row("Dietary preferences and allergies", "To prepare meals that are safe for you"),
    row("Payment information", "To process payments for meals and orders"),
];

const HOTEL: &[DefaultRow] = &[
    row("Name", "To create and manage your room booking"),
    row("Government-issued ID", "To verify your identity at check-in as required by law"),
    row("Phone number", "To contact you about your stay"),
    row("Email address", "To send booking confirmations and invoices"),
    row("Payment information", "To process payments and security deposits"),
    row("Stay preferences", "To personalise your room and services"),
];

const HOSPITALS_AND_HEALTHCARE: &[DefaultRow] = &[
    row("Name", "To register you as a patient"),
    row("Date of birth", "To identify you and provide age-appropriate care"),
    row("Medical history", "To diagnose conditions and provide treatment"),
    row("Health insurance details", "To process insurance claims"),
    row("Emergency contact", "To reach a person of your choice in an emergency"),
    row("Phone number", "To schedule appointments and send reminders"),
];

const EDUCATIONAL_INSTITUTIONS: &[DefaultRow] = &[
    row("Student name", "To manage admissions and enrolment"),
    row("Date of birth", "To verify eligibility for courses"),
    row("Academic records", "To assess performance and issue certificates"),
    row("Parent or guardian details", "To communicate about student progress"),
    row("Email address", "To share schedules, results and notices"),
    row("Fee payment information", "To process tuition payments"),
];

const ECOMMERCE: &[DefaultRow] = &[
    row("Name", "To create and manage your account"),
    row("Email address", "To send order confirmations and updates"),
    row("Shipping address", "To deliver your orders"),
    row("Phone number", "To coordinate deliveries"),
    row("Payment information", "To process purchases and refunds"),
    row("Browsing and purchase history", "To recommend products you may like"),
];

const CHARITY: &[DefaultRow] = &[
    row("Name", "To record and acknowledge your donation"),
    row("Email address", "To send donation receipts and campaign updates"),
    row("Postal address", "To send tax exemption certificates"),
    row("Tax identification number", "To issue tax exemption certificates"),
    row("Payment information", "To process donations"),
];

const SOCIAL_MEDIA: &[DefaultRow] = &[
    row("Name and username", "To create and display your profile"),
    row("Email address or phone number", "To verify your account and recover access"),
    row("Posts, photos and messages", "To provide the service and share content you choose"),
    row("Contacts", "To help you find people you know"),
    row("Device and usage information", "To keep the platform secure and improve features"),
    row("Location", "To show relevant local content"),
];

const TECH_MANUFACTURING: &[DefaultRow] = &[
    row("Name", "To manage customer and distributor accounts"),
    row("Business contact details", "To process orders and provide support"),
    row("Product registration details", "To provide warranty service"),
    row("Device diagnostics", "To troubleshoot and improve products"),
    row("Payment information", "To process orders"),
];

const MANUFACTURING: &[DefaultRow] = &[
    row("Name", "To manage supplier and customer relationships"),
    row("Business contact details", "To process orders and deliveries"),
    row("Billing address", "To issue invoices"),
    row("Payment information", "To process payments"),
    row("Site visitor logs", "To maintain safety and security at our facilities"),
];

const TRANSPORTATION_AND_WAREHOUSING: &[DefaultRow] = &[
    row("Name", "To book and manage shipments"),
    row("Pickup and delivery address", "To collect and deliver consignments"),
    row("Phone number", "To coordinate pickups and deliveries"),
    row("Proof of delivery signature", "To confirm successful delivery"),
    row("Payment information", "To process freight charges"),
];

const RETAIL: &[DefaultRow] = &[
    row("Name", "To manage loyalty memberships"),
    row("Phone number", "To send offers and order updates"),
    row("Email address", "To send receipts and promotions"),
    row("Purchase history", "To provide rewards and personalised offers"),
    row("Payment information", "To process purchases and returns"),
];

const CONSTRUCTION: &[DefaultRow] = &[
    row("Name", "To prepare quotes and contracts"),
    row("Site address", "To plan and carry out construction work"),
    row("Phone number", "To coordinate site visits"),
    row("Identity documents", "To complete property registration formalities"),
    row("Payment information", "To process milestone payments"),
];

const INSURANCE: &[DefaultRow] = &[
    row("Name", "To issue and manage your policy"),
    row("Date of birth", "To calculate premiums"),
    row("Health information", "To underwrite health and life policies"),
    row("Nominee details", "To settle claims with your chosen beneficiary"),
    row("Bank account details", "To collect premiums and pay claims"),
    row("Claim history", "To assess and process claims"),
];

const BANKS: &[DefaultRow] = &[
    row("Name", "To open and maintain your account"),
    row("Identity and address proof", "To complete know-your-customer checks as required by law"),
    row("Account and transaction details", "To provide banking services"),
    row("Income details", "To assess eligibility for loans and credit cards"),
    row("Phone number", "To send transaction alerts and one-time passwords"),
    row("Email address", "To send statements and service updates"),
];

const DIGITAL_LENDING_PLATFORMS: &[DefaultRow] = &[
    row("Name", "To process your loan application"),
    row("Identity documents", "To verify your identity"),
    row("Bank statements", "To assess your repayment capacity"),
    row("Credit history", "To evaluate creditworthiness"),
    row("Phone number", "To send repayment reminders"),
    row("Device information", "To detect and prevent fraud"),
];

const AGRICULTURE: &[DefaultRow] = &[
    row("Name", "To register farmers and buyers"),
    row("Land records", "To provide crop advisory and input services"),
    row("Phone number", "To share weather and market price alerts"),
    row("Bank account details", "To transfer payments for produce"),
    row("Location", "To provide region-specific guidance"),
];

const PHARMACEUTICAL: &[DefaultRow] = &[
    row("Name", "To process orders and prescriptions"),
    row("Prescription details", "To dispense medicines safely"),
    row("Health information", "To report adverse drug reactions"),
    row("Delivery address", "To deliver medicines"),
    row("Payment information", "To process payments"),
];

const CAR_MANUFACTURING: &[DefaultRow] = &[
    row("Name", "To process vehicle bookings"),
    row("Phone number", "To schedule test drives and service appointments"),
    row("Vehicle identification number", "To provide warranty and recall services"),
    row("Vehicle telematics data", "To provide connected car features and roadside assistance"),
    row("Payment information", "To process vehicle purchases and service payments"),
];

const GAMING: &[DefaultRow] = &[
    row("Username", "To create and display your player profile"),
    row("Email address", "To verify your account and send updates"),
    row("Date of birth", "To enforce age restrictions"),
    row("Gameplay data", "To save progress and run leaderboards"),
    row("Payment information", "To process in-game purchases"),
    row("Device information", "To detect cheating and fraud"),
];

const FOOD_AND_BEVERAGES: &[DefaultRow] = &[
    row("Name", "To manage orders and subscriptions"),
    row("Delivery address", "To deliver products"),
    row("Phone number", "To coordinate deliveries"),
    row("Email address", "To send order confirmations and promotions"),
    row("Feedback and reviews", "To improve our products"),
];

const IT_OUTSOURCING: &[DefaultRow] = &[
    row("Name", "To manage client engagements"),
    row("Business contact details", "To communicate about projects and support tickets"),
    row("System access credentials", "To deliver contracted IT services"),
    row("Client data processed on instruction", "To perform services as a data processor"),
    row("Billing information", "To issue invoices and process payments"),
];

/// Starting rows for a canonical industry key, or `None` for keys outside the table.
pub fn default_rows(key: &str) -> Option<&'static [DefaultRow]> {
    let rows = match key {
        "Restaurants" => RESTAURANTS,
        "Hotel" => HOTEL,
        "Hospitals_and_Healthcare" => HOSPITALS_AND_HEALTHCARE,
        "Educational_Institutions" => EDUCATIONAL_INSTITUTIONS,
        "Ecommerce" => ECOMMERCE,
        "Charity" => CHARITY,
        "Social_Media" => SOCIAL_MEDIA,
        "Tech_Manufacturing" => TECH_MANUFACTURING,
        "Manufacturing" => MANUFACTURING,
        "Transportation_and_Warehousing" => TRANSPORTATION_AND_WAREHOUSING,
        "Retail" => RETAIL,
        "Construction" => CONSTRUCTION,
        "Insurance" => INSURANCE,
        "Banks" => BANKS,
        "Digital_Lending_Platforms" => DIGITAL_LENDING_PLATFORMS,
        "Agriculture" => AGRICULTURE,
        "Pharmaceutical" => PHARMACEUTICAL,
        "Car_Manufacturing" => CAR_MANUFACTURING,
        "Gaming" => GAMING,
        "Food_and_Beverages" => FOOD_AND_BEVERAGES,
        "IT_Outsourcing" => IT_OUTSOURCING,
        _ => return None,
    };
    Some(rows)
}

/// A fresh, owned copy of the default rows for `key`. Unknown keys start blank.
pub fn default_entries(key: &str) -> Vec<DataEntry> {
    default_rows(key)
        .map(|rows| rows.iter().map(DataEntry::from).collect())
        .unwrap_or_default()
}
