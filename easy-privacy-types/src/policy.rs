//! The generated privacy notice.
//!
//! The legal text is static; the only variable parts are the company name, the contact email
//! and the numbered list of data/purpose pairs. Paragraphs are stored as [`Segment`]s so the
//! HTML view and the Markdown export interpolate exactly the same places.

use std::fmt::Write;

use crate::{entry::DataEntry, wizard::WizardState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    Text(&'static str),
    CompanyName,
    ContactEmail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabeledItem {
    pub label: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clause {
    pub heading: &'static str,
    pub lead: &'static [Segment],
    pub items: &'static [LabeledItem],
}

const fn item(label: &'static str, text: &'static str) -> LabeledItem {
    LabeledItem { label, text }
}

pub const PURPOSES_HEADING: &str = "We process your personal data for the following purposes:";

pub const INTRO: &[&[Segment]] = &[
    &[
        Segment::CompanyName,
        Segment::Text(" deeply values your right to privacy and is committed to protecting your personal data in accordance with applicable law. This Privacy Notice explains how "),
        Segment::CompanyName,
        Segment::Text(" (\"us\", \"we\", or \"our\") collects, uses, discloses, transfers, and otherwise processes your personal data when you use our services or interact with us."),
    ],
    &[Segment::Text(
        "Personal data has the same meaning as that under applicable law and includes information that is about you, or can identify you directly, or in relation to such data (such as indirectly, in combination with other information).",
    )],
];

pub const CLAUSES: &[Clause] = &[
    Clause {
        heading: "Lawful Basis",
        lead: &[Segment::Text(
            "We only process your personal data pursuant to your free, specific, informed, unconditional, and unambiguous consent provided through an affirmative act on your part. In limited cases, we may process your personal data for certain legitimate uses in accordance with applicable law.",
        )],
        items: &[],
    },
    Clause {
        heading: "Disclosure",
        lead: &[Segment::Text(
            "We may share your personal data with third parties where necessary for the purposes specified above in this Privacy Notice. These include the following:",
        )],
        items: &[
            item("Service Providers", "To third-party service providers who assist in operating our business and providing the Service, such as hosting providers, payment processors, email service providers, and customer support services."),
            item("Data Processors", "To third-party data processors who process personal data on our behalf in accordance with our instructions and applicable data protection laws."),
            item("Other Authorized Recipients", "To any other third parties with whom we have obtained your consent or authorization to disclose your personal data for specific purposes."),
            item("Marketing and Advertising Partners", "To third-party marketing and advertising partners who help us market and promote our products or services, including ad networks, marketing agencies, and social media platforms."),
            item("Analytics Partners", "To third-party analytics providers who help us analyze how our Service is used and improve its performance, including web analytics tools and data analysis firms."),
            item("Professional Advisors", "To third-party professional advisors such as lawyers, accountants, and consultants who provide us with legal, financial, or other professional services."),
            item("Financial Institutions", "To third-party financial institutions or payment processors for financial transactions or related services, such as processing payments or fraud prevention."),
            item("Government Agencies", "To government agencies or public authorities as required by law or as necessary for regulatory compliance, tax reporting, or public safety purposes."),
            item("Merger or Acquisition", "To third parties in the event of a merger, acquisition, consolidation, restructuring, or sale of assets, in which case personal data may be transferred as part of the transaction."),
        ],
    },
    Clause {
        heading: "Your Rights",
        lead: &[Segment::Text(
            "You have the following rights in relation to your personal data in accordance with applicable law:",
        )],
        items: &[
            item("Right to access", "You have the right to access (i) a summary of your personal data which is being processed by us and the processing activities undertaken by us with respect to such personal data (ii) the identities of businesses with whom your personal data has been shared, along with a description of personal data so shared as well as (iii) any other information related to your personal data and its processing as may be prescribed."),
            item("Right to correction", "You have the right to correct any inaccurate or misleading personal data, complete any incomplete personal data, or update any personal data."),
            item("Right to erasure", "You have a right to erase your personal data as well as prevent the continuing disclosure of such data, unless required to be retained under applicable law or pursuant to a purpose specified in this Privacy Notice."),
            item("Right to nominate", "You have the right to nominate, in the event of your death or incapacity, a person who may exercise your rights under applicable law."),
            item("Right to grievance redressal", "You have the right to have readily available means of grievance redressal in respect of any failure at our end to discharge our data protection responsibilities under applicable law. We will comply with any request for grievance redressal within timeframes prescribed by the Government."),
        ],
    },
    Clause {
        heading: "Security",
        lead: &[Segment::Text(
            "We will take appropriate technical and organisational measures to protect the security and confidentiality of retained personal data, including implementing safeguards to prevent unauthorized access, use, or disclosure. Such measures will be commensurate with the nature of our business as well as the personal data that we collect. We will also implement reasonable security safeguards to protect your personal data against a personal data breach. We will promptly notify you in the event of a personal data breach in accordance with applicable law.",
        )],
        items: &[],
    },
    Clause {
        heading: "Transfer",
        lead: &[Segment::Text(
            "We will only transfer your personal data in accordance with applicable law, and where the recipient maintains the same or better level of protection as required under the Digital Personal Data Protection Act 2023.",
        )],
        items: &[],
    },
    Clause {
        heading: "Retention",
        lead: &[Segment::Text(
            "We will only retain personal data for as long as necessary to fulfill the purposes for which it was collected as specified in this Privacy Notice, or as required by law. We will minimize the retention of personal data to the extent possible.",
        )],
        items: &[],
    },
    Clause {
        heading: "Updates",
        lead: &[Segment::Text(
            "We reserve the right to update or change our Privacy Notice at any time, and you should check this Privacy Notice periodically. Your continued use of the Service after we post any modifications to the Privacy Notice on this page will constitute your acknowledgment of the modifications and your consent to abide and be bound by the modified Privacy Notice.",
        )],
        items: &[],
    },
    Clause {
        heading: "Contact Us",
        lead: &[
            Segment::Text("If you have any questions about this Privacy Notice, or if you seek to exercise any of your rights available under applicable law, such as your ability to withdraw your consent, as well as exercise your right to seek readily available grievance redressal, please contact us at "),
            Segment::ContactEmail,
            Segment::Text("."),
        ],
        items: &[],
    },
];

/// A privacy notice filled in from a wizard snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolicyDocument {
    state: WizardState,
}

impl PolicyDocument {
    pub fn new(state: WizardState) -> Self {
        Self { state }
    }

    pub fn company_name(&self) -> &str {
        &self.state.company_name
    }

    pub fn industry(&self) -> &str {
        &self.state.industry
    }

    pub fn contact_email(&self) -> &str {
        self.state.email_id.as_deref().unwrap_or_default()
    }

    pub fn purposes(&self) -> &[DataEntry] {
        &self.state.entries
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn title(&self) -> String {
        format!("{}'s Privacy Notice", self.company_name())
    }

    /// Text a segment stands for, with interpolated values left unstyled.
    pub fn resolve<'a>(&'a self, segment: &Segment) -> &'a str {
        match segment {
            Segment::Text(text) => *text,
            Segment::CompanyName => self.company_name(),
            Segment::ContactEmail => self.contact_email(),
        }
    }

    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "# {}\n", self.title());
        for paragraph in INTRO {
            self.write_markdown_segments(&mut out, paragraph);
            out.push_str("\n\n");
        }
        let _ = writeln!(out, "## {PURPOSES_HEADING}\n");
        for (index, entry) in self.purposes().iter().enumerate() {
            let _ = writeln!(out, "{}. **{}** - {}", index + 1, entry.data, entry.purpose);
        }
        for clause in CLAUSES {
            let _ = writeln!(out, "\n### {}\n", clause.heading);
            self.write_markdown_segments(&mut out, clause.lead);
            out.push('\n');
            if !clause.items.is_empty() {
                out.push('\n');
            }
            for item in clause.items {
                let _ = writeln!(out, "- **{}:** {}", item.label, item.text);
            }
        }
        out
    }

    fn write_markdown_segments(&self, out: &mut String, segments: &[Segment]) {
        for segment in segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                interpolated => {
                    let _ = write!(out, "**{}**", self.resolve(interpolated));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(entries: Vec<DataEntry>) -> PolicyDocument {
        PolicyDocument::new(WizardState {
            company_name: "Acme".to_string(),
            industry: "Retail".to_string(),
            email_id: Some("privacy@acme.com".to_string()),
            entries,
        })
    }

    #[test]
    fn title_uses_company_name() {
        assert_eq!(document(vec![]).title(), "Acme's Privacy Notice");
    }

    #[test]
    fn clause_order() {
        let headings: Vec<_> = CLAUSES.iter().map(|c| c.heading).collect();
        assert_eq!(
            headings,
            vec![
                "Lawful Basis",
                "Disclosure",
                "Your Rights",
                "Security",
                "Transfer",
                "Retention",
                "Updates",
                "Contact Us"
            ]
        );
        assert_eq!(CLAUSES[1].items.len(), 9);
        assert_eq!(CLAUSES[2].items.len(), 5);
    }

    #[test]
    fn resolve_interpolates_values() {
        let doc = document(vec![]);
        assert_eq!(doc.resolve(&Segment::CompanyName), "Acme");
        assert_eq!(doc.resolve(&Segment::ContactEmail), "privacy@acme.com");
        assert_eq!(doc.resolve(&Segment::Text("x")), "x");
        assert_eq!(PolicyDocument::default().contact_email(), "");
    }

    #[test]
    fn markdown_numbers_purposes() {
        let markdown = document(vec![
            DataEntry::new("Name", "Identification"),
            DataEntry::new("Email", "Contact"),
        ])
        .to_markdown();
        assert!(markdown.starts_with("# Acme's Privacy Notice\n\n**Acme** deeply values"));
        assert!(markdown.contains("1. **Name** - Identification\n2. **Email** - Contact\n"));
        assert!(markdown.contains("- **Right to erasure:** You have a right to erase"));
        assert!(markdown.contains("please contact us at **privacy@acme.com**."));
    }

    #[test]
    fn markdown_with_no_purposes_still_renders_clauses() {
        let markdown = document(vec![]).to_markdown();
        assert!(!markdown.contains("1. **"));
        assert!(markdown.contains("### Lawful Basis"));
        assert!(markdown.contains("### Contact Us"));
    }
}
