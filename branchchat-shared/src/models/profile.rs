use serde::{Deserialize, Serialize};

/// Free-text institution profile returned by `GET /institution-profile`.
///
/// The document is markdown-like with `**heading**`-delimited bilingual
/// sections; parsing happens client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstitutionProfileResponse {
    /// The raw profile document.
    pub profile: String,
}

/// Structured profile fields keyed by category, served as
/// `GET /data/bank_profile_data.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BankProfileData {
    #[serde(default)]
    pub founders: Vec<String>,
    #[serde(default)]
    pub key_personnel: Vec<String>,
    #[serde(default)]
    pub branch_locations: Vec<String>,
    #[serde(default)]
    pub accounts: Vec<String>,
    #[serde(default)]
    pub loans: Vec<String>,
    #[serde(default)]
    pub cards: Vec<String>,
    #[serde(default)]
    pub digital_services: Vec<String>,
    #[serde(default)]
    pub transfer_services: Vec<String>,
    #[serde(default)]
    pub investment_services: Vec<String>,
    #[serde(default)]
    pub fees: Vec<String>,
    #[serde(default)]
    pub interest_rates: Vec<String>,
    #[serde(default)]
    pub csr_programs: Vec<String>,
    #[serde(default)]
    pub awards: Vec<String>,
    #[serde(default)]
    pub partners: Vec<String>,
    #[serde(default)]
    pub contact_info: Vec<String>,
}

impl BankProfileData {
    /// All categories with display headings, in serving order.
    pub fn categories(&self) -> [(&'static str, &[String]); 15] {
        [
            ("Founders", self.founders.as_slice()),
            ("Key Personnel", self.key_personnel.as_slice()),
            ("Branch Locations", self.branch_locations.as_slice()),
            ("Accounts", self.accounts.as_slice()),
            ("Loans", self.loans.as_slice()),
            ("Cards", self.cards.as_slice()),
            ("Digital Services", self.digital_services.as_slice()),
            ("Transfer Services", self.transfer_services.as_slice()),
            ("Investment Services", self.investment_services.as_slice()),
            ("Fees", self.fees.as_slice()),
            ("Interest Rates", self.interest_rates.as_slice()),
            ("CSR Programs", self.csr_programs.as_slice()),
            ("Awards", self.awards.as_slice()),
            ("Partners", self.partners.as_slice()),
            ("Contact Info", self.contact_info.as_slice()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_payload_fills_defaults() {
        let data: BankProfileData =
            serde_json::from_str(r#"{"founders": ["هاشم عطا الشوا"]}"#).unwrap();

        assert_eq!(data.founders.len(), 1);
        assert!(data.contact_info.is_empty());
    }

    #[test]
    fn test_categories_cover_every_field() {
        let data = BankProfileData {
            contact_info: vec!["1700150150".to_string()],
            ..Default::default()
        };

        let categories = data.categories();
        assert_eq!(categories.len(), 15);
        let (title, items) = categories[14];
        assert_eq!(title, "Contact Info");
        assert_eq!(items.len(), 1);
    }
}
