//! Institution-profile section parsing.
//!
//! The backend serves the profile as a markdown-like document whose
//! sections are delimited by `**heading**` lines; the structured dataset
//! contributes further sections. Both end up as [`Section`] lists that the
//! profile page renders as an accordion.

use shared::models::BankProfileData;

/// One expandable section of the institution profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub items: Vec<String>,
}

/// Headings of the free-text profile document, in serving order.
pub const PROFILE_HEADINGS: [&str; 7] = [
    "نظرة عامة",
    "انطباع العملاء",
    "تقييمات الفروع",
    "نقاط القوة",
    "نقاط الضعف",
    "الخدمات المقدمة",
    "التحديثات الأخيرة",
];

/// Extract every known heading's items from the free-text document.
pub fn parse_sections(profile: &str) -> Vec<Section> {
    PROFILE_HEADINGS
        .iter()
        .map(|heading| Section {
            title: (*heading).to_string(),
            items: section_items(profile, heading),
        })
        .collect()
}

/// Items listed under one `**heading**`, bullet prefixes stripped.
/// Missing headings yield an empty list.
pub fn section_items(profile: &str, heading: &str) -> Vec<String> {
    let marker = format!("**{heading}**");
    let Some(start) = profile.find(&marker) else {
        return Vec::new();
    };

    let body = &profile[start + marker.len()..];
    let end = body.find("\n**").unwrap_or(body.len());

    body[..end]
        .lines()
        .map(strip_bullet)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Sections derived from the structured profile dataset.
pub fn structured_sections(data: &BankProfileData) -> Vec<Section> {
    data.categories()
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .map(|(title, items)| Section {
            title: title.to_string(),
            items: items.to_vec(),
        })
        .collect()
}

/// Keep only the items containing the search term (case-insensitive),
/// dropping sections that end up empty. An empty term keeps everything.
pub fn search_sections(sections: &[Section], term: &str) -> Vec<Section> {
    let needle = term.trim().to_lowercase();
    sections
        .iter()
        .map(|section| Section {
            title: section.title.clone(),
            items: section
                .items
                .iter()
                .filter(|item| needle.is_empty() || item.to_lowercase().contains(&needle))
                .cloned()
                .collect(),
        })
        .filter(|section| !section.items.is_empty())
        .collect()
}

fn strip_bullet(line: &str) -> String {
    line.trim_start_matches(|c: char| {
        c.is_whitespace() || c == '*' || c == '-' || c == '.' || c.is_ascii_digit()
    })
    .trim()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
**نظرة عامة**
- تأسس البنك عام 1960.
- يخدم أكثر من مليون عميل.

**نقاط القوة**
1. شبكة فروع واسعة.
2. خدمات رقمية متطورة.

**الخدمات المقدمة**
* حسابات جارية وتوفير.
";

    #[test]
    fn test_section_items_are_extracted_in_order() {
        let items = section_items(SAMPLE, "نظرة عامة");
        assert_eq!(
            items,
            vec!["تأسس البنك عام 1960.", "يخدم أكثر من مليون عميل."]
        );
    }

    #[test]
    fn test_numbered_bullets_are_stripped() {
        let items = section_items(SAMPLE, "نقاط القوة");
        assert_eq!(items, vec!["شبكة فروع واسعة.", "خدمات رقمية متطورة."]);
    }

    #[test]
    fn test_missing_heading_yields_empty_list() {
        assert!(section_items(SAMPLE, "التحديثات الأخيرة").is_empty());
    }

    #[test]
    fn test_parse_sections_covers_all_headings() {
        let sections = parse_sections(SAMPLE);
        assert_eq!(sections.len(), PROFILE_HEADINGS.len());
        assert_eq!(sections[0].title, "نظرة عامة");
        assert_eq!(sections[0].items.len(), 2);
    }

    #[test]
    fn test_search_filters_items_and_drops_empty_sections() {
        let sections = parse_sections(SAMPLE);
        let visible = search_sections(&sections, "رقمية");

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "نقاط القوة");
        assert_eq!(visible[0].items, vec!["خدمات رقمية متطورة."]);
    }

    #[test]
    fn test_empty_search_keeps_non_empty_sections() {
        let sections = parse_sections(SAMPLE);
        let visible = search_sections(&sections, "  ");
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn test_structured_sections_skip_empty_categories() {
        let data = BankProfileData {
            founders: vec!["هاشم عطا الشوا".to_string()],
            ..Default::default()
        };

        let sections = structured_sections(&data);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Founders");
    }
}
