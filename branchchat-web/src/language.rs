use std::collections::HashMap;

/// Information about a supported language
#[derive(PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub flag: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Get information about a supported language
pub fn get_language_info(code: &str) -> Option<LanguageInfo> {
    supported_languages().get(code).cloned()
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([
        (
            "en",
            LanguageInfo {
                code: "en",
                flag: "🇬🇧",
                translation: include_str!("../translations/en.json"),
                native_name: "English",
            },
        ),
        (
            "ar",
            LanguageInfo {
                code: "ar",
                flag: "🇵🇸",
                translation: include_str!("../translations/ar.json"),
                native_name: "العربية",
            },
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_languages_bundle_translations() {
        let languages = supported_languages();
        assert_eq!(languages.len(), 2);

        let arabic = languages.get("ar").expect("arabic bundle");
        assert_eq!(arabic.native_name, "العربية");
        assert!(arabic.translation.contains("app"));
    }
}
