use gloo_storage::{SessionStorage, Storage};
use yewdux::prelude::Store;

const THEME_KEY: &str = "theme";

/// Process-wide light/dark flag, persisted for the browsing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Store)]
pub struct ThemeStore {
    pub dark: bool,
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self {
            dark: stored_or_system_preference(),
        }
    }
}

impl ThemeStore {
    /// Flip the flag and persist the choice for this session.
    pub fn toggled(self) -> Self {
        let next = Self { dark: !self.dark };
        let _ = SessionStorage::set(THEME_KEY, next.theme_name());
        next
    }

    /// Theme name used for the `data-theme` attribute.
    pub const fn theme_name(self) -> &'static str {
        if self.dark { "dark" } else { "light" }
    }

    /// Pick a per-theme value, mirroring conditional styling in views.
    pub fn pick<T>(self, dark: T, light: T) -> T {
        if self.dark { dark } else { light }
    }

    /// Write the `data-theme` attribute on the document element.
    pub fn apply(dark: bool) {
        if let Some(window) = web_sys::window()
            && let Some(document) = window.document()
            && let Some(html_element) = document.document_element()
        {
            let name = if dark { "dark" } else { "light" };
            let _ = html_element.set_attribute("data-theme", name);
        }
    }
}

fn stored_or_system_preference() -> bool {
    if let Ok(stored) = SessionStorage::get::<String>(THEME_KEY) {
        return stored == "dark";
    }

    web_sys::window()
        .and_then(|window| {
            window
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
        })
        .is_some_and(|media_query| media_query.matches())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_apply_writes_data_theme_attribute() {
        ThemeStore::apply(true);

        let attribute = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
            .and_then(|element| element.get_attribute("data-theme"));
        assert_eq!(attribute.as_deref(), Some("dark"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_name_matches_flag() {
        assert_eq!(ThemeStore { dark: true }.theme_name(), "dark");
        assert_eq!(ThemeStore { dark: false }.theme_name(), "light");
    }

    #[test]
    fn test_pick_follows_flag() {
        let dark = ThemeStore { dark: true };
        let light = ThemeStore { dark: false };

        assert_eq!(dark.pick("bg-gray-900", "bg-gray-100"), "bg-gray-900");
        assert_eq!(light.pick("bg-gray-900", "bg-gray-100"), "bg-gray-100");
    }
}
