pub(crate) mod bar_chart;
pub(crate) mod chat_input;
pub(crate) mod language_selector;
pub(crate) mod loading;
pub(crate) mod message_bubble;
pub(crate) mod navbar;
pub(crate) mod no_data;
pub(crate) mod overview;
pub(crate) mod review_card;
pub(crate) mod sidebar;
pub(crate) mod theme_toggle;

// Re-export components for convenience
pub use bar_chart::BarChart;
pub use chat_input::ChatInput;
pub use loading::Loading;
pub use message_bubble::{MessageBubble, ThinkingMessage};
pub use navbar::Navbar;
pub use no_data::NoDataMessage;
pub use overview::Overview;
pub use review_card::ReviewCard;
pub use sidebar::Sidebar;
