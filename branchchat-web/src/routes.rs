use crate::auth;
use crate::pages::{
    BranchReviewsPage, ChatPage, HomePage, LoginPage, NotFoundPage, ProfilePage, RatedReviewsPage,
    ReviewsPage, SignupPage,
};
use yew::prelude::*;
use yew_router::prelude::*;

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/chat")]
    Chat,
    #[at("/chat/:chat_id")]
    ChatSession { chat_id: String },
    #[at("/reviews")]
    Reviews,
    #[at("/reviews/rated/:star")]
    RatedReviews { star: String },
    #[at("/reviews/:branch")]
    BranchReviews { branch: String },
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    match route {
        MainRoute::Home => html! { <HomePage /> },
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Signup => html! { <SignupPage /> },
        MainRoute::Chat => guarded(html! { <ChatPage /> }),
        MainRoute::ChatSession { chat_id } => {
            guarded(html! { <ChatPage chat_id={Some(chat_id)} /> })
        }
        MainRoute::Reviews => html! { <ReviewsPage /> },
        MainRoute::RatedReviews { star } => html! { <RatedReviewsPage star={star} /> },
        MainRoute::BranchReviews { branch } => html! { <BranchReviewsPage branch={branch} /> },
        MainRoute::Profile => guarded(html! { <ProfilePage /> }),
        MainRoute::NotFound => html! { <NotFoundPage /> },
    }
}

/// Renders protected content only while a non-expired token is stored.
///
/// A stale token is cleared before redirecting so the login page starts
/// from a clean slate.
fn guarded(content: Html) -> Html {
    if auth::is_token_expired(auth::stored_token().as_deref()) {
        auth::clear_token();
        html! { <Redirect<MainRoute> to={MainRoute::Login} /> }
    } else {
        content
    }
}
