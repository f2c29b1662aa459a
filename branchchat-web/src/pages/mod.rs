mod branch_reviews;
mod chat;
mod home;
mod login;
mod not_found;
mod profile;
mod rated_reviews;
mod reviews;
mod signup;

pub use branch_reviews::BranchReviewsPage;
pub use chat::ChatPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use profile::ProfilePage;
pub use rated_reviews::RatedReviewsPage;
pub use reviews::ReviewsPage;
pub use signup::SignupPage;
