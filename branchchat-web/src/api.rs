use crate::auth;
use crate::config::FrontendConfig;
use crate::engine::ReviewFilter;
use once_cell::unsync::OnceCell;
use reqwest::{Client, Error, RequestBuilder};
use shared::models::{
    BankProfileData, ChatCreated, ChatSummary, InstitutionProfileResponse, LoginRequest, Review,
    SendMessageRequest, SignupRequest, SignupResponse, StoredMessage, TokenResponse,
};

thread_local! {
    static SHARED_CLIENT: OnceCell<ChatbotClient> = OnceCell::new();
}

/// Lightweight API client for the BranchChat backend.
#[derive(Clone, Debug)]
pub struct ChatbotClient {
    base_url: String,
    socket_url: String,
    client: Client,
}

impl ChatbotClient {
    /// Create a new API client against the provided endpoints.
    pub fn new(base_url: &str, socket_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            socket_url: socket_url.to_string(),
            client: Client::new(),
        }
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| {
                let config = FrontendConfig::new();
                Self::new(config.api_base_url(), config.socket_url())
            })
            .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match auth::stored_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Exchange form-encoded credentials for a bearer token.
    pub async fn login(&self, payload: &LoginRequest) -> Result<TokenResponse, Error> {
        let url = self.api_url("login");
        let response = self.client.post(url).form(payload).send().await?;
        response.error_for_status()?.json().await
    }

    /// Register a new account.
    pub async fn signup(&self, payload: &SignupRequest) -> Result<SignupResponse, Error> {
        let url = self.api_url("signup");
        let response = self.client.post(url).json(payload).send().await?;
        response.error_for_status()?.json().await
    }

    /// List the chat sessions owned by the authenticated user.
    pub async fn list_chats(&self) -> Result<Vec<ChatSummary>, Error> {
        let url = self.api_url("chats/");
        let response = self.authorize(self.client.get(url)).send().await?;
        response.error_for_status()?.json().await
    }

    /// Open a new chat session.
    pub async fn create_chat(&self) -> Result<ChatCreated, Error> {
        let url = self.api_url("chats/");
        let response = self
            .authorize(self.client.post(url))
            .json(&serde_json::json!({}))
            .send()
            .await?;
        response.error_for_status()?.json().await
    }

    /// Delete a chat session.
    pub async fn delete_chat(&self, chat_id: i64) -> Result<(), Error> {
        let url = self.api_url(&format!("chats/{chat_id}"));
        let response = self.authorize(self.client.delete(url)).send().await?;
        response.error_for_status()?;
        Ok(())
    }

    /// Fetch the ordered message history of a session.
    pub async fn chat_messages(&self, chat_id: i64) -> Result<Vec<StoredMessage>, Error> {
        let url = self.api_url(&format!("chats/{chat_id}/messages"));
        let response = self.authorize(self.client.get(url)).send().await?;
        response.error_for_status()?.json().await
    }

    /// Send a message through the request/response variant; the backend
    /// answers with the persisted user and bot messages.
    pub async fn send_message(
        &self,
        payload: &SendMessageRequest,
    ) -> Result<Vec<StoredMessage>, Error> {
        let url = self.api_url("messages/");
        let response = self
            .authorize(self.client.post(url))
            .json(payload)
            .send()
            .await?;
        response.error_for_status()?.json().await
    }

    /// Fetch the free-text institution profile.
    pub async fn institution_profile(&self) -> Result<InstitutionProfileResponse, Error> {
        let url = self.api_url("institution-profile");
        let response = self.client.get(url).send().await?;
        response.error_for_status()?.json().await
    }

    /// Fetch the structured profile dataset.
    pub async fn bank_profile_data(&self) -> Result<BankProfileData, Error> {
        let url = self.api_url("data/bank_profile_data.json");
        let response = self.client.get(url).send().await?;
        response.error_for_status()?.json().await
    }

    /// Fetch reviews, filtered server-side by the active criteria.
    pub async fn reviews(&self, filter: &ReviewFilter) -> Result<Vec<Review>, Error> {
        let url = self.api_url("reviews");
        let mut request = self.client.get(url);
        for (key, value) in review_query_pairs(filter) {
            request = request.query(&[(key, value)]);
        }
        let response = request.send().await?;
        response.error_for_status()?.json().await
    }

    /// The websocket endpoint for streamed replies.
    pub fn socket_url(&self) -> &str {
        &self.socket_url
    }
}

fn review_query_pairs(filter: &ReviewFilter) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(stars) = filter.stars {
        pairs.push(("stars", stars.to_string()));
    }
    if let Some(sentiment) = filter.sentiment {
        pairs.push(("sentiment", sentiment.as_str().to_string()));
    }
    if let Some(location) = &filter.location {
        pairs.push(("location", location.clone()));
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Sentiment;

    #[test]
    fn test_api_url_joining() {
        let client = ChatbotClient::new("http://localhost:8000/", "ws://localhost:8090");
        assert_eq!(
            client.api_url("/chats/"),
            "http://localhost:8000/chats/"
        );
        assert_eq!(
            client.api_url("chats/7/messages"),
            "http://localhost:8000/chats/7/messages"
        );
    }

    #[test]
    fn test_socket_url_passthrough() {
        let client = ChatbotClient::new("http://localhost:8000", "ws://localhost:8090");
        assert_eq!(client.socket_url(), "ws://localhost:8090");
    }

    #[test]
    fn test_review_query_skips_inactive_criteria() {
        let pairs = review_query_pairs(&ReviewFilter::default());
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_review_query_includes_active_criteria() {
        let filter = ReviewFilter {
            stars: Some(4),
            sentiment: Some(Sentiment::Positive),
            location: Some("فرع رام الله - المنارة".to_string()),
        };

        let pairs = review_query_pairs(&filter);
        assert_eq!(
            pairs,
            vec![
                ("stars", "4".to_string()),
                ("sentiment", "Positive".to_string()),
                ("location", "فرع رام الله - المنارة".to_string()),
            ]
        );
    }
}
