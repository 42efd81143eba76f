use gloo::net::http::{Request, RequestBuilder, Response};
use shared::{
    ApiErrorBody, AuthResponse, Credentials, NewTransactionRequest, RegisterRequest,
    TransactionListResponse, TransactionResponse, UpdateTransactionRequest,
};

const DEFAULT_BASE_URL: &str = "https://wallet-app-18x3.onrender.com";

/// REST client for the wallet backend.
///
/// The bearer credential is an immutable snapshot taken when the client is
/// built. Callers construct a fresh client per dispatch via [`with_token`],
/// so a logout can never strip the credential out from under a request
/// that is already in flight.
///
/// [`with_token`]: ApiClient::with_token
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Client with the default base URL and no credential.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
        }
    }

    /// Copy of this client carrying the given credential snapshot.
    pub fn with_token(&self, token: Option<String>) -> Self {
        Self {
            base_url: self.base_url.clone(),
            token,
        }
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Register a new user account.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, String> {
        let url = format!("{}/user/register", self.base_url);

        match Request::post(&url)
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<AuthResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    Err(error_message(response).await)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Log in with email and password.
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, String> {
        let url = format!("{}/user/login", self.base_url);

        match Request::post(&url)
            .json(credentials)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<AuthResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    Err(error_message(response).await)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// End the current server-side session.
    pub async fn logout(&self) -> Result<(), String> {
        let url = format!("{}/user/logout", self.base_url);

        match self.authorize(Request::get(&url)).send().await {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    Err(error_message(response).await)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Rehydrate the user from a persisted credential.
    pub async fn refresh_user(&self) -> Result<AuthResponse, String> {
        let url = format!("{}/user/current", self.base_url);

        match self.authorize(Request::get(&url)).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<AuthResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    Err(error_message(response).await)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Fetch the full transaction list for a user.
    pub async fn fetch_transactions(
        &self,
        user_id: &str,
    ) -> Result<TransactionListResponse, String> {
        let url = format!(
            "{}/user/{}/transactions?userId={}",
            self.base_url, user_id, user_id
        );

        match self.authorize(Request::get(&url)).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<TransactionListResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse transactions: {}", e)),
                    }
                } else {
                    Err(error_message(response).await)
                }
            }
            Err(e) => Err(format!("Failed to fetch transactions: {}", e)),
        }
    }

    /// Record a new transaction and receive the updated balance.
    pub async fn add_transaction(
        &self,
        request: &NewTransactionRequest,
    ) -> Result<TransactionResponse, String> {
        let url = format!("{}/transaction", self.base_url);

        match self
            .authorize(Request::post(&url))
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<TransactionResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    Err(error_message(response).await)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Rewrite an existing transaction and receive the updated balance.
    pub async fn update_transaction(
        &self,
        request: &UpdateTransactionRequest,
    ) -> Result<TransactionResponse, String> {
        let url = format!("{}/transaction/{}", self.base_url, request.transaction_id);

        match self
            .authorize(Request::patch(&url))
            .json(request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<TransactionResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    Err(error_message(response).await)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Delete a transaction and receive the updated balance.
    pub async fn delete_transaction(&self, id: &str) -> Result<TransactionResponse, String> {
        let url = format!("{}/transaction/{}", self.base_url, id);

        match self.authorize(Request::delete(&url)).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<TransactionResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    Err(error_message(response).await)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Reduces a non-2xx response to the backend's message when it sent one,
/// otherwise to a status line with the raw body.
async fn error_message(response: Response) -> String {
    let status = response.status();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    match serde_json::from_str::<ApiErrorBody>(&text) {
        Ok(body) => body.message,
        Err(_) => format!("Server error {}: {}", status, text),
    }
}
