use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    ApiResult, Company, DashboardConfig, LoginRequest, LoginResponse, NewWorker, Page, PageRequest, Session,
    Worker,
};
use std::rc::Rc;
use crate::services::logging::Logger;

/// Page size used when loading lookup lists such as companies
const LOOKUP_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Delete,
}

impl Verb {
    fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Delete => "DELETE",
        }
    }
}

/// API client for communicating with the backend server.
///
/// Every call resolves to an [`ApiResult`]; transport errors become
/// failures with status 0. Each response status is reported to the
/// session so an expired token signs the user out.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    config: Rc<DashboardConfig>,
    session: Session,
}

impl ApiClient {
    pub fn new(config: Rc<DashboardConfig>, session: Session) -> Self {
        Self { config, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send::<(), T>(Verb::Get, path, None).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> ApiResult<T> {
        self.send(Verb::Post, path, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.send::<(), T>(Verb::Delete, path, None).await
    }

    async fn send<B: Serialize, T: DeserializeOwned>(&self, verb: Verb, path: &str, body: Option<&B>) -> ApiResult<T> {
        let url = self.config.endpoint(path);
        Logger::debug_with_component("api", &format!("{} {}", verb.as_str(), url));

        let builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Delete => Request::delete(&url),
        };
        let builder = builder.header("Accept", "application/json");
        let builder = match self.session.authorization() {
            Some(authorization) => builder.header("Authorization", &authorization),
            None => builder,
        };

        let sent = match body {
            Some(body) => match builder.json(body) {
                Ok(request) => request.send().await,
                Err(e) => return ApiResult::network_error(format!("Failed to serialize request: {}", e)),
            },
            None => builder.send().await,
        };

        let response = match sent {
            Ok(response) => response,
            Err(e) => {
                Logger::warn_with_component("api", &format!("{} {} failed: {}", verb.as_str(), url, e));
                return ApiResult::network_error(format!("Network error: {}", e));
            }
        };

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        self.session.observe_status(status);

        let result = ApiResult::from_response(status, &text);
        if let Some(message) = result.message() {
            Logger::debug_with_component("api", &format!("{} {} -> {}: {}", verb.as_str(), url, status, message));
        }
        result
    }

    /// Exchange credentials for an access token
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<LoginResponse> {
        self.post("auth/login/", request).await
    }

    pub async fn list_workers(&self, page: PageRequest) -> ApiResult<Page<Worker>> {
        self.get(&format!("workers/?{}", page.query())).await
    }

    pub async fn create_worker(&self, worker: &NewWorker) -> ApiResult<Worker> {
        self.post("workers/", worker).await
    }

    pub async fn delete_worker(&self, id: u64) -> ApiResult<()> {
        self.delete(&format!("workers/{}/", id)).await
    }

    pub async fn list_companies(&self) -> ApiResult<Page<Company>> {
        self.get(&format!("companies/?{}", PageRequest::first(LOOKUP_PAGE_SIZE).query())).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::MemoryTokenStore;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn client() -> ApiClient {
        let config = DashboardConfig { api_base_url: "http://127.0.0.1:9/api".to_string(), ..DashboardConfig::default() };
        ApiClient::new(Rc::new(config), Session::new(Rc::new(MemoryTokenStore::default()), || {}))
    }

    #[wasm_bindgen_test]
    fn test_clients_share_session() {
        let api = client();
        let copy = api.clone();
        api.session().sign_in("abc");
        assert_eq!(copy.session().authorization(), Some("Bearer abc".to_string()));
        assert_eq!(api, copy);
    }

    #[wasm_bindgen_test]
    async fn test_unreachable_server_is_network_failure() {
        let result = client().list_workers(PageRequest::first(10)).await;
        assert!(!result.is_success());
        assert_eq!(result.status(), shared::api::NETWORK_ERROR_STATUS);
    }
}
