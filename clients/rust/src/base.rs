use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug)]
pub enum APIErrorVariant {
    Network,
    MalformedResponse,
    UnexpectedStatusCode,
}

#[derive(Debug)]
pub struct APIError {
    pub variant: APIErrorVariant,
    pub status: Option<StatusCode>,
    pub message: String,
}

pub type APIResponse<T> = Result<T, APIError>;

pub(crate) struct BaseClient {
    client: Client,
    address: String,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            client: Client::new(),
            address: format!("{}/api/v1", address.trim_end_matches('/')),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}/{}", self.address, path))
    }

    async fn handle_api_response<T: DeserializeOwned>(
        req: RequestBuilder,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let res = req.send().await.map_err(|e| APIError {
            variant: APIErrorVariant::Network,
            status: None,
            message: e.to_string(),
        })?;

        let status = res.status();
        if status != expected_status_code {
            return Err(APIError {
                variant: APIErrorVariant::UnexpectedStatusCode,
                status: Some(status),
                message: res.text().await.unwrap_or_default(),
            });
        }

        res.json::<T>().await.map_err(|e| APIError {
            variant: APIErrorVariant::MalformedResponse,
            status: Some(status),
            message: e.to_string(),
        })
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        Self::handle_api_response(self.request(Method::GET, &path), expected_status_code).await
    }

    pub async fn post<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        let req = self.request(Method::POST, &path).json(&body);
        Self::handle_api_response(req, expected_status_code).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status_code: StatusCode,
    ) -> APIResponse<T> {
        Self::handle_api_response(self.request(Method::DELETE, &path), expected_status_code).await
    }
}
