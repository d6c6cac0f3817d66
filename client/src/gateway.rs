//! HTTP gateway over the StayFinder REST backend.

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use stayfinder_core::{ListingDraft, flatten_fields};

/// Header carrying the session token on authenticated requests.
pub const AUTH_HEADER: &str = "x-auth-token";

/// Issues HTTP requests against the configured backend, attaching the
/// session token when one is provided.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiGateway {
    http: Client,
    config: ApiConfig,
}

impl ApiGateway {
    /// Gateway over an explicit configuration.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Gateway configured from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    /// Endpoint configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET` returning parsed JSON.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-2xx responses, or parsing
    /// failures.
    pub async fn get<T: DeserializeOwned>(&self, url: &str, token: Option<&str>) -> Result<T> {
        self.send(self.http.get(url), token).await
    }

    /// `POST` with a JSON body, returning parsed JSON.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-2xx responses, or parsing
    /// failures.
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T> {
        self.send(self.http.post(url).json(body), token).await
    }

    /// `PUT` with a JSON body, returning parsed JSON.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-2xx responses, or parsing
    /// failures.
    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T> {
        self.send(self.http.put(url).json(body), token).await
    }

    /// `DELETE` returning parsed JSON.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-2xx responses, or parsing
    /// failures.
    pub async fn delete<T: DeserializeOwned>(&self, url: &str, token: Option<&str>) -> Result<T> {
        self.send(self.http.delete(url), token).await
    }

    /// `POST` a listing draft as multipart form data.
    ///
    /// # Errors
    ///
    /// Returns errors for invalid image content types, network failures,
    /// non-2xx responses, or parsing failures.
    pub async fn post_listing_form<T: DeserializeOwned>(
        &self,
        url: &str,
        token: Option<&str>,
        draft: &ListingDraft,
    ) -> Result<T> {
        let form = listing_form(draft)?;
        self.send(self.http.post(url).multipart(form), token).await
    }

    /// `PUT` a listing draft as multipart form data.
    ///
    /// # Errors
    ///
    /// Returns errors for invalid image content types, network failures,
    /// non-2xx responses, or parsing failures.
    pub async fn put_listing_form<T: DeserializeOwned>(
        &self,
        url: &str,
        token: Option<&str>,
        draft: &ListingDraft,
    ) -> Result<T> {
        let form = listing_form(draft)?;
        self.send(self.http.put(url).multipart(form), token).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        token: Option<&str>,
    ) -> Result<T> {
        let request = match token {
            Some(token) => request.header(AUTH_HEADER, token),
            None => request,
        };
        let response = request
            .send()
            .await
            .map_err(|e| Error::RequestFailed(e.to_string()))?;
        parse_response(response).await
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| Error::ResponseParseFailed(e.to_string()))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(Error::Api {
            status: status.as_u16(),
            body,
        })
    }
}

/// Encode a listing draft as the multipart form the backend expects:
/// bracket-flattened text fields plus repeated `images` file parts.
fn listing_form(draft: &ListingDraft) -> Result<Form> {
    let mut form = Form::new();
    for (name, value) in flatten_fields(draft) {
        form = form.text(name, value);
    }
    for image in &draft.images {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.content_type)
            .map_err(|e| Error::RequestFailed(format!("invalid image content type: {e}")))?;
        form = form.part("images", part);
    }
    Ok(form)
}
