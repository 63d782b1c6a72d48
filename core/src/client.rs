//! Stateless HTTP request builder and response parser for the Countries API.
//!
//! # Design
//! `CountryClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. Create and update accept either a record or an empty body
//! back, so their parsers return `Option<Country>`.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Country, CountryId};

const RESOURCE: &str = "Countries";

/// Synchronous, stateless client for the Countries API.
#[derive(Debug, Clone)]
pub struct CountryClient {
    base_url: String,
}

impl CountryClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection(&self) -> String {
        format!("{}/{RESOURCE}", self.base_url)
    }

    fn member(&self, id: CountryId) -> String {
        format!("{}/{RESOURCE}/{id}", self.base_url)
    }

    pub fn build_list_countries(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get_country(&self, id: CountryId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.member(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_country(&self, input: &Country) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection(),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_update_country(&self, id: CountryId, input: &Country) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: self.member(id),
            headers: json_headers(),
            body: Some(to_json(input)?),
        })
    }

    pub fn build_delete_country(&self, id: CountryId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.member(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_countries(&self, response: HttpResponse) -> Result<Vec<Country>, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_get_country(&self, response: HttpResponse) -> Result<Country, ApiError> {
        check_status(&response)?;
        from_json(&response.body)
    }

    pub fn parse_create_country(&self, response: HttpResponse) -> Result<Option<Country>, ApiError> {
        check_status(&response)?;
        optional_json(&response.body)
    }

    pub fn parse_update_country(&self, response: HttpResponse) -> Result<Option<Country>, ApiError> {
        check_status(&response)?;
        optional_json(&response.body)
    }

    pub fn parse_delete_country(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn to_json(input: &Country) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

fn optional_json(body: &str) -> Result<Option<Country>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    from_json(body).map(Some)
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
