use crate::domain::models::{FetchOutcome, ServiceIndex, ServiceList};
use crate::domain::vault::VaultClient;
use crate::infrastructure::cookie;

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, COOKIE};
use reqwest::Client;
use serde::Deserialize;

/// Name of the cookie Django stores the CSRF token in.
const CSRF_COOKIE: &str = "csrftoken";
/// Header the server checks the token against.
const CSRF_HEADER: &str = "X-CSRFToken";

fn user_agent() -> String {
    format!("coffre/{} (rust)", env!("CARGO_PKG_VERSION"))
}

/// HTTP implementation of [`VaultClient`] against the password-manager web
/// application. One request per user action; no retries.
pub struct HttpVaultClient {
    client: Client,
    base_url: String,
    cookies: String,
    csrf_token: Option<String>,
}

impl HttpVaultClient {
    pub fn new(base_url: impl Into<String>, cookies: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent())
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        let cookies = cookies.into();
        let csrf_token = cookie::cookie_value(&cookies, CSRF_COOKIE);

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cookies,
            csrf_token,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl VaultClient for HttpVaultClient {
    async fn list_services(&self) -> Result<ServiceList> {
        let response = self
            .client
            .get(self.endpoint(""))
            .header(ACCEPT, "application/json")
            .header(COOKIE, &self.cookies)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            bail!("service list request failed with status {status}");
        }

        let body = response.text().await?;
        decode_index_response(&body)
    }

    async fn fetch_entry(&self, index: ServiceIndex) -> Result<FetchOutcome> {
        let mut request = self
            .client
            .post(self.endpoint("fetch_data/"))
            .header(COOKIE, &self.cookies)
            .form(&[("item", index.to_string())]);
        if let Some(token) = &self.csrf_token {
            request = request.header(CSRF_HEADER, token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            bail!("fetch request failed with status {status}");
        }

        let body = response.text().await?;
        decode_fetch_response(&body)
    }
}

/// The JSON the index endpoint serves: the same context the server renders
/// into its page for the browser client.
#[derive(Debug, Deserialize)]
struct IndexPayload {
    categories: Vec<String>,
}

pub(crate) fn decode_index_response(body: &str) -> Result<ServiceList> {
    let payload: IndexPayload =
        serde_json::from_str(body).map_err(|e| anyhow!("unexpected service list payload: {e}"))?;
    Ok(ServiceList::new(payload.categories))
}

/// Either a credential record or a server rejection. The two shapes share
/// no required fields, so untagged deserialization is unambiguous.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FetchPayload {
    Rejected { error: String },
    Entry(crate::domain::models::CredentialRecord),
}

pub(crate) fn decode_fetch_response(body: &str) -> Result<FetchOutcome> {
    let payload: FetchPayload =
        serde_json::from_str(body).map_err(|e| anyhow!("unexpected fetch payload: {e}"))?;
    Ok(match payload {
        FetchPayload::Rejected { error } => FetchOutcome::Rejected(error),
        FetchPayload::Entry(record) => FetchOutcome::Entry(record),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_join_tolerates_trailing_slash() {
        let a = HttpVaultClient::new("https://vault.example.com", "").unwrap();
        let b = HttpVaultClient::new("https://vault.example.com/", "").unwrap();
        assert_eq!(a.endpoint("fetch_data/"), b.endpoint("fetch_data/"));
        assert_eq!(
            a.endpoint("fetch_data/"),
            "https://vault.example.com/fetch_data/"
        );
    }

    #[test]
    fn csrf_token_is_read_from_the_cookie_string() {
        let client =
            HttpVaultClient::new("https://vault.example.com", "sessionid=s; csrftoken=tok")
                .unwrap();
        assert_eq!(client.csrf_token.as_deref(), Some("tok"));

        let bare = HttpVaultClient::new("https://vault.example.com", "sessionid=s").unwrap();
        assert_eq!(bare.csrf_token, None);
    }

    #[test]
    fn decode_entry_with_all_fields() {
        let body = r#"{
            "service_name": "GitHub",
            "service_url": "https://github.com",
            "username": "octocat",
            "password": "hunter2",
            "comments": "work account"
        }"#;
        let FetchOutcome::Entry(record) = decode_fetch_response(body).unwrap() else {
            panic!("expected entry");
        };
        assert_eq!(record.service_name, "GitHub");
        assert_eq!(record.service_url.as_deref(), Some("https://github.com"));
        assert_eq!(record.comments.as_deref(), Some("work account"));
    }

    #[test]
    fn decode_entry_without_optional_fields() {
        let body = r#"{"service_name": "Café", "username": "me", "password": "p"}"#;
        let FetchOutcome::Entry(record) = decode_fetch_response(body).unwrap() else {
            panic!("expected entry");
        };
        assert_eq!(record.service_url, None);
        assert_eq!(record.comments, None);
    }

    #[test]
    fn decode_server_rejection() {
        let body = r#"{"error": "Vous avez dépassé le nombre de requêtes autorisées"}"#;
        let FetchOutcome::Rejected(message) = decode_fetch_response(body).unwrap() else {
            panic!("expected rejection");
        };
        assert!(message.contains("dépassé"));
    }

    #[test]
    fn decode_rejects_malformed_payloads() {
        assert!(decode_fetch_response("<html>login</html>").is_err());
        assert!(decode_fetch_response(r#"{"unrelated": 1}"#).is_err());
        assert!(decode_index_response("[]").is_err());
    }

    #[test]
    fn decode_index_payload() {
        let body = r#"{"categories": ["github", "gitlab"], "nb_categories": 2}"#;
        let services = decode_index_response(body).unwrap();
        assert_eq!(services.len(), 2);
        assert_eq!(
            services.get(crate::domain::models::ServiceIndex(0)),
            Some("github")
        );
    }
}
