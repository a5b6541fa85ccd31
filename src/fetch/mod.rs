// src/fetch/mod.rs

use reqwest::Client;
use tracing::{debug, info, instrument};
use url::Url;

use crate::config::USER_AGENT;
use crate::error::{CheckError, Result};

/// Build the HTTP client used for a run, carrying the fixed user agent.
pub fn client() -> Result<Client> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

/// GET `url` once and return the body text. Any non-2xx status is an error.
#[instrument(level = "info", skip(client))]
pub async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|source| CheckError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    debug!("Fetching text from {}", parsed);
    let resp = client
        .get(parsed.clone())
        .send()
        .await?;

    let status = resp.status();
    if !status.is_success() {
        return Err(CheckError::Status {
            url: parsed.to_string(),
            status,
        });
    }

    let body = resp.text().await?;
    info!(url = %parsed, %status, bytes = body.len(), "fetched");
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn sends_browser_user_agent() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/devices"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .expect(1)
            .mount(&server)
            .await;

        let body = fetch_page(&client()?, &format!("{}/devices", server.uri())).await?;
        assert_eq!(body, "<html></html>");

        let received = server.received_requests().await.unwrap_or_default();
        assert_eq!(received.len(), 1);
        let ua = received[0]
            .headers
            .get("user-agent")
            .and_then(|v| v.to_str().ok());
        assert_eq!(ua, Some(USER_AGENT));
        Ok(())
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() -> Result<()> {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = fetch_page(&client()?, &server.uri()).await.unwrap_err();
        match &err {
            CheckError::Status { status, .. } => assert_eq!(status.as_u16(), 503),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.exit_code(), 10);
        Ok(())
    }

    #[tokio::test]
    async fn rejects_malformed_url() -> Result<()> {
        let err = fetch_page(&client()?, "not a url").await.unwrap_err();
        assert!(matches!(err, CheckError::InvalidUrl { .. }));
        Ok(())
    }
}
