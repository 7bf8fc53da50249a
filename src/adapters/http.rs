use crate::domain::model::ApiResponse;
use crate::domain::ports::Transport;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// reqwest 版的 Transport。不帶認證標頭，也不設逾時。
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<ApiResponse> {
        tracing::debug!("POST {}", url);
        let response = self.client.post(url).json(body).send().await?;

        let status = response.status().as_u16();
        tracing::debug!("Response status: {}", status);

        let text = response.text().await?;
        Ok(ApiResponse::from_text(status, &text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_post_json_sends_body_and_reads_response() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/echo")
                .json_body(json!({"email": "a@b.com"}));
            then.status(201).json_body(json!({"created": true}));
        });

        let transport = HttpTransport::new();
        let resp = transport
            .post_json(&server.url("/echo"), &json!({"email": "a@b.com"}))
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(resp.status, 201);
        assert_eq!(resp.body, json!({"created": true}));
    }

    #[tokio::test]
    async fn test_post_json_non_success_is_not_an_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST).path("/fail");
            then.status(500).body("server error");
        });

        let resp = HttpTransport::new()
            .post_json(&server.url("/fail"), &json!({}))
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(resp.status, 500);
        assert_eq!(resp.body, json!("server error"));
    }
}
