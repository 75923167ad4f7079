use crate::errors::FetchError;
use crate::models::Post;
use reqwest::Client;

/// Post Source: one-shot GET of the post collection from a fixed endpoint.
pub struct PostClient {
    client: Client,
    endpoint: String,
}

impl PostClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetches the post list, preserving server order. A single failed
    /// attempt surfaces immediately; there is no retry and no timeout.
    pub async fn fetch(&self) -> Result<Vec<Post>, FetchError> {
        log::info!("Fetching posts from {}", self.endpoint);

        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Post fetch failed with status {}", status);
            return Err(FetchError::Status(status.as_u16()));
        }

        // Decode from the raw body so a malformed payload is a Decode error,
        // distinct from transport failures.
        let body = response.text().await?;
        let posts: Vec<Post> = serde_json::from_str(&body)?;

        log::info!("Fetched {} posts", posts.len());
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_preserves_server_order_and_ignores_extra_fields() {
        let server = MockServer::start().await;
        let payload = serde_json::json!([
            {"userId": 1, "id": 2, "title": "B", "body": "second"},
            {"userId": 1, "id": 1, "title": "A", "body": "first"},
        ]);
        Mock::given(method("GET"))
            .and(path("/posts"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload))
            .mount(&server)
            .await;

        let client = PostClient::new(format!("{}/posts", server.uri()));
        let posts = client.fetch().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(
            posts[0],
            Post {
                id: 2,
                title: "B".into(),
                body: "second".into()
            }
        );
        assert_eq!(posts[1].id, 1);
    }

    #[tokio::test]
    async fn test_fetch_non_2xx_is_a_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = PostClient::new(server.uri());
        match client.fetch().await {
            Err(FetchError::Status(500)) => {}
            other => panic!("expected Status(500), got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_malformed_payload_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = PostClient::new(server.uri());
        match client.fetch().await {
            Err(FetchError::Decode(_)) => {}
            other => panic!("expected Decode, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_missing_field_fails_closed() {
        let server = MockServer::start().await;
        // No `title`: the object must not reach the UI layer half-decoded.
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!([{"id": 1, "body": "x"}])),
            )
            .mount(&server)
            .await;

        let client = PostClient::new(server.uri());
        match client.fetch().await {
            Err(FetchError::Decode(_)) => {}
            other => panic!("expected Decode, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host_is_a_network_error() {
        let client = PostClient::new("http://127.0.0.1:1/posts");
        match client.fetch().await {
            Err(FetchError::Network(_)) => {}
            other => panic!("expected Network, got {other:?}"),
        }
    }
}
