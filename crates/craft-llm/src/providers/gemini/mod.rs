//! Google Gemini provider implementation.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::{Client, Proxy, StatusCode};

use craft_core::config::{DEFAULT_API_BASE, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};
use craft_core::Config;

use crate::protocol::gemini::{GenerateContentRequest, GenerateContentResponse, InlineData};
use crate::provider::{
    mentions_rate_limit, GenerativeProvider, InlineImage, LLMError, Result, StructuredRequest,
};

/// Google Gemini API provider.
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    text_model: String,
    image_model: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider with an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_client(Client::new(), api_key)
    }

    pub fn with_client(client: Client, api_key: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_API_BASE.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }

    /// Build a provider from the layered configuration. A missing API key is
    /// not an error here; it surfaces from [`GenerativeProvider::ensure_credential`].
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Self::build_http_client(config)?;
        Ok(Self::with_client(client, config.credential().unwrap_or_default())
            .with_base_url(config.api_base())
            .with_text_model(config.text_model())
            .with_image_model(config.image_model()))
    }

    fn build_http_client(config: &Config) -> Result<Client> {
        let mut builder = Client::builder();
        if !config.http_proxy.is_empty() {
            builder = builder.proxy(Proxy::http(&config.http_proxy)?);
        }
        if !config.https_proxy.is_empty() {
            builder = builder.proxy(Proxy::https(&config.https_proxy)?);
        }
        Ok(builder.build()?)
    }

    /// Set a custom base URL (e.g., for proxies or alternative endpoints).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, model, self.api_key
        )
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        self.ensure_credential()?;

        log::debug!(
            "Gemini request to '{}' with {} part(s)",
            model,
            request.contents.iter().map(|c| c.parts.len()).sum::<usize>()
        );

        let response = self
            .client
            .post(self.endpoint(model))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(LLMError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.map_err(LLMError::Http)?;
            return Err(classify_status(status, text));
        }

        let body = response.text().await.map_err(LLMError::Http)?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn classify_status(status: StatusCode, text: String) -> LLMError {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return LLMError::Auth(format!(
            "Gemini authentication failed: {}. Please check your API key.",
            text
        ));
    }
    if status == StatusCode::TOO_MANY_REQUESTS || mentions_rate_limit(&text) {
        return LLMError::RateLimited(format!("HTTP {}: {}", status, text));
    }
    LLMError::Api(format!("Gemini API error: HTTP {}: {}", status, text))
}

#[async_trait]
impl GenerativeProvider for GeminiProvider {
    fn ensure_credential(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(LLMError::MissingCredential);
        }
        Ok(())
    }

    async fn generate_structured(&self, request: &StructuredRequest) -> Result<String> {
        let image = InlineData {
            mime_type: request.image.mime_type.clone(),
            data: STANDARD.encode(&request.image.data),
        };
        let body = GenerateContentRequest::structured(
            image,
            request.prompt.clone(),
            &request.generation_config,
            request.response_schema.clone(),
        );

        let response = self.generate_content(&self.text_model, &body).await?;
        response
            .text()
            .map(|text| text.trim().to_string())
            .ok_or_else(|| LLMError::Api("Gemini returned no text content".to_string()))
    }

    async fn generate_image(&self, prompt: &str) -> Result<Option<InlineImage>> {
        let body = GenerateContentRequest::image(prompt);
        let response = self.generate_content(&self.image_model, &body).await?;

        let image = response.inline_image().map(|data| InlineImage {
            mime_type: data.mime_type.clone(),
            data: data.data.clone(),
        });
        if image.is_none() {
            log::warn!("Gemini image response carried no inline image data");
        }
        Ok(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craft_core::{GenerationConfig, ImagePayload};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn network_tests_disabled() -> bool {
        std::env::var_os("CODEX_SANDBOX_NETWORK_DISABLED").is_some()
    }

    fn structured_request() -> StructuredRequest {
        StructuredRequest {
            image: ImagePayload::new("image/png", vec![1, 2, 3]),
            prompt: "Build a toy".to_string(),
            generation_config: GenerationConfig::default(),
            response_schema: crate::schema::craft_idea_schema(),
        }
    }

    #[test]
    fn test_new_provider() {
        let provider = GeminiProvider::new("test_key");
        assert_eq!(provider.api_key, "test_key");
        assert_eq!(provider.base_url, DEFAULT_API_BASE);
        assert_eq!(provider.text_model, "gemini-2.5-flash");
        assert_eq!(provider.image_model, "gemini-2.5-flash-image");
    }

    #[test]
    fn test_chained_builders() {
        let provider = GeminiProvider::new("test_key")
            .with_base_url("https://custom.api.com/")
            .with_text_model("gemini-text")
            .with_image_model("gemini-image");

        assert_eq!(provider.base_url, "https://custom.api.com");
        assert_eq!(provider.text_model, "gemini-text");
        assert_eq!(provider.image_model, "gemini-image");
    }

    #[test]
    fn test_url_construction() {
        let provider = GeminiProvider::new("my_api_key_123").with_base_url("https://test.api.com/v1beta");
        assert_eq!(
            provider.endpoint("gemini-custom"),
            "https://test.api.com/v1beta/models/gemini-custom:generateContent?key=my_api_key_123"
        );
    }

    #[test]
    fn test_from_config_without_key_fails_credential_check() {
        let provider = GeminiProvider::from_config(&Config::empty()).unwrap();
        assert!(matches!(
            provider.ensure_credential(),
            Err(LLMError::MissingCredential)
        ));
    }

    #[test]
    fn test_status_classification() {
        assert!(matches!(
            classify_status(StatusCode::FORBIDDEN, "denied".into()),
            LLMError::Auth(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::TOO_MANY_REQUESTS, "slow".into()),
            LLMError::RateLimited(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::BAD_REQUEST, r#"{"status":"RESOURCE_EXHAUSTED"}"#.into()),
            LLMError::RateLimited(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".into()),
            LLMError::Api(_)
        ));
    }

    #[tokio::test]
    async fn missing_key_makes_no_request() {
        if network_tests_disabled() {
            return;
        }
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let provider = GeminiProvider::new("").with_base_url(mock_server.uri());
        let err = provider.generate_image("a cat").await.unwrap_err();
        assert!(matches!(err, LLMError::MissingCredential));
    }

    #[tokio::test]
    async fn structured_call_sends_image_schema_and_sampling() {
        if network_tests_disabled() {
            return;
        }
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-flash:generateContent"))
            .and(query_param("key", "k"))
            .and(body_partial_json(json!({
                "contents": [{
                    "role": "user",
                    "parts": [
                        {"inlineData": {"mimeType": "image/png", "data": "AQID"}},
                        {"text": "Build a toy"}
                    ]
                }],
                "generationConfig": {
                    "responseMimeType": "application/json",
                    "topK": 40
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {"role": "model", "parts": [{"text": "  {\"title\":\"Robot\"}\n"}]}
                }]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let provider = GeminiProvider::new("k").with_base_url(mock_server.uri());
        let text = provider
            .generate_structured(&structured_request())
            .await
            .expect("structured response");
        assert_eq!(text, "{\"title\":\"Robot\"}");
    }

    #[tokio::test]
    async fn image_call_returns_inline_data() {
        if network_tests_disabled() {
            return;
        }
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-2.5-flash-image:generateContent"))
            .and(body_partial_json(json!({
                "generationConfig": {"responseModalities": ["IMAGE"]}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{
                    "content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": "iVBOR"}}]}
                }]
            })))
            .mount(&mock_server)
            .await;

        let provider = GeminiProvider::new("k").with_base_url(mock_server.uri());
        let image = provider.generate_image("a rocket").await.unwrap().unwrap();
        assert_eq!(image.to_data_uri(), "data:image/png;base64,iVBOR");
    }

    #[tokio::test]
    async fn image_call_without_inline_data_is_none() {
        if network_tests_disabled() {
            return;
        }
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "I can't draw that"}]}}]
            })))
            .mount(&mock_server)
            .await;

        let provider = GeminiProvider::new("k").with_base_url(mock_server.uri());
        assert!(provider.generate_image("a rocket").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn quota_errors_map_to_rate_limited() {
        if network_tests_disabled() {
            return;
        }
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}
            })))
            .mount(&mock_server)
            .await;

        let provider = GeminiProvider::new("k").with_base_url(mock_server.uri());
        let err = provider.generate_image("a rocket").await.unwrap_err();
        assert!(err.is_rate_limited(), "got {err:?}");
    }

    #[tokio::test]
    async fn structured_call_without_text_is_an_api_error() {
        if network_tests_disabled() {
            return;
        }
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&mock_server)
            .await;

        let provider = GeminiProvider::new("k").with_base_url(mock_server.uri());
        let err = provider
            .generate_structured(&structured_request())
            .await
            .unwrap_err();
        assert!(matches!(err, LLMError::Api(_)));
    }
}
