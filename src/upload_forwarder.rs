use crate::api_contracts::{FileType, UploadFromUrlRequest, UploadFromUrlResponse};
use crate::config::GatewayConfig;
use crate::error::ForwardError;
use reqwest::StatusCode;

/// Logged response bodies are cut to this many characters
const MAX_LOGGED_BODY_CHARS: usize = 500;

/// Client that asks the gateway to pull a remote file into object storage
#[derive(Debug, Clone)]
pub struct UploadForwarder {
    config: GatewayConfig,
    client: reqwest::Client,
}

impl UploadForwarder {
    /// Create a forwarder for the given gateway
    pub fn new(config: GatewayConfig) -> Self {
        // Include version in User-Agent header so the gateway can tell callers apart
        let user_agent = format!("oss-upload-forwarder/{}", env!("CARGO_PKG_VERSION"));

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&user_agent)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self { config, client }
    }

    /// Create a forwarder from `GATEWAY_URL`
    pub fn from_env() -> Self {
        Self::new(GatewayConfig::from_env())
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Forward `url` to the gateway and return the storage URL.
    ///
    /// Never fails: if the upload cannot be confirmed for any reason the
    /// original `url` comes back unchanged. `ext` and `prefix` are accepted
    /// for call-site compatibility and ignored; naming is up to the gateway.
    pub async fn forward_upload(
        &self,
        url: &str,
        _ext: Option<&str>,
        _prefix: Option<&str>,
        file_type: Option<FileType>,
    ) -> String {
        let request = UploadFromUrlRequest::new(url, file_type.unwrap_or_default());

        match self.try_forward(&request).await {
            Ok(storage_url) => storage_url,
            Err(e) => {
                match &e {
                    ForwardError::GatewayRejection { status, body } => {
                        tracing::warn!(
                            kind = e.kind(),
                            status,
                            body = truncate_for_log(body),
                            fallback = url,
                            "gateway rejected upload, using original url"
                        );
                    }
                    ForwardError::Payload { success, error } => {
                        tracing::warn!(
                            kind = e.kind(),
                            success,
                            error = ?error,
                            fallback = url,
                            "unexpected gateway payload, using original url"
                        );
                    }
                    _ => {
                        tracing::error!(
                            kind = e.kind(),
                            fallback = url,
                            "upload forward failed, using original url: {}",
                            e
                        );
                    }
                }
                url.to_string()
            }
        }
    }

    /// Send one upload request and report exactly why it failed, if it did
    pub async fn try_forward(&self, request: &UploadFromUrlRequest) -> Result<String, ForwardError> {
        let endpoint = self.config.upload_from_url_endpoint();

        tracing::debug!(
            endpoint = %endpoint,
            source = %request.url,
            file_type = %request.file_type,
            "forwarding upload to gateway"
        );

        let response = self.client
            .post(&endpoint)
            .timeout(self.config.timeout)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(ForwardError::GatewayRejection {
                status: status.as_u16(),
                body,
            });
        }

        let data: UploadFromUrlResponse = serde_json::from_str(&body).map_err(|e| {
            ForwardError::MalformedResponse(format!("{} - body: {}", e, truncate_for_log(&body)))
        })?;

        match data.storage_url() {
            Some(storage_url) => {
                tracing::info!(
                    source = %request.url,
                    storage_url,
                    "gateway upload succeeded"
                );
                Ok(storage_url.to_string())
            }
            None => Err(ForwardError::Payload {
                success: data.success,
                error: data.error,
            }),
        }
    }
}

/// One-shot variant for call sites that don't keep a forwarder around
pub async fn forward_upload(
    config: &GatewayConfig,
    url: &str,
    ext: Option<&str>,
    prefix: Option<&str>,
    file_type: Option<FileType>,
) -> String {
    UploadForwarder::new(config.clone())
        .forward_upload(url, ext, prefix, file_type)
        .await
}

fn truncate_for_log(body: &str) -> &str {
    match body.char_indices().nth(MAX_LOGGED_BODY_CHARS) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
