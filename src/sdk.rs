//! AWS SDK binding for the client seams.

use async_trait::async_trait;
use aws_config::{timeout::TimeoutConfig, BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::config::Builder as S3ConfigBuilder;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_s3::Client as S3Client;
use std::sync::Arc;
use tracing::debug;

use crate::client::{ClientError, ClientProvider, ObjectBody, ObjectClient};
use crate::config::{FetcherConfig, S3Credentials, DEFAULT_REGION};
use crate::errors::FetchResult;

/// Builds per-region [`SdkObjectClient`]s from a [`FetcherConfig`].
pub struct SdkClientProvider {
    config: FetcherConfig,
}

impl SdkClientProvider {
    pub fn new(config: FetcherConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ClientProvider for SdkClientProvider {
    async fn client_for_region(&self, region: &str) -> FetchResult<Arc<dyn ObjectClient>> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .timeout_config(
                TimeoutConfig::builder()
                    .connect_timeout(self.config.connect_timeout)
                    .read_timeout(self.config.request_timeout)
                    .build(),
            );

        match &self.config.credentials {
            S3Credentials::AccessKey {
                access_key_id,
                secret_access_key,
                session_token,
            } => {
                let creds = Credentials::new(
                    access_key_id,
                    secret_access_key,
                    session_token.clone(),
                    None,
                    "explicit",
                );
                loader = loader.credentials_provider(creds);
            }
            S3Credentials::Profile { name } => {
                loader = loader.profile_name(name);
            }
            S3Credentials::FromEnvironment => {}
        }

        let shared = loader.load().await;
        let mut builder = S3ConfigBuilder::from(&shared);

        if let Some(endpoint) = &self.config.endpoint {
            builder = builder.endpoint_url(endpoint);
        }
        if self.config.force_path_style {
            builder = builder.force_path_style(true);
        }

        let client = S3Client::from_conf(builder.build());
        debug!(region, "built s3 client");

        Ok(Arc::new(SdkObjectClient { client }))
    }
}

/// [`ObjectClient`] over a real `aws_sdk_s3::Client`.
pub struct SdkObjectClient {
    client: S3Client,
}

/// Classify an SDK error by service error code.
fn classify<E>(err: SdkError<E>) -> ClientError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    match err.code() {
        Some("NoSuchKey") | Some("NoSuchBucket") | Some("NotFound") => ClientError::NotFound,
        _ => ClientError::Other(DisplayErrorContext(err).to_string()),
    }
}

#[async_trait]
impl ObjectClient for SdkObjectClient {
    async fn bucket_region(&self, bucket: &str) -> Result<String, ClientError> {
        let output = self
            .client
            .get_bucket_location()
            .bucket(bucket)
            .send()
            .await
            .map_err(classify)?;

        // Legacy encoding: an absent or empty location constraint means
        // the bucket lives in us-east-1.
        let region = match output.location_constraint() {
            Some(constraint) if !constraint.as_str().is_empty() => {
                constraint.as_str().to_string()
            }
            _ => DEFAULT_REGION.to_string(),
        };
        Ok(region)
    }

    async fn get_object(
        &self,
        bucket: &str,
        key: &str,
        range: Option<&str>,
    ) -> Result<ObjectBody, ClientError> {
        let mut request = self.client.get_object().bucket(bucket).key(key);
        if let Some(range) = range {
            request = request.range(range);
        }

        let response = request.send().await.map_err(classify)?;
        Ok(Box::pin(response.body.into_async_read()))
    }
}
