use std::future::Future;
use std::ops::RangeInclusive;

use futures_util::{StreamExt, stream};
use typedex_analytics::{Creature, TypeRecord};
use typedex_protocol::{parse_creature, parse_type};

use crate::config::ClientConfig;
use crate::error::FetchError;

/// Low-level HTTP access to the provider
pub struct Fetcher {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Fetcher {
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch a single creature by ID
    pub async fn fetch_creature(&self, id: u32) -> Result<Creature, FetchError> {
        let url = self.config.endpoint(&format!("pokemon/{id}"));
        let body = self.get_with_retry(&url).await?;
        let payload = parse_creature(&body).map_err(|source| FetchError::Parse { url, source })?;

        Ok(Creature::from_protocol(&payload))
    }

    /// Fetch a single type by ID
    pub async fn fetch_type(&self, id: u32) -> Result<TypeRecord, FetchError> {
        let url = self.config.endpoint(&format!("type/{id}"));
        let body = self.get_with_retry(&url).await?;
        let payload = parse_type(&body).map_err(|source| FetchError::Parse { url, source })?;

        Ok(TypeRecord::from_protocol(&payload))
    }

    /// Fetch creatures `1..=creature_count`, dropping the ones that fail
    pub async fn fetch_creatures(&self) -> Result<Vec<Creature>, FetchError> {
        self.fetch_batch("pokemon", 1..=self.config.creature_count, |id| {
            self.fetch_creature(id)
        })
        .await
    }

    /// Fetch types `1..=type_count`, dropping the ones that fail
    pub async fn fetch_types(&self) -> Result<Vec<TypeRecord>, FetchError> {
        self.fetch_batch("type", 1..=self.config.type_count, |id| self.fetch_type(id))
            .await
    }

    /// Run one request per ID concurrently and keep whatever succeeded, in
    /// ID order. Fails only when every request of a non-empty batch failed.
    async fn fetch_batch<T, F, Fut>(
        &self,
        resource: &'static str,
        ids: RangeInclusive<u32>,
        fetch_one: F,
    ) -> Result<Vec<T>, FetchError>
    where
        F: Fn(u32) -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        let results: Vec<(u32, Result<T, FetchError>)> = stream::iter(ids)
            .map(|id| {
                let request = fetch_one(id);
                async move { (id, request.await) }
            })
            .buffered(self.config.max_in_flight.max(1))
            .collect()
            .await;

        let attempted = results.len();
        let mut records = Vec::with_capacity(attempted);
        let mut last_error = None;

        for (id, result) in results {
            match result {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(resource, id, error = %e, "Dropping record from batch");
                    last_error = Some(e);
                }
            }
        }

        if records.is_empty()
            && let Some(last_error) = last_error
        {
            return Err(FetchError::BatchFailed {
                resource,
                attempted,
                last_error: Box::new(last_error),
            });
        }

        tracing::info!(resource, fetched = records.len(), attempted, "Fetched batch");
        Ok(records)
    }

    /// GET a URL, retrying retryable failures per the configured policy
    async fn get_with_retry(&self, url: &str) -> Result<String, FetchError> {
        let policy = &self.config.retry;
        let mut delay = policy.initial_delay;
        let mut attempt = 1;

        loop {
            match self.get_text(url).await {
                Ok(body) => return Ok(body),
                Err(e) if !e.is_retryable() || attempt >= policy.max_attempts => return Err(e),
                Err(e) => {
                    tracing::warn!(
                        attempt = attempt,
                        max_attempts = policy.max_attempts,
                        url,
                        error = %e,
                        "Request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                    delay = policy.next_delay(delay);
                }
            }
        }
    }

    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        tracing::debug!(url, "GET");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
