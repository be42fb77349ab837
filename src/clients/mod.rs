/// External API clients module
use crate::config::AppConfig;
use crate::errors::UpstreamError;
use bytes::Bytes;
use reqwest::Client;
use serde::de::IgnoredAny;
use tracing::debug;

/// HTTP client wrapper with common configuration
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(config: &AppConfig) -> Result<Self, UpstreamError> {
        let mut builder = Client::builder().user_agent("nasa-explorer/1.0");
        if let Some(timeout) = config.upstream_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(UpstreamError::Transport)?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// A successful upstream JSON body, kept as the exact bytes received
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamBody(pub Bytes);

impl UpstreamBody {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, UpstreamError> {
        Ok(serde_json::from_slice(&self.0)?)
    }
}

/// Percent-encode a caller value so it stays one segment of the upstream path
fn path_segment(value: &str) -> Result<String, UpstreamError> {
    // URL parsing collapses dot segments however they are encoded
    if matches!(value, "." | "..") {
        return Err(UpstreamError::InvalidPathSegment(value.to_string()));
    }
    Ok(urlencoding::encode(value).into_owned())
}

/// NASA open APIs client (APOD, Mars rover photos, EPIC, NeoWs)
pub struct NasaClient {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
}

impl NasaClient {
    pub fn new(config: &AppConfig) -> Result<Self, UpstreamError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
            base_url: config.nasa_api_url.clone(),
            api_key: config.nasa_api_key.clone(),
        })
    }

    /// Fetch Astronomy Picture of the Day, for today when no date is given
    pub async fn apod(&self, date: Option<&str>) -> Result<UpstreamBody, UpstreamError> {
        let mut query = vec![("api_key", self.api_key.as_str())];
        if let Some(date) = date {
            query.push(("date", date));
        }
        self.get("/planetary/apod", &query).await
    }

    /// Fetch Mars rover photos for one earth date and camera
    pub async fn mars_photos(
        &self,
        rover: &str,
        date: &str,
        camera: &str,
    ) -> Result<UpstreamBody, UpstreamError> {
        let path = format!(
            "/mars-photos/api/v1/rovers/{}/photos",
            path_segment(&rover.to_lowercase())?
        );
        let query = [
            ("api_key", self.api_key.as_str()),
            ("earth_date", date),
            ("camera", camera),
        ];
        self.get(&path, &query).await
    }

    /// Fetch EPIC natural-color image metadata for a date
    pub async fn epic(&self, date: &str) -> Result<UpstreamBody, UpstreamError> {
        let path = format!("/EPIC/api/natural/date/{}", path_segment(date)?);
        self.get(&path, &[("api_key", self.api_key.as_str())]).await
    }

    /// Fetch Near Earth Objects feed for a date range
    pub async fn neo_feed(&self, start: &str, end: &str) -> Result<UpstreamBody, UpstreamError> {
        let query = [
            ("start_date", start),
            ("end_date", end),
            ("api_key", self.api_key.as_str()),
        ];
        self.get("/neo/rest/v1/feed", &query).await
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<UpstreamBody, UpstreamError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        // without_url keeps the api key out of error text sent to callers
        let resp = self
            .http_client
            .get_client()
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.without_url()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status.as_u16()));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| UpstreamError::Transport(e.without_url()))?;
        serde_json::from_slice::<IgnoredAny>(&body)?;

        Ok(UpstreamBody(body))
    }
}
