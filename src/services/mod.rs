/// Proxy service layer: validation, defaults and forwarding
use crate::clients::{NasaClient, UpstreamBody};
use crate::domain::{ApodQuery, EpicQuery, MarsPhotosQuery, NeoQuery, Rover};
use crate::errors::{ApiError, ApiResult};
use tracing::{info, warn};

/// Stateless relay to the NASA open APIs
pub struct ProxyService {
    client: NasaClient,
}

impl ProxyService {
    pub fn new(client: NasaClient) -> Self {
        Self { client }
    }

    /// Astronomy Picture of the Day; `date` is optional
    pub async fn apod(&self, query: &ApodQuery) -> ApiResult<UpstreamBody> {
        let date = present(&query.date);
        let result = self.client.apod(date).await;
        relay("apod", "Failed to fetch APOD", result)
    }

    /// Mars rover photos; `date` and `camera` are required
    pub async fn mars_photos(&self, query: &MarsPhotosQuery) -> ApiResult<UpstreamBody> {
        let (date, camera) = (present(&query.date), present(&query.camera));
        let (Some(date), Some(camera)) = (date, camera) else {
            return Err(missing(&[("date", date), ("camera", camera)]));
        };
        let rover = present(&query.rover).unwrap_or(Rover::default().name());

        let result = self.client.mars_photos(rover, date, camera).await;
        relay("mars-photos", "Failed to fetch Mars photos", result)
    }

    /// EPIC natural-color imagery; `date` is required
    pub async fn epic(&self, query: &EpicQuery) -> ApiResult<UpstreamBody> {
        let Some(date) = present(&query.date) else {
            return Err(missing(&[("date", None)]));
        };

        let result = self.client.epic(date).await;
        relay("epic", "Failed to fetch EPIC images", result)
    }

    /// NeoWs feed; both ends of the date range are required
    pub async fn neos(&self, query: &NeoQuery) -> ApiResult<UpstreamBody> {
        let (start, end) = (present(&query.start_date), present(&query.end_date));
        let (Some(start), Some(end)) = (start, end) else {
            return Err(missing(&[("start_date", start), ("end_date", end)]));
        };

        let result = self.client.neo_feed(start, end).await;
        relay("neos", "Failed to fetch Near Earth Objects", result)
    }
}

/// Empty query values count as absent
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn missing(params: &[(&'static str, Option<&str>)]) -> ApiError {
    let names = params
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect::<Vec<_>>();
    warn!("Rejected request, missing {:?}", names);
    ApiError::MissingParams(names)
}

fn relay(
    route: &str,
    context: &'static str,
    result: Result<UpstreamBody, crate::errors::UpstreamError>,
) -> ApiResult<UpstreamBody> {
    match &result {
        Ok(body) => info!("{} relayed {} bytes", route, body.as_bytes().len()),
        Err(e) => warn!("{} upstream failure: {}", route, e),
    }
    result.map_err(ApiError::upstream(context))
}
