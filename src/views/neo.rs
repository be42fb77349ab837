/// Near Earth Objects view: a week of close approaches from a start date
use super::html::{self, escape};
use super::{Feed, Status, ViewState};
use crate::domain::{NearEarthObject, NeoFeed, NeoQuery};
use chrono::{Days, NaiveDate, NaiveDateTime};
use tracing::warn;

/// Length of the window requested from the feed
pub const WINDOW_DAYS: u64 = 7;

const FAILURE: &str = "Failed to fetch Near Earth Objects";
const HINT: &str = "Please try another date.";
const EMPTY: &str = "No Near Earth Objects found for this period.";

/// Format of `close_approach_date_full`, e.g. `2024-Jan-02 10:15`
const APPROACH_FORMAT: &str = "%Y-%b-%d %H:%M";

#[derive(Debug, Clone, PartialEq)]
pub struct NeoParams {
    pub start_date: String,
}

impl NeoParams {
    /// Start date plus the window, or None when the start date is not a date
    pub fn end_date(&self) -> Option<String> {
        let start = NaiveDate::parse_from_str(self.start_date.trim(), "%Y-%m-%d").ok()?;
        start
            .checked_add_days(Days::new(WINDOW_DAYS))
            .map(|d| d.format("%Y-%m-%d").to_string())
    }
}

pub struct NeoView {
    state: ViewState<NeoParams, Vec<NearEarthObject>>,
}

impl NeoView {
    pub fn new(today: &str, start_date: Option<String>) -> Self {
        let params = NeoParams {
            start_date: start_date.unwrap_or_else(|| today.to_string()),
        };
        Self {
            state: ViewState::new(params),
        }
    }

    pub fn state(&self) -> &ViewState<NeoParams, Vec<NearEarthObject>> {
        &self.state
    }

    pub async fn set_start_date<F: Feed>(&mut self, feed: &F, start_date: &str) {
        let params = NeoParams {
            start_date: start_date.to_string(),
        };
        self.load(feed, params).await;
    }

    pub async fn refresh<F: Feed>(&mut self, feed: &F) {
        let params = self.state.params().clone();
        self.load(feed, params).await;
    }

    async fn load<F: Feed>(&mut self, feed: &F, params: NeoParams) {
        let ticket = self.state.begin(params);
        let result = fetch(feed, &ticket.params).await;
        self.state.settle(&ticket, result);
    }

    pub fn render(&self) -> String {
        let params = self.state.params();
        let mut out = String::from(
            "<section class=\"view neos\"><h2>Near Earth Objects (Next 7 Days)</h2>",
        );
        out.push_str("<form class=\"controls\" method=\"get\" action=\"/neos\"><label>Start Date: ");
        out.push_str(&html::date_input("start_date", &params.start_date, None));
        out.push_str("</label></form>");

        match self.state.status() {
            Status::Loading => out.push_str(&html::skeleton(5, "neo")),
            Status::Failed(error) => out.push_str(&html::error_message(error, HINT)),
            Status::Ready(neos) if neos.is_empty() => out.push_str(&html::empty_message(EMPTY)),
            Status::Ready(neos) => {
                for neo in neos {
                    out.push_str(&render_object(neo));
                }
            }
        }

        out.push_str("</section>");
        out
    }
}

async fn fetch<F: Feed>(feed: &F, params: &NeoParams) -> Result<Vec<NearEarthObject>, String> {
    // an unparsable start date leaves end_date unset and the proxy rejects it
    let query = NeoQuery {
        start_date: Some(params.start_date.clone()),
        end_date: params.end_date(),
    };
    let body = feed.neos(&query).await.map_err(|e| {
        warn!("NEO view fetch failed: {}", e);
        FAILURE.to_string()
    })?;
    let grouped: NeoFeed = body.json().map_err(|e| {
        warn!("NEO view could not read response: {}", e);
        FAILURE.to_string()
    })?;
    Ok(flatten_by_approach(grouped))
}

/// First close approach time of an object
pub fn approach_time(neo: &NearEarthObject) -> Option<NaiveDateTime> {
    let full = neo.close_approach_data.first()?.close_approach_date_full.as_deref()?;
    NaiveDateTime::parse_from_str(full.trim(), APPROACH_FORMAT).ok()
}

/// Merge the per-day groups into one list ordered by closest approach.
///
/// Objects without a readable approach time go last, in feed order.
pub fn flatten_by_approach(feed: NeoFeed) -> Vec<NearEarthObject> {
    let mut all = feed
        .near_earth_objects
        .into_values()
        .flatten()
        .collect::<Vec<_>>();
    all.sort_by_cached_key(|neo| {
        let time = approach_time(neo);
        (time.is_none(), time)
    });
    all
}

fn render_object(neo: &NearEarthObject) -> String {
    let hazardous = neo.is_potentially_hazardous_asteroid;
    let class = if hazardous { "neo hazardous" } else { "neo" };

    let approach = match approach_time(neo) {
        Some(time) => time.format("%Y-%m-%d %H:%M").to_string(),
        None => "Unknown".to_string(),
    };
    let diameter = match &neo.estimated_diameter {
        Some(d) => format!(
            "{} - {} meters",
            d.meters.estimated_diameter_min.round() as i64,
            d.meters.estimated_diameter_max.round() as i64
        ),
        None => "Unknown".to_string(),
    };
    let miss = neo
        .close_approach_data
        .first()
        .and_then(|c| c.miss_distance.as_ref())
        .and_then(|m| m.kilometers.trim().parse::<f64>().ok())
        .map(|km| format!("{} km", html::group_thousands(km)))
        .unwrap_or_else(|| "Unknown".to_string());

    let mut out = format!(
        "<div class=\"{}\" data-id=\"{}\"><h4>{}</h4>",
        class,
        escape(&neo.id),
        escape(&neo.name)
    );
    out.push_str(&format!("<p><strong>Closest Approach:</strong> {approach}</p>"));
    out.push_str(&format!("<p><strong>Estimated Diameter:</strong> {diameter}</p>"));
    out.push_str(&format!("<p><strong>Miss Distance:</strong> {miss}</p>"));
    if hazardous {
        out.push_str("<p class=\"hazard\">Potentially Hazardous</p>");
    }
    out.push_str("</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::test_support::StubFeed;
    use serde_json::{json, Value};

    fn neo(id: &str, approach: Option<&str>, hazardous: bool) -> Value {
        json!({
            "id": id,
            "name": format!("({id})"),
            "is_potentially_hazardous_asteroid": hazardous,
            "estimated_diameter": {
                "meters": { "estimated_diameter_min": 12.4, "estimated_diameter_max": 27.8 }
            },
            "close_approach_data": [{
                "close_approach_date_full": approach,
                "miss_distance": { "kilometers": "4512345.6789" }
            }]
        })
    }

    fn ids(neos: &[NearEarthObject]) -> Vec<&str> {
        neos.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_end_date_is_a_week_later() {
        let params = NeoParams {
            start_date: "2024-02-26".to_string(),
        };
        assert_eq!(params.end_date().as_deref(), Some("2024-03-04"));
    }

    #[test]
    fn test_end_date_of_garbage_is_none() {
        let params = NeoParams {
            start_date: "soon".to_string(),
        };
        assert_eq!(params.end_date(), None);
    }

    #[test]
    fn test_flatten_orders_across_days() {
        let feed: NeoFeed = serde_json::from_value(json!({
            "near_earth_objects": {
                "2024-01-03": [neo("c", Some("2024-Jan-03 01:00"), false)],
                "2024-01-01": [
                    neo("b", Some("2024-Jan-01 18:30"), false),
                    neo("a", Some("2024-Jan-01 02:05"), true)
                ],
                "2024-01-02": [neo("x", None, false), neo("d", Some("2023-Dec-31 23:59"), false)]
            }
        }))
        .unwrap();

        let flat = flatten_by_approach(feed);
        assert_eq!(ids(&flat), vec!["d", "a", "b", "c", "x"]);
    }

    #[tokio::test]
    async fn test_view_requests_week_and_marks_hazardous() {
        let feed = StubFeed::returning(json!({
            "element_count": 2,
            "near_earth_objects": {
                "2024-01-02": [neo("late", Some("2024-Jan-02 09:00"), false)],
                "2024-01-01": [neo("early", Some("2024-Jan-01 09:00"), true)]
            }
        }));
        let mut view = NeoView::new("2024-05-01", None);
        view.set_start_date(&feed, "2024-01-01").await;

        assert_eq!(
            feed.calls.lock().unwrap().as_slice(),
            ["neos Some(\"2024-01-01\") Some(\"2024-01-08\")"]
        );
        assert_eq!(ids(view.state().data().unwrap()), vec!["early", "late"]);

        let html = view.render();
        assert!(html.contains("<div class=\"neo hazardous\" data-id=\"early\">"));
        assert!(html.contains("<div class=\"neo\" data-id=\"late\">"));
        assert_eq!(html.matches("Potentially Hazardous").count(), 1);
        assert!(html.contains("12 - 28 meters"));
        assert!(html.contains("4,512,346 km"));
        assert!(html.contains("<strong>Closest Approach:</strong> 2024-01-01 09:00</p>"));
        assert!(!html.contains("UTC"));
    }

    #[tokio::test]
    async fn test_empty_feed_renders_empty_state() {
        let feed = StubFeed::returning(json!({ "near_earth_objects": {} }));
        let mut view = NeoView::new("2024-05-01", None);
        view.refresh(&feed).await;

        assert!(view.render().contains(EMPTY));
    }

    #[tokio::test]
    async fn test_failure_renders_error_message() {
        let feed = StubFeed::failing();
        let mut view = NeoView::new("2024-05-01", None);
        view.refresh(&feed).await;

        assert!(view
            .render()
            .contains("Failed to fetch Near Earth Objects. Please try another date."));
    }
}
