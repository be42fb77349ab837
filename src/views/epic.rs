/// Earth imagery (EPIC) view
use super::html::{self, escape};
use super::{Feed, Status, ViewState};
use crate::domain::{EpicImage, EpicQuery};
use tracing::warn;

const FAILURE: &str = "Failed to fetch EPIC images";
const HINT: &str = "Please try another date.";
const EMPTY: &str = "No images found for this date. Please try another day.";

#[derive(Debug, Clone, PartialEq)]
pub struct EpicParams {
    pub date: String,
}

pub struct EpicView {
    state: ViewState<EpicParams, Vec<EpicImage>>,
    today: String,
    archive_url: String,
}

impl EpicView {
    pub fn new(today: &str, date: Option<String>, archive_url: &str) -> Self {
        let params = EpicParams {
            date: date.unwrap_or_else(|| today.to_string()),
        };
        Self {
            state: ViewState::new(params),
            today: today.to_string(),
            archive_url: archive_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn state(&self) -> &ViewState<EpicParams, Vec<EpicImage>> {
        &self.state
    }

    pub async fn set_date<F: Feed>(&mut self, feed: &F, date: &str) {
        let params = EpicParams {
            date: date.to_string(),
        };
        self.load(feed, params).await;
    }

    pub async fn refresh<F: Feed>(&mut self, feed: &F) {
        let params = self.state.params().clone();
        self.load(feed, params).await;
    }

    async fn load<F: Feed>(&mut self, feed: &F, params: EpicParams) {
        let ticket = self.state.begin(params);
        let result = fetch(feed, &ticket.params).await;
        self.state.settle(&ticket, result);
    }

    /// Archive location of the PNG for one image on the selected date
    pub fn image_url(&self, image: &EpicImage) -> String {
        format!(
            "{}/{}/png/{}.png",
            self.archive_url,
            self.state.params().date.replace('-', "/"),
            image.image
        )
    }

    pub fn render(&self) -> String {
        let params = self.state.params();
        let mut out = String::from("<section class=\"view epic\"><h2>Earth from Space (EPIC)</h2>");
        out.push_str("<p class=\"subtitle\">Daily images of Earth from NASA's EPIC camera aboard the DSCOVR satellite</p>");
        out.push_str("<form class=\"controls\" method=\"get\" action=\"/epic\">");
        out.push_str(&html::date_input("date", &params.date, Some(&self.today)));
        out.push_str("</form>");

        match self.state.status() {
            Status::Loading => out.push_str(&html::skeleton(4, "earth")),
            Status::Failed(error) => out.push_str(&html::error_message(error, HINT)),
            Status::Ready(images) if images.is_empty() => out.push_str(&html::empty_message(EMPTY)),
            Status::Ready(images) => {
                out.push_str("<div class=\"grid\">");
                for image in images {
                    out.push_str(&self.render_image(image));
                }
                out.push_str("</div>");
            }
        }

        out.push_str("</section>");
        out
    }

    fn render_image(&self, image: &EpicImage) -> String {
        let position = match image.centroid_coordinates {
            Some(c) => format!("{}°N, {}°E", c.lat.round() as i64, c.lon.round() as i64),
            None => "N/A".to_string(),
        };
        format!(
            "<div class=\"card\"><img src=\"{}\" alt=\"Earth from space on {}\"><div><strong>Date:</strong> {}</div><div><strong>Time:</strong> {}</div><div class=\"muted\"><strong>Distance:</strong> {}</div></div>",
            escape(&self.image_url(image)),
            escape(&self.state.params().date),
            escape(&image.date),
            escape(&image.caption),
            position
        )
    }
}

async fn fetch<F: Feed>(feed: &F, params: &EpicParams) -> Result<Vec<EpicImage>, String> {
    let query = EpicQuery {
        date: Some(params.date.clone()),
    };
    let body = feed.epic(&query).await.map_err(|e| {
        warn!("EPIC view fetch failed: {}", e);
        FAILURE.to_string()
    })?;
    // a null body means no imagery for the day
    let images: Option<Vec<EpicImage>> = body.json().map_err(|e| {
        warn!("EPIC view could not read response: {}", e);
        FAILURE.to_string()
    })?;
    Ok(images.unwrap_or_default())
}
