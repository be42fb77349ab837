/// Astronomy Picture of the Day view
use super::html::{self, escape};
use super::{Feed, Status, ViewState};
use crate::domain::{Apod, ApodQuery};
use tracing::warn;

const FAILURE: &str = "Failed to fetch APOD";
const HINT: &str = "Please try another date.";

#[derive(Debug, Clone, PartialEq)]
pub struct ApodParams {
    pub date: String,
}

pub struct ApodView {
    state: ViewState<ApodParams, Apod>,
    today: String,
}

impl ApodView {
    /// `today` is both the initial selection and the latest pickable date
    pub fn new(today: &str, date: Option<String>) -> Self {
        let params = ApodParams {
            date: date.unwrap_or_else(|| today.to_string()),
        };
        Self {
            state: ViewState::new(params),
            today: today.to_string(),
        }
    }

    pub fn state(&self) -> &ViewState<ApodParams, Apod> {
        &self.state
    }

    /// Select a date and fetch its picture
    pub async fn set_date<F: Feed>(&mut self, feed: &F, date: &str) {
        let params = ApodParams {
            date: date.to_string(),
        };
        self.load(feed, params).await;
    }

    /// Fetch for the current selection
    pub async fn refresh<F: Feed>(&mut self, feed: &F) {
        let params = self.state.params().clone();
        self.load(feed, params).await;
    }

    async fn load<F: Feed>(&mut self, feed: &F, params: ApodParams) {
        let ticket = self.state.begin(params);
        let result = fetch(feed, &ticket.params).await;
        self.state.settle(&ticket, result);
    }

    pub fn render(&self) -> String {
        let params = self.state.params();
        let mut out = String::from("<section class=\"view apod\"><h2>NASA Astronomy Picture of the Day</h2>");
        out.push_str("<form class=\"controls\" method=\"get\" action=\"/apod\">");
        out.push_str(&html::date_input("date", &params.date, Some(&self.today)));
        out.push_str("</form>");

        match self.state.status() {
            Status::Loading => out.push_str(&html::skeleton(1, "apod")),
            Status::Failed(error) => out.push_str(&html::error_message(error, HINT)),
            Status::Ready(apod) => out.push_str(&render_entry(apod)),
        }

        out.push_str("</section>");
        out
    }
}

async fn fetch<F: Feed>(feed: &F, params: &ApodParams) -> Result<Apod, String> {
    let query = ApodQuery {
        date: Some(params.date.clone()),
    };
    let body = feed.apod(&query).await.map_err(|e| {
        warn!("APOD view fetch failed: {}", e);
        FAILURE.to_string()
    })?;
    body.json().map_err(|e| {
        warn!("APOD view could not read response: {}", e);
        FAILURE.to_string()
    })
}

fn render_entry(apod: &Apod) -> String {
    let title = escape(&apod.title);
    let media = if apod.media_type == "image" {
        format!("<img src=\"{}\" alt=\"{}\">", escape(&apod.url), title)
    } else {
        format!(
            "<iframe title=\"apod-video\" src=\"{}\" allowfullscreen></iframe>",
            escape(&apod.url)
        )
    };
    let copyright = apod.copyright.as_deref().unwrap_or("NASA");

    format!(
        "<article><h3>{}</h3>{}<p>{}</p><p class=\"copyright\">&copy; {}</p></article>",
        title,
        media,
        escape(&apod.explanation),
        escape(copyright.trim())
    )
}
