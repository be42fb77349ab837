/// Mars rover photos view
use super::html::{self, escape};
use super::{Feed, Status, ViewState};
use crate::domain::{MarsPhoto, MarsPhotos, MarsPhotosQuery, Rover};
use tracing::warn;

pub const DEFAULT_DATE: &str = "2020-07-01";

const FAILURE: &str = "Failed to fetch Mars photos";
const HINT: &str = "Please try different parameters.";
const EMPTY: &str = "No photos found for this selection. Try another date or camera.";

#[derive(Debug, Clone, PartialEq)]
pub struct MarsParams {
    pub rover: Rover,
    pub date: String,
    pub camera: &'static str,
}

impl Default for MarsParams {
    fn default() -> Self {
        let rover = Rover::default();
        Self {
            rover,
            date: DEFAULT_DATE.to_string(),
            camera: rover.default_camera(),
        }
    }
}

impl MarsParams {
    /// Build a selection from raw form values.
    ///
    /// A rover different from `previous_rover` resets the camera; an unknown
    /// camera falls back to the rover's first one.
    pub fn from_form(
        rover: Option<&str>,
        previous_rover: Option<&str>,
        date: Option<&str>,
        camera: Option<&str>,
    ) -> Self {
        let mut params = Self::default();
        if let Some(date) = date.filter(|d| !d.trim().is_empty()) {
            params.date = date.to_string();
        }
        if let Some(rover) = rover.and_then(Rover::from_name) {
            params.rover = rover;
            params.camera = rover.default_camera();
        }
        let rover_changed = previous_rover
            .and_then(Rover::from_name)
            .is_some_and(|prev| prev != params.rover);
        if !rover_changed {
            if let Some(camera) = camera {
                params.select_camera(camera);
            }
        }
        params
    }

    pub fn select_rover(&mut self, rover: Rover) {
        if rover != self.rover {
            self.rover = rover;
            self.camera = rover.default_camera();
        }
    }

    /// Only cameras the rover carried are accepted
    pub fn select_camera(&mut self, camera: &str) {
        self.camera = self
            .rover
            .cameras()
            .iter()
            .find(|c| c.eq_ignore_ascii_case(camera.trim()))
            .copied()
            .unwrap_or_else(|| self.rover.default_camera());
    }
}

pub struct MarsView {
    state: ViewState<MarsParams, Vec<MarsPhoto>>,
    today: String,
}

impl MarsView {
    pub fn new(today: &str, params: MarsParams) -> Self {
        Self {
            state: ViewState::new(params),
            today: today.to_string(),
        }
    }

    pub fn state(&self) -> &ViewState<MarsParams, Vec<MarsPhoto>> {
        &self.state
    }

    pub async fn set_rover<F: Feed>(&mut self, feed: &F, rover: Rover) {
        let mut params = self.state.params().clone();
        params.select_rover(rover);
        self.load(feed, params).await;
    }

    pub async fn set_camera<F: Feed>(&mut self, feed: &F, camera: &str) {
        let mut params = self.state.params().clone();
        params.select_camera(camera);
        self.load(feed, params).await;
    }

    pub async fn set_date<F: Feed>(&mut self, feed: &F, date: &str) {
        let mut params = self.state.params().clone();
        params.date = date.to_string();
        self.load(feed, params).await;
    }

    pub async fn refresh<F: Feed>(&mut self, feed: &F) {
        let params = self.state.params().clone();
        self.load(feed, params).await;
    }

    async fn load<F: Feed>(&mut self, feed: &F, params: MarsParams) {
        let ticket = self.state.begin(params);
        let result = fetch(feed, &ticket.params).await;
        self.state.settle(&ticket, result);
    }

    pub fn render(&self) -> String {
        let params = self.state.params();
        let rover_names = Rover::ALL.map(Rover::name);

        let mut out = String::from("<section class=\"view mars\"><h2>Mars Rover Photos</h2>");
        out.push_str("<form class=\"controls\" method=\"get\" action=\"/mars\">");
        out.push_str(&format!(
            "<input type=\"hidden\" name=\"prev_rover\" value=\"{}\">",
            params.rover.name()
        ));
        out.push_str(&html::select("rover", &rover_names, params.rover.name()));
        out.push_str(&html::date_input("date", &params.date, Some(&self.today)));
        out.push_str(&html::select("camera", params.rover.cameras(), params.camera));
        out.push_str("</form>");

        match self.state.status() {
            Status::Loading => out.push_str(&html::skeleton(8, "photo")),
            Status::Failed(error) => out.push_str(&html::error_message(error, HINT)),
            Status::Ready(photos) if photos.is_empty() => out.push_str(&html::empty_message(EMPTY)),
            Status::Ready(photos) => {
                out.push_str("<div class=\"grid\">");
                for photo in photos {
                    out.push_str(&render_photo(photo));
                }
                out.push_str("</div>");
            }
        }

        out.push_str("</section>");
        out
    }
}

async fn fetch<F: Feed>(feed: &F, params: &MarsParams) -> Result<Vec<MarsPhoto>, String> {
    let query = MarsPhotosQuery {
        rover: Some(params.rover.name().to_string()),
        date: Some(params.date.clone()),
        camera: Some(params.camera.to_string()),
    };
    let body = feed.mars_photos(&query).await.map_err(|e| {
        warn!("Mars view fetch failed: {}", e);
        FAILURE.to_string()
    })?;
    let photos: MarsPhotos = body.json().map_err(|e| {
        warn!("Mars view could not read response: {}", e);
        FAILURE.to_string()
    })?;
    Ok(photos.photos)
}

fn render_photo(photo: &MarsPhoto) -> String {
    format!(
        "<div class=\"card\" data-id=\"{}\"><img src=\"{}\" alt=\"{}\"><div><b>Camera:</b> {}</div><div class=\"muted\"><b>Earth Date:</b> {}</div></div>",
        photo.id,
        escape(&photo.img_src),
        escape(&photo.camera.full_name),
        escape(&photo.camera.name),
        escape(&photo.earth_date)
    )
}
