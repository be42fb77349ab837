/// Domain models for the application
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Health check response
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApodQuery {
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarsPhotosQuery {
    pub rover: Option<String>,
    pub date: Option<String>,
    pub camera: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EpicQuery {
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NeoQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Mars rovers the photo API serves, with the cameras each one carried
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rover {
    #[default]
    Curiosity,
    Opportunity,
    Spirit,
}

impl Rover {
    pub const ALL: [Rover; 3] = [Rover::Curiosity, Rover::Opportunity, Rover::Spirit];

    pub fn name(self) -> &'static str {
        match self {
            Rover::Curiosity => "Curiosity",
            Rover::Opportunity => "Opportunity",
            Rover::Spirit => "Spirit",
        }
    }

    pub fn cameras(self) -> &'static [&'static str] {
        match self {
            Rover::Curiosity => &["FHAZ", "RHAZ", "MAST", "CHEMCAM", "MAHLI", "MARDI", "NAVCAM"],
            Rover::Opportunity | Rover::Spirit => &["FHAZ", "RHAZ", "NAVCAM", "PANCAM", "MINITES"],
        }
    }

    pub fn default_camera(self) -> &'static str {
        self.cameras()[0]
    }

    pub fn has_camera(self, camera: &str) -> bool {
        self.cameras().iter().any(|c| c.eq_ignore_ascii_case(camera))
    }

    /// Case-insensitive lookup by name
    pub fn from_name(name: &str) -> Option<Rover> {
        Rover::ALL
            .into_iter()
            .find(|r| r.name().eq_ignore_ascii_case(name.trim()))
    }
}

/// Astronomy Picture of the Day entry
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Apod {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub media_type: String,
    #[serde(default)]
    pub explanation: String,
    pub copyright: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarsPhotos {
    #[serde(default)]
    pub photos: Vec<MarsPhoto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarsPhoto {
    pub id: i64,
    pub img_src: String,
    #[serde(default)]
    pub earth_date: String,
    pub camera: MarsCamera,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MarsCamera {
    pub name: String,
    #[serde(default)]
    pub full_name: String,
}

/// EPIC image metadata entry
#[derive(Debug, Clone, Deserialize)]
pub struct EpicImage {
    pub image: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub date: String,
    pub centroid_coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// NeoWs feed: objects grouped by approach date
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NeoFeed {
    #[serde(default)]
    pub near_earth_objects: BTreeMap<String, Vec<NearEarthObject>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NearEarthObject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_potentially_hazardous_asteroid: bool,
    pub estimated_diameter: Option<EstimatedDiameter>,
    #[serde(default)]
    pub close_approach_data: Vec<CloseApproach>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EstimatedDiameter {
    pub meters: DiameterRange,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DiameterRange {
    pub estimated_diameter_min: f64,
    pub estimated_diameter_max: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CloseApproach {
    pub close_approach_date_full: Option<String>,
    pub miss_distance: Option<MissDistance>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MissDistance {
    pub kilometers: String,
}
