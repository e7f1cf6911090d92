use crate::scraper::ScraperError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

// ad
//  ├── title
//  ├── price
//  ├── images
//  │    └── [ { originalWebP, ... } ]
//  ├── location
//  ├── category
//  └── properties
//       └── [ { name, value } ]

/// One raw ad object from the page's __NEXT_DATA__ payload, before any
/// category-specific mapping. Scalars the site sometimes omits are Options;
/// a property pair missing `name` or `value` fails the whole ad instead.
#[derive(Debug, Deserialize)]
pub struct RawAd {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub images: Vec<AdImage>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub properties: Vec<AdProperty>,
}

#[derive(Debug, Deserialize)]
pub struct AdImage {
    #[serde(rename = "originalWebP")]
    pub original_webp: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AdProperty {
    pub name: String,
    pub value: String,
}

impl RawAd {
    /// Reduce the name/value property bag to a lookup map.
    /// A repeated name keeps the last occurrence's value.
    pub fn properties_map(&self) -> HashMap<&str, &str> {
        let mut map = HashMap::new();
        for prop in &self.properties {
            map.insert(prop.name.as_str(), prop.value.as_str());
        }
        map
    }

    /// URL of the first image's originalWebP variant, if present.
    pub fn first_image_url(&self) -> Option<&str> {
        self.images.first().and_then(|img| img.original_webp.as_deref())
    }
}

/// The two listing schemas the site exposes that this tool knows how to map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    RealEstate,
    Vehicles,
}

impl FromStr for Category {
    type Err = ScraperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "real-estate" | "realestate" | "real_estate" | "imoveis" => Ok(Category::RealEstate),
            "vehicles" | "vehicle" | "autos" => Ok(Category::Vehicles),
            other => Err(ScraperError::UnsupportedCategory(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::RealEstate => write!(f, "Real Estate"),
            Category::Vehicles => write!(f, "Vehicles"),
        }
    }
}

/// Validated run parameters, built by the CLI layer and passed into the
/// pagination driver.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub page_count: u32,
    pub category: Category,
}

/// One exported real-estate row. Serde renames define the CSV header names
/// and column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RealEstateListing {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Image")]
    pub image: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Rooms")]
    pub rooms: String,
    #[serde(rename = "Bathrooms")]
    pub bathrooms: String,
    #[serde(rename = "Garage Spaces")]
    pub garage_spaces: String,
    #[serde(rename = "Features")]
    pub features: String,
}

/// One exported vehicle row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleListing {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Price")]
    pub price: String,
    #[serde(rename = "Image")]
    pub image: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Mileage")]
    pub mileage: String,
    #[serde(rename = "Fuel")]
    pub fuel: String,
    #[serde(rename = "Gearbox")]
    pub gearbox: String,
}

/// A mapped listing row. Category is fixed for a run, so every row in one
/// dataset is the same variant; untagged so CSV rows serialize as the plain
/// inner struct.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Listing {
    RealEstate(RealEstateListing),
    Vehicle(VehicleListing),
}
