use crate::scraper::models::{Category, Listing, RawAd, RealEstateListing, VehicleListing};
use serde_json::Value;
use std::collections::HashMap;

/// Rows mapped from one page, plus how many ads had to be skipped.
#[derive(Debug, Default)]
pub struct MappedPage {
    pub listings: Vec<Listing>,
    pub skipped: usize,
}

/// Map the raw ad objects of one page into flat listing rows for `category`.
///
/// Each ad is handled independently: one malformed ad is logged and skipped
/// without affecting its siblings or the page. Output order follows input
/// order. `page` is only used to give skip diagnostics a usable address.
pub fn map_ads(ads: &[Value], category: Category, page: u32) -> MappedPage {
    let mut result = MappedPage::default();

    for (index, ad) in ads.iter().enumerate() {
        match serde_json::from_value::<RawAd>(ad.clone()) {
            Ok(raw) => {
                let listing = match category {
                    Category::RealEstate => Listing::RealEstate(map_real_estate(&raw)),
                    Category::Vehicles => Listing::Vehicle(map_vehicle(&raw)),
                };
                result.listings.push(listing);
            }
            Err(e) => {
                eprintln!("⚠️ Skipping ad {index} on page {page}: {e}");
                result.skipped += 1;
            }
        }
    }

    result
}

fn map_real_estate(ad: &RawAd) -> RealEstateListing {
    let props = ad.properties_map();

    RealEstateListing {
        title: scalar_or(&ad.title, "No title"),
        price: scalar_or(&ad.price, "No price"),
        image: image_or(ad, "No image"),
        location: scalar_or(&ad.location, "No location"),
        category: scalar_or(&ad.category, "Real Estate"),
        rooms: prop_or(&props, "rooms", "No rooms"),
        bathrooms: prop_or(&props, "bathrooms", "No bathrooms"),
        garage_spaces: prop_or(&props, "garage_spaces", "No garage spaces"),
        features: prop_or(&props, "re_features", "No features"),
    }
}

fn map_vehicle(ad: &RawAd) -> VehicleListing {
    let props = ad.properties_map();

    VehicleListing {
        title: scalar_or(&ad.title, "No title"),
        price: scalar_or(&ad.price, "No price"),
        image: image_or(ad, "No image"),
        location: scalar_or(&ad.location, "No location"),
        category: scalar_or(&ad.category, "Vehicles"),
        brand: prop_or(&props, "vehicle_brand", "No brand"),
        model: prop_or(&props, "vehicle_model", "No model"),
        year: prop_or(&props, "regdate", "No year"),
        mileage: prop_or(&props, "mileage", "No mileage"),
        fuel: prop_or(&props, "fuel", "No fuel"),
        gearbox: prop_or(&props, "gearbox", "No gearbox"),
    }
}

fn scalar_or(value: &Option<String>, default: &str) -> String {
    value.clone().unwrap_or_else(|| default.to_string())
}

fn image_or(ad: &RawAd, default: &str) -> String {
    ad.first_image_url().unwrap_or(default).to_string()
}

fn prop_or(props: &HashMap<&str, &str>, name: &str, default: &str) -> String {
    props.get(name).unwrap_or(&default).to_string()
}
