use crate::scraper::{map_ads, Category, Listing};
use crate::tests::fixtures::{full_real_estate_ad, full_vehicle_ad};
use serde_json::json;

fn real_estate_row(listing: &Listing) -> &crate::scraper::RealEstateListing {
    match listing {
        Listing::RealEstate(row) => row,
        Listing::Vehicle(_) => panic!("expected a real-estate listing"),
    }
}

#[test]
fn full_real_estate_ad_maps_verbatim() {
    let page = map_ads(&[full_real_estate_ad()], Category::RealEstate, 1);

    assert_eq!(page.skipped, 0);
    assert_eq!(page.listings.len(), 1);

    let row = real_estate_row(&page.listings[0]);
    assert_eq!(row.title, "Cozy two-bedroom apartment");
    assert_eq!(row.price, "R$ 1.500");
    assert_eq!(row.image, "https://img.example.test/1.webp");
    assert_eq!(row.location, "São Paulo");
    assert_eq!(row.category, "Apartments");
    assert_eq!(row.rooms, "2");
    assert_eq!(row.bathrooms, "1");
    assert_eq!(row.garage_spaces, "1");
    assert_eq!(row.features, "Pool");
}

#[test]
fn missing_fields_get_their_defaults() {
    let page = map_ads(&[json!({})], Category::RealEstate, 1);

    assert_eq!(page.skipped, 0);
    let row = real_estate_row(&page.listings[0]);
    assert_eq!(row.title, "No title");
    assert_eq!(row.price, "No price");
    assert_eq!(row.image, "No image");
    assert_eq!(row.location, "No location");
    assert_eq!(row.category, "Real Estate");
    assert_eq!(row.rooms, "No rooms");
    assert_eq!(row.bathrooms, "No bathrooms");
    assert_eq!(row.garage_spaces, "No garage spaces");
    assert_eq!(row.features, "No features");
}

#[test]
fn empty_images_yield_the_default_image() {
    let ad = json!({ "title": "Bare ad", "images": [] });
    let page = map_ads(&[ad], Category::RealEstate, 1);

    assert_eq!(real_estate_row(&page.listings[0]).image, "No image");
}

#[test]
fn only_the_first_image_is_used() {
    let ad = json!({
        "images": [
            { "originalWebP": "https://img.example.test/first.webp" },
            { "originalWebP": "https://img.example.test/second.webp" }
        ]
    });
    let page = map_ads(&[ad], Category::RealEstate, 1);

    assert_eq!(
        real_estate_row(&page.listings[0]).image,
        "https://img.example.test/first.webp"
    );
}

#[test]
fn first_image_without_webp_variant_falls_back_to_default() {
    let ad = json!({ "images": [{ "thumbnail": "https://img.example.test/t.jpg" }] });
    let page = map_ads(&[ad], Category::RealEstate, 1);

    assert_eq!(real_estate_row(&page.listings[0]).image, "No image");
}

#[test]
fn duplicate_property_names_keep_the_last_value() {
    let ad = json!({
        "properties": [
            { "name": "rooms", "value": "2" },
            { "name": "rooms", "value": "3" }
        ]
    });
    let page = map_ads(&[ad], Category::RealEstate, 1);

    assert_eq!(real_estate_row(&page.listings[0]).rooms, "3");
}

#[test]
fn malformed_ad_is_skipped_without_affecting_siblings() {
    // Second ad's property pair is missing its value, which fails that ad's
    // deserialization. The other two must survive in order.
    let ads = vec![
        json!({ "title": "First" }),
        json!({ "properties": [{ "name": "rooms" }] }),
        json!({ "title": "Third" }),
    ];
    let page = map_ads(&ads, Category::RealEstate, 4);

    assert_eq!(page.skipped, 1);
    assert_eq!(page.listings.len(), 2);
    assert_eq!(real_estate_row(&page.listings[0]).title, "First");
    assert_eq!(real_estate_row(&page.listings[1]).title, "Third");
}

#[test]
fn full_vehicle_ad_maps_verbatim() {
    let page = map_ads(&[full_vehicle_ad()], Category::Vehicles, 1);

    assert_eq!(page.skipped, 0);
    let row = match &page.listings[0] {
        Listing::Vehicle(row) => row,
        Listing::RealEstate(_) => panic!("expected a vehicle listing"),
    };
    assert_eq!(row.title, "Fiat Uno 1.0");
    assert_eq!(row.price, "R$ 25.000");
    assert_eq!(row.image, "https://img.example.test/uno.webp");
    assert_eq!(row.location, "Curitiba");
    assert_eq!(row.category, "Cars");
    assert_eq!(row.brand, "Fiat");
    assert_eq!(row.model, "Uno");
    assert_eq!(row.year, "2015");
    assert_eq!(row.mileage, "80000");
    assert_eq!(row.fuel, "Flex");
    assert_eq!(row.gearbox, "Manual");
}

#[test]
fn vehicle_ad_without_properties_gets_vehicle_defaults() {
    let page = map_ads(&[json!({})], Category::Vehicles, 1);

    let row = match &page.listings[0] {
        Listing::Vehicle(row) => row,
        Listing::RealEstate(_) => panic!("expected a vehicle listing"),
    };
    assert_eq!(row.category, "Vehicles");
    assert_eq!(row.brand, "No brand");
    assert_eq!(row.model, "No model");
    assert_eq!(row.year, "No year");
    assert_eq!(row.mileage, "No mileage");
    assert_eq!(row.fuel, "No fuel");
    assert_eq!(row.gearbox, "No gearbox");
}
