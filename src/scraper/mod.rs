mod mapper;
mod models;
mod scraper;
mod scraper_error;

pub use mapper::{map_ads, MappedPage};
pub use models::{Category, Listing, RealEstateListing, ScrapeConfig, VehicleListing};
pub use scraper::{OlxScraper, ScrapeOutcome};
pub use scraper_error::ScraperError;
