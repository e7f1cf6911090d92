use crate::export::export_listings_csv;
use crate::scraper::{Category, OlxScraper, ScrapeConfig};
use clap::Parser;
use std::process;
use std::str::FromStr;
use url::Url;

mod export;
mod scraper;

#[cfg(test)]
mod tests;

/// Scrape OLX listing search pages and export the results to CSV.
#[derive(Parser, Debug)]
#[command(name = "olx-scraper")]
struct Args {
    /// Base listing search URL, without a page marker
    url: String,

    /// Number of result pages to fetch
    #[arg(short, long, default_value_t = 1)]
    pages: u32,

    /// Listing category: real-estate or vehicles
    #[arg(short, long, default_value = "real-estate")]
    category: String,

    /// Output CSV filename (defaults to a category-derived name)
    #[arg(short, long)]
    output: Option<String>,
}

/// Validate the raw CLI input and build the run configuration. Everything is
/// checked here, before any fetch: a bad URL, a zero page count or an unknown
/// category never reaches the scraper.
fn build_config(args: &Args) -> Result<ScrapeConfig, String> {
    Url::parse(&args.url).map_err(|e| format!("Invalid base URL '{}': {e}", args.url))?;

    if args.pages == 0 {
        return Err("Page count must be at least 1".to_string());
    }

    let category = Category::from_str(&args.category).map_err(|e| e.to_string())?;

    Ok(ScrapeConfig {
        base_url: args.url.clone(),
        page_count: args.pages,
        category,
    })
}

fn default_output(category: Category) -> String {
    match category {
        Category::RealEstate => "olx_real_estate.csv".to_string(),
        Category::Vehicles => "olx_vehicles.csv".to_string(),
    }
}

fn main() {
    let args = Args::parse();

    // 1️⃣ Build and validate the run configuration
    let config = match build_config(&args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("❌ {e}");
            process::exit(1);
        }
    };

    // 2️⃣ Create the scraper
    let scraper = match OlxScraper::new() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("❌ Scraper init failed: {e}");
            process::exit(1);
        }
    };

    // 3️⃣ Run the paginated scrape
    let outcome = scraper.scrape_listings(&config);

    println!(
        "Scraped {} listings across {} pages ({} failed, {} ads skipped)",
        outcome.listings.len(),
        outcome.pages_fetched,
        outcome.pages_failed,
        outcome.ads_skipped
    );

    if outcome.listings.is_empty() {
        println!("No listings found.");
        return;
    }

    // 4️⃣ Export the accumulated rows
    let path = args.output.unwrap_or_else(|| default_output(config.category));

    match export_listings_csv(&outcome.listings, &path) {
        Ok(written) => println!("Data has been exported to {written}"),
        Err(e) => {
            eprintln!("❌ Export failed: {e}");
            process::exit(1);
        }
    }
}
