use clap::Parser;
use serde::Serialize;
use std::{error::Error, fs::File, io::Write, path::PathBuf, sync::Arc};
use trip_planner::{
    sdk::config::PlannerConfig,
    sdk::geocoding::{GeoCache, GeocodeResolver, NominatimProvider},
    sdk::itinerary::{GeminiClient, Interest, ItineraryGenerator, TripRequest},
    sdk::map_view::{MapRenderDescriptor, MapViewBuilder},
    sdk::planner::{Notice, Severity, TripPlanner},
    sdk::util::{log::init_logging, rate_limit::nominatim_limiter},
};

/// Plan a budget-friendly student trip and map its two ends
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Starting location (e.g., "Rennes, France")
    #[arg(short, long, default_value = "")]
    start: String,

    /// Destination (e.g., "Lisbon")
    #[arg(short, long, default_value = "")]
    destination: String,

    #[arg(long, default_value_t = TripRequest::DEFAULT_BUDGET_MIN)]
    budget_min: u32,

    #[arg(long, default_value_t = TripRequest::DEFAULT_BUDGET_MAX)]
    budget_max: u32,

    #[arg(long, default_value = TripRequest::DEFAULT_CURRENCY)]
    currency: String,

    /// First day of the trip, YYYY-MM-DD [default: today]
    #[arg(long)]
    start_date: Option<chrono::NaiveDate>,

    /// Last day of the trip, YYYY-MM-DD [default: today]
    #[arg(long)]
    end_date: Option<chrono::NaiveDate>,

    /// Interests/activities, repeatable
    #[arg(short, long = "interest", value_enum)]
    interests: Vec<Interest>,

    /// Only resolve locations and build the map
    #[arg(long)]
    no_itinerary: bool,

    /// Print the Gemini models that support content generation and exit
    #[arg(long)]
    list_models: bool,

    /// Where to write the map descriptor and notices
    #[arg(short, long, default_value = "trip_map.json")]
    output: PathBuf,
}

#[derive(Serialize)]
struct TripOutput<'a> {
    map: Option<&'a MapRenderDescriptor>,
    notices: &'a [Notice],
    itinerary: Option<&'a str>,
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PlannerConfig::from_env()?;

    if cli.list_models {
        let api_key = config
            .gemini_api_key
            .ok_or("GEMINI_API_KEY not found. Set it in the environment or a .env file")?;
        let client = GeminiClient::new(api_key, config.gemini_model)?;
        for name in client.list_models()? {
            println!("{}", name);
        }
        return Ok(());
    }

    // --- 1. Itinerary ---
    let today = chrono::Local::now().date_naive();
    let trip = TripRequest {
        starting_location: cli.start.clone(),
        destination: cli.destination.clone(),
        budget_min: cli.budget_min,
        budget_max: cli.budget_max,
        currency: cli.currency.clone(),
        start_date: cli.start_date.unwrap_or(today),
        end_date: cli.end_date.unwrap_or(today),
        interests: cli.interests.clone(),
    };

    let itinerary = if cli.no_itinerary {
        None
    } else {
        draft_itinerary(&config, &trip)
    };

    // --- 2. Map ---
    let geocoder = &config.geocoder;
    let provider = NominatimProvider::new(
        geocoder.base_url.clone(),
        geocoder.user_agent.clone(),
        nominatim_limiter(),
    )?;
    let cache = Arc::new(GeoCache::with_ttl(geocoder.cache_ttl));
    log::debug!("Geocode cache TTL: {}s", cache.ttl().as_secs());
    let resolver = GeocodeResolver::new(provider, cache)
        .with_max_retries(geocoder.max_retries)
        .with_timeout(geocoder.timeout);
    let planner = TripPlanner::new(resolver, MapViewBuilder::default());

    let plan = planner.plan_map(&trip.starting_location, &trip.destination);
    for notice in &plan.notices {
        match notice.severity {
            Severity::Info => log::info!("{}", notice.message),
            Severity::Warning => log::warn!("{}", notice.message),
            Severity::Error => log::error!("{}", notice.message),
        }
    }

    // --- 3. Output ---
    let output = TripOutput {
        map: plan.view.as_ref().ok(),
        notices: &plan.notices,
        itinerary: itinerary.as_deref(),
    };
    let json_output = serde_json::to_string_pretty(&output)?;
    let mut file = File::create(&cli.output)?;
    file.write_all(json_output.as_bytes())?;
    log::info!("Map descriptor written to {}", cli.output.display());

    if let Some(text) = &itinerary {
        println!("{}", text);
    }

    Ok(())
}

fn draft_itinerary(config: &PlannerConfig, trip: &TripRequest) -> Option<String> {
    if let Err(e) = trip.validate() {
        log::error!("{}", e);
        return None;
    }
    let Some(api_key) = config.gemini_api_key.clone() else {
        log::warn!("GEMINI_API_KEY not found; skipping itinerary generation");
        return None;
    };

    let generated = GeminiClient::new(api_key, config.gemini_model.clone())
        .map_err(Into::into)
        .and_then(|client| {
            log::info!(
                "Generating itinerary for {} with {}...",
                trip.destination,
                client.model()
            );
            client.generate(trip)
        });

    match generated {
        Ok(text) => Some(text),
        Err(e) => {
            log::error!("Error generating itinerary: {}", e);
            None
        }
    }
}
