use log::info;
use timeline_fetch::config::FetchConfig;
use timeline_fetch::fetch::{fetch_timeline, FetchError};
use timeline_fetch::timeline;

fn main() -> Result<(), FetchError> {
    env_logger::init();

    let config = FetchConfig::load();
    info!("Fetching timeline from {}", config.target_url);

    let payload = fetch_timeline(&config)?;
    println!("{}", payload);

    if config.emit_stream_url {
        match timeline::stream_url(&payload) {
            Some(url) => println!("{}", url),
            None => log::warn!("Payload carries no stream fields, skipping stream URL"),
        }
    }

    Ok(())
}
