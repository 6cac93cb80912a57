// src/main.rs

//! Stampwatch: publish-alert service entry point.
//!
//! Boots the liveness endpoint, then polls the content notification feed on
//! a fixed interval, crawling each delta for stamped chart images and
//! alerting the configured sinks.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::time::MissedTickBehavior;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use stampwatch::config::apply_env;
use stampwatch::error::Result;
use stampwatch::models::Config;
use stampwatch::notify::{AlertFanout, ArticleAlert};
use stampwatch::pipeline::{PollState, StampCrawler};
use stampwatch::server;
use stampwatch::services::{ContentClient, ImageDownloader, StampDetector};

const CONFIG_PATH: &str = "data/config.toml";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stampwatch=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::load_or_default(CONFIG_PATH);
    apply_env(&mut config)?;
    config.validate()?;

    let crawler = StampCrawler::new(
        Arc::new(ContentClient::new(&config)?),
        Arc::new(ImageDownloader::new(&config.crawler)?),
        Arc::new(StampDetector::new(&config)?),
        config.crawler.max_concurrent,
    );
    let notifier = AlertFanout::from_config(&config.notify);

    let server_port = config.server.port;
    tokio::spawn(async move {
        if let Err(error) = server::serve(server_port).await {
            tracing::error!(%error, "health server terminated");
        }
    });

    tracing::info!(
        interval_ms = config.poll.interval_ms,
        lookback_secs = config.poll.lookback_secs,
        "starting poll loop"
    );

    // Cycles run to completion before the next tick is honored, so at most
    // one cycle is ever in flight; ticks missed by a slow cycle are skipped.
    let mut ticker = tokio::time::interval(Duration::from_millis(config.poll.interval_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let lookback = chrono::Duration::seconds(config.poll.lookback_secs as i64);
    let mut state = PollState::default();

    loop {
        ticker.tick().await;

        let (window_start, next_state) = state.advance(Utc::now(), lookback);
        state = next_state;

        match crawler.run_cycle(window_start).await {
            Ok(report) => {
                let stamped: Vec<ArticleAlert> =
                    report.stamped_entries().map(ArticleAlert::from_entry).collect();
                tracing::info!(
                    entries = report.entries.len(),
                    stamped = stamped.len(),
                    outcome = ?report.outcome,
                    "poll cycle complete"
                );
                match serde_json::to_string(&report) {
                    Ok(json) => tracing::debug!(report = %json, "poll cycle report"),
                    Err(error) => tracing::debug!(%error, "report not serializable"),
                }
                for alert in &stamped {
                    notifier.send(alert).await;
                }
            }
            Err(error) => {
                tracing::error!(%error, "poll cycle failed");
            }
        }
    }
}
