//! Log filter tests
//!
//! The fallback paths report themselves only through warn events from this
//! library crate's targets, so the shipped default filter must let those
//! through. Pins the default directives against the targets the services
//! actually emit from.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::subscriber::with_default;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::{EnvFilter, Registry};

use crop_advisory_backend::DEFAULT_LOG_FILTER;

struct CountingLayer(Arc<AtomicUsize>);

impl<S: tracing::Subscriber> Layer<S> for CountingLayer {
    fn on_event(&self, _event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

fn events_seen_for(target_emit: impl FnOnce()) -> usize {
    let seen = Arc::new(AtomicUsize::new(0));
    let subscriber = Registry::default()
        .with(EnvFilter::new(DEFAULT_LOG_FILTER))
        .with(CountingLayer(Arc::clone(&seen)));
    with_default(subscriber, target_emit);
    seen.load(Ordering::SeqCst)
}

#[test]
fn default_filter_keeps_library_fallback_warnings() {
    let seen = events_seen_for(|| {
        tracing::warn!(
            target: "crop_advisory_backend::services::enrichment",
            location = "Surat",
            kind = "network",
            "weather fetch failed, using sample data"
        );
    });
    assert_eq!(seen, 1);
}

#[test]
fn default_filter_keeps_classifier_load_logs() {
    let seen = events_seen_for(|| {
        tracing::info!(
            target: "crop_advisory_backend::services::prediction",
            "loaded crop classifier"
        );
        tracing::error!(
            target: "crop_advisory_backend::services::prediction",
            "failed to parse classifier, predictions disabled"
        );
    });
    assert_eq!(seen, 2);
}

#[test]
fn default_filter_still_drops_unrelated_targets() {
    let seen = events_seen_for(|| {
        tracing::warn!(target: "hyper::proto", "noise");
    });
    assert_eq!(seen, 0);
}
