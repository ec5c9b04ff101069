//! Brief synthesis: a rendered narrative plus KPIs per batch.

mod kpis;
mod narrative;
mod patrol;

pub use kpis::{compute_kpis, BriefKpis};
pub use narrative::SurveillanceRenderer;
pub use patrol::PatrolRenderer;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use warden_core::constants::SECONDS_SAVED_PER_IMAGE;
use warden_core::events::{BriefGeneratedEvent, EventDispatcher, WardenEventHandler};
use warden_core::types::ClassifiedItem;
use warden_core::ReportConfig;

/// Text shown when a batch has nothing to report on.
const EMPTY_BATCH_TEXT: &str = "No images found in this batch.";

/// Batch identity carried into rendered briefs.
#[derive(Debug, Clone)]
pub struct BatchContext<'a> {
    pub batch_id: &'a str,
    /// Human-facing batch name, e.g. the patrol sector.
    pub batch_name: &'a str,
}

/// A rendered brief and its KPIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brief {
    pub text: String,
    pub kpis: BriefKpis,
}

/// One narrative format.
pub trait BriefRenderer: Send + Sync {
    /// Stable format name, used for selection and events.
    fn name(&self) -> &'static str;

    /// Render the narrative for a non-empty batch.
    fn render(
        &self,
        batch: &BatchContext<'_>,
        items: &[ClassifiedItem],
        kpis: &BriefKpis,
    ) -> String;
}

/// Look up a renderer by format name.
pub fn create_renderer(format: &str) -> Option<Box<dyn BriefRenderer>> {
    match format {
        "surveillance" => Some(Box::new(SurveillanceRenderer)),
        "patrol" => Some(Box::new(PatrolRenderer)),
        _ => None,
    }
}

/// Format names accepted by [`create_renderer`].
pub fn available_formats() -> &'static [&'static str] {
    &["surveillance", "patrol"]
}

/// Builds briefs and emits generation events.
pub struct BriefSynthesizer {
    seconds_saved_per_image: u64,
    dispatcher: EventDispatcher,
}

impl BriefSynthesizer {
    /// Synthesizer with default KPI weights.
    pub fn new() -> Self {
        Self {
            seconds_saved_per_image: SECONDS_SAVED_PER_IMAGE,
            dispatcher: EventDispatcher::new(),
        }
    }

    /// Synthesizer with weights taken from configuration.
    pub fn with_config(config: &ReportConfig) -> Self {
        Self {
            seconds_saved_per_image: config.effective_seconds_saved_per_image(),
            dispatcher: EventDispatcher::new(),
        }
    }

    /// Register an observer for brief events.
    pub fn register_handler(&mut self, handler: Arc<dyn WardenEventHandler>) {
        self.dispatcher.register(handler);
    }

    /// Synthesize the default surveillance brief.
    pub fn synthesize(&self, batch: &BatchContext<'_>, items: &[ClassifiedItem]) -> Brief {
        self.synthesize_with(&SurveillanceRenderer, batch, items)
    }

    /// Synthesize with an explicit renderer.
    ///
    /// Empty batches short-circuit to a fixed placeholder with zeroed
    /// KPIs, regardless of format.
    pub fn synthesize_with(
        &self,
        renderer: &dyn BriefRenderer,
        batch: &BatchContext<'_>,
        items: &[ClassifiedItem],
    ) -> Brief {
        let brief = if items.is_empty() {
            Brief {
                text: EMPTY_BATCH_TEXT.to_string(),
                kpis: BriefKpis::default(),
            }
        } else {
            let kpis = compute_kpis(items, self.seconds_saved_per_image);
            Brief {
                text: renderer.render(batch, items, &kpis),
                kpis,
            }
        };

        self.dispatcher.emit_brief_generated(&BriefGeneratedEvent {
            batch_id: batch.batch_id.to_string(),
            format: renderer.name().to_string(),
            priority_count: brief.kpis.priority_count,
        });
        tracing::info!(
            batch_id = batch.batch_id,
            format = renderer.name(),
            priority = brief.kpis.priority_count,
            "brief generated"
        );

        brief
    }
}

impl Default for BriefSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}
