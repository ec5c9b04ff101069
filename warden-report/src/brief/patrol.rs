//! The patrol brief: a markdown action sheet for field teams.

use warden_core::types::{ClassifiedItem, ThreatCategory};

use super::{BatchContext, BriefKpis, BriefRenderer};

pub struct PatrolRenderer;

impl BriefRenderer for PatrolRenderer {
    fn name(&self) -> &'static str {
        "patrol"
    }

    fn render(
        &self,
        batch: &BatchContext<'_>,
        items: &[ClassifiedItem],
        kpis: &BriefKpis,
    ) -> String {
        let urgent = items
            .iter()
            .filter(|item| item.triage.category == ThreatCategory::Urgent)
            .count();
        let seconds = kpis.time_saved_seconds;

        let mut text = format!("### Patrol Brief: {}\n\n", batch.batch_name);

        text.push_str("**Summary of Observation:**\n");
        text.push_str(&format!("- Total detections processed: {}\n", items.len()));
        text.push_str(&format!(
            "- High-priority findings identified: {}\n",
            kpis.priority_count
        ));
        text.push_str(&format!(
            "- Time saved via automated triage: {}m {}s\n\n",
            seconds / 60,
            seconds % 60
        ));

        text.push_str("**Top Recommended Actions:**\n");
        if urgent > 0 {
            text.push_str(&format!(
                "1. **IMMEDIATE:** Patrol zone(s) with {urgent} urgent threat detections.\n"
            ));
            text.push_str(&format!(
                "2. **ACTION:** Review the {urgent} unverified threat logs.\n"
            ));
        } else {
            text.push_str(
                "1. **MONITOR:** Continue routine monitoring; no immediate threats identified.\n",
            );
            text.push_str("2. **ACTION:** Log priority wildlife sightings for ecological analysis.\n");
        }
        text.push_str(
            "3. **SYSTEM:** Maintain current sensor deployment across the transit corridor.\n",
        );

        text
    }
}
