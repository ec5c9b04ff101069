//! The surveillance brief: report header, EXIF field intelligence, and
//! an HTML block of high-priority sightings.

use chrono::{DateTime, Utc};

use warden_core::types::{ClassifiedItem, GeoPoint};

use super::{BatchContext, BriefKpis, BriefRenderer};
use crate::escape::escape_html;

/// Inline style for the summary block. The review surface renders
/// brief text as HTML.
const SUMMARY_STYLE: &str = "background:rgba(245,158,11,0.12);border:1px solid rgba(245,158,11,0.35);border-radius:0.5rem;padding:0.75rem 1rem;margin:0.5rem 0;";

/// The default brief format.
pub struct SurveillanceRenderer;

impl BriefRenderer for SurveillanceRenderer {
    fn name(&self) -> &'static str {
        "surveillance"
    }

    fn render(
        &self,
        batch: &BatchContext<'_>,
        items: &[ClassifiedItem],
        _kpis: &BriefKpis,
    ) -> String {
        let mut text = format!(
            "Ranger Intelligence Report - Batch {}\n\n",
            id_suffix(batch.batch_id)
        );
        text.push_str(&field_intelligence_section(items));

        let priority: Vec<&ClassifiedItem> = items
            .iter()
            .filter(|item| item.triage.category.is_high_priority())
            .collect();

        if priority.is_empty() {
            text.push_str(&format!(
                "<div class=\"surveillance-summary-block\" style=\"{SUMMARY_STYLE}\">\
                 SURVEILLANCE SUMMARY: No high-priority wildlife threats detected in this cycle.\
                 </div>"
            ));
        } else {
            let mut block = format!(
                "SURVEILLANCE SUMMARY: We have identified {} high-priority sightings in this batch.\n\n",
                priority.len()
            );
            for item in &priority {
                block.push_str(&sighting_line(item));
            }
            text.push_str(&format!(
                "<div class=\"surveillance-summary-block\" style=\"{SUMMARY_STYLE}\">{}</div>",
                block.replace('\n', "<br/>")
            ));
        }

        text
    }
}

/// EXIF rollup: capture window and geographic spread. Empty when no
/// item carries capture metadata.
fn field_intelligence_section(items: &[ClassifiedItem]) -> String {
    if !items.iter().any(|item| item.capture.has_any()) {
        return String::new();
    }

    let mut section = String::from("FIELD INTELLIGENCE (EXIF Metadata)\n");

    let timestamps: Vec<DateTime<Utc>> = items
        .iter()
        .filter_map(|item| item.capture.captured_at)
        .collect();
    if let (Some(min), Some(max)) = (timestamps.iter().min(), timestamps.iter().max()) {
        section.push_str(&format!(
            "Capture Window: {} — {} ({} images with timestamp)\n",
            format_date(*min),
            format_date(*max),
            timestamps.len()
        ));
    }

    let locations: Vec<GeoPoint> = items
        .iter()
        .filter_map(|item| item.capture.location)
        .collect();
    if !locations.is_empty() {
        section.push_str(&format!(
            "Geographic Spread: {} images with GPS. Approx center: {}\n",
            locations.len(),
            format_location(bounding_center(&locations))
        ));
    }

    section.push('\n');
    section
}

/// One high-priority sighting, tagged with the item id suffix and
/// category, with any capture metadata inline.
fn sighting_line(item: &ClassifiedItem) -> String {
    let mut meta = String::new();
    if let Some(when) = item.capture.captured_at {
        meta.push_str(&format!(" Captured {}.", format_date(when)));
    }
    if let Some(point) = item.capture.location {
        meta.push_str(&format!(" GPS: {}.", format_location(point)));
    }

    format!(
        "[#{} - {}] Detected {}.{} Vision Rationale: {}\n",
        id_suffix(&item.item_id),
        item.triage.category,
        escape_html(item.display_label()),
        meta,
        escape_html(item.rationale.as_deref().unwrap_or(""))
    )
}

/// Center of the bounding box over all capture locations.
fn bounding_center(locations: &[GeoPoint]) -> GeoPoint {
    let mut min_lat = f64::INFINITY;
    let mut max_lat = f64::NEG_INFINITY;
    let mut min_lng = f64::INFINITY;
    let mut max_lng = f64::NEG_INFINITY;
    for point in locations {
        min_lat = min_lat.min(point.lat);
        max_lat = max_lat.max(point.lat);
        min_lng = min_lng.min(point.lng);
        max_lng = max_lng.max(point.lng);
    }
    GeoPoint {
        lat: (min_lat + max_lat) / 2.0,
        lng: (min_lng + max_lng) / 2.0,
    }
}

fn format_date(when: DateTime<Utc>) -> String {
    when.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn format_location(point: GeoPoint) -> String {
    format!("{:.5}°, {:.5}°", point.lat, point.lng)
}

/// Last four characters of an identifier, the whole id when shorter.
fn id_suffix(id: &str) -> &str {
    match id.char_indices().rev().nth(3) {
        Some((idx, _)) => &id[idx..],
        None => id,
    }
}
