//! Realtime dashboard scraping.
//! The power compare page renders each live metric as a `num-unit` widget:
//! a `label` carrying the metric name in its `title` and the value as text,
//! followed by an `i` element with the unit.
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

use super::schemas::{RealtimeData, RealtimeMetric};
use super::{Error, Result};

const CONTAINER: &str = "div.data-content";
const NAME_ATTRIBUTE: &str = "title";

static CONTAINER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(CONTAINER).expect("cannot parse container selector"));
static WIDGET_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".num-unit").expect("cannot parse widget selector"));
static LABEL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("label").expect("cannot parse label selector"));
static UNIT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("i").expect("cannot parse unit selector"));

/// Parse the realtime metrics out of the power compare page.
///
/// The page must contain the data container, but widgets are collected from the
/// whole document, including any outside the container.
pub fn parse_realtime(html: &str) -> Result<RealtimeData> {
    let document = Html::parse_document(html);
    if document.select(&CONTAINER_SELECTOR).next().is_none() {
        return Err(Error::UnexpectedMarkup(format!(
            "no element matches '{CONTAINER}'"
        )));
    }

    let mut data = RealtimeData::new();
    for widget in document.select(&WIDGET_SELECTOR) {
        match extract_metric(widget) {
            Some((name, metric)) => {
                data.insert(name, metric);
            }
            None => log::warn!(
                "Skipping realtime widget without a named label: {}",
                widget.html()
            ),
        }
    }
    log::debug!("Parsed {} realtime metric(s)", data.len());
    Ok(data)
}

fn extract_metric(widget: ElementRef<'_>) -> Option<(String, RealtimeMetric)> {
    let label = widget.select(&LABEL_SELECTOR).next()?;
    let name = label
        .value()
        .attr(NAME_ATTRIBUTE)
        .map(str::trim)
        .filter(|name| !name.is_empty())?;
    let value = text_of(label);
    let unit = widget
        .select(&UNIT_SELECTOR)
        .next()
        .map(text_of)
        .unwrap_or_default();
    Some((name.to_string(), RealtimeMetric { value, unit }))
}

fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
