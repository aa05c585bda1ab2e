use serde::{Deserialize, Serialize};

use crate::core::{format_number, format_percent, share_percent};
use crate::interaction::ElementHit;

use super::config::{RenderConfiguration, TooltipFormat};

/// Text shown next to a hovered element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TooltipText {
    pub title: String,
    pub lines: Vec<String>,
}

impl RenderConfiguration {
    /// Tooltip for the element at `hit`, formatted per the configured rule.
    ///
    /// `None` when tooltips are disabled or the dataset does not exist.
    #[must_use]
    pub fn tooltip_text(&self, hit: ElementHit) -> Option<TooltipText> {
        let tooltip = &self.options.plugins.tooltip;
        if !tooltip.enabled {
            return None;
        }
        let dataset = self.dataset(hit.dataset_index)?;
        let label = self.label_at(hit.element_index).unwrap_or_default();
        let value = self.value_at(hit.dataset_index, hit.element_index);

        let text = match &tooltip.format {
            TooltipFormat::ShareOfTotal => {
                let percent = share_percent(value, dataset.total());
                TooltipText {
                    title: label.to_owned(),
                    lines: vec![format!(
                        "{label}: {} ({}% of total)",
                        format_number(value),
                        format_percent(percent)
                    )],
                }
            }
            TooltipFormat::SeriesValue { suffix } => {
                let mut line = format!("{}: {}", dataset.label, format_number(value));
                if let Some(suffix) = suffix.as_deref().filter(|suffix| !suffix.is_empty()) {
                    line.push(' ');
                    line.push_str(suffix);
                }
                TooltipText {
                    title: label.to_owned(),
                    lines: vec![line],
                }
            }
            TooltipFormat::Point => {
                let (x, y) = self
                    .data_value(hit.dataset_index, hit.element_index)
                    .and_then(|value| value.point())
                    .unwrap_or((0.0, value));
                TooltipText {
                    title: String::new(),
                    lines: vec![format!(
                        "{}: ({}, {})",
                        dataset.label,
                        format_number(x),
                        format_number(y)
                    )],
                }
            }
            TooltipFormat::CellValue => TooltipText {
                title: String::new(),
                lines: vec![format!("Value: {}", format_number(value))],
            },
        };
        Some(text)
    }
}
