use crate::error::CohortError;
use crate::page_numbers::PageControl;
use crate::pagination::PageWindow;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Presentation settings for a page bar. None of these change which items
/// are on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    /// Show the "Showing x to y of z" line
    pub show_info: bool,
    pub max_pages_to_show: usize,
    /// Plural label for the listed things, e.g. "events"
    pub item_name: String,
    /// Styling hook handed to the renderer
    pub class_name: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_info: true,
            max_pages_to_show: 5,
            item_name: "items".to_string(),
            class_name: "pagination".to_string(),
        }
    }
}

impl DisplayOptions {
    pub fn with_item_name(mut self, item_name: impl Into<String>) -> Self {
        self.item_name = item_name.into();
        self
    }

    pub fn validate(&self) -> Result<(), CohortError> {
        if self.max_pages_to_show == 0 {
            return Err(CohortError::InvalidDisplay(
                "max_pages_to_show must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Summary line for a page, or `None` when the info line is switched off
pub fn info_text<T>(window: &PageWindow<'_, T>, options: &DisplayOptions) -> Option<String> {
    if !options.show_info {
        return None;
    }

    let text = if window.total_items == 0 {
        format!("No {}", options.item_name)
    } else if window.is_empty() {
        format!(
            "No {} on page {} of {}",
            options.item_name, window.current_page, window.total_pages
        )
    } else {
        format!(
            "Showing {} to {} of {} {}",
            window.start_index + 1,
            window.end_index,
            window.total_items,
            options.item_name
        )
    };
    Some(text)
}

/// Plain text page bar, e.g. `‹ … 4 5 [6] 7 8 … ›`.
/// Disabled previous/next arrows are left out.
pub fn page_bar_text(controls: &[PageControl]) -> String {
    controls
        .iter()
        .filter_map(|control| match control {
            PageControl::Previous { enabled: true } => Some("‹".to_string()),
            PageControl::Next { enabled: true } => Some("›".to_string()),
            PageControl::Previous { .. } | PageControl::Next { .. } => None,
            PageControl::Page { number, active: true } => Some(format!("[{}]", number)),
            PageControl::Page { number, .. } => Some(number.to_string()),
            PageControl::Ellipsis => Some("…".to_string()),
        })
        .join(" ")
}
