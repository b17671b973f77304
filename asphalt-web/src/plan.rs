//! Page changes implied by an estimate outcome or a menu transition.
//!
//! The DOM adapters only carry these plans out, so what the page should look
//! like after each event is decided (and tested) without a browser.

use asphalt_core::{FieldError, MenuEffect, Outcome, WidgetConfig};

use crate::view::ids;

/// Selector for every inline error the widget has shown. All of them are
/// removed before an outcome is rendered.
pub fn error_selector() -> String {
    format!(".{}", ids::ERROR_CLASS)
}

/// What happens to the results panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsPanel {
    /// Reveal the panel and scroll it into view.
    Reveal,
    Hide,
    /// Leave it as it is, stale prices included.
    Keep,
}

/// Changes to the estimate form for one outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan<'a> {
    /// Low and high price text, when there is a new estimate.
    pub prices: Option<(String, String)>,
    pub errors: &'a [FieldError],
    pub results: ResultsPanel,
}

impl<'a> RenderPlan<'a> {
    pub fn for_outcome(
        outcome: &'a Outcome,
        widget: &WidgetConfig,
    ) -> Self {
        let failed = if widget.hide_result_on_error {
            ResultsPanel::Hide
        } else {
            ResultsPanel::Keep
        };

        match outcome {
            Outcome::Estimate(range) => Self {
                prices: Some((range.low_display(), range.high_display())),
                errors: &[],
                results: ResultsPanel::Reveal,
            },
            Outcome::Rejected(errors) => Self {
                prices: None,
                errors,
                results: failed,
            },
            Outcome::Unavailable => Self {
                prices: None,
                errors: &[],
                results: failed,
            },
        }
    }
}

/// Menu class and page scroll state after a menu effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuStyle {
    /// Whether the active class is present on the menu.
    pub active: bool,
    /// Body `overflow` value; `None` removes the property.
    pub body_overflow: Option<&'static str>,
}

impl MenuStyle {
    pub fn for_effect(effect: MenuEffect) -> Self {
        match effect {
            MenuEffect::Opened => Self {
                active: true,
                body_overflow: Some("hidden"),
            },
            MenuEffect::Closed => Self {
                active: false,
                body_overflow: None,
            },
        }
    }
}
