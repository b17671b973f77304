//! The estimate form: mounting, event wiring and rendering of outcomes.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    time::Duration,
};

use anyhow::{Context, Result, anyhow};
use asphalt_core::{
    EstimateSession, EstimatorConfig, Field, FieldError, Outcome, Scheduler, Ticket, TimerHandle,
};
use gloo_timers::callback::Timeout;
use tracing::{debug, info, trace, warn};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlInputElement, KeyboardEvent, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::{
    dom::{self, JsResultExt},
    plan::{self, RenderPlan, ResultsPanel},
    styles::STYLESHEET,
    view::{self, ids},
};

/// A browser `setTimeout` owned by the session's debounce slot.
pub struct PendingTimeout(Timeout);

impl TimerHandle for PendingTimeout {
    fn cancel(self) {
        drop(self.0.cancel());
    }
}

/// Schedules debounce timers that report back to the widget, if it is
/// still alive when they fire.
struct TimeoutScheduler {
    widget: Weak<RefCell<EstimateWidget>>,
}

impl Scheduler for TimeoutScheduler {
    type Handle = PendingTimeout;

    fn schedule(
        &mut self,
        delay: Duration,
        ticket: Ticket,
    ) -> PendingTimeout {
        let widget = self.widget.clone();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        PendingTimeout(Timeout::new(millis, move || {
            if let Some(widget) = widget.upgrade() {
                EstimateWidget::timer_fired(&widget, ticket);
            }
        }))
    }
}

/// Elements of the mounted form the widget reads from or writes to.
struct FormElements {
    root: Element,
    width: HtmlInputElement,
    length: HtmlInputElement,
    calculate: Element,
    results: HtmlElement,
    low_price: Element,
    high_price: Element,
}

impl FormElements {
    fn locate(root: Element) -> Result<Self> {
        let find = |id: &str| -> Result<Element> {
            dom::select(root.query_selector(&format!("#{id}")), id)
                .ok_or_else(|| anyhow!("estimate form is missing #{id}"))
        };
        let input = |field: Field| -> Result<HtmlInputElement> {
            find(field.as_str())?
                .dyn_into::<HtmlInputElement>()
                .map_err(|_| anyhow!("#{field} is not an input element"))
        };

        Ok(Self {
            width: input(Field::Width)?,
            length: input(Field::Length)?,
            calculate: find(ids::CALCULATE)?,
            results: find(ids::RESULTS)?
                .dyn_into::<HtmlElement>()
                .map_err(|_| anyhow!("#{} is not an HTML element", ids::RESULTS))?,
            low_price: find(ids::LOW_PRICE)?,
            high_price: find(ids::HIGH_PRICE)?,
            root,
        })
    }

    fn input(
        &self,
        field: Field,
    ) -> &HtmlInputElement {
        match field {
            Field::Width => &self.width,
            Field::Length => &self.length,
        }
    }
}

pub struct EstimateWidget {
    session: EstimateSession<PendingTimeout>,
    elements: FormElements,
}

impl EstimateWidget {
    /// Injects the form into its host container and binds its handlers.
    ///
    /// Returns `Ok(false)` without touching the page when the container is
    /// absent. Mounting again replaces the earlier form.
    pub fn mount(
        document: &Document,
        config: &EstimatorConfig,
    ) -> Result<bool> {
        let widget_config = &config.widget;
        let Some(section) = document.get_element_by_id(&widget_config.container_id) else {
            debug!(id = %widget_config.container_id, "estimate section not found");
            return Ok(false);
        };
        let Some(container) = dom::select(
            section.query_selector(&widget_config.content_selector),
            &widget_config.content_selector,
        ) else {
            debug!(selector = %widget_config.content_selector, "estimate container not found");
            return Ok(false);
        };

        dom::inject_stylesheet(document, ids::STYLESHEET, STYLESHEET)
            .context("injecting estimate styles")?;
        let root = dom::materialize(document, &view::estimate_form())
            .context("building estimate form")?;
        container.set_text_content(None);
        container
            .append_child(&root)
            .js_context("attaching estimate form")?;

        let widget = Rc::new(RefCell::new(Self {
            session: EstimateSession::new(config.pricing.clone(), widget_config.clone()),
            elements: FormElements::locate(root)?,
        }));
        Self::bind(&widget).context("binding estimate handlers")?;

        info!(container = %widget_config.container_id, "estimate widget mounted");
        Ok(true)
    }

    fn bind(widget: &Rc<RefCell<Self>>) -> Result<()> {
        let this = widget.borrow();

        {
            let widget = Rc::clone(widget);
            dom::listen(&this.elements.calculate, "click", move |_| {
                Self::submit(&widget);
            })?;
        }

        for field in Field::ALL {
            let input = this.elements.input(field);
            {
                let widget = Rc::clone(widget);
                dom::listen(input, "keydown", move |event: Event| {
                    let enter = event
                        .dyn_ref::<KeyboardEvent>()
                        .is_some_and(|key| key.key() == "Enter");
                    if enter {
                        event.prevent_default();
                        Self::submit(&widget);
                    }
                })?;
            }
            {
                let widget = Rc::clone(widget);
                dom::listen(input, "input", move |_| {
                    Self::input_changed(&widget, field);
                })?;
            }
        }

        Ok(())
    }

    fn submit(widget: &Rc<RefCell<Self>>) {
        let outcome = {
            let mut this = widget.borrow_mut();
            this.sync_values();
            this.session.submit()
        };
        widget.borrow().render(&outcome);
    }

    fn input_changed(
        widget: &Rc<RefCell<Self>>,
        field: Field,
    ) {
        let mut scheduler = TimeoutScheduler {
            widget: Rc::downgrade(widget),
        };
        let mut this = widget.borrow_mut();
        let raw = this.elements.input(field).value();
        let ticket = this.session.on_input(field, raw, &mut scheduler);
        trace!(%field, ticket = ticket.id(), "estimate scheduled");
    }

    fn timer_fired(
        widget: &Rc<RefCell<Self>>,
        ticket: Ticket,
    ) {
        let outcome = {
            let mut this = widget.borrow_mut();
            this.sync_values();
            this.session.on_timer(ticket)
        };
        if let Some(outcome) = outcome {
            widget.borrow().render(&outcome);
        }
    }

    /// Copies the current input values into the session.
    fn sync_values(&mut self) {
        for field in Field::ALL {
            let raw = self.elements.input(field).value();
            self.session.update(field, raw);
        }
    }

    fn render(
        &self,
        outcome: &Outcome,
    ) {
        if let Err(error) = self.try_render(outcome) {
            warn!(?error, "failed to render estimate");
        }
    }

    fn try_render(
        &self,
        outcome: &Outcome,
    ) -> Result<()> {
        let plan = RenderPlan::for_outcome(outcome, self.session.widget());

        dom::remove_all(&self.elements.root, &plan::error_selector())?;
        if let Some((low, high)) = &plan.prices {
            self.elements.low_price.set_text_content(Some(low.as_str()));
            self.elements.high_price.set_text_content(Some(high.as_str()));
        }
        for error in plan.errors {
            self.show_error(error)?;
        }

        match plan.results {
            ResultsPanel::Reveal => {
                self.set_results_visible(true)?;

                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Nearest);
                self.elements
                    .results
                    .scroll_into_view_with_scroll_into_view_options(&options);
            }
            ResultsPanel::Hide => self.set_results_visible(false)?,
            ResultsPanel::Keep => {}
        }
        Ok(())
    }

    fn show_error(
        &self,
        error: &FieldError,
    ) -> Result<()> {
        let document = self
            .elements
            .root
            .owner_document()
            .ok_or_else(|| anyhow!("estimate form is detached"))?;
        let message = dom::materialize(&document, &view::field_error(&error.message))?;
        let group = self
            .elements
            .input(error.field)
            .parent_node()
            .ok_or_else(|| anyhow!("#{} has no parent", error.field))?;
        group
            .append_child(&message)
            .js_context("showing field error")?;
        Ok(())
    }

    fn set_results_visible(
        &self,
        visible: bool,
    ) -> Result<()> {
        let display = if visible { "block" } else { "none" };
        self.elements
            .results
            .style()
            .set_property("display", display)
            .js_context("toggling estimate results")
    }
}
