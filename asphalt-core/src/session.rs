//! Lifecycle of the estimate form, independent of any page.
//!
//! An [`EstimateSession`] tracks the raw text of both dimension fields and
//! decides when an estimate attempt runs:
//!
//! * [`submit`](EstimateSession::submit) runs one immediately (button, Enter);
//! * [`on_input`](EstimateSession::on_input) re-arms the debounce timer;
//! * [`on_timer`](EstimateSession::on_timer) runs one when the latest timer
//!   fires and both fields hold some text.
//!
//! Every attempt validates both fields from scratch and yields an
//! [`Outcome`]; the previous outcome never leaks into the next.

use tracing::{debug, error};

use crate::calculations::{EstimateError, Estimator};
use crate::debounce::{Debouncer, Scheduler, Ticket, TimerHandle};
use crate::{Dimension, Field, PriceRange, PricingConfig, WidgetConfig};

/// An inline message attached to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Result of one estimate attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Both fields were valid.
    Estimate(PriceRange),
    /// At least one field was rejected; one entry per rejected field.
    Rejected(Vec<FieldError>),
    /// The inputs were valid but the pricing configuration cannot produce
    /// a range from them. Nothing is blamed on the fields.
    Unavailable,
}

impl Outcome {
    pub fn estimate(&self) -> Option<&PriceRange> {
        match self {
            Self::Estimate(range) => Some(range),
            Self::Rejected(_) | Self::Unavailable => None,
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Estimate(_) | Self::Unavailable => &[],
            Self::Rejected(errors) => errors,
        }
    }
}

/// State behind one estimate form.
#[derive(Debug)]
pub struct EstimateSession<H> {
    pricing: PricingConfig,
    widget: WidgetConfig,
    width: String,
    length: String,
    debouncer: Debouncer<H>,
    attempts: u64,
}

impl<H: TimerHandle> EstimateSession<H> {
    pub fn new(
        pricing: PricingConfig,
        widget: WidgetConfig,
    ) -> Self {
        let debouncer = Debouncer::new(widget.debounce());
        Self {
            pricing,
            widget,
            width: String::new(),
            length: String::new(),
            debouncer,
            attempts: 0,
        }
    }

    pub fn widget(&self) -> &WidgetConfig {
        &self.widget
    }

    /// Latest raw text of `field`.
    pub fn value(
        &self,
        field: Field,
    ) -> &str {
        match field {
            Field::Width => &self.width,
            Field::Length => &self.length,
        }
    }

    /// Records the raw text of `field` without scheduling anything.
    pub fn update(
        &mut self,
        field: Field,
        raw: impl Into<String>,
    ) {
        let raw = raw.into();
        match field {
            Field::Width => self.width = raw,
            Field::Length => self.length = raw,
        }
    }

    /// Handles a keystroke: records the value and restarts the quiet period.
    pub fn on_input<S>(
        &mut self,
        field: Field,
        raw: impl Into<String>,
        scheduler: &mut S,
    ) -> Ticket
    where
        S: Scheduler<Handle = H>,
    {
        self.update(field, raw);
        self.debouncer.arm(scheduler)
    }

    /// Handles a fired debounce timer.
    ///
    /// Runs an attempt only for the latest ticket and only when both fields
    /// hold some text; validation of that text happens in the attempt.
    pub fn on_timer(
        &mut self,
        ticket: Ticket,
    ) -> Option<Outcome> {
        if !self.debouncer.fire(ticket) {
            return None;
        }
        if self.width.is_empty() || self.length.is_empty() {
            debug!(ticket = ticket.id(), "auto-estimate skipped, a field is empty");
            return None;
        }
        Some(self.attempt())
    }

    /// Runs an attempt right away.
    pub fn submit(&mut self) -> Outcome {
        self.attempt()
    }

    /// Whether a debounced attempt is waiting to fire.
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Number of attempts run so far.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    fn attempt(&mut self) -> Outcome {
        self.attempts += 1;

        let mut errors = Vec::new();
        let width = self.parse_field(Field::Width, &mut errors);
        let length = self.parse_field(Field::Length, &mut errors);
        let (Some(width), Some(length)) = (width, length) else {
            return Outcome::Rejected(errors);
        };

        let estimator = Estimator::new(&self.pricing);
        match estimator.estimate(width, length) {
            Ok(range) => {
                let sq_yd = estimator.square_yards(width, length);
                debug!(%width, %length, ?sq_yd, %range, "estimate computed");
                Outcome::Estimate(range)
            }
            Err(reason @ EstimateError::Overflow { .. }) => {
                debug!(%reason, "estimate rejected");
                Outcome::Rejected(Field::ALL.iter().map(|f| self.field_error(*f)).collect())
            }
            Err(reason @ EstimateError::InvertedRange { .. }) => {
                error!(%reason, "pricing configuration cannot produce an estimate");
                Outcome::Unavailable
            }
        }
    }

    fn parse_field(
        &self,
        field: Field,
        errors: &mut Vec<FieldError>,
    ) -> Option<Dimension> {
        Dimension::parse(self.value(field))
            .inspect_err(|reason| {
                debug!(%field, %reason, "dimension rejected");
                errors.push(self.field_error(field));
            })
            .ok()
    }

    fn field_error(
        &self,
        field: Field,
    ) -> FieldError {
        FieldError {
            field,
            message: self.widget.error_message(field).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    struct NoopHandle;

    impl TimerHandle for NoopHandle {
        fn cancel(self) {}
    }

    struct NoopScheduler;

    impl Scheduler for NoopScheduler {
        type Handle = NoopHandle;

        fn schedule(
            &mut self,
            _delay: Duration,
            _ticket: Ticket,
        ) -> NoopHandle {
            NoopHandle
        }
    }

    fn session(
        width: &str,
        length: &str,
    ) -> EstimateSession<NoopHandle> {
        let mut session = EstimateSession::new(PricingConfig::default(), WidgetConfig::default());
        session.update(Field::Width, width);
        session.update(Field::Length, length);
        session
    }

    fn width_error() -> FieldError {
        FieldError {
            field: Field::Width,
            message: "Please enter a valid width".to_string(),
        }
    }

    fn length_error() -> FieldError {
        FieldError {
            field: Field::Length,
            message: "Please enter a valid length".to_string(),
        }
    }

    // =========================================================================
    // submit tests
    // =========================================================================

    #[test]
    fn submit_valid_dimensions_yields_estimate() {
        let outcome = session("30", "10").submit();

        let range = outcome.estimate().unwrap();
        assert_eq!(range.low_display(), "$33");
        assert_eq!(range.high_display(), "$50");
        assert!(outcome.errors().is_empty());
    }

    #[test]
    fn submit_zero_width_is_rejected() {
        let outcome = session("0", "10").submit();

        assert_eq!(outcome, Outcome::Rejected(vec![width_error()]));
    }

    #[test]
    fn submit_empty_width_is_rejected() {
        let outcome = session("", "10").submit();

        assert_eq!(outcome, Outcome::Rejected(vec![width_error()]));
    }

    #[test]
    fn submit_negative_length_is_rejected() {
        let outcome = session("30", "-5").submit();

        assert_eq!(outcome, Outcome::Rejected(vec![length_error()]));
    }

    #[test]
    fn submit_reports_each_invalid_field() {
        let outcome = session("abc", "").submit();

        assert_eq!(outcome, Outcome::Rejected(vec![width_error(), length_error()]));
    }

    #[test]
    fn submit_overflow_rejects_both_fields() {
        let outcome = session("100000000000000000000", "100000000000000000000").submit();

        assert_eq!(outcome, Outcome::Rejected(vec![width_error(), length_error()]));
    }

    #[test]
    fn submit_dimension_beyond_decimal_range_rejects_both_fields() {
        let outcome = session("1e29", "10").submit();

        assert_eq!(outcome, Outcome::Rejected(vec![width_error(), length_error()]));
    }

    #[test]
    fn submit_sub_precision_width_yields_zero_estimate() {
        for width in ["1e-30", "0.00000000000000000000000000001"] {
            let outcome = session(width, "10").submit();

            let range = outcome.estimate().unwrap();
            assert_eq!(range.low_display(), "$0", "{width}");
            assert_eq!(range.high_display(), "$0", "{width}");
        }
    }

    #[test]
    fn submit_with_misordered_rates_blames_no_field() {
        let pricing = PricingConfig {
            low_rate: dec!(2.00),
            high_rate: dec!(1.00),
            ..PricingConfig::default()
        };
        let mut session: EstimateSession<NoopHandle> =
            EstimateSession::new(pricing, WidgetConfig::default());
        session.update(Field::Width, "90");
        session.update(Field::Length, "10");

        let outcome = session.submit();

        assert_eq!(outcome, Outcome::Unavailable);
        assert!(outcome.errors().is_empty());
        assert_eq!(outcome.estimate(), None);
    }

    #[test]
    fn valid_attempt_after_failure_has_no_errors() {
        let mut session = session("0", "10");
        assert_eq!(session.submit().errors().len(), 1);

        session.update(Field::Width, "30");
        let outcome = session.submit();

        assert!(outcome.errors().is_empty());
        assert!(outcome.estimate().is_some());
        assert_eq!(session.attempts(), 2);
    }

    #[test]
    fn submit_uses_configured_messages() {
        let widget = WidgetConfig {
            width_error: "Width?".to_string(),
            ..WidgetConfig::default()
        };
        let mut session: EstimateSession<NoopHandle> =
            EstimateSession::new(PricingConfig::default(), widget);
        session.update(Field::Length, "10");

        let outcome = session.submit();

        assert_eq!(outcome.errors()[0].message, "Width?");
    }

    // =========================================================================
    // on_timer tests
    // =========================================================================

    #[test]
    fn timer_runs_attempt_when_both_fields_filled() {
        let mut session = session("", "10");

        let ticket = session.on_input(Field::Width, "30", &mut NoopScheduler);

        assert!(session.is_pending());
        assert!(session.on_timer(ticket).is_some());
        assert_eq!(session.attempts(), 1);
    }

    #[test]
    fn timer_skips_attempt_when_a_field_is_empty() {
        let mut session = session("", "");

        let ticket = session.on_input(Field::Width, "30", &mut NoopScheduler);

        assert_eq!(session.on_timer(ticket), None);
        assert_eq!(session.attempts(), 0);
    }

    #[test]
    fn timer_validates_filled_but_invalid_fields() {
        let mut session = session("", "10");

        let ticket = session.on_input(Field::Width, "-3", &mut NoopScheduler);

        assert_eq!(
            session.on_timer(ticket),
            Some(Outcome::Rejected(vec![width_error()]))
        );
    }

    #[test]
    fn stale_timer_is_ignored() {
        let mut session = session("", "10");

        let stale = session.on_input(Field::Width, "3", &mut NoopScheduler);
        let latest = session.on_input(Field::Width, "30", &mut NoopScheduler);

        assert_eq!(session.on_timer(stale), None);
        assert!(session.on_timer(latest).is_some());
        assert_eq!(session.attempts(), 1);
    }
}
