//! Event-driven controller binding validation rules and wizard navigation to
//! a [`FormView`].

use tracing::debug;

use super::fields::FieldId;
use super::rules;
use super::view::{Alert, AlertKind, FormView};
use super::wizard::{StepId, StepLayout, WizardState};
use crate::errors::FormError;

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Form is valid. Ready to submit.";
pub const SUBMIT_FAILURE_MESSAGE: &str = "Please fix the errors and try again.";

/// Events the host forwards to [`FormController::handle_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    Input(FieldId),
    Blur(FieldId),
    Submit,
    WizardToggle(bool),
    Next { from: StepId, to: StepId },
    Prev { from: StepId, to: StepId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    Moved { from: StepId, to: StepId },
    /// Forward move refused; `invalid` lists the failing fields of `step`.
    Blocked { step: StepId, invalid: Vec<FieldId> },
    /// No neighbouring step in the requested direction.
    Boundary,
    /// Navigation controls are inert while wizard mode is off.
    Inactive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    Validated(bool),
    Submitted(bool),
    ModeChanged(bool),
    Navigated(NavOutcome),
}

pub struct FormController<V: FormView> {
    view: V,
    layout: StepLayout,
    wizard: WizardState,
}

impl<V: FormView> FormController<V> {
    /// Binds a controller to `view`. Every step starts visible.
    pub fn new(view: V, layout: StepLayout) -> Self {
        let wizard = WizardState::new(layout.first());
        let mut controller = Self {
            view,
            layout,
            wizard,
        };
        controller.set_wizard_mode(false);
        controller
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn layout(&self) -> &StepLayout {
        &self.layout
    }

    pub fn wizard(&self) -> WizardState {
        self.wizard
    }

    /// Single entry point for host events.
    pub fn handle_event(&mut self, event: FormEvent) -> Result<EventOutcome, FormError> {
        let outcome = match event {
            FormEvent::Input(field) | FormEvent::Blur(field) => {
                EventOutcome::Validated(self.validate_field(field))
            }
            FormEvent::Submit => EventOutcome::Submitted(self.handle_submit()),
            FormEvent::WizardToggle(enabled) => {
                self.set_wizard_mode(enabled);
                EventOutcome::ModeChanged(enabled)
            }
            FormEvent::Next { from, to } => EventOutcome::Navigated(self.handle_next(from, to)?),
            FormEvent::Prev { from, to } => EventOutcome::Navigated(self.handle_prev(from, to)?),
        };
        Ok(outcome)
    }

    /// Validates one field against its current value and updates its group.
    pub fn validate_field(&mut self, field: FieldId) -> bool {
        let value = self.view.field_value(field);
        let state = rules::evaluate(field, &value);
        self.view.apply_field_state(field, &state);
        state.is_valid()
    }

    /// Same as [`validate_field`](Self::validate_field) for a raw identifier.
    /// Unknown identifiers fail without touching the view.
    pub fn validate_field_named(&mut self, name: &str) -> bool {
        match FieldId::lookup(name) {
            Some(field) => self.validate_field(field),
            None => false,
        }
    }

    pub fn validate_all(&mut self) -> bool {
        self.validate_fields(&FieldId::ALL).is_empty()
    }

    // Visits every field, so all failing groups get their error state.
    fn validate_fields(&mut self, fields: &[FieldId]) -> Vec<FieldId> {
        let mut invalid = Vec::new();
        for &field in fields {
            if !self.validate_field(field) {
                invalid.push(field);
            }
        }
        invalid
    }

    /// Intercepts submission: validates everything and shows the banner.
    /// Nothing is sent anywhere.
    pub fn handle_submit(&mut self) -> bool {
        debug!("form submission intercepted");
        let valid = self.validate_all();
        let alert = if valid {
            Alert::new(AlertKind::Success, SUBMIT_SUCCESS_MESSAGE)
        } else {
            Alert::new(AlertKind::Danger, SUBMIT_FAILURE_MESSAGE)
        };
        self.view.show_alert(&alert);
        valid
    }

    pub fn set_wizard_mode(&mut self, enabled: bool) {
        let first = self.layout.first();
        self.wizard.enabled = enabled;
        self.wizard.current = first;
        if enabled {
            self.show_only(first);
        } else {
            for step in self.layout.steps() {
                self.view.set_step_hidden(step.id, false);
            }
        }
        self.view.set_navigation_enabled(enabled);
        debug!(enabled, "wizard mode changed");
    }

    /// Moves forward only when every field of `current` validates.
    pub fn handle_next(
        &mut self,
        current: StepId,
        target: StepId,
    ) -> Result<NavOutcome, FormError> {
        if !self.wizard.enabled {
            return Ok(NavOutcome::Inactive);
        }
        let fields = self.layout.step(current)?.fields.clone();
        self.layout.step(target)?;

        let invalid = self.validate_fields(&fields);
        if !invalid.is_empty() {
            return Ok(NavOutcome::Blocked {
                step: current,
                invalid,
            });
        }
        Ok(self.move_to(current, target))
    }

    /// Moves backward without validating anything.
    pub fn handle_prev(
        &mut self,
        current: StepId,
        target: StepId,
    ) -> Result<NavOutcome, FormError> {
        if !self.wizard.enabled {
            return Ok(NavOutcome::Inactive);
        }
        self.layout.step(current)?;
        self.layout.step(target)?;
        Ok(self.move_to(current, target))
    }

    /// Advances from the current step to the following one.
    pub fn next(&mut self) -> Result<NavOutcome, FormError> {
        if !self.wizard.enabled {
            return Ok(NavOutcome::Inactive);
        }
        let current = self.wizard.current;
        match self.layout.after(current) {
            Some(target) => self.handle_next(current, target),
            None => Ok(NavOutcome::Boundary),
        }
    }

    pub fn prev(&mut self) -> Result<NavOutcome, FormError> {
        if !self.wizard.enabled {
            return Ok(NavOutcome::Inactive);
        }
        let current = self.wizard.current;
        match self.layout.before(current) {
            Some(target) => self.handle_prev(current, target),
            None => Ok(NavOutcome::Boundary),
        }
    }

    fn move_to(&mut self, from: StepId, to: StepId) -> NavOutcome {
        self.show_only(to);
        self.wizard.current = to;
        debug!(%from, %to, "wizard step changed");
        NavOutcome::Moved { from, to }
    }

    // Keeps the one-visible-step invariant even if `from` was stale.
    fn show_only(&mut self, target: StepId) {
        for step in self.layout.steps() {
            self.view.set_step_hidden(step.id, step.id != target);
        }
    }
}
