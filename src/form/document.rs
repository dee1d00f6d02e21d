use std::collections::BTreeSet;

use super::fields::FieldId;
use super::view::{Alert, FieldState, FieldStatus, FormView, Validity};
use super::wizard::{StepId, StepLayout};

/// Rendered state of one field group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldGroup {
    pub value: String,
    pub status: Option<FieldStatus>,
    pub help: String,
}

/// In-memory stand-in for the contact form page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDocument {
    groups: [FieldGroup; FieldId::COUNT],
    steps: Vec<StepId>,
    hidden_steps: BTreeSet<StepId>,
    navigation_enabled: bool,
    alert: Option<Alert>,
}

impl FormDocument {
    /// Builds an empty document with one container per step of `layout`.
    pub fn new(layout: &StepLayout) -> Self {
        Self {
            groups: Default::default(),
            steps: layout.steps().iter().map(|step| step.id).collect(),
            hidden_steps: BTreeSet::new(),
            navigation_enabled: false,
            alert: None,
        }
    }

    /// Mimics the user typing into the input; nothing is validated here.
    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) {
        self.group_mut(field).value = value.into();
    }

    pub fn group(&self, field: FieldId) -> &FieldGroup {
        &self.groups[field.index()]
    }

    fn group_mut(&mut self, field: FieldId) -> &mut FieldGroup {
        &mut self.groups[field.index()]
    }

    pub fn validity(&self, field: FieldId) -> Validity {
        self.group(field).status.into()
    }

    pub fn help_text(&self, field: FieldId) -> &str {
        &self.group(field).help
    }

    /// Class list of the `group-<field>` container.
    pub fn group_class(&self, field: FieldId) -> String {
        match self.group(field).status {
            Some(status) => format!("form-group {}", status.css_class()),
            None => "form-group".to_string(),
        }
    }

    pub fn is_step_visible(&self, step: StepId) -> bool {
        self.steps.contains(&step) && !self.hidden_steps.contains(&step)
    }

    pub fn visible_steps(&self) -> Vec<StepId> {
        self.steps
            .iter()
            .copied()
            .filter(|step| !self.hidden_steps.contains(step))
            .collect()
    }

    pub fn navigation_enabled(&self) -> bool {
        self.navigation_enabled
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }
}

impl FormView for FormDocument {
    fn field_value(&self, field: FieldId) -> String {
        self.group(field).value.clone()
    }

    fn apply_field_state(&mut self, field: FieldId, state: &FieldState) {
        let group = self.group_mut(field);
        group.status = Some(state.status);
        group.help = state.message.clone();
    }

    fn show_alert(&mut self, alert: &Alert) {
        self.alert = Some(alert.clone());
    }

    fn set_step_hidden(&mut self, step: StepId, hidden: bool) {
        if hidden {
            self.hidden_steps.insert(step);
        } else {
            self.hidden_steps.remove(&step);
        }
    }

    fn set_navigation_enabled(&mut self, enabled: bool) {
        self.navigation_enabled = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_document_is_unvalidated() {
        let doc = FormDocument::new(&StepLayout::contact_default());
        for field in FieldId::ALL {
            assert_eq!(doc.validity(field), Validity::Unknown);
            assert_eq!(doc.group_class(field), "form-group");
        }
        assert_eq!(doc.visible_steps(), vec![StepId(1), StepId(2), StepId(3)]);
        assert!(doc.alert().is_none());
    }

    #[test]
    fn field_state_swaps_status_class() {
        let mut doc = FormDocument::new(&StepLayout::contact_default());
        doc.apply_field_state(FieldId::Email, &FieldState::error("Enter a valid email."));
        assert_eq!(doc.group_class(FieldId::Email), "form-group has-error");
        doc.apply_field_state(FieldId::Email, &FieldState::success("Looks good."));
        assert_eq!(doc.group_class(FieldId::Email), "form-group has-success");
        assert_eq!(doc.help_text(FieldId::Email), "Looks good.");
    }

    #[test]
    fn unknown_steps_are_never_visible() {
        let doc = FormDocument::new(&StepLayout::contact_default());
        assert!(!doc.is_step_visible(StepId(9)));
    }
}
