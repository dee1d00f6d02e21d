//! Presentation binding between the controller and whatever renders the form.

use super::fields::FieldId;
use super::wizard::StepId;

/// The two mutually exclusive status classes of a field container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Success,
    Error,
}

impl FieldStatus {
    pub fn css_class(self) -> &'static str {
        match self {
            FieldStatus::Success => "has-success",
            FieldStatus::Error => "has-error",
        }
    }
}

/// Validity as the document currently shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
    Unknown,
}

impl From<Option<FieldStatus>> for Validity {
    fn from(status: Option<FieldStatus>) -> Self {
        match status {
            Some(FieldStatus::Success) => Validity::Valid,
            Some(FieldStatus::Error) => Validity::Invalid,
            None => Validity::Unknown,
        }
    }
}

/// Result of one validation pass, ready to be applied to a field group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub status: FieldStatus,
    pub message: String,
}

impl FieldState {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: FieldStatus::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: FieldStatus::Error,
            message: message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.status == FieldStatus::Success
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Danger,
}

impl AlertKind {
    pub fn css_class(self) -> &'static str {
        match self {
            AlertKind::Success => "alert alert-success",
            AlertKind::Danger => "alert alert-danger",
        }
    }
}

/// Banner shown after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Everything the controller reads from or writes to the rendered form.
///
/// Implementations only store and display state; every decision about what
/// to show is made by the controller.
pub trait FormView {
    /// Current text of the field's input element.
    fn field_value(&self, field: FieldId) -> String;

    /// Sets the status class on `group-<field>` and the text of `help-<field>`.
    fn apply_field_state(&mut self, field: FieldId, state: &FieldState);

    /// Replaces the banner and makes it visible.
    fn show_alert(&mut self, alert: &Alert);

    fn set_step_hidden(&mut self, step: StepId, hidden: bool);

    /// Enables or disables the next/previous controls.
    fn set_navigation_enabled(&mut self, enabled: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classes_are_distinct() {
        assert_eq!(FieldStatus::Success.css_class(), "has-success");
        assert_eq!(FieldStatus::Error.css_class(), "has-error");
        assert_eq!(AlertKind::Danger.css_class(), "alert alert-danger");
    }

    #[test]
    fn validity_follows_status() {
        assert_eq!(Validity::from(None), Validity::Unknown);
        assert_eq!(Validity::from(Some(FieldStatus::Error)), Validity::Invalid);
        assert_eq!(Validity::from(Some(FieldStatus::Success)), Validity::Valid);
    }
}
