//! Contact form validation and wizard navigation.
//!
//! [`rules`] holds the pure per-field checks, [`controller`] applies them to a
//! [`view::FormView`] and drives the step wizard, and [`document`] provides an
//! in-memory view for hosts without a real page.

pub mod controller;
pub mod document;
pub mod fields;
pub mod rules;
pub mod view;
pub mod wizard;

pub use controller::{
    EventOutcome, FormController, FormEvent, NavOutcome, SUBMIT_FAILURE_MESSAGE,
    SUBMIT_SUCCESS_MESSAGE,
};
pub use document::{FieldGroup, FormDocument};
pub use fields::FieldId;
pub use view::{Alert, AlertKind, FieldState, FieldStatus, FormView, Validity};
pub use wizard::{Step, StepId, StepLayout, WizardState};
