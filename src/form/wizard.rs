use std::collections::HashSet;
use std::fmt;

use super::fields::FieldId;
use crate::errors::FormError;

/// Step index as carried by the `data-step` attribute, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StepId(pub u32);

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub id: StepId,
    pub fields: Vec<FieldId>,
}

impl Step {
    pub fn new(id: u32, fields: Vec<FieldId>) -> Self {
        Self {
            id: StepId(id),
            fields,
        }
    }
}

/// Ordered, non-empty sequence of steps whose disjoint field groups cover
/// every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepLayout {
    steps: Vec<Step>,
}

impl StepLayout {
    pub fn new(steps: Vec<Step>) -> Result<Self, FormError> {
        if steps.is_empty() {
            return Err(FormError::InvalidLayout("at least one step is required".into()));
        }
        let mut ids = HashSet::new();
        let mut assigned = HashSet::new();
        for step in &steps {
            if !ids.insert(step.id) {
                return Err(FormError::InvalidLayout(format!(
                    "step {} is declared twice",
                    step.id
                )));
            }
            for field in &step.fields {
                if !assigned.insert(*field) {
                    return Err(FormError::InvalidLayout(format!(
                        "field `{}` belongs to more than one step",
                        field
                    )));
                }
            }
        }
        if let Some(missing) = FieldId::ALL.iter().find(|field| !assigned.contains(*field)) {
            return Err(FormError::InvalidLayout(format!(
                "field `{}` is not assigned to any step",
                missing
            )));
        }
        Ok(Self { steps })
    }

    /// Name and contact details, then account, then comments.
    pub fn contact_default() -> Self {
        Self {
            steps: vec![
                Step::new(1, vec![FieldId::FirstName, FieldId::LastName, FieldId::Email]),
                Step::new(2, vec![FieldId::Phone, FieldId::Username, FieldId::Password]),
                Step::new(3, vec![FieldId::Comments]),
            ],
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn first(&self) -> StepId {
        self.steps[0].id
    }

    pub fn step(&self, id: StepId) -> Result<&Step, FormError> {
        self.steps
            .iter()
            .find(|step| step.id == id)
            .ok_or(FormError::UnknownStep(id.0))
    }

    pub fn position(&self, id: StepId) -> Option<usize> {
        self.steps.iter().position(|step| step.id == id)
    }

    /// Step following `id` in layout order.
    pub fn after(&self, id: StepId) -> Option<StepId> {
        let index = self.position(id)?;
        self.steps.get(index + 1).map(|step| step.id)
    }

    pub fn before(&self, id: StepId) -> Option<StepId> {
        let index = self.position(id)?;
        index
            .checked_sub(1)
            .and_then(|prev| self.steps.get(prev))
            .map(|step| step.id)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Default for StepLayout {
    fn default() -> Self {
        Self::contact_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardState {
    pub enabled: bool,
    pub current: StepId,
}

impl WizardState {
    pub fn new(first: StepId) -> Self {
        Self {
            enabled: false,
            current: first,
        }
    }
}
