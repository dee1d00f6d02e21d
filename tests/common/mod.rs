use contact_form::form::{FieldId, FormController, FormDocument, StepLayout};

pub const VALID_VALUES: [(FieldId, &str); 7] = [
    (FieldId::FirstName, "Ann"),
    (FieldId::LastName, "Lee"),
    (FieldId::Email, "ann@lee.com"),
    (FieldId::Phone, "5551234567"),
    (FieldId::Username, "annlee1"),
    (FieldId::Password, "secret1"),
    (FieldId::Comments, "hello"),
];

/// Controller over a fresh document using the default three-step layout.
pub fn contact_form() -> FormController<FormDocument> {
    let layout = StepLayout::contact_default();
    FormController::new(FormDocument::new(&layout), layout)
}

pub fn fill(form: &mut FormController<FormDocument>, values: &[(FieldId, &str)]) {
    for (field, value) in values {
        form.view_mut().set_value(*field, *value);
    }
}
