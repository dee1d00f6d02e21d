use std::fmt;
use std::str::FromStr;

use crate::errors::FormError;

/// The fixed set of contact form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Phone,
    Username,
    Password,
    Comments,
}

impl FieldId {
    pub const COUNT: usize = 7;

    /// Every field, in the order full-form validation visits them.
    pub const ALL: [FieldId; FieldId::COUNT] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Username,
        FieldId::Password,
        FieldId::Comments,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::FirstName => "firstName",
            FieldId::LastName => "lastName",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Username => "username",
            FieldId::Password => "password",
            FieldId::Comments => "comments",
        }
    }

    /// Position in [`FieldId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::FirstName => "First name",
            FieldId::LastName => "Last name",
            FieldId::Email => "Email",
            FieldId::Phone => "Phone",
            FieldId::Username => "Username",
            FieldId::Password => "Password",
            FieldId::Comments => "Comments",
        }
    }

    /// Id of the container carrying the status class.
    pub fn group_id(self) -> String {
        format!("group-{}", self.as_str())
    }

    /// Id of the help text element next to the input.
    pub fn help_id(self) -> String {
        format!("help-{}", self.as_str())
    }

    pub fn is_secret(self) -> bool {
        matches!(self, FieldId::Password)
    }

    /// Parses an identifier, returning `None` for anything outside the set.
    pub fn lookup(name: &str) -> Option<FieldId> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.as_str() == name)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::lookup(s).ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}
