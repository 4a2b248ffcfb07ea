use std::fmt;

///
/// Identity of a choice: two options with the same value *and* label
/// are the same choice, even when they live in different selects.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OptionKey {
    value: String,
    label: String,
}

impl OptionKey {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.value, self.label)
    }
}

///
/// An owned snapshot of one option, as seen by the user.
///
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> OptionKey {
        OptionKey::new(self.value.clone(), self.label.clone())
    }
}
