use crate::choice::Choice;

type IgnoreFn = Box<dyn Fn(&Choice) -> bool>;

///
/// Construction options for a [SyncGroup](crate::SyncGroup).
///
#[derive(Default)]
pub struct Config {
    ignore_option: Option<IgnoreFn>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude matching choices from the uniqueness pool.
    /// They are never removed from siblings and never held.
    pub fn ignore_option(mut self, predicate: impl Fn(&Choice) -> bool + 'static) -> Self {
        self.ignore_option = Some(Box::new(predicate));
        self
    }

    /// Whether a choice takes part in uniqueness enforcement at all.
    ///
    /// Blank values are always ignored; they are the "nothing selected"
    /// placeholder of a select.
    pub fn is_ignored(&self, choice: &Choice) -> bool {
        choice.value.trim().is_empty()
            || self
                .ignore_option
                .as_ref()
                .map(|predicate| predicate(choice))
                .unwrap_or(false)
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("ignore_option", &self.ignore_option.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_always_ignored() {
        let config = Config::new();

        assert!(config.is_ignored(&Choice::new("", "")));
        assert!(config.is_ignored(&Choice::new("Pick one", "  ")));
        assert!(!config.is_ignored(&Choice::new("A", "A")));
    }

    #[test]
    fn predicate_extends_blank_rule() {
        let config = Config::new().ignore_option(|choice| choice.value == "C");

        assert!(config.is_ignored(&Choice::new("C", "C")));
        assert!(config.is_ignored(&Choice::new("", "")));
        assert!(!config.is_ignored(&Choice::new("B", "B")));
    }
}
