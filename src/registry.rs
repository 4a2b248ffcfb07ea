use std::collections::HashMap;

use crate::choice::OptionKey;
use crate::config::Config;
use crate::Dom;

struct Entry<D: Dom> {
    option: D::OptionElement,
    position: usize,
}

///
/// Every unique, non-ignorable option found in the group at construction,
/// with its home position.
///
/// Immutable once built.
///
pub struct OptionRegistry<D: Dom> {
    entries: HashMap<OptionKey, Entry<D>>,
    order: Vec<OptionKey>,
}

impl<D: Dom> OptionRegistry<D> {
    /// Collect options in select order, then in-select order.
    /// The first occurrence of a key wins and decides its position.
    pub fn build(selects: &[D::Select], config: &Config) -> Self {
        let mut entries = HashMap::new();
        let mut order = vec![];

        for option in selects.iter().flat_map(D::options) {
            if config.is_ignored(&D::choice(&option)) {
                continue;
            }

            let key = D::key(&option);
            if entries.contains_key(&key) {
                continue;
            }

            entries.insert(
                key.clone(),
                Entry {
                    option,
                    position: order.len(),
                },
            );
            order.push(key);
        }

        Self { entries, order }
    }

    pub fn position(&self, key: &OptionKey) -> Option<usize> {
        self.entries.get(key).map(|entry| entry.position)
    }

    /// The option element first seen for this key.
    pub fn canonical(&self, key: &OptionKey) -> Option<&D::OptionElement> {
        self.entries.get(key).map(|entry| &entry.option)
    }

    pub fn contains(&self, key: &OptionKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in home position order.
    pub fn keys(&self) -> impl Iterator<Item = &OptionKey> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{ServerDom, ServerOption, ServerSelect};

    #[test]
    fn dedupes_in_first_occurrence_order() {
        let selects = vec![
            ServerSelect::with_labels(&["", "B", "A"]),
            ServerSelect::with_labels(&["", "A", "C", "B"]),
        ];
        let registry = OptionRegistry::<ServerDom>::build(&selects, &Config::new());

        let labels: Vec<_> = registry.keys().map(|key| key.label()).collect();
        assert_eq!(labels, vec!["B", "A", "C"]);

        assert_eq!(registry.position(&OptionKey::new("B", "B")), Some(0));
        assert_eq!(registry.position(&OptionKey::new("C", "C")), Some(2));
        assert_eq!(registry.position(&OptionKey::new("", "")), None);
    }

    #[test]
    fn identity_includes_the_value() {
        let selects = vec![
            ServerSelect::new(vec![ServerOption::new("1", "One")]),
            ServerSelect::new(vec![ServerOption::new("uno", "One")]),
        ];
        let registry = OptionRegistry::<ServerDom>::build(&selects, &Config::new());

        assert_eq!(registry.len(), 2);
        assert!(registry.contains(&OptionKey::new("uno", "One")));
    }

    #[test]
    fn configured_ignores_are_not_registered() {
        let selects = vec![ServerSelect::with_labels(&["", "A", "B", "C"])];
        let config = Config::new().ignore_option(|choice| choice.value == "C");
        let registry = OptionRegistry::<ServerDom>::build(&selects, &config);

        assert_eq!(registry.len(), 2);
        assert!(!registry.contains(&OptionKey::new("C", "C")));
        assert!(registry.canonical(&OptionKey::new("A", "A")).is_some());
    }
}
