use crate::choice::{Choice, OptionKey};
use crate::config::Config;
use crate::error::Error;
use crate::registry::OptionRegistry;
use crate::Dom;

///
/// One select of the group, and the choice it currently holds.
///
pub(crate) struct Linked<D: Dom> {
    pub select: D::Select,

    /// Key of the last non-ignored choice selected here, if not yet released.
    pub held: Option<OptionKey>,
}

///
/// A group of selects where each choice may be selected in only one of them.
///
/// The group does not observe the selects by itself. Either report changes
/// with [SyncGroup::select_changed], or call [SyncGroup::bind] to subscribe
/// to the host's change notifications.
///
pub struct SyncGroup<D: Dom> {
    pub(crate) linked: Vec<Linked<D>>,
    pub(crate) registry: OptionRegistry<D>,
    pub(crate) config: Config,
}

impl<D: Dom> SyncGroup<D> {
    ///
    /// Link the given selects together.
    ///
    /// Selects that already have a selection are reconciled before this
    /// returns, so the group starts out consistent.
    ///
    pub fn new(nodes: impl IntoIterator<Item = D::Node>, config: Config) -> Result<Self, Error> {
        let selects = nodes
            .into_iter()
            .map(|node| D::as_select(&node).ok_or_else(|| Error::NotASelect(D::describe(&node))))
            .collect::<Result<Vec<_>, _>>()?;

        if selects.is_empty() {
            return Err(Error::NoWidgets);
        }

        let registry = OptionRegistry::build(&selects, &config);

        tracing::debug!(
            selects = selects.len(),
            unique_options = registry.len(),
            "building sync group"
        );

        let mut group = Self {
            linked: selects
                .into_iter()
                .map(|select| Linked { select, held: None })
                .collect(),
            registry,
            config,
        };

        for index in 0..group.linked.len() {
            if D::selected_index(&group.linked[index].select).is_some() {
                group.option_selected(index)?;
            }
        }

        Ok(group)
    }

    /// The current, non-ignored selection of each select, in select order.
    pub fn selected(&self) -> Vec<Choice> {
        self.linked
            .iter()
            .filter_map(|linked| D::selected_option(&linked.select))
            .map(|option| D::choice(&option))
            .filter(|choice| !self.config.is_ignored(choice))
            .collect()
    }

    ///
    /// Choices nobody has selected yet.
    ///
    /// Read off the first select, which lacks every choice held elsewhere.
    ///
    pub fn remaining(&self) -> Vec<Choice> {
        let first = &self.linked[0].select;
        let selected = D::selected_index(first);

        D::options(first)
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != selected)
            .map(|(_, option)| D::choice(option))
            .filter(|choice| !self.config.is_ignored(choice))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.linked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.linked.is_empty()
    }

    pub fn selects(&self) -> impl Iterator<Item = &D::Select> {
        self.linked.iter().map(|linked| &linked.select)
    }

    /// The choice held by the select at `index`.
    pub fn held(&self, index: usize) -> Option<&OptionKey> {
        self.linked.get(index).and_then(|linked| linked.held.as_ref())
    }

    pub fn registry(&self) -> &OptionRegistry<D> {
        &self.registry
    }

    pub(crate) fn index_of(&self, select: &D::Select) -> Option<usize> {
        self.linked
            .iter()
            .position(|linked| D::same_select(&linked.select, select))
    }
}
