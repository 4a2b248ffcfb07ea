use crate::error::Error;
use crate::group::SyncGroup;
use crate::sorter;
use crate::Dom;

impl<D: Dom> SyncGroup<D> {
    ///
    /// Reconcile the group after the user changed `target`.
    ///
    /// The choice `target` held before is released to the other selects,
    /// then its new selection is claimed from them.
    ///
    pub fn select_changed(&mut self, target: &D::Select) -> Result<(), Error> {
        let index = self.index_of(target).ok_or(Error::UnknownWidget)?;
        self.select_changed_at(index)
    }

    /// Same as [SyncGroup::select_changed], addressing the select by position.
    pub fn select_changed_at(&mut self, index: usize) -> Result<(), Error> {
        if index >= self.linked.len() {
            return Err(Error::UnknownWidget);
        }

        self.release(index)?;
        self.option_selected(index)
    }

    /// Put the previously held choice back into every other select.
    fn release(&mut self, index: usize) -> Result<(), Error> {
        let held = match self.linked[index].held.take() {
            Some(held) => held,
            None => return Ok(()),
        };

        let option = self
            .registry
            .canonical(&held)
            .ok_or_else(|| Error::HeldNotRegistered(held.clone()))?;

        tracing::trace!(select = index, option = %held, "release");

        for (_, linked) in self.others(index) {
            sorter::insert(&linked.select, &self.registry, D::clone_option(option)?)?;
        }

        Ok(())
    }

    ///
    /// Claim the current selection of the select at `index`.
    ///
    /// Siblings are matched by label only: what matters is what the user sees,
    /// selects may use different values for the same visible choice.
    ///
    pub(crate) fn option_selected(&mut self, index: usize) -> Result<(), Error> {
        let option = match D::selected_option(&self.linked[index].select) {
            Some(option) if !self.config.is_ignored(&D::choice(&option)) => option,
            _ => {
                self.linked[index].held = None;
                return Ok(());
            }
        };

        let key = D::key(&option);
        tracing::trace!(select = index, option = %key, "select");

        for (sibling, linked) in self.others(index) {
            let position = D::options(&linked.select)
                .iter()
                .position(|candidate| D::label(candidate) == key.label());

            if let Some(position) = position {
                tracing::trace!(select = sibling, position, "remove from sibling");
                D::remove_option(&linked.select, position)?;
            }
        }

        self.linked[index].held = Some(key);

        Ok(())
    }

    fn others(&self, index: usize) -> impl Iterator<Item = (usize, &crate::group::Linked<D>)> {
        self.linked
            .iter()
            .enumerate()
            .filter(move |(other, _)| *other != index)
    }
}
