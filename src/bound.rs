use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::choice::Choice;
use crate::error::Error;
use crate::group::SyncGroup;
use crate::Dom;

type Shared<T> = Rc<RefCell<T>>;

///
/// A [SyncGroup] listening to the change notifications of its selects.
///
/// Dropping it (or calling [Bound::detach]) unsubscribes from every select.
///
pub struct Bound<D: Dom> {
    group: Shared<SyncGroup<D>>,
    subscriptions: Vec<D::Subscription>,
}

impl<D: Dom> SyncGroup<D> {
    /// Subscribe to the change notification of every select in the group.
    pub fn bind(self) -> Result<Bound<D>, Error> {
        let selects: Vec<D::Select> = self.selects().cloned().collect();
        let group = Rc::new(RefCell::new(self));

        let subscriptions = selects
            .iter()
            .enumerate()
            .map(|(index, select)| D::on_change(select, change_handler(Rc::downgrade(&group), index)))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(selects = subscriptions.len(), "sync group bound");

        Ok(Bound {
            group,
            subscriptions,
        })
    }
}

fn change_handler<D: Dom>(group: Weak<RefCell<SyncGroup<D>>>, index: usize) -> crate::ChangeHandler {
    Box::new(move || {
        // Subscriptions never outlive the group they were made for.
        let Some(group) = group.upgrade() else {
            return Ok(());
        };
        let mut group = group.try_borrow_mut().map_err(|_| Error::Reentrant)?;

        group.select_changed_at(index)
    })
}

impl<D: Dom> Bound<D> {
    pub fn selected(&self) -> Vec<Choice> {
        self.group.borrow().selected()
    }

    pub fn remaining(&self) -> Vec<Choice> {
        self.group.borrow().remaining()
    }

    /// Report a change manually, e.g. after changing a select from code.
    pub fn select_changed(&self, target: &D::Select) -> Result<(), Error> {
        self.group
            .try_borrow_mut()
            .map_err(|_| Error::Reentrant)?
            .select_changed(target)
    }

    /// Stop listening, and get the group back.
    pub fn detach(self) -> Result<SyncGroup<D>, Error> {
        let Bound {
            group,
            subscriptions,
        } = self;

        drop(subscriptions);
        tracing::debug!("sync group detached");

        // Handlers only hold weak references. A strong one exists only
        // while a handler is running.
        Rc::try_unwrap(group)
            .map(RefCell::into_inner)
            .map_err(|_| Error::Reentrant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::server::{ServerDom, ServerNode, ServerSelect};

    fn bound_pair() -> (ServerSelect, ServerSelect, Bound<ServerDom>) {
        let a = ServerSelect::with_labels(&["", "A", "B", "C"]);
        let b = ServerSelect::with_labels(&["", "A", "B", "C"]);
        let bound = SyncGroup::<ServerDom>::new(
            vec![ServerNode::from(a.clone()), ServerNode::from(b.clone())],
            Config::new(),
        )
        .unwrap()
        .bind()
        .unwrap();

        (a, b, bound)
    }

    #[test]
    fn change_events_drive_the_group() {
        let (a, b, bound) = bound_pair();

        a.change_value("B").unwrap();

        assert_eq!(b.values(), vec!["", "A", "C"]);
        assert_eq!(bound.selected(), vec![Choice::new("B", "B")]);
        assert_eq!(
            bound.remaining(),
            vec![Choice::new("A", "A"), Choice::new("C", "C")]
        );
    }

    #[test]
    fn detach_unsubscribes() {
        let (a, b, bound) = bound_pair();
        assert_eq!(a.listener_count(), 1);

        let group = bound.detach().unwrap();
        assert_eq!(a.listener_count(), 0);
        assert_eq!(b.listener_count(), 0);

        a.change_value("B").unwrap();
        assert_eq!(b.values(), vec!["", "A", "B", "C"]);
        assert_eq!(group.held(0), None);
    }

    #[test]
    fn nested_change_is_reported_as_reentrant() {
        let a = ServerSelect::with_labels(&["", "A", "B"]);
        let group = Rc::new(RefCell::new(
            SyncGroup::<ServerDom>::new(vec![ServerNode::from(a.clone())], Config::new()).unwrap(),
        ));
        let handler = change_handler(Rc::downgrade(&group), 0);

        let _reconciling = group.try_borrow_mut().unwrap();
        a.set_value("A");

        assert_eq!(handler(), Err(Error::Reentrant));
    }

    #[test]
    fn manual_reports_go_through_the_same_path() {
        let (a, b, bound) = bound_pair();

        a.set_value("C");
        bound.select_changed(&a).unwrap();

        assert_eq!(b.values(), vec!["", "A", "B"]);
    }
}
