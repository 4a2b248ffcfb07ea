#![forbid(unsafe_code)]

//!
//! The select_unique crate keeps a group of select widgets mutually exclusive.
//!
//! A choice selected in one select is removed from all the other selects
//! in the group. When it is released again, it is put back where it was.
//!

pub mod bound;
pub mod choice;
pub mod config;
pub mod error;
pub mod group;
pub mod prelude;
pub mod registry;
pub mod server;
pub mod sorter;

#[cfg(feature = "web")]
pub mod web;

mod reconcile;

pub use bound::Bound;
pub use choice::{Choice, OptionKey};
pub use config::Config;
pub use error::Error;
pub use group::SyncGroup;

///
/// Function invoked by the host whenever the user changes a select.
///
pub type ChangeHandler = Box<dyn Fn() -> Result<(), Error>>;

///
/// Main abstraction for select_unique
///
/// We abstract over the type of DOM hosting the select widgets.
/// Elements are handles: cloning one yields another reference to the
/// same element, and mutation goes through shared references.
///
pub trait Dom: Sized + 'static {
    /// Anything a caller may hand to the group. Not necessarily a select.
    type Node: Clone + 'static;
    type Select: Clone + 'static;
    type OptionElement: Clone + 'static;

    /// Keeps a change listener attached. Dropping it detaches the listener.
    type Subscription: 'static;

    /// "downcast" a node to a select, if it is one.
    fn as_select(node: &Self::Node) -> Option<Self::Select>;

    /// Human readable description of a node, for error messages.
    fn describe(node: &Self::Node) -> String;

    /// Element identity.
    fn same_select(a: &Self::Select, b: &Self::Select) -> bool;

    fn options(select: &Self::Select) -> Vec<Self::OptionElement>;

    fn selected_index(select: &Self::Select) -> Option<usize>;

    fn value(option: &Self::OptionElement) -> String;

    /// The text the user sees.
    fn label(option: &Self::OptionElement) -> String;

    /// Structural copy of an option, not attached to any select.
    fn clone_option(option: &Self::OptionElement) -> Result<Self::OptionElement, Error>;

    fn remove_option(select: &Self::Select, index: usize) -> Result<(), Error>;

    /// Swap in a complete new option list, with `selected` as the only
    /// selected option.
    fn replace_options(
        select: &Self::Select,
        options: Vec<Self::OptionElement>,
        selected: Option<usize>,
    ) -> Result<(), Error>;

    /// Subscribe to change notifications of a select.
    fn on_change(select: &Self::Select, handler: ChangeHandler)
        -> Result<Self::Subscription, Error>;

    fn selected_option(select: &Self::Select) -> Option<Self::OptionElement> {
        Self::selected_index(select).and_then(|index| Self::options(select).into_iter().nth(index))
    }

    fn choice(option: &Self::OptionElement) -> Choice {
        Choice::new(Self::label(option), Self::value(option))
    }

    fn key(option: &Self::OptionElement) -> OptionKey {
        Self::choice(option).key()
    }
}
