//!
//! In-memory select widgets.
//!
//! Useful wherever there is no browser: server side, and in tests.
//!

use std::rc::Rc;

use crate::error::Error;
use crate::{ChangeHandler, Dom};

mod server_dom;

pub use server_dom::{ServerNode, ServerOption, ServerSelect, ServerSubscription};

pub struct ServerDom;

impl Dom for ServerDom {
    type Node = ServerNode;
    type Select = ServerSelect;
    type OptionElement = ServerOption;
    type Subscription = ServerSubscription;

    fn as_select(node: &ServerNode) -> Option<ServerSelect> {
        match node {
            ServerNode::Select(select) => Some(select.clone()),
            _ => None,
        }
    }

    fn describe(node: &ServerNode) -> String {
        node.tag_name()
    }

    fn same_select(a: &ServerSelect, b: &ServerSelect) -> bool {
        a.is(b)
    }

    fn options(select: &ServerSelect) -> Vec<ServerOption> {
        select.options()
    }

    fn selected_index(select: &ServerSelect) -> Option<usize> {
        select.selected_index()
    }

    fn value(option: &ServerOption) -> String {
        option.value.clone()
    }

    fn label(option: &ServerOption) -> String {
        option.label.clone()
    }

    fn clone_option(option: &ServerOption) -> Result<ServerOption, Error> {
        Ok(option.clone())
    }

    fn remove_option(select: &ServerSelect, index: usize) -> Result<(), Error> {
        select.remove(index)
    }

    fn replace_options(
        select: &ServerSelect,
        options: Vec<ServerOption>,
        selected: Option<usize>,
    ) -> Result<(), Error> {
        select.replace(options, selected)
    }

    fn on_change(
        select: &ServerSelect,
        handler: ChangeHandler,
    ) -> Result<ServerSubscription, Error> {
        Ok(select.add_listener(Rc::from(handler)))
    }
}
