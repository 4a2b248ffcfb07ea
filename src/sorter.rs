//!
//! Puts a select's options back into home position order.
//!
//! The new list is computed first and then swapped into the select with
//! a single host call, carrying the selection over by option identity.
//! Hosts are free to reset selection while options move around, so the
//! swap always states the selected index explicitly.
//!

use crate::error::Error;
use crate::registry::OptionRegistry;
use crate::Dom;

/// Sort the options of `select` by home position.
pub fn reorder<D: Dom>(select: &D::Select, registry: &OptionRegistry<D>) -> Result<(), Error> {
    rebuild(select, registry, None)
}

/// Add `option` to `select` and sort it into its home position.
pub fn insert<D: Dom>(
    select: &D::Select,
    registry: &OptionRegistry<D>,
    option: D::OptionElement,
) -> Result<(), Error> {
    rebuild(select, registry, Some(option))
}

fn rebuild<D: Dom>(
    select: &D::Select,
    registry: &OptionRegistry<D>,
    extra: Option<D::OptionElement>,
) -> Result<(), Error> {
    let selected_key = D::selected_option(select).map(|option| D::key(&option));

    let mut options = D::options(select);
    options.extend(extra);

    let options = sort_into_home_slots(options, registry);

    let selected = selected_key.and_then(|selected_key| {
        options
            .iter()
            .position(|option| D::key(option) == selected_key)
    });

    D::replace_options(select, options, selected)
}

///
/// Registered options are stably sorted by home position into the slots
/// that registered options occupied. Unregistered (ignored) options stay
/// where they are, so a leading placeholder stays in front.
///
fn sort_into_home_slots<D: Dom>(
    options: Vec<D::OptionElement>,
    registry: &OptionRegistry<D>,
) -> Vec<D::OptionElement> {
    let mut slots = Vec::with_capacity(options.len());
    let mut registered = vec![];

    for option in options {
        match registry.position(&D::key(&option)) {
            Some(position) => {
                slots.push(None);
                registered.push((position, option));
            }
            None => slots.push(Some(option)),
        }
    }

    registered.sort_by_key(|(position, _)| *position);
    let mut registered = registered.into_iter().map(|(_, option)| option);

    slots
        .into_iter()
        .filter_map(|slot| slot.or_else(|| registered.next()))
        .collect()
}
