use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::Error;

type Listener = Rc<dyn Fn() -> Result<(), Error>>;

///
/// An `<option>`. Plain data: it belongs to whichever select holds it.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerOption {
    pub value: String,
    pub label: String,
}

impl ServerOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// An option without a `value` attribute: its value is its text.
    pub fn text(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: label.clone(),
            label,
        }
    }
}

pub(crate) struct SelectInner {
    options: RefCell<Vec<ServerOption>>,
    selected: Cell<Option<usize>>,
    listeners: RefCell<Vec<(u64, Listener)>>,
    next_listener_id: Cell<u64>,
}

///
/// A single-selection `<select>`.
///
/// This is a handle: clones refer to the same select.
///
/// Selectedness follows the rules of a browser drop-down list: after options
/// are inserted or removed, a select with options but no selection selects
/// its first option. Asking for a value that no option has leaves the select
/// without a selection.
///
#[derive(Clone)]
pub struct ServerSelect(pub(crate) Rc<SelectInner>);

impl ServerSelect {
    pub fn new(options: Vec<ServerOption>) -> Self {
        let select = Self(Rc::new(SelectInner {
            options: RefCell::new(options),
            selected: Cell::new(None),
            listeners: RefCell::new(vec![]),
            next_listener_id: Cell::new(0),
        }));
        select.reset_selectedness();
        select
    }

    /// Options written as `<option>label</option>`.
    pub fn with_labels(labels: &[&str]) -> Self {
        Self::new(labels.iter().map(|label| ServerOption::text(*label)).collect())
    }

    pub fn is(&self, other: &ServerSelect) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn options(&self) -> Vec<ServerOption> {
        self.0.options.borrow().clone()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.0.selected.get()
    }

    pub fn values(&self) -> Vec<String> {
        self.0
            .options
            .borrow()
            .iter()
            .map(|option| option.value.clone())
            .collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.0
            .options
            .borrow()
            .iter()
            .map(|option| option.label.clone())
            .collect()
    }

    /// Values of the selected options: empty, or exactly one.
    pub fn selected_values(&self) -> Vec<String> {
        let options = self.0.options.borrow();
        let selected = self
            .selected_index()
            .and_then(|index| options.get(index))
            .map(|option| option.value.clone());

        selected.into_iter().collect()
    }

    /// Select the first option with `value`, without notifying anyone.
    pub fn set_value(&self, value: &str) {
        let index = self
            .0
            .options
            .borrow()
            .iter()
            .position(|option| option.value == value);
        self.0.selected.set(index);
    }

    /// What a user does: pick a value, then the select fires its change event.
    pub fn change_value(&self, value: &str) -> Result<(), Error> {
        self.set_value(value);
        self.dispatch_change()
    }

    /// Run every change listener. Stops at the first failing one.
    pub fn dispatch_change(&self) -> Result<(), Error> {
        let listeners: Vec<Listener> = self
            .0
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in listeners {
            listener()?;
        }

        Ok(())
    }

    pub fn listener_count(&self) -> usize {
        self.0.listeners.borrow().len()
    }

    pub(crate) fn remove(&self, index: usize) -> Result<(), Error> {
        {
            let mut options = self.0.options.borrow_mut();
            if index >= options.len() {
                return Err(Error::Host(format!("no option at index {}", index)));
            }
            options.remove(index);
        }

        match self.0.selected.get() {
            Some(selected) if selected == index => self.0.selected.set(None),
            Some(selected) if selected > index => self.0.selected.set(Some(selected - 1)),
            _ => {}
        }

        self.reset_selectedness();
        Ok(())
    }

    pub(crate) fn replace(
        &self,
        options: Vec<ServerOption>,
        selected: Option<usize>,
    ) -> Result<(), Error> {
        if let Some(index) = selected {
            if index >= options.len() {
                return Err(Error::Host(format!("no option at index {}", index)));
            }
        }

        *self.0.options.borrow_mut() = options;
        self.0.selected.set(selected);
        Ok(())
    }

    pub(crate) fn add_listener(&self, listener: Listener) -> ServerSubscription {
        let id = self.0.next_listener_id.get();
        self.0.next_listener_id.set(id + 1);
        self.0.listeners.borrow_mut().push((id, listener));

        ServerSubscription {
            select: Rc::downgrade(&self.0),
            id,
        }
    }

    fn reset_selectedness(&self) {
        if self.0.selected.get().is_none() && !self.0.options.borrow().is_empty() {
            self.0.selected.set(Some(0));
        }
    }
}

impl fmt::Debug for ServerSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerSelect")
            .field("options", &self.0.options.borrow())
            .field("selected", &self.0.selected.get())
            .finish()
    }
}

impl fmt::Display for ServerSelect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = self.0.options.borrow();
        if options.is_empty() {
            return write!(f, "<select/>");
        }

        write!(f, "<select>")?;
        for (index, option) in options.iter().enumerate() {
            write!(f, "<option value=\"{}\"", escape(&option.value))?;
            if Some(index) == self.selected_index() {
                write!(f, " selected")?;
            }
            write!(f, ">{}</option>", escape(&option.label))?;
        }
        write!(f, "</select>")
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}

///
/// Detaches its change listener when dropped.
///
pub struct ServerSubscription {
    select: Weak<SelectInner>,
    id: u64,
}

impl Drop for ServerSubscription {
    fn drop(&mut self) {
        if let Some(select) = self.select.upgrade() {
            select
                .listeners
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

///
/// Anything that can be found in the document.
///
#[derive(Clone, Debug)]
pub enum ServerNode {
    Select(ServerSelect),
    Option(ServerOption),
    Element(&'static str),
}

impl ServerNode {
    pub fn tag_name(&self) -> String {
        match self {
            Self::Select(_) => "SELECT".to_string(),
            Self::Option(_) => "OPTION".to_string(),
            Self::Element(tag_name) => tag_name.to_uppercase(),
        }
    }
}

impl From<ServerSelect> for ServerNode {
    fn from(select: ServerSelect) -> Self {
        Self::Select(select)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_option_is_selected_by_default() {
        let select = ServerSelect::with_labels(&["", "A"]);

        assert_eq!(select.selected_index(), Some(0));
        assert_eq!(select.selected_values(), vec![""]);
    }

    #[test]
    fn unknown_value_clears_selection() {
        let select = ServerSelect::with_labels(&["", "A"]);
        select.set_value("nope");

        assert_eq!(select.selected_index(), None);
        assert_eq!(select.to_string(), "<select><option value=\"\"></option><option value=\"A\">A</option></select>");
    }

    #[test]
    fn removing_the_selected_option_falls_back_to_the_first() {
        let select = ServerSelect::with_labels(&["", "A", "B"]);
        select.set_value("B");

        select.remove(2).unwrap();

        assert_eq!(select.values(), vec!["", "A"]);
        assert_eq!(select.selected_values(), vec![""]);
    }

    #[test]
    fn removing_before_the_selection_keeps_it() {
        let select = ServerSelect::with_labels(&["", "A", "B"]);
        select.set_value("B");

        select.remove(1).unwrap();

        assert_eq!(select.selected_values(), vec!["B"]);
        assert!(select.remove(5).is_err());
    }

    #[test]
    fn render_marks_the_selection() {
        let select = ServerSelect::new(vec![ServerOption::new("1", "One"), ServerOption::new("2", "Two")]);
        select.set_value("2");

        assert_eq!(
            select.to_string(),
            "<select><option value=\"1\">One</option><option value=\"2\" selected>Two</option></select>"
        );
        assert_eq!(ServerSelect::new(vec![]).to_string(), "<select/>");
    }

    #[test]
    fn render_escapes_markup() {
        let select = ServerSelect::new(vec![ServerOption::new("a\"b", "<Fish & Chips>")]);

        assert_eq!(
            select.to_string(),
            "<select><option value=\"a&quot;b\" selected>&lt;Fish &amp; Chips&gt;</option></select>"
        );
    }

    #[test]
    fn subscriptions_detach_on_drop() {
        let select = ServerSelect::with_labels(&["", "A"]);
        let calls = Rc::new(Cell::new(0));

        let subscription = {
            let calls = calls.clone();
            select.add_listener(Rc::new(move || -> Result<(), Error> {
                calls.set(calls.get() + 1);
                Ok(())
            }))
        };

        select.change_value("A").unwrap();
        assert_eq!(calls.get(), 1);

        drop(subscription);
        assert_eq!(select.listener_count(), 0);

        select.change_value("").unwrap();
        assert_eq!(calls.get(), 1);
    }
}
