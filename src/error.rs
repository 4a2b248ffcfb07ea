use crate::choice::OptionKey;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("No selection widgets found")]
    NoWidgets,

    #[error("Only selection widgets are accepted, found {0}")]
    NotASelect(String),

    /// A widget holds a key the registry never saw. This is a bug.
    #[error("Cannot find previously selected option {0}")]
    HeldNotRegistered(OptionKey),

    #[error("Change reported for a select that is not part of the group")]
    UnknownWidget,

    #[error("Change notification delivered while the group was being reconciled")]
    Reentrant,

    #[error("Host error: {0}")]
    Host(String),
}
