pub use crate::Dom;

pub use crate::bound::Bound;
pub use crate::choice::Choice;
pub use crate::config::Config;
pub use crate::group::SyncGroup;
