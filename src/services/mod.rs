//! Application service layer.
//!
//! The edit session is the single owner of contact state. The presentation
//! layer sends it intents and re-renders from its observable state and change
//! stream.

mod edit_session;
mod events;
mod options;

pub use edit_session::EditSession;
pub use events::{Mode, SessionEvent};
pub use options::{ApplyPolicy, SessionOptions};
