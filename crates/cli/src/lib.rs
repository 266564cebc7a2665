//! Terminal front end for the till: shell, one-shot commands and views.

pub mod command;
pub mod context;
pub mod errors;
pub mod handlers;
pub mod shell;
pub mod views;

pub use command::{Command, ParseError, parse_item_spec};
pub use context::{AppContext, Session};
pub use errors::AppError;
pub use handlers::{Outcome, handle};
pub use shell::run_shell;
