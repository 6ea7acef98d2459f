//! Markdown display for models, collections and operation results.
//!
//! Domain models implement `Display` directly (see [`models`]); newtype
//! wrappers cover collections and the outcome of create, update and delete
//! operations. The CLI renders the markdown with `termimad`, the MCP server
//! returns it as text content.
//!
//! - [`collections`]: `Todos`, `ListSummaries`
//! - [`results`]: `CreateResult`, `UpdateResult`, `DeleteResult`
//! - [`countdown`]: `TodoCountdown`
//! - [`status`]: `OperationStatus`
//! - [`datetime`]: `LocalDateTime`, `RelativeOffset`

pub mod collections;
pub mod countdown;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{ListSummaries, Todos};
pub use countdown::TodoCountdown;
pub use datetime::{LocalDateTime, RelativeOffset};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
