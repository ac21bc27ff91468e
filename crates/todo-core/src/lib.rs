//! Todo Core
//!
//! Screen-local todo list state machine.
//! - item: Item entity and its identifier
//! - ids: Monotonic id generation
//! - surface: Add/edit surface state
//! - state: TodoListState and its transitions
//! - event: Rendering-layer events mapped onto transitions
//!
//! No UI or I/O dependencies; every operation is a synchronous mutation.

mod error;
mod event;
mod ids;
mod item;
mod state;
mod surface;

pub use error::{TodoError, TodoResult};
pub use event::TodoEvent;
pub use ids::IdGenerator;
pub use item::{Item, ItemId};
pub use state::TodoListState;
pub use surface::Surface;
