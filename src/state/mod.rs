//! State management modules for the table demo.
//!
//! Width and column state is owned by the `rtable::Table` itself; the demo
//! only adds the pointer interaction state the table does not track.

mod interaction;

pub use interaction::InteractionState;
