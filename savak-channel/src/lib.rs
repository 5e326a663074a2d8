//! Bounded, closable multi-producer multi-consumer channels with multi-way
//! select.
//!
//! This crate provides a single channel flavor: a fixed-capacity FIFO shared
//! through cloneable [`Channel`] handles, with blocking and non-blocking
//! send/receive, an explicit close that wakes every waiter, and a [`Select`]
//! operator that blocks on a set of pending send and receive operations and
//! completes exactly one.
//!
//! # Key Features
//!
//! - **Multi-producer multi-consumer**: any number of threads may send and
//!   receive through clones of one handle.
//! - **Bounded**: sends block (or report full) once the buffer holds
//!   `capacity` values; values leave in FIFO order across all senders.
//! - **Closable**: [`Channel::close`] is terminal and broadcast; blocked
//!   senders, receivers, and select calls all complete with a closed error.
//! - **Select**: [`Select`] over mixed send/receive entries, plus a
//!   [`select!`] macro for receive-only waits over channels of different
//!   element types.
//! - **Utility channels**: [`after`], [`tick`], and [`never`] for timing and
//!   control flow.
//!
//! # Example
//!
//! ```rust
//! use savak_channel::channel;
//! use std::thread;
//!
//! let ch = channel::<i32>(2);
//!
//! let producer = ch.clone();
//! thread::spawn(move || {
//!     producer.send(1).unwrap();
//!     producer.send(2).unwrap();
//! });
//!
//! assert_eq!(ch.recv(), Ok(1));
//! assert_eq!(ch.recv(), Ok(2));
//!
//! ch.close().unwrap();
//! assert!(ch.recv().is_err());
//! ```

#![warn(missing_docs)]

/// Channel core: handles, send/receive, close, destroy.
pub mod channel;
/// Error types returned by channel and select operations.
pub mod error;
/// Select operator and the `select!` macro plumbing.
pub mod select;
/// Wakeup token posted to blocked select calls.
pub mod signal;
/// Utility channels (`after`, `tick`, `never`).
pub mod special;

mod waiters;

pub use channel::Channel;
pub use error::{
    CloseError, DestroyError, RecvError, SelectError, SendError, TryRecvError, TrySelectError,
    TrySendError,
};
pub use select::{Select, Selected, Waitable};
pub use signal::Signal;
pub use special::{after, never, tick};

/// Creates a channel with the given capacity.
///
/// Equivalent to [`Channel::with_capacity`].
pub fn channel<T>(capacity: usize) -> Channel<T> {
    Channel::with_capacity(capacity)
}
