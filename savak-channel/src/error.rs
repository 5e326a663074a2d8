use crate::channel::Channel;
use std::error::Error;
use std::fmt;

/// Error returned by [`Channel::send`]: the channel is closed.
///
/// Carries the value that could not be sent.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SendError<T>(pub T);

impl<T> SendError<T> {
    /// Returns the value that could not be sent.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for SendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SendError(..)")
    }
}

impl<T> fmt::Display for SendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("sending on a closed channel")
    }
}

impl<T> Error for SendError<T> {}

/// Error returned by [`Channel::try_send`].
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TrySendError<T> {
    /// The channel is full; the value is returned.
    Full(T),
    /// The channel is closed; the value is returned.
    Closed(T),
}

impl<T> TrySendError<T> {
    /// Returns the value that could not be sent.
    pub fn into_inner(self) -> T {
        match self {
            TrySendError::Full(value) | TrySendError::Closed(value) => value,
        }
    }

    /// Returns `true` if the send failed because the channel was full.
    pub fn is_full(&self) -> bool {
        matches!(self, TrySendError::Full(_))
    }

    /// Returns `true` if the send failed because the channel was closed.
    pub fn is_closed(&self) -> bool {
        matches!(self, TrySendError::Closed(_))
    }
}

impl<T> fmt::Debug for TrySendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrySendError::Full(_) => f.write_str("Full(..)"),
            TrySendError::Closed(_) => f.write_str("Closed(..)"),
        }
    }
}

impl<T> fmt::Display for TrySendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrySendError::Full(_) => f.write_str("sending on a full channel"),
            TrySendError::Closed(_) => f.write_str("sending on a closed channel"),
        }
    }
}

impl<T> Error for TrySendError<T> {}

/// Error returned by [`Channel::recv`]: the channel is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecvError;

impl fmt::Display for RecvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("receiving on a closed channel")
    }
}

impl Error for RecvError {}

/// Error returned by [`Channel::try_recv`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryRecvError {
    /// The channel holds no value.
    Empty,
    /// The channel is closed.
    Closed,
}

impl TryRecvError {
    /// Returns `true` if the receive failed because the channel was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, TryRecvError::Empty)
    }

    /// Returns `true` if the receive failed because the channel was closed.
    pub fn is_closed(&self) -> bool {
        matches!(self, TryRecvError::Closed)
    }
}

impl fmt::Display for TryRecvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TryRecvError::Empty => f.write_str("receiving on an empty channel"),
            TryRecvError::Closed => f.write_str("receiving on a closed channel"),
        }
    }
}

impl Error for TryRecvError {}

/// Error returned by [`Channel::close`]: the channel was already closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseError;

impl fmt::Display for CloseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("closing a channel that is already closed")
    }
}

impl Error for CloseError {}

/// Error returned by [`Channel::destroy`].
///
/// The consumed handle is returned inside the error, so a failed destroy
/// leaves the channel usable.
pub enum DestroyError<T> {
    /// The channel has not been closed.
    Open(Channel<T>),
    /// Other handles to the channel still exist.
    InUse(Channel<T>),
}

impl<T> DestroyError<T> {
    /// Returns the handle that could not be destroyed.
    pub fn into_channel(self) -> Channel<T> {
        match self {
            DestroyError::Open(channel) | DestroyError::InUse(channel) => channel,
        }
    }
}

impl<T> fmt::Debug for DestroyError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DestroyError::Open(_) => f.write_str("Open(..)"),
            DestroyError::InUse(_) => f.write_str("InUse(..)"),
        }
    }
}

impl<T> fmt::Display for DestroyError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DestroyError::Open(_) => f.write_str("destroying a channel that is still open"),
            DestroyError::InUse(_) => f.write_str("destroying a channel with live handles"),
        }
    }
}

impl<T> Error for DestroyError<T> {}

/// Error returned by [`Select::wait`](crate::Select::wait).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    /// The select request contained no entries.
    NoEntries,
    /// A registered channel is closed; `index` identifies the entry.
    Closed {
        /// Index of the entry whose channel is closed.
        index: usize,
    },
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::NoEntries => f.write_str("selecting over no entries"),
            SelectError::Closed { index } => {
                write!(f, "selecting on a closed channel (entry {index})")
            }
        }
    }
}

impl Error for SelectError {}

/// Error returned by [`Select::try_wait`](crate::Select::try_wait).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrySelectError {
    /// Every entry would block.
    WouldBlock,
    /// The select request contained no entries.
    NoEntries,
    /// A registered channel is closed; `index` identifies the entry.
    Closed {
        /// Index of the entry whose channel is closed.
        index: usize,
    },
}

impl fmt::Display for TrySelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrySelectError::WouldBlock => f.write_str("every select entry would block"),
            TrySelectError::NoEntries => f.write_str("selecting over no entries"),
            TrySelectError::Closed { index } => {
                write!(f, "selecting on a closed channel (entry {index})")
            }
        }
    }
}

impl Error for TrySelectError {}
