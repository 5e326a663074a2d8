use crate::error::{CloseError, DestroyError, RecvError, SendError, TryRecvError, TrySendError};
use crate::signal::Signal;
use crate::waiters::WaiterSet;
use savak_ring::Ring;
use std::sync::{Arc, Condvar, Mutex};

/// State guarded by the core mutex.
struct State<T> {
    ring: Ring<T>,
    closed: bool,
}

struct Core<T> {
    state: Mutex<State<T>>,

    /// Waited on by blocked senders; signaled when a slot frees up.
    not_full: Condvar,

    /// Waited on by blocked receivers; signaled when a value arrives.
    not_empty: Condvar,

    /// Select tokens waiting for room to send.
    send_waiters: Mutex<WaiterSet>,

    /// Select tokens waiting for a value to receive.
    recv_waiters: Mutex<WaiterSet>,
}

/// A bounded multi-producer multi-consumer channel.
///
/// `Channel` is a cloneable handle; every clone refers to the same channel
/// and may send, receive, or close it. Values move through a fixed-capacity
/// FIFO in the order they were deposited, across all senders.
///
/// Closing is terminal: a closed channel rejects both sends and receives
/// immediately, discarding any buffered values, and wakes every blocked
/// sender, receiver, and select call.
///
/// The registry mutexes are leaves in the lock order: the core mutex is
/// always released before a registry mutex is taken, and posting a token
/// takes no lock at all, so signaling never lands inside a held lock.
pub struct Channel<T> {
    core: Arc<Core<T>>,
}

impl<T> Clone for Channel<T> {
    fn clone(&self) -> Self {
        Channel {
            core: self.core.clone(),
        }
    }
}

impl<T> Channel<T> {
    /// Creates a channel with the given capacity.
    ///
    /// Capacity 0 is accepted but has no rendezvous path: every send on such
    /// a channel blocks (or reports full) until the channel is closed.
    pub fn with_capacity(capacity: usize) -> Channel<T> {
        Channel {
            core: Arc::new(Core {
                state: Mutex::new(State {
                    ring: Ring::with_capacity(capacity),
                    closed: false,
                }),
                not_full: Condvar::new(),
                not_empty: Condvar::new(),
                send_waiters: Mutex::new(WaiterSet::new()),
                recv_waiters: Mutex::new(WaiterSet::new()),
            }),
        }
    }

    /// Sends a value, blocking while the channel is full.
    ///
    /// Returns the value back inside the error if the channel is closed, or
    /// closes while this call is blocked.
    pub fn send(&self, value: T) -> Result<(), SendError<T>> {
        let mut state = self.core.state.lock().unwrap();
        if state.closed {
            return Err(SendError(value));
        }

        let mut value = value;
        loop {
            match state.ring.push(value) {
                Ok(()) => break,
                Err(v) => {
                    value = v;
                    state = self.core.not_full.wait(state).unwrap();
                    if state.closed {
                        return Err(SendError(value));
                    }
                }
            }
        }

        self.core.not_empty.notify_one();
        drop(state);

        self.core.recv_waiters.lock().unwrap().notify_all();
        Ok(())
    }

    /// Attempts to send a value without blocking.
    ///
    /// The core mutex is acquired unconditionally; [`TrySendError::Full`]
    /// reports buffer state only, never momentary lock contention.
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        let mut state = self.core.state.lock().unwrap();
        if state.closed {
            return Err(TrySendError::Closed(value));
        }

        match state.ring.push(value) {
            Err(v) => Err(TrySendError::Full(v)),
            Ok(()) => {
                self.core.not_empty.notify_one();
                drop(state);

                self.core.recv_waiters.lock().unwrap().notify_all();
                Ok(())
            }
        }
    }

    /// Receives a value, blocking while the channel is empty.
    ///
    /// Errors if the channel is closed, or closes while this call is
    /// blocked; buffered values do not survive a close.
    pub fn recv(&self) -> Result<T, RecvError> {
        let mut state = self.core.state.lock().unwrap();
        if state.closed {
            return Err(RecvError);
        }

        let value = loop {
            match state.ring.pop() {
                Some(value) => break value,
                None => {
                    state = self.core.not_empty.wait(state).unwrap();
                    if state.closed {
                        return Err(RecvError);
                    }
                }
            }
        };

        self.core.not_full.notify_one();
        drop(state);

        self.core.send_waiters.lock().unwrap().notify_all();
        Ok(value)
    }

    /// Attempts to receive a value without blocking.
    ///
    /// The core mutex is acquired unconditionally; [`TryRecvError::Empty`]
    /// reports buffer state only, never momentary lock contention.
    pub fn try_recv(&self) -> Result<T, TryRecvError> {
        let mut state = self.core.state.lock().unwrap();
        if state.closed {
            return Err(TryRecvError::Closed);
        }

        match state.ring.pop() {
            None => Err(TryRecvError::Empty),
            Some(value) => {
                self.core.not_full.notify_one();
                drop(state);

                self.core.send_waiters.lock().unwrap().notify_all();
                Ok(value)
            }
        }
    }

    /// Closes the channel, waking every blocked sender, receiver, and
    /// select call.
    ///
    /// Buffered values are discarded: a closed channel rejects both sides.
    /// Errors if the channel was already closed.
    pub fn close(&self) -> Result<(), CloseError> {
        let mut state = self.core.state.lock().unwrap();
        if state.closed {
            return Err(CloseError);
        }
        state.closed = true;

        self.core.not_full.notify_all();
        self.core.not_empty.notify_all();
        drop(state);

        // Both waiter populations are disjoint from the condvar waiters,
        // so the broadcast above does not reach them.
        self.core.send_waiters.lock().unwrap().notify_all();
        self.core.recv_waiters.lock().unwrap().notify_all();
        Ok(())
    }

    /// Consumes this handle and frees the channel.
    ///
    /// Fails with the handle returned inside the error if the channel has
    /// not been closed, or if other handles still exist. Dropping every
    /// handle frees the channel without this check.
    pub fn destroy(self) -> Result<(), DestroyError<T>> {
        let closed = self.core.state.lock().unwrap().closed;
        if !closed {
            return Err(DestroyError::Open(self));
        }

        let Channel { core } = self;
        match Arc::try_unwrap(core) {
            Ok(_core) => Ok(()),
            Err(core) => Err(DestroyError::InUse(Channel { core })),
        }
    }

    /// Returns the channel's capacity.
    pub fn capacity(&self) -> usize {
        self.core.state.lock().unwrap().ring.capacity()
    }

    /// Returns the number of buffered values.
    pub fn len(&self) -> usize {
        self.core.state.lock().unwrap().ring.len()
    }

    /// Returns `true` if the channel holds no values.
    pub fn is_empty(&self) -> bool {
        self.core.state.lock().unwrap().ring.is_empty()
    }

    /// Returns `true` if the channel has no free slot.
    pub fn is_full(&self) -> bool {
        self.core.state.lock().unwrap().ring.is_full()
    }

    /// Returns `true` if the channel has been closed.
    pub fn is_closed(&self) -> bool {
        self.core.state.lock().unwrap().closed
    }

    pub(crate) fn register_send(&self, token: &Arc<Signal>) {
        self.core.send_waiters.lock().unwrap().insert(token);
    }

    pub(crate) fn unregister_send(&self, token: &Arc<Signal>) {
        self.core.send_waiters.lock().unwrap().remove(token);
    }

    pub(crate) fn register_recv(&self, token: &Arc<Signal>) {
        self.core.recv_waiters.lock().unwrap().insert(token);
    }

    pub(crate) fn unregister_recv(&self, token: &Arc<Signal>) {
        self.core.recv_waiters.lock().unwrap().remove(token);
    }
}
