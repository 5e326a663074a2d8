use crate::channel::Channel;
use crate::error::{SelectError, TryRecvError, TrySelectError, TrySendError};
use crate::signal::Signal;
use std::sync::Arc;

enum Entry<'a, T> {
    Send {
        chan: &'a Channel<T>,
        // Taken for each probe attempt, put back on a full channel.
        value: Option<T>,
    },
    Recv {
        chan: &'a Channel<T>,
    },
}

/// A multi-way select over pending send and receive operations.
///
/// Entries are added with [`send`](Select::send) and [`recv`](Select::recv),
/// then [`wait`](Select::wait) blocks until exactly one of them completes.
/// All entries must share one element type; for receive-only waits over
/// channels of different types, use the [`select!`](crate::select!) macro.
///
/// # Examples
///
/// ```
/// use savak_channel::{channel, Select};
///
/// let x = channel::<i32>(1);
/// let y = channel::<i32>(1);
/// x.send(7).unwrap();
///
/// let mut sel = Select::new();
/// sel.recv(&x);
/// sel.recv(&y);
///
/// let selected = sel.wait().unwrap();
/// assert_eq!(selected.index, 0);
/// assert_eq!(selected.value, Some(7));
/// ```
pub struct Select<'a, T> {
    entries: Vec<Entry<'a, T>>,
}

/// Outcome of a completed select call.
#[derive(Debug)]
pub struct Selected<T> {
    /// Index of the entry that completed.
    pub index: usize,

    /// The received value, when the completed entry was a receive.
    pub value: Option<T>,
}

impl<'a, T> Default for Select<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> Select<'a, T> {
    /// Creates a select request with no entries.
    pub fn new() -> Select<'a, T> {
        Select {
            entries: Vec::new(),
        }
    }

    /// Adds a send entry and returns its index.
    ///
    /// The value is transmitted only if this entry is selected; otherwise it
    /// is dropped with the `Select`.
    pub fn send(&mut self, chan: &'a Channel<T>, value: T) -> usize {
        self.entries.push(Entry::Send {
            chan,
            value: Some(value),
        });
        self.entries.len() - 1
    }

    /// Adds a receive entry and returns its index.
    pub fn recv(&mut self, chan: &'a Channel<T>) -> usize {
        self.entries.push(Entry::Recv { chan });
        self.entries.len() - 1
    }

    /// Blocks until exactly one entry completes.
    ///
    /// Entries are probed in insertion order and the first feasible one
    /// wins; this is predictable under load, not a fairness guarantee. A
    /// close on any registered channel completes the call with
    /// [`SelectError::Closed`] naming that entry.
    ///
    /// The same channel and direction may appear in several entries; each
    /// probes independently, while the call's wakeup token is registered
    /// with that channel only once.
    pub fn wait(mut self) -> Result<Selected<T>, SelectError> {
        if self.entries.is_empty() {
            return Err(SelectError::NoEntries);
        }

        // Registration must precede the first probe: a readiness transition
        // between an unregistered probe and the wait would be missed.
        let token = Arc::new(Signal::new());
        self.register(&token);

        let outcome = loop {
            match self.probe() {
                Some(Ok(selected)) => break Ok(selected),
                Some(Err(index)) => break Err(SelectError::Closed { index }),
                None => token.wait(),
            }
        };

        self.unregister(&token);
        outcome
    }

    /// Probes every entry once without blocking.
    ///
    /// Completes the first feasible entry, or reports
    /// [`TrySelectError::WouldBlock`] when every entry would block.
    pub fn try_wait(mut self) -> Result<Selected<T>, TrySelectError> {
        if self.entries.is_empty() {
            return Err(TrySelectError::NoEntries);
        }

        match self.probe() {
            Some(Ok(selected)) => Ok(selected),
            Some(Err(index)) => Err(TrySelectError::Closed { index }),
            None => Err(TrySelectError::WouldBlock),
        }
    }

    // One non-blocking pass over the entries in input order. `Some(Ok)` is a
    // completed entry, `Some(Err)` the index of a closed one, `None` means
    // everything would block.
    fn probe(&mut self) -> Option<Result<Selected<T>, usize>> {
        for (index, entry) in self.entries.iter_mut().enumerate() {
            match entry {
                Entry::Send { chan, value } => {
                    if let Some(v) = value.take() {
                        match chan.try_send(v) {
                            Ok(()) => return Some(Ok(Selected { index, value: None })),
                            Err(TrySendError::Full(v)) => *value = Some(v),
                            Err(TrySendError::Closed(_)) => return Some(Err(index)),
                        }
                    }
                }
                Entry::Recv { chan } => match chan.try_recv() {
                    Ok(v) => {
                        return Some(Ok(Selected {
                            index,
                            value: Some(v),
                        }))
                    }
                    Err(TryRecvError::Empty) => {}
                    Err(TryRecvError::Closed) => return Some(Err(index)),
                },
            }
        }
        None
    }

    fn register(&self, token: &Arc<Signal>) {
        for entry in &self.entries {
            match entry {
                Entry::Send { chan, .. } => chan.register_send(token),
                Entry::Recv { chan } => chan.register_recv(token),
            }
        }
    }

    fn unregister(&self, token: &Arc<Signal>) {
        for entry in &self.entries {
            match entry {
                Entry::Send { chan, .. } => chan.unregister_send(token),
                Entry::Recv { chan } => chan.unregister_recv(token),
            }
        }
    }
}

/// Channels a receive-side [`select!`](crate::select!) can register a wakeup
/// token on.
///
/// Implemented by [`Channel`] for every element type; the macro uses it to
/// wire one token across channels of heterogeneous types.
pub trait Waitable {
    /// Registers a token on the receive side.
    fn register_signal(&self, signal: &Arc<Signal>);

    /// Removes a previously registered token.
    fn unregister_signal(&self, signal: &Arc<Signal>);
}

impl<T> Waitable for Channel<T> {
    fn register_signal(&self, signal: &Arc<Signal>) {
        self.register_recv(signal);
    }

    fn unregister_signal(&self, signal: &Arc<Signal>) {
        self.unregister_recv(signal);
    }
}

impl<W: Waitable + ?Sized> Waitable for &W {
    fn register_signal(&self, signal: &Arc<Signal>) {
        (**self).register_signal(signal);
    }

    fn unregister_signal(&self, signal: &Arc<Signal>) {
        (**self).unregister_signal(signal);
    }
}

/// Waits on multiple receive operations.
///
/// Each branch binds a `Result<T, RecvError>`: `Ok` with the received value,
/// or `Err` when that channel is closed. Branches are tried in order; with a
/// `default` arm the macro never blocks. Unlike [`Select`](crate::Select),
/// the channels may have different element types.
///
/// # Examples
///
/// ```
/// use savak_channel::{channel, select};
///
/// let a = channel::<i32>(1);
/// let b = channel::<&str>(1);
///
/// a.send(10).unwrap();
///
/// select! {
///     v = a => assert_eq!(v, Ok(10)),
///     _v = b => panic!("a already holds a value"),
/// }
/// ```
///
/// With a default case:
///
/// ```
/// use savak_channel::{channel, select};
///
/// let a = channel::<i32>(1);
///
/// select! {
///     _v = a => panic!("nothing was sent");
///     default => (),
/// }
/// ```
#[macro_export]
macro_rules! select {
    // Branches plus a default case: probe once, never block.
    (
        $($name:pat = $rx:expr => $body:expr),+ ;
        default => $default:expr $(,)?
    ) => {
        loop {
            $(
                match $rx.try_recv() {
                    Err($crate::TryRecvError::Empty) => {}
                    __res => {
                        let $name = __res.map_err(|_| $crate::RecvError);
                        break $body;
                    }
                }
            )+
            break $default;
        }
    };
    // Blocking form: register one token everywhere, probe, wait, re-probe.
    (
        $($name:pat = $rx:expr => $body:expr),+ $(,)?
    ) => {{
        let __signal = ::std::sync::Arc::new($crate::Signal::new());
        let __targets: ::std::vec::Vec<&dyn $crate::Waitable> = ::std::vec![$(&$rx),+];
        for __target in &__targets {
            __target.register_signal(&__signal);
        }
        loop {
            $(
                match $rx.try_recv() {
                    Err($crate::TryRecvError::Empty) => {}
                    __res => {
                        for __target in &__targets {
                            __target.unregister_signal(&__signal);
                        }
                        let $name = __res.map_err(|_| $crate::RecvError);
                        break $body;
                    }
                }
            )+
            __signal.wait();
        }
    }};
}
