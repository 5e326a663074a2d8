use crate::channel::Channel;
use std::thread;
use std::time::{Duration, Instant};

/// Creates a channel that delivers a single timestamp after `duration`.
pub fn after(duration: Duration) -> Channel<Instant> {
    let chan = Channel::with_capacity(1);
    let sender = chan.clone();
    thread::spawn(move || {
        thread::sleep(duration);
        // The channel may have been closed in the meantime.
        let _ = sender.send(Instant::now());
    });
    chan
}

/// Creates a channel that delivers timestamps every `duration`.
///
/// The ticker thread exits once the channel is closed.
pub fn tick(duration: Duration) -> Channel<Instant> {
    let chan = Channel::with_capacity(1);
    let sender = chan.clone();
    thread::spawn(move || loop {
        thread::sleep(duration);
        if sender.send(Instant::now()).is_err() {
            break;
        }
    });
    chan
}

/// Creates a channel that never delivers a value.
///
/// Built on capacity 0: receives block until the channel is closed.
pub fn never<T>() -> Channel<T> {
    Channel::with_capacity(0)
}
