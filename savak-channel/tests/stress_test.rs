use rand::Rng;
use savak_channel::{channel, Select, SelectError, TryRecvError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[test]
#[cfg_attr(miri, ignore)]
fn test_mpmc_throughput() {
    let ch = channel(16);
    let producers: usize = 4;
    let items_per: usize = 500;
    let total = producers * items_per;

    let mut handles = vec![];
    for p in 0..producers {
        let ch = ch.clone();
        handles.push(thread::spawn(move || {
            for i in 0..items_per {
                ch.send(p * items_per + i).unwrap();
            }
        }));
    }

    let count = Arc::new(AtomicUsize::new(0));
    for _ in 0..2 {
        let ch = ch.clone();
        let count = count.clone();
        handles.push(thread::spawn(move || {
            while count.load(Ordering::Relaxed) < total {
                match ch.try_recv() {
                    Ok(_) => {
                        count.fetch_add(1, Ordering::Relaxed);
                    }
                    Err(TryRecvError::Empty) => thread::yield_now(),
                    Err(TryRecvError::Closed) => break,
                }
            }
        }));
    }

    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(count.load(Ordering::SeqCst), total);
    assert!(ch.is_empty());
    ch.close().unwrap();
}

#[test]
#[cfg_attr(miri, ignore)]
fn test_backpressure_fifo() {
    let ch = channel(4);

    let producer = ch.clone();
    let t = thread::spawn(move || {
        for i in 0..200 {
            producer.send(i).unwrap();
        }
    });

    let mut received = Vec::new();
    for _ in 0..200 {
        received.push(ch.recv().unwrap());
    }
    t.join().unwrap();

    for (i, val) in received.iter().enumerate() {
        assert_eq!(*val, i);
    }
}

#[test]
#[cfg_attr(miri, ignore)]
fn test_per_sender_order_under_jitter() {
    let ch = channel(2);
    let items_per = 100;

    let mut handles = vec![];
    for sender in 0..2u64 {
        let ch = ch.clone();
        handles.push(thread::spawn(move || {
            let mut rng = rand::thread_rng();
            for i in 0..items_per {
                ch.send(sender * 1_000 + i).unwrap();
                thread::sleep(Duration::from_micros(rng.gen_range(0..200)));
            }
        }));
    }

    let mut received = Vec::new();
    for _ in 0..2 * items_per {
        received.push(ch.recv().unwrap());
    }
    for h in handles {
        h.join().unwrap();
    }

    for sender in 0..2u64 {
        let stream: Vec<_> = received
            .iter()
            .copied()
            .filter(|v| v / 1_000 == sender)
            .collect();
        let expected: Vec<_> = (0..items_per).map(|i| sender * 1_000 + i).collect();
        assert_eq!(stream, expected);
    }
}

#[test]
#[cfg_attr(miri, ignore)]
fn test_select_under_concurrent_sends() {
    let x = channel(1);
    let y = channel(1);
    let total = 200;

    let mut handles = vec![];
    for (which, ch) in [(0, x.clone()), (1, y.clone())] {
        handles.push(thread::spawn(move || {
            let mut rng = rand::thread_rng();
            for i in 0..total / 2 {
                ch.send(which * 10_000 + i).unwrap();
                if rng.gen_bool(0.3) {
                    thread::yield_now();
                }
            }
        }));
    }

    let mut received = 0;
    while received < total {
        let mut sel = Select::new();
        sel.recv(&x);
        sel.recv(&y);
        let selected = sel.wait().unwrap();
        assert!(selected.value.is_some());
        received += 1;
    }

    for h in handles {
        h.join().unwrap();
    }

    x.close().unwrap();
    y.close().unwrap();

    let mut sel = Select::new();
    sel.recv(&x);
    sel.recv(&y);
    assert_eq!(sel.wait().unwrap_err(), SelectError::Closed { index: 0 });
}
