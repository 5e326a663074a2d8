use savak_channel::{after, never, tick, Select, TryRecvError};
use std::time::{Duration, Instant};

#[test]
#[cfg_attr(miri, ignore)]
fn test_after() {
    let start = Instant::now();
    let ch = after(Duration::from_millis(100));

    let stamp = ch.recv().unwrap();
    let elapsed = start.elapsed();

    assert!(elapsed >= Duration::from_millis(100));
    assert!(stamp >= start + Duration::from_millis(100));
}

#[test]
#[cfg_attr(miri, ignore)]
fn test_tick() {
    let start = Instant::now();
    let ch = tick(Duration::from_millis(50));

    ch.recv().unwrap();
    assert!(start.elapsed() >= Duration::from_millis(50));

    ch.recv().unwrap();
    assert!(start.elapsed() >= Duration::from_millis(100));

    // Closing stops the ticker thread.
    ch.close().unwrap();
}

#[test]
fn test_never() {
    let ch = never::<i32>();
    assert_eq!(ch.try_recv(), Err(TryRecvError::Empty));
}

#[test]
#[cfg_attr(miri, ignore)]
fn test_select_never_vs_after() {
    let idle = never();
    let timer = after(Duration::from_millis(50));

    let mut sel = Select::new();
    sel.recv(&idle);
    sel.recv(&timer);

    let selected = sel.wait().unwrap();
    assert_eq!(selected.index, 1);
    assert!(selected.value.is_some());
}
