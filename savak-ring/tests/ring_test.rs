use savak_ring::Ring;

#[test]
fn test_push_pop_fifo() {
    let mut ring = Ring::with_capacity(4);

    for i in 1..=4 {
        assert_eq!(ring.push(i), Ok(()));
    }
    assert!(ring.is_full());

    for i in 1..=4 {
        assert_eq!(ring.pop(), Some(i));
    }
    assert!(ring.is_empty());
    assert_eq!(ring.pop(), None);
}

#[test]
fn test_rejects_when_full() {
    let mut ring = Ring::with_capacity(2);
    ring.push(1).unwrap();
    ring.push(2).unwrap();

    assert_eq!(ring.push(9), Err(9));
    assert_eq!(ring.len(), 2);
    assert_eq!(ring.pop(), Some(1));
}

#[test]
fn test_wraps_around() {
    let mut ring = Ring::with_capacity(2);

    // Several laps so head crosses the storage boundary repeatedly.
    for lap in 0..10 {
        ring.push(lap * 2).unwrap();
        ring.push(lap * 2 + 1).unwrap();
        assert_eq!(ring.pop(), Some(lap * 2));
        assert_eq!(ring.pop(), Some(lap * 2 + 1));
    }
    assert!(ring.is_empty());
}

#[test]
fn test_len_tracks_operations() {
    let mut ring = Ring::with_capacity(3);
    assert_eq!(ring.len(), 0);

    ring.push("a").unwrap();
    ring.push("b").unwrap();
    assert_eq!(ring.len(), 2);

    ring.pop().unwrap();
    assert_eq!(ring.len(), 1);

    ring.push("c").unwrap();
    ring.push("d").unwrap();
    assert_eq!(ring.len(), 3);
    assert!(ring.is_full());
}

#[test]
fn test_zero_capacity() {
    let mut ring = Ring::<i32>::with_capacity(0);

    assert_eq!(ring.capacity(), 0);
    assert!(ring.is_empty());
    assert!(ring.is_full());
    assert_eq!(ring.push(1), Err(1));
    assert_eq!(ring.pop(), None);
}
