use super::*;
use crate::order::{MinFirst, Reversed};
use crate::polyfill::*;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};

fn check_heap<T, P: Prioritize<T>>(queue: &PriorityQueue<T, P>) {
    let data = &queue.data;
    for i in 1..data.len() {
        let parent = (i - 1) / 2;
        assert!(
            !queue.order.outranks(&data[i], &data[parent]),
            "child at {} outranks its parent at {}",
            i,
            parent
        );
    }
}

fn drain_by_pop<T, P: Prioritize<T>>(mut queue: PriorityQueue<T, P>) -> Vec<T> {
    let mut v = Vec::with_capacity(queue.len());
    while let Some(x) = queue.pop() {
        v.push(x);
    }
    v
}

fn by_key(a: &(u32, char), b: &(u32, char)) -> bool {
    a.0 < b.0
}

#[test]
fn test_iterator() {
    let data = vec![5, 9, 3];
    let iterout = [9, 5, 3];
    let queue = PriorityQueue::from_vec(data, MaxFirst::new());
    let mut i = 0;
    for el in &queue {
        assert_eq!(*el, iterout[i]);
        i += 1;
    }
}

#[test]
fn test_iter_is_heap_order_not_priority_order() {
    let queue = PriorityQueue::from_vec(vec![1, 2, 3, 4, 5, 6, 7], MaxFirst::new());
    let raw: Vec<_> = queue.iter().copied().collect();
    assert_eq!(raw, queue.clone().into_vec());
    assert_eq!(raw, [7, 5, 6, 4, 2, 1, 3]);
    assert_ne!(raw, queue.to_sorted_vec());
    assert_eq!(queue.to_sorted_vec(), [7, 6, 5, 4, 3, 2, 1]);
}

#[test]
fn test_iter_rev_and_exact_size() {
    let queue = PriorityQueue::from_vec(vec![5, 9, 3], MaxFirst::new());
    let mut it = queue.iter();
    assert_eq!(it.len(), 3);
    assert!(!it.is_empty());
    assert_eq!(it.next_back(), Some(&3));
    assert_eq!(it.len(), 2);
    assert_eq!(it.by_ref().count(), 2);
    assert!(it.is_empty());
}

#[test]
fn test_into_iter_collect() {
    let data = vec![5, 9, 3];
    let iterout = vec![9, 5, 3];
    let queue = PriorityQueue::from_vec(data, MaxFirst::new());

    let v: Vec<_> = queue.into_iter().collect();
    assert_eq!(v, iterout);
}

#[test]
fn test_into_iter_sorted_collect() {
    let queue = PriorityQueue::from_vec(vec![2, 4, 6, 2, 1, 8, 10, 3, 5, 7, 0, 9, 1], MaxFirst::new());
    let it = queue.into_iter_sorted();
    assert_eq!(it.len(), 13);
    let sorted: Vec<_> = it.collect();
    assert_eq!(sorted, vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 2, 1, 1, 0]);
}

#[test]
fn test_peek_and_pop() {
    let data = vec![2, 4, 6, 2, 1, 8, 10, 3, 5, 7, 0, 9, 1];
    let mut sorted = data.clone();
    sorted.sort();
    let mut queue = PriorityQueue::from_vec(data, MaxFirst::new());
    while !queue.is_empty() {
        assert_eq!(queue.peek().unwrap(), sorted.last().unwrap());
        assert_eq!(queue.pop().unwrap(), sorted.pop().unwrap());
        check_heap(&queue);
    }
}

#[test]
fn test_greater_first_pops_largest() {
    let mut queue = PriorityQueue::new(|a: &i32, b: &i32| a > b);
    queue.extend([1, 2, 100, 3]);
    assert_eq!(queue.pop(), Some(100));
}

#[test]
fn test_from_vec_lesser_first_pops_smallest() {
    let mut queue = PriorityQueue::from_vec((1..=100).collect(), |a: &i32, b: &i32| a < b);
    assert_eq!(queue.len(), 100);
    assert_eq!(queue.pop(), Some(1));
    assert_eq!(queue.peek(), Some(&2));
}

#[test]
fn test_shorter_string_first() {
    let words = vec!["Hi".to_string(), "Hello".to_string(), "Goodbye".to_string()];
    let mut queue = PriorityQueue::from_vec(words, |a: &String, b: &String| a.len() < b.len());
    assert_eq!(queue.pop().as_deref(), Some("Hi"));
    assert_eq!(queue.pop().as_deref(), Some("Hello"));
    assert_eq!(queue.pop().as_deref(), Some("Goodbye"));
    assert_eq!(queue.pop(), None);
}

#[test]
fn test_empty_and_single() {
    let mut queue = PriorityQueue::new(MinFirst::new());
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
    assert_eq!(queue.peek(), None);
    assert_eq!(queue.pop(), None);

    queue.push(1);
    assert!(!queue.is_empty());
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.peek(), Some(&1));
    assert_eq!(queue.pop(), Some(1));
    assert!(queue.is_empty());
}

#[test]
fn test_duplicates_come_out_together() {
    let mut queue = PriorityQueue::new(MinFirst::new());
    for (i, x) in [7, 3, 7, 12, 1, 7, 9, 7, 5].into_iter().enumerate() {
        queue.push(x);
        assert_eq!(queue.len(), i + 1);
        check_heap(&queue);
    }

    let mut out = Vec::new();
    let mut len = queue.len();
    while let Some(x) = queue.pop() {
        len -= 1;
        assert_eq!(queue.len(), len);
        out.push(x);
    }
    assert_eq!(out, [1, 3, 5, 7, 7, 7, 7, 9, 12]);
}

#[test]
fn test_equal_children_resolve_to_the_right() {
    // Already a heap under `by_key`; the two children of the root share a key.
    let data = vec![(0, 'r'), (1, 'a'), (1, 'b'), (5, 'z')];
    let mut queue = PriorityQueue::from_vec(data, by_key);
    assert_eq!(queue.clone().into_vec(), [(0, 'r'), (1, 'a'), (1, 'b'), (5, 'z')]);

    assert_eq!(queue.pop(), Some((0, 'r')));
    assert_eq!(queue.peek(), Some(&(1, 'b')));
    assert_eq!(queue.clone().into_vec(), [(1, 'b'), (1, 'a'), (5, 'z')]);
    assert_eq!(drain_by_pop(queue), [(1, 'b'), (1, 'a'), (5, 'z')]);
}

#[test]
fn test_push() {
    let mut queue = PriorityQueue::from_vec(vec![2, 4, 9], MaxFirst::new());
    assert_eq!(queue.len(), 3);
    assert!(*queue.peek().unwrap() == 9);
    queue.push(11);
    assert_eq!(queue.len(), 4);
    assert!(*queue.peek().unwrap() == 11);
    queue.push(5);
    assert_eq!(queue.len(), 5);
    assert!(*queue.peek().unwrap() == 11);
    queue.push(27);
    assert_eq!(queue.len(), 6);
    assert!(*queue.peek().unwrap() == 27);
    queue.push(3);
    assert_eq!(queue.len(), 7);
    assert!(*queue.peek().unwrap() == 27);
    queue.push(103);
    assert_eq!(queue.len(), 8);
    assert!(*queue.peek().unwrap() == 103);
    check_heap(&queue);
}

#[test]
fn test_push_random_and_pop_all() {
    let size = 10_000;
    let mut rng = crate::test_helpers::test_rng();
    let mut queue = PriorityQueue::new(|a: &u32, b: &u32| a < b);
    for i in 0..size {
        queue.push(rng.gen::<u32>());
        assert_eq!(queue.len(), i + 1);
    }
    check_heap(&queue);

    let out = drain_by_pop(queue);
    assert_eq!(out.len(), size);
    assert!(out.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_from_vec_random() {
    let size = 10_000;
    let mut rng = crate::test_helpers::test_rng();
    let data: Vec<u32> = (0..size).map(|_| rng.gen()).collect();
    let mut expected = data.clone();
    expected.sort();

    let queue = PriorityQueue::from_vec(data, |a: &u32, b: &u32| a < b);
    assert_eq!(queue.len(), size);
    check_heap(&queue);
    assert_eq!(drain_by_pop(queue), expected);
}

#[test]
fn test_from_vec_small() {
    fn check(data: Vec<i32>) {
        let mut expected = data.clone();
        expected.sort_by(|a, b| b.cmp(a));
        let queue = PriorityQueue::from_vec(data, MaxFirst::new());
        check_heap(&queue);
        assert_eq!(queue.into_sorted_vec(), expected);
    }
    check(vec![]);
    check(vec![1]);
    check(vec![1, 2]);
    check(vec![2, 1]);
    check(vec![3, 1, 2]);
    check(vec![1, 1, 1, 1]);
    check(vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
    check(vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_mixed_operations_keep_invariant() {
    let mut rng = crate::test_helpers::test_rng();
    let mut queue = PriorityQueue::new(Reversed(MinFirst::new()));
    let mut model: Vec<i32> = Vec::new();
    for _ in 0..2_000 {
        if rng.gen_range(0..3) == 0 {
            let popped = queue.pop();
            model.sort();
            assert_eq!(popped, model.pop());
        } else {
            let x = rng.gen_range(-50..50);
            queue.push(x);
            model.push(x);
        }
        assert_eq!(queue.len(), model.len());
        check_heap(&queue);
    }
}

#[test]
fn test_extend() {
    let size = 10_000;
    let mut queue = PriorityQueue::new(|a: &usize, b: &usize| a < b);
    queue.extend(0..size / 2);
    let arr: Vec<usize> = (size / 2..size).collect();
    queue.extend(arr);
    assert_eq!(queue.len(), size);
    for i in 0..size {
        assert_eq!(queue.pop(), Some(i));
    }
    assert!(queue.is_empty());
}

#[test]
fn test_extend_ref() {
    let mut a = PriorityQueue::new(MaxFirst::new());
    a.push(1);
    a.push(2);

    a.extend(&[3, 4, 5]);

    assert_eq!(a.len(), 5);
    assert_eq!(a.into_sorted_vec(), [5, 4, 3, 2, 1]);
}

#[test]
fn test_extend_shuffled() {
    let mut rng = crate::test_helpers::test_rng();
    let mut data: Vec<u32> = (0..500).collect();
    data.shuffle(&mut rng);

    let mut queue = PriorityQueue::new(MinFirst::new());
    queue.extend(data.iter().copied());
    check_heap(&queue);
    assert_eq!(drain_by_pop(queue), (0..500).collect::<Vec<_>>());
}

#[test]
fn test_append() {
    let mut a = PriorityQueue::from_vec(vec![-10, 1, 2, 3, 3], MaxFirst::new());
    let mut b = PriorityQueue::from_vec(vec![-20, 5, 43], MaxFirst::new());

    a.append(&mut b);

    assert_eq!(a.into_sorted_vec(), [43, 5, 3, 3, 2, 1, -10, -20]);
    assert!(b.is_empty());
}

#[test]
fn test_append_to_empty() {
    let mut a = PriorityQueue::new(MaxFirst::new());
    let mut b = PriorityQueue::from_vec(vec![-20, 5, 43], MaxFirst::new());

    a.append(&mut b);

    assert_eq!(a.into_sorted_vec(), [43, 5, -20]);
    assert!(b.is_empty());
}

#[test]
fn test_to_sorted_vec_leaves_queue_untouched() {
    let queue = PriorityQueue::from_vec(
        vec!["Hi", "Hello", "Shalom"],
        |a: &&str, b: &&str| a.len() < b.len(),
    );
    let before = queue.clone().into_vec();

    assert_eq!(queue.to_sorted_vec(), ["Hi", "Hello", "Shalom"]);
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.to_sorted_vec(), ["Hi", "Hello", "Shalom"]);
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.into_vec(), before);
}

#[test]
fn test_sorted_vec_matches_pops_with_ties() {
    let mut rng = crate::test_helpers::test_rng();
    let letters = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
    let data: Vec<(u32, char)> =
        (0..300).map(|_| (rng.gen_range(0..10), *letters.choose(&mut rng).unwrap())).collect();

    let queue = PriorityQueue::from_vec(data, by_key);
    let popped = drain_by_pop(queue.clone());

    assert_eq!(queue.to_sorted_vec(), popped);
    assert_eq!(queue.into_sorted_vec(), popped);
    assert!(popped.windows(2).all(|w| w[0].0 <= w[1].0));
}

#[test]
fn test_clone_is_independent() {
    let mut original = PriorityQueue::from_vec(vec![4, 8, 15, 16, 23, 42], MinFirst::new());
    let mut copy = original.clone();

    assert_eq!(copy.pop(), Some(4));
    assert_eq!(copy.len(), 5);
    assert_eq!(original.len(), 6);
    assert_eq!(original.peek(), Some(&4));

    original.push(1);
    assert_eq!(copy.peek(), Some(&8));

    copy.clone_from(&original);
    assert_eq!(copy.into_sorted_vec(), [1, 4, 8, 15, 16, 23, 42]);
}

#[test]
fn test_display_and_debug_show_heap_order() {
    let queue = PriorityQueue::from_vec(vec![1, 2, 3], MinFirst::new());
    let shown = queue.to_string();
    assert!(shown == "[1, 2, 3]" || shown == "[1, 3, 2]", "unexpected rendering {}", shown);
    assert_eq!(format!("{:?}", queue), shown);

    let empty: PriorityQueue<i32> = PriorityQueue::default();
    assert_eq!(empty.to_string(), "[]");
    assert_eq!(format!("{:?}", empty), "[]");
}

#[test]
fn test_drain() {
    let mut queue: PriorityQueue<i32> = (0..128).collect();

    assert_eq!(queue.drain().take(5).count(), 5);

    assert!(queue.is_empty());
}

#[test]
fn test_clear_keeps_order_usable() {
    let mut queue = PriorityQueue::from_vec(vec![3, 1, 2], MinFirst::new());
    queue.clear();
    assert!(queue.is_empty());
    queue.push(9);
    queue.push(4);
    assert_eq!(queue.pop(), Some(4));
}

#[test]
fn test_from_iter_and_arrays_use_default_order() {
    let queue: PriorityQueue<i32> = [1, 4, 2, 3].into();
    assert_eq!(queue.peek(), Some(&4));

    let queue: PriorityQueue<i32, MinFirst<i32>> = vec![5, 3, 8].into_iter().collect();
    assert_eq!(queue.into_sorted_vec(), [3, 5, 8]);

    let v: Vec<i32> = PriorityQueue::<i32>::from(vec![2, 7]).into();
    assert_eq!(v.len(), 2);
}

#[test]
fn test_capacity() {
    let mut queue: PriorityQueue<i32, MinFirst<i32>> =
        PriorityQueue::with_capacity(MinFirst::new(), 50);
    assert!(queue.capacity() >= 50);
    queue.push(1);
    queue.shrink_to_fit();
    assert!(queue.capacity() >= 1);

    queue.reserve_exact(10);
    assert!(queue.capacity() >= 11);
    assert!(queue.try_reserve(100).is_ok());
    assert!(queue.capacity() >= 101);
    assert!(queue.try_reserve_exact(usize::MAX).is_err());
    queue.shrink_to(4);
    assert!(queue.capacity() >= 4);
    assert_eq!(queue.pop(), Some(1));
}

#[test]
fn test_order_accessor() {
    let queue: PriorityQueue<u8, _> = PriorityQueue::new(Reversed(MaxFirst::new()));
    assert!(queue.order().outranks(&1, &2));
}

// A predicate that panics once it has been called `limit` times must leave the
// queue holding exactly the elements it held, whatever state the sifting was in.
#[test]
fn test_panic_safe() {
    let mut rng = crate::test_helpers::test_rng();
    const DATASZ: usize = 32;
    const NTEST: usize = 10;

    for i in 1..=DATASZ {
        for _ in 0..NTEST {
            let calls = Cell::new(0usize);
            let limit = rng.gen_range(1..=DATASZ);
            let order = |a: &u32, b: &u32| {
                calls.set(calls.get() + 1);
                if calls.get() == limit {
                    panic!("predicate panicked");
                }
                a < b
            };

            let mut data: Vec<u32> = (1..=i as u32).collect();
            data.shuffle(&mut rng);
            let mut queue = PriorityQueue::new(&order);
            let mut pushed = 0;
            let mut popped = Vec::new();

            let _ = catch_unwind(AssertUnwindSafe(|| {
                for &x in &data {
                    pushed += 1;
                    queue.push(x);
                }
                while let Some(x) = queue.pop() {
                    popped.push(x);
                }
            }));

            // Nothing is duplicated, and at most the element being popped when
            // the predicate panicked has gone missing.
            let mut expected = data[..pushed].to_vec();
            expected.sort();
            let mut all = queue.into_vec();
            all.extend(popped);
            all.sort();
            let before_dedup = all.len();
            all.dedup();
            assert_eq!(all.len(), before_dedup);
            assert!(all.iter().all(|x| expected.binary_search(x).is_ok()));
            assert!(expected.len() - all.len() <= 1);
        }
    }
}

#[test]
fn test_panic_during_push_keeps_elements() {
    let calls = Cell::new(0usize);
    let order = |a: &i32, b: &i32| {
        calls.set(calls.get() + 1);
        if calls.get() > 6 {
            panic!("predicate panicked");
        }
        a > b
    };

    let mut queue = PriorityQueue::new(&order);
    for x in [1, 2, 3, 4] {
        queue.push(x);
    }
    assert!(calls.get() <= 6);

    let result = catch_unwind(AssertUnwindSafe(|| {
        for x in 5..100 {
            queue.push(x);
        }
    }));
    assert!(result.is_err());

    let mut left = queue.into_vec();
    left.sort();
    let expected: Vec<i32> = (1..=left.len() as i32).collect();
    assert_eq!(left, expected);
}

#[test]
fn test_string_order_and_reversed() {
    let words: Vec<String> = ["pear", "fig", "banana", "kiwi"].iter().map(|s| s.to_string()).collect();
    let queue = PriorityQueue::from_vec(words.clone(), Reversed(MinFirst::<String>::new()));
    assert_eq!(queue.into_sorted_vec(), ["pear", "kiwi", "fig", "banana"]);

    let queue = PriorityQueue::from_vec(words, MinFirst::new());
    assert_eq!(queue.into_iter_sorted().next().as_deref(), Some("banana"));
}
