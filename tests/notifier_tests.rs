use std::sync::{Arc, Mutex};

use broadside::Notifier;

struct Source {
    name: &'static str,
}

#[test]
fn test_publish_in_registration_order() {
    let mut hub: Notifier<Source, u32> = Notifier::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    for tag in ["first", "second", "third"] {
        let seen = Arc::clone(&seen);
        hub.subscribe(move |src: &Source, ev: &u32| {
            seen.lock().unwrap().push((tag, src.name, *ev));
        });
    }
    assert_eq!(hub.len(), 3);

    hub.publish(&Source { name: "cell" }, &7);
    assert_eq!(
        *seen.lock().unwrap(),
        vec![("first", "cell", 7), ("second", "cell", 7), ("third", "cell", 7)]
    );
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let mut hub: Notifier<Source, u32> = Notifier::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let a = {
        let seen = Arc::clone(&seen);
        hub.subscribe(move |_, ev| seen.lock().unwrap().push(("a", *ev)))
    };
    {
        let seen = Arc::clone(&seen);
        hub.subscribe(move |_, ev| seen.lock().unwrap().push(("b", *ev)));
    }

    hub.publish(&Source { name: "x" }, &1);
    assert!(hub.unsubscribe(a));
    assert!(!hub.unsubscribe(a), "second unsubscribe is a no-op");
    hub.publish(&Source { name: "x" }, &2);

    assert_eq!(*seen.lock().unwrap(), vec![("a", 1), ("b", 1), ("b", 2)]);
}

#[test]
fn test_publish_without_subscribers() {
    let hub: Notifier<Source, u32> = Notifier::default();
    assert!(hub.is_empty());
    hub.publish(&Source { name: "quiet" }, &0);
}

#[test]
fn test_duplicate_events_are_not_collapsed() {
    let mut hub: Notifier<Source, &'static str> = Notifier::new();
    let count = Arc::new(Mutex::new(0usize));
    let c = Arc::clone(&count);
    hub.subscribe(move |_, _| *c.lock().unwrap() += 1);

    let src = Source { name: "s" };
    hub.publish(&src, &"same");
    hub.publish(&src, &"same");
    assert_eq!(*count.lock().unwrap(), 2);
}
