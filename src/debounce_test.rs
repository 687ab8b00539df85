#[cfg(test)]
mod tests {
    use crate::debounce::{BoxedDebounced, Debounced};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::{Duration, Instant};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl FnMut(String)) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        (calls, move |arg: String| sink.borrow_mut().push(arg))
    }

    #[test]
    fn test_rapid_calls_collapse_into_last() {
        let (calls, callback) = recorder();
        let mut debounced = Debounced::new(callback, ms(200));
        let start = Instant::now();

        debounced.call_at("a".to_string(), start);
        debounced.call_at("ab".to_string(), start + ms(50));
        debounced.call_at("abc".to_string(), start + ms(100));

        assert!(!debounced.poll_at(start + ms(200)));
        assert!(!debounced.poll_at(start + ms(299)));
        assert!(calls.borrow().is_empty());

        assert!(debounced.poll_at(start + ms(300)));
        assert_eq!(*calls.borrow(), vec!["abc".to_string()]);

        // Nothing left to fire
        assert!(!debounced.poll_at(start + ms(1000)));
        assert_eq!(calls.borrow().len(), 1);
    }

    #[test]
    fn test_spaced_calls_each_fire_once() {
        let (calls, callback) = recorder();
        let mut debounced = Debounced::new(callback, ms(200));
        let start = Instant::now();

        debounced.call_at("first".to_string(), start);
        assert!(debounced.poll_at(start + ms(200)));

        debounced.call_at("second".to_string(), start + ms(250));
        assert!(!debounced.poll_at(start + ms(449)));
        assert!(debounced.poll_at(start + ms(450)));

        debounced.call_at("third".to_string(), start + ms(500));
        assert!(debounced.poll_at(start + ms(700)));

        assert_eq!(
            *calls.borrow(),
            vec![
                "first".to_string(),
                "second".to_string(),
                "third".to_string()
            ]
        );
    }

    #[test]
    fn test_cancel_prevents_delivery() {
        let (calls, callback) = recorder();
        let mut debounced = Debounced::new(callback, ms(100));
        let start = Instant::now();

        debounced.call_at("pending".to_string(), start);
        assert!(debounced.is_pending());
        assert!(debounced.cancel());
        assert!(!debounced.is_pending());
        assert!(!debounced.cancel());

        assert!(!debounced.poll_at(start + ms(500)));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_drop_discards_pending_call() {
        let (calls, callback) = recorder();
        {
            let mut debounced = Debounced::new(callback, ms(10));
            debounced.call("never".to_string());
        }
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_zero_wait_fires_on_next_poll_and_still_collapses() {
        let (calls, callback) = recorder();
        let mut debounced = Debounced::new(callback, Duration::ZERO);
        let now = Instant::now();

        debounced.call_at("x".to_string(), now);
        debounced.call_at("xy".to_string(), now);
        assert!(debounced.poll_at(now));

        assert_eq!(*calls.borrow(), vec!["xy".to_string()]);
    }

    #[test]
    fn test_deadline_tracks_latest_call() {
        let (_calls, callback) = recorder();
        let mut debounced = Debounced::new(callback, ms(200));
        let start = Instant::now();

        assert_eq!(debounced.deadline(), None);
        assert_eq!(debounced.time_until_due(start), None);

        debounced.call_at("a".to_string(), start);
        assert_eq!(debounced.deadline(), Some(start + ms(200)));

        debounced.call_at("b".to_string(), start + ms(100));
        assert_eq!(debounced.deadline(), Some(start + ms(300)));
        assert_eq!(debounced.time_until_due(start + ms(250)), Some(ms(50)));
        assert_eq!(debounced.time_until_due(start + ms(400)), Some(Duration::ZERO));
    }

    #[test]
    fn test_independent_instances_do_not_interfere() {
        let (left_calls, left_cb) = recorder();
        let (right_calls, right_cb) = recorder();
        let left_cb: Box<dyn FnMut(String)> = Box::new(left_cb);
        let right_cb: Box<dyn FnMut(String)> = Box::new(right_cb);
        let mut left: BoxedDebounced<String> = Debounced::new(left_cb, ms(100));
        let mut right: BoxedDebounced<String> = Debounced::new(right_cb, ms(100));
        let start = Instant::now();

        left.call_at("left".to_string(), start);
        right.call_at("right".to_string(), start + ms(50));
        right.cancel();

        assert!(left.poll_at(start + ms(100)));
        assert!(!right.poll_at(start + ms(200)));
        assert_eq!(*left_calls.borrow(), vec!["left".to_string()]);
        assert!(right_calls.borrow().is_empty());
    }
}
