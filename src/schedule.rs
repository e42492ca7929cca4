use gloo_timers::callback::Timeout;

/// Something that runs a task once after a delay.
///
/// Tasks are fire-and-forget: nothing hands back a handle, so nothing can cancel them.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Browser timers via `setTimeout`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TimerScheduler;

impl Scheduler for TimerScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let timeout = Timeout::new(delay_ms, task);
        timeout.forget();
    }
}

#[cfg(test)]
pub use virtual_clock::VirtualClock;


#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn runs_tasks_in_due_order() {
        let clock = VirtualClock::new();
        let fired = Rc::new(RefCell::new(Vec::new()));
        for delay in [900, 300, 2000] {
            let fired = fired.clone();
            let at = clock.clone();
            clock.schedule(delay, Box::new(move || fired.borrow_mut().push(at.now())));
        }

        clock.advance(299);
        assert!(fired.borrow().is_empty());
        clock.advance(1);
        assert_eq!(*fired.borrow(), vec![300]);
        clock.advance(5000);
        assert_eq!(*fired.borrow(), vec![300, 900, 2000]);
        assert_eq!(clock.now(), 5300);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn equal_deadlines_keep_insertion_order() {
        let clock = VirtualClock::new();
        let fired = Rc::new(RefCell::new(Vec::new()));
        for label in ["first", "second", "third"] {
            let fired = fired.clone();
            clock.schedule(100, Box::new(move || fired.borrow_mut().push(label)));
        }
        clock.advance(100);
        assert_eq!(*fired.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn tasks_can_schedule_follow_ups() {
        let clock = VirtualClock::new();
        let fired = Rc::new(RefCell::new(Vec::new()));
        {
            let fired = fired.clone();
            let inner = clock.clone();
            clock.schedule(
                500,
                Box::new(move || {
                    fired.borrow_mut().push(inner.now());
                    let fired = fired.clone();
                    let at = inner.clone();
                    inner.schedule(2000, Box::new(move || fired.borrow_mut().push(at.now())));
                }),
            );
        }
        clock.advance(2499);
        assert_eq!(*fired.borrow(), vec![500]);
        clock.advance(1);
        assert_eq!(*fired.borrow(), vec![500, 2500]);
    }
}
