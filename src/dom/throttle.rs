use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

use crate::model::countdown::now_ms;
use crate::model::throttle::TrailingThrottle;

/// Runs `f` once `wait_ms` have passed without another call, with the last
/// call's argument. Only one timer is ever armed; dropping the throttle
/// cancels it.
pub struct Throttle<T: 'static> {
    wait_ms: u32,
    state: Rc<RefCell<TrailingThrottle<T>>>,
    timer: RefCell<Option<Timeout>>,
    f: Rc<dyn Fn(T)>,
}

impl<T: 'static> Throttle<T> {
    pub fn new(wait_ms: u32, f: impl Fn(T) + 'static) -> Self {
        Self {
            wait_ms,
            state: Rc::new(RefCell::new(TrailingThrottle::new(wait_ms))),
            timer: RefCell::new(None),
            f: Rc::new(f),
        }
    }

    pub fn call(&self, arg: T) {
        let due = self.state.borrow_mut().call(now_ms(), arg);
        let state = self.state.clone();
        let f = self.f.clone();
        let timeout = Timeout::new(self.wait_ms, move || {
            let arg = state.borrow_mut().poll(due);
            if let Some(arg) = arg {
                f(arg);
            }
        });
        // Replacing the previous timer clears it.
        *self.timer.borrow_mut() = Some(timeout);
    }
}
