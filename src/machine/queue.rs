//! Queued transition requests.
//!
//! Render callbacks and external collaborators cannot borrow the
//! controller mutably while it is rendering, so they hold a
//! [`Transitioner`] instead. Requests are applied by
//! [`Finite::run_pending`](super::Finite::run_pending) strictly in the
//! order they were made.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// A transition request waiting to be applied.
#[derive(Clone, Debug, PartialEq)]
pub struct Request<E, P> {
    pub event: E,
    pub payload: Option<P>,
}

/// Cloneable handle that queues transition requests for one controller.
///
/// The handle is `Rc`-based: a controller and everything that talks to it
/// live on a single thread.
pub struct Transitioner<E, P> {
    queue: Rc<RefCell<VecDeque<Request<E, P>>>>,
}

impl<E, P> Transitioner<E, P> {
    pub(crate) fn new() -> Self {
        Self {
            queue: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Queue `event` with an optional payload.
    pub fn transition(&self, event: E, payload: Option<P>) {
        self.queue
            .borrow_mut()
            .push_back(Request { event, payload });
    }

    /// Queue `event` without a payload.
    pub fn send(&self, event: E) {
        self.transition(event, None);
    }

    /// Number of requests not yet applied.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    pub(crate) fn pop(&self) -> Option<Request<E, P>> {
        self.queue.borrow_mut().pop_front()
    }
}

impl<E, P> Clone for Transitioner<E, P> {
    fn clone(&self) -> Self {
        Self {
            queue: Rc::clone(&self.queue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_come_out_in_call_order() {
        let transitioner: Transitioner<&str, u8> = Transitioner::new();
        let other = transitioner.clone();

        transitioner.send("SEARCH");
        other.transition("SEARCH_SUCCESS", Some(2));

        assert_eq!(transitioner.pending(), 2);
        assert_eq!(
            transitioner.pop(),
            Some(Request {
                event: "SEARCH",
                payload: None
            })
        );
        assert_eq!(
            other.pop(),
            Some(Request {
                event: "SEARCH_SUCCESS",
                payload: Some(2)
            })
        );
        assert_eq!(transitioner.pop(), None);
    }
}
