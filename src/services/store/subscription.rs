use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;

use crate::models::scope::{Direction, Scope};

/// What kind of mutation a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Selected,
    Navigated(Direction),
    ScopeChanged { from: Scope },
}

/// Delivered to subscribers after the windows have been rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreChange {
    pub kind: ChangeKind,
    pub selected_date: NaiveDate,
    pub week_anchor: NaiveDate,
    pub month_anchor: NaiveDate,
    pub scope: Scope,
}

pub type StoreSubscriber = Rc<dyn Fn(&StoreChange)>;

#[derive(Default)]
pub(super) struct SubscriberList {
    subscribers: Rc<RefCell<Vec<StoreSubscriber>>>,
}

impl SubscriberList {
    pub(super) fn subscribe(&self, subscriber: StoreSubscriber) -> Subscription {
        self.subscribers.borrow_mut().push(subscriber.clone());
        Subscription {
            subscriber,
            subscribers: Rc::clone(&self.subscribers),
        }
    }

    pub(super) fn notify(&self, change: &StoreChange) {
        // Snapshot the list so a callback may drop its own subscription
        let subscribers = self.subscribers.borrow().clone();
        for subscriber in subscribers {
            (subscriber)(change);
        }
    }

    pub(super) fn len(&self) -> usize {
        self.subscribers.borrow().len()
    }
}

/// Keeps a subscriber registered until dropped.
pub struct Subscription {
    subscriber: StoreSubscriber,
    subscribers: Rc<RefCell<Vec<StoreSubscriber>>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let mut subscribers = self.subscribers.borrow_mut();
        subscribers.retain(|item| !Rc::ptr_eq(item, &self.subscriber));
    }
}
