use std::{
    fmt::{self, Debug, Formatter},
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use parking_lot::RwLock;
use tracing::trace;

type Subscriber<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// A shared value that is only ever replaced whole, notifying subscribers on each replacement.
///
/// Clones share the same value and subscribers.
pub struct Store<T> {
    value: Arc<RwLock<T>>,
    subscribers: Arc<RwLock<Vec<(SubscriptionId, Subscriber<T>)>>>,
    next_id: Arc<AtomicU64>,
}

impl<T> Store<T>
where
    T: Clone,
{
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(value)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(0)),
        }
    }

    /// A snapshot of the current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Run `f` against the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.read())
    }

    /// Replace the value and notify subscribers.
    pub fn set(&self, value: T) {
        *self.value.write() = value;
        self.notify();
    }

    /// Replace the value with one derived from the current value, then notify subscribers.
    pub fn update(&self, f: impl FnOnce(&T) -> T) {
        {
            let mut guard = self.value.write();
            let next = f(&guard);
            *guard = next;
        }
        self.notify();
    }

    /// Like [`update`](Self::update), but `f` may refuse. On error the value is left as it was
    /// and nobody is notified.
    pub fn try_update<E>(&self, f: impl FnOnce(&T) -> Result<T, E>) -> Result<(), E> {
        {
            let mut guard = self.value.write();
            let next = f(&guard)?;
            *guard = next;
        }
        self.notify();
        Ok(())
    }

    pub fn subscribe(&self, subscriber: impl Fn(&T) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers.write().push((id, Arc::new(subscriber)));
        id
    }

    /// Returns whether a subscriber was removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.write();
        let before = subscribers.len();
        subscribers.retain(|(sub_id, _)| *sub_id != id);
        subscribers.len() != before
    }

    fn notify(&self) {
        // Locks are released before calling out so subscribers may use the store
        let subscribers: Vec<Subscriber<T>> = self
            .subscribers
            .read()
            .iter()
            .map(|(_, s)| s.clone())
            .collect();
        if subscribers.is_empty() {
            return;
        }

        let value = self.get();
        trace!("Notifying {} subscribers", subscribers.len());
        for subscriber in subscribers {
            subscriber(&value);
        }
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
            next_id: self.next_id.clone(),
        }
    }
}

impl<T> Debug for Store<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("value", &*self.value.read())
            .field("subscribers", &self.subscribers.read().len())
            .finish()
    }
}

impl<T> Default for Store<T>
where
    T: Clone + Default,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod test {
    use std::sync::atomic::AtomicUsize;

    use super::*;

    #[test]
    fn test_set_notifies() {
        let store = Store::new(1);
        let seen = Arc::new(AtomicUsize::new(0));

        let seen_clone = seen.clone();
        store.subscribe(move |value| seen_clone.store(*value, Ordering::SeqCst));

        store.set(5);
        assert_eq!(seen.load(Ordering::SeqCst), 5);

        store.update(|value| value * 2);
        assert_eq!(seen.load(Ordering::SeqCst), 10);
        assert_eq!(store.get(), 10);
    }

    #[test]
    fn test_try_update() {
        let store = Store::new(vec![1]);
        let calls = Arc::new(AtomicUsize::new(0));

        let calls_clone = calls.clone();
        store.subscribe(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        let refused: Result<(), &str> = store.try_update(|_| Err("no"));
        assert_eq!(refused, Err("no"));
        assert_eq!(store.get(), vec![1]);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        store
            .try_update(|value| {
                let mut next = value.clone();
                next.push(2);
                Ok::<_, ()>(next)
            })
            .unwrap();
        assert_eq!(store.get(), vec![1, 2]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe() {
        let store = Store::new(String::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let calls_clone = calls.clone();
        let id = store.subscribe(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        store.set("a".into());
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set("b".into());

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clones_share_state() {
        let store = Store::new(vec![1]);
        let other = store.clone();

        other.set(vec![1, 2]);

        assert_eq!(store.get(), vec![1, 2]);
        assert_eq!(store.with(Vec::len), 2);
    }

    #[test]
    fn test_independent_stores() {
        let a = Store::new(0);
        let b = Store::new(0);

        a.set(3);

        assert_eq!(b.get(), 0);
    }
}
