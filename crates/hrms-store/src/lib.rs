//! Observable snapshot store
//!
//! A [`Store`] owns exactly one state value and hands it out as immutable
//! [`Arc`] snapshots. Every mutation replaces the snapshot as a whole, so a
//! consumer holding a snapshot never observes a half-applied update.
//! Subscribers are notified synchronously, in subscription order, after a
//! mutation produced a snapshot that differs from the previous one.
//!
//! # Example
//!
//! ```rust
//! use hrms_store::Store;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let store = Store::new(0_u32);
//! let seen = Arc::new(AtomicUsize::new(0));
//!
//! let counter = Arc::clone(&seen);
//! store.subscribe(move |value: &Arc<u32>| {
//!     counter.store(**value as usize, Ordering::SeqCst);
//! });
//!
//! store.update(|value| value + 5);
//! assert_eq!(*store.snapshot(), 5);
//! assert_eq!(seen.load(Ordering::SeqCst), 5);
//! ```

#![warn(missing_docs)]

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Subscriber callback type
pub type SubscriberFn<S> = Arc<dyn Fn(&Arc<S>) + Send + Sync>;

/// Handle returned by [`Store::subscribe`], used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

struct Inner<S> {
	state: RwLock<Arc<S>>,
	subscribers: RwLock<Vec<(SubscriptionId, SubscriberFn<S>)>>,
	next_id: AtomicU64,
}

/// Shared state container with subscriber notification
///
/// Cloning a `Store` is cheap and yields a handle to the same state.
pub struct Store<S> {
	inner: Arc<Inner<S>>,
}

impl<S> Clone for Store<S> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<S: fmt::Debug> fmt::Debug for Store<S> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Store")
			.field("state", &*self.inner.state.read())
			.field("subscribers", &self.inner.subscribers.read().len())
			.finish()
	}
}

impl<S: Default + PartialEq> Default for Store<S> {
	fn default() -> Self {
		Self::new(S::default())
	}
}

impl<S: PartialEq> Store<S> {
	/// Creates a store holding `initial`
	pub fn new(initial: S) -> Self {
		Self {
			inner: Arc::new(Inner {
				state: RwLock::new(Arc::new(initial)),
				subscribers: RwLock::new(Vec::new()),
				next_id: AtomicU64::new(0),
			}),
		}
	}

	/// Returns the current snapshot
	pub fn snapshot(&self) -> Arc<S> {
		Arc::clone(&self.inner.state.read())
	}

	/// Replaces the state with `next`
	///
	/// Returns `true` if the state changed and subscribers were notified.
	pub fn set(&self, next: S) -> bool {
		self.update(move |_| next)
	}

	/// Derives the next state from the current one
	///
	/// The read-modify-write happens under a single write lock, and the lock
	/// is not reentrant: `f` must not call back into this store (including
	/// [`Store::snapshot`]) or it deadlocks. Subscribers run after the lock
	/// is released, so they may read or update the store themselves.
	pub fn update<F>(&self, f: F) -> bool
	where
		F: FnOnce(&S) -> S,
	{
		let changed = {
			let mut state = self.inner.state.write();
			let next = f(&state);
			if next == **state {
				None
			} else {
				let next = Arc::new(next);
				*state = Arc::clone(&next);
				Some(next)
			}
		};

		match changed {
			Some(snapshot) => {
				self.notify(&snapshot);
				true
			}
			None => false,
		}
	}

	/// Registers a subscriber called after every change
	pub fn subscribe<F>(&self, subscriber: F) -> SubscriptionId
	where
		F: Fn(&Arc<S>) + Send + Sync + 'static,
	{
		let id = SubscriptionId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
		let subscriber: SubscriberFn<S> = Arc::new(subscriber);
		self.inner.subscribers.write().push((id, subscriber));
		tracing::trace!(subscription = id.0, "store subscriber added");
		id
	}

	/// Removes a subscriber
	///
	/// Returns `false` if the id was not (or no longer) subscribed.
	pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
		let mut subscribers = self.inner.subscribers.write();
		let before = subscribers.len();
		subscribers.retain(|(sid, _)| *sid != id);
		subscribers.len() < before
	}

	/// Number of live subscribers
	pub fn subscriber_count(&self) -> usize {
		self.inner.subscribers.read().len()
	}

	fn notify(&self, snapshot: &Arc<S>) {
		// Copy the list out so subscribers can (un)subscribe re-entrantly.
		let subscribers: Vec<SubscriberFn<S>> = self
			.inner
			.subscribers
			.read()
			.iter()
			.map(|(_, f)| Arc::clone(f))
			.collect();
		tracing::trace!(count = subscribers.len(), "notifying store subscribers");
		for subscriber in subscribers {
			subscriber(snapshot);
		}
	}
}
