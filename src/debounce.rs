//! Named, cancelable debounce timers.
//!
//! A timer is armed by returning a bubbletea `tick` command that delivers a
//! [`TimeoutMsg`] after the delay. Each timer is identified by a name;
//! arming a name again replaces whatever was pending under it. Replacement
//! works by tagging: every arm bumps the tag and a firing is accepted only
//! if its tag is still the current one for its name.
//!
//! Messages also carry the owner id of the [`Timers`] set that armed them,
//! so several widgets can share one program without reacting to each
//! other's timers.
//!
//! ```rust
//! use bubbletea_dropdown::debounce::Timers;
//! use std::time::Duration;
//!
//! let mut timers = Timers::new();
//! let _cmd = timers.arm("search", Duration::from_millis(500));
//! assert!(timers.is_pending("search"));
//!
//! timers.cancel("search");
//! assert!(!timers.is_pending("search"));
//! ```

use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Delivered when an armed timer elapses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeoutMsg {
    /// Id of the [`Timers`] set that armed the timer.
    pub owner: i64,
    /// Name the timer was armed under.
    pub name: &'static str,
    tag: u64,
}

/// A set of named timers belonging to one component instance.
#[derive(Debug)]
pub struct Timers {
    id: i64,
    tag: u64,
    pending: HashMap<&'static str, u64>,
    disposed: bool,
}

impl Timers {
    /// Creates an empty timer set with a fresh owner id.
    pub fn new() -> Self {
        Self {
            id: next_id(),
            tag: 0,
            pending: HashMap::new(),
            disposed: false,
        }
    }

    /// Owner id stamped on every [`TimeoutMsg`] from this set.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Arms `name` to fire after `delay`, replacing any pending firing.
    pub fn arm(&mut self, name: &'static str, delay: Duration) -> Cmd {
        self.tag += 1;
        let tag = self.tag;
        let owner = self.id;
        self.pending.insert(name, tag);
        self.disposed = false;
        tracing::trace!(target: "bubbletea_dropdown::debounce", owner, timer = name, tag, ?delay, "timer armed");

        bubbletea_tick(delay, move |_| Box::new(TimeoutMsg { owner, name, tag }) as Msg)
    }

    /// Cancels the pending firing of `name`, if any.
    pub fn cancel(&mut self, name: &'static str) {
        self.pending.remove(name);
    }

    /// Cancels everything and ignores any firing still in flight.
    pub fn dispose(&mut self) {
        self.pending.clear();
        self.disposed = true;
    }

    /// Returns `true` if `name` is armed and has not fired yet.
    pub fn is_pending(&self, name: &str) -> bool {
        self.pending.contains_key(name)
    }

    /// Consumes a firing.
    ///
    /// Returns the timer name if `msg` is the current firing of one of this
    /// set's timers. Firings from other owners, replaced arms, cancelled
    /// timers or a disposed set return `None`.
    pub fn accept(&mut self, msg: &TimeoutMsg) -> Option<&'static str> {
        if msg.owner != self.id {
            return None;
        }
        if self.disposed || self.pending.get(msg.name) != Some(&msg.tag) {
            tracing::trace!(target: "bubbletea_dropdown::debounce", timer = msg.name, tag = msg.tag, "stale timer dropped");
            return None;
        }
        self.pending.remove(msg.name);
        Some(msg.name)
    }

    /// The message the pending timer `name` will deliver.
    #[cfg(test)]
    pub(crate) fn pending_msg(&self, name: &'static str) -> Option<TimeoutMsg> {
        self.pending.get(name).map(|&tag| TimeoutMsg {
            owner: self.id,
            name,
            tag,
        })
    }
}

impl Default for Timers {
    fn default() -> Self {
        Self::new()
    }
}
