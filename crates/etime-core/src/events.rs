//! Store change notifications.
//!
//! Every accepted mutation in a store produces an [`Event`]. Views register
//! an observer and pull current state to render when notified; all
//! notification happens synchronously inside the mutating call, so there is
//! no interleaving to guard against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::background::Background;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    FormatChanged {
        use_24_hour: bool,
        at: DateTime<Utc>,
    },
    BackgroundChanged {
        background: Background,
        at: DateTime<Utc>,
    },
    TasksChanged {
        count: usize,
        at: DateTime<Utc>,
    },
}

/// Observer registry owned by each store.
#[derive(Default)]
pub struct Observers {
    listeners: Vec<Box<dyn Fn(&Event)>>,
}

impl Observers {
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&Event) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn notify(&self, event: &Event) {
        for listener in &self.listeners {
            listener(event);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
