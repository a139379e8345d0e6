//! User preference store: time format and active background.
//!
//! Both preferences persist individually and immediately on every change --
//! no batching. Restore order for the background: the uploaded-image record
//! wins over the selection token when both are present. A failed write is
//! logged and the in-memory value stays authoritative for the session; it
//! never crashes a caller.

use chrono::Utc;

use crate::background::Background;
use crate::events::{Event, Observers};
use crate::storage::KvStore;

pub const KEY_TIME_FORMAT: &str = "24hour";
pub const KEY_BACKGROUND: &str = "background";
pub const KEY_UPLOADED_BACKGROUND: &str = "uploaded-background";

/// The two persisted preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub use_24_hour: bool,
    pub background: Background,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            use_24_hour: true,
            background: Background::default_preset(),
        }
    }
}

pub struct SettingsStore {
    kv: KvStore,
    settings: Settings,
    observers: Observers,
}

impl SettingsStore {
    /// Restore prior values, defaulting on absent or unparseable records.
    pub fn load(kv: KvStore) -> Self {
        let use_24_hour = match kv.get(KEY_TIME_FORMAT).as_deref() {
            Some("false") => false,
            Some("true") => true,
            _ => true,
        };

        // Uploaded image beats the selection token.
        let background = kv
            .get(KEY_UPLOADED_BACKGROUND)
            .filter(|v| !v.is_empty())
            .or_else(|| kv.get(KEY_BACKGROUND))
            .map(|v| Background::from_value(&v))
            .unwrap_or_else(Background::default_preset);

        Self {
            kv,
            settings: Settings {
                use_24_hour,
                background,
            },
            observers: Observers::default(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn use_24_hour(&self) -> bool {
        self.settings.use_24_hour
    }

    pub fn background(&self) -> &Background {
        &self.settings.background
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: Fn(&Event) + 'static,
    {
        self.observers.subscribe(listener);
    }

    pub fn set_use_24_hour(&mut self, use_24_hour: bool) {
        self.settings.use_24_hour = use_24_hour;
        self.persist(KEY_TIME_FORMAT, if use_24_hour { "true" } else { "false" });
        self.observers.notify(&Event::FormatChanged {
            use_24_hour,
            at: Utc::now(),
        });
    }

    /// Make a gradient or remote image the active background and persist
    /// the selection token.
    pub fn set_background(&mut self, background: Background) {
        self.persist(KEY_BACKGROUND, background.value());
        self.settings.background = background.clone();
        self.observers.notify(&Event::BackgroundChanged {
            background,
            at: Utc::now(),
        });
    }

    /// Make an uploaded image (data URI) the active background and persist
    /// it to the uploaded slot, which takes precedence on the next restore.
    pub fn set_uploaded_background(&mut self, data_uri: String) {
        let background = Background::Uploaded(data_uri);
        self.persist(KEY_UPLOADED_BACKGROUND, background.value());
        self.settings.background = background.clone();
        self.observers.notify(&Event::BackgroundChanged {
            background,
            at: Utc::now(),
        });
    }

    /// Best-effort write. Oversized uploads can exceed what the store
    /// accepts; the in-memory value stays authoritative for the session.
    fn persist(&self, key: &str, value: &str) {
        if let Err(e) = self.kv.set(key, value) {
            tracing::warn!(key, error = %e, "failed to persist setting; keeping in-memory value");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn store_at(dir: &std::path::Path) -> SettingsStore {
        SettingsStore::load(KvStore::at(dir))
    }

    #[test]
    fn defaults_when_nothing_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_at(dir.path());
        assert!(store.use_24_hour());
        assert_eq!(store.background(), &Background::default_preset());
    }

    #[test]
    fn format_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_at(dir.path());
        store.set_use_24_hour(false);

        let reloaded = store_at(dir.path());
        assert!(!reloaded.use_24_hour());
    }

    #[test]
    fn garbage_format_record_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let kv = KvStore::at(dir.path());
        kv.set(KEY_TIME_FORMAT, "maybe").unwrap();
        assert!(SettingsStore::load(kv).use_24_hour());
    }

    #[test]
    fn uploaded_image_wins_over_selection_on_restore() {
        let dir = tempfile::tempdir().unwrap();
        let kv = KvStore::at(dir.path());
        kv.set(KEY_BACKGROUND, "https://x.com/a.jpg").unwrap();
        kv.set(KEY_UPLOADED_BACKGROUND, "data:image/png;base64,AAAA")
            .unwrap();

        let store = SettingsStore::load(kv);
        assert_eq!(
            store.background(),
            &Background::Uploaded("data:image/png;base64,AAAA".to_string())
        );
    }

    #[test]
    fn selection_restored_without_upload() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_at(dir.path());
        store.set_background(Background::from_value("https://x.com/a.jpg"));

        let reloaded = store_at(dir.path());
        assert_eq!(
            reloaded.background(),
            &Background::ImageUrl("https://x.com/a.jpg".to_string())
        );
    }

    #[test]
    fn write_failure_keeps_in_memory_value() {
        let mut store = SettingsStore::load(KvStore::at("/not/a/writable/dir"));
        store.set_use_24_hour(false);
        assert!(!store.use_24_hour());
    }

    #[test]
    fn mutations_notify_observers() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_at(dir.path());
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = Rc::clone(&seen);
            store.subscribe(move |event| seen.borrow_mut().push(format!("{event:?}")));
        }
        store.set_use_24_hour(false);
        store.set_background(Background::default_preset());
        assert_eq!(seen.borrow().len(), 2);
        assert!(seen.borrow()[0].contains("FormatChanged"));
    }
}
