// src/avatar.rs
//
// Profile picture persistence. One value under `profilePicture` in local
// storage, published to every mounted view on write and on cross-tab
// `storage` events.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;
use yew::Callback;

use crate::config::{UploadPolicy, PROFILE_PICTURE_KEY};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("could not write {key}: {reason}")]
    Write { key: String, reason: String },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Please select an image file")]
    NotAnImage { mime: String },
    #[error("File size must be less than {}", size_label(.limit))]
    TooLarge { size: u64, limit: u64 },
    #[error("Could not read {name}: {reason}")]
    Read { name: String, reason: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// `window.localStorage`, raw strings (no JSON wrapping) so other tabs and
/// plain JS read the same value.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let ls = local_storage().ok_or(StoreError::Unavailable)?;
        ls.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: format!("{e:?}"),
        })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let ls = local_storage().ok_or(StoreError::Unavailable)?;
        ls.remove_item(key).map_err(|e| StoreError::Write {
            key: key.to_string(),
            reason: format!("{e:?}"),
        })
    }
}

/// Check an upload before reading it.
pub fn validate(policy: &UploadPolicy, mime: &str, size: u64) -> Result<(), UploadError> {
    if !mime.starts_with(&policy.mime_prefix) {
        return Err(UploadError::NotAnImage {
            mime: mime.to_string(),
        });
    }
    if size > policy.max_bytes {
        return Err(UploadError::TooLarge {
            size,
            limit: policy.max_bytes,
        });
    }
    Ok(())
}

/// Human size for limits: whole MB when exact, else KB, else bytes.
pub fn size_label(bytes: &u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * KB;
    match *bytes {
        b if b >= MB && b % MB == 0 => format!("{}MB", b / MB),
        b if b >= KB => format!("{}KB", b / KB),
        b => format!("{b}B"),
    }
}

pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

type Listeners = RefCell<Vec<(usize, Callback<Option<String>>)>>;

/// Keeps a listener registered until dropped.
pub struct Subscription {
    id: usize,
    listeners: Weak<Listeners>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

struct Inner<S> {
    backend: S,
    policy: UploadPolicy,
    listeners: Rc<Listeners>,
    next_id: Cell<usize>,
}

pub struct AvatarStore<S = BrowserStorage> {
    inner: Rc<Inner<S>>,
}

impl<S> Clone for AvatarStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S> PartialEq for AvatarStore<S> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<S: KeyValueStore> AvatarStore<S> {
    pub fn new(backend: S, policy: UploadPolicy) -> Self {
        Self {
            inner: Rc::new(Inner {
                backend,
                policy,
                listeners: Rc::default(),
                next_id: Cell::new(0),
            }),
        }
    }

    pub fn policy(&self) -> &UploadPolicy {
        &self.inner.policy
    }

    pub fn current(&self) -> Option<String> {
        self.inner.backend.get(PROFILE_PICTURE_KEY)
    }

    pub fn check(&self, mime: &str, size: u64) -> Result<(), UploadError> {
        validate(&self.inner.policy, mime, size)
    }

    /// Validate, encode and persist an image, then notify subscribers.
    pub fn upload(&self, mime: &str, bytes: &[u8]) -> Result<String, UploadError> {
        self.check(mime, bytes.len() as u64)?;
        let url = data_url(mime, bytes);
        self.inner.backend.set(PROFILE_PICTURE_KEY, &url)?;
        self.publish(Some(url.clone()));
        Ok(url)
    }

    pub fn remove(&self) -> Result<(), StoreError> {
        self.inner.backend.remove(PROFILE_PICTURE_KEY)?;
        self.publish(None);
        Ok(())
    }

    /// Apply a `storage` event raised by another tab. `key == None` means the
    /// other tab cleared its storage. Returns whether subscribers were told.
    pub fn apply_storage_event(&self, key: Option<&str>, new_value: Option<String>) -> bool {
        match key {
            Some(PROFILE_PICTURE_KEY) => self.publish(new_value),
            None => self.publish(None),
            Some(_) => return false,
        }
        true
    }

    pub fn subscribe(&self, listener: Callback<Option<String>>) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.listeners.borrow_mut().push((id, listener));
        Subscription {
            id,
            listeners: Rc::downgrade(&self.inner.listeners),
        }
    }

    fn publish(&self, value: Option<String>) {
        // Snapshot first: a listener may subscribe or unsubscribe while we emit.
        let listeners: Vec<_> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        for cb in listeners {
            cb.emit(value.clone());
        }
    }
}

thread_local! {
    static AVATARS: AvatarStore = AvatarStore::new(BrowserStorage, UploadPolicy::default());
}

/// The page-wide store backed by local storage.
pub fn avatars() -> AvatarStore {
    AVATARS.with(AvatarStore::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore(RefCell<HashMap<String, String>>);

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.0.borrow_mut().insert(key.into(), value.into());
            Ok(())
        }

        fn remove(&self, key: &str) -> Result<(), StoreError> {
            self.0.borrow_mut().remove(key);
            Ok(())
        }
    }

    /// Rejects every write, like a full quota.
    struct FullStore;

    impl KeyValueStore for FullStore {
        fn get(&self, _: &str) -> Option<String> {
            None
        }

        fn set(&self, key: &str, _: &str) -> Result<(), StoreError> {
            Err(StoreError::Write {
                key: key.into(),
                reason: "QuotaExceededError".into(),
            })
        }

        fn remove(&self, _: &str) -> Result<(), StoreError> {
            Ok(())
        }
    }

    fn store() -> AvatarStore<MemoryStore> {
        AvatarStore::new(MemoryStore::default(), UploadPolicy::default())
    }

    fn png(len: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; len];
        bytes[..8].copy_from_slice(&[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
        bytes
    }

    fn recorder() -> (Rc<RefCell<Vec<Option<String>>>>, Callback<Option<String>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, Callback::from(move |v| sink.borrow_mut().push(v)))
    }

    #[test]
    fn one_megabyte_png_round_trips() {
        let s = store();
        let url = s.upload("image/png", &png(1024 * 1024)).unwrap();
        assert!(url.starts_with("data:image/png;base64,iVBORw0KGgo"));
        assert_eq!(s.current(), Some(url));
    }

    #[test]
    fn oversized_upload_leaves_picture_unchanged() {
        let s = store();
        let first = s.upload("image/jpeg", &[1, 2, 3]).unwrap();
        let err = s.upload("image/png", &png(10 * 1024 * 1024)).unwrap_err();
        assert_eq!(
            err,
            UploadError::TooLarge {
                size: 10 * 1024 * 1024,
                limit: 5 * 1024 * 1024,
            }
        );
        assert_eq!(err.to_string(), "File size must be less than 5MB");
        assert_eq!(s.current(), Some(first));
    }

    #[test]
    fn non_images_are_rejected() {
        let s = store();
        let err = s.upload("application/pdf", b"%PDF").unwrap_err();
        assert_eq!(err.to_string(), "Please select an image file");
        assert_eq!(s.current(), None);
    }

    #[test]
    fn exactly_five_megabytes_is_allowed() {
        let policy = UploadPolicy::default();
        assert!(validate(&policy, "image/webp", 5 * 1024 * 1024).is_ok());
        assert!(validate(&policy, "image/webp", 5 * 1024 * 1024 + 1).is_err());
    }

    #[test]
    fn small_limits_are_not_reported_as_zero() {
        assert_eq!(size_label(&(5 * 1024 * 1024)), "5MB");
        assert_eq!(size_label(&(512 * 1024)), "512KB");
        assert_eq!(size_label(&(1536 * 1024)), "1536KB");
        assert_eq!(size_label(&100), "100B");

        let policy = UploadPolicy {
            max_bytes: 512 * 1024,
            ..UploadPolicy::default()
        };
        let s = AvatarStore::new(MemoryStore::default(), policy);
        let err = s.upload("image/png", &png(600 * 1024)).unwrap_err();
        assert_eq!(err.to_string(), "File size must be less than 512KB");
    }

    #[test]
    fn writes_and_removals_are_published() {
        let s = store();
        let (seen, cb) = recorder();
        let _sub = s.subscribe(cb);

        let url = s.upload("image/gif", b"GIF89a").unwrap();
        s.remove().unwrap();
        assert_eq!(*seen.borrow(), vec![Some(url), None]);
        assert_eq!(s.current(), None);
    }

    #[test]
    fn dropped_subscriptions_stop_receiving() {
        let s = store();
        let (seen, cb) = recorder();
        let sub = s.subscribe(cb);
        drop(sub);
        s.upload("image/png", &png(16)).unwrap();
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn storage_events_only_for_our_key() {
        let s = store();
        let (seen, cb) = recorder();
        let _sub = s.subscribe(cb);

        assert!(!s.apply_storage_event(Some("theme"), Some("dark".into())));
        assert!(s.apply_storage_event(Some(PROFILE_PICTURE_KEY), Some("data:image/png;base64,AA==".into())));
        assert!(s.apply_storage_event(None, None));
        assert_eq!(
            *seen.borrow(),
            vec![Some("data:image/png;base64,AA==".to_string()), None]
        );
        // Cross-tab events never write back.
        assert_eq!(s.current(), None);
    }

    #[test]
    fn failed_writes_surface_and_do_not_publish() {
        let s = AvatarStore::new(FullStore, UploadPolicy::default());
        let (seen, cb) = recorder();
        let _sub = s.subscribe(cb);
        let err = s.upload("image/png", &png(32)).unwrap_err();
        assert!(matches!(err, UploadError::Store(StoreError::Write { .. })));
        assert!(seen.borrow().is_empty());
    }
}
