use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::StorageError;

/// String key-value persistence, modelled on the browser's `localStorage`.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store. Used when `localStorage` is disabled and by tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Browser `window.localStorage`.
pub struct LocalStore {
    inner: web_sys::Storage,
}

fn js_reason(v: wasm_bindgen::JsValue) -> String {
    v.as_string().unwrap_or_else(|| format!("{:?}", v))
}

impl LocalStore {
    pub fn open() -> Result<Self, StorageError> {
        let win = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no global window".to_string()))?;
        match win.local_storage() {
            Ok(Some(inner)) => Ok(Self { inner }),
            Ok(None) => Err(StorageError::Unavailable(
                "localStorage is disabled".to_string(),
            )),
            Err(e) => Err(StorageError::Unavailable(js_reason(e))),
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: js_reason(e),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: js_reason(e),
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(key).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: js_reason(e),
        })
    }
}

/// `localStorage` when the browser allows it, otherwise memory only.
pub fn browser_store() -> Box<dyn KeyValueStore> {
    match LocalStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            crate::util::cwarn(&format!("{e}; progress will not survive a reload"));
            Box::new(MemoryStore::new())
        }
    }
}
