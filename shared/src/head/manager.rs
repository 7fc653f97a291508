use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::{HeadKey, HeadTags};

/// A document head the manager can write to.
///
/// Implementations are infallible from the manager's point of view; a target
/// that can fail (the browser DOM) logs and drops the failure itself.
pub trait HeadTarget {
    /// Current content of `key`, `None` when the slot is absent.
    fn read(&self, key: &HeadKey) -> Option<String>;

    /// Create or overwrite the slot.
    fn write(&mut self, key: &HeadKey, content: &str);

    /// Remove the slot. Clearing an absent slot is a no-op.
    fn clear(&mut self, key: &HeadKey);
}

/// Handle to a head manager shared by every page on the UI thread.
pub type SharedHead<T> = Rc<RefCell<HeadManager<T>>>;

/// Identifies one mounted set of tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId(u64);

#[derive(Debug)]
struct Layer {
    id: LayerId,
    tags: HeadTags,
}

/// Layers head tags over a [`HeadTarget`].
///
/// The first time any layer touches a key, the key's current value is stored
/// as its baseline. The effective value of a key is taken from the most
/// recently pushed layer that declares it, else from the baseline. When the
/// last layer is removed every baseline is restored and forgotten.
#[derive(Debug)]
pub struct HeadManager<T: HeadTarget> {
    target: T,
    baseline: BTreeMap<HeadKey, Option<String>>,
    layers: Vec<Layer>,
    next_id: u64,
}

impl<T: HeadTarget> HeadManager<T> {
    pub fn new(target: T) -> Self {
        Self {
            target,
            baseline: BTreeMap::new(),
            layers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn shared(target: T) -> SharedHead<T> {
        Rc::new(RefCell::new(Self::new(target)))
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Number of mounted layers.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Apply `tags` on top of every mounted layer.
    pub fn push(&mut self, tags: HeadTags) -> LayerId {
        for key in tags.keys() {
            if !self.baseline.contains_key(key) {
                let original = self.target.read(key);
                self.baseline.insert(key.clone(), original);
            }
        }

        let id = LayerId(self.next_id);
        self.next_id += 1;
        log::debug!("[HEAD] mount layer {:?} ({} tags)", id, tags.len());
        self.layers.push(Layer { id, tags });
        self.sync();
        id
    }

    /// Remove a layer wherever it sits in the stack.
    ///
    /// Returns `false` if the layer was already removed.
    pub fn remove(&mut self, id: LayerId) -> bool {
        let before = self.layers.len();
        self.layers.retain(|layer| layer.id != id);
        if self.layers.len() == before {
            return false;
        }

        log::debug!("[HEAD] unmount layer {:?}, {} remaining", id, self.layers.len());
        self.sync();
        if self.layers.is_empty() {
            self.baseline.clear();
        }
        true
    }

    fn effective(&self, key: &HeadKey) -> Option<String> {
        self.layers
            .iter()
            .rev()
            .find_map(|layer| layer.tags.get(key))
            .map(str::to_string)
            .or_else(|| self.baseline.get(key).cloned().flatten())
    }

    fn sync(&mut self) {
        let keys: Vec<HeadKey> = self.baseline.keys().cloned().collect();
        for key in keys {
            let wanted = self.effective(&key);
            if self.target.read(&key) == wanted {
                continue;
            }
            match wanted {
                Some(content) => self.target.write(&key, &content),
                None => self.target.clear(&key),
            }
        }
    }
}

/// Keeps a layer mounted. Dropping it unmounts the layer.
#[must_use = "dropping the guard immediately unmounts the tags"]
pub struct HeadGuard<T: HeadTarget> {
    manager: SharedHead<T>,
    id: LayerId,
}

impl<T: HeadTarget> Drop for HeadGuard<T> {
    fn drop(&mut self) {
        match self.manager.try_borrow_mut() {
            Ok(mut manager) => {
                manager.remove(self.id);
            }
            Err(_) => log::warn!("[HEAD] manager busy, layer {:?} left mounted", self.id),
        }
    }
}

/// Mount `tags` on the shared head until the returned guard is dropped.
pub fn mount<T: HeadTarget>(head: &SharedHead<T>, tags: HeadTags) -> HeadGuard<T> {
    let id = head.borrow_mut().push(tags);
    HeadGuard {
        manager: Rc::clone(head),
        id,
    }
}
