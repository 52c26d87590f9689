//! Dismissible regions: popovers that close when the pointer goes down
//! outside of them.
//!
//! One window `mousedown` listener serves every registered region. Each
//! region supplies a containment test and a close callback; on dispatch every
//! region that does not contain the event target is closed.

use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;
use leptos::{ev, html};
use wasm_bindgen::JsCast as _;

type Contains<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;
type Close = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionId(u64);

struct Region<T> {
    id: RegionId,
    contains: Contains<T>,
    close: Close,
}

struct Regions<T> {
    next_id: u64,
    entries: Vec<Region<T>>,
}

pub struct DismissRegistry<T> {
    regions: Arc<Mutex<Regions<T>>>,
}

impl<T> Clone for DismissRegistry<T> {
    fn clone(&self) -> Self {
        Self {
            regions: Arc::clone(&self.regions),
        }
    }
}

impl<T> Default for DismissRegistry<T> {
    fn default() -> Self {
        Self {
            regions: Arc::new(Mutex::new(Regions {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }
}

impl<T> DismissRegistry<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_regions<R>(&self, f: impl FnOnce(&mut Regions<T>) -> R) -> R {
        let mut regions = self.regions.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut regions)
    }

    pub fn register(
        &self,
        contains: impl Fn(&T) -> bool + Send + Sync + 'static,
        close: impl Fn() + Send + Sync + 'static,
    ) -> RegionId {
        self.with_regions(|regions| {
            let id = RegionId(regions.next_id);
            regions.next_id += 1;
            regions.entries.push(Region {
                id,
                contains: Box::new(contains),
                close: Arc::new(close),
            });
            id
        })
    }

    pub fn unregister(&self, id: RegionId) {
        self.with_regions(|regions| regions.entries.retain(|region| region.id != id));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.with_regions(|regions| regions.entries.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Closes every region that does not contain `target`. Callbacks run
    /// after the registry lock is released.
    pub fn dispatch(&self, target: &T) {
        let to_close: Vec<Close> = self.with_regions(|regions| {
            regions
                .entries
                .iter()
                .filter(|region| !(region.contains)(target))
                .map(|region| Arc::clone(&region.close))
                .collect()
        });
        for close in to_close {
            close();
        }
    }
}

/// Provides the page-wide registry and attaches its pointer listener after
/// mount. The listener is removed when the owner is cleaned up.
pub fn provide_dismiss_registry() -> DismissRegistry<web_sys::Node> {
    let registry = DismissRegistry::new();
    provide_context(registry.clone());

    let listener_registry = registry.clone();
    Effect::new(move || {
        let registry = listener_registry.clone();
        let handle = window_event_listener(ev::mousedown, move |event| {
            if let Some(target) = event
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            {
                registry.dispatch(&target);
            }
        });
        on_cleanup(move || handle.remove());
    });

    registry
}

/// Registers `node` as a dismissible region for the lifetime of the calling
/// component. While the node is not mounted nothing is closed.
pub fn use_dismissible(node: NodeRef<html::Div>, close: impl Fn() + Send + Sync + 'static) {
    let Some(registry) = use_context::<DismissRegistry<web_sys::Node>>() else {
        return;
    };
    let id = registry.register(
        move |target: &web_sys::Node| {
            node.get_untracked()
                .is_none_or(|element| element.contains(Some(target)))
        },
        close,
    );
    on_cleanup(move || registry.unregister(id));
}
