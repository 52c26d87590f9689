//! One fullscreen interface over the standard and vendor-prefixed browser
//! APIs.
//!
//! Variants are tried in order and the first one the browser implements is
//! used. Requests may be asynchronous or denied, so callers track the real
//! state through [`on_change`] instead of trusting the request.

use std::rc::Rc;

use js_sys::{Function, Promise, Reflect};
use leptos::logging;
use leptos::prelude::*;
use thiserror::Error;
use wasm_bindgen::{JsCast as _, JsValue, closure::Closure};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FullscreenVariant {
    pub name: &'static str,
    /// Method on the element.
    pub request: &'static str,
    /// Method on the document.
    pub exit: &'static str,
    /// Document property holding the fullscreen element.
    pub element: &'static str,
    pub change_event: &'static str,
}

pub const VARIANTS: [FullscreenVariant; 3] = [
    FullscreenVariant {
        name: "standard",
        request: "requestFullscreen",
        exit: "exitFullscreen",
        element: "fullscreenElement",
        change_event: "fullscreenchange",
    },
    FullscreenVariant {
        name: "webkit",
        request: "webkitRequestFullscreen",
        exit: "webkitExitFullscreen",
        element: "webkitFullscreenElement",
        change_event: "webkitfullscreenchange",
    },
    FullscreenVariant {
        name: "ms",
        request: "msRequestFullscreen",
        exit: "msExitFullscreen",
        element: "msFullscreenElement",
        change_event: "MSFullscreenChange",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FullscreenError {
    #[error("fullscreen is not supported by this browser")]
    Unsupported,
    #[error("fullscreen call failed: {0}")]
    Rejected(String),
}

/// The first variant for which `has_method` holds, in [`VARIANTS`] order.
pub fn first_supported(
    has_method: impl Fn(&'static str) -> bool,
    pick: fn(&FullscreenVariant) -> &'static str,
) -> Option<FullscreenVariant> {
    VARIANTS.into_iter().find(|variant| has_method(pick(variant)))
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// A call that can still fail after it returns, like the `Promise` from
/// `requestFullscreen`.
pub trait PendingCall {
    fn on_reject(&self, handler: Box<dyn FnOnce(String)>);
}

impl PendingCall for Promise {
    fn on_reject(&self, handler: Box<dyn FnOnce(String)>) {
        let on_reject = Closure::once(move |reason: JsValue| handler(format!("{reason:?}")));
        _ = self.catch(&on_reject);
        on_reject.forget();
    }
}

/// Hands a later rejection of `pending` to `report`.
pub fn watch_rejection(pending: &impl PendingCall, report: impl FnOnce(FullscreenError) + 'static) {
    pending.on_reject(Box::new(move |reason| report(FullscreenError::Rejected(reason))));
}

fn call(
    target: &JsValue,
    pick: fn(&FullscreenVariant) -> &'static str,
) -> Result<(), FullscreenError> {
    let variant = first_supported(|name| method(target, name).is_some(), pick)
        .ok_or(FullscreenError::Unsupported)?;
    let function = method(target, pick(&variant)).ok_or(FullscreenError::Unsupported)?;
    let returned = function
        .call0(target)
        .map_err(|err| FullscreenError::Rejected(format!("{err:?}")))?;
    // Older prefixed APIs return nothing.
    if let Some(promise) = returned.dyn_ref::<Promise>() {
        watch_rejection(promise, |err| logging::warn!("Fullscreen request rejected: {err}"));
    }
    Ok(())
}

/// Asks the browser to show `element` fullscreen.
pub fn request(element: &web_sys::Element) -> Result<(), FullscreenError> {
    let target: &JsValue = element.as_ref();
    call(target, |variant| variant.request)
}

pub fn exit() -> Result<(), FullscreenError> {
    let document: JsValue = document().into();
    call(&document, |variant| variant.exit)
}

/// Whether any element is currently fullscreen, by any variant.
pub fn is_active() -> bool {
    let document: JsValue = document().into();
    VARIANTS.iter().any(|variant| {
        Reflect::get(&document, &JsValue::from_str(variant.element))
            .is_ok_and(|element| !element.is_null() && !element.is_undefined())
    })
}

/// Change listeners for every variant; dropped listeners stay attached until
/// [`FullscreenSubscription::cancel`] is called.
pub struct FullscreenSubscription {
    handles: Vec<WindowListenerHandle>,
}

impl FullscreenSubscription {
    pub fn cancel(self) {
        for handle in self.handles {
            handle.remove();
        }
    }
}

/// Calls `callback` with the current fullscreen state after every change.
pub fn on_change(callback: impl Fn(bool) + 'static) -> FullscreenSubscription {
    let callback: Rc<dyn Fn(bool)> = Rc::new(callback);
    let handles = VARIANTS
        .iter()
        .map(|variant| {
            let callback = Rc::clone(&callback);
            window_event_listener_untyped(variant.change_event, move |_| callback(is_active()))
        })
        .collect();
    FullscreenSubscription { handles }
}

/// Enters or leaves fullscreen. Failures are logged; state follows
/// [`on_change`].
pub fn toggle(element: Option<&web_sys::Element>, currently_fullscreen: bool) {
    let result = if currently_fullscreen {
        exit()
    } else {
        element.map_or(Err(FullscreenError::Unsupported), request)
    };
    if let Err(err) = result {
        logging::warn!("Fullscreen toggle failed: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashSet;

    #[test]
    fn standard_api_is_preferred() {
        let variant = first_supported(|_| true, |v| v.request).unwrap();
        assert_eq!(variant.name, "standard");
    }

    #[test]
    fn falls_back_in_order() {
        let variant = first_supported(
            |name| name.starts_with("webkit") || name.starts_with("ms"),
            |v| v.request,
        )
        .unwrap();
        assert_eq!(variant.name, "webkit");

        let variant = first_supported(|name| name == "msExitFullscreen", |v| v.exit).unwrap();
        assert_eq!(variant.name, "ms");
    }

    #[test]
    fn nothing_supported() {
        assert_eq!(first_supported(|_| false, |v| v.request), None);
    }

    #[test]
    fn every_variant_has_distinct_change_event() {
        let events: HashSet<_> = VARIANTS.iter().map(|v| v.change_event).collect();
        assert_eq!(events.len(), VARIANTS.len());
    }

    struct Settled(Option<&'static str>);

    impl PendingCall for Settled {
        fn on_reject(&self, handler: Box<dyn FnOnce(String)>) {
            if let Some(reason) = self.0 {
                handler(reason.to_owned());
            }
        }
    }

    fn reported(pending: &Settled) -> Option<FullscreenError> {
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        watch_rejection(pending, move |err| *sink.borrow_mut() = Some(err));
        seen.take()
    }

    #[test]
    fn late_rejection_is_reported() {
        assert_eq!(
            reported(&Settled(Some("NotAllowedError"))),
            Some(FullscreenError::Rejected("NotAllowedError".to_owned()))
        );
    }

    #[test]
    fn granted_request_reports_nothing() {
        assert_eq!(reported(&Settled(None)), None);
    }
}
