//! Process-wide discovery context.
//!
//! # Responsibility
//! - Lazily construct one shared context and auto-initialize it from the
//!   properties resource on the installed loader's search path.
//! - Allow an explicit reset so the next access rebuilds from scratch.
//!
//! # Invariants
//! - Construction happens under a lock: concurrent first access builds and
//!   initializes exactly once.
//! - A failed auto-initialization is logged, never returned; the instance
//!   stays present and uninitialized.
//! - Callers must not interleave reads with `reset`; an `Arc` obtained
//!   before a reset keeps pointing at the discarded instance.

use crate::context::SdkContext;
use crate::loader::Loader;
use log::{error, info};
use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

static LOADER: Lazy<RwLock<Loader>> = Lazy::new(|| RwLock::new(Loader::default()));
static INSTANCE: Lazy<Mutex<Option<Arc<SdkContext>>>> = Lazy::new(|| Mutex::new(None));

/// Sets the loader used by the next construction.
///
/// An existing instance is not affected until [`reset`] is called.
pub fn install_loader(loader: Loader) {
    let mut slot = LOADER.write().unwrap_or_else(PoisonError::into_inner);
    *slot = loader;
}

/// Returns the shared context, constructing it on first use.
pub fn get_instance() -> Arc<SdkContext> {
    let mut slot = INSTANCE.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(instance) = slot.as_ref() {
        return Arc::clone(instance);
    }

    let loader = LOADER
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    let mut context = SdkContext::new(loader);
    match context.init_from_search_path() {
        Ok(()) => info!(
            "event=context_autoinit module=context status=ok initialized={}",
            context.is_initialized()
        ),
        Err(err) => error!(
            "event=context_autoinit module=context status=error error={}",
            err
        ),
    }

    let instance = Arc::new(context);
    *slot = Some(Arc::clone(&instance));
    instance
}

/// Drops the shared context; the next [`get_instance`] rebuilds it.
pub fn reset() {
    let mut slot = INSTANCE.lock().unwrap_or_else(PoisonError::into_inner);
    if slot.take().is_some() {
        info!("event=context_reset module=context status=ok");
    }
}
