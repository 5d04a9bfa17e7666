//! Boot sequence
//!
//! Reads the lab config from the page, attaches the DOM sink, and wires the
//! input field to the shell. Each Enter press runs one command to
//! completion before the next event is handled.

use crate::config::SessionConfig;
use crate::console_log;
use crate::platform::web::{self, DomSink};
use crate::platform::{OutputSink, PlatformError, PlatformResult};
use crate::shell::Executor;
use std::cell::RefCell;

/// One lab session: the shell and where its output goes
struct Session {
    executor: Executor,
    sink: DomSink,
}

thread_local! {
    static SESSION: RefCell<Option<Session>> = RefCell::new(None);
}

/// Boot the terminal
pub fn boot() {
    match try_boot() {
        Ok(()) => console_log!("[boot] Terminal ready"),
        Err(e) => console_log!("[boot] {}", e),
    }
}

fn try_boot() -> PlatformResult<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| PlatformError::InitFailed("no document".into()))?;

    let config = web::read_config(&document).unwrap_or_else(|e| {
        // Keep the lab's capability even if its tree is broken
        console_log!("[boot] {}; using the default tree", e);
        let lab = document
            .query_selector("script[data-lab]")
            .ok()
            .flatten()
            .and_then(|s| s.get_attribute("data-lab"));
        SessionConfig::from_lab(lab.as_deref())
    });
    console_log!("[boot] lab={}", config.capability);

    let mut sink = DomSink::attach(&document)?;
    let executor = Executor::from_config(config);
    sink.set_prompt(&executor.prompt());

    SESSION.with(|s| {
        *s.borrow_mut() = Some(Session { executor, sink });
    });

    web::bind_input(&document, |line| {
        SESSION.with(|s| {
            if let Some(session) = s.borrow_mut().as_mut() {
                session.executor.submit(&line, &mut session.sink);
            }
        });
    })
}
