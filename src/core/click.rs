//! # Click Composition
//!
//! Every clickable row gets one handler that runs the node's own effect and
//! then dismisses the menu:
//!
//! ```text
//! invoke() ─► node.on_click()? ─► dismiss()
//!                  │
//!                  └─ Err ─► returned to the caller, dismiss skipped
//! ```

use std::fmt;
use std::rc::Rc;

use crate::core::node::{ClickEffect, ClickEffectError, NavNode};

/// Shared callback that closes the containing menu.
pub type Dismiss = Rc<dyn Fn()>;

#[derive(Clone)]
pub struct ClickHandler {
    effect: Option<ClickEffect>,
    dismiss: Dismiss,
}

impl ClickHandler {
    pub fn invoke(&self) -> Result<(), ClickEffectError> {
        if let Some(effect) = &self.effect {
            effect()?;
        }
        (self.dismiss)();
        Ok(())
    }
}

impl fmt::Debug for ClickHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickHandler")
            .field("has_effect", &self.effect.is_some())
            .finish()
    }
}

pub fn compose_click(node: &NavNode, dismiss: &Dismiss) -> ClickHandler {
    ClickHandler {
        effect: node.on_click.clone(),
        dismiss: Rc::clone(dismiss),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn recorder() -> Rc<RefCell<Vec<&'static str>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    fn dismiss_into(log: &Rc<RefCell<Vec<&'static str>>>) -> Dismiss {
        let log = Rc::clone(log);
        Rc::new(move || log.borrow_mut().push("dismiss"))
    }

    #[test]
    fn test_effect_runs_before_dismiss() {
        let log = recorder();
        let effect_log = Rc::clone(&log);
        let node = NavNode::new("Home").on_click(move || {
            effect_log.borrow_mut().push("effect");
            Ok(())
        });

        let handler = compose_click(&node, &dismiss_into(&log));
        handler.invoke().unwrap();

        assert_eq!(*log.borrow(), vec!["effect", "dismiss"]);
    }

    #[test]
    fn test_without_effect_only_dismisses() {
        let log = recorder();
        let node = NavNode::new("Home");

        compose_click(&node, &dismiss_into(&log)).invoke().unwrap();

        assert_eq!(*log.borrow(), vec!["dismiss"]);
    }

    #[test]
    fn test_failing_effect_skips_dismiss() {
        let log = recorder();
        let node = NavNode::new("Broken")
            .on_click(|| Err(ClickEffectError("backend unavailable".to_string())));

        let err = compose_click(&node, &dismiss_into(&log))
            .invoke()
            .unwrap_err();

        assert_eq!(err, ClickEffectError("backend unavailable".to_string()));
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_each_invocation_runs_once_per_call() {
        let log = recorder();
        let effect_log = Rc::clone(&log);
        let node = NavNode::new("Home").on_click(move || {
            effect_log.borrow_mut().push("effect");
            Ok(())
        });
        let handler = compose_click(&node, &dismiss_into(&log));

        handler.invoke().unwrap();
        handler.invoke().unwrap();

        assert_eq!(
            *log.borrow(),
            vec!["effect", "dismiss", "effect", "dismiss"]
        );
    }

    #[test]
    fn test_failure_does_not_poison_handler() {
        let attempts = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&attempts);
        let node = NavNode::new("Flaky").on_click(move || {
            *counter.borrow_mut() += 1;
            if *counter.borrow() == 1 {
                Err(ClickEffectError("first try".to_string()))
            } else {
                Ok(())
            }
        });
        let log = recorder();
        let handler = compose_click(&node, &dismiss_into(&log));

        assert!(handler.invoke().is_err());
        assert!(handler.invoke().is_ok());
        assert_eq!(*log.borrow(), vec!["dismiss"]);
    }
}
