use std::cell::RefCell;
use std::rc::Rc;

use super::command::CommandFactory;
use super::exec::ExecCommandFactory;

thread_local! {
    static ACTIVE: RefCell<Rc<dyn CommandFactory>> = RefCell::new(Rc::new(ExecCommandFactory) as Rc<dyn CommandFactory>);
}

/// The factory currently bound on this thread. Defaults to [`ExecCommandFactory`].
#[must_use]
pub fn active_factory() -> Rc<dyn CommandFactory> {
    ACTIVE.with(|active| Rc::clone(&active.borrow()))
}

/// Install `factory` on this thread and hand back the one it replaced.
pub fn set_active_factory(factory: Rc<dyn CommandFactory>) -> Rc<dyn CommandFactory> {
    ACTIVE.with(|active| active.replace(factory))
}

/// Install `factory` until the returned guard is dropped.
///
/// The previous factory comes back on every exit path, unwinding included.
pub fn replace_factory(factory: Rc<dyn CommandFactory>) -> FactoryGuard {
    FactoryGuard {
        previous: Some(set_active_factory(factory)),
    }
}

#[must_use = "dropping the guard restores the previous factory immediately"]
pub struct FactoryGuard {
    previous: Option<Rc<dyn CommandFactory>>,
}

impl Drop for FactoryGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            // try_with: the thread-local may already be gone during thread teardown.
            let _ = ACTIVE.try_with(|active| active.replace(previous));
        }
    }
}
