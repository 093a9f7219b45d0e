#![allow(dead_code)]
use outcomes::Outcome;
use std::{cell::RefCell, fmt::Debug, rc::Rc};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Records every value a transformation was called with.
#[derive(Clone)]
pub struct Probe<V> {
    calls: Rc<RefCell<Vec<V>>>,
}

impl<V> Probe<V>
where
    V: Clone,
{
    pub fn new() -> Self {
        Self {
            calls: Rc::new(RefCell::new(vec![])),
        }
    }

    pub fn record(&self, value: V) {
        self.calls.borrow_mut().push(value);
    }

    /// Wraps `f` so that every argument is recorded before `f` runs.
    pub fn wrap<R, F>(&self, mut f: F) -> impl FnMut(V) -> R
    where
        F: FnMut(V) -> R,
    {
        let probe = self.clone();
        move |value| {
            probe.record(value.clone());
            f(value)
        }
    }

    pub fn calls(&self) -> Vec<V> {
        self.calls.borrow().clone()
    }
}

pub struct FoldCaseBuilder<T, E> {
    name: Option<String>,
    fold: Box<dyn FnOnce() -> Outcome<Vec<T>, E>>,
    expected: Option<Outcome<Vec<T>, E>>,
}

impl<T, E> FoldCaseBuilder<T, E>
where
    T: Debug + PartialEq,
    E: Debug + PartialEq,
{
    pub fn new<F>(fold: F) -> Self
    where
        F: FnOnce() -> Outcome<Vec<T>, E> + 'static,
    {
        Self {
            name: None,
            fold: Box::new(fold),
            expected: None,
        }
    }

    pub fn name<N: ToString>(mut self, name: N) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn expected(mut self, expected: Outcome<Vec<T>, E>) -> Self {
        self.expected = Some(expected);
        self
    }

    pub fn run(self) -> anyhow::Result<()> {
        init_logger();

        let expected = self
            .expected
            .ok_or_else(|| anyhow::anyhow!("fold case without expected outcome"))?;
        let got = (self.fold)();

        assert_eq!(
            got,
            expected,
            "test case {}, left: {:?}, right: {:?}",
            self.name.unwrap_or_default(),
            got,
            expected
        );

        Ok(())
    }
}
