pub use crate::curry::{bind, bind_at, bind_range, lit, CurryArg};
pub use crate::value::Value;


// Value domain of a delegate. absent() stands in for invocation arguments
// that were never supplied.
pub trait Argument: Clone {
    fn absent() -> Self;
}

impl<T: Clone> Argument for Option<T> {
    fn absent() -> Self { None }
}

// Chosen once when the delegate is bound, never revisited.
enum Strategy<V> {
    Forward,
    Fixed(Vec<V>),
    Resolving(Vec<CurryArg<V>>)
}

impl<V> Strategy<V> {
    fn select(curry: Vec<CurryArg<V>>) -> Strategy<V> {
        if curry.is_empty() {
            return Strategy::Forward;
        }
        let bound = curry.iter().any(|arg| arg.is_placeholder());
        if bound {
            Strategy::Resolving(curry)
        } else {
            let fixed = curry.into_iter().map(|arg| match arg {
                CurryArg::Literal(value) => value,
                CurryArg::Placeholder(_) => unreachable!()
            }).collect();
            Strategy::Fixed(fixed)
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Strategy::Forward => "forward",
            Strategy::Fixed(_) => "fixed",
            Strategy::Resolving(_) => "resolving"
        }
    }
}

// A receiver, a callable, and the curry strategy chosen at bind time.
pub struct Delegate<R, F, V> {
    receiver: R,
    callable: F,
    strategy: Strategy<V>
}

// Bind `receiver` and a curry sequence onto `callable`. The sequence is
// scanned here, once; `callable` only needs to be invocable once the
// delegate is actually called.
pub fn delegate<R, F, V>(receiver: R, callable: F, curry: Vec<CurryArg<V>>) -> Delegate<R, F, V> {
    Delegate::new(receiver, callable, curry)
}

impl<R, F, V> Delegate<R, F, V> {
    pub fn new(receiver: R, callable: F, curry: Vec<CurryArg<V>>) -> Self {
        let strategy = Strategy::select(curry);
        log::trace!(target: "delegate", "bound {} delegate", strategy.name());
        Delegate { receiver, callable, strategy }
    }

    // Each invocation assembles its own argument list; requested-but-missing
    // arguments resolve to Argument::absent().
    pub fn call<O>(&self, args: &[V]) -> O
            where F: Fn(&R, &[V]) -> O, V: Argument {
        match &self.strategy {
            Strategy::Forward => (self.callable)(&self.receiver, args),
            Strategy::Fixed(fixed) => (self.callable)(&self.receiver, fixed),
            Strategy::Resolving(curry) => {
                let params = resolve(curry, args);
                log::trace!(target: "delegate", "resolved {} curry elements against {} call arguments",
                            curry.len(), args.len());
                (self.callable)(&self.receiver, &params)
            }
        }
    }
}

// Walks the curry sequence with the invocation-local implicit cursor. An
// explicit index also moves the cursor, to index + 1 (saturating; an
// oversized index keeps every later implicit lookup out of range).
fn resolve<V: Argument>(curry: &[CurryArg<V>], args: &[V]) -> Vec<V> {
    let mut params = Vec::with_capacity(curry.len());
    let mut next = 0;
    for arg in curry {
        match arg {
            CurryArg::Literal(value) => params.push(value.clone()),
            CurryArg::Placeholder(Some(index)) => {
                params.push(pick(args, *index));
                next = index.saturating_add(1);
            },
            CurryArg::Placeholder(None) => {
                params.push(pick(args, next));
                next = next.saturating_add(1);
            }
        }
    }
    params
}

fn pick<V: Argument>(args: &[V], index: usize) -> V {
    match args.get(index) {
        Some(value) => value.clone(),
        None => V::absent()
    }
}
