use std::ops::Range;

// One element of a curry sequence: a value fixed at bind time, or a
// placeholder filled from the invocation's own arguments, either at an
// explicit index or at the next available one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurryArg<V> {
    Literal(V),
    Placeholder(Option<usize>)
}

impl<V> CurryArg<V> {
    pub fn is_placeholder(&self) -> bool {
        match self { CurryArg::Placeholder(_) => true, _ => false }
    }
}

impl<V> From<V> for CurryArg<V> {
    fn from(value: V) -> Self {
        CurryArg::Literal(value)
    }
}

pub fn bind<V>() -> CurryArg<V> {
    CurryArg::Placeholder(None)
}

pub fn bind_at<V>(index: usize) -> CurryArg<V> {
    CurryArg::Placeholder(Some(index))
}

pub fn lit<V>(value: V) -> CurryArg<V> {
    CurryArg::Literal(value)
}

// Explicit placeholders for every index in `range`, in order.
pub fn bind_range<V>(range: Range<usize>) -> Vec<CurryArg<V>> {
    range.map(|index| CurryArg::Placeholder(Some(index))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(bind::<i64>(), CurryArg::Placeholder(None));
        assert_eq!(bind_at::<i64>(4), CurryArg::Placeholder(Some(4)));
        assert_eq!(lit(7), CurryArg::Literal(7));
        assert_eq!(CurryArg::from(7), CurryArg::Literal(7));
        assert!(bind::<i64>().is_placeholder());
        assert!(!lit(7).is_placeholder());
    }

    #[test]
    fn test_bind_range() {
        assert_eq!(bind_range::<i64>(1..4),
                   vec![bind_at(1), bind_at(2), bind_at(3)]);
        assert!(bind_range::<i64>(3..3).is_empty());
    }
}
