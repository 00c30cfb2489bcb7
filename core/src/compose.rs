/// A success type that knows how to merge with another value of itself.
///
/// Used by [`Chain::evaluate`](crate::chain::Chain::evaluate). The chain
/// calls `newest.compose(accumulated)`, so the receiver is always the more
/// recent value. Implementations must be total; a failing merge belongs in
/// a producer, not here.
pub trait Compose {
    fn compose(self, other: Self) -> Self;
}

impl Compose for String {
    fn compose(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Compose for Vec<T> {
    fn compose(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}
