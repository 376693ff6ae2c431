//! Composable boolean predicates.
//!
//! A [`Specification`] answers a single yes/no question about a candidate.
//! [`And`], [`Or`] and [`Not`] are specifications themselves, so rules can be
//! combined into larger expressions and reused.
//!
//! # Example
//!
//! ```
//! use roster_engine::specification::{Specification, SpecificationExt};
//!
//! struct Even;
//! impl Specification<i32> for Even {
//!     fn is_satisfied_by(&self, candidate: &i32) -> bool {
//!         candidate % 2 == 0
//!     }
//! }
//!
//! struct Positive;
//! impl Specification<i32> for Positive {
//!     fn is_satisfied_by(&self, candidate: &i32) -> bool {
//!         *candidate > 0
//!     }
//! }
//!
//! let even_and_positive = Even.and(Positive);
//! assert!(even_and_positive.is_satisfied_by(&4));
//! assert!(!even_and_positive.is_satisfied_by(&-4));
//! assert!(Even.not().or(Positive).is_satisfied_by(&3));
//! ```

/// A side-effect-free predicate over candidates of type `T`.
pub trait Specification<T: ?Sized> {
    /// Returns true if `candidate` meets this specification.
    fn is_satisfied_by(&self, candidate: &T) -> bool;
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for &S {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (**self).is_satisfied_by(candidate)
    }
}

impl<T: ?Sized, S: Specification<T> + ?Sized> Specification<T> for Box<S> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        (**self).is_satisfied_by(candidate)
    }
}

/// Satisfied when both inner specifications are.
#[derive(Debug, Clone, Copy)]
pub struct And<A, B>(pub A, pub B);

impl<T: ?Sized, A: Specification<T>, B: Specification<T>> Specification<T> for And<A, B> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.0.is_satisfied_by(candidate) && self.1.is_satisfied_by(candidate)
    }
}

/// Satisfied when at least one inner specification is.
#[derive(Debug, Clone, Copy)]
pub struct Or<A, B>(pub A, pub B);

impl<T: ?Sized, A: Specification<T>, B: Specification<T>> Specification<T> for Or<A, B> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        self.0.is_satisfied_by(candidate) || self.1.is_satisfied_by(candidate)
    }
}

/// Satisfied when the inner specification is not.
#[derive(Debug, Clone, Copy)]
pub struct Not<A>(pub A);

impl<T: ?Sized, A: Specification<T>> Specification<T> for Not<A> {
    fn is_satisfied_by(&self, candidate: &T) -> bool {
        !self.0.is_satisfied_by(candidate)
    }
}

/// Combinator methods available on every specification.
pub trait SpecificationExt<T: ?Sized>: Specification<T> + Sized {
    /// `self AND other`.
    fn and<B: Specification<T>>(self, other: B) -> And<Self, B> {
        And(self, other)
    }

    /// `self OR other`.
    fn or<B: Specification<T>>(self, other: B) -> Or<Self, B> {
        Or(self, other)
    }

    /// `NOT self`.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, S: Specification<T>> SpecificationExt<T> for S {}
