// Copyright (c) 2021 Google LLC
//
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/*!
The [`Compare`] trait and the leaf comparison strategies that back a
[`Comparator`](crate::Comparator).

Leaf strategies are plain structs rather than closures so that boxing them only requires the
captured functions to be `'static`, never the compared type itself. This lets a comparator order
borrowed values like `&str`.

# Total orders

[`Natural`], [`ByKey`] and [`ByKeyRef`] require [`Ord`]. Sorts rely on a comparator being a total
order and the standard library sorts may panic when it is not. Partially ordered values like floats
are compared through [`OrderingFn`] with a total comparison such as [`f64::total_cmp`]:

```
use comparity::{Comparator, Order};

let comparator = Comparator::<f64>::from_ordering(f64::total_cmp);
assert_eq!(comparator.compare(&1.0, &f64::NAN), Order::LessThan);
assert_eq!(comparator.compare(&f64::NAN, &1.0), Order::GreaterThan);
```
*/

use std::fmt;
use std::marker::PhantomData;

use crate::order::{Direction, Order};

/**
An interface for types that can order two values of type `T`.

Closures of the form `Fn(&T, &T) -> Order` implement this trait.
*/
pub trait Compare<T: ?Sized> {
    /**
    Return the order of `a` relative to `b`.

    Invariants:

    1. Returns [`Order::LessThan`] if `a` precedes `b`
    1. Returns [`Order::Equal`] if there is no preference between `a` and `b`
    1. Returns [`Order::GreaterThan`] if `a` follows `b`
    1. Repeated calls with equal inputs return equal results
    */
    fn compare(&self, a: &T, b: &T) -> Order;

    /// A short label describing the comparison strategy.
    fn name(&self) -> &str {
        "custom"
    }

    /**
    Returns true if `a` strictly precedes `b`.

    This is the predicate consumed by sorts that work on strict weak orderings.
    */
    fn is_in_increasing_order(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Order::LessThan
    }

    /// Return the smaller of two values, or `a` if they compare equal.
    fn min<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        if self.compare(a, b) == Order::GreaterThan {
            b
        } else {
            a
        }
    }

    /// Return the larger of two values, or `a` if they compare equal.
    fn max<'a>(&self, a: &'a T, b: &'a T) -> &'a T {
        if self.compare(a, b) == Order::LessThan {
            b
        } else {
            a
        }
    }
}

impl<T, F> Compare<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Order,
{
    fn compare(&self, a: &T, b: &T) -> Order {
        (*self)(a, b)
    }
}

/// A comparator that orders values by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<T> Compare<T> for Natural
where
    T: Ord + ?Sized,
{
    fn compare(&self, a: &T, b: &T) -> Order {
        a.cmp(b).into()
    }

    fn name(&self) -> &str {
        "natural"
    }
}

/**
A comparator that orders values by a key projected out of them.

The projection is evaluated exactly once for each side of a comparison.
*/
pub struct ByKey<F, K> {
    /// The projection of the compared value to its key.
    key: F,

    /// Whether smaller or larger keys come first.
    direction: Direction,

    _key: PhantomData<fn() -> K>,
}

/// Public methods
impl<F, K> ByKey<F, K> {
    /// Create a new [`ByKey`] comparator.
    pub fn new<T>(direction: Direction, key: F) -> Self
    where
        T: ?Sized,
        F: Fn(&T) -> K,
    {
        ByKey {
            key,
            direction,
            _key: PhantomData,
        }
    }
}

impl<T, K, F> Compare<T> for ByKey<F, K>
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    fn compare(&self, a: &T, b: &T) -> Order {
        let a_key = (self.key)(a);
        let b_key = (self.key)(b);

        self.direction.apply(a_key.cmp(&b_key).into())
    }

    fn name(&self) -> &str {
        "key"
    }
}

impl<F, K> fmt::Debug for ByKey<F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKey")
            .field("direction", &self.direction)
            .finish()
    }
}

/**
A comparator that orders values by a key borrowed from them.

This is the borrowing counterpart of [`ByKey`] for keys like string slices that should not be
cloned out of the value for every comparison.
*/
pub struct ByKeyRef<F, K: ?Sized> {
    /// The projection of the compared value to a reference to its key.
    key: F,

    /// Whether smaller or larger keys come first.
    direction: Direction,

    _key: PhantomData<fn(&K)>,
}

/// Public methods
impl<F, K: ?Sized> ByKeyRef<F, K> {
    /// Create a new [`ByKeyRef`] comparator.
    pub fn new<T>(direction: Direction, key: F) -> Self
    where
        T: ?Sized,
        F: Fn(&T) -> &K,
    {
        ByKeyRef {
            key,
            direction,
            _key: PhantomData,
        }
    }
}

impl<T, K, F> Compare<T> for ByKeyRef<F, K>
where
    T: ?Sized,
    K: Ord + ?Sized,
    F: Fn(&T) -> &K,
{
    fn compare(&self, a: &T, b: &T) -> Order {
        self.direction.apply((self.key)(a).cmp((self.key)(b)).into())
    }

    fn name(&self) -> &str {
        "key"
    }
}

impl<F, K: ?Sized> fmt::Debug for ByKeyRef<F, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByKeyRef")
            .field("direction", &self.direction)
            .finish()
    }
}

/// A comparator backed by a function returning a [`std::cmp::Ordering`].
pub struct OrderingFn<F>(pub F);

impl<T, F> Compare<T> for OrderingFn<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> std::cmp::Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Order {
        (self.0)(a, b).into()
    }

    fn name(&self) -> &str {
        "ordering"
    }
}

impl<F> fmt::Debug for OrderingFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrderingFn")
    }
}

/**
A comparator backed by an "are in increasing order" predicate, i.e. a strict less-than.

If neither `a < b` nor `b < a` holds, the values compare as [`Order::Equal`]. Equality is an
ordinary result and is never signalled through an error.
*/
pub struct IncreasingOrder<F>(pub F);

impl<T, F> Compare<T> for IncreasingOrder<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    fn compare(&self, a: &T, b: &T) -> Order {
        if (self.0)(a, b) {
            Order::LessThan
        } else if (self.0)(b, a) {
            Order::GreaterThan
        } else {
            Order::Equal
        }
    }

    fn name(&self) -> &str {
        "increasing_order"
    }
}

impl<F> fmt::Debug for IncreasingOrder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IncreasingOrder")
    }
}
