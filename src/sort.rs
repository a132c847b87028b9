/*!
Extensions for sorting sequences with a [`Comparator`].

Two flavors are provided:

1. [`SortedWith`] consumes any iterable and returns a new, sorted [`Vec`]. The input is not mutated.
1. [`SortWith`] sorts slices (and therefore vectors and arrays) **in place**.

Sorts are stable unless [`SortOptions`] request otherwise. The comparator may be called any number
of times, with any pair of elements and in any order.
*/

use crate::comparator::Comparator;
use crate::options::{SortOptions, Stability};
use crate::order::Order;

/// Sort the elements of any iterable into a new vector.
pub trait SortedWith: IntoIterator + Sized {
    /**
    Return the elements of the iterable, stably sorted with the given comparator.

    For every adjacent pair `(x, y)` of the result, `comparator.compare(x, y)` is
    [`Order::LessThan`] or [`Order::Equal`].

    # Example

    ```
    use comparity::{Comparator, SortedWith};

    let sorted = vec![3, 1, 2].sorted_with(&Comparator::natural());
    assert_eq!(sorted, vec![1, 2, 3]);
    ```
    */
    fn sorted_with(self, comparator: &Comparator<Self::Item>) -> Vec<Self::Item> {
        self.sorted_with_options(comparator, &SortOptions::default())
    }

    /// Return the elements of the iterable, sorted with the given comparator and options.
    fn sorted_with_options(
        self,
        comparator: &Comparator<Self::Item>,
        options: &SortOptions,
    ) -> Vec<Self::Item> {
        let mut elements: Vec<Self::Item> = self.into_iter().collect();
        elements.sort_with_options(comparator, options);

        elements
    }
}

impl<I: IntoIterator> SortedWith for I {}

/// Sort a slice in place.
pub trait SortWith<T> {
    /// Stably sort the slice in place with the given comparator.
    fn sort_with(&mut self, comparator: &Comparator<T>);

    /// Sort the slice in place with the given comparator and options.
    fn sort_with_options(&mut self, comparator: &Comparator<T>, options: &SortOptions);

    /**
    Returns true if every adjacent pair `(x, y)` of the slice compares as [`Order::LessThan`] or
    [`Order::Equal`].

    Empty and single element slices are sorted.
    */
    fn is_sorted_with(&self, comparator: &Comparator<T>) -> bool;
}

impl<T> SortWith<T> for [T] {
    fn sort_with(&mut self, comparator: &Comparator<T>) {
        self.sort_with_options(comparator, &SortOptions::default());
    }

    fn sort_with_options(&mut self, comparator: &Comparator<T>, options: &SortOptions) {
        log::trace!(
            "Sorting {} elements with a {} sort using {:?}",
            self.len(),
            options.stability(),
            comparator
        );

        match options.stability() {
            Stability::Stable => self.sort_by(|a, b| comparator.compare(a, b).into()),
            Stability::Unstable => self.sort_unstable_by(|a, b| comparator.compare(a, b).into()),
        }
    }

    fn is_sorted_with(&self, comparator: &Comparator<T>) -> bool {
        self.windows(2)
            .all(|pair| comparator.compare(&pair[0], &pair[1]) != Order::GreaterThan)
    }
}
