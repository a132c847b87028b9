/*!
Comparity is a small library for building composable comparators. A [`Comparator`] is a first-class
value describing how two values of the same type are ordered. Comparators can be built from raw
comparison logic, from a key projected out of the compared values or from a type's natural order.
They can be chained so that later comparators break the ties of earlier ones, and they can be
inverted to flip the ordering direction.

Comparisons report an [`Order`], a three-valued result. [`Order::Equal`] is an ordinary outcome
that lets a chain fall through to its next comparator; it is never treated as an error.

```
use comparity::{Comparator, Direction, Order, SortedWith};

#[derive(Debug, PartialEq)]
struct Record {
    int: i32,
    string: &'static str,
}

let comparator = Comparator::by_key(|record: &Record| record.int)
    .chaining_key(Direction::Descending, |record: &Record| record.string);

let records = vec![
    Record { int: 1, string: "a" },
    Record { int: 0, string: "a" },
    Record { int: 1, string: "b" },
];
let sorted = records.sorted_with(&comparator);

assert_eq!(sorted[0], Record { int: 0, string: "a" });
assert_eq!(sorted[1], Record { int: 1, string: "b" });
assert_eq!(comparator.compare(&sorted[1], &sorted[2]), Order::LessThan);
```
*/

#![warn(missing_debug_implementations, missing_docs)]

pub mod compare;
pub use compare::Compare;

mod comparator;
pub use comparator::Comparator;

pub mod options;
pub use options::{SortOptions, Stability};

mod order;
pub use order::{Direction, Order};

mod sort;
pub use sort::{SortWith, SortedWith};
