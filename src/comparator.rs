/*!
This module contains [`Comparator`], a reusable and composable rule for ordering two values of the
same type.

# Composition

A comparator is immutable. Chaining and inversion never modify their operands; they produce a new
comparator that shares the operands through reference counting. Because comparators are only ever
built from already existing comparators, a comparator can never reference itself and reference
cycles are impossible.

A chain evaluates its members from left to right and returns the first result that is not
[`Order::Equal`]. An empty chain, or a chain whose members all report [`Order::Equal`], reports
[`Order::Equal`].

# Concurrency

All strategies held by a comparator are required to be `Send + Sync`, so a comparator can be cloned
into other threads and used there without synchronization.
*/

use std::fmt;
use std::sync::Arc;

use crate::compare::{ByKey, ByKeyRef, Compare, IncreasingOrder, Natural, OrderingFn};
use crate::order::{Direction, Order};

/// The comparison strategy held by a [`Comparator`].
enum Strategy<T: ?Sized> {
    /// A strategy that compares values directly.
    Leaf(Box<dyn Compare<T> + Send + Sync>),

    /// Comparators consulted from left to right until one of them reports a preference.
    Chain(Vec<Comparator<T>>),

    /// A comparator whose results are reversed.
    Inverted(Comparator<T>),
}

/**
A rule for ordering two values of type `T`.

Cloning a comparator is cheap and yields a comparator with identical behavior.

# Example

```
use comparity::{Comparator, Order};

struct Pet {
    name: String,
    age: u8,
}

let by_age_then_name = Comparator::by_key(|pet: &Pet| pet.age)
    .chaining(Comparator::by_key_ref(|pet: &Pet| pet.name.as_str()));

let fido = Pet { name: "Fido".to_string(), age: 3 };
let rex = Pet { name: "Rex".to_string(), age: 3 };
assert_eq!(by_age_then_name.compare(&fido, &rex), Order::LessThan);
assert_eq!(by_age_then_name.inverted().compare(&fido, &rex), Order::GreaterThan);
```
*/
pub struct Comparator<T: ?Sized> {
    strategy: Arc<Strategy<T>>,
}

/// Constructors
impl<T: ?Sized> Comparator<T> {
    /// Create a comparator from any [`Compare`] implementation.
    pub fn new<C>(compare: C) -> Self
    where
        C: Compare<T> + Send + Sync + 'static,
    {
        Comparator::from_strategy(Strategy::Leaf(Box::new(compare)))
    }

    /**
    Create a comparator from raw comparison logic.

    This is the foundational constructor. Every other constructor can be expressed in terms of it.
    */
    pub fn from_fn<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> Order + Send + Sync + 'static,
    {
        Comparator::new(compare)
    }

    /**
    Create a comparator from a function returning a [`std::cmp::Ordering`].

    This is the way to order values that are only partially ordered. Floats, for example, are
    compared with [`f64::total_cmp`] or [`f32::total_cmp`], which place NaN consistently instead of
    leaving it incomparable.
    */
    pub fn from_ordering<F>(compare: F) -> Self
    where
        F: Fn(&T, &T) -> std::cmp::Ordering + Send + Sync + 'static,
    {
        Comparator::new(OrderingFn(compare))
    }

    /**
    Create a comparator from a predicate that returns true when its arguments are in strictly
    increasing order.

    Values for which the predicate holds in neither direction compare as [`Order::Equal`].
    */
    pub fn from_increasing_order<F>(are_in_increasing_order: F) -> Self
    where
        F: Fn(&T, &T) -> bool + Send + Sync + 'static,
    {
        Comparator::new(IncreasingOrder(are_in_increasing_order))
    }

    /**
    Create a comparator that orders values by ascending keys projected out of them.

    The key is computed exactly once for each side of a comparison. Keys that are equal compare as
    [`Order::Equal`].
    */
    pub fn by_key<K, F>(key: F) -> Self
    where
        K: Ord + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Comparator::by_key_with_direction(Direction::Ascending, key)
    }

    /**
    Create a comparator that orders values by keys projected out of them in the given direction.

    `true` converts to [`Direction::Ascending`] and `false` to [`Direction::Descending`]. A
    descending key comparator is equivalent to the inversion of the ascending one.
    */
    pub fn by_key_with_direction<D, K, F>(direction: D, key: F) -> Self
    where
        D: Into<Direction>,
        K: Ord + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        Comparator::new(ByKey::new(direction.into(), key))
    }

    /// Create a comparator that orders values by ascending keys borrowed from them.
    pub fn by_key_ref<K, F>(key: F) -> Self
    where
        K: Ord + ?Sized + 'static,
        F: Fn(&T) -> &K + Send + Sync + 'static,
    {
        Comparator::by_key_ref_with_direction(Direction::Ascending, key)
    }

    /// Create a comparator that orders values by keys borrowed from them in the given direction.
    pub fn by_key_ref_with_direction<D, K, F>(direction: D, key: F) -> Self
    where
        D: Into<Direction>,
        K: Ord + ?Sized + 'static,
        F: Fn(&T) -> &K + Send + Sync + 'static,
    {
        Comparator::new(ByKeyRef::new(direction.into(), key))
    }

    /**
    Create a comparator that consults `comparators` from left to right and reports the first result
    that is not [`Order::Equal`].

    An empty chain reports [`Order::Equal`] for all inputs. Members that are chains themselves are
    flattened into the new chain.
    */
    pub fn chain<I>(comparators: I) -> Self
    where
        I: IntoIterator<Item = Comparator<T>>,
    {
        let mut members: Vec<Comparator<T>> = vec![];
        for comparator in comparators {
            if let Strategy::Chain(nested) = &*comparator.strategy {
                members.extend(nested.iter().cloned());
                continue;
            }

            members.push(comparator);
        }

        log::trace!("Composing a chain of {} comparators", members.len());
        Comparator::from_strategy(Strategy::Chain(members))
    }

    fn from_strategy(strategy: Strategy<T>) -> Self {
        Comparator {
            strategy: Arc::new(strategy),
        }
    }
}

/// Constructors for types with a natural order
impl<T> Comparator<T>
where
    T: Ord + ?Sized,
{
    /// Create a comparator that orders values by their [`Ord`] implementation.
    pub fn natural() -> Self {
        Comparator::new(Natural)
    }
}

/// Public methods
impl<T: ?Sized> Comparator<T> {
    /// Return the order of `a` relative to `b`.
    pub fn compare(&self, a: &T, b: &T) -> Order {
        match &*self.strategy {
            Strategy::Leaf(compare) => compare.compare(a, b),
            Strategy::Chain(comparators) => comparators
                .iter()
                .map(|comparator| comparator.compare(a, b))
                .find(|order| *order != Order::Equal)
                .unwrap_or(Order::Equal),
            Strategy::Inverted(comparator) => comparator.compare(a, b).reverse(),
        }
    }

    /**
    Return a comparator whose results are the exact opposite of this comparator's.

    Inverting an inverted comparator returns the original comparator.
    */
    pub fn inverted(&self) -> Comparator<T> {
        match &*self.strategy {
            Strategy::Inverted(comparator) => comparator.clone(),
            _ => Comparator::from_strategy(Strategy::Inverted(self.clone())),
        }
    }

    /// Return a comparator that breaks ties of this comparator with `other`.
    pub fn chaining(&self, other: Comparator<T>) -> Comparator<T> {
        Comparator::chain([self.clone(), other])
    }

    /// Return a comparator that breaks ties of this comparator with `others`, in order.
    pub fn chaining_all<I>(&self, others: I) -> Comparator<T>
    where
        I: IntoIterator<Item = Comparator<T>>,
    {
        Comparator::chain(std::iter::once(self.clone()).chain(others))
    }

    /// Return a comparator that breaks ties of this comparator with raw comparison logic.
    pub fn chaining_fn<F>(&self, compare: F) -> Comparator<T>
    where
        F: Fn(&T, &T) -> Order + Send + Sync + 'static,
    {
        self.chaining(Comparator::from_fn(compare))
    }

    /// Return a comparator that breaks ties of this comparator with a key projection.
    pub fn chaining_key<D, K, F>(&self, direction: D, key: F) -> Comparator<T>
    where
        D: Into<Direction>,
        K: Ord + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.chaining(Comparator::by_key_with_direction(direction, key))
    }
}

impl<T: ?Sized> Compare<T> for Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Order {
        Comparator::compare(self, a, b)
    }

    fn name(&self) -> &str {
        match &*self.strategy {
            Strategy::Leaf(compare) => compare.name(),
            Strategy::Chain(_) => "chain",
            Strategy::Inverted(_) => "inverted",
        }
    }
}

impl<T: ?Sized> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Comparator {
            strategy: Arc::clone(&self.strategy),
        }
    }
}

impl<T> Default for Comparator<T>
where
    T: Ord + ?Sized,
{
    fn default() -> Self {
        Comparator::natural()
    }
}

impl<T: ?Sized> FromIterator<Comparator<T>> for Comparator<T> {
    fn from_iter<I: IntoIterator<Item = Comparator<T>>>(comparators: I) -> Self {
        Comparator::chain(comparators)
    }
}

impl<T: ?Sized> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.strategy {
            Strategy::Leaf(compare) => write!(f, "Comparator({})", compare.name()),
            Strategy::Chain(comparators) => f.debug_tuple("Chain").field(comparators).finish(),
            Strategy::Inverted(comparator) => f.debug_tuple("Inverted").field(comparator).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug)]
    struct Record {
        int: i32,
        string: String,
    }

    impl Record {
        fn new(int: i32, string: &str) -> Self {
            Record {
                int,
                string: string.to_string(),
            }
        }
    }

    fn setup() {
        let _ = env_logger::builder()
            // Include all events in tests
            .filter_level(log::LevelFilter::max())
            // Ensure events are captured by `cargo test`
            .is_test(true)
            // Ignore errors initializing the logger if tests race to configure it
            .try_init();
    }

    #[test]
    fn raw_comparator_and_its_inversion_are_opposites() {
        let comparator = Comparator::<i32>::from_fn(|a, b| {
            if a == b {
                Order::Equal
            } else if a < b {
                Order::LessThan
            } else {
                Order::GreaterThan
            }
        });
        let inverted = comparator.inverted();

        assert_eq!(comparator.compare(&0, &1), Order::LessThan);
        assert_eq!(inverted.compare(&0, &1), Order::GreaterThan);
        assert_eq!(comparator.compare(&0, &0), Order::Equal);
        assert_eq!(inverted.compare(&0, &0), Order::Equal);
    }

    #[test]
    fn double_inversion_is_the_identity() {
        let comparator = Comparator::<i32>::natural();
        let twice = comparator.inverted().inverted();

        for (a, b) in [(0, 1), (1, 0), (5, 5), (-3, 7)] {
            assert_eq!(twice.compare(&a, &b), comparator.compare(&a, &b));
        }
        assert!(Arc::ptr_eq(&twice.strategy, &comparator.strategy));
    }

    #[test]
    fn chain_short_circuits_on_the_first_preference() {
        let evaluated = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&evaluated);

        let indifferent = Comparator::<i32>::from_fn(|_, _| Order::Equal);
        let decisive = Comparator::<i32>::from_fn(|_, _| Order::LessThan);
        let never_reached = Comparator::<i32>::from_fn(move |_, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            Order::GreaterThan
        });

        let chain = Comparator::chain(vec![indifferent, decisive, never_reached]);
        assert_eq!(chain.compare(&1, &2), Order::LessThan);
        assert_eq!(evaluated.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn chain_falls_through_to_break_ties() {
        setup();

        let comparator = Comparator::by_key(|record: &Record| record.int)
            .chaining(Comparator::by_key(|record: &Record| record.string.clone()));

        assert_eq!(
            comparator.compare(&Record::new(0, "a"), &Record::new(1, "b")),
            Order::LessThan
        );
        assert_eq!(
            comparator.compare(&Record::new(0, "a"), &Record::new(0, "b")),
            Order::LessThan
        );
        assert_eq!(
            comparator.compare(&Record::new(0, "a"), &Record::new(0, "a")),
            Order::Equal
        );
        assert_eq!(
            comparator.compare(&Record::new(1, "a"), &Record::new(0, "b")),
            Order::GreaterThan
        );
    }

    #[test]
    fn empty_chain_is_neutral() {
        let empty = Comparator::<i32>::chain(vec![]);

        assert_eq!(empty.compare(&0, &1), Order::Equal);
        assert_eq!(empty.compare(&1, &0), Order::Equal);
        assert_eq!(empty.inverted().compare(&1, &0), Order::Equal);
    }

    #[test]
    fn key_projection_ignores_other_fields() {
        let by_int = Comparator::by_key(|record: &Record| record.int);

        assert_eq!(
            by_int.compare(&Record::new(0, "a"), &Record::new(1, "b")),
            Order::LessThan
        );
        assert_eq!(
            by_int.compare(&Record::new(4, "a"), &Record::new(4, "z")),
            Order::Equal
        );
    }

    #[test]
    fn key_projection_runs_once_per_side() {
        let projections = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&projections);
        let comparator = Comparator::by_key(move |value: &i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            *value
        });

        comparator.compare(&1, &2);
        assert_eq!(projections.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn direction_flag_matches_inversion() {
        let ascending = Comparator::by_key_with_direction(true, |record: &Record| record.int);
        let descending = Comparator::by_key_with_direction(false, |record: &Record| record.int);

        let pairs = [
            (Record::new(0, "a"), Record::new(1, "b")),
            (Record::new(1, "a"), Record::new(0, "b")),
            (Record::new(2, "a"), Record::new(2, "b")),
        ];
        for (a, b) in pairs.iter() {
            assert_eq!(descending.compare(a, b), ascending.inverted().compare(a, b));
        }
        assert_eq!(
            descending.compare(&pairs[0].0, &pairs[0].1),
            Order::GreaterThan
        );
    }

    #[test]
    fn chaining_sugar_builds_the_same_chain() {
        let by_int = Comparator::by_key(|record: &Record| record.int);
        let by_string_descending = by_int.chaining_key(Direction::Descending, |record: &Record| {
            record.string.clone()
        });
        let by_string_raw = by_int.chaining_fn(|a: &Record, b: &Record| {
            Order::from(a.string.cmp(&b.string)).reverse()
        });

        let a = Record::new(3, "a");
        let b = Record::new(3, "b");
        assert_eq!(by_string_descending.compare(&a, &b), Order::GreaterThan);
        assert_eq!(by_string_raw.compare(&a, &b), Order::GreaterThan);
        // The operand is left untouched
        assert_eq!(by_int.compare(&a, &b), Order::Equal);
    }

    #[test]
    fn chaining_all_appends_in_order() {
        let first_char = Comparator::by_key(|value: &String| value.chars().next());
        let comparator = first_char.chaining_all(vec![
            Comparator::by_key(|value: &String| value.len()),
            Comparator::natural(),
        ]);

        let apple = "apple".to_string();
        let avocado = "avocado".to_string();
        let apron = "apron".to_string();
        assert_eq!(comparator.compare(&apple, &avocado), Order::LessThan);
        assert_eq!(comparator.compare(&apron, &apple), Order::GreaterThan);
        assert_eq!(comparator.compare(&apple, &apple), Order::Equal);
    }

    #[test]
    fn nested_chains_are_flattened() {
        let inner = Comparator::<i32>::chain(vec![
            Comparator::by_key(|value: &i32| value % 2),
            Comparator::by_key(|value: &i32| value % 3),
        ]);
        let outer = inner.chaining(Comparator::natural());

        assert_eq!(
            format!("{:?}", outer),
            "Chain([Comparator(key), Comparator(key), Comparator(natural)])"
        );
        assert_eq!(outer.compare(&4, &10), Order::LessThan);
    }

    #[test]
    fn comparators_can_be_collected_into_a_chain() {
        let comparator: Comparator<(u8, u8)> = vec![
            Comparator::by_key(|pair: &(u8, u8)| pair.0),
            Comparator::by_key_with_direction(Direction::Descending, |pair: &(u8, u8)| pair.1),
        ]
        .into_iter()
        .collect();

        assert_eq!(comparator.compare(&(1, 9), &(1, 2)), Order::LessThan);
        assert_eq!(comparator.compare(&(0, 0), &(1, 2)), Order::LessThan);
    }

    #[test]
    fn natural_order_for_unsized_values() {
        let comparator = Comparator::<str>::default();

        assert_eq!(comparator.compare("a", "b"), Order::LessThan);
        assert_eq!(comparator.compare("b", "a"), Order::GreaterThan);
        assert_eq!(comparator.compare("a", "a"), Order::Equal);
    }

    #[test]
    fn borrowed_key_projection() {
        let by_name = Comparator::by_key_ref(|record: &Record| record.string.as_str());
        let by_name_descending =
            Comparator::by_key_ref_with_direction(false, |record: &Record| record.string.as_str());

        let a = Record::new(9, "a");
        let b = Record::new(0, "b");
        assert_eq!(by_name.compare(&a, &b), Order::LessThan);
        assert_eq!(by_name_descending.compare(&a, &b), Order::GreaterThan);
    }

    #[test]
    fn increasing_order_and_ordering_constructors() {
        let less_than = Comparator::<u32>::from_increasing_order(|a, b| a < b);
        let by_cmp = Comparator::<u32>::from_ordering(|a, b| a.cmp(b));

        for (a, b) in [(0, 1), (1, 0), (7, 7)] {
            assert_eq!(less_than.compare(&a, &b), by_cmp.compare(&a, &b));
        }
        assert_eq!(less_than.compare(&0, &0), Order::Equal);
    }

    #[test]
    fn compare_trait_conveniences_apply_to_comparators() {
        let comparator = Comparator::<i32>::natural().inverted();

        assert!(comparator.is_in_increasing_order(&2, &1));
        assert_eq!(*comparator.min(&1, &2), 2);
        assert_eq!(*comparator.max(&1, &2), 1);
        assert_eq!(comparator.name(), "inverted");
    }

    #[test]
    fn debug_output_describes_the_composition() {
        let comparator = Comparator::<i32>::natural()
            .chaining(Comparator::from_fn(|_: &i32, _: &i32| Order::Equal).inverted());

        assert_eq!(
            format!("{:?}", comparator),
            "Chain([Comparator(natural), Inverted(Comparator(custom))])"
        );
    }
}
