/*!
The result type of a comparison and the direction in which a comparison is applied.

[`Order`] is deliberately a three-valued type. [`Order::Equal`] is the signal a chain of
comparators uses to fall through to its next member, so it is an ordinary outcome and never
represented as a failure.
*/

use std::cmp::Ordering;

/// The relative order of two compared values.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Order {
    /// The left-hand value precedes the right-hand value.
    LessThan,

    /// The comparison has no preference. A chain defers to its next comparator.
    Equal,

    /// The left-hand value follows the right-hand value.
    GreaterThan,
}

/// Public methods
impl Order {
    /**
    Return the opposite order.

    [`Order::LessThan`] and [`Order::GreaterThan`] are swapped and [`Order::Equal`] is preserved.
    */
    pub fn reverse(self) -> Order {
        match self {
            Order::LessThan => Order::GreaterThan,
            Order::Equal => Order::Equal,
            Order::GreaterThan => Order::LessThan,
        }
    }

    /// Return `self` unless it is [`Order::Equal`], in which case `next` is evaluated.
    pub fn then_with<F>(self, next: F) -> Order
    where
        F: FnOnce() -> Order,
    {
        match self {
            Order::Equal => next(),
            decided => decided,
        }
    }

    /// Returns true if the order is [`Order::LessThan`].
    pub fn is_less_than(self) -> bool {
        self == Order::LessThan
    }

    /// Returns true if the order is [`Order::Equal`].
    pub fn is_equal(self) -> bool {
        self == Order::Equal
    }

    /// Returns true if the order is [`Order::GreaterThan`].
    pub fn is_greater_than(self) -> bool {
        self == Order::GreaterThan
    }
}

impl From<Ordering> for Order {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Order::LessThan,
            Ordering::Equal => Order::Equal,
            Ordering::Greater => Order::GreaterThan,
        }
    }
}

impl From<Order> for Ordering {
    fn from(order: Order) -> Self {
        match order {
            Order::LessThan => Ordering::Less,
            Order::Equal => Ordering::Equal,
            Order::GreaterThan => Ordering::Greater,
        }
    }
}

/**
The direction in which a key projection orders values.

A `bool` converts into a direction where `true` means ascending, so constructors taking
`impl Into<Direction>` also accept an `is_ascending` flag.
*/
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Direction {
    /// Smaller keys come first.
    #[default]
    Ascending,

    /// Larger keys come first.
    Descending,
}

/// Public methods
impl Direction {
    /// Returns true if the direction is [`Direction::Ascending`].
    pub fn is_ascending(self) -> bool {
        self == Direction::Ascending
    }

    /// Return the opposite direction.
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /**
    Apply the direction to an order computed in ascending terms.

    Ascending leaves the order untouched and descending reverses it.
    */
    pub fn apply(self, order: Order) -> Order {
        match self {
            Direction::Ascending => order,
            Direction::Descending => order.reverse(),
        }
    }
}

impl From<bool> for Direction {
    fn from(is_ascending: bool) -> Self {
        if is_ascending {
            Direction::Ascending
        } else {
            Direction::Descending
        }
    }
}
