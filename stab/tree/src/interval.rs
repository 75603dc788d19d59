use std::cmp::Ordering;

/// A closed horizontal range `[left, right]` carrying an opaque identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Interval<T> {
    pub left: f64,
    pub right: f64,
    pub id: T,
}

impl<T> Interval<T> {
    /// Builds an interval between two endpoints given in any order.
    pub fn new(a: f64, b: f64, id: T) -> Self {
        let (left, right) = if b < a { (b, a) } else { (a, b) };
        Interval { left, right, id }
    }

    /// Where the interval lies relative to the vertical line at `x`:
    /// `Less` if it ends before `x`, `Greater` if it starts after `x`, `Equal` if it is stabbed.
    pub fn relation(&self, x: f64) -> Ordering {
        if self.right < x {
            Ordering::Less
        } else if self.left > x {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    pub fn contains(&self, x: f64) -> bool {
        self.left <= x && x <= self.right
    }
}

impl<T: std::fmt::Display> std::fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}=[{}, {}]", self.id, self.left, self.right)
    }
}
