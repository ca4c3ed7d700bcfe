//! Planar vectors over an opaque scalar type.
//!
//! The classification never measures lengths or angles; it only needs the
//! sign of the cross product (`ccw`), equality, negation and sums. Any
//! [`Scalar`] providing ring arithmetic and a total order on the values that
//! occur works, exact integers and floating point alike.

use std::fmt::Debug;
use std::ops::{Add, Neg};

use num_traits::{Num, ToPrimitive};

/// Default relative tolerance used when comparing floating point sums.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Coordinate type of surface vectors and intersection positions.
pub trait Scalar: Clone + Debug + PartialOrd + Num + Neg<Output = Self> + ToPrimitive {
    /// Equality up to `tolerance` (relative) for inexact types, plain `==` otherwise.
    fn approx_eq(&self, other: &Self, tolerance: f64) -> bool;
}

macro_rules! exact_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn approx_eq(&self, other: &Self, _tolerance: f64) -> bool {
                    self == other
                }
            }
        )*
    };
}

macro_rules! float_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
                    let (a, b) = (*self as f64, *other as f64);
                    let scale = 1f64.max(a.abs()).max(b.abs());
                    (a - b).abs() <= tolerance * scale
                }
            }
        )*
    };
}

exact_scalar!(i32, i64, i128);
float_scalar!(f32, f64);

/// Orientation of a vector relative to another one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ccw {
    /// The second vector is clockwise of the first.
    Clockwise,
    /// Both vectors lie on a common line.
    Collinear,
    /// The second vector is counterclockwise of the first.
    Counterclockwise,
}

impl Ccw {
    /// The orientation seen from the other vector.
    pub fn reverse(self) -> Self {
        match self {
            Ccw::Clockwise => Ccw::Counterclockwise,
            Ccw::Collinear => Ccw::Collinear,
            Ccw::Counterclockwise => Ccw::Clockwise,
        }
    }
}

/// A vector in the plane.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Vector<T> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Vector<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// Cross product `self × other`.
    pub fn cross(&self, other: &Self) -> T {
        self.x.clone() * other.y.clone() - self.y.clone() * other.x.clone()
    }

    /// Where `other` lies relative to `self`.
    ///
    /// ```rust
    /// # use flatsurf_region::topology::vector::{Ccw, Vector};
    /// let east = Vector::new(1, 0);
    /// assert_eq!(east.ccw(&Vector::new(0, 1)), Ccw::Counterclockwise);
    /// assert_eq!(east.ccw(&Vector::new(0, -1)), Ccw::Clockwise);
    /// ```
    pub fn ccw(&self, other: &Self) -> Ccw {
        let cross = self.cross(other);
        let zero = T::zero();
        if cross > zero {
            Ccw::Counterclockwise
        } else if cross < zero {
            Ccw::Clockwise
        } else {
            Ccw::Collinear
        }
    }

    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.x.approx_eq(&other.x, tolerance) && self.y.approx_eq(&other.y, tolerance)
    }

    /// Lossy conversion to floating point coordinates, `NaN` where unrepresentable.
    pub fn to_f64(&self) -> (f64, f64) {
        (
            self.x.to_f64().unwrap_or(f64::NAN),
            self.y.to_f64().unwrap_or(f64::NAN),
        )
    }
}

impl<T: Scalar> Neg for Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Self::Output {
        Vector::new(-self.x, -self.y)
    }
}

impl<T: Scalar> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Self::Output {
        Vector::new(-self.x.clone(), -self.y.clone())
    }
}

impl<T: Scalar> Add for Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: Self) -> Self::Output {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<'a, T: Scalar> Add<&'a Vector<T>> for Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: &'a Vector<T>) -> Self::Output {
        Vector::new(self.x + rhs.x.clone(), self.y + rhs.y.clone())
    }
}

impl<T: Scalar> std::iter::Sum for Vector<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Vector::zero(), |acc, v| acc + v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ccw_follows_cross_product_sign() {
        let a = Vector::new(1i64, 1);
        assert_eq!(a.ccw(&Vector::new(0, 1)), Ccw::Counterclockwise);
        assert_eq!(a.ccw(&Vector::new(1, 0)), Ccw::Clockwise);
        assert_eq!(a.ccw(&Vector::new(2, 2)), Ccw::Collinear);
        assert_eq!(a.ccw(&Vector::new(-1, -1)), Ccw::Collinear);
    }

    #[test]
    fn negation_and_sum() {
        let v = Vector::new(3i64, -2);
        assert_eq!(-&v, Vector::new(-3, 2));
        let total: Vector<i64> = vec![v.clone(), -v.clone(), Vector::new(1, 1)]
            .into_iter()
            .sum();
        assert_eq!(total, Vector::new(1, 1));
    }

    #[test]
    fn float_comparison_is_relative() {
        let a = Vector::new(0.1f64 + 0.2, 1e6);
        let b = Vector::new(0.3f64, 1e6 + 1e-4);
        assert!(a.approx_eq(&b, DEFAULT_TOLERANCE));
        assert!(!a.approx_eq(&Vector::new(0.31, 1e6), DEFAULT_TOLERANCE));
        assert!(!0.3f64.approx_eq(&(0.1 + 0.2), 0.0));
    }

    #[test]
    fn integers_compare_exactly() {
        assert!(5i64.approx_eq(&5, 1.0));
        assert!(!5i64.approx_eq(&6, 1.0));
    }
}
