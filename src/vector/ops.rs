// Operator overloads for Vector. Vector-vector operators panic on a
// dimension mismatch, like the named methods they forward to.

use super::Vector;
use std::ops::{Add, Mul, Neg, Sub};

impl Add<&Vector> for &Vector {
    type Output = Vector;
    #[track_caller]
    fn add(self, rhs: &Vector) -> Vector {
        self.add_vector(rhs)
    }
}

impl Add for Vector {
    type Output = Vector;
    #[track_caller]
    fn add(self, rhs: Vector) -> Vector {
        self.add_vector(&rhs)
    }
}

impl Add<f64> for &Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: f64) -> Vector {
        self.add_scalar(rhs)
    }
}

impl Add<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: f64) -> Vector {
        self.add_scalar(rhs)
    }
}

impl Sub<&Vector> for &Vector {
    type Output = Vector;
    #[track_caller]
    fn sub(self, rhs: &Vector) -> Vector {
        self.sub_vector(rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;
    #[track_caller]
    fn sub(self, rhs: Vector) -> Vector {
        self.sub_vector(&rhs)
    }
}

impl Sub<f64> for &Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: f64) -> Vector {
        self.sub_scalar(rhs)
    }
}

impl Sub<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: f64) -> Vector {
        self.sub_scalar(rhs)
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: f64) -> Vector {
        self.scale(rhs)
    }
}

impl Neg for &Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        self.map(|e| -e)
    }
}

impl Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Vector {
        -&self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_match_methods() {
        let a = Vector::from([1.0, 2.0, 3.0]);
        let b = Vector::from([4.0, 5.0, 6.0]);
        assert_eq!(&a + &b, a.add_vector(&b));
        assert_eq!(&b - &a, Vector::from([3.0, 3.0, 3.0]));
        assert_eq!(&a + 1.0, Vector::from([2.0, 3.0, 4.0]));
        assert_eq!(a.clone() - 1.0, Vector::from([0.0, 1.0, 2.0]));
        assert_eq!(&a * 2.0, Vector::from([2.0, 4.0, 6.0]));
        assert_eq!(-a.clone(), Vector::from([-1.0, -2.0, -3.0]));
        assert_eq!(a.clone() + b.clone() - b, a);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn mismatched_add_panics() {
        let _ = Vector::zero(2) + Vector::zero(3);
    }
}
