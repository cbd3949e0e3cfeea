use std::convert::Infallible;
use vfab::prelude::*;

pub trait Shape {
    fn area(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square(f64);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle(f64);

impl Shape for Square {
    fn area(&self) -> f64 {
        self.0 * self.0
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        std::f64::consts::PI * self.0 * self.0
    }
}

impl Construct<(f64,)> for Square {
    type Error = Infallible;
    fn construct((side,): (f64,)) -> Result<Self, Infallible> {
        Ok(Self(side))
    }
}

impl Construct<(f64,)> for Circle {
    type Error = Infallible;
    fn construct((radius,): (f64,)) -> Result<Self, Infallible> {
        Ok(Self(radius))
    }
}

/// Shapes with one size argument.
#[variant_set(interface = dyn Shape, args = (f64,))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shapes {
    /// Side length.
    Square(Square),
    /// Radius.
    Circle(Circle),
}

fn main() {
    assert_eq!(<Shapes as VariantSet>::COUNT, 2);
    assert_eq!(<Shapes as VariantSet>::NAMES, &["Square", "Circle"]);

    let square = Factory::<Shapes>::create(0, (2.0,)).unwrap();
    assert!((square.get().unwrap().area() - 4.0).abs() < f64::EPSILON);

    let circle = Factory::<Shapes>::create_static::<1>((1.0,)).unwrap();
    assert!((circle.get().unwrap().area() - std::f64::consts::PI).abs() < f64::EPSILON);

    let copy = circle;
    assert_eq!(copy, circle);
}
