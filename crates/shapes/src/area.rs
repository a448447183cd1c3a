use crate::shape::Shape;

/// Area of any shape; same value as calling `shape.area()`.
///
/// Accepts concrete variants, `AnyShape`, and `&dyn Shape`.
#[inline]
pub fn compute_area<S: Shape + ?Sized>(shape: &S) -> f64 {
    shape.area()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnyShape, Circle, Triangle};

    #[test]
    fn matches_method_call_for_every_variant() {
        let c = Circle::new(1.5);
        let t = Triangle::new(3.0, 4.0, 5.0).unwrap();
        assert_eq!(compute_area(&c), c.area());
        assert_eq!(compute_area(&t), t.area());
        let any = AnyShape::from(t);
        assert_eq!(compute_area(&any), t.area());
    }

    #[test]
    fn works_through_trait_objects() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(Circle::new(2.0)),
            Box::new(Triangle::new(5.0, 12.0, 13.0).unwrap()),
        ];
        let total: f64 = shapes.iter().map(|s| compute_area(s.as_ref())).sum();
        assert!((total - (4.0 * std::f64::consts::PI + 30.0)).abs() < 1e-12);
    }
}
