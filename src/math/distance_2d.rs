use super::Point2;

/// Returns the Euclidean distance between `p1` and `p2`.
#[must_use]
pub fn distance(p1: &Point2, p2: &Point2) -> f64 {
    ((p1.x - p2.x).powi(2) + (p1.y - p2.y).powi(2)).sqrt()
}

/// Truncates a coordinate or length toward zero for on-screen labels.
///
/// Only for presentation. Comparisons between distances must use the
/// full-precision values, since truncation can turn a strict ordering into
/// a tie.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn truncate_for_display(value: f64) -> i64 {
    // `as` saturates at the i64 bounds and maps NaN to 0.
    value.trunc() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn distance_three_four_five() {
        let d = distance(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0));
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point2::new(-7.5, 2.0);
        let b = Point2::new(11.0, -40.25);
        assert!((distance(&a, &b) - distance(&b, &a)).abs() < TOL);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let a = Point2::new(123.0, 456.0);
        assert!(distance(&a, &a).abs() < TOL);
    }

    #[test]
    fn truncation_rounds_toward_zero() {
        assert_eq!(truncate_for_display(282.84), 282);
        assert_eq!(truncate_for_display(-0.9), 0);
        assert_eq!(truncate_for_display(-12.7), -12);
        assert_eq!(truncate_for_display(f64::NAN), 0);
    }

    #[test]
    fn truncated_values_can_tie_where_full_precision_does_not() {
        let origin = Point2::origin();
        let a = distance(&origin, &Point2::new(10.2, 0.0));
        let b = distance(&origin, &Point2::new(10.7, 0.0));
        assert!(a < b);
        assert_eq!(truncate_for_display(a), truncate_for_display(b));
    }
}
