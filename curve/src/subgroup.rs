//! Brute-force enumeration of the cyclic subgroup `<G>`.
//!
//! The table is built once with `n - 1` additions and then answers `k·G` in
//! constant time. It only makes sense for toy curves, but the full listing is
//! also what the demo prints.

use core::fmt::{self, Display, Formatter};
use num_bigint::BigInt;
use num_traits::{One, ToPrimitive};
use tracing::{debug, trace, warn};

use crate::errors::CurveError;
use crate::group::{AddResult, ScalarTable};
use crate::{Curve, Point};

/// Number of `k·G` cells per row when rendering a table.
const DISPLAY_COLUMNS: usize = 3;

/// Every non-identity multiple of a generator, in order.
///
/// `points()[k - 1] == k·G` for `1 <= k <= order - 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubgroupTable {
    curve: Curve,
    order: BigInt,
    points: Vec<Point>,
}

impl SubgroupTable {
    /// Enumerates `<generator>` with the default iteration cap of `2p + 2`,
    /// which is above the Hasse bound on the number of curve points.
    pub fn build(curve: &Curve, generator: Point) -> Result<Self, CurveError> {
        let cap = BigInt::from(2u32) * curve.p() + 2u32;
        Self::build_with_cap(curve, generator, cap)
    }

    /// Enumerates `<generator>`, giving up after `cap` additions.
    ///
    /// # Errors
    ///
    /// - [`CurveError::EnumerationDivergence`] if the identity is not reached
    ///   within `cap` steps.
    /// - [`CurveError::NoInverse`] if the generator is not on the curve and the
    ///   group law hits a zero denominator.
    pub fn build_with_cap(
        curve: &Curve,
        generator: Point,
        cap: BigInt,
    ) -> Result<Self, CurveError> {
        let mut order = BigInt::one();
        let mut current = generator.clone();
        let mut points = vec![generator.clone()];

        loop {
            if order > cap {
                warn!(%generator, %cap, "subgroup enumeration exceeded its iteration cap");
                return Err(CurveError::EnumerationDivergence { cap });
            }
            order += 1u32;
            match curve.add(&current, &generator)? {
                AddResult::Identity => break,
                AddResult::Sum(next) => {
                    trace!(%order, point = %next, "subgroup step");
                    current = next.clone();
                    points.push(next);
                }
            }
        }

        debug!(%generator, %order, "built subgroup table");
        Ok(SubgroupTable {
            curve: curve.clone(),
            order,
            points,
        })
    }

    /// The enumerated multiples `G, 2G, ..., (n-1)G`.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl ScalarTable for SubgroupTable {
    fn curve(&self) -> &Curve {
        &self.curve
    }

    fn generator(&self) -> &Point {
        &self.points[0]
    }

    fn order(&self) -> &BigInt {
        &self.order
    }

    fn lookup(&self, k: &BigInt) -> Result<Point, CurveError> {
        self.check_index(k)?;
        k.to_usize()
            .and_then(|k| self.points.get(k - 1))
            .cloned()
            .ok_or_else(|| CurveError::IndexOutOfRange {
                index: k.clone(),
                order: self.order.clone(),
            })
    }

    fn sibling(&self, generator: Point) -> Result<Self, CurveError> {
        SubgroupTable::build(&self.curve, generator)
    }
}

impl Display for SubgroupTable {
    /// Renders `| k|(  x,  y)|` cells three to a row, closed by the identity.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let cells = self
            .points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                format!(
                    "{:>3}|({:>3},{:>3})|",
                    i + 1,
                    point.x.to_string(),
                    point.y.to_string()
                )
            })
            .chain(core::iter::once(format!(
                "{:>3}|({:>3},{:>3})|",
                self.order.to_string(),
                "θ",
                "θ"
            )))
            .collect::<Vec<_>>();

        for row in cells.chunks(DISPLAY_COLUMNS) {
            writeln!(f, "|{}", row.concat())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CurveParams, DoubleAndAdd};

    fn textbook() -> Curve {
        Curve::new(CurveParams::textbook())
    }

    fn int(v: i64) -> BigInt {
        BigInt::from(v)
    }

    #[test]
    fn test_textbook_subgroup() {
        let curve = textbook();
        let table = SubgroupTable::build(&curve, Point::new(5, 1)).unwrap();

        assert_eq!(table.order(), &int(19));
        assert_eq!(table.points().len(), 18);
        assert_eq!(table.generator(), &Point::new(5, 1));
        assert_eq!(table.lookup(&int(2)).unwrap(), Point::new(6, 3));
        assert_eq!(table.lookup(&int(7)).unwrap(), Point::new(0, 6));
        assert_eq!(table.lookup(&int(10)).unwrap(), Point::new(7, 11));
        assert_eq!(table.lookup(&int(18)).unwrap(), Point::new(5, 16));
        assert!(table.points().iter().all(|p| curve.contains(p)));
    }

    #[test]
    fn test_last_multiple_closes_subgroup() {
        let curve = textbook();
        let g = Point::new(5, 1);
        let table = SubgroupTable::build(&curve, g.clone()).unwrap();

        let last = table.lookup(&(table.order() - 1u32)).unwrap();
        assert_eq!(curve.add(&last, &g).unwrap(), AddResult::Identity);
    }

    #[test]
    fn test_lookup_rejects_identity_indices() {
        let table = SubgroupTable::build(&textbook(), Point::new(5, 1)).unwrap();

        for k in [0, 19, 20, -1] {
            assert_eq!(
                table.lookup(&int(k)).unwrap_err(),
                CurveError::IndexOutOfRange {
                    index: int(k),
                    order: int(19),
                }
            );
        }
    }

    #[test]
    fn test_multiple_wraps_modulo_order() {
        let table = SubgroupTable::build(&textbook(), Point::new(5, 1)).unwrap();

        assert_eq!(table.multiple(&int(0)).unwrap(), AddResult::Identity);
        assert_eq!(table.multiple(&int(19)).unwrap(), AddResult::Identity);
        assert_eq!(
            table.multiple(&int(48)).unwrap(),
            AddResult::Sum(Point::new(7, 11))
        );
    }

    #[test]
    fn test_sibling_table_for_public_point() {
        let table = SubgroupTable::build(&textbook(), Point::new(5, 1)).unwrap();
        let b = table.lookup(&int(7)).unwrap();
        let sibling = table.sibling(b.clone()).unwrap();

        assert_eq!(sibling.order(), table.order());
        assert_eq!(sibling.generator(), &b);
        // 2·(7G) = 14G
        assert_eq!(sibling.lookup(&int(2)).unwrap(), Point::new(9, 1));
    }

    #[test]
    fn test_matches_double_and_add() {
        let curve = textbook();
        let g = Point::new(5, 1);
        let table = SubgroupTable::build(&curve, g.clone()).unwrap();
        let ladder = DoubleAndAdd::new(curve, g, table.order().clone());

        for k in 1..19 {
            assert_eq!(table.lookup(&int(k)).unwrap(), ladder.lookup(&int(k)).unwrap());
        }
    }

    #[test]
    fn test_order_two_generator() {
        let curve = Curve::new(CurveParams::new(7, 0, 1));
        let table = SubgroupTable::build(&curve, Point::new(6, 0)).unwrap();

        assert_eq!(table.order(), &int(2));
        assert_eq!(table.points(), &[Point::new(6, 0)]);
    }

    #[test]
    fn test_divergence_is_reported() {
        let curve = textbook();
        let err = SubgroupTable::build_with_cap(&curve, Point::new(5, 1), int(5)).unwrap_err();

        assert_eq!(err, CurveError::EnumerationDivergence { cap: int(5) });
    }

    #[test]
    fn test_non_invertible_slope_fails() {
        // Over the composite modulus 15, doubling (1, 3) needs the inverse of 6
        let curve = Curve::new(CurveParams::new(15, 0, 2));
        let err = SubgroupTable::build(&curve, Point::new(1, 3)).unwrap_err();
        assert_eq!(
            err,
            CurveError::NoInverse {
                modulus: int(15),
                value: int(6),
            }
        );
    }

    #[test]
    fn test_display_layout() {
        let table = SubgroupTable::build(&textbook(), Point::new(5, 1)).unwrap();
        let rendered = table.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "|  1|(  5,  1)|  2|(  6,  3)|  3|( 10,  6)|");
        assert_eq!(lines[6], "| 19|(  θ,  θ)|");
    }
}
