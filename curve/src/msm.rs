use num_bigint::BigInt;

use crate::errors::CurveError;
use crate::group::{AddResult, ScalarTable};

/// Compute `a * A + b * B` where `A` and `B` generate subgroups of the same order.
///
/// Each scalar is reduced modulo its table's order, so zero and multiples
/// of the order contribute the identity instead of failing the lookup.
pub fn double_scalar_mul<T: ScalarTable>(
    table_a: &T,
    a: &BigInt,
    table_b: &T,
    b: &BigInt,
) -> Result<AddResult, CurveError> {
    let lhs = table_a.multiple(a)?;
    let rhs = table_b.multiple(b)?;
    table_a.curve().combine(&lhs, &rhs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Curve, CurveParams, Point, SubgroupTable};

    fn tables() -> (SubgroupTable, SubgroupTable) {
        let curve = Curve::new(CurveParams::textbook());
        let table_a = SubgroupTable::build(&curve, Point::new(5, 1)).unwrap();
        let b = table_a.lookup(&BigInt::from(7)).unwrap();
        let table_b = table_a.sibling(b).unwrap();
        (table_a, table_b)
    }

    #[test]
    fn test_double_scalar_mul() {
        let (table_a, table_b) = tables();

        // 6A + 6·(7A) = 48A = 10A
        let result = double_scalar_mul(&table_a, &BigInt::from(6), &table_b, &BigInt::from(6));
        assert_eq!(result.unwrap(), AddResult::Sum(Point::new(7, 11)));
    }

    #[test]
    fn test_zero_scalars() {
        let (table_a, table_b) = tables();
        let zero = BigInt::from(0);
        let two = BigInt::from(2);

        assert_eq!(
            double_scalar_mul(&table_a, &zero, &table_b, &two).unwrap(),
            AddResult::Sum(Point::new(9, 1))
        );
        assert_eq!(
            double_scalar_mul(&table_a, &two, &table_b, &zero).unwrap(),
            AddResult::Sum(Point::new(6, 3))
        );
        assert_eq!(
            double_scalar_mul(&table_a, &zero, &table_b, &zero).unwrap(),
            AddResult::Identity
        );
    }

    #[test]
    fn test_cancelling_scalars() {
        let (table_a, table_b) = tables();

        // 12A + 1·(7A) = 19A = O
        let result = double_scalar_mul(&table_a, &BigInt::from(12), &table_b, &BigInt::from(1));
        assert_eq!(result.unwrap(), AddResult::Identity);
    }
}
