use fixtensor_core::{
    all, any, greater, greater_equal, greater_equal_scalar, greater_scalar, less, less_equal,
    less_equal_scalar, less_scalar, scalar_greater, scalar_greater_equal, scalar_less,
    scalar_less_equal, Tensor, R1, R2,
};

type TwoTensor = Tensor<R2, f64, 2>;
type Mask = Tensor<R2, bool, 2>;

// Comparisons nested on both sides of tensor and scalar operands must agree
// with the scalar chain. Each value list contains inputs that make the
// innermost comparisons come out both true and false.
macro_rules! relational_chain {
    ($name:ident, $op:tt, $both:ident, $right:ident, $left:ident, [$($val:expr),*]) => {
        #[test]
        fn $name() {
            for val in [$($val),*] {
                let expected: bool = ((2.0 $op val) $op (val $op 3.0)) $op (4.0 $op val);
                let t = TwoTensor::fill(val);
                let chain = $both($both($left(2.0, &t), $right(&t, 3.0)), $left(4.0, &t));
                assert_eq!(chain.to_tensor(), Mask::fill(expected), "value {val}");
            }
        }
    };
}

relational_chain!(
    greater_equal_chain,
    >=,
    greater_equal,
    greater_equal_scalar,
    scalar_greater_equal,
    [3.0, -3.0]
);
relational_chain!(
    less_equal_chain,
    <=,
    less_equal,
    less_equal_scalar,
    scalar_less_equal,
    [3.0, 9.0]
);
relational_chain!(greater_chain, >, greater, greater_scalar, scalar_greater, [3.0, -3.0]);
relational_chain!(less_chain, <, less, less_scalar, scalar_less, [3.0, -3.0]);

#[test]
fn comparison_against_equal_scalar() {
    let t = TwoTensor::fill(3.0);
    assert!(all(&greater_equal_scalar(&t, 3.0)));
    assert!(all(&less_equal_scalar(&t, 3.0)));
    assert!(!any(&greater_scalar(&t, 3.0)));
    assert!(!any(&less_scalar(&t, 3.0)));
}

#[test]
fn componentwise_masks() {
    let a = Tensor::<R1, i32, 4>::new([1, 5, 3, 7]);
    let b = Tensor::<R1, i32, 4>::new([2, 5, 1, 8]);
    assert_eq!(
        less(&a, &b).to_tensor(),
        Tensor::<R1, bool, 4>::new([true, false, false, true])
    );
    assert_eq!(
        greater_equal(&a, &b).to_tensor(),
        Tensor::<R1, bool, 4>::new([false, true, true, false])
    );
    assert!(any(&greater(&a, &b)));
    assert!(!all(&greater(&a, &b)));
}

#[test]
fn tensor_equality() {
    let a = Tensor::<R2, i32, 2>::new([[1, 2], [3, 4]]);
    let mut b = a.clone();
    assert_eq!(a, b);
    b[1][0] = 0;
    assert_ne!(a, b);
    assert_ne!(a, &b);
}
