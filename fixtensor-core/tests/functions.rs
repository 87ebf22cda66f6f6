use approx::assert_abs_diff_eq;
use fixtensor_core::{
    abs, acos, asin, atan, cos, cosh, exp, log, log10, sin, sinh, sqrt, tan, tanh, Real, Tensor,
    R2,
};

type TwoTensor = Tensor<R2, f64, 2>;

fn assert_uniform(t: &TwoTensor, expected: f64) {
    for x in t.to_vec() {
        assert_abs_diff_eq!(x, expected, epsilon = 1e-14);
    }
}

// `f(f(t))` on a uniform tensor must match `f(f(val))`. The inputs differ per
// function to stay inside each domain.
macro_rules! applied_twice {
    ($name:ident, $f:ident, $val:expr) => {
        #[test]
        fn $name() {
            let val: f64 = $val;
            let t = TwoTensor::fill(val);
            let t: TwoTensor = $f($f(&t)).into();
            assert_uniform(&t, Real::$f(Real::$f(val)));
        }
    };
}

applied_twice!(exp_twice, exp, 1.1);
applied_twice!(log_twice, log, 1.1);
applied_twice!(log10_twice, log10, 1.1);
applied_twice!(sqrt_twice, sqrt, 1.1);
applied_twice!(sin_twice, sin, 1.1);
applied_twice!(cos_twice, cos, 1.1);
applied_twice!(tan_twice, tan, 1.1);
applied_twice!(asin_twice, asin, -0.1);
applied_twice!(acos_twice, acos, 0.9);
applied_twice!(atan_twice, atan, -0.1);
applied_twice!(sinh_twice, sinh, 1.1);
applied_twice!(cosh_twice, cosh, 1.1);
applied_twice!(tanh_twice, tanh, 1.1);
applied_twice!(abs_twice, abs, -0.1);

#[test]
fn log_is_natural() {
    let t = TwoTensor::fill(std::f64::consts::E);
    assert_uniform(&log(&t).to_tensor(), 1.0);
    assert_uniform(&log10(&t * 0.0 + 1000.0).to_tensor(), 3.0);
}

#[test]
fn functions_compose_with_arithmetic() {
    let t = Tensor::<R2, f64, 2>::new([[0.1, 0.2], [0.3, 0.4]]);
    let one = sin(&t) * sin(&t) + cos(&t) * cos(&t);
    assert_uniform(&one.to_tensor(), 1.0);

    let identity = tanh(atan(tan(&t))) - tanh(&t);
    assert_uniform(&identity.to_tensor(), 0.0);
}

#[test]
fn functions_on_f32() {
    let t = Tensor::<R2, f32, 3>::fill(4.0);
    let r = sqrt(&t).to_tensor();
    assert_eq!(r, Tensor::<R2, f32, 3>::fill(2.0));
    assert_eq!(abs(-&t), t);
}
