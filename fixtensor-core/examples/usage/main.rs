use fixtensor_core::{
    dot, exp, inner, make_trace_free, outer, raise_all, trace, trace_lower, Tensor, TensorExpr,
    R1, R2,
};

fn main() {
    // Spatial metric of a conformally flat slice and its inverse.
    let psi4 = 1.2_f64.powi(4);
    let metric: Tensor<R2> = (identity() * psi4).into();
    let inverse: Tensor<R2> = (identity() / psi4).into();

    let shift = Tensor::<R1>::new([0.1, -0.2, 0.05]);
    let extrinsic = Tensor::<R2>::new([[0.3, 0.1, 0.0], [0.1, -0.2, 0.05], [0.0, 0.05, 0.4]]);

    // Nothing below is computed until it is printed or materialized.
    let shift_lower = dot(&metric, &shift);
    let k = trace_lower(&extrinsic, &inverse);
    let traceless = make_trace_free(&extrinsic, &metric, &inverse).to_tensor();

    println!("metric            {metric}");
    println!("shift (lowered)   {shift_lower}");
    println!("|shift|^2         {}", inner(&shift, &shift_lower));
    println!("K                 {k}");
    println!("A_ij              {traceless}");
    println!("A^ij              {}", raise_all(&traceless, &inverse));
    println!("tr(A)             {:e}", trace_lower(&traceless, &inverse));

    let mut lapse_terms = outer(&shift, &shift).to_tensor();
    lapse_terms += exp(&extrinsic * -1.0);
    println!("trace of mixed    {}", trace(&lapse_terms));
    println!("rank {} / size {}", lapse_terms.rank(), lapse_terms.size());
}

fn identity() -> Tensor<R2> {
    Tensor::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
}
