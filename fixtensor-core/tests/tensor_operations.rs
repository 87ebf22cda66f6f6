use fixtensor_core::{
    dot, dot_metric, inner, outer, IndexContracter, IndexInserter, Tensor, TensorExpr, R1, R2,
    R3, R4,
};

#[test]
fn dot_vector_vector() {
    let a = Tensor::<R1, f64, 3>::new([1.0, 2.0, 3.0]);
    let b = Tensor::<R1, f64, 3>::new([3.0, 2.0, 1.0]);
    assert_eq!(inner(&a, &b), 10.0);
}

#[test]
fn dot_matrix_matrix() {
    let a = Tensor::<R2, f64, 2>::new([[1.0, 2.0], [3.0, 4.0]]);
    let b = Tensor::<R2, f64, 2>::new([[4.0, 3.0], [2.0, 1.0]]);
    let expected = Tensor::<R2, f64, 2>::new([[8.0, 5.0], [20.0, 13.0]]);
    assert_eq!(dot(&a, &b), expected);
}

#[test]
fn dot_matrix_vector() {
    let m = Tensor::<R2, f64, 3>::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    let v = Tensor::<R1, f64, 3>::new([1.0, 2.0, 3.0]);
    assert_eq!(dot(&m, &v), Tensor::<R1, f64, 3>::new([14.0, 32.0, 50.0]));
    assert_eq!(dot(&v, &m), Tensor::<R1, f64, 3>::new([30.0, 36.0, 42.0]));
}

#[test]
fn dot_of_lazy_operands() {
    let m = Tensor::<R2, i32, 2>::new([[1, 2], [3, 4]]);
    // (m·m)·m, with the inner product never materialized
    let cube = dot(dot(&m, &m), &m);
    assert_eq!(cube, Tensor::<R2, i32, 2>::new([[37, 54], [81, 118]]));
    let shifted = dot(&m + 1_i32, &m);
    assert_eq!(shifted.to_tensor(), Tensor::<R2, i32, 2>::new([[11, 16], [19, 28]]));
}

#[test]
fn dot_higher_rank() {
    let t = Tensor::<R3, i32, 2>::new([[[1, 2], [3, 4]], [[5, 6], [7, 8]]]);
    let m = Tensor::<R2, i32, 2>::new([[1, 0], [0, 2]]);
    // t[i][j][k] m[k][l]
    let tm = dot(&t, &m).to_tensor();
    assert_eq!(tm, Tensor::<R3, i32, 2>::new([[[1, 4], [3, 8]], [[5, 12], [7, 16]]]));
    // t[i][j][k] t[k][l][n] has rank 4
    let tt: Tensor<R4, i32, 2> = dot(&t, &t).into();
    assert_eq!(tt[0][1][1][0], 3 * 3 + 4 * 7);
}

#[test]
fn results_convert_into_annotated_types() {
    let a = Tensor::<R2, f64, 2>::new([[1.0, 2.0], [3.0, 4.0]]);
    let b = Tensor::<R2, f64, 2>::new([[0.0, 1.0], [1.0, 0.0]]);
    let c: Tensor<R2, f64, 2> = dot(&a, &b).into();
    assert_eq!(c, Tensor::<R2, f64, 2>::new([[2.0, 1.0], [4.0, 3.0]]));

    let u = Tensor::<R1, f64, 2>::new([1.0, 2.0]);
    let w = Tensor::<R1, f64, 2>::new([3.0, 4.0]);
    let x: f64 = inner(&u, &w);
    assert_eq!(x, 11.0);

    let o: Tensor<R3, f64, 2> = outer(&u, &a).into();
    assert_eq!(o[1][1][0], 6.0);
}

#[test]
fn scalars_combine_with_products() {
    let m = Tensor::<R2, f64, 2>::new([[1.0, 2.0], [3.0, 4.0]]);
    let v = Tensor::<R1, f64, 2>::new([1.0, -1.0]);
    let scaled: Tensor<R1, f64, 2> = (2.0 * dot(&m, &v) + 1.0).into();
    assert_eq!(scaled, Tensor::<R1, f64, 2>::new([-1.0, -1.0]));
    let halved: Tensor<R3, f64, 2> = (outer(&v, &m) / 2.0).into();
    assert_eq!(halved[1][1][1], -2.0);
}

#[test]
fn dot_with_metric() {
    let a = Tensor::<R1, f64, 4>::new([1.0, 2.0, 3.0, 4.0]);
    let b = Tensor::<R1, f64, 4>::new([4.0, 3.0, 2.0, 1.0]);
    let minkowski = Tensor::<R2, f64, 4>::new([
        [-1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    assert_eq!(dot_metric(&a, &b, &minkowski), -4.0 + 6.0 + 6.0 + 4.0);
    assert_eq!(dot_metric(&a, &a, &minkowski), 28.0);
}

#[test]
fn outer_products() {
    let v = Tensor::<R1, f64, 2>::new([2.0, 3.0]);
    let m = Tensor::<R2, f64, 2>::new([[1.0, 2.0], [3.0, 4.0]]);
    assert_eq!(
        outer(&v, &m),
        Tensor::<R3, f64, 2>::new([[[2.0, 4.0], [6.0, 8.0]], [[3.0, 6.0], [9.0, 12.0]]])
    );
    assert_eq!(
        outer(&m, &v),
        Tensor::<R3, f64, 2>::new([[[2.0, 3.0], [4.0, 6.0]], [[6.0, 9.0], [8.0, 12.0]]])
    );
}

#[test]
fn outer_of_outer() {
    let v = Tensor::<R1, i32, 3>::new([1, 2, 3]);
    let vvv = outer(outer(&v, &v), &v);
    assert_eq!(vvv.rank(), 3);
    assert_eq!(vvv.get([1, 2, 2]), 18);
    let vv_vv: Tensor<R4, i32, 3> = outer(outer(&v, &v), outer(&v, &v)).into();
    assert_eq!(vv_vv[2][2][2][1], 54);
}

#[test]
fn at_peels_one_index() {
    let t = Tensor::<R3, i32, 2>::new([[[0, 1], [2, 3]], [[4, 5], [6, 7]]]);
    let row = t.at(1);
    assert_eq!(row.rank(), 2);
    assert_eq!(row.at(1).at(0), 6);
    assert_eq!(row.to_string(), "{{4,5},{6,7}}");
    assert_eq!(t.get([0, 1, 1]), 3);

    let sum = &t + &t;
    assert_eq!(sum.at(1).at(0).at(1), 10);
}

#[test]
fn inserter_and_contracter() {
    let m = Tensor::<R2, i32, 3>::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    // column 2 read through an inserted second index
    let column: Vec<i32> = (0..3)
        .map(|i| IndexInserter::<R2>::eval(&m, 2, std::iter::once(i)))
        .collect();
    assert_eq!(column, [3, 6, 9]);
    // the diagonal, as used by contractions
    let diagonal: i32 = (0..3)
        .map(|i| IndexContracter::<R1, R2>::eval(&m, i, std::iter::empty::<usize>()))
        .sum();
    assert_eq!(diagonal, 15);
}
