use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use fixtensor_core::{outer, Tensor, R2, R4};

const N: usize = 4;
type Matrix = Tensor<R2, f64, N>;
type Rank4 = Tensor<R4, f64, N>;

fn operands() -> (Matrix, Matrix, Matrix) {
    (Matrix::fill(1.0), Matrix::fill(2.0), Matrix::fill(3.0))
}

fn bench_fused_expression(c: &mut Criterion) {
    let (a, b, d) = operands();
    let mut out = Rank4::default();
    c.bench_function("outer_sum_fused_4x4x4x4", |bencher| {
        bencher.iter(|| {
            let (a, b, d) = (black_box(&a), black_box(&b), black_box(&d));
            out.assign(
                outer(a, b) + outer(b, a) + outer(a, d) + outer(d, a) + outer(b, d) + outer(d, b),
            );
            black_box(&out);
        });
    });
}

fn bench_eager_temporaries(c: &mut Criterion) {
    let (a, b, d) = operands();
    c.bench_function("outer_sum_temporaries_4x4x4x4", |bencher| {
        bencher.iter(|| {
            let (a, b, d) = (black_box(&a), black_box(&b), black_box(&d));
            let mut out: Rank4 = outer(a, b).into();
            out += outer(b, a).to_tensor();
            out += outer(a, d).to_tensor();
            out += outer(d, a).to_tensor();
            out += outer(b, d).to_tensor();
            out += outer(d, b).to_tensor();
            black_box(out)
        });
    });
}

fn bench_hand_written_loop(c: &mut Criterion) {
    let (a, b, d) = operands();
    let mut out = Rank4::default();
    c.bench_function("outer_sum_loop_4x4x4x4", |bencher| {
        bencher.iter(|| {
            let (a, b, d) = (black_box(&a), black_box(&b), black_box(&d));
            for i in 0..N {
                for j in 0..N {
                    for k in 0..N {
                        for l in 0..N {
                            out[i][j][k][l] = a[i][j] * b[k][l]
                                + b[i][j] * a[k][l]
                                + a[i][j] * d[k][l]
                                + d[i][j] * a[k][l]
                                + b[i][j] * d[k][l]
                                + d[i][j] * b[k][l];
                        }
                    }
                }
            }
            black_box(&out);
        });
    });
}

criterion_group!(
    benches,
    bench_fused_expression,
    bench_eager_temporaries,
    bench_hand_written_loop
);
criterion_main!(benches);
