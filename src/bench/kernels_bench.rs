use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use linalg_bench::matrix::random_vector;
use linalg_bench::{Matrix, baseline, gemm, matvec, products, vecmat};
use rand::SeedableRng;
use rand::rngs::StdRng;

// Odd sizes exercise the unrolled remainder paths
const VECTOR_SIZES: [usize; 4] = [63, 128, 257, 512];
const MATRIX_SIZES: [usize; 3] = [32, 65, 128];

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

fn bench_mat_vec(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat_vec");
    let mut rng = rng();

    for &n in &VECTOR_SIZES {
        let a = Matrix::random(n, n, &mut rng);
        let x = random_vector(n, &mut rng);
        let mut y = vec![0.0; n];

        group.bench_with_input(BenchmarkId::new("ndarray", n), &n, |b, _| {
            b.iter(|| baseline::mat_vec(black_box(&a), black_box(&x), &mut y))
        });
        group.bench_with_input(BenchmarkId::new("no_cache", n), &n, |b, _| {
            b.iter(|| matvec::mat_vec_no_cache(black_box(&a), black_box(&x), &mut y))
        });
        group.bench_with_input(BenchmarkId::new("walk", n), &n, |b, _| {
            b.iter(|| matvec::mat_vec_walk(black_box(&a), black_box(&x), &mut y))
        });
        group.bench_with_input(BenchmarkId::new("unrolled2", n), &n, |b, _| {
            b.iter(|| matvec::mat_vec_unrolled2(black_box(&a), black_box(&x), &mut y))
        });
        group.bench_with_input(BenchmarkId::new("unrolled4", n), &n, |b, _| {
            b.iter(|| matvec::mat_vec_unrolled4(black_box(&a), black_box(&x), &mut y))
        });
    }

    group.finish();
}

fn bench_vec_mat(c: &mut Criterion) {
    let mut group = c.benchmark_group("vec_mat");
    let mut rng = rng();

    for &n in &VECTOR_SIZES {
        let a = Matrix::random(n, n, &mut rng);
        let jagged = a.to_jagged();
        let x = random_vector(n, &mut rng);
        let mut y = vec![0.0; n];

        group.bench_with_input(BenchmarkId::new("ndarray", n), &n, |b, _| {
            b.iter(|| baseline::vec_mat(black_box(&x), black_box(&a), &mut y))
        });
        group.bench_with_input(BenchmarkId::new("column", n), &n, |b, _| {
            b.iter(|| vecmat::vec_mat_column(black_box(&x), black_box(&a), &mut y))
        });
        group.bench_with_input(BenchmarkId::new("rows_walk", n), &n, |b, _| {
            b.iter(|| vecmat::vec_mat_rows_walk(black_box(&x), black_box(&a), &mut y))
        });
        group.bench_with_input(BenchmarkId::new("unrolled2", n), &n, |b, _| {
            b.iter(|| vecmat::vec_mat_unrolled2(black_box(&x), black_box(&a), &mut y))
        });
        group.bench_with_input(BenchmarkId::new("unrolled4", n), &n, |b, _| {
            b.iter(|| vecmat::vec_mat_unrolled4(black_box(&x), black_box(&a), &mut y))
        });
        group.bench_with_input(BenchmarkId::new("jagged_unrolled2", n), &n, |b, _| {
            b.iter(|| vecmat::vec_mat_unrolled2(black_box(&x), black_box(&jagged), &mut y))
        });
    }

    group.finish();
}

fn bench_products(c: &mut Criterion) {
    let mut group = c.benchmark_group("products");
    let mut rng = rng();

    for &n in &VECTOR_SIZES {
        let a = random_vector(n, &mut rng);
        let b_vec = random_vector(n, &mut rng);
        let m = Matrix::random(n, n, &mut rng);
        let mut r = Matrix::zeros(n, n);

        group.bench_with_input(BenchmarkId::new("outer/ndarray", n), &n, |b, _| {
            b.iter(|| baseline::outer(black_box(&a), black_box(&b_vec), &mut r))
        });
        group.bench_with_input(BenchmarkId::new("outer/walk", n), &n, |b, _| {
            b.iter(|| products::outer_walk(black_box(&a), black_box(&b_vec), &mut r))
        });
        group.bench_with_input(BenchmarkId::new("outer/rows", n), &n, |b, _| {
            b.iter(|| products::outer_rows(black_box(&a), black_box(&b_vec), &mut r))
        });
        group.bench_with_input(BenchmarkId::new("kronecker/into", n), &n, |b, _| {
            b.iter(|| products::kronecker_into(black_box(&a), black_box(&b_vec), r.as_mut_slice()))
        });
        group.bench_with_input(BenchmarkId::new("dot_and_dot/naive", n), &n, |b, _| {
            b.iter(|| products::dot_and_dot_naive(black_box(&a), black_box(&m), black_box(&b_vec)))
        });
        group.bench_with_input(BenchmarkId::new("dot_and_dot/fused", n), &n, |b, _| {
            b.iter(|| products::dot_and_dot_fused(black_box(&a), black_box(&m), black_box(&b_vec)))
        });
        group.bench_with_input(BenchmarkId::new("dot_and_dot/unrolled2", n), &n, |b, _| {
            b.iter(|| products::dot_and_dot_unrolled2(black_box(&a), black_box(&m), black_box(&b_vec)))
        });
    }

    group.finish();
}

fn bench_gemm(c: &mut Criterion) {
    let mut group = c.benchmark_group("gemm");
    group.sample_size(20);
    let mut rng = rng();

    for &n in &MATRIX_SIZES {
        let a = Matrix::random(n, n, &mut rng);
        let b_mat = Matrix::random(n, n, &mut rng);
        let a_jagged = a.to_jagged();
        let mut out = Matrix::zeros(n, n);
        let mut scratch = vec![0.0; n];

        group.bench_with_input(BenchmarkId::new("ndarray", n), &n, |b, _| {
            b.iter(|| baseline::dot(black_box(&a), black_box(&b_mat), &mut out))
        });
        group.bench_with_input(BenchmarkId::new("naive_ijk", n), &n, |b, _| {
            b.iter(|| gemm::dot_naive_ijk(black_box(&a), black_box(&b_mat), &mut out))
        });
        group.bench_with_input(BenchmarkId::new("dot", n), &n, |b, _| {
            b.iter(|| gemm::dot(black_box(&a), black_box(&b_mat), &mut out))
        });
        group.bench_with_input(BenchmarkId::new("dot_jagged_a", n), &n, |b, _| {
            b.iter(|| gemm::dot(black_box(&a_jagged), black_box(&b_mat), &mut out))
        });
        group.bench_with_input(BenchmarkId::new("dot_with_transposed", n), &n, |b, _| {
            b.iter(|| gemm::dot_with_transposed(black_box(&a), black_box(&b_mat), &mut out))
        });
        group.bench_with_input(BenchmarkId::new("transpose_and_dot", n), &n, |b, _| {
            b.iter(|| gemm::transpose_and_dot_with_scratch(black_box(&a), black_box(&b_mat), &mut out, &mut scratch))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mat_vec, bench_vec_mat, bench_products, bench_gemm);
criterion_main!(benches);
