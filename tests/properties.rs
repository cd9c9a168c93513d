//! Property tests: every optimised variant agrees with its naive reference
//! for arbitrary compatible shapes and values.

use linalg_bench::gemm::{dot, dot_naive_ijk, dot_with_transposed, transpose_and_dot_into, transpose_then_dot};
use linalg_bench::matrix::compare::all_close;
use linalg_bench::matvec::{mat_vec_no_cache, mat_vec_unrolled2, mat_vec_unrolled4, mat_vec_walk};
use linalg_bench::products::{
    dot_and_dot_fused, dot_and_dot_fused_columns, dot_and_dot_naive, dot_and_dot_unrolled2, kronecker_indexed,
    kronecker_into, outer_indexed, outer_rows, outer_walk,
};
use linalg_bench::vecmat::{
    vec_mat_column_no_cache, vec_mat_column_walk, vec_mat_rows_walk, vec_mat_unrolled2, vec_mat_unrolled4,
};
use linalg_bench::{Matrix, UnrollPlan};
use proptest::prelude::*;

const TOL: f64 = 1e-10;

// ── Strategies ───────────────────────────────────────────────────────────────

fn element() -> impl Strategy<Value = f64> {
    -1.0f64..1.0
}

fn vector(len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(element(), len)
}

fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    vector(rows * cols).prop_map(move |data| Matrix::from_vec(rows, cols, data).unwrap())
}

/// A rows×cols matrix with a length-`cols` vector.
fn matrix_and_x() -> impl Strategy<Value = (Matrix, Vec<f64>)> {
    (1usize..20, 1usize..20).prop_flat_map(|(r, c)| (matrix(r, c), vector(c)))
}

/// A length-`rows` vector with a rows×cols matrix.
fn x_and_matrix() -> impl Strategy<Value = (Vec<f64>, Matrix)> {
    (1usize..20, 1usize..20).prop_flat_map(|(r, c)| (vector(r), matrix(r, c)))
}

fn vmv() -> impl Strategy<Value = (Vec<f64>, Matrix, Vec<f64>)> {
    (1usize..20, 1usize..20).prop_flat_map(|(r, c)| (vector(r), matrix(r, c), vector(c)))
}

/// `A` n×m and `B` m×p.
fn product_pair() -> impl Strategy<Value = (Matrix, Matrix)> {
    (1usize..12, 1usize..12, 1usize..12).prop_flat_map(|(n, m, p)| (matrix(n, m), matrix(m, p)))
}

/// `A` k×m and `B` k×n, sharing their row count.
fn same_rows_pair() -> impl Strategy<Value = (Matrix, Matrix)> {
    (1usize..12, 1usize..12, 1usize..12).prop_flat_map(|(k, m, n)| (matrix(k, m), matrix(k, n)))
}

// ── Unroll plan ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn unroll_plan_covers_every_row(rows in 0usize..1000, factor in 1usize..9) {
        let plan = UnrollPlan::new(rows, factor);
        prop_assert!(plan.remainder < factor);
        prop_assert_eq!(plan.blocks * factor + plan.remainder, rows);
        prop_assert_eq!(plan.remainder_start() + plan.remainder, rows);
    }
}

// ── Matrix-vector and vector-matrix ──────────────────────────────────────────

proptest! {
    #[test]
    fn mat_vec_variants_match_reference((a, x) in matrix_and_x()) {
        let mut expected = vec![0.0; a.rows()];
        mat_vec_no_cache(&a, &x, &mut expected);

        for f in [mat_vec_walk, mat_vec_unrolled2, mat_vec_unrolled4] {
            let mut y = vec![f64::NAN; a.rows()];
            f(&a, &x, &mut y);
            prop_assert!(all_close(&expected, &y, TOL));
        }
    }

    #[test]
    fn vec_mat_variants_match_reference((x, a) in x_and_matrix()) {
        let mut expected = vec![0.0; a.cols()];
        vec_mat_column_no_cache(&x, &a, &mut expected);

        let mut y = vec![f64::NAN; a.cols()];
        vec_mat_column_walk(&x, &a, &mut y);
        prop_assert!(all_close(&expected, &y, TOL));

        let jagged = a.to_jagged();
        y.fill(f64::NAN);
        vec_mat_rows_walk(&x, &jagged, &mut y);
        prop_assert!(all_close(&expected, &y, TOL));
        y.fill(f64::NAN);
        vec_mat_unrolled2(&x, &jagged, &mut y);
        prop_assert!(all_close(&expected, &y, TOL));
        y.fill(f64::NAN);
        vec_mat_unrolled4(&x, &a, &mut y);
        prop_assert!(all_close(&expected, &y, TOL));
    }
}

// ── Products ─────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn outer_variants_agree(a in prop::collection::vec(element(), 1..20), b in prop::collection::vec(element(), 1..20)) {
        let mut expected = Matrix::zeros(a.len(), b.len());
        outer_indexed(&a, &b, &mut expected);

        let mut r = Matrix::zeros(a.len(), b.len());
        r.as_mut_slice().fill(f64::NAN);
        outer_walk(&a, &b, &mut r);
        prop_assert_eq!(&expected, &r);
        r.as_mut_slice().fill(f64::NAN);
        outer_rows(&a, &b, &mut r);
        prop_assert_eq!(&expected, &r);
    }

    #[test]
    fn kronecker_variants_agree(a in prop::collection::vec(element(), 1..20), b in prop::collection::vec(element(), 1..20)) {
        let mut expected = vec![0.0; a.len() * b.len()];
        kronecker_indexed(&a, &b, &mut expected);

        let mut out = vec![f64::NAN; a.len() * b.len()];
        kronecker_into(&a, &b, &mut out);
        prop_assert_eq!(expected, out);
    }

    #[test]
    fn dot_and_dot_variants_match_two_step((a, m, b) in vmv()) {
        let expected = dot_and_dot_naive(&a, &m, &b);
        for got in [
            dot_and_dot_fused(&a, &m, &b),
            dot_and_dot_fused_columns(&a, &m, &b),
            dot_and_dot_unrolled2(&a, &m, &b),
        ] {
            prop_assert!((expected - got).abs() <= TOL, "expected {}, got {}", expected, got);
        }
    }
}

// ── Matrix-matrix ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn dot_variants_match_naive((a, b) in product_pair()) {
        let mut expected = Matrix::zeros(a.rows(), b.cols());
        dot_naive_ijk(&a, &b, &mut expected);

        let mut c = Matrix::zeros(a.rows(), b.cols());
        c.as_mut_slice().fill(f64::NAN);
        dot(&a.to_jagged(), &b, &mut c);
        prop_assert!(all_close(expected.as_slice(), c.as_slice(), TOL));

        c.as_mut_slice().fill(f64::NAN);
        dot_with_transposed(&a, &b.transpose(), &mut c);
        prop_assert!(all_close(expected.as_slice(), c.as_slice(), TOL));
    }

    #[test]
    fn transpose_and_dot_matches_explicit_transpose((a, b) in same_rows_pair()) {
        let mut expected = Matrix::zeros(a.cols(), b.cols());
        transpose_then_dot(&a, &b, &mut expected);

        let mut c = Matrix::zeros(a.cols(), b.cols());
        c.as_mut_slice().fill(f64::NAN);
        transpose_and_dot_into(&a, &b, &mut c).unwrap();
        prop_assert!(all_close(expected.as_slice(), c.as_slice(), TOL));
    }
}
