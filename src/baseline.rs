//! The library implementation every hand-written variant is measured against.
//!
//! Each function routes the same operation through `ndarray`
//! (`general_mat_vec_mul`, `general_mat_mul`, `dot`, `kron`). Shapes are
//! validated up front and reported as [`KernelError::DimensionMismatch`], so
//! a misconfigured scenario fails instead of panicking inside ndarray.

use ndarray::linalg::{general_mat_mul, general_mat_vec_mul, kron};
use ndarray::{ArrayView1, ArrayViewMut1, Axis};

use crate::error::KernelError;
use crate::matrix::Matrix;

fn ensure(ok: bool, op: &'static str, left: (usize, usize), right: (usize, usize)) -> Result<(), KernelError> {
    if ok { Ok(()) } else { Err(KernelError::mismatch(op, left, right)) }
}

/// `y = A·x`.
pub fn mat_vec(a: &Matrix, x: &[f64], y: &mut [f64]) -> Result<(), KernelError> {
    ensure(x.len() == a.cols(), "mat_vec", a.shape(), (x.len(), 1))?;
    ensure(y.len() == a.rows(), "mat_vec", (a.rows(), 1), (y.len(), 1))?;

    let mut yv = ArrayViewMut1::from(y);
    general_mat_vec_mul(1.0, &a.as_array()?, &ArrayView1::from(x), 0.0, &mut yv);
    Ok(())
}

/// `y = xᵗ·A`.
pub fn vec_mat(x: &[f64], a: &Matrix, y: &mut [f64]) -> Result<(), KernelError> {
    ensure(x.len() == a.rows(), "vec_mat", (1, x.len()), a.shape())?;
    ensure(y.len() == a.cols(), "vec_mat", (1, a.cols()), (1, y.len()))?;

    let mut yv = ArrayViewMut1::from(y);
    general_mat_vec_mul(1.0, &a.as_array()?.t(), &ArrayView1::from(x), 0.0, &mut yv);
    Ok(())
}

/// `a·(M·b)`, materialising `M·b` the way a general-purpose library does.
pub fn dot_and_dot(a: &[f64], m: &Matrix, b: &[f64]) -> Result<f64, KernelError> {
    ensure(a.len() == m.rows(), "dot_and_dot", (1, a.len()), m.shape())?;
    ensure(b.len() == m.cols(), "dot_and_dot", m.shape(), (b.len(), 1))?;

    let mb = m.as_array()?.dot(&ArrayView1::from(b));
    Ok(ArrayView1::from(a).dot(&mb))
}

/// `R = a·bᵗ`, as a rank-one matrix product.
pub fn outer(a: &[f64], b: &[f64], r: &mut Matrix) -> Result<(), KernelError> {
    ensure(r.shape() == (a.len(), b.len()), "outer", (a.len(), b.len()), r.shape())?;

    let col = ArrayView1::from(a).insert_axis(Axis(1));
    let row = ArrayView1::from(b).insert_axis(Axis(0));
    general_mat_mul(1.0, &col, &row, 0.0, &mut r.as_array_mut()?);
    Ok(())
}

/// Vector Kronecker product, as the `1×m ⊗ 1×n` matrix Kronecker product.
pub fn kronecker(a: &[f64], b: &[f64], out: &mut [f64]) -> Result<(), KernelError> {
    ensure(out.len() == a.len() * b.len(), "kronecker", (a.len(), b.len()), (1, out.len()))?;
    // kron divides by the operand width
    if a.is_empty() || b.is_empty() {
        return Ok(());
    }

    let ka = ArrayView1::from(a).insert_axis(Axis(0));
    let kb = ArrayView1::from(b).insert_axis(Axis(0));
    let k = kron(&ka, &kb);
    for (dst, &v) in out.iter_mut().zip(k.iter()) {
        *dst = v;
    }
    Ok(())
}

/// Block Kronecker product of two dense matrices.
pub fn kronecker_blocks(a: &Matrix, b: &Matrix, out: &mut Matrix) -> Result<(), KernelError> {
    let expected = (a.rows() * b.rows(), a.cols() * b.cols());
    ensure(out.shape() == expected, "kronecker_blocks", expected, out.shape())?;
    if expected.0 == 0 || expected.1 == 0 {
        return Ok(());
    }

    let k = kron(&a.as_array()?, &b.as_array()?);
    out.as_array_mut()?.assign(&k);
    Ok(())
}

/// `C = A·B`.
pub fn dot(a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<(), KernelError> {
    ensure(a.cols() == b.rows(), "dot", a.shape(), b.shape())?;
    ensure(c.shape() == (a.rows(), b.cols()), "dot", (a.rows(), b.cols()), c.shape())?;

    general_mat_mul(1.0, &a.as_array()?, &b.as_array()?, 0.0, &mut c.as_array_mut()?);
    Ok(())
}

/// `C = A·Bᵗ`.
pub fn dot_with_transposed(a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<(), KernelError> {
    ensure(a.cols() == b.cols(), "dot_with_transposed", a.shape(), b.shape())?;
    ensure(c.shape() == (a.rows(), b.rows()), "dot_with_transposed", (a.rows(), b.rows()), c.shape())?;

    general_mat_mul(1.0, &a.as_array()?, &b.as_array()?.t(), 0.0, &mut c.as_array_mut()?);
    Ok(())
}

/// `C = Aᵗ·B`.
pub fn transpose_and_dot(a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<(), KernelError> {
    ensure(a.rows() == b.rows(), "transpose_and_dot", a.shape(), b.shape())?;
    ensure(c.shape() == (a.cols(), b.cols()), "transpose_and_dot", (a.cols(), b.cols()), c.shape())?;

    general_mat_mul(1.0, &a.as_array()?.t(), &b.as_array()?, 0.0, &mut c.as_array_mut()?);
    Ok(())
}
