use std::{fmt::Display, ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign}};

use rand::Rng;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Dense row-major matrix. Every binary operation checks operand
/// shapes and panics on a mismatch instead of reshaping.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
	pub shape: (usize, usize),
	data: Vec<f64>,
}
impl Matrix {
	pub fn new(shape: (usize, usize), data: Vec<f64>) -> Self {
		assert_eq!(shape.0 * shape.1, data.len());
		Self { shape, data }
	}
	pub fn zero(shape: (usize, usize)) -> Self {
		Self::new(shape, vec![0.0; shape.0 * shape.1])
	}
	/// A matrix with every element drawn uniformly from [-1, 1].
	pub fn random(shape: (usize, usize)) -> Self {
		let mut mat = Self::zero(shape);
		mat.randomize();
		mat
	}
	/// Refills every element with a uniform value in [-1, 1].
	pub fn randomize(&mut self) {
		self.for_each_row(|row| {
			let mut rng = rand::rng();
			row.iter_mut().for_each(|x| *x = rng.random_range(-1.0..1.0));
		});
	}
	pub fn get(&self, row: usize, col: usize) -> f64 {
		self.data[row * self.shape.1 + col]
	}
	/// Flat row-major copy; the exact inverse of `Matrix::from(vec)`
	/// for column matrices.
	pub fn to_vec(&self) -> Vec<f64> {
		self.data.clone()
	}
	/// Matrix product. Rows of the result are independent, so they are
	/// computed in parallel when the `rayon` feature is enabled.
	pub fn dot(&self, other: &Matrix) -> Matrix {
		assert_eq!(self.shape.1, other.shape.0, "inner dimensions must agree for a matrix product");
		let (rows, cols) = (self.shape.0, other.shape.1);
		let inner = self.shape.1;
		let lhs = &self.data;
		let rhs = &other.data;
		let mut out = Matrix::zero((rows, cols));

		let row_product = move |i: usize, out_row: &mut [f64]| {
			for (t, &a) in lhs[i * inner..(i + 1) * inner].iter().enumerate() {
				let rhs_row = &rhs[t * cols..(t + 1) * cols];
				out_row.iter_mut()
					.zip(rhs_row)
					.for_each(|(o, &b)| *o += a * b);
			}
		};
		#[cfg(feature = "rayon")]
		out.data.par_chunks_mut(cols).enumerate().for_each(|(i, row)| row_product(i, row));
		#[cfg(not(feature = "rayon"))]
		out.data.chunks_mut(cols).enumerate().for_each(|(i, row)| row_product(i, row));
		out
	}
	pub fn transpose(&self) -> Matrix {
		let (rows, cols) = self.shape;
		let mut data = vec![0.0; rows * cols];

		for i in 0..cols {
			for j in 0..rows {
				data[i * rows + j] = self.get(j, i);
			}
		}
		Matrix::new((cols, rows), data)
	}
	/// Applies `f` to every element in place.
	pub fn map(&mut self, f: fn(f64) -> f64) {
		self.for_each_row(|row| row.iter_mut().for_each(|x| *x = f(*x)));
	}
	/// Moving variant of `map`.
	pub fn update(mut mat: Matrix, f: fn(f64) -> f64) -> Matrix {
		mat.map(f);
		mat
	}
	fn for_each_row<F>(&mut self, f: F)
	where
		F: Fn(&mut [f64]) + Send + Sync,
	{
		let cols = self.shape.1;
		#[cfg(feature = "rayon")]
		self.data.par_chunks_mut(cols).for_each(|row| f(row));
		#[cfg(not(feature = "rayon"))]
		self.data.chunks_mut(cols).for_each(|row| f(row));
	}
	pub fn iter(&self) -> impl Iterator<Item = &f64> {
		self.data.iter()
	}
}
/// Flat sequence as a column matrix (n x 1).
impl From<Vec<f64>> for Matrix {
	fn from(data: Vec<f64>) -> Self {
		let shape = (data.len(), 1);
		Self::new(shape, data)
	}
}
impl AddAssign<&Matrix> for Matrix {
	fn add_assign(&mut self, other: &Matrix) {
		assert_eq!(self.shape, other.shape);
		self.data.iter_mut().zip(other.data.iter())
			.for_each(|(a, b)| *a += b);
	}
}
impl AddAssign<Matrix> for Matrix {
	fn add_assign(&mut self, other: Matrix) {
		self.add_assign(&other);
	}
}
impl Add<&Matrix> for Matrix {
	type Output = Matrix;

	fn add(mut self, other: &Matrix) -> Self::Output {
		self.add_assign(other);
		self
	}
}
impl Add<Matrix> for Matrix {
	type Output = Matrix;

	fn add(self, other: Matrix) -> Self::Output {
		self + &other
	}
}
impl SubAssign<&Matrix> for Matrix {
	fn sub_assign(&mut self, other: &Matrix) {
		assert_eq!(self.shape, other.shape);
		self.data.iter_mut().zip(other.data.iter())
			.for_each(|(a, b)| *a -= b);
	}
}
impl SubAssign<Matrix> for Matrix {
	fn sub_assign(&mut self, other: Matrix) {
		self.sub_assign(&other);
	}
}
impl Sub<&Matrix> for Matrix {
	type Output = Matrix;

	fn sub(mut self, other: &Matrix) -> Self::Output {
		self.sub_assign(other);
		self
	}
}
impl Sub<Matrix> for Matrix {
	type Output = Matrix;

	fn sub(self, other: Matrix) -> Self::Output {
		self - &other
	}
}
/// Elementwise (Hadamard) product; equal shapes required.
impl MulAssign<&Matrix> for Matrix {
	fn mul_assign(&mut self, other: &Matrix) {
		assert_eq!(self.shape, other.shape);
		self.data.iter_mut().zip(other.data.iter())
			.for_each(|(a, b)| *a *= b);
	}
}
impl Mul<&Matrix> for Matrix {
	type Output = Matrix;

	fn mul(mut self, other: &Matrix) -> Self::Output {
		self.mul_assign(other);
		self
	}
}
impl MulAssign<f64> for Matrix {
	fn mul_assign(&mut self, scalar: f64) {
		self.data.iter_mut().for_each(|x| *x *= scalar);
	}
}
impl Mul<f64> for Matrix {
	type Output = Matrix;

	fn mul(mut self, scalar: f64) -> Self::Output {
		self.mul_assign(scalar);
		self
	}
}
impl Display for Matrix {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Matrix{{{}x{}}}", self.shape.0, self.shape.1)
	}
}
