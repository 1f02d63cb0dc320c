use rand::Rng;

/// Single-layer linear threshold classifier.
///
/// The weight vector carries one extra slot for the bias weight; the
/// caller appends a constant 1 to the input vector so the bias is
/// learned like any other weight.
pub struct Perceptron {
	weights: Vec<f64>,
	pub learning_rate: f64,
}
impl Perceptron {
	pub fn new(input_size: usize, learning_rate: f64) -> Self {
		let mut rng = rand::rng();
		Self {
			weights: (0..input_size + 1)
				.map(|_| rng.random_range(-1.0..1.0))
				.collect(),
			learning_rate,
		}
	}

	/// Step activation: 1 if the weighted sum is above 0, else 0.
	pub fn activate(&self, inputs: &[f64]) -> f64 {
		assert_eq!(inputs.len(), self.weights.len(), "input vector length must match weight count");
		let sum: f64 = self.weights.iter()
			.zip(inputs)
			.map(|(w, x)| w * x)
			.sum();
		if sum > 0.0 { 1.0 } else { 0.0 }
	}

	/// Online update rule: leaves the weights untouched when the sample
	/// is already classified correctly.
	pub fn train(&mut self, inputs: &[f64], desired: f64) {
		let error = desired - self.activate(inputs);
		if error == 0.0 {
			return;
		}

		let rate = self.learning_rate;
		self.weights.iter_mut()
			.zip(inputs)
			.for_each(|(w, x)| *w += rate * error * x);
	}

	pub fn weights(&self) -> &[f64] {
		&self.weights
	}
}
