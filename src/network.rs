use crate::matrix::Matrix;

/// Fixed two-layer feedforward network (input -> hidden -> output)
/// with sigmoid activations, trained online by backpropagation.
/// Weights and biases start uniform in [-1, 1]; node counts are set at
/// construction and never change.
pub struct NeuralNetwork {
	input_nodes: usize,
	hidden_nodes: usize,
	output_nodes: usize,
	weights_ih: Matrix,
	weights_ho: Matrix,
	bias_h: Matrix,
	bias_o: Matrix,
	/// Reassigned once per epoch by the trainer's scheduler.
	pub learning_rate: f64,
}
impl NeuralNetwork {
	pub fn new(input_nodes: usize, hidden_nodes: usize, output_nodes: usize, learning_rate: f64) -> Self {
		Self {
			input_nodes,
			hidden_nodes,
			output_nodes,
			weights_ih: Matrix::random((hidden_nodes, input_nodes)),
			weights_ho: Matrix::random((output_nodes, hidden_nodes)),
			bias_h: Matrix::random((hidden_nodes, 1)),
			bias_o: Matrix::random((output_nodes, 1)),
			learning_rate,
		}
	}

	/// Returns the (hidden, output) activation columns.
	fn forward(&self, inputs: &Matrix) -> (Matrix, Matrix) {
		let mut hidden = self.weights_ih.dot(inputs) + &self.bias_h;
		hidden.map(sigmoid);

		let mut outputs = self.weights_ho.dot(&hidden) + &self.bias_o;
		outputs.map(sigmoid);

		(hidden, outputs)
	}

	pub fn feed_forward(&self, inputs: &[f64]) -> Vec<f64> {
		assert_eq!(inputs.len(), self.input_nodes, "input vector length must match input node count");
		let x = Matrix::from(inputs.to_vec());
		self.forward(&x).1.to_vec()
	}

	/// One backpropagation step against a single sample.
	pub fn train(&mut self, inputs: &[f64], targets: &[f64]) {
		assert_eq!(inputs.len(), self.input_nodes, "input vector length must match input node count");
		assert_eq!(targets.len(), self.output_nodes, "target vector length must match output node count");

		let x = Matrix::from(inputs.to_vec());
		let (hidden, outputs) = self.forward(&x);

		let output_errors = Matrix::from(targets.to_vec()) - &outputs;
		let mut gradients = Matrix::update(outputs, dsigmoid);
		gradients *= &output_errors;
		gradients *= self.learning_rate;

		self.weights_ho += gradients.dot(&hidden.transpose());
		self.bias_o += &gradients;

		// Hidden errors are taken through the already-updated
		// hidden-to-output weights.
		let hidden_errors = self.weights_ho.transpose().dot(&output_errors);
		let mut hidden_gradients = Matrix::update(hidden, dsigmoid);
		hidden_gradients *= &hidden_errors;
		hidden_gradients *= self.learning_rate;

		self.weights_ih += hidden_gradients.dot(&x.transpose());
		self.bias_h += &hidden_gradients;
	}

	pub fn input_nodes(&self) -> usize {
		self.input_nodes
	}
	pub fn hidden_nodes(&self) -> usize {
		self.hidden_nodes
	}
	pub fn output_nodes(&self) -> usize {
		self.output_nodes
	}
}

pub fn sigmoid(x: f64) -> f64 {
	1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid expressed in terms of its own output;
/// only valid when `y` is already post-sigmoid.
pub fn dsigmoid(y: f64) -> f64 {
	y * (1.0 - y)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sigmoid_is_centered_and_bounded() {
		assert_eq!(sigmoid(0.0), 0.5);
		assert!(sigmoid(40.0) < 1.0);
		assert!(sigmoid(-40.0) > 0.0);
	}

	#[test]
	fn dsigmoid_peaks_at_one_half() {
		assert_eq!(dsigmoid(0.5), 0.25);
		assert_eq!(dsigmoid(0.0), 0.0);
		assert_eq!(dsigmoid(1.0), 0.0);
	}

	#[test]
	fn feed_forward_outputs_stay_in_the_open_unit_interval() {
		let nn = NeuralNetwork::new(3, 5, 2, 0.1);
		assert_eq!((nn.input_nodes(), nn.hidden_nodes(), nn.output_nodes()), (3, 5, 2));

		for inputs in [[0.0, 0.0, 0.0], [1.0, -1.0, 0.5], [1000.0, -1000.0, 3.5]] {
			let outputs = nn.feed_forward(&inputs);
			assert_eq!(outputs.len(), nn.output_nodes());
			assert!(outputs.iter().all(|y| *y > 0.0 && *y < 1.0));
		}
	}

	#[test]
	fn training_nudges_the_output_toward_the_target() {
		let mut nn = NeuralNetwork::new(2, 3, 1, 0.5);
		let inputs = [0.25, 0.75];
		let before = nn.feed_forward(&inputs)[0];
		for _ in 0..50 {
			nn.train(&inputs, &[1.0]);
		}
		let after = nn.feed_forward(&inputs)[0];
		assert!(after > before);
	}

	#[test]
	#[should_panic]
	fn train_rejects_a_malformed_feature_vector() {
		let mut nn = NeuralNetwork::new(4, 2, 2, 0.1);
		nn.train(&[1.0, 2.0], &[1.0, 0.0]);
	}

	#[test]
	#[should_panic]
	fn train_rejects_a_malformed_target_vector() {
		let mut nn = NeuralNetwork::new(2, 2, 2, 0.1);
		nn.train(&[1.0, 2.0], &[1.0]);
	}
}
