use pneumonia_trainer::NeuralNetwork;

const XOR_TABLE: [([f64; 2], f64); 4] = [
	([0.0, 0.0], 0.0),
	([0.0, 1.0], 1.0),
	([1.0, 0.0], 1.0),
	([1.0, 1.0], 0.0),
];

#[test]
fn xor_converges_with_backpropagation() {
	// A random init occasionally lands in the symmetric local minimum
	// of the minimal 2-2-1 topology, so allow a few fresh starts.
	let converged = (0..5).any(|_| {
		let mut nn = NeuralNetwork::new(2, 2, 1, 0.1);
		for _ in 0..10_000 {
			for (inputs, target) in &XOR_TABLE {
				nn.train(inputs, &[*target]);
			}
		}
		XOR_TABLE.iter().all(|(inputs, target)| {
			(nn.feed_forward(inputs)[0] - target).abs() < 0.1
		})
	});
	assert!(converged, "no 2-2-1 network solved XOR within 10000 epochs");
}

#[test]
fn outputs_stay_inside_the_sigmoid_range_while_training() {
	let mut nn = NeuralNetwork::new(2, 2, 1, 0.5);
	for _ in 0..100 {
		for (inputs, target) in &XOR_TABLE {
			nn.train(inputs, &[*target]);
			let y = nn.feed_forward(inputs)[0];
			assert!(y > 0.0 && y < 1.0);
		}
	}
}
