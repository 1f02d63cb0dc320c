use std::sync::Arc;
use std::thread;
use std::time::Duration;

use rand::Rng;

use pneumonia_trainer::{
	start_training, Label, LearningRateScheduler, ModelKind, Sample, TrainingOptions,
	TrainingSession,
};

const IMAGE_SIZE: (usize, usize) = (50, 50);

fn main() {
	let train_set = Arc::new(synthetic_split(600));
	let val_set = Arc::new(synthetic_split(200));

	run_demo(
		"perceptron",
		TrainingOptions {
			epochs: 20,
			model: ModelKind::Perceptron,
			scheduler: LearningRateScheduler::ExpoDecay { rate: 0.1, decay_rate: 0.05 },
		},
		train_set.clone(),
		val_set.clone(),
	);

	run_demo(
		"neural network",
		TrainingOptions {
			epochs: 20,
			model: ModelKind::NeuralNetwork { hidden_nodes: 4 },
			scheduler: LearningRateScheduler::CosineAnnealing { rate_min: 0.01, rate_max: 0.1 },
		},
		train_set,
		val_set,
	);
}

fn run_demo(
	name: &str,
	options: TrainingOptions,
	train_set: Arc<Vec<Sample>>,
	val_set: Arc<Vec<Sample>>,
) {
	println!("Training {} with {} scheduling...", name, options.scheduler);

	let session = Arc::new(TrainingSession::new(options, IMAGE_SIZE.0 * IMAGE_SIZE.1));
	let handle = start_training(session.clone(), train_set, val_set);

	while !session.is_finished() {
		thread::sleep(Duration::from_millis(200));
		let (curr, max) = session.progress();
		println!("  progress: {}/{}", curr, max);
	}
	handle.join().expect("training thread panicked");

	println!("{}", session.export_results());
}

// Positive samples are brighter overall; enough signal for both model
// kinds to separate within a few epochs.
fn synthetic_split(count: usize) -> Vec<Sample> {
	let mut rng = rand::rng();
	(0..count)
		.map(|i| {
			let label = match i % 4 {
				0 => Label::Bacteria,
				2 => Label::Virus,
				_ => Label::Negative,
			};
			let range = if label.is_positive() { 128.0..256.0 } else { 0.0..128.0 };
			let pixels = (0..IMAGE_SIZE.0 * IMAGE_SIZE.1)
				.map(|_| rng.random_range(range.clone()))
				.collect();
			Sample::new(label, pixels)
		})
		.collect()
}
