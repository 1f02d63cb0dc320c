use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use chrono::Local;

use crate::metrics::{export_csv, Confusion, EpochMetric};
use crate::network::NeuralNetwork;
use crate::perceptron::Perceptron;
use crate::sample::{Class, Label, Sample};
use crate::scheduler::LearningRateScheduler;

/// One-hot index of the positive class in the network's output layer:
/// positive encodes as [1, 0], negative as [0, 1].
const POSITIVE_INDEX: usize = 0;

const NETWORK_OUTPUT_NODES: usize = 2;

/// Model selection happens once, at session construction; every later
/// call dispatches on this tag.
pub enum Model {
	Perceptron(Perceptron),
	NeuralNetwork(NeuralNetwork),
}
impl Model {
	fn set_learning_rate(&mut self, rate: f64) {
		match self {
			Model::Perceptron(p) => p.learning_rate = rate,
			Model::NeuralNetwork(nn) => nn.learning_rate = rate,
		}
	}

	/// Applies the fixed target encoding and the per-kind input
	/// convention (the perceptron gets a trailing constant-1 bias
	/// feature) before the sample update.
	fn train(&mut self, features: &[f64], label: Label) {
		match self {
			Model::Perceptron(p) => {
				let mut inputs = features.to_vec();
				inputs.push(1.0);
				p.train(&inputs, if label.is_positive() { 1.0 } else { 0.0 });
			}
			Model::NeuralNetwork(nn) => {
				let targets = if label.is_positive() { [1.0, 0.0] } else { [0.0, 1.0] };
				nn.train(features, &targets);
			}
		}
	}

	pub fn predict(&self, features: &[f64]) -> Class {
		let positive = match self {
			Model::Perceptron(p) => {
				let mut inputs = features.to_vec();
				inputs.push(1.0);
				p.activate(&inputs) == 1.0
			}
			Model::NeuralNetwork(nn) => argmax(&nn.feed_forward(features)) == POSITIVE_INDEX,
		};
		if positive { Class::Positive } else { Class::Negative }
	}
}

fn argmax(values: &[f64]) -> usize {
	values.iter().enumerate()
		.max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
		.map(|(i, _)| i)
		.unwrap_or(0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ModelKind {
	Perceptron,
	NeuralNetwork { hidden_nodes: usize },
}

#[derive(Clone, Copy, Debug)]
pub struct TrainingOptions {
	pub epochs: usize,
	pub model: ModelKind,
	pub scheduler: LearningRateScheduler,
}

/// One training run: a freshly randomized model, its scheduler, and
/// the metrics history it produces. Constructed per run and shared
/// with observers; there is no process-wide training state.
///
/// The model is owned exclusively by the run for its lifetime (the
/// lock is held across the whole epoch loop), so two runs can never
/// interleave updates on one model.
pub struct TrainingSession {
	options: TrainingOptions,
	input_size: usize,
	model: Mutex<Model>,
	history: Mutex<Vec<EpochMetric>>,
	completed_epochs: AtomicUsize,
	cancelled: AtomicBool,
}
impl TrainingSession {
	pub fn new(options: TrainingOptions, input_size: usize) -> Self {
		let rate = options.scheduler.rate(0, options.epochs);
		let model = match options.model {
			ModelKind::Perceptron => Model::Perceptron(Perceptron::new(input_size, rate)),
			ModelKind::NeuralNetwork { hidden_nodes } => Model::NeuralNetwork(
				NeuralNetwork::new(input_size, hidden_nodes, NETWORK_OUTPUT_NODES, rate),
			),
		};
		Self {
			options,
			input_size,
			model: Mutex::new(model),
			history: Mutex::new(Vec::with_capacity(options.epochs)),
			completed_epochs: AtomicUsize::new(0),
			cancelled: AtomicBool::new(false),
		}
	}

	/// The epoch loop: reassign the learning rate from the scheduler,
	/// sweep the training split in dataset order, validate, record.
	/// The cancellation token is checked once per epoch boundary, so a
	/// cancelled run keeps every metric it already recorded.
	pub fn run(&self, train_set: &[Sample], val_set: &[Sample]) {
		let mut model = self.model.lock().unwrap();

		for epoch in 0..self.options.epochs {
			if self.cancelled.load(Ordering::SeqCst) {
				break;
			}
			let t = Local::now();

			let rate = self.options.scheduler.rate(epoch, self.options.epochs);
			model.set_learning_rate(rate);

			for sample in train_set {
				let features = self.features_of(sample);
				model.train(&features, sample.label);
			}

			let metric = self.validate(&model, val_set, epoch, rate);
			println!(
				"Epoch[{}] {:.1}% (tpr={:.3}, fpr={:.3}, rate={:.5}, {}s elapsed)",
				epoch, metric.accuracy, metric.tpr, metric.fpr, rate,
				(Local::now() - t).num_seconds(),
			);

			self.history.lock().unwrap().push(metric);
			self.completed_epochs.fetch_add(1, Ordering::SeqCst);
		}
	}

	fn validate(&self, model: &Model, val_set: &[Sample], epoch: usize, rate: f64) -> EpochMetric {
		let mut confusion = Confusion::default();
		for sample in val_set {
			let features = self.features_of(sample);
			confusion.record(model.predict(&features), sample.label);
		}
		EpochMetric {
			epoch,
			accuracy: confusion.accuracy(),
			tpr: confusion.tpr(),
			fpr: confusion.fpr(),
			tnr: confusion.tnr(),
			fnr: confusion.fnr(),
			learning_rate: rate,
		}
	}

	/// Raw 0-255 intensities scaled to [0, 1]; the one normalization
	/// convention for both model kinds, training and validation alike.
	fn features_of(&self, sample: &Sample) -> Vec<f64> {
		assert_eq!(sample.pixels.len(), self.input_size, "pixel vector length must match the model input size");
		sample.pixels.iter().map(|p| p / 255.0).collect()
	}

	/// Classifies a single pixel vector with the model as trained so
	/// far. Blocks while a run holds the model.
	pub fn predict(&self, pixels: &[f64]) -> Class {
		assert_eq!(pixels.len(), self.input_size, "pixel vector length must match the model input size");
		let features: Vec<f64> = pixels.iter().map(|p| p / 255.0).collect();
		self.model.lock().unwrap().predict(&features)
	}

	/// Requests cooperative termination at the next epoch boundary.
	pub fn cancel(&self) {
		self.cancelled.store(true, Ordering::SeqCst);
	}

	/// (completed epochs, requested epochs)
	pub fn progress(&self) -> (usize, usize) {
		(self.completed_epochs.load(Ordering::SeqCst), self.options.epochs)
	}

	pub fn is_finished(&self) -> bool {
		self.completed_epochs.load(Ordering::SeqCst) == self.options.epochs
			|| self.cancelled.load(Ordering::SeqCst)
	}

	/// Snapshot of the append-only metrics history.
	pub fn history(&self) -> Vec<EpochMetric> {
		self.history.lock().unwrap().clone()
	}

	pub fn export_results(&self) -> String {
		export_csv(&self.history())
	}
}

/// Starts the run on its own worker thread; the caller keeps the
/// session handle for polling progress, reading history, cancelling,
/// or predicting once the run completes.
pub fn start_training(
	session: Arc<TrainingSession>,
	train_set: Arc<Vec<Sample>>,
	val_set: Arc<Vec<Sample>>,
) -> JoinHandle<()> {
	thread::spawn(move || session.run(&train_set, &val_set))
}
