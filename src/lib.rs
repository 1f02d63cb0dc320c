//! Training engine for binary pneumonia image classification: a dense
//! matrix type, a threshold perceptron and a two-layer sigmoid network
//! trained by backpropagation, learning-rate schedules, and the
//! per-run session that sweeps epochs and records confusion-matrix
//! metrics.
//!
//! Image decoding, plotting, and UI are external collaborators; the
//! engine consumes already-materialized grayscale pixel vectors and
//! exposes history, predictions, and CSV export.

pub mod matrix;
pub mod metrics;
pub mod network;
pub mod perceptron;
pub mod sample;
pub mod scheduler;
pub mod trainer;

pub use matrix::Matrix;
pub use metrics::{export_csv, Confusion, EpochMetric};
pub use network::NeuralNetwork;
pub use perceptron::Perceptron;
pub use sample::{Class, Label, Sample};
pub use scheduler::LearningRateScheduler;
pub use trainer::{start_training, Model, ModelKind, TrainingOptions, TrainingSession};
