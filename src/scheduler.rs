use std::f64::consts::PI;
use std::fmt;

/// Learning-rate schedule: a pure function from epoch index to rate.
/// `total_epochs` is only read by cosine annealing but is always
/// passed so the trainer's call site stays branch-free.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LearningRateScheduler {
	Constant { rate: f64 },
	StepDecay { rate: f64, decay_factor: f64, step_size: usize },
	ExpoDecay { rate: f64, decay_rate: f64 },
	CosineAnnealing { rate_min: f64, rate_max: f64 },
}
impl LearningRateScheduler {
	pub fn rate(&self, epoch: usize, total_epochs: usize) -> f64 {
		match *self {
			Self::Constant { rate } => rate,
			Self::StepDecay { rate, decay_factor, step_size } => {
				rate * decay_factor.powi(((epoch + 1) / step_size) as i32)
			}
			Self::ExpoDecay { rate, decay_rate } => {
				rate * (-decay_rate * epoch as f64).exp()
			}
			Self::CosineAnnealing { rate_min, rate_max } => {
				rate_min + 0.5 * (rate_max - rate_min)
					* (1.0 + (epoch as f64 / total_epochs as f64 * PI).cos())
			}
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			Self::Constant { .. } => "Constant",
			Self::StepDecay { .. } => "Step Decay",
			Self::ExpoDecay { .. } => "Exponential Decay",
			Self::CosineAnnealing { .. } => "Cosine Annealing",
		}
	}
}
impl fmt::Display for LearningRateScheduler {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn constant_never_moves() {
		let s = LearningRateScheduler::Constant { rate: 0.3 };
		for epoch in 0..100 {
			assert_eq!(s.rate(epoch, 100), 0.3);
		}
	}

	#[test]
	fn step_decay_halves_every_step() {
		let s = LearningRateScheduler::StepDecay { rate: 1.0, decay_factor: 0.5, step_size: 1 };
		assert_eq!(s.rate(0, 10), 0.5);
		assert_eq!(s.rate(1, 10), 0.25);
		assert_eq!(s.rate(2, 10), 0.125);
	}

	#[test]
	fn step_decay_holds_between_steps() {
		let s = LearningRateScheduler::StepDecay { rate: 1.0, decay_factor: 0.5, step_size: 10 };
		// floor((epoch + 1) / 10) stays 0 for the first nine epochs.
		assert_eq!(s.rate(0, 100), 1.0);
		assert_eq!(s.rate(8, 100), 1.0);
		assert_eq!(s.rate(9, 100), 0.5);
		assert_eq!(s.rate(19, 100), 0.25);
	}

	#[test]
	fn expo_decay_follows_the_exponential() {
		let s = LearningRateScheduler::ExpoDecay { rate: 0.5, decay_rate: 0.1 };
		assert_eq!(s.rate(0, 10), 0.5);
		assert!((s.rate(10, 10) - 0.5 * (-1.0f64).exp()).abs() < 1e-12);
	}

	#[test]
	fn cosine_annealing_spans_min_to_max() {
		let s = LearningRateScheduler::CosineAnnealing { rate_min: 0.01, rate_max: 0.1 };
		assert!((s.rate(0, 100) - 0.1).abs() < 1e-12);
		assert!((s.rate(50, 100) - 0.055).abs() < 1e-12);
		assert!((s.rate(100, 100) - 0.01).abs() < 1e-12);
	}

	#[test]
	fn schedules_are_pure() {
		let s = LearningRateScheduler::ExpoDecay { rate: 0.2, decay_rate: 0.05 };
		assert_eq!(s.rate(7, 30), s.rate(7, 30));
	}
}
