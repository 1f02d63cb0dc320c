use crate::sample::{Class, Label};

/// Binary confusion-matrix tallies for one validation sweep.
///
/// The ratio methods are plain f64 divisions: a zero denominator (for
/// example a validation split with no positive samples) yields NaN,
/// which is recorded as-is rather than treated as an error.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Confusion {
	pub true_pos: usize,
	pub false_pos: usize,
	pub true_neg: usize,
	pub false_neg: usize,
}
impl Confusion {
	pub fn record(&mut self, guess: Class, label: Label) {
		match (guess, label.is_positive()) {
			(Class::Positive, true) => self.true_pos += 1,
			(Class::Positive, false) => self.false_pos += 1,
			(Class::Negative, false) => self.true_neg += 1,
			(Class::Negative, true) => self.false_neg += 1,
		}
	}

	pub fn total(&self) -> usize {
		self.true_pos + self.false_pos + self.true_neg + self.false_neg
	}

	/// Percentage of correct guesses over the whole sweep.
	pub fn accuracy(&self) -> f64 {
		100.0 * (self.true_pos + self.true_neg) as f64 / self.total() as f64
	}
	pub fn tpr(&self) -> f64 {
		self.true_pos as f64 / (self.true_pos + self.false_neg) as f64
	}
	pub fn fpr(&self) -> f64 {
		self.false_pos as f64 / (self.false_pos + self.true_neg) as f64
	}
	pub fn tnr(&self) -> f64 {
		self.true_neg as f64 / (self.true_neg + self.false_pos) as f64
	}
	pub fn fnr(&self) -> f64 {
		self.false_neg as f64 / (self.false_neg + self.true_pos) as f64
	}
}

/// One row of a run's history, appended after each validation sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpochMetric {
	pub epoch: usize,
	pub accuracy: f64,
	pub tpr: f64,
	pub fpr: f64,
	pub tnr: f64,
	pub fnr: f64,
	pub learning_rate: f64,
}

/// Renders a recorded history as CSV: one header line plus one row per
/// epoch, first field the zero-based epoch index.
pub fn export_csv(history: &[EpochMetric]) -> String {
	let mut out = String::from("Epoch,Accuracy,TPR,FPR,TNR,FNR\n");
	for m in history {
		out.push_str(&format!(
			"{},{},{},{},{},{}\n",
			m.epoch, m.accuracy, m.tpr, m.fpr, m.tnr, m.fnr,
		));
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample_confusion() -> Confusion {
		Confusion { true_pos: 6, false_pos: 1, true_neg: 2, false_neg: 3 }
	}

	#[test]
	fn tallies_land_in_the_right_cells() {
		let mut c = Confusion::default();
		c.record(Class::Positive, Label::Bacteria);
		c.record(Class::Positive, Label::Negative);
		c.record(Class::Negative, Label::Negative);
		c.record(Class::Negative, Label::Virus);

		assert_eq!(c, Confusion { true_pos: 1, false_pos: 1, true_neg: 1, false_neg: 1 });
		assert_eq!(c.total(), 4);
	}

	#[test]
	fn ratios_match_their_definitions() {
		let c = sample_confusion();
		assert!((c.accuracy() - 100.0 * 8.0 / 12.0).abs() < 1e-12);
		assert!((c.tpr() - 6.0 / 9.0).abs() < 1e-12);
		assert!((c.fpr() - 1.0 / 3.0).abs() < 1e-12);
		assert!((c.tnr() - 2.0 / 3.0).abs() < 1e-12);
		assert!((c.fnr() - 3.0 / 9.0).abs() < 1e-12);
	}

	#[test]
	fn zero_denominators_give_nan_not_a_panic() {
		let mut c = Confusion::default();
		c.record(Class::Negative, Label::Negative);
		c.record(Class::Positive, Label::Negative);

		assert!(c.tpr().is_nan());
		assert!(c.fnr().is_nan());
		assert!(c.fpr().is_finite());
		assert!(c.tnr().is_finite());
	}

	#[test]
	fn csv_has_header_plus_one_row_per_epoch() {
		let history: Vec<EpochMetric> = (0..4)
			.map(|epoch| EpochMetric {
				epoch,
				accuracy: 50.0,
				tpr: 0.5,
				fpr: 0.5,
				tnr: 0.5,
				fnr: 0.5,
				learning_rate: 0.1,
			})
			.collect();
		let csv = export_csv(&history);
		let lines: Vec<&str> = csv.lines().collect();

		assert_eq!(lines.len(), 5);
		assert_eq!(lines[0], "Epoch,Accuracy,TPR,FPR,TNR,FNR");
		for (i, line) in lines[1..].iter().enumerate() {
			assert_eq!(line.split(',').next(), Some(i.to_string().as_str()));
		}
	}

	#[test]
	fn csv_of_an_empty_history_is_just_the_header() {
		assert_eq!(export_csv(&[]).lines().count(), 1);
	}
}
