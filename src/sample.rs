/// Ground-truth label attached by the dataset loader. `Bacteria` and
/// `Virus` collapse to the positive class, `Negative` is its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
	Bacteria,
	Virus,
	Negative,
}
impl Label {
	/// Labels come from dataset file names; anything that names neither
	/// pathogen is a clear image.
	pub fn from_path(path: &str) -> Self {
		if path.contains("bacteria") {
			Self::Bacteria
		} else if path.contains("virus") {
			Self::Virus
		} else {
			Self::Negative
		}
	}

	pub fn is_positive(&self) -> bool {
		matches!(self, Self::Bacteria | Self::Virus)
	}

	pub fn class(&self) -> Class {
		if self.is_positive() { Class::Positive } else { Class::Negative }
	}
}

/// Binary prediction outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Class {
	Positive,
	Negative,
}

/// One labeled image: grayscale intensities in raw 0-255, row-major,
/// fixed length = width * height. Immutable once produced by the
/// loader.
#[derive(Clone, Debug)]
pub struct Sample {
	pub label: Label,
	pub pixels: Vec<f64>,
}
impl Sample {
	pub fn new(label: Label, pixels: Vec<f64>) -> Self {
		Self { label, pixels }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn labels_parse_from_file_names() {
		assert_eq!(Label::from_path("person1_bacteria_1.jpeg"), Label::Bacteria);
		assert_eq!(Label::from_path("person3_virus_7.jpeg"), Label::Virus);
		assert_eq!(Label::from_path("IM-0001-0001.jpeg"), Label::Negative);
	}

	#[test]
	fn both_pathogens_are_positive() {
		assert!(Label::Bacteria.is_positive());
		assert!(Label::Virus.is_positive());
		assert!(!Label::Negative.is_positive());
		assert_eq!(Label::Virus.class(), Class::Positive);
		assert_eq!(Label::Negative.class(), Class::Negative);
	}
}
