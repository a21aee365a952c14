use std::num::ParseFloatError;

/// Tokens per line for records with `x y z quality extra`.
pub const SPATIAL_TOKENS: usize = 5;

/// Tokens per line for records with `a b x y extra quality`.
pub const PLANAR_TOKENS: usize = 6;

/// One data point.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Record {
	pub x: f64,
	pub y: f64,
	pub z: f64,
	pub quality: f64,
}

impl Record {
	pub fn new(x: f64, y: f64, z: f64, quality: f64) -> Self {
		Self { x, y, z, quality }
	}
}

/// Classification of a single input line.
///
/// Two record layouts share one file, they are told apart by the token count.
/// Fields not listed here are opaque and never parsed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Line {
	/// `x y z quality _`
	Spatial(Record),
	/// `_ _ x y _ quality`, z is always zero.
	Planar(Record),
	/// Any other token count, skipped by the reader.
	Unrecognized { tokens: usize },
}

#[cfg(test)]
impl Line {
	pub fn record(&self) -> Option<Record> {
		match *self {
			Self::Spatial(record) | Self::Planar(record) => Some(record),
			Self::Unrecognized { .. } => None,
		}
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("invalid number {token:?}: {source}")]
pub struct InvalidNumber {
	pub token: String,
	#[source]
	pub source: ParseFloatError,
}

/// Classify and parse one line, without its line terminator.
///
/// The line is split on every single space, so repeated spaces produce empty
/// tokens and change the token count.
pub fn parse_line(line: &str) -> Result<Line, InvalidNumber> {
	let tokens = line.split(' ').collect::<Vec<_>>();
	let line = match tokens.len() {
		SPATIAL_TOKENS => Line::Spatial(Record {
			x: number(tokens[0])?,
			y: number(tokens[1])?,
			z: number(tokens[2])?,
			quality: number(tokens[3])?,
		}),
		PLANAR_TOKENS => Line::Planar(Record {
			x: number(tokens[2])?,
			y: number(tokens[3])?,
			z: 0.0,
			quality: number(tokens[5])?,
		}),
		tokens => Line::Unrecognized { tokens },
	};
	Ok(line)
}

fn number(token: &str) -> Result<f64, InvalidNumber> {
	let trimmed = token.trim();
	let parsed = if trimmed.contains('_') && digit_separators(trimmed) {
		trimmed.replace('_', "").parse()
	} else {
		trimmed.parse()
	};
	parsed.map_err(|source| InvalidNumber { token: token.to_owned(), source })
}

/// `_` is only accepted between two digits, as in `1_000.5`.
fn digit_separators(token: &str) -> bool {
	let bytes = token.as_bytes();
	bytes
		.iter()
		.enumerate()
		.filter(|&(_, &b)| b == b'_')
		.all(|(i, _)| i > 0 && bytes[i - 1].is_ascii_digit() && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn spatial_line() {
		let line = parse_line("1.5 -2 3e1 0.25 99").unwrap();
		assert_eq!(line, Line::Spatial(Record::new(1.5, -2.0, 30.0, 0.25)));
	}

	#[test]
	fn spatial_trailing_field_is_opaque() {
		let line = parse_line("1 2 3 0.5 label").unwrap();
		assert_eq!(line.record(), Some(Record::new(1.0, 2.0, 3.0, 0.5)));
	}

	#[test]
	fn planar_line() {
		let line = parse_line("a b 1.0 2.0 c 0.5").unwrap();
		assert_eq!(line, Line::Planar(Record::new(1.0, 2.0, 0.0, 0.5)));
	}

	#[test]
	fn planar_line_with_numeric_fields() {
		let line = parse_line("0 0 5.0 6.0 7 0.75").unwrap();
		assert_eq!(line.record(), Some(Record::new(5.0, 6.0, 0.0, 0.75)));
	}

	#[test]
	fn other_token_counts() {
		assert_eq!(parse_line("").unwrap(), Line::Unrecognized { tokens: 1 });
		assert_eq!(parse_line("1 2 3").unwrap(), Line::Unrecognized { tokens: 3 });
		assert_eq!(
			parse_line("1 2 3 4 5 6 7").unwrap(),
			Line::Unrecognized { tokens: 7 }
		);
		assert_eq!(parse_line("x").unwrap().record(), None);
	}

	#[test]
	fn repeated_spaces_count_as_tokens() {
		assert_eq!(parse_line("1  2 3").unwrap(), Line::Unrecognized { tokens: 4 });

		let line = parse_line("1  2 3 0.5 9").unwrap();
		assert_eq!(line, Line::Planar(Record::new(2.0, 3.0, 0.0, 9.0)));
	}

	#[test]
	fn surrounding_whitespace_is_trimmed() {
		let line = parse_line("1 2 3 0.5\t 9").unwrap();
		assert_eq!(line.record(), Some(Record::new(1.0, 2.0, 3.0, 0.5)));
	}

	#[test]
	fn invalid_number() {
		let err = parse_line("1 two 3 0.5 9").unwrap_err();
		assert_eq!(err.token, "two");
	}

	#[test]
	fn empty_token_in_consumed_position() {
		let err = parse_line("1  3 0.5 9").unwrap_err();
		assert_eq!(err.token, "");
	}

	#[test]
	fn digit_separators_between_digits() {
		let line = parse_line("1_000 2.5_5 1_0e1_0 0.2_5 x").unwrap();
		assert_eq!(line, Line::Spatial(Record::new(1000.0, 2.55, 1.0e11, 0.25)));

		for token in ["_1", "1_", "1__0", "1._5", "1_.5", "n_an"] {
			let err = number(token).unwrap_err();
			assert_eq!(err.token, token);
		}
	}

	#[test]
	fn planar_quality_must_be_numeric() {
		let err = parse_line("a b 1 2 c q").unwrap_err();
		assert_eq!(err.token, "q");
	}
}
