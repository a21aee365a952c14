use nalgebra as na;
use std::{
	fs::File,
	io::{BufRead, BufReader},
	path::Path,
};

use crate::{parse_line, Color, Error, Line, Record};

/// All records of one input file, in line order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
	records: Vec<Record>,
}

/// Line statistics collected while reading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseSummary {
	pub lines: usize,
	pub spatial: usize,
	pub planar: usize,
	pub skipped: usize,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	pub min: na::Point3<f64>,
	pub max: na::Point3<f64>,
}

impl Bounds {
	pub fn center(&self) -> na::Point3<f64> {
		na::center(&self.min, &self.max)
	}

	pub fn size(&self) -> na::Vector3<f64> {
		self.max - self.min
	}
}

impl Dataset {
	pub fn load(path: impl AsRef<Path>) -> Result<(Self, ParseSummary), Error> {
		let path = path.as_ref();
		let file = File::open(path).map_err(|source| Error::Open { path: path.to_owned(), source })?;
		Self::read(BufReader::new(file))
	}

	pub fn read(reader: impl BufRead) -> Result<(Self, ParseSummary), Error> {
		let mut records = Vec::new();
		let mut summary = ParseSummary::default();

		for (idx, line) in reader.lines().enumerate() {
			let line = line?;
			summary.lines += 1;
			let parsed = parse_line(&line).map_err(|source| Error::InvalidNumber { line: idx + 1, source })?;
			match parsed {
				Line::Spatial(record) => {
					summary.spatial += 1;
					records.push(record);
				},
				Line::Planar(record) => {
					summary.planar += 1;
					records.push(record);
				},
				Line::Unrecognized { tokens } => {
					summary.skipped += 1;
					log::trace!("skipping line {} with {} tokens", idx + 1, tokens);
				},
			}
		}

		Ok((Self { records }, summary))
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	pub fn records(&self) -> &[Record] {
		&self.records
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Record> {
		self.records.iter()
	}

	pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
		self.records.iter().map(|r| r.x)
	}

	pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
		self.records.iter().map(|r| r.y)
	}

	pub fn zs(&self) -> impl Iterator<Item = f64> + '_ {
		self.records.iter().map(|r| r.z)
	}

	pub fn qualities(&self) -> impl Iterator<Item = f64> + '_ {
		self.records.iter().map(|r| r.quality)
	}

	pub fn colors(&self) -> Vec<Color> {
		self.qualities().map(Color::from_quality).collect()
	}

	/// Number of records with a quality outside `[0, 1]`.
	pub fn out_of_range(&self) -> usize {
		self.qualities().filter(|q| !(0.0..=1.0).contains(q)).count()
	}

	/// Records with a non-finite coordinate are left out.
	pub fn bounds(&self) -> Option<Bounds> {
		let mut iter = self
			.records
			.iter()
			.map(|r| na::point![r.x, r.y, r.z])
			.filter(|p| p.coords.iter().all(|c| c.is_finite()));
		let first = iter.next()?;
		let (min, max) = iter.fold((first, first), |(min, max), p| (min.inf(&p), max.sup(&p)));
		Some(Bounds { min, max })
	}
}

impl FromIterator<Record> for Dataset {
	fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
		Self { records: iter.into_iter().collect() }
	}
}

impl IntoIterator for Dataset {
	type Item = Record;
	type IntoIter = std::vec::IntoIter<Record>;

	fn into_iter(self) -> Self::IntoIter {
		self.records.into_iter()
	}
}

impl<'a> IntoIterator for &'a Dataset {
	type Item = &'a Record;
	type IntoIter = std::slice::Iter<'a, Record>;

	fn into_iter(self) -> Self::IntoIter {
		self.records.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	fn read(text: &str) -> (Dataset, ParseSummary) {
		Dataset::read(text.as_bytes()).unwrap()
	}

	#[test]
	fn two_layouts_in_one_file() {
		let (dataset, summary) = read("1.0 2.0 3.0 0.25 99\n0 0 5.0 6.0 z 0.75\n");
		assert_eq!(
			dataset.records(),
			&[Record::new(1.0, 2.0, 3.0, 0.25), Record::new(5.0, 6.0, 0.0, 0.75)]
		);
		assert_eq!(
			dataset.colors(),
			vec![Color::new(0.25, 0.75, 0.0), Color::new(0.75, 0.25, 0.0)]
		);
		assert_eq!(summary, ParseSummary { lines: 2, spatial: 1, planar: 1, skipped: 0 });
	}

	#[test]
	fn unrecognized_lines_are_skipped() {
		let (dataset, summary) = read("\n1 2 3\n1 2 3 0.5 x\n\n4 5 6 7 8 9 10\n");
		assert_eq!(dataset.records(), &[Record::new(1.0, 2.0, 3.0, 0.5)]);
		assert_eq!(summary.skipped, 4);
		assert_eq!(summary.lines, 5);
	}

	#[test]
	fn columns_have_equal_length() {
		let (dataset, _) = read("1 2 3 0.1 a\nfoo\n\na b 4 5 c 0.2\n1 2\n7 8 9 0.3 b\n");
		assert_eq!(dataset.len(), 3);
		assert_eq!(dataset.xs().count(), dataset.len());
		assert_eq!(dataset.ys().count(), dataset.len());
		assert_eq!(dataset.zs().count(), dataset.len());
		assert_eq!(dataset.qualities().count(), dataset.len());
		assert_eq!(dataset.colors().len(), dataset.len());
		assert_eq!(dataset.zs().collect::<Vec<_>>(), vec![3.0, 0.0, 9.0]);
	}

	#[test]
	fn windows_line_endings() {
		let (dataset, _) = read("1 2 3 0.5 1\r\na b 4 5 c 0.5\r\n");
		assert_eq!(dataset.len(), 2);
		assert_eq!(dataset.records()[1], Record::new(4.0, 5.0, 0.0, 0.5));
	}

	#[test]
	fn missing_final_newline() {
		let (dataset, _) = read("1 2 3 0.5 1");
		assert_eq!(dataset.len(), 1);
	}

	#[test]
	fn invalid_number_reports_line() {
		let err = Dataset::read("1 2 3 0.5 1\n\n1 2 x 0.5 1\n".as_bytes()).unwrap_err();
		match err {
			Error::InvalidNumber { line, source } => {
				assert_eq!(line, 3);
				assert_eq!(source.token, "x");
			},
			err => panic!("unexpected error: {err}"),
		}
	}

	#[test]
	fn empty_input() {
		let (dataset, summary) = read("");
		assert!(dataset.is_empty());
		assert_eq!(dataset.bounds(), None);
		assert_eq!(summary, ParseSummary::default());
	}

	#[test]
	fn bounds_and_range() {
		let dataset = [
			Record::new(1.0, -2.0, 3.0, 0.5),
			Record::new(-1.0, 4.0, 0.0, 1.5),
			Record::new(0.0, 0.0, 1.0, -0.1),
		]
		.into_iter()
		.collect::<Dataset>();
		let bounds = dataset.bounds().unwrap();
		assert_eq!(bounds.min, na::point![-1.0, -2.0, 0.0]);
		assert_eq!(bounds.max, na::point![1.0, 4.0, 3.0]);
		assert_eq!(bounds.center(), na::point![0.0, 1.0, 1.5]);
		assert_eq!(bounds.size(), na::vector![2.0, 6.0, 3.0]);
		assert_eq!(dataset.out_of_range(), 2);
	}

	#[test]
	fn bounds_skip_non_finite() {
		let dataset = [
			Record::new(0.0, 0.0, 0.0, 0.5),
			Record::new(f64::NAN, 1.0, 2.0, 0.5),
			Record::new(2.0, 2.0, f64::INFINITY, 0.5),
			Record::new(2.0, 2.0, 2.0, 0.5),
		]
		.into_iter()
		.collect::<Dataset>();
		let bounds = dataset.bounds().unwrap();
		assert_eq!(bounds.min, na::point![0.0, 0.0, 0.0]);
		assert_eq!(bounds.max, na::point![2.0, 2.0, 2.0]);

		let (dataset, _) = read("nan 0 0 0.5 x\n");
		assert_eq!(dataset.len(), 1);
		assert_eq!(dataset.bounds(), None);
	}

	#[test]
	fn invalid_utf8_is_io_error() {
		let err = Dataset::read(&b"1 2 3 0.5 x\n\xff\n"[..]).unwrap_err();
		match err {
			Error::IO(err) => assert_eq!(err.kind(), std::io::ErrorKind::InvalidData),
			err => panic!("unexpected error: {err}"),
		}
	}

	#[test]
	fn load_from_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "1.0 2.0 3.0 0.25 99").unwrap();
		writeln!(file, "0 0 5.0 6.0 z 0.75").unwrap();
		writeln!(file, "header line").unwrap();
		file.flush().unwrap();

		let (dataset, summary) = Dataset::load(file.path()).unwrap();
		assert_eq!(dataset.len(), 2);
		assert_eq!(summary.skipped, 1);
	}

	#[test]
	fn load_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("res_horseshoe_u.txt");
		let err = Dataset::load(&path).unwrap_err();
		match err {
			Error::Open { path: p, source } => {
				assert_eq!(p, path);
				assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
			},
			err => panic!("unexpected error: {err}"),
		}
	}
}
