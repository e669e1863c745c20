//------------------------------------------------------------------------------
//
// Copyright 2025 Jiri Bobek. All rights reserved.
// License: GPL 3.0 or later. See LICENSE.txt for details.
//
//------------------------------------------------------------------------------

use crate::slice::Slice;

//--------------------------------------------------------------------------------------------------

/// A slice as the caller writes it: every field may be left out.
///
/// Negative bounds count from the end of the axis. A missing step means `1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct UniversalRange {
	pub start: Option<isize>,
	pub stop: Option<isize>,
	pub step: Option<isize>,
}

impl UniversalRange {
	pub const fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
		Self { start, stop, step }
	}

	/// `slice(None)`
	pub const fn full() -> Self {
		Self { start: None, stop: None, step: None }
	}

	pub const fn with_step(self, step: isize) -> Self {
		Self { step: Some(step), ..self }
	}
}

impl std::fmt::Display for UniversalRange {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		if let Some(start) = self.start {
			write!(f, "{start}")?;
		}
		write!(f, ":")?;
		if let Some(stop) = self.stop {
			write!(f, "{stop}")?;
		}
		if let Some(step) = self.step {
			write!(f, ":{step}")?;
		}
		Ok(())
	}
}

impl From<Slice> for UniversalRange {
	fn from(slice: Slice) -> Self {
		Self {
			start: Some(slice.start), //
			stop: slice.stop,
			step: Some(slice.step),
		}
	}
}

impl From<std::ops::Range<isize>> for UniversalRange {
	fn from(range: std::ops::Range<isize>) -> Self {
		Self {
			start: Some(range.start), //
			stop: Some(range.end),
			step: None,
		}
	}
}

impl From<std::ops::RangeInclusive<isize>> for UniversalRange {
	fn from(range: std::ops::RangeInclusive<isize>) -> Self {
		// `..=-1` would turn into `..0`, which is empty
		let end = *range.end();
		Self {
			start: Some(*range.start()), //
			stop: if end == -1 { None } else { Some(end + 1) },
			step: None,
		}
	}
}

impl From<std::ops::RangeFrom<isize>> for UniversalRange {
	fn from(range: std::ops::RangeFrom<isize>) -> Self {
		Self {
			start: Some(range.start), //
			stop: None,
			step: None,
		}
	}
}

impl From<std::ops::RangeTo<isize>> for UniversalRange {
	fn from(range: std::ops::RangeTo<isize>) -> Self {
		Self {
			start: None, //
			stop: Some(range.end),
			step: None,
		}
	}
}

impl From<std::ops::RangeToInclusive<isize>> for UniversalRange {
	fn from(range: std::ops::RangeToInclusive<isize>) -> Self {
		let end = range.end;
		Self {
			start: None, //
			stop: if end == -1 { None } else { Some(end + 1) },
			step: None,
		}
	}
}

impl From<std::ops::RangeFull> for UniversalRange {
	fn from(_: std::ops::RangeFull) -> Self {
		Self::full()
	}
}

//--------------------------------------------------------------------------------------------------


//--------------------------------------------------------------------------------------------------
