//------------------------------------------------------------------------------
//
// Copyright 2025 Jiri Bobek. All rights reserved.
// License: GPL 3.0 or later. See LICENSE.txt for details.
//
//------------------------------------------------------------------------------

use crate::error::UnknownLengthError;
use crate::util::cold_path;

//--------------------------------------------------------------------------------------------------

/// A normalized slice.
///
/// `start` and `step` are always resolved. `stop` is `None` when the slice runs
/// past the end of the axis in the direction of `step` and the axis length is
/// not known, or, for a negative step, when it runs past index `0`.
///
/// Once normalized against a known length, `start` and `stop` are absolute
/// non-negative indices. Without a length they keep their sign, so `-3` still
/// means "third from the end".
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Slice {
	pub start: isize,
	pub stop: Option<isize>,
	pub step: isize,
}

impl Slice {
	/// Every empty slice normalizes to `0:0:1`.
	pub const EMPTY: Self = Self { start: 0, stop: Some(0), step: 1 };

	pub const fn new(start: isize, stop: Option<isize>, step: isize) -> Self {
		Self { start, stop, step }
	}

	pub fn is_empty_form(&self) -> bool {
		*self == Self::EMPTY
	}

	/// Number of elements selected by the slice.
	///
	/// Without an axis length, the endpoints are taken at face value. The count
	/// is unknown when it would depend on the axis length: an open positive
	/// step, an open negative step starting from the end, or endpoints on
	/// opposite sides of zero.
	pub fn count(&self) -> Result<usize, UnknownLengthError> {
		let stop = match self.stop {
			Some(stop) => {
				if (self.start < 0) != (stop < 0) {
					cold_path();
					return Err(UnknownLengthError);
				}
				stop
			},
			None if self.step < 0 && self.start >= 0 => -1,
			None => {
				cold_path();
				return Err(UnknownLengthError);
			},
		};
		let diff = stop - self.start;
		if (diff > 0) != (self.step > 0) || diff == 0 {
			return Ok(0);
		}
		Ok(diff.unsigned_abs().div_ceil(self.step.unsigned_abs()))
	}

	/// The slice that walks `count` elements from `first`, `step` apart.
	///
	/// All elements must lie on the same side of zero.
	pub(crate) fn from_progression(first: isize, count: usize, step: isize) -> Self {
		if count == 0 {
			return Self::EMPTY;
		}
		#[allow(clippy::cast_possible_wrap)]
		let last = first + step * (count as isize - 1);
		let stop = last + step.signum();
		let runs_off = if step > 0 { last < 0 && stop >= 0 } else { last >= 0 && stop < 0 };
		Self {
			start: first,
			stop: if runs_off { None } else { Some(stop) },
			step,
		}
	}
}

impl std::fmt::Display for Slice {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self.stop {
			Some(stop) => write!(f, "{}:{}:{}", self.start, stop, self.step),
			None => write!(f, "{}::{}", self.start, self.step),
		}
	}
}

//--------------------------------------------------------------------------------------------------


//--------------------------------------------------------------------------------------------------
