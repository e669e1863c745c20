//------------------------------------------------------------------------------
//
// Copyright 2025 Jiri Bobek. All rights reserved.
// License: GPL 3.0 or later. See LICENSE.txt for details.
//
//------------------------------------------------------------------------------

use crate::ErrPack;
use crate::error::{SliceOpError, ZeroStepError};
use crate::range::UniversalRange;
use crate::selector::{Normalized, Selector};
use crate::slice::Slice;
use crate::util::{cold_path, signed_len};

//--------------------------------------------------------------------------------------------------

/// Converts an index to the length-1 slice that selects the same element.
///
/// Negative indices walk backwards, so `-1` becomes `-1:-2:-1`. This keeps the
/// slice valid for any axis length, where `-1:0:1` would be empty.
pub fn index_to_slice(index: isize) -> Slice {
	let step = if index < 0 { -1 } else { 1 };
	Slice {
		start: index,
		stop: Some(index.saturating_add(step)),
		step,
	}
}

/// Fills in as many of the undefined values of `range` as possible.
///
/// Without a `length`, only the defaults are filled and the known-empty forms
/// are collapsed. With a `length`, negative bounds are resolved and out-of-range
/// bounds are clamped, so the result only holds absolute indices.
pub fn normalize_range(range: UniversalRange, length: Option<usize>) -> Result<Slice, ZeroStepError> {
	let mut step = range.step.unwrap_or(1);
	if step == 0 {
		cold_path();
		return Err(ZeroStepError);
	}

	let mut start = range.start.unwrap_or(if step > 0 { 0 } else { -1 });
	let mut stop = if step > 0 { range.stop.or(length.map(signed_len)) } else { range.stop };

	if let Some(length) = length {
		if length == 0 {
			return Ok(Slice::EMPTY);
		}
		let len = signed_len(length);

		// a step longer than the axis can only ever select `start`
		step = step.clamp(-len, len);

		if (-len..0).contains(&start) {
			start += len;
		}
		if let Some(s) = stop.as_mut() {
			if (-len..0).contains(s) {
				*s += len;
			}
		}

		if step > 0 {
			if start > len || stop.is_some_and(|s| s < -len) {
				return Ok(Slice::EMPTY);
			}
			if start < -len {
				start = 0;
			}
			stop = stop.map(|s| s.min(len));
		} else {
			if start < -len || stop.is_some_and(|s| s >= len - 1) {
				return Ok(Slice::EMPTY);
			}
			if start >= len {
				start = len - 1;
			}
			if stop.is_some_and(|s| s < -len) {
				stop = None;
			}
		}
	}

	let empty = match stop {
		Some(stop) if stop == start => true,
		Some(0) if step > 0 => true,
		Some(-1) if step < 0 => true,
		Some(stop) if start >= 0 && stop >= 0 => {
			(step > 0 && start > stop) || (step < 0 && start < stop)
		},
		_ => false,
	};
	if empty {
		return Ok(Slice::EMPTY);
	}

	Ok(Slice { start, stop, step })
}

fn normalize_index(index: isize, length: Option<usize>) -> Result<isize, ErrPack<SliceOpError>> {
	let slice = normalize_range(index_to_slice(index).into(), length)?;
	if slice.is_empty_form() {
		cold_path();
		let length = length.map_or_else(|| "unknown".to_string(), |l| l.to_string());
		return Err(SliceOpError::IndexOutOfRange.with_message(format!(
			"Index {index} out of range for axis of length {length}."
		)));
	}
	Ok(slice.start)
}

/// Resolves a single selector against an optional axis length.
///
/// An ellipsis and the full selector become the full-range slice. An index
/// resolves to an index and fails if it is out of range, whereas an
/// out-of-range slice is simply empty. A list of indices resolves element-wise.
pub fn normalize_slice(
	selector: &Selector,
	length: Option<usize>,
) -> Result<Normalized, ErrPack<SliceOpError>> {
	match selector {
		Selector::Ellipsis | Selector::Full => {
			Ok(Normalized::Slice(normalize_range(UniversalRange::full(), length)?))
		},
		Selector::Index(index) => Ok(Normalized::Index(normalize_index(*index, length)?)),
		Selector::Range(range) => Ok(Normalized::Slice(normalize_range(*range, length)?)),
		Selector::Indices(indices) => {
			let indices = indices
				.iter()
				.map(|&index| normalize_index(index, length))
				.collect::<Result<Vec<_>, _>>()?;
			Ok(Normalized::Indices(indices))
		},
	}
}

//--------------------------------------------------------------------------------------------------


//--------------------------------------------------------------------------------------------------
