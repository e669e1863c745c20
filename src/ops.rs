//------------------------------------------------------------------------------
//
// Copyright 2025 Jiri Bobek. All rights reserved.
// License: GPL 3.0 or later. See LICENSE.txt for details.
//
//------------------------------------------------------------------------------

use crate::ErrPack;
use crate::error::SliceOpError;
use crate::normalize::normalize_range;
use crate::range::UniversalRange;
use crate::slice::Slice;
use crate::util::{cold_path, signed_len};

//--------------------------------------------------------------------------------------------------

fn unknown_length(what: &str, slice: Slice) -> ErrPack<SliceOpError> {
	SliceOpError::UnknownLength
		.with_message(format!("Cannot {what} `{slice}` without knowing the length of the axis."))
}

/// Composes two slices into one.
///
/// Applying the result to an axis selects the same elements, in the same
/// order, as applying `outer` first and then `inner` to what `outer` selected.
///
/// Without a `length`, `outer` must either have a measurable count, or be an
/// open-ended forward slice from a non-negative start. In the second case
/// `inner` must be a forward slice with non-negative bounds, so that
/// `join_slices(2.., ..10, None)` is `2:12:1`.
pub fn join_slices(
	outer: impl Into<UniversalRange>,
	inner: impl Into<UniversalRange>,
	length: Option<usize>,
) -> Result<Slice, ErrPack<SliceOpError>> {
	let outer = normalize_range(outer.into(), length)?;
	let inner: UniversalRange = inner.into();

	if let Ok(count) = outer.count() {
		let inner = normalize_range(inner, Some(count))?;
		let count = inner.count()?;
		let first = outer.start.saturating_add(outer.step.saturating_mul(inner.start));
		let step = outer.step.saturating_mul(inner.step);
		let joined = Slice::from_progression(first, count, step);
		return Ok(normalize_range(joined.into(), length)?);
	}

	let inner = normalize_range(inner, None)?;
	let open_forward = outer.step > 0 && outer.start >= 0 && outer.stop.is_none();
	let forward_inner = inner.step > 0 && inner.start >= 0 && inner.stop.is_none_or(|s| s >= 0);
	if !open_forward || !forward_inner {
		cold_path();
		return Err(unknown_length("join", outer));
	}

	let at = |k: isize| outer.start.saturating_add(outer.step.saturating_mul(k));
	let joined = UniversalRange::new(
		Some(at(inner.start)),
		inner.stop.map(at),
		Some(outer.step.saturating_mul(inner.step)),
	);
	Ok(normalize_range(joined, None)?)
}

/// The slice that selects the same elements as `range`, in reverse order.
///
/// Requires the count of `range` to be known, either from `length` or from its
/// endpoints.
pub fn reverse_slice(range: impl Into<UniversalRange>, length: Option<usize>) -> Result<Slice, ErrPack<SliceOpError>> {
	let slice = normalize_range(range.into(), length)?;
	let Ok(count) = slice.count() else {
		cold_path();
		return Err(unknown_length("reverse", slice));
	};
	if count == 0 {
		return Ok(Slice::EMPTY);
	}

	let last = slice.start.saturating_add(slice.step.saturating_mul(signed_len(count) - 1));
	let reversed = Slice::from_progression(last, count, -slice.step);
	Ok(normalize_range(reversed.into(), length)?)
}

//--------------------------------------------------------------------------------------------------


//--------------------------------------------------------------------------------------------------
