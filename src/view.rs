//------------------------------------------------------------------------------
//
// Copyright 2025 Jiri Bobek. All rights reserved.
// License: GPL 3.0 or later. See LICENSE.txt for details.
//
//------------------------------------------------------------------------------

use ndarray::{ArrayView, Dimension};
use smallvec::SmallVec;

use crate::ErrPack;
use crate::error::SliceOpError;
use crate::normalize::normalize_range;
use crate::selection::INLINE_DIMS;
use crate::slice::Slice;
use crate::util::cold_path;

//--------------------------------------------------------------------------------------------------

/// Converts `slice` to the `ndarray` convention for an axis of `axis_len`.
///
/// `ndarray` first restricts the axis to `[start, end)` and only then applies
/// the step, so a negative step walks back from `end - 1`.
pub fn to_ndarray_slice(slice: &Slice, axis_len: usize) -> Result<ndarray::Slice, ErrPack<SliceOpError>> {
	let slice = normalize_range((*slice).into(), Some(axis_len))?;
	if slice.count()? == 0 {
		return Ok(ndarray::Slice::new(0, Some(0), 1));
	}
	if slice.step > 0 {
		Ok(ndarray::Slice::new(slice.start, slice.stop, slice.step))
	} else {
		Ok(ndarray::Slice::new(slice.stop.map_or(0, |stop| stop + 1), Some(slice.start + 1), slice.step))
	}
}

/// Applies one slice per axis to `view`. No data is copied.
pub fn slice_view<'a, A, D: Dimension>(
	mut view: ArrayView<'a, A, D>,
	slices: &[Slice],
) -> Result<ArrayView<'a, A, D>, ErrPack<SliceOpError>> {
	if slices.len() != view.ndim() {
		cold_path();
		return Err(SliceOpError::DimensionMismatch.with_message(format!(
			"Got {} slices for an array with {} dimensions.",
			slices.len(),
			view.ndim()
		)));
	}

	let per_axis = slices
		.iter()
		.zip(view.shape())
		.map(|(slice, &len)| to_ndarray_slice(slice, len))
		.collect::<Result<SmallVec<[ndarray::Slice; INLINE_DIMS]>, _>>()?;

	view.slice_each_axis_inplace(|ax| {
		per_axis.get(ax.axis.index()).copied().unwrap_or_else(|| ndarray::Slice::from(..))
	});
	Ok(view)
}

//--------------------------------------------------------------------------------------------------


//--------------------------------------------------------------------------------------------------
