//------------------------------------------------------------------------------
//
// Copyright 2025 Jiri Bobek. All rights reserved.
// License: GPL 3.0 or later. See LICENSE.txt for details.
//
//------------------------------------------------------------------------------

use smallvec::SmallVec;

use crate::ErrPack;
use crate::error::{SliceOpError, UnknownLengthError};
use crate::normalize::normalize_slice;
use crate::selection::{INLINE_DIMS, normalize_slices};
use crate::selector::{Normalized, Selector};
use crate::util::cold_path;

//--------------------------------------------------------------------------------------------------

fn normalized_length(item: &Normalized) -> Result<usize, ErrPack<SliceOpError>> {
	match item {
		Normalized::Slice(slice) => Ok(slice.count()?),
		Normalized::Indices(indices) => Ok(indices.len()),
		Normalized::Index(_) => {
			cold_path();
			Err(SliceOpError::InvalidSpec
				.with_message("An index selects a single element and has no length."))
		},
		Normalized::Ellipsis => {
			cold_path();
			Err(UnknownLengthError.into())
		},
	}
}

/// Number of elements `selector` picks from an axis of the given `length`.
///
/// Without a `length`, the count is only known if it does not depend on where
/// the axis ends, so `2..10` measures `8` but `2..` is `UnknownLength`.
pub fn slice_length(selector: &Selector, length: Option<usize>) -> Result<usize, ErrPack<SliceOpError>> {
	normalized_length(&normalize_slice(selector, length)?)
}

/// The shape that results from applying `specs` to an array of `lengths`.
///
/// Axes selected by a single index are dropped from the shape.
pub fn slice_lengths(
	specs: &[Selector],
	lengths: Option<&[usize]>,
) -> Result<SmallVec<[usize; INLINE_DIMS]>, ErrPack<SliceOpError>> {
	normalize_slices(specs, lengths)?
		.iter()
		.filter(|item| !matches!(item, Normalized::Index(_)))
		.map(normalized_length)
		.collect()
}

//--------------------------------------------------------------------------------------------------


//--------------------------------------------------------------------------------------------------
