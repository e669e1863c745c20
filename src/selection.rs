//------------------------------------------------------------------------------
//
// Copyright 2025 Jiri Bobek. All rights reserved.
// License: GPL 3.0 or later. See LICENSE.txt for details.
//
//------------------------------------------------------------------------------

use itertools::Itertools;
use smallvec::SmallVec;

use crate::ErrPack;
use crate::error::SliceOpError;
use crate::normalize::{index_to_slice, normalize_range, normalize_slice};
use crate::range::UniversalRange;
use crate::selector::{Normalized, Selector};
use crate::util::cold_path;

//--------------------------------------------------------------------------------------------------

pub const INLINE_DIMS: usize = 5;

/// One normalized item per axis.
pub type Selection = SmallVec<[Normalized; INLINE_DIMS]>;

fn count_ellipses(specs: &[Selector]) -> usize {
	specs.iter().filter(|s| matches!(s, Selector::Ellipsis)).count()
}

fn multiple_ellipses(count: usize) -> ErrPack<SliceOpError> {
	SliceOpError::MultipleEllipsis
		.with_message(format!("Only one Ellipsis is permitted. Found {count}."))
}

/// Normalizes `before`, the expanded ellipsis and `after` against `lengths`.
///
/// Requires `before.len() + after.len() <= lengths.len()`.
fn expand_ellipsis(
	before: &[Selector],
	after: &[Selector],
	lengths: &[usize],
) -> Result<Selection, ErrPack<SliceOpError>> {
	let found = count_ellipses(before) + count_ellipses(after);
	if found != 0 {
		cold_path();
		return Err(multiple_ellipses(found + 1));
	}

	let pos_after = lengths.len() - after.len();
	let (lengths_before, rest) = lengths.split_at(before.len());
	let (lengths_el, lengths_after) = rest.split_at(pos_after - before.len());

	let mut result = Selection::with_capacity(lengths.len());
	for (spec, &length) in before.iter().zip(lengths_before) {
		result.push(normalize_slice(spec, Some(length))?);
	}
	for &length in lengths_el {
		result.push(Normalized::Slice(normalize_range(UniversalRange::full(), Some(length))?));
	}
	for (spec, &length) in after.iter().zip(lengths_after) {
		result.push(normalize_slice(spec, Some(length))?);
	}
	Ok(result)
}

/// Normalizes one selector per axis.
///
/// An empty `specs` selects everything, like a lone ellipsis. With `lengths`,
/// the ellipsis expands to as many full slices as needed, and if there is no
/// ellipsis but fewer specs than axes, one is implied at the end. Without
/// `lengths`, the ellipsis is kept as [`Normalized::Ellipsis`].
///
/// At most one ellipsis and at most one list of indices are allowed.
pub fn normalize_slices(
	specs: &[Selector],
	lengths: Option<&[usize]>,
) -> Result<Selection, ErrPack<SliceOpError>> {
	let everything = [Selector::Ellipsis];
	let specs = if specs.is_empty() { &everything[..] } else { specs };

	let ellipses = count_ellipses(specs);
	if ellipses > 1 {
		cold_path();
		return Err(multiple_ellipses(ellipses));
	}
	let ellipsis_pos = specs.iter().position(|s| matches!(s, Selector::Ellipsis));

	let result = match (lengths, ellipsis_pos) {
		(Some(lengths), None) => {
			if specs.len() > lengths.len() {
				cold_path();
				return Err(SliceOpError::DimensionMismatch.with_message(format!(
					"Shape must be as large or larger than the number of slices. \
					Got {} slices for {} dimensions.",
					specs.len(),
					lengths.len()
				)));
			}
			expand_ellipsis(specs, &[], lengths)?
		},
		(Some(lengths), Some(pos)) => {
			if specs.len() - 1 > lengths.len() {
				cold_path();
				return Err(SliceOpError::DimensionMismatch.with_message(format!(
					"Shape must be as large or larger than the number of slices without the Ellipsis. \
					Got {} slices for {} dimensions.",
					specs.len() - 1,
					lengths.len()
				)));
			}
			let (before, after) = specs.split_at(pos);
			expand_ellipsis(before, after.get(1..).unwrap_or_default(), lengths)?
		},
		(None, _) => specs
			.iter()
			.map(|spec| match spec {
				Selector::Ellipsis => Ok(Normalized::Ellipsis),
				_ => normalize_slice(spec, None),
			})
			.collect::<Result<Selection, _>>()?,
	};

	let sequences = result.iter().filter(|n| matches!(n, Normalized::Indices(_))).count();
	if sequences > 1 {
		cold_path();
		return Err(SliceOpError::MultipleIndexSequences.with_message(format!(
			"Only one integral sequence supported. Instead got `{sequences}`."
		)));
	}

	Ok(result)
}

/// Splits a selection with a list of indices into one selection per index.
///
/// Many consumers only handle a single index per axis. Each index becomes a
/// length-1 slice, so the axis is kept, and every other axis passes through
/// unchanged. The selections come out in the order of the listed indices.
pub fn split_indices(specs: &[Selector]) -> Result<Vec<Selection>, ErrPack<SliceOpError>> {
	let normalized = normalize_slices(specs, None)?;

	let choices = normalized.into_iter().map(|item| match item {
		Normalized::Indices(indices) => {
			indices.into_iter().map(|i| Normalized::Slice(index_to_slice(i))).collect_vec()
		},
		other => vec![other],
	});

	Ok(choices.multi_cartesian_product().map(Selection::from_vec).collect())
}

//--------------------------------------------------------------------------------------------------


//--------------------------------------------------------------------------------------------------
