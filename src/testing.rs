//------------------------------------------------------------------------------
//
// Copyright 2025 Jiri Bobek. All rights reserved.
// License: GPL 3.0 or later. See LICENSE.txt for details.
//
//------------------------------------------------------------------------------

// Reference slicing used by the tests: negative bounds wrap once, then clamp
// to the axis depending on the direction of the step.

use crate::slice::Slice;
use crate::util::signed_len;

//--------------------------------------------------------------------------------------------------

fn adjust(bound: isize, len: isize, step: isize) -> isize {
	if bound < 0 {
		let bound = bound + len;
		if bound < 0 {
			if step < 0 { -1 } else { 0 }
		} else {
			bound
		}
	} else if bound >= len {
		if step < 0 { len - 1 } else { len }
	} else {
		bound
	}
}

/// Indices selected by `start:stop:step` from `0..len`, `step != 0`.
pub fn py_slice(len: usize, start: Option<isize>, stop: Option<isize>, step: isize) -> Vec<isize> {
	assert_ne!(step, 0);
	let len = signed_len(len);
	let start = match start {
		Some(start) => adjust(start, len, step),
		None => {
			if step < 0 { len - 1 } else { 0 }
		},
	};
	let stop = match stop {
		Some(stop) => adjust(stop, len, step),
		None => {
			if step < 0 { -1 } else { len }
		},
	};

	let mut result = Vec::new();
	let mut i = start;
	while (step > 0 && i < stop) || (step < 0 && i > stop) {
		result.push(i);
		i += step;
	}
	result
}

/// The element selected by a single index, if it is in range.
pub fn py_index(len: usize, index: isize) -> Option<isize> {
	let len = signed_len(len);
	let i = if index < 0 { index + len } else { index };
	if (0..len).contains(&i) { Some(i) } else { None }
}

/// Indices selected by a normalized slice from `0..len`.
pub fn apply(len: usize, slice: &Slice) -> Vec<isize> {
	py_slice(len, Some(slice.start), slice.stop, slice.step)
}

/// Applies a normalized slice to a materialized sequence.
pub fn apply_to(items: &[isize], slice: &Slice) -> Vec<isize> {
	apply(items.len(), slice)
		.into_iter()
		.filter_map(|i| usize::try_from(i).ok().and_then(|i| items.get(i).copied()))
		.collect()
}

/// `None` followed by every bound in `-(len + 3) .. len + 3`.
pub fn bounds(len: usize) -> impl Iterator<Item = Option<isize>> + Clone {
	let excess = signed_len(len) + 3;
	std::iter::once(None).chain((-excess..excess).map(Some))
}

/// Every non-zero step in `-(len + 3) .. len + 3`.
pub fn steps(len: usize) -> impl Iterator<Item = isize> + Clone {
	let excess = signed_len(len) + 3;
	(-excess..excess).filter(|&step| step != 0)
}

//--------------------------------------------------------------------------------------------------

#[test]
fn test_reference_slicing() {
	assert_eq!(py_slice(10, Some(2), None, 1), vec![2, 3, 4, 5, 6, 7, 8, 9]);
	assert_eq!(py_slice(10, None, None, -3), vec![9, 6, 3, 0]);
	assert_eq!(py_slice(10, Some(-3), Some(-1), 1), vec![7, 8]);
	assert_eq!(py_slice(10, Some(5), Some(-13), -2), vec![5, 3, 1]);
	assert_eq!(py_slice(10, Some(15), Some(7), -1), vec![9, 8]);
	assert!(py_slice(10, Some(3), Some(3), 1).is_empty());
	assert_eq!(py_index(10, -1), Some(9));
	assert_eq!(py_index(10, 10), None);
	assert_eq!(apply_to(&[10, 11, 12, 13], &Slice::new(3, None, -2)), vec![13, 11]);
}

//--------------------------------------------------------------------------------------------------
