//------------------------------------------------------------------------------
//
// Copyright 2025 Jiri Bobek. All rights reserved.
// License: GPL 3.0 or later. See LICENSE.txt for details.
//
//------------------------------------------------------------------------------

/// Marks the branch it is called from as unlikely.
#[cold]
#[inline(never)]
pub fn cold_path() {}

/// Axis lengths beyond `isize::MAX` cannot be addressed by a signed index anyway,
/// so they saturate.
#[inline]
pub fn signed_len(length: usize) -> isize {
	isize::try_from(length).unwrap_or(isize::MAX)
}

/// Negative values clamp to zero.
#[inline]
pub fn unsigned_len(value: isize) -> usize {
	usize::try_from(value).unwrap_or(0)
}

//--------------------------------------------------------------------------------------------------
