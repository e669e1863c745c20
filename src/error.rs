//------------------------------------------------------------------------------
//
// Copyright 2025 Jiri Bobek. All rights reserved.
// License: GPL 3.0 or later. See LICENSE.txt for details.
//
//------------------------------------------------------------------------------

use std::borrow::Cow;

use crate::ErrPack;

//--------------------------------------------------------------------------------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ZeroStepError;

impl std::error::Error for ZeroStepError {}

impl std::fmt::Display for ZeroStepError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "Slice cannot have a step size of `0`.")
	}
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct IndexOutOfRangeError;

impl std::error::Error for IndexOutOfRangeError {}

impl std::fmt::Display for IndexOutOfRangeError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "Index out of range.")
	}
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct UnknownLengthError;

impl std::error::Error for UnknownLengthError {}

impl std::fmt::Display for UnknownLengthError {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "Cannot determine slice length without a defined end point.")
	}
}

//--------------------------------------------------------------------------------------------------

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SliceOpError {
	InvalidSpec,
	ZeroStep,
	IndexOutOfRange,
	UnknownLength,
	DimensionMismatch,
	MultipleEllipsis,
	MultipleIndexSequences,
	InvalidShape,
	UnevenDivision,
}

impl SliceOpError {
	#[cold]
	#[inline(never)]
	pub fn with_message(self, message: impl Into<Cow<'static, str>>) -> ErrPack<Self> {
		ErrPack::new(self, message)
	}
}

impl From<ZeroStepError> for SliceOpError {
	fn from(_: ZeroStepError) -> Self {
		Self::ZeroStep
	}
}

impl From<ZeroStepError> for ErrPack<SliceOpError> {
	#[cold]
	#[inline(never)]
	fn from(err: ZeroStepError) -> Self {
		Self::new(SliceOpError::ZeroStep, err.to_string())
	}
}

impl From<IndexOutOfRangeError> for SliceOpError {
	fn from(_: IndexOutOfRangeError) -> Self {
		Self::IndexOutOfRange
	}
}

impl From<IndexOutOfRangeError> for ErrPack<SliceOpError> {
	#[cold]
	#[inline(never)]
	fn from(err: IndexOutOfRangeError) -> Self {
		Self::new(SliceOpError::IndexOutOfRange, err.to_string())
	}
}

impl From<UnknownLengthError> for SliceOpError {
	fn from(_: UnknownLengthError) -> Self {
		Self::UnknownLength
	}
}

impl From<UnknownLengthError> for ErrPack<SliceOpError> {
	#[cold]
	#[inline(never)]
	fn from(err: UnknownLengthError) -> Self {
		Self::new(SliceOpError::UnknownLength, err.to_string())
	}
}

impl From<SliceOpError> for ErrPack<SliceOpError> {
	fn from(code: SliceOpError) -> Self {
		Self { code, extra: None }
	}
}

//--------------------------------------------------------------------------------------------------


//--------------------------------------------------------------------------------------------------
