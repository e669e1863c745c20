//------------------------------------------------------------------------------
//
// Copyright 2025 Jiri Bobek. All rights reserved.
// License: GPL 3.0 or later. See LICENSE.txt for details.
//
//------------------------------------------------------------------------------

//! Slice arithmetic for N-dimensional arrays.
//!
//! Everything here works on index descriptors only. Slices are normalized
//! against an optional axis length, measured, composed, reversed, and used to
//! tile a whole array into (optionally haloed) blocks. No data is touched.

// clippy
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(clippy::cast_lossless)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::panic_in_result_fn)]
#![warn(clippy::panic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::comparison_chain)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::inline_always)]
#![allow(clippy::tabs_in_doc_comments)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::if_not_else)]

use std::borrow::Cow;

pub mod blocks;
pub mod error;
pub mod measure;
pub mod normalize;
pub mod ops;
pub mod range;
pub mod selection;
pub mod selector;
pub mod slice;
pub mod view;

mod util;

#[cfg(test)]
mod testing;

pub use blocks::{
	Advisory, Block, BlockIndex, BlockSlices, BlockSplit, FULL_EXTENT, SplitOptions, num_blocks,
	split_blocks, split_blocks_with,
};
pub use error::SliceOpError;
pub use measure::{slice_length, slice_lengths};
pub use normalize::{index_to_slice, normalize_range, normalize_slice};
pub use ops::{join_slices, reverse_slice};
pub use range::UniversalRange;
pub use selection::{INLINE_DIMS, Selection, normalize_slices, split_indices};
pub use selector::{Normalized, Selector};
pub use slice::Slice;
pub use view::{slice_view, to_ndarray_slice};

//--------------------------------------------------------------------------------------------------

#[derive(Debug)]
pub struct ErrExtra {
	pub message: Cow<'static, str>,
	pub nested: Option<Box<dyn std::error::Error + Send + Sync>>,
}

#[derive(Debug)]
pub struct ErrPack<Code: Copy + std::fmt::Debug> {
	pub code: Code,
	pub extra: Option<Box<ErrExtra>>,
}

impl<Code: Copy + std::fmt::Debug> ErrPack<Code> {
	#[cold]
	#[inline(never)]
	pub fn new(code: Code, message: impl Into<Cow<'static, str>>) -> Self {
		Self {
			code,
			extra: Some(Box::new(ErrExtra { message: message.into(), nested: None })),
		}
	}

	pub fn message(&self) -> &str {
		self.extra.as_ref().map_or("", |extra| extra.message.as_ref())
	}
}

impl<Code: Copy + std::fmt::Debug> std::error::Error for ErrPack<Code> {
}

impl<Code: Copy + std::fmt::Debug> std::fmt::Display for ErrPack<Code> {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		let code = self.code;
		write!(f, "(ErrPack: code={code:?}")?;
		if let Some(ref extra) = self.extra {
			let msg = extra.message.as_ref();
			if !msg.is_empty() {
				write!(f, ", message={msg}")?;
			}
			if let Some(nested) = &extra.nested {
				write!(f, ", nested={nested:?}")?;
			}
		}
		write!(f, ")")
	}
}

//--------------------------------------------------------------------------------------------------
