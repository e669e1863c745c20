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
use crate::normalize::normalize_range;
use crate::selection::INLINE_DIMS;
use crate::slice::Slice;
use crate::util::{cold_path, signed_len, unsigned_len};

//--------------------------------------------------------------------------------------------------

/// A `block_shape` entry that makes the whole axis a single block.
pub const FULL_EXTENT: isize = -1;

/// One slice per axis.
pub type BlockSlices = SmallVec<[Slice; INLINE_DIMS]>;

/// The position of a block in the grid, one coordinate per axis.
pub type BlockIndex = SmallVec<[usize; INLINE_DIMS]>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitOptions {
	/// Also return the grid position of every block.
	pub emit_index: bool,

	/// Fail with `UnevenDivision` instead of truncating the last block of an axis.
	pub deny_uneven: bool,
}

/// A condition worth reporting that does not stop the computation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Advisory {
	/// The block shape does not divide the space along `axes`, so the last
	/// block on each of them is truncated.
	UnevenDivision { axes: SmallVec<[usize; INLINE_DIMS]> },
}

impl std::fmt::Display for Advisory {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::UnevenDivision { axes } => {
				write!(
					f,
					"Blocks will not evenly divide the array. \
					The following dimensions will be unevenly divided: {}.",
					axes.iter().join(", ")
				)
			},
		}
	}
}

//--------------------------------------------------------------------------------------------------

/// The blocks that tile a space, as three aligned lists.
///
/// For every `k`, `haloed[k]` is `core[k]` grown by the halo and clamped to the
/// space, and `trim[k]` selects `core[k]` out of the data fetched with
/// `haloed[k]`. Blocks are ordered with the first axis varying slowest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSplit {
	pub core: Vec<BlockSlices>,
	pub haloed: Vec<BlockSlices>,
	pub trim: Vec<BlockSlices>,
	pub indices: Option<Vec<BlockIndex>>,
	pub advisories: Vec<Advisory>,
}

/// One block of a [`BlockSplit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
	pub core: &'a [Slice],
	pub haloed: &'a [Slice],
	pub trim: &'a [Slice],

	/// Only available if it was requested with [`SplitOptions::emit_index`].
	pub index: Option<&'a [usize]>,
}

impl BlockSplit {
	pub fn len(&self) -> usize {
		self.core.len()
	}

	pub fn is_empty(&self) -> bool {
		self.core.is_empty()
	}

	pub fn get(&self, k: usize) -> Option<Block<'_>> {
		let index = match &self.indices {
			Some(indices) => Some(indices.get(k)?.as_slice()),
			None => None,
		};
		Some(Block {
			core: self.core.get(k)?,
			haloed: self.haloed.get(k)?,
			trim: self.trim.get(k)?,
			index,
		})
	}

	pub fn iter(&self) -> impl Iterator<Item = Block<'_>> + '_ {
		(0..self.len()).filter_map(move |k| self.get(k))
	}
}

//--------------------------------------------------------------------------------------------------

struct Grid {
	block_shape: SmallVec<[usize; INLINE_DIMS]>,
	counts: SmallVec<[usize; INLINE_DIMS]>,
	uneven: Option<Advisory>,
}

fn resolve_grid(
	space_shape: &[usize],
	block_shape: &[isize],
	block_halo: Option<&[usize]>,
) -> Result<Grid, ErrPack<SliceOpError>> {
	match block_halo {
		Some(halo) if space_shape.len() != block_shape.len() || space_shape.len() != halo.len() => {
			cold_path();
			return Err(SliceOpError::DimensionMismatch.with_message(
				"The dimensions of `space_shape`, `block_shape`, and `block_halo` should be the same.",
			));
		},
		None if space_shape.len() != block_shape.len() => {
			cold_path();
			return Err(SliceOpError::DimensionMismatch
				.with_message("The dimensions of `space_shape` and `block_shape` should be the same."));
		},
		_ => {},
	}

	if space_shape.contains(&0) {
		cold_path();
		return Err(SliceOpError::InvalidShape.with_message(format!(
			"Shape of the space must all be positive definite. Instead got: {space_shape:?}."
		)));
	}
	if !block_shape.iter().all(|&b| b > 0 || b == FULL_EXTENT) {
		cold_path();
		return Err(SliceOpError::InvalidShape.with_message(format!(
			"Shape of the blocks must all be positive or -1. Instead got: {block_shape:?}."
		)));
	}

	let block_shape: SmallVec<[usize; INLINE_DIMS]> = space_shape
		.iter()
		.zip(block_shape)
		.map(|(&space, &block)| if block == FULL_EXTENT { space } else { unsigned_len(block) })
		.collect();
	let counts = space_shape.iter().zip(&block_shape).map(|(&space, &block)| space.div_ceil(block)).collect();

	let axes: SmallVec<[usize; INLINE_DIMS]> = space_shape
		.iter()
		.zip(&block_shape)
		.positions(|(&space, &block)| space % block != 0)
		.collect();
	let uneven = if axes.is_empty() {
		None
	} else {
		let advisory = Advisory::UnevenDivision { axes };
		log::warn!("{advisory}");
		Some(advisory)
	};

	Ok(Grid { block_shape, counts, uneven })
}

/// Number of blocks along every axis.
///
/// Validates the shapes the same way [`split_blocks`] does, and warns if the
/// blocks do not divide the space evenly.
pub fn num_blocks(
	space_shape: &[usize],
	block_shape: &[isize],
) -> Result<SmallVec<[usize; INLINE_DIMS]>, ErrPack<SliceOpError>> {
	Ok(resolve_grid(space_shape, block_shape, None)?.counts)
}

//--------------------------------------------------------------------------------------------------

#[derive(Default)]
struct AxisBlocks {
	core: Vec<Slice>,
	haloed: Vec<Slice>,
	trim: Vec<Slice>,
}

fn bounds_to_slice(lo: isize, hi: isize) -> Result<Slice, ErrPack<SliceOpError>> {
	Ok(normalize_range((lo..hi).into(), None)?)
}

fn split_axis(extent: usize, block: usize, halo: usize) -> Result<AxisBlocks, ErrPack<SliceOpError>> {
	let extent_i = signed_len(extent);
	let block_i = signed_len(block);
	let halo_i = signed_len(halo);

	let mut axis = AxisBlocks::default();
	for lo in (0..extent_i).step_by(block) {
		let hi = lo.saturating_add(block_i);

		let haloed_lo = lo.saturating_sub(halo_i).clamp(0, extent_i);
		let haloed_hi = hi.saturating_add(halo_i).clamp(0, extent_i);

		// relative to the haloed window, before the core is clamped
		axis.trim.push(bounds_to_slice(lo - haloed_lo, hi - haloed_lo)?);
		axis.haloed.push(bounds_to_slice(haloed_lo, haloed_hi)?);
		axis.core.push(bounds_to_slice(lo, hi.min(extent_i))?);
	}
	Ok(axis)
}

/// Every combination of one item per axis, first axis varying slowest.
fn product<T: Copy>(per_axis: &[&[T]]) -> Vec<SmallVec<[T; INLINE_DIMS]>> {
	if per_axis.is_empty() {
		return vec![SmallVec::new()];
	}
	per_axis
		.iter()
		.map(|items| items.iter().copied())
		.multi_cartesian_product()
		.map(SmallVec::from_vec)
		.collect()
}

/// Tiles `space_shape` with blocks of `block_shape`, each grown by `block_halo`.
///
/// A `block_shape` entry of [`FULL_EXTENT`] covers the whole axis. The halo
/// defaults to zero. If an axis does not divide evenly, its last block is
/// truncated and an [`Advisory`] is returned along with the blocks.
pub fn split_blocks(
	space_shape: &[usize],
	block_shape: &[isize],
	block_halo: Option<&[usize]>,
) -> Result<BlockSplit, ErrPack<SliceOpError>> {
	split_blocks_with(space_shape, block_shape, block_halo, &SplitOptions::default())
}

pub fn split_blocks_with(
	space_shape: &[usize],
	block_shape: &[isize],
	block_halo: Option<&[usize]>,
	options: &SplitOptions,
) -> Result<BlockSplit, ErrPack<SliceOpError>> {
	let grid = resolve_grid(space_shape, block_shape, block_halo)?;
	if let Some(advisory) = grid.uneven.as_ref().filter(|_| options.deny_uneven) {
		cold_path();
		return Err(SliceOpError::UnevenDivision.with_message(advisory.to_string()));
	}
	log::debug!("split_blocks(): {space_shape:?} -> {:?} blocks", grid.counts);

	let axes = space_shape
		.iter()
		.zip(&grid.block_shape)
		.enumerate()
		.map(|(i, (&extent, &block))| {
			let halo = block_halo.and_then(|h| h.get(i)).copied().unwrap_or(0);
			split_axis(extent, block, halo)
		})
		.collect::<Result<Vec<_>, _>>()?;

	let core: Vec<&[Slice]> = axes.iter().map(|a| a.core.as_slice()).collect();
	let haloed: Vec<&[Slice]> = axes.iter().map(|a| a.haloed.as_slice()).collect();
	let trim: Vec<&[Slice]> = axes.iter().map(|a| a.trim.as_slice()).collect();

	let indices = if options.emit_index {
		let positions: Vec<Vec<usize>> = grid.counts.iter().map(|&n| (0..n).collect()).collect();
		let positions: Vec<&[usize]> = positions.iter().map(Vec::as_slice).collect();
		Some(product(&positions))
	} else {
		None
	};

	Ok(BlockSplit {
		core: product(&core),
		haloed: product(&haloed),
		trim: product(&trim),
		indices,
		advisories: grid.uneven.into_iter().collect(),
	})
}

//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use ndarray::{Array, ArrayD, IxDyn};

	use super::*;
	use crate::view::slice_view;

	fn init_logging() {
		let _ = stderrlog::new().module(module_path!()).verbosity(log::Level::Warn).init();
	}

	fn s(start: isize, stop: isize) -> Slice {
		Slice::new(start, Some(stop), 1)
	}

	fn column(blocks: &[BlockSlices], axis: usize) -> Vec<Slice> {
		blocks.iter().map(|b| b[axis]).collect()
	}

	#[test]
	fn test_validation() {
		let err = split_blocks(&[1], &[1, 2], Some(&[1, 2, 3])).unwrap_err();
		assert_eq!(err.code, SliceOpError::DimensionMismatch);
		assert_eq!(
			err.message(),
			"The dimensions of `space_shape`, `block_shape`, and `block_halo` should be the same."
		);

		let err = split_blocks(&[1], &[1, 2], None).unwrap_err();
		assert_eq!(err.code, SliceOpError::DimensionMismatch);
		assert_eq!(err.message(), "The dimensions of `space_shape` and `block_shape` should be the same.");

		let err = split_blocks(&[2, 0], &[1, 1], None).unwrap_err();
		assert_eq!(err.code, SliceOpError::InvalidShape);

		for bad in [0, -2] {
			let err = split_blocks(&[2, 3], &[1, bad], None).unwrap_err();
			assert_eq!(err.code, SliceOpError::InvalidShape);
		}

		let err = num_blocks(&[2], &[1, 1]).unwrap_err();
		assert_eq!(err.code, SliceOpError::DimensionMismatch);
	}

	#[test]
	fn test_single_axis() {
		let b = split_blocks(&[2], &[1], None).unwrap();
		assert_eq!(column(&b.core, 0), vec![s(0, 1), s(1, 2)]);
		assert_eq!(column(&b.haloed, 0), vec![s(0, 1), s(1, 2)]);
		assert_eq!(column(&b.trim, 0), vec![s(0, 1), s(0, 1)]);
		assert!(b.advisories.is_empty());
		assert_eq!(b.indices, None);

		let b = split_blocks(&[2], &[FULL_EXTENT], None).unwrap();
		assert_eq!(b.len(), 1);
		assert_eq!(b.core[0].as_slice(), &[s(0, 2)]);
		assert_eq!(b.haloed[0].as_slice(), &[s(0, 2)]);
		assert_eq!(b.trim[0].as_slice(), &[s(0, 2)]);
	}

	#[test]
	fn test_small_grid_with_halo() {
		let options = SplitOptions { emit_index: true, ..SplitOptions::default() };
		let b = split_blocks_with(&[2, 3], &[1, 1], Some(&[1, 1]), &options).unwrap();
		assert_eq!(b.len(), 6);

		let core: Vec<Vec<Slice>> = b.core.iter().map(|c| c.to_vec()).collect();
		assert_eq!(
			core,
			vec![
				vec![s(0, 1), s(0, 1)],
				vec![s(0, 1), s(1, 2)],
				vec![s(0, 1), s(2, 3)],
				vec![s(1, 2), s(0, 1)],
				vec![s(1, 2), s(1, 2)],
				vec![s(1, 2), s(2, 3)],
			]
		);
		assert_eq!(column(&b.haloed, 0), vec![s(0, 2); 6]);
		assert_eq!(column(&b.haloed, 1), [s(0, 2), s(0, 3), s(1, 3)].repeat(2));
		assert_eq!(column(&b.trim, 0), vec![s(0, 1), s(0, 1), s(0, 1), s(1, 2), s(1, 2), s(1, 2)]);
		assert_eq!(column(&b.trim, 1), [s(0, 1), s(1, 2), s(1, 2)].repeat(2));

		let indices: Vec<Vec<usize>> = b.indices.unwrap().iter().map(|i| i.to_vec()).collect();
		assert_eq!(indices, vec![vec![0, 0], vec![0, 1], vec![0, 2], vec![1, 0], vec![1, 1], vec![1, 2]]);
	}

	#[test]
	fn test_zero_halo_is_default() {
		let with_zero = split_blocks(&[2, 3], &[1, 1], Some(&[0, 0])).unwrap();
		let without = split_blocks(&[2, 3], &[1, 1], None).unwrap();
		assert_eq!(with_zero, without);
		assert_eq!(without.core, without.haloed);
		assert!(without.trim.iter().all(|t| t.as_slice() == [s(0, 1), s(0, 1)]));
	}

	#[test]
	fn test_uneven_grid() {
		init_logging();

		let b = split_blocks(&[10, 12], &[3, 2], Some(&[4, 3])).unwrap();
		assert_eq!(b.len(), 24);
		assert_eq!(num_blocks(&[10, 12], &[3, 2]).unwrap().as_slice(), &[4, 6]);

		let rows = |blocks: &[BlockSlices]| column(blocks, 0).into_iter().step_by(6).collect::<Vec<_>>();
		let cols = |blocks: &[BlockSlices]| column(blocks, 1).into_iter().take(6).collect::<Vec<_>>();

		assert_eq!(rows(&b.core), vec![s(0, 3), s(3, 6), s(6, 9), s(9, 10)]);
		assert_eq!(cols(&b.core), vec![s(0, 2), s(2, 4), s(4, 6), s(6, 8), s(8, 10), s(10, 12)]);

		assert_eq!(rows(&b.haloed), vec![s(0, 7), s(0, 10), s(2, 10), s(5, 10)]);
		assert_eq!(cols(&b.haloed), vec![s(0, 5), s(0, 7), s(1, 9), s(3, 11), s(5, 12), s(7, 12)]);

		// the trim of the truncated last row runs past its haloed window
		assert_eq!(rows(&b.trim), vec![s(0, 3), s(3, 6), s(4, 7), s(4, 7)]);
		assert_eq!(cols(&b.trim), vec![s(0, 2), s(2, 4), s(3, 5), s(3, 5), s(3, 5), s(3, 5)]);

		let advisory = Advisory::UnevenDivision { axes: SmallVec::from_slice(&[0]) };
		assert_eq!(b.advisories, vec![advisory.clone()]);
		assert_eq!(
			advisory.to_string(),
			"Blocks will not evenly divide the array. The following dimensions will be unevenly divided: 0."
		);
	}

	#[test]
	fn test_deny_uneven() {
		let options = SplitOptions { deny_uneven: true, ..SplitOptions::default() };
		let err = split_blocks_with(&[10, 11], &[3, 2], None, &options).unwrap_err();
		assert_eq!(err.code, SliceOpError::UnevenDivision);
		assert_eq!(
			err.message(),
			"Blocks will not evenly divide the array. The following dimensions will be unevenly divided: 0, 1."
		);

		assert!(split_blocks_with(&[9, 12], &[3, 2], None, &options).is_ok());
	}

	#[test]
	fn test_zero_dimensional() {
		let b = split_blocks_with(&[], &[], None, &SplitOptions { emit_index: true, ..SplitOptions::default() })
			.unwrap();
		assert_eq!(b.len(), 1);
		assert!(b.core[0].is_empty() && b.haloed[0].is_empty() && b.trim[0].is_empty());
		assert_eq!(b.indices.as_ref().map(Vec::len), Some(1));
		assert!(num_blocks(&[], &[]).unwrap().is_empty());
	}

	#[test]
	fn test_iter_aligns_lists() {
		let options = SplitOptions { emit_index: true, ..SplitOptions::default() };
		let b = split_blocks_with(&[4, 5], &[2, 2], Some(&[1, 0]), &options).unwrap();
		let blocks: Vec<Block> = b.iter().collect();
		assert_eq!(blocks.len(), b.len());
		assert_eq!(blocks[3].core, b.core[3].as_slice());
		assert_eq!(blocks[3].haloed, b.haloed[3].as_slice());
		assert_eq!(blocks[3].trim, b.trim[3].as_slice());
		assert_eq!(blocks[3].index, Some(&[1, 0][..]));
		assert!(b.get(b.len()).is_none());
	}

	#[test]
	fn test_halo_round_trip_and_coverage() {
		init_logging();

		let cases: [(&[usize], &[isize], &[usize]); 5] = [
			(&[10, 12], &[3, 2], &[4, 3]),
			(&[2, 3], &[1, 1], &[1, 1]),
			(&[7], &[FULL_EXTENT], &[2]),
			(&[5, 4, 3], &[2, FULL_EXTENT, 2], &[0, 1, 5]),
			(&[9, 9], &[4, 5], &[9, 0]),
		];

		for (space, block, halo) in cases {
			let size: usize = space.iter().product();
			let data: ArrayD<usize> = Array::from_shape_vec(IxDyn(space), (0..size).collect()).unwrap();
			let mut hits = vec![0_usize; size];

			let b = split_blocks(space, block, Some(halo)).unwrap();
			assert_eq!(b.len(), num_blocks(space, block).unwrap().iter().product::<usize>());

			for blk in b.iter() {
				let direct = slice_view(data.view(), blk.core).unwrap();
				let haloed = slice_view(data.view(), blk.haloed).unwrap();
				let trimmed = slice_view(haloed, blk.trim).unwrap();
				assert_eq!(trimmed, direct, "{space:?} {block:?} {halo:?}");

				for &v in direct {
					hits[v] += 1;
				}
			}
			assert!(hits.iter().all(|&h| h == 1), "{space:?} {block:?} is not a partition");
		}
	}
}

//--------------------------------------------------------------------------------------------------
