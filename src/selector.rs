//------------------------------------------------------------------------------
//
// Copyright 2025 Jiri Bobek. All rights reserved.
// License: GPL 3.0 or later. See LICENSE.txt for details.
//
//------------------------------------------------------------------------------

use crate::range::UniversalRange;
use crate::slice::Slice;

//--------------------------------------------------------------------------------------------------

/// What one axis of a selection asks for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selector {
	/// A single element. Selecting it removes the axis.
	Index(isize),

	/// A range of elements, possibly strided or reversed.
	Range(UniversalRange),

	/// As many full axes as needed to match the number of dimensions.
	Ellipsis,

	/// The whole axis. This is what an empty tuple selects.
	Full,

	/// Several discrete elements along the axis.
	Indices(Vec<isize>),
}

impl From<isize> for Selector {
	fn from(index: isize) -> Self {
		Self::Index(index)
	}
}

impl From<i32> for Selector {
	#[allow(clippy::cast_possible_truncation)]
	fn from(index: i32) -> Self {
		Self::Index(index as isize)
	}
}

impl From<UniversalRange> for Selector {
	fn from(range: UniversalRange) -> Self {
		Self::Range(range)
	}
}

impl From<Slice> for Selector {
	fn from(slice: Slice) -> Self {
		Self::Range(slice.into())
	}
}

impl From<()> for Selector {
	fn from((): ()) -> Self {
		Self::Full
	}
}

impl From<Vec<isize>> for Selector {
	fn from(indices: Vec<isize>) -> Self {
		Self::Indices(indices)
	}
}

impl From<&[isize]> for Selector {
	fn from(indices: &[isize]) -> Self {
		Self::Indices(indices.to_vec())
	}
}

impl<const N: usize> From<[isize; N]> for Selector {
	fn from(indices: [isize; N]) -> Self {
		Self::Indices(indices.to_vec())
	}
}

macro_rules! impl_from_range {
	($($range:ty),* $(,)?) => {
		$(
			impl From<$range> for Selector {
				fn from(range: $range) -> Self {
					Self::Range(range.into())
				}
			}
		)*
	};
}

impl_from_range!(
	std::ops::Range<isize>,
	std::ops::RangeInclusive<isize>,
	std::ops::RangeFrom<isize>,
	std::ops::RangeTo<isize>,
	std::ops::RangeToInclusive<isize>,
	std::ops::RangeFull,
);

//--------------------------------------------------------------------------------------------------

/// The resolved form of a [`Selector`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Normalized {
	Index(isize),
	Slice(Slice),
	Indices(Vec<isize>),

	/// Kept as-is when a tuple is normalized without axis lengths.
	Ellipsis,
}

impl Normalized {
	pub fn as_slice(&self) -> Option<&Slice> {
		match self {
			Self::Slice(slice) => Some(slice),
			_ => None,
		}
	}

	pub fn as_index(&self) -> Option<isize> {
		match self {
			Self::Index(index) => Some(*index),
			_ => None,
		}
	}
}

impl From<Slice> for Normalized {
	fn from(slice: Slice) -> Self {
		Self::Slice(slice)
	}
}

impl From<Normalized> for Selector {
	fn from(normalized: Normalized) -> Self {
		match normalized {
			Normalized::Index(index) => Self::Index(index),
			Normalized::Slice(slice) => slice.into(),
			Normalized::Indices(indices) => Self::Indices(indices),
			Normalized::Ellipsis => Self::Ellipsis,
		}
	}
}

impl std::fmt::Display for Normalized {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Index(index) => write!(f, "{index}"),
			Self::Slice(slice) => write!(f, "{slice}"),
			Self::Indices(indices) => write!(f, "{indices:?}"),
			Self::Ellipsis => write!(f, "..."),
		}
	}
}

//--------------------------------------------------------------------------------------------------

/// Builds a `Vec<Selector>`, one item per axis. `*` stands for the ellipsis.
///
/// ```ignore
/// let s = sel![0, 2..5, *, -1];
/// ```
#[macro_export]
macro_rules! sel {
	() => {
		::std::vec::Vec::<$crate::Selector>::new()
	};
	($($rest:tt)*) => {
		$crate::sel_append!(::std::vec::Vec::<$crate::Selector>::new(); $($rest)*)
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! sel_append {
	($builder:expr; ) => {
		$builder
	};
	($builder:expr; *) => {{
		let mut v = $builder;
		v.push($crate::Selector::Ellipsis);
		v
	}};
	($builder:expr; *, $($rest:tt)*) => {
		$crate::sel_append!($crate::sel_append!($builder; *); $($rest)*)
	};
	($builder:expr; $e:expr) => {{
		let mut v = $builder;
		v.push($crate::Selector::from($e));
		v
	}};
	($builder:expr; $e:expr, $($rest:tt)*) => {
		$crate::sel_append!($crate::sel_append!($builder; $e); $($rest)*)
	};
}

//--------------------------------------------------------------------------------------------------


//--------------------------------------------------------------------------------------------------
