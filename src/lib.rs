/*!
voxphase
========

**voxphase** is a broad-phase collision engine for voxel-grid worlds written
with the rust programming language.

Given a moving axis-aligned box — an entity's hitbox or an arbitrary query
volume — it enumerates the world geometry that box collides with: terrain
blocks on a chunked grid, other dynamic bodies, and the rectangular world
border. Results are produced lazily so that callers that only need to know
"is there any collision at all" never pay for more than the first one.

The grid itself, the registry of dynamic bodies, and per-block shape tables
are consumed through the traits of the [`world`] module; this crate is a pure
query layer and owns no world state.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(unused_qualifications)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod math;
pub mod query;
pub mod shape;
pub mod world;
