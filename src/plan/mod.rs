//! Main module for the lesson-plan parser
//!
//!     The pipeline runs in one direction only:
//!
//!         raw text -> extracted sections -> classified sections
//!                  -> (Activities section) extracted activities
//!                  -> completed section set (lenient) or storage record (strict)
//!
//!     Each stage is an ordered table of independent strategies tried in a fixed
//!     fallback order; the first strategy that produces output wins and no merging
//!     happens across strategies. See [sections] and [activities] for the tables.

pub mod activities;
pub mod classify;
pub mod error;
pub mod markdown;
pub mod model;
pub mod output;
pub mod pipeline;
pub mod sections;
pub mod testing;
pub mod trace;
pub mod validate;
