//! Core data structures flowing through `venus-trjconv`.
//!
//! - [`units`]: Conversion factors from VENUS96 native units to nm, nm/ps and ps.
//! - [`frame`]: Frame snapshots and trajectory segments extracted from a VENUS96 log.
//! - [`structure`]: Reference structures (gro, xyz) supplying per-atom identity.
//! - [`record`]: Per-format output frame records handed to the serializers.
//!
//! Extracted data ([`Trajectory`]) is kept separate from the static
//! reference metadata ([`Structure`]); the [`crate::convert`] projectors
//! combine the two into [`FrameRecord`]s.
//!
//! [`Trajectory`]: frame::Trajectory
//! [`Structure`]: structure::Structure
//! [`FrameRecord`]: record::FrameRecord

pub mod frame;
pub mod record;
pub mod structure;
pub mod units;
