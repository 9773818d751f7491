//! Module containing empirical component mass estimates used in weight buildups

pub(crate) use crate::imports::*;

pub mod wiring;
