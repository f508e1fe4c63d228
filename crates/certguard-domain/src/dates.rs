//! Guideline effective dates used in lint metadata.

use time::Date;
use time::macros::date;

/// CA/Browser Forum EV Guidelines v1.2.
pub const EVG_1_2_DATE: Date = date!(2009 - 10 - 01);
