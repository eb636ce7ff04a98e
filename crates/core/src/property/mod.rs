//! Property listings: status lifecycle, partial updates, and change diffs.
//!
//! An update is planned as one pass over the fields named in a
//! [`PropertyPatch`]. The resulting [`MutationPlan`] carries both the
//! per-field audit changes and, separately, whether the status moved; the
//! first drives history rows, the second drives agency notifications.

mod diff;
mod patch;
mod status;

pub use diff::{
    CREATE_ACTION, FieldChange, MutationPlan, StatusTransition, creation_record, plan_update,
    status_message,
};
pub use patch::{NewProperty, PropertyPatch, PropertyState};
pub use status::PropertyStatus;

#[cfg(test)]
mod diff_props;
