//! Change planning for property updates.

use super::patch::{NewProperty, PropertyPatch, PropertyState};
use super::status::PropertyStatus;

/// History action recorded when a listing is created.
pub const CREATE_ACTION: &str = "create";

/// One changed field, with values in their stored string form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    /// Field name as exposed in the API.
    pub field: &'static str,
    /// Value before the update; `None` for null.
    pub old_value: Option<String>,
    /// Value after the update; `None` for null.
    pub new_value: Option<String>,
}

impl FieldChange {
    /// History action label, `update_<field>`.
    #[must_use]
    pub fn action(&self) -> String {
        format!("update_{}", self.field)
    }
}

/// A status move observed across one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTransition {
    /// Status before the update.
    pub from: PropertyStatus,
    /// Status after the update.
    pub to: PropertyStatus,
}

/// Everything an update will do, computed before anything is written.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationPlan {
    /// Listing state after the update.
    pub next: PropertyState,
    /// Provided fields whose value actually changed, in field order.
    pub changes: Vec<FieldChange>,
    /// Set when the status differs from the pre-update status.
    pub status_transition: Option<StatusTransition>,
}

impl MutationPlan {
    /// Returns true if the update changes nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Plans `patch` against `current`.
///
/// Only fields present in the patch are compared. Values are compared in
/// their stringified form, which is also what lands in the history rows.
#[must_use]
pub fn plan_update(current: &PropertyState, patch: &PropertyPatch) -> MutationPlan {
    let next = patch.apply(current);
    let mut changes = Vec::new();

    if patch.title.is_some() {
        record(&mut changes, "title", Some(current.title.clone()), Some(next.title.clone()));
    }
    if patch.description.is_some() {
        record(
            &mut changes,
            "description",
            current.description.clone(),
            next.description.clone(),
        );
    }
    if patch.price.is_some() {
        record(
            &mut changes,
            "price",
            Some(current.price.to_string()),
            Some(next.price.to_string()),
        );
    }
    if patch.address.is_some() {
        record(
            &mut changes,
            "address",
            Some(current.address.clone()),
            Some(next.address.clone()),
        );
    }
    if patch.latitude.is_some() {
        record(
            &mut changes,
            "latitude",
            current.latitude.map(|v| v.to_string()),
            next.latitude.map(|v| v.to_string()),
        );
    }
    if patch.longitude.is_some() {
        record(
            &mut changes,
            "longitude",
            current.longitude.map(|v| v.to_string()),
            next.longitude.map(|v| v.to_string()),
        );
    }
    if patch.status.is_some() {
        record(
            &mut changes,
            "status",
            Some(current.status.as_str().to_string()),
            Some(next.status.as_str().to_string()),
        );
    }

    let status_transition = (current.status != next.status).then_some(StatusTransition {
        from: current.status,
        to: next.status,
    });

    MutationPlan {
        next,
        changes,
        status_transition,
    }
}

fn record(
    changes: &mut Vec<FieldChange>,
    field: &'static str,
    old_value: Option<String>,
    new_value: Option<String>,
) {
    if old_value != new_value {
        changes.push(FieldChange {
            field,
            old_value,
            new_value,
        });
    }
}

/// Serializes a creation payload for the `create` history row.
///
/// # Errors
///
/// Returns an error if the payload cannot be encoded as JSON.
pub fn creation_record(payload: &NewProperty) -> Result<String, serde_json::Error> {
    serde_json::to_string(payload)
}

/// Notification text sent to the agency when a listing changes status.
#[must_use]
pub fn status_message(title: &str, status: PropertyStatus) -> String {
    format!("Status of property '{title}' changed to {status}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> PropertyState {
        PropertyState {
            title: "Loft".to_string(),
            description: None,
            price: 100_000,
            address: "1 Main St".to_string(),
            latitude: None,
            longitude: None,
            status: PropertyStatus::ForSale,
        }
    }

    #[test]
    fn test_status_change_is_audited_and_flagged() {
        let patch = PropertyPatch {
            status: Some(PropertyStatus::Sold),
            ..PropertyPatch::default()
        };
        let plan = plan_update(&listing(), &patch);

        assert_eq!(
            plan.changes,
            vec![FieldChange {
                field: "status",
                old_value: Some("for_sale".to_string()),
                new_value: Some("sold".to_string()),
            }]
        );
        assert_eq!(plan.changes[0].action(), "update_status");
        assert_eq!(
            plan.status_transition,
            Some(StatusTransition {
                from: PropertyStatus::ForSale,
                to: PropertyStatus::Sold,
            })
        );
    }

    #[test]
    fn test_unchanged_values_produce_nothing() {
        let patch = PropertyPatch {
            title: Some("Loft".to_string()),
            price: Some(100_000),
            status: Some(PropertyStatus::ForSale),
            ..PropertyPatch::default()
        };
        let plan = plan_update(&listing(), &patch);

        assert!(plan.is_noop());
        assert_eq!(plan.status_transition, None);
    }

    #[test]
    fn test_only_changed_fields_recorded() {
        let patch = PropertyPatch {
            title: Some("Loft".to_string()),
            price: Some(95_000),
            latitude: Some(Some(55.5)),
            ..PropertyPatch::default()
        };
        let plan = plan_update(&listing(), &patch);

        let actions: Vec<String> = plan.changes.iter().map(FieldChange::action).collect();
        assert_eq!(actions, vec!["update_price", "update_latitude"]);
        assert_eq!(plan.changes[1].old_value, None);
        assert_eq!(plan.changes[1].new_value.as_deref(), Some("55.5"));
        assert_eq!(plan.status_transition, None);
    }

    #[test]
    fn test_clearing_a_field_records_null() {
        let mut current = listing();
        current.description = Some("Top floor".to_string());
        let patch = PropertyPatch {
            description: Some(None),
            ..PropertyPatch::default()
        };
        let plan = plan_update(&current, &patch);

        assert_eq!(plan.changes.len(), 1);
        assert_eq!(plan.changes[0].old_value.as_deref(), Some("Top floor"));
        assert_eq!(plan.changes[0].new_value, None);
    }

    #[test]
    fn test_creation_record_is_json() {
        let payload = NewProperty {
            title: "Loft".to_string(),
            description: None,
            price: 100_000,
            address: "1 Main St".to_string(),
            latitude: None,
            longitude: None,
            status: PropertyStatus::ForSale,
        };
        let record = creation_record(&payload).unwrap();
        let value: serde_json::Value = serde_json::from_str(&record).unwrap();
        assert_eq!(value["status"], "for_sale");
        assert_eq!(value["price"], 100_000);
    }

    #[test]
    fn test_status_message_names_title_and_status() {
        let msg = status_message("Loft", PropertyStatus::Sold);
        assert!(msg.contains("Loft"));
        assert!(msg.contains("sold"));
    }
}
