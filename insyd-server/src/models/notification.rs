//! NewNotification - validated input for notification creation

use super::ValidationError;

/// A notification ready to insert.
///
/// Every required field is present and non-empty. `from_user_id` is `None`
/// for system-generated notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotification {
    pub user_id: i64,
    pub kind: String,
    pub title: String,
    pub message: String,
    pub from_user_id: Option<i64>,
}

impl NewNotification {
    /// Build from already-present values.
    ///
    /// A `user_id` of 0 counts as missing; a `from_user_id` of 0 is dropped.
    pub fn new(
        user_id: i64,
        kind: &str,
        title: &str,
        message: &str,
        from_user_id: Option<i64>,
    ) -> Result<Self, ValidationError> {
        Self::from_parts(
            Some(user_id),
            Some(kind.to_owned()),
            Some(title.to_owned()),
            Some(message.to_owned()),
            from_user_id,
        )
    }

    /// Build from optional values, reporting every missing field at once.
    pub fn from_parts(
        user_id: Option<i64>,
        kind: Option<String>,
        title: Option<String>,
        message: Option<String>,
        from_user_id: Option<i64>,
    ) -> Result<Self, ValidationError> {
        let user_id = user_id.filter(|id| *id != 0);
        let kind = kind.filter(|s| !s.is_empty());
        let title = title.filter(|s| !s.is_empty());
        let message = message.filter(|s| !s.is_empty());

        match (user_id, kind, title, message) {
            (Some(user_id), Some(kind), Some(title), Some(message)) => Ok(Self {
                user_id,
                kind,
                title,
                message,
                from_user_id: from_user_id.filter(|id| *id != 0),
            }),
            (user_id, kind, title, message) => {
                let fields = [
                    ("user_id", user_id.is_none()),
                    ("type", kind.is_none()),
                    ("title", title.is_none()),
                    ("message", message.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, missing)| missing.then_some(name))
                .collect();

                Err(ValidationError::MissingFields { fields })
            }
        }
    }
}
