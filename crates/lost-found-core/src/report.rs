//! Report Form
//!
//! Raw field values of the lost/found report forms and their conversion into
//! a create payload.

use chrono::{DateTime, Utc};

use crate::domain::{ItemDraft, ItemKind};

/// Values as read from the form inputs
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReportForm {
    pub item_name: String,
    pub category: String,
    pub date: String,
    pub location: String,
    pub description: String,
    pub user_name: String,
    pub contact: String,
    /// Found form select value, `"true"` or `"false"`
    pub turned_in: String,
}

impl ReportForm {
    /// Fresh form: today's date, the remembered reporter name and
    /// "not turned in"
    pub fn blank(today: &str, cached_user: Option<&str>) -> Self {
        Self {
            date: today.to_string(),
            user_name: cached_user.unwrap_or_default().to_string(),
            turned_in: "false".to_string(),
            ..Default::default()
        }
    }

    /// Build the create payload for `kind`.
    ///
    /// Only found reports carry `turnedIn`, and only the exact string `"true"`
    /// turns it on.
    pub fn to_draft(&self, kind: ItemKind) -> ItemDraft {
        ItemDraft {
            item_name: self.item_name.clone(),
            category: optional(&self.category),
            location: optional(&self.location),
            date: optional(&self.date),
            description: self.description.clone(),
            user_name: self.user_name.clone(),
            contact: self.contact.clone(),
            turned_in: match kind {
                ItemKind::Found => Some(self.turned_in == "true"),
                ItemKind::Lost => None,
            },
        }
    }
}

/// One input of the report form, named after its payload key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportField {
    ItemName,
    Category,
    Date,
    Location,
    Description,
    UserName,
    Contact,
    TurnedIn,
}

impl ReportField {
    pub fn name(&self) -> &'static str {
        match self {
            ReportField::ItemName => "itemName",
            ReportField::Category => "category",
            ReportField::Date => "date",
            ReportField::Location => "location",
            ReportField::Description => "description",
            ReportField::UserName => "userName",
            ReportField::Contact => "contact",
            ReportField::TurnedIn => "turnedIn",
        }
    }

    pub fn get<'a>(&self, form: &'a ReportForm) -> &'a str {
        match self {
            ReportField::ItemName => &form.item_name,
            ReportField::Category => &form.category,
            ReportField::Date => &form.date,
            ReportField::Location => &form.location,
            ReportField::Description => &form.description,
            ReportField::UserName => &form.user_name,
            ReportField::Contact => &form.contact,
            ReportField::TurnedIn => &form.turned_in,
        }
    }

    pub fn set(&self, form: &mut ReportForm, value: String) {
        let slot = match self {
            ReportField::ItemName => &mut form.item_name,
            ReportField::Category => &mut form.category,
            ReportField::Date => &mut form.date,
            ReportField::Location => &mut form.location,
            ReportField::Description => &mut form.description,
            ReportField::UserName => &mut form.user_name,
            ReportField::Contact => &mut form.contact,
            ReportField::TurnedIn => &mut form.turned_in,
        };
        *slot = value;
    }
}

fn optional(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Default value of the date input: the current UTC calendar date
pub fn today_input_value(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}

/// Banner text after a submission
pub fn outcome_message(kind: ItemKind, error: Option<&str>) -> String {
    match error {
        None => format!("Your {} item has been reported successfully!", kind),
        Some(reason) => format!("Failed to report {} item: {}", kind, reason),
    }
}
