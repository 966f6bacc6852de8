//! Item Entity
//!
//! A lost or found report as stored by the backend. Both collections share
//! this shape; which collection a record came from is only known once it has
//! been tagged (see [`TaggedItem`]).

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Backend-assigned identifier.
///
/// REST stores hand out either numeric or string ids; both render verbatim
/// into `/{collection}/{id}` URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ItemId {
    fn from(n: u64) -> Self {
        ItemId::Number(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

/// Which collection a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Lost,
    Found,
}

impl ItemKind {
    pub const ALL: [ItemKind; 2] = [ItemKind::Lost, ItemKind::Found];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Lost => "lost",
            ItemKind::Found => "found",
        }
    }

    /// Display label ("Lost" / "Found")
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Lost => "Lost",
            ItemKind::Found => "Found",
        }
    }

    /// REST collection name
    pub fn collection(&self) -> &'static str {
        match self {
            ItemKind::Lost => "lostItems",
            ItemKind::Found => "foundItems",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Item record (wire format is camelCase)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub item_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// User-supplied event date (`YYYY-MM-DD`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact: String,
    /// ISO-8601 creation timestamp, stamped by the client on report
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Found items only: handed to the lost & found office
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_flag")]
    pub turned_in: Option<bool>,
}

impl Item {
    /// `date` when present and non-empty, otherwise `created_at`.
    ///
    /// An explicit but unparseable `date` does not fall back.
    pub fn effective_date(&self) -> Option<DateTime<Utc>> {
        match self.date.as_deref().filter(|d| !d.trim().is_empty()) {
            Some(date) => parse_timestamp(date),
            None => parse_timestamp(&self.created_at),
        }
    }

    pub fn created_date(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.created_at)
    }

    /// Effective date rendered as a local calendar date (M/D/YYYY)
    pub fn display_date<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        format_date(self.effective_date(), tz)
    }

    /// Creation date rendered as a local calendar date (M/D/YYYY)
    pub fn display_created_date<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        format_date(self.created_date(), tz)
    }

    pub fn category_label(&self) -> &str {
        non_empty(self.category.as_deref()).unwrap_or("Not specified")
    }

    pub fn location_label(&self) -> &str {
        non_empty(self.location.as_deref()).unwrap_or("Not specified")
    }

    /// Description cut to `max_chars` characters, with `...` appended when cut
    pub fn description_preview(&self, max_chars: usize) -> String {
        match self.description.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}...", &self.description[..cut]),
            None => self.description.clone(),
        }
    }
}

/// Item with its originating collection attached.
///
/// The tag is derived on every merge and never sent back to the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedItem {
    pub kind: ItemKind,
    pub item: Item,
}

impl TaggedItem {
    pub fn new(kind: ItemKind, item: Item) -> Self {
        Self { kind, item }
    }

    pub fn effective_date(&self) -> Option<DateTime<Utc>> {
        self.item.effective_date()
    }

    /// Custody line for found items that recorded `turnedIn`.
    ///
    /// `holder` names whoever keeps the item when it was not turned in
    /// ("finder" on the public board, "you" on the owner's dashboard).
    pub fn custody_status(&self, holder: &str) -> Option<String> {
        if self.kind != ItemKind::Found {
            return None;
        }
        self.item.turned_in.map(|turned_in| {
            if turned_in {
                "Turned in to Lost & Found Office".to_string()
            } else {
                format!("Being held by {}", holder)
            }
        })
    }
}

/// `null` reads like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

/// Stores fed by plain HTML forms keep `"true"`/`"false"` strings
fn lenient_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(flag)) => Some(flag),
        Some(Flag::Text(text)) => Some(text == "true"),
        None => None,
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Parses the timestamp shapes the board stores.
///
/// Date-only strings are midnight UTC, the way browsers read them.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn format_date<Tz: TimeZone>(date: Option<DateTime<Utc>>, tz: &Tz) -> String
where
    Tz::Offset: fmt::Display,
{
    match date {
        Some(dt) => dt.with_timezone(tz).format("%-m/%-d/%Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}
