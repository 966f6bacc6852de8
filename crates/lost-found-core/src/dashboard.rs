//! Dashboard
//!
//! The per-user view: counts, tab listing, empty states and the delete
//! confirmation flow.

use crate::domain::{ItemId, ItemKind, TaggedItem};
use crate::filter::{sort_newest_first, KindFilter};
use crate::repository::{ItemApi, ItemCollections, ItemRepository};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UserStats {
    pub lost: usize,
    pub found: usize,
    pub total: usize,
}

impl UserStats {
    pub fn of(items: &ItemCollections) -> Self {
        Self {
            lost: items.lost.len(),
            found: items.found.len(),
            total: items.total(),
        }
    }
}

/// The user's records for `tab`, newest effective date first
pub fn tab_items(items: &ItemCollections, tab: KindFilter) -> Vec<TaggedItem> {
    let mut visible: Vec<TaggedItem> = items
        .tagged()
        .into_iter()
        .filter(|tagged| tab.matches(tagged.kind))
        .collect();
    sort_newest_first(&mut visible);
    visible
}

/// What an empty tab shows instead of cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub title: String,
    pub message: String,
    /// One "Report ... Item" link per kind the tab covers
    pub report_links: Vec<ItemKind>,
}

impl EmptyState {
    pub fn for_tab(tab: KindFilter) -> Self {
        let (title, subject, report_links) = match tab {
            KindFilter::All => (
                "No items yet".to_string(),
                "lost or found",
                vec![ItemKind::Lost, ItemKind::Found],
            ),
            KindFilter::Lost => ("No lost items yet".to_string(), "lost", vec![ItemKind::Lost]),
            KindFilter::Found => ("No found items yet".to_string(), "found", vec![ItemKind::Found]),
        };
        Self {
            title,
            message: format!("You haven't reported any {} items yet.", subject),
            report_links,
        }
    }

    /// Items board with nothing left after filtering
    pub fn no_matches() -> Self {
        Self {
            title: "No Items Found".to_string(),
            message: "Try adjusting your filters or search criteria.".to_string(),
            report_links: Vec::new(),
        }
    }
}

/// Label of a report call-to-action
pub fn report_link_label(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Lost => "Report Lost Item",
        ItemKind::Found => "Report Found Item",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletePhase {
    /// Waiting for cancel/confirm
    Confirming,
    /// Request in flight, confirm disabled
    Deleting,
}

/// Delete confirmation dialog.
///
/// A failed delete keeps the dialog open with the error inline so the user
/// can retry; only a successful delete closes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteDialog {
    pub kind: ItemKind,
    pub id: ItemId,
    pub phase: DeletePhase,
    pub error: Option<String>,
}

impl DeleteDialog {
    pub fn open(kind: ItemKind, id: ItemId) -> Self {
        Self { kind, id, phase: DeletePhase::Confirming, error: None }
    }

    pub fn prompt(&self) -> String {
        format!(
            "Are you sure you want to delete this {} item? This action cannot be undone.",
            self.kind
        )
    }

    pub fn is_busy(&self) -> bool {
        self.phase == DeletePhase::Deleting
    }

    pub fn confirm_label(&self) -> &'static str {
        match self.phase {
            DeletePhase::Confirming => "Delete",
            DeletePhase::Deleting => "Deleting...",
        }
    }

    pub fn deleting(&self) -> Self {
        Self { phase: DeletePhase::Deleting, ..self.clone() }
    }

    pub fn failed(&self, reason: impl std::fmt::Display) -> Self {
        Self {
            phase: DeletePhase::Confirming,
            error: Some(format!("Failed to delete item: {}", reason)),
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Close the dialog and reload the user's items
    Deleted,
    /// Keep the dialog open in this state
    Failed(DeleteDialog),
}

/// Issue the delete the dialog was opened for
pub async fn confirm_delete<A: ItemApi>(repo: &ItemRepository<A>, dialog: &DeleteDialog) -> DeleteOutcome {
    match repo.delete(dialog.kind, &dialog.id).await {
        Ok(()) => DeleteOutcome::Deleted,
        Err(e) => DeleteOutcome::Failed(dialog.failed(e)),
    }
}
