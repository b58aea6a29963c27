//! Load state machine and the LDAP detail view model

use crate::routes::{default_details_url, edit_url};
use crate::types::{is_superuser, BucketId, LoadResult, Me, SettingEntry};
use crate::Error;

/// Lifecycle of the single settings fetch behind the detail page.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready {
        result: LoadResult,
        advanced_expanded: bool,
    },
    Failed(Error),
}

impl LoadState {
    /// Idle -> Loading. Returns false if a load already started.
    pub fn begin(&mut self) -> bool {
        if matches!(self, Self::Idle) {
            *self = Self::Loading;
            true
        } else {
            false
        }
    }

    /// Settle the fetch. The advanced section starts collapsed.
    pub fn resolve(&mut self, outcome: crate::Result<LoadResult>) {
        *self = match outcome {
            Ok(result) => Self::Ready {
                result,
                advanced_expanded: false,
            },
            Err(e) => Self::Failed(e),
        };
    }

    /// Flip the advanced section. No effect outside `Ready`.
    pub fn toggle_advanced(&mut self) {
        if let Self::Ready {
            advanced_expanded, ..
        } = self
        {
            *advanced_expanded = !*advanced_expanded;
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&LoadResult> {
        match self {
            Self::Ready { result, .. } => Some(result),
            _ => None,
        }
    }
}

/// Advanced settings block shown to superusers
#[derive(Debug, Clone, PartialEq)]
pub struct AdvancedSection {
    pub expanded: bool,
    pub fields: Vec<SettingEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadyView {
    pub bucket: BucketId,
    pub fields: Vec<SettingEntry>,
    pub advanced: Option<AdvancedSection>,
    pub edit_url: Option<String>,
}

/// What the detail page shows for a given state, route and viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Redirect(String),
    Loading,
    Error(String),
    Ready(ReadyView),
}

impl DetailView {
    pub fn build(state: &LoadState, category: Option<&str>, viewer: Option<&Me>) -> Self {
        let bucket = match category.unwrap_or_default().parse::<BucketId>() {
            Ok(bucket) => bucket,
            Err(e) => {
                tracing::debug!(error = %e, "Redirecting to the default bucket");
                return Self::Redirect(default_details_url());
            }
        };

        match state {
            LoadState::Idle | LoadState::Loading => Self::Loading,
            LoadState::Failed(e) => Self::Error(e.to_string()),
            LoadState::Ready {
                result,
                advanced_expanded,
            } => {
                let entries = result.get(bucket).unwrap_or_default();
                let (advanced, fields): (Vec<SettingEntry>, Vec<SettingEntry>) =
                    entries.iter().cloned().partition(|e| e.field.is_advanced);

                let privileged = is_superuser(viewer);
                Self::Ready(ReadyView {
                    bucket,
                    fields,
                    advanced: privileged.then(|| AdvancedSection {
                        expanded: *advanced_expanded,
                        fields: advanced,
                    }),
                    edit_url: privileged.then(|| edit_url(bucket)),
                })
            }
        }
    }
}
